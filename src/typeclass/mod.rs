//! Type class traits for monoidal summaries.
//!
//! This module provides the algebraic vocabulary finger tree measures are
//! written in:
//!
//! - [`Semigroup`]: Associative binary operations
//! - [`Monoid`]: Semigroup with identity element
//! - [`Foldable`]: Folding over structures to produce summary values
//!
//! ## Foundation Types
//!
//! - [`Sum`], [`Product`]: Numeric wrappers for different monoid operations
//! - [`Max`], [`Min`]: Bounded numeric wrappers
//! - [`Bounded`]: Trait for types with minimum and maximum values
//!
//! # Examples
//!
//! ## Using Semigroup
//!
//! ```rust
//! use fingertree::typeclass::Semigroup;
//!
//! // String concatenation
//! let hello = String::from("Hello, ");
//! let world = String::from("World!");
//! assert_eq!(hello.combine(world), "Hello, World!");
//!
//! // Vec concatenation
//! let vec1 = vec![1, 2];
//! let vec2 = vec![3, 4];
//! assert_eq!(vec1.combine(vec2), vec![1, 2, 3, 4]);
//! ```
//!
//! ## Using Monoid
//!
//! ```rust
//! use fingertree::typeclass::{Monoid, Semigroup, Sum};
//!
//! // Combining with identity element
//! let value = String::from("hello");
//! assert_eq!(String::empty().combine(value.clone()), value);
//!
//! // Folding a collection with combine_all
//! let numbers = vec![Sum::new(1), Sum::new(2), Sum::new(3)];
//! assert_eq!(Sum::combine_all(numbers), Sum::new(6));
//! ```

mod foldable;
mod monoid;
mod semigroup;
mod wrappers;

pub use foldable::Foldable;
pub use monoid::Monoid;
pub use semigroup::Semigroup;
pub use wrappers::{Bounded, Max, Min, Product, Sum};
