//! # fingertree
//!
//! Persistent finger trees annotated with monoidal measures.
//!
//! ## Overview
//!
//! A finger tree is an immutable sequence with cheap access to both ends and
//! cheap splitting and concatenation. Every node caches a summary of its
//! elements computed by a user-chosen [`Measure`](persistent::Measure), and the
//! choice of measure decides what the tree behaves as:
//!
//! - **Indexed sequence**: count elements with [`Size`](persistent::Size)
//! - **Priority queue**: keep the greatest element with
//!   [`Maximum`](persistent::Maximum)
//! - **Anything else**: summarize into any [`Monoid`](typeclass::Monoid)
//!   with [`MeasureFn`](persistent::MeasureFn) or a hand-written measure
//!
//! | Operation | Complexity |
//! |-----------|------------|
//! | `cons`, `snoc`, `uncons`, `unsnoc` | O(1) amortized |
//! | `head`, `last`, `measure` | O(1) |
//! | `append` | O(log(min(n, m))) |
//! | `split`, `lookup`, `get` | O(log n) |
//!
//! ## Feature Flags
//!
//! - `typeclass`: Semigroup, Monoid, Foldable and the numeric wrappers
//! - `persistent`: The finger tree itself
//! - `arc`: Share nodes through `Arc` so trees are `Send + Sync`
//! - `serde`: Serialize trees as sequences
//! - `tracing`: Emit structural events (digit overflow, spine borrowing)
//! - `full`: Enable all features except `arc`
//!
//! ## Example
//!
//! ```rust
//! use fingertree::prelude::*;
//!
//! let tree = [6, 5, 4, 3, 2, 1]
//!     .into_iter()
//!     .fold(FingerTree::new(Size), |tree, digit| tree.cons(digit));
//! assert_eq!(tree.measure(), Sum(6));
//!
//! let (left, focus, right) = tree.split(|size| size.0 > 3).unwrap();
//! assert_eq!(left.to_vec(), vec![1, 2, 3]);
//! assert_eq!(focus, 4);
//! assert_eq!(right.to_vec(), vec![5, 6]);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
// Note: Disabling redundant_closure_for_method_calls due to clippy 0.1.92 panic bug
#![allow(clippy::redundant_closure_for_method_calls)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types and traits.
///
/// # Usage
///
/// ```rust
/// use fingertree::prelude::*;
/// ```
pub mod prelude {

    #[cfg(feature = "typeclass")]
    pub use crate::typeclass::*;

    #[cfg(feature = "persistent")]
    pub use crate::persistent::*;
}

#[cfg(feature = "typeclass")]
pub mod typeclass;

#[cfg(feature = "persistent")]
pub mod persistent;
