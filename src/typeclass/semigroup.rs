//! Semigroup type class - types with an associative binary operation.
//!
//! Every measure cached inside a finger tree is combined through this trait,
//! so the associativity law below is what makes those cached sums valid
//! regardless of how the tree happens to be shaped.
//!
//! # Laws
//!
//! For all `a`, `b`, `c` of type `T`:
//!
//! ```text
//! (a.combine(b)).combine(c) == a.combine(b.combine(c))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use fingertree::typeclass::{Semigroup, Sum};
//!
//! assert_eq!(String::from("12").combine(String::from("3")), "123");
//! assert_eq!(Sum::new(2).combine(Sum::new(3)), Sum::new(5));
//! ```

use std::ops::{Add, Mul};

use super::wrappers::{Max, Min, Product, Sum};

/// A type class for types with an associative binary operation.
///
/// Associativity is a precondition the implementor guarantees. It cannot be
/// checked at runtime.
pub trait Semigroup {
    /// Combines two values into one.
    #[must_use]
    fn combine(self, other: Self) -> Self;

    /// Combines two values by reference, returning a new value.
    ///
    /// The default implementation clones both values and calls `combine`.
    /// Types can override this for more efficient implementations.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fingertree::typeclass::Semigroup;
    ///
    /// let left = String::from("ab");
    /// let right = String::from("cd");
    /// assert_eq!(left.combine_ref(&right), "abcd");
    /// assert_eq!(left, "ab");
    /// ```
    #[must_use]
    fn combine_ref(&self, other: &Self) -> Self
    where
        Self: Clone,
    {
        self.clone().combine(other.clone())
    }

    /// Reduces all elements in an iterator using the semigroup operation.
    ///
    /// Returns `None` if the iterator is empty.
    fn reduce_all<I>(iterator: I) -> Option<Self>
    where
        I: IntoIterator<Item = Self>,
        Self: Sized,
    {
        iterator
            .into_iter()
            .reduce(|accumulator, element| accumulator.combine(element))
    }
}

impl Semigroup for String {
    fn combine(mut self, other: Self) -> Self {
        self.push_str(&other);
        self
    }

    fn combine_ref(&self, other: &Self) -> Self {
        let mut result = Self::with_capacity(self.len() + other.len());
        result.push_str(self);
        result.push_str(other);
        result
    }
}

impl<T: Clone> Semigroup for Vec<T> {
    fn combine(mut self, mut other: Self) -> Self {
        self.append(&mut other);
        self
    }

    fn combine_ref(&self, other: &Self) -> Self {
        let mut result = Self::with_capacity(self.len() + other.len());
        result.extend(self.iter().cloned());
        result.extend(other.iter().cloned());
        result
    }
}

/// `None` acts as the identity; two `Some` values combine their contents.
impl<T: Semigroup> Semigroup for Option<T> {
    fn combine(self, other: Self) -> Self {
        match (self, other) {
            (Some(left), Some(right)) => Some(left.combine(right)),
            (Some(value), None) | (None, Some(value)) => Some(value),
            (None, None) => None,
        }
    }
}

impl Semigroup for () {
    fn combine(self, _other: Self) -> Self {}
}

impl<A: Add<Output = A>> Semigroup for Sum<A> {
    fn combine(self, other: Self) -> Self {
        Self(self.0 + other.0)
    }
}

impl<A: Mul<Output = A>> Semigroup for Product<A> {
    fn combine(self, other: Self) -> Self {
        Self(self.0 * other.0)
    }
}

impl<A: Ord> Semigroup for Max<A> {
    fn combine(self, other: Self) -> Self {
        if self.0 >= other.0 { self } else { other }
    }
}

impl<A: Ord> Semigroup for Min<A> {
    fn combine(self, other: Self) -> Self {
        if self.0 <= other.0 { self } else { other }
    }
}

/// Pairs combine component-wise, which lets a tree carry two measures at once
/// (for example a count and a maximum).
impl<A: Semigroup, B: Semigroup> Semigroup for (A, B) {
    fn combine(self, other: Self) -> Self {
        (self.0.combine(other.0), self.1.combine(other.1))
    }
}

impl<A: Semigroup, B: Semigroup, C: Semigroup> Semigroup for (A, B, C) {
    fn combine(self, other: Self) -> Self {
        (
            self.0.combine(other.0),
            self.1.combine(other.1),
            self.2.combine(other.2),
        )
    }
}
