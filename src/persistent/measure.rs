//! Measures: how a finger tree summarizes its elements.
//!
//! A [`Measure`] maps every element to a value of a [`Monoid`]. The tree caches
//! the combined measure of each node, so the measure of any subtree is known in
//! O(1) and a monotonic predicate over the running measure can be searched in
//! O(log n).
//!
//! The choice of measure decides what the tree is:
//!
//! | Measure | Value | Behaves as |
//! |---------|-------|------------|
//! | [`Size`] | `Sum<usize>` | indexed sequence |
//! | [`Maximum`] | `Max<A>` | max-priority queue |
//! | [`MeasureFn`] | any monoid | whatever the closure computes |
//!
//! # Preconditions
//!
//! The monoid laws (associative `combine`, two-sided identity `empty`) are the
//! caller's obligation. A measure that breaks them yields cached values that
//! disagree with a left-to-right recomputation.

use std::fmt;
use std::marker::PhantomData;

use super::ReferenceCounter;
use crate::typeclass::{Bounded, Max, Monoid, Sum};

/// Maps elements of type `A` to a monoidal summary.
///
/// Measures are cloned into every tree derived from the one they were supplied
/// to, so they should be cheap to clone (typically zero-sized).
///
/// # Examples
///
/// ```rust
/// use fingertree::persistent::{FingerTree, Measure};
/// use fingertree::typeclass::Sum;
///
/// #[derive(Clone)]
/// struct ByteLength;
///
/// impl Measure<String> for ByteLength {
///     type Value = Sum<usize>;
///
///     fn measure(&self, element: &String) -> Sum<usize> {
///         Sum(element.len())
///     }
/// }
///
/// let tree = FingerTree::new(ByteLength)
///     .snoc(String::from("finger"))
///     .snoc(String::from("tree"));
/// assert_eq!(tree.measure(), Sum(10));
/// ```
pub trait Measure<A>: Clone {
    /// The monoid the elements are summarized into.
    type Value: Monoid + Clone;

    /// Measures a single element.
    fn measure(&self, element: &A) -> Self::Value;
}

/// Counting measure: every element measures `Sum(1)`.
///
/// Gives a finger tree indexed-sequence behavior: `len`, `get`, `split_at`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Size;

impl<A> Measure<A> for Size {
    type Value = Sum<usize>;

    #[inline]
    fn measure(&self, _element: &A) -> Sum<usize> {
        Sum(1)
    }
}

/// Max-priority measure: every element measures itself wrapped in [`Max`].
///
/// Gives a finger tree priority-queue behavior: `max_element`, `extract_max`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Maximum;

impl<A: Ord + Bounded + Clone> Measure<A> for Maximum {
    type Value = Max<A>;

    #[inline]
    fn measure(&self, element: &A) -> Max<A> {
        Max(element.clone())
    }
}

/// A measure backed by a closure.
///
/// The closure is reference counted, so cloning the measure (which every
/// derived tree does) is O(1).
///
/// # Examples
///
/// ```rust
/// use fingertree::persistent::{FingerTree, MeasureFn};
///
/// let digits = MeasureFn::new(|digit: &u32| digit.to_string());
/// let tree = FingerTree::from_iter_with(digits, [1, 2, 3]);
/// assert_eq!(tree.measure(), "123");
/// ```
pub struct MeasureFn<F, V> {
    function: ReferenceCounter<F>,
    marker: PhantomData<fn() -> V>,
}

impl<F, V> MeasureFn<F, V> {
    /// Wraps a measuring closure.
    pub fn new(function: F) -> Self {
        Self {
            function: ReferenceCounter::new(function),
            marker: PhantomData,
        }
    }
}

impl<F, V> Clone for MeasureFn<F, V> {
    fn clone(&self) -> Self {
        Self {
            function: ReferenceCounter::clone(&self.function),
            marker: PhantomData,
        }
    }
}

impl<F, V> fmt::Debug for MeasureFn<F, V> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_struct("MeasureFn").finish_non_exhaustive()
    }
}

impl<A, F, V> Measure<A> for MeasureFn<F, V>
where
    F: Fn(&A) -> V,
    V: Monoid + Clone,
{
    type Value = V;

    #[inline]
    fn measure(&self, element: &A) -> V {
        (self.function)(element)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn size_measures_one_per_element() {
        assert_eq!(Measure::<&str>::measure(&Size, &"anything"), Sum(1));
    }

    #[rstest]
    fn maximum_measures_element_itself() {
        assert_eq!(Maximum.measure(&17_i32), Max(17));
    }

    #[rstest]
    fn measure_fn_applies_closure() {
        let length = MeasureFn::new(|text: &String| Sum(text.len()));
        assert_eq!(length.measure(&String::from("four")), Sum(4));
    }

    #[rstest]
    fn measure_fn_clone_shares_closure() {
        let original = MeasureFn::new(|value: &i32| Sum(*value));
        let cloned = original.clone();
        assert_eq!(ReferenceCounter::strong_count(&original.function), 2);
        assert_eq!(cloned.measure(&5), Sum(5));
    }
}
