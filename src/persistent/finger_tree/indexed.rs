//! Positional access for trees under a counting measure.
//!
//! Any measure whose value is `Sum<usize>` (the ready-made [`Size`], or a
//! custom one that counts elements) turns the finger tree into an indexed
//! sequence. Positions are found by splitting where the running count first
//! exceeds the index.
//!
//! [`Size`]: crate::persistent::Size

use super::FingerTree;
use crate::persistent::error::FingerTreeError;
use crate::persistent::measure::Measure;
use crate::typeclass::Sum;

impl<A, M> FingerTree<A, M>
where
    M: Measure<A, Value = Sum<usize>>,
{
    /// Returns the number of elements. O(1).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fingertree::persistent::{FingerTree, Size};
    ///
    /// let tree: FingerTree<i32, Size> = (0..10).collect();
    /// assert_eq!(tree.len(), 10);
    /// ```
    #[inline]
    pub fn len(&self) -> usize {
        self.measure().0
    }

    /// Returns the element at `index`, or `None` when out of bounds.
    ///
    /// # Complexity
    ///
    /// O(log(min(i, n - i)))
    pub fn get(&self, index: usize) -> Option<&A> {
        self.lookup(|count| count.0 > index).ok()
    }

    /// Splits into the first `index` elements and the rest.
    ///
    /// An index past the end puts every element on the left.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fingertree::persistent::{FingerTree, Size};
    ///
    /// let tree: FingerTree<i32, Size> = (0..5).collect();
    /// let (left, right) = tree.split_at(2);
    /// assert_eq!(left.to_vec(), vec![0, 1]);
    /// assert_eq!(right.to_vec(), vec![2, 3, 4]);
    /// ```
    pub fn split_at(&self, index: usize) -> (Self, Self) {
        self.split_at_boundary(|count| count.0 > index)
    }

    /// Returns a new tree with `element` inserted before position `index`.
    ///
    /// # Errors
    ///
    /// [`FingerTreeError::IndexOutOfBounds`] if `index > len()`.
    pub fn insert_at(&self, index: usize, element: A) -> Result<Self, FingerTreeError> {
        let length = self.len();
        if index > length {
            return Err(FingerTreeError::IndexOutOfBounds { index, length });
        }
        let (left, right) = self.split_at(index);
        Ok(left.snoc(element).append(&right))
    }

    /// Removes the element at `index`, returning it with the remaining tree.
    ///
    /// # Errors
    ///
    /// [`FingerTreeError::IndexOutOfBounds`] if `index >= len()`.
    pub fn remove_at(&self, index: usize) -> Result<(A, Self), FingerTreeError>
    where
        A: Clone,
    {
        let length = self.len();
        if index >= length {
            return Err(FingerTreeError::IndexOutOfBounds { index, length });
        }
        let (left, removed, right) = self.split(|count| count.0 > index)?;
        Ok((removed, left.append(&right)))
    }

    /// Returns a new tree with the element at `index` replaced.
    ///
    /// # Errors
    ///
    /// [`FingerTreeError::IndexOutOfBounds`] if `index >= len()`.
    pub fn update_at(&self, index: usize, element: A) -> Result<Self, FingerTreeError> {
        let length = self.len();
        if index >= length {
            return Err(FingerTreeError::IndexOutOfBounds { index, length });
        }
        let (left, right) = self.split_at(index);
        let rest = right.tail()?;
        Ok(left.snoc(element).append(&rest))
    }
}
