//! Max-priority queue operations for trees under the [`Maximum`] measure.
//!
//! Elements keep their insertion order; the cached maxima let the highest
//! element be found and removed in O(log n). Ties go to the element inserted
//! first.

use super::FingerTree;
use crate::persistent::measure::Maximum;
use crate::typeclass::{Bounded, Max};

impl<A: Ord + Bounded + Clone> FingerTree<A, Maximum> {
    /// Returns the greatest element, or `None` when the tree is empty.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fingertree::persistent::{FingerTree, Maximum};
    ///
    /// let queue: FingerTree<u32, Maximum> = [3, 9, 4].into_iter().collect();
    /// assert_eq!(queue.max_element(), Some(&9));
    /// ```
    pub fn max_element(&self) -> Option<&A> {
        let Max(highest) = self.measure();
        self.lookup(|running: &Max<A>| running.0 >= highest).ok()
    }

    /// Removes the greatest element, returning it with the remaining queue.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fingertree::persistent::{FingerTree, Maximum};
    ///
    /// let queue: FingerTree<u32, Maximum> = [3, 9, 4].into_iter().collect();
    /// let (highest, rest) = queue.extract_max().unwrap();
    /// assert_eq!(highest, 9);
    /// assert_eq!(rest.to_vec(), vec![3, 4]);
    /// ```
    pub fn extract_max(&self) -> Option<(A, Self)> {
        let Max(highest) = self.measure();
        let (left, focus, right) = self.split(|running: &Max<A>| running.0 >= highest).ok()?;
        Some((focus, left.append(&right)))
    }
}
