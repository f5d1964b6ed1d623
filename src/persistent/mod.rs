//! Persistent (immutable) finger trees.
//!
//! This module provides [`FingerTree`], a sequence annotated with a
//! [`Measure`]. What the tree is good at depends on the measure it carries:
//!
//! - [`Size`]: an indexed sequence with `len`, `get`, `split_at`
//! - [`Maximum`]: a max-priority queue with `max_element`, `extract_max`
//! - [`MeasureFn`]: any monoid computed by a closure
//!
//! # Structural Sharing
//!
//! Operations like `cons`, `append` or `split` create new versions without
//! copying the tree: only the path that changes is rebuilt, everything else is
//! shared with the input through reference counting.
//!
//! # Examples
//!
//! ```rust
//! use fingertree::persistent::{FingerTree, Size};
//!
//! let tree: FingerTree<i32, Size> = (1..=5).collect();
//! assert_eq!(tree.head(), Ok(&1));
//!
//! // Structural sharing: the original tree is preserved
//! let extended = tree.snoc(6);
//! assert_eq!(tree.len(), 5);     // Original unchanged
//! assert_eq!(extended.len(), 6); // New tree
//!
//! // Positional access is derived from the counting measure
//! assert_eq!(extended.get(5), Some(&6));
//! ```
//!
//! ## Priority queue
//!
//! ```rust
//! use fingertree::persistent::{FingerTree, Maximum};
//!
//! let queue: FingerTree<u8, Maximum> = [4, 8, 1].into_iter().collect();
//! let (highest, rest) = queue.extract_max().unwrap();
//! assert_eq!(highest, 8);
//! assert_eq!(rest.max_element(), Some(&4));
//! ```

// =============================================================================
// Reference Counter Type Alias
// =============================================================================

/// Reference-counted smart pointer type.
///
/// When the `arc` feature is enabled, this is `std::sync::Arc`,
/// which is thread-safe but has slightly higher overhead.
///
/// When the `arc` feature is disabled (default), this is `std::rc::Rc`,
/// which is faster but not thread-safe.
#[cfg(feature = "arc")]
pub(crate) type ReferenceCounter<T> = std::sync::Arc<T>;

#[cfg(not(feature = "arc"))]
pub(crate) type ReferenceCounter<T> = std::rc::Rc<T>;

mod error;
mod finger_tree;
mod measure;

pub use error::FingerTreeError;
pub use finger_tree::FingerTree;
pub use finger_tree::FingerTreeIntoIterator;
pub use finger_tree::FingerTreeIterator;
pub use measure::Maximum;
pub use measure::Measure;
pub use measure::MeasureFn;
pub use measure::Size;

// =============================================================================
// Thread Safety
// =============================================================================

#[cfg(feature = "arc")]
static_assertions::assert_impl_all!(FingerTree<i32, Size>: Send, Sync);
#[cfg(feature = "arc")]
static_assertions::assert_impl_all!(FingerTree<String, Size>: Send, Sync);
#[cfg(feature = "arc")]
static_assertions::assert_impl_all!(FingerTree<i64, Maximum>: Send, Sync);

#[cfg(not(feature = "arc"))]
static_assertions::assert_not_impl_any!(FingerTree<i32, Size>: Send, Sync);

// =============================================================================
// Tests
// =============================================================================


#[cfg(test)]
mod structural_sharing_tests {
    use super::{FingerTree, Size};
    use rstest::rstest;

    #[rstest]
    fn test_derived_versions_do_not_disturb_each_other() {
        let base: FingerTree<i32, Size> = (0..100).collect();
        let (left, right) = base.split_at(50);
        let shuffled = right.append(&left);
        let trimmed = base.tail().unwrap().init().unwrap();

        assert_eq!(base.to_vec(), (0..100).collect::<Vec<_>>());
        assert_eq!(shuffled.get(0), Some(&50));
        assert_eq!(shuffled.get(50), Some(&0));
        assert_eq!(trimmed.len(), 98);
        assert_eq!(trimmed.head(), Ok(&1));
    }
}
