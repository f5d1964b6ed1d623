//! Error types for finger tree operations.

/// Errors surfaced by [`FingerTree`](super::FingerTree) operations.
///
/// # Examples
///
/// ```rust
/// use fingertree::persistent::{FingerTree, FingerTreeError, Size};
///
/// let tree: FingerTree<i32, Size> = FingerTree::default();
/// assert_eq!(
///     tree.head(),
///     Err(FingerTreeError::EmptyTree { operation: "head" })
/// );
/// assert_eq!(format!("{}", tree.head().unwrap_err()), "head: finger tree is empty");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FingerTreeError {
    /// An operation that needs at least one element was applied to an empty tree.
    EmptyTree {
        /// The name of the operation that failed.
        operation: &'static str,
    },
    /// A split or lookup predicate is false on the measure of the whole tree,
    /// so there is no element at which it becomes true.
    PredicateNeverSatisfied,
    /// A positional operation on a counting measure was given an index past
    /// the end of the tree.
    IndexOutOfBounds {
        /// The index that was requested.
        index: usize,
        /// The number of elements in the tree.
        length: usize,
    },
    /// A digit was built from fewer than 1 or more than 4 elements.
    ///
    /// The tree algorithms never produce this; seeing it means an internal
    /// invariant was broken.
    InvalidDigitSize {
        /// The number of elements the digit was built from.
        size: usize,
    },
}

impl std::fmt::Display for FingerTreeError {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyTree { operation } => {
                write!(formatter, "{operation}: finger tree is empty")
            }
            Self::PredicateNeverSatisfied => write!(
                formatter,
                "split predicate is false on the measure of the whole tree"
            ),
            Self::IndexOutOfBounds { index, length } => write!(
                formatter,
                "index {index} is out of bounds for finger tree of length {length}"
            ),
            Self::InvalidDigitSize { size } => write!(
                formatter,
                "digit must hold between 1 and 4 elements, got {size}"
            ),
        }
    }
}

impl std::error::Error for FingerTreeError {}
