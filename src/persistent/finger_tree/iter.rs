//! Iterators over finger trees.

use std::collections::VecDeque;
use std::iter::FusedIterator;

use super::FingerTree;
use super::node::Element;
use super::tree::Tree;
use crate::persistent::measure::Measure;

/// A not-yet-expanded part of the tree being walked.
enum Piece<'a, A, V> {
    Tree(&'a Tree<A, V>),
    Element(&'a Element<A, V>),
}

/// A borrowing iterator over the elements of a [`FingerTree`], front to back.
///
/// Subtrees are expanded lazily from whichever end is consumed, so taking the
/// first or last few elements costs O(log n) rather than O(n).
///
/// # Examples
///
/// ```rust
/// use fingertree::persistent::{FingerTree, Size};
///
/// let tree: FingerTree<i32, Size> = (1..=5).collect();
/// let collected: Vec<&i32> = tree.iter().collect();
/// assert_eq!(collected, vec![&1, &2, &3, &4, &5]);
///
/// let reversed: Vec<&i32> = tree.iter().rev().collect();
/// assert_eq!(reversed, vec![&5, &4, &3, &2, &1]);
/// ```
pub struct FingerTreeIterator<'a, A, M: Measure<A>> {
    pending: VecDeque<Piece<'a, A, M::Value>>,
}

impl<'a, A, M: Measure<A>> FingerTreeIterator<'a, A, M> {
    pub(super) fn new(root: &'a Tree<A, M::Value>) -> Self {
        let mut pending = VecDeque::new();
        pending.push_back(Piece::Tree(root));
        Self { pending }
    }
}

impl<'a, A, M: Measure<A>> Iterator for FingerTreeIterator<'a, A, M> {
    type Item = &'a A;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(piece) = self.pending.pop_front() {
            match piece {
                Piece::Element(Element::Leaf(value)) => return Some(&**value),
                Piece::Element(Element::Branch(node)) => {
                    for child in node.children().into_iter().rev() {
                        self.pending.push_front(Piece::Element(child));
                    }
                }
                Piece::Tree(Tree::Empty) => {}
                Piece::Tree(Tree::Single(element)) => {
                    self.pending.push_front(Piece::Element(element));
                }
                Piece::Tree(Tree::Deep(deep)) => {
                    for element in deep.suffix.elements().into_iter().rev() {
                        self.pending.push_front(Piece::Element(element));
                    }
                    self.pending.push_front(Piece::Tree(&deep.spine));
                    for element in deep.prefix.elements().into_iter().rev() {
                        self.pending.push_front(Piece::Element(element));
                    }
                }
            }
        }
        None
    }
}

impl<A, M: Measure<A>> DoubleEndedIterator for FingerTreeIterator<'_, A, M> {
    fn next_back(&mut self) -> Option<Self::Item> {
        while let Some(piece) = self.pending.pop_back() {
            match piece {
                Piece::Element(Element::Leaf(value)) => return Some(&**value),
                Piece::Element(Element::Branch(node)) => {
                    for child in node.children() {
                        self.pending.push_back(Piece::Element(child));
                    }
                }
                Piece::Tree(Tree::Empty) => {}
                Piece::Tree(Tree::Single(element)) => {
                    self.pending.push_back(Piece::Element(element));
                }
                Piece::Tree(Tree::Deep(deep)) => {
                    for element in deep.prefix.elements() {
                        self.pending.push_back(Piece::Element(element));
                    }
                    self.pending.push_back(Piece::Tree(&deep.spine));
                    for element in deep.suffix.elements() {
                        self.pending.push_back(Piece::Element(element));
                    }
                }
            }
        }
        None
    }
}

impl<A, M: Measure<A>> FusedIterator for FingerTreeIterator<'_, A, M> {}

/// An owning iterator over the elements of a [`FingerTree`].
///
/// Each step is an amortized O(1) `uncons` (or `unsnoc` from the back).
pub struct FingerTreeIntoIterator<A, M: Measure<A>> {
    tree: FingerTree<A, M>,
}

impl<A, M: Measure<A>> FingerTreeIntoIterator<A, M> {
    pub(super) const fn new(tree: FingerTree<A, M>) -> Self {
        Self { tree }
    }
}

impl<A: Clone, M: Measure<A>> Iterator for FingerTreeIntoIterator<A, M> {
    type Item = A;

    fn next(&mut self) -> Option<Self::Item> {
        let (head, rest) = self.tree.uncons()?;
        self.tree = rest;
        Some(head)
    }
}

impl<A: Clone, M: Measure<A>> DoubleEndedIterator for FingerTreeIntoIterator<A, M> {
    fn next_back(&mut self) -> Option<Self::Item> {
        let (rest, last) = self.tree.unsnoc()?;
        self.tree = rest;
        Some(last)
    }
}

impl<A: Clone, M: Measure<A>> FusedIterator for FingerTreeIntoIterator<A, M> {}

impl<'a, A, M: Measure<A>> IntoIterator for &'a FingerTree<A, M> {
    type Item = &'a A;
    type IntoIter = FingerTreeIterator<'a, A, M>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<A: Clone, M: Measure<A>> IntoIterator for FingerTree<A, M> {
    type Item = A;
    type IntoIter = FingerTreeIntoIterator<A, M>;

    fn into_iter(self) -> Self::IntoIter {
        FingerTreeIntoIterator::new(self)
    }
}

#[cfg(test)]
mod tests {
    use crate::persistent::{FingerTree, Size};
    use rstest::rstest;

    fn tree(count: i32) -> FingerTree<i32, Size> {
        (0..count).collect()
    }

    #[rstest]
    #[case(0)]
    #[case(1)]
    #[case(9)]
    #[case(200)]
    fn test_iter_matches_range(#[case] count: i32) {
        let tree = tree(count);
        assert_eq!(
            tree.iter().copied().collect::<Vec<_>>(),
            (0..count).collect::<Vec<_>>()
        );
        assert_eq!(
            tree.iter().rev().copied().collect::<Vec<_>>(),
            (0..count).rev().collect::<Vec<_>>()
        );
    }

    #[rstest]
    fn test_iter_meets_in_the_middle() {
        let tree = tree(50);
        let mut iterator = tree.iter();
        let mut front = Vec::new();
        let mut back = Vec::new();
        loop {
            match iterator.next() {
                Some(value) => front.push(*value),
                None => break,
            }
            match iterator.next_back() {
                Some(value) => back.push(*value),
                None => break,
            }
        }
        back.reverse();
        front.extend(back);
        assert_eq!(front, (0..50).collect::<Vec<_>>());
    }

    #[rstest]
    fn test_iter_is_fused() {
        let tree = tree(2);
        let mut iterator = tree.iter();
        assert_eq!(iterator.next(), Some(&0));
        assert_eq!(iterator.next(), Some(&1));
        assert_eq!(iterator.next(), None);
        assert_eq!(iterator.next_back(), None);
    }

    #[rstest]
    fn test_into_iter_owned_both_ends() {
        let mut iterator = tree(10).into_iter();
        assert_eq!(iterator.next(), Some(0));
        assert_eq!(iterator.next_back(), Some(9));
        assert_eq!(iterator.collect::<Vec<_>>(), (1..9).collect::<Vec<_>>());
    }

    #[rstest]
    fn test_for_loop_over_reference() {
        let tree = tree(5);
        let mut total = 0;
        for value in &tree {
            total += value;
        }
        assert_eq!(total, 10);
    }
}
