//! Concatenation of two trees of the same rank.

use smallvec::SmallVec;

use super::node::{Element, group_into_nodes};
use super::tree::Tree;
use crate::persistent::measure::Measure;
use crate::typeclass::Monoid;

impl<A, V: Monoid + Clone> Tree<A, V> {
    pub(crate) fn concat<M>(&self, other: &Self, measure: &M) -> Self
    where
        M: Measure<A, Value = V>,
    {
        Self::app3(self, &[], other, measure)
    }

    /// Joins `left`, then the `middle` elements, then `right`.
    ///
    /// Two deep trees keep the outer digits and recurse on their spines with
    /// the inner digits and `middle` regrouped into nodes one rank up.
    fn app3<M>(left: &Self, middle: &[Element<A, V>], right: &Self, measure: &M) -> Self
    where
        M: Measure<A, Value = V>,
    {
        match (left, right) {
            (Self::Empty, _) => middle
                .iter()
                .rev()
                .fold(right.clone(), |tree, element| tree.cons(element.clone(), measure)),
            (_, Self::Empty) => middle
                .iter()
                .fold(left.clone(), |tree, element| tree.snoc(element.clone(), measure)),
            (Self::Single(element), _) => {
                Self::app3(&Self::Empty, middle, right, measure).cons(element.clone(), measure)
            }
            (_, Self::Single(element)) => {
                Self::app3(left, middle, &Self::Empty, measure).snoc(element.clone(), measure)
            }
            (Self::Deep(left_deep), Self::Deep(right_deep)) => {
                #[cfg(feature = "tracing")]
                tracing::trace!(
                    middle = middle.len(),
                    "concatenating deep trees, regrouping inner digits"
                );
                let mut inner: SmallVec<[Element<A, V>; 12]> = SmallVec::new();
                inner.extend(left_deep.suffix.to_elements());
                inner.extend(middle.iter().cloned());
                inner.extend(right_deep.prefix.to_elements());
                let nodes = group_into_nodes(&inner, measure);
                Self::deep(
                    left_deep.prefix.clone(),
                    Self::app3(&left_deep.spine, &nodes, &right_deep.spine, measure),
                    right_deep.suffix.clone(),
                    measure,
                )
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::persistent::measure::Size;
    use crate::typeclass::Sum;
    use rstest::rstest;

    type TestTree = Tree<usize, Sum<usize>>;

    fn build(range: std::ops::Range<usize>) -> TestTree {
        range.fold(Tree::Empty, |tree, value| tree.snoc(Element::leaf(value), &Size))
    }

    fn values(tree: &TestTree) -> Vec<usize> {
        tree.fold_left(Vec::new(), &mut |mut accumulator, value: &usize| {
            accumulator.push(*value);
            accumulator
        })
    }

    #[rstest]
    #[case(0, 0)]
    #[case(0, 5)]
    #[case(1, 0)]
    #[case(1, 1)]
    #[case(1, 9)]
    #[case(9, 1)]
    #[case(8, 8)]
    #[case(13, 100)]
    #[case(250, 37)]
    fn test_concat_preserves_order_and_measure(#[case] left: usize, #[case] right: usize) {
        let joined = build(0..left).concat(&build(left..left + right), &Size);
        assert_eq!(values(&joined), (0..left + right).collect::<Vec<_>>());
        assert_eq!(joined.measure(&Size), Sum(left + right));
    }

    #[rstest]
    fn test_concat_leaves_inputs_untouched() {
        let left = build(0..20);
        let right = build(20..40);
        let _joined = left.concat(&right, &Size);
        assert_eq!(values(&left), (0..20).collect::<Vec<_>>());
        assert_eq!(values(&right), (20..40).collect::<Vec<_>>());
    }

    #[rstest]
    fn test_concat_result_supports_deque_operations() {
        let joined = build(0..30).concat(&build(30..60), &Size);
        let (head, rest) = joined.uncons(&Size).unwrap();
        let (_, last) = rest.unsnoc(&Size).unwrap();
        assert_eq!(*head.value(), 0);
        assert_eq!(*last.value(), 59);
    }
}
