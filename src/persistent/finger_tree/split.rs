//! Splitting and searching by a monotonic predicate over the running measure.
//!
//! Both walks start from an accumulated measure, add the measure of each
//! prefix element, then the spine, then each suffix element, and stop at the
//! first point where the predicate turns true. When it never does, the last
//! element is the focus; callers that need a defined boundary check the total
//! measure first.

use super::node::Element;
use super::tree::Tree;
use crate::persistent::measure::Measure;
use crate::typeclass::Monoid;

/// A tree cut around its focus element.
pub(crate) type TreeSplit<A, V> = (Tree<A, V>, Element<A, V>, Tree<A, V>);

impl<A, V: Monoid + Clone> Tree<A, V> {
    /// `None` only for the empty tree.
    pub(crate) fn split_tree<M, P>(
        &self,
        predicate: &mut P,
        accumulated: &V,
        measure: &M,
    ) -> Option<TreeSplit<A, V>>
    where
        M: Measure<A, Value = V>,
        P: FnMut(&V) -> bool,
    {
        match self {
            Self::Empty => None,
            Self::Single(element) => Some((Self::Empty, element.clone(), Self::Empty)),
            Self::Deep(deep) => {
                let through_prefix = accumulated.combine_ref(&deep.prefix.measure(measure));
                if predicate(&through_prefix) {
                    let (left, focus, right) =
                        deep.prefix.split(predicate, accumulated.clone(), measure);
                    return Some((
                        Self::from_optional_digit(left, measure),
                        focus,
                        Self::deep_left(right, &deep.spine, &deep.suffix, measure),
                    ));
                }

                let through_spine = through_prefix.combine_ref(&deep.spine.measure(measure));
                if !deep.spine.is_empty() && predicate(&through_spine) {
                    let (spine_left, node, spine_right) =
                        deep.spine.split_tree(predicate, &through_prefix, measure)?;
                    let before_node = through_prefix.combine(spine_left.measure(measure));
                    let (left, focus, right) =
                        node.node().to_digit().split(predicate, before_node, measure);
                    return Some((
                        Self::deep_right(&deep.prefix, &spine_left, left, measure),
                        focus,
                        Self::deep_left(right, &spine_right, &deep.suffix, measure),
                    ));
                }

                let (left, focus, right) = deep.suffix.split(predicate, through_spine, measure);
                Some((
                    Self::deep_right(&deep.prefix, &deep.spine, left, measure),
                    focus,
                    Self::from_optional_digit(right, measure),
                ))
            }
        }
    }

    /// Locates the split focus without rebuilding either side.
    ///
    /// Returns the running measure before the focus along with it.
    pub(crate) fn lookup<M, P>(
        &self,
        predicate: &mut P,
        accumulated: V,
        measure: &M,
    ) -> Option<(V, &Element<A, V>)>
    where
        M: Measure<A, Value = V>,
        P: FnMut(&V) -> bool,
    {
        match self {
            Self::Empty => None,
            Self::Single(element) => Some((accumulated, element)),
            Self::Deep(deep) => {
                let through_prefix = accumulated.combine_ref(&deep.prefix.measure(measure));
                if predicate(&through_prefix) {
                    return Some(deep.prefix.lookup(predicate, accumulated, measure));
                }

                let through_spine = through_prefix.combine_ref(&deep.spine.measure(measure));
                if !deep.spine.is_empty() && predicate(&through_spine) {
                    let (before_node, node) =
                        deep.spine.lookup(predicate, through_prefix, measure)?;
                    return Some(node.node().lookup(predicate, before_node, measure));
                }

                Some(deep.suffix.lookup(predicate, through_spine, measure))
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

    fn build(count: usize) -> TestTree {
        (0..count).fold(Tree::Empty, |tree, value| tree.snoc(Element::leaf(value), &Size))
    }

    fn values(tree: &TestTree) -> Vec<usize> {
        tree.fold_left(Vec::new(), &mut |mut accumulator, value: &usize| {
            accumulator.push(*value);
            accumulator
        })
    }

    #[rstest]
    fn test_split_empty_is_none() {
        let mut predicate = |count: &Sum<usize>| count.0 > 0;
        assert!(TestTree::Empty.split_tree(&mut predicate, &Sum(0), &Size).is_none());
        assert!(TestTree::Empty.lookup(&mut predicate, Sum(0), &Size).is_none());
    }

    #[rstest]
    fn test_split_at_every_index() {
        let count = 120;
        let tree = build(count);
        for index in 0..count {
            let (left, focus, right) = tree
                .split_tree(&mut |size: &Sum<usize>| size.0 > index, &Sum(0), &Size)
                .unwrap();
            assert_eq!(values(&left), (0..index).collect::<Vec<_>>());
            assert_eq!(*focus.value(), index);
            assert_eq!(values(&right), (index + 1..count).collect::<Vec<_>>());
            assert_eq!(left.measure(&Size), Sum(index));
            assert_eq!(right.measure(&Size), Sum(count - index - 1));
        }
    }

    #[rstest]
    fn test_lookup_at_every_index() {
        let count = 120;
        let tree = build(count);
        for index in 0..count {
            let (before, focus) = tree
                .lookup(&mut |size: &Sum<usize>| size.0 > index, Sum(0), &Size)
                .unwrap();
            assert_eq!(*focus.value(), index);
            assert_eq!(before, Sum(index));
        }
    }

    #[rstest]
    fn test_split_with_never_true_predicate_focuses_last() {
        let (left, focus, right) = build(10)
            .split_tree(&mut |_: &Sum<usize>| false, &Sum(0), &Size)
            .unwrap();
        assert_eq!(values(&left), (0..9).collect::<Vec<_>>());
        assert_eq!(*focus.value(), 9);
        assert!(right.is_empty());
    }

    #[rstest]
    fn test_split_parts_stay_usable() {
        let (left, _, right) = build(64)
            .split_tree(&mut |size: &Sum<usize>| size.0 > 30, &Sum(0), &Size)
            .unwrap();
        let rejoined = left.concat(&right, &Size).cons(Element::leaf(1000), &Size);
        assert_eq!(rejoined.measure(&Size), Sum(64));
        assert_eq!(*rejoined.first().unwrap().value(), 1000);
    }
}
