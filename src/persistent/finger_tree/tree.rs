//! The untyped-measure tree shared by every rank.
//!
//! [`Tree`] knows nothing about the measure instance; each operation receives
//! it as a parameter. The public [`FingerTree`](super::FingerTree) owns the
//! measure and threads it through.

use super::digit::Digit;
use super::node::{Element, Node};
use crate::persistent::ReferenceCounter;
use crate::persistent::measure::Measure;
use crate::typeclass::Monoid;

pub(crate) enum Tree<A, V> {
    Empty,
    Single(Element<A, V>),
    Deep(ReferenceCounter<DeepTree<A, V>>),
}

pub(crate) struct DeepTree<A, V> {
    pub(crate) measure: V,
    pub(crate) prefix: Digit<A, V>,
    pub(crate) spine: Tree<A, V>,
    pub(crate) suffix: Digit<A, V>,
}

impl<A, V> Clone for Tree<A, V> {
    fn clone(&self) -> Self {
        match self {
            Self::Empty => Self::Empty,
            Self::Single(element) => Self::Single(element.clone()),
            Self::Deep(deep) => Self::Deep(deep.clone()),
        }
    }
}

impl<A, V> Tree<A, V> {
    pub(crate) const fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    pub(crate) fn first(&self) -> Option<&Element<A, V>> {
        match self {
            Self::Empty => None,
            Self::Single(element) => Some(element),
            Self::Deep(deep) => Some(deep.prefix.first()),
        }
    }

    pub(crate) fn last(&self) -> Option<&Element<A, V>> {
        match self {
            Self::Empty => None,
            Self::Single(element) => Some(element),
            Self::Deep(deep) => Some(deep.suffix.last()),
        }
    }

    /// Number of spine ranks below this one that hold a `Deep` tree.
    pub(crate) fn depth(&self) -> usize {
        let mut depth = 0;
        let mut current = self;
        while let Self::Deep(deep) = current {
            depth += 1;
            current = &deep.spine;
        }
        depth
    }

    /// Elements of this rank, left to right, flattened to user values.
    pub(crate) fn fold_left<'a, B, F>(&'a self, init: B, function: &mut F) -> B
    where
        F: FnMut(B, &'a A) -> B,
    {
        match self {
            Self::Empty => init,
            Self::Single(element) => fold_element_left(element, init, function),
            Self::Deep(deep) => {
                let accumulator = deep.prefix.fold_left(init, |accumulator, element| {
                    fold_element_left(element, accumulator, function)
                });
                let accumulator = deep.spine.fold_left(accumulator, function);
                deep.suffix.fold_left(accumulator, |accumulator, element| {
                    fold_element_left(element, accumulator, function)
                })
            }
        }
    }

    pub(crate) fn fold_right<'a, B, F>(&'a self, init: B, function: &mut F) -> B
    where
        F: FnMut(&'a A, B) -> B,
    {
        match self {
            Self::Empty => init,
            Self::Single(element) => fold_element_right(element, init, function),
            Self::Deep(deep) => {
                let accumulator = deep.suffix.fold_right(init, |element, accumulator| {
                    fold_element_right(element, accumulator, function)
                });
                let accumulator = deep.spine.fold_right(accumulator, function);
                deep.prefix.fold_right(accumulator, |element, accumulator| {
                    fold_element_right(element, accumulator, function)
                })
            }
        }
    }
}

impl<A, V: Monoid + Clone> Tree<A, V> {
    pub(crate) fn deep<M>(
        prefix: Digit<A, V>,
        spine: Self,
        suffix: Digit<A, V>,
        measure: &M,
    ) -> Self
    where
        M: Measure<A, Value = V>,
    {
        let cached = prefix
            .measure(measure)
            .combine(spine.measure(measure))
            .combine(suffix.measure(measure));
        Self::Deep(ReferenceCounter::new(DeepTree {
            measure: cached,
            prefix,
            spine,
            suffix,
        }))
    }

    /// O(1): `Deep` trees and branches carry cached measures, and a `Single`
    /// leaf is measured once.
    pub(crate) fn measure<M>(&self, measure: &M) -> V
    where
        M: Measure<A, Value = V>,
    {
        match self {
            Self::Empty => V::empty(),
            Self::Single(element) => element.measure(measure),
            Self::Deep(deep) => deep.measure.clone(),
        }
    }

    pub(crate) fn cons<M>(&self, element: Element<A, V>, measure: &M) -> Self
    where
        M: Measure<A, Value = V>,
    {
        match self {
            Self::Empty => Self::Single(element),
            Self::Single(existing) => Self::deep(
                Digit::One(element),
                Self::Empty,
                Digit::One(existing.clone()),
                measure,
            ),
            Self::Deep(deep) => match deep.prefix.prepend(element.clone()) {
                Some(prefix) => {
                    Self::deep(prefix, deep.spine.clone(), deep.suffix.clone(), measure)
                }
                None => {
                    let Digit::Four(first, second, third, fourth) = &deep.prefix else {
                        unreachable!("only a full prefix rejects prepend")
                    };
                    #[cfg(feature = "tracing")]
                    tracing::trace!(
                        depth = self.depth(),
                        "prefix overflow, pushing Node3 into spine"
                    );
                    let node = Node::node3(second.clone(), third.clone(), fourth.clone(), measure);
                    Self::deep(
                        Digit::Two(element, first.clone()),
                        deep.spine.cons(Element::branch(node), measure),
                        deep.suffix.clone(),
                        measure,
                    )
                }
            },
        }
    }

    pub(crate) fn snoc<M>(&self, element: Element<A, V>, measure: &M) -> Self
    where
        M: Measure<A, Value = V>,
    {
        match self {
            Self::Empty => Self::Single(element),
            Self::Single(existing) => Self::deep(
                Digit::One(existing.clone()),
                Self::Empty,
                Digit::One(element),
                measure,
            ),
            Self::Deep(deep) => match deep.suffix.append(element.clone()) {
                Some(suffix) => {
                    Self::deep(deep.prefix.clone(), deep.spine.clone(), suffix, measure)
                }
                None => {
                    let Digit::Four(first, second, third, fourth) = &deep.suffix else {
                        unreachable!("only a full suffix rejects append")
                    };
                    #[cfg(feature = "tracing")]
                    tracing::trace!(
                        depth = self.depth(),
                        "suffix overflow, pushing Node3 into spine"
                    );
                    let node = Node::node3(first.clone(), second.clone(), third.clone(), measure);
                    Self::deep(
                        deep.prefix.clone(),
                        deep.spine.snoc(Element::branch(node), measure),
                        Digit::Two(fourth.clone(), element),
                        measure,
                    )
                }
            },
        }
    }

    pub(crate) fn uncons<M>(&self, measure: &M) -> Option<(Element<A, V>, Self)>
    where
        M: Measure<A, Value = V>,
    {
        match self {
            Self::Empty => None,
            Self::Single(element) => Some((element.clone(), Self::Empty)),
            Self::Deep(deep) => {
                let (head, prefix) = deep.prefix.pop_front();
                Some((
                    head,
                    Self::deep_left(prefix, &deep.spine, &deep.suffix, measure),
                ))
            }
        }
    }

    pub(crate) fn unsnoc<M>(&self, measure: &M) -> Option<(Self, Element<A, V>)>
    where
        M: Measure<A, Value = V>,
    {
        match self {
            Self::Empty => None,
            Self::Single(element) => Some((Self::Empty, element.clone())),
            Self::Deep(deep) => {
                let (suffix, last) = deep.suffix.pop_back();
                Some((
                    Self::deep_right(&deep.prefix, &deep.spine, suffix, measure),
                    last,
                ))
            }
        }
    }

    /// Rebuilds a deep tree whose prefix may have run out. An empty prefix is
    /// refilled from the spine's first node, or the suffix alone becomes the
    /// tree when the spine is empty too.
    pub(crate) fn deep_left<M>(
        prefix: Option<Digit<A, V>>,
        spine: &Self,
        suffix: &Digit<A, V>,
        measure: &M,
    ) -> Self
    where
        M: Measure<A, Value = V>,
    {
        if let Some(prefix) = prefix {
            return Self::deep(prefix, spine.clone(), suffix.clone(), measure);
        }
        match spine.uncons(measure) {
            None => suffix.to_tree(measure),
            Some((node, rest)) => {
                #[cfg(feature = "tracing")]
                tracing::trace!("prefix underflow, borrowing node from spine");
                Self::deep(node.node().to_digit(), rest, suffix.clone(), measure)
            }
        }
    }

    /// Mirror image of [`Self::deep_left`] for an exhausted suffix.
    pub(crate) fn deep_right<M>(
        prefix: &Digit<A, V>,
        spine: &Self,
        suffix: Option<Digit<A, V>>,
        measure: &M,
    ) -> Self
    where
        M: Measure<A, Value = V>,
    {
        if let Some(suffix) = suffix {
            return Self::deep(prefix.clone(), spine.clone(), suffix, measure);
        }
        match spine.unsnoc(measure) {
            None => prefix.to_tree(measure),
            Some((rest, node)) => {
                #[cfg(feature = "tracing")]
                tracing::trace!("suffix underflow, borrowing node from spine");
                Self::deep(prefix.clone(), rest, node.node().to_digit(), measure)
            }
        }
    }

    pub(crate) fn from_optional_digit<M>(digit: Option<Digit<A, V>>, measure: &M) -> Self
    where
        M: Measure<A, Value = V>,
    {
        digit.map_or(Self::Empty, |digit| digit.to_tree(measure))
    }
}

fn fold_element_left<'a, A, V, B, F>(element: &'a Element<A, V>, init: B, function: &mut F) -> B
where
    F: FnMut(B, &'a A) -> B,
{
    match element {
        Element::Leaf(value) => function(init, value),
        Element::Branch(node) => node.fold_left(init, |accumulator, child| {
            fold_element_left(child, accumulator, function)
        }),
    }
}

fn fold_element_right<'a, A, V, B, F>(element: &'a Element<A, V>, init: B, function: &mut F) -> B
where
    F: FnMut(&'a A, B) -> B,
{
    match element {
        Element::Leaf(value) => function(value, init),
        Element::Branch(node) => node.fold_right(init, |child, accumulator| {
            fold_element_right(child, accumulator, function)
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::persistent::measure::Size;
    use crate::typeclass::Sum;
    use rstest::rstest;

    type TestTree = Tree<usize, Sum<usize>>;

    fn build_by_cons(count: usize) -> TestTree {
        (0..count)
            .rev()
            .fold(Tree::Empty, |tree, value| tree.cons(Element::leaf(value), &Size))
    }

    fn build_by_snoc(count: usize) -> TestTree {
        (0..count).fold(Tree::Empty, |tree, value| tree.snoc(Element::leaf(value), &Size))
    }

    fn values(tree: &TestTree) -> Vec<usize> {
        tree.fold_left(Vec::new(), &mut |mut accumulator, value: &usize| {
            accumulator.push(*value);
            accumulator
        })
    }

    #[rstest]
    fn test_empty_tree() {
        let tree = TestTree::Empty;
        assert!(tree.is_empty());
        assert!(tree.first().is_none());
        assert_eq!(tree.measure(&Size), Sum(0));
        assert!(tree.uncons(&Size).is_none());
        assert!(tree.unsnoc(&Size).is_none());
    }

    #[rstest]
    fn test_cons_into_single_makes_deep() {
        let tree = build_by_cons(2);
        let Tree::Deep(deep) = &tree else {
            panic!("expected a deep tree");
        };
        assert_eq!(deep.prefix.len(), 1);
        assert!(deep.spine.is_empty());
        assert_eq!(deep.suffix.len(), 1);
        assert_eq!(values(&tree), vec![0, 1]);
    }

    #[rstest]
    fn test_full_prefix_pushes_node3_into_spine() {
        let full_prefix = build_by_cons(5);
        let Tree::Deep(deep) = &full_prefix else {
            panic!("expected a deep tree");
        };
        assert_eq!(deep.prefix.len(), 4);
        assert!(deep.spine.is_empty());

        let overflowed = full_prefix.cons(Element::leaf(100), &Size);
        let Tree::Deep(deep) = &overflowed else {
            panic!("expected a deep tree");
        };
        assert_eq!(deep.prefix.len(), 2);
        let Tree::Single(element) = &deep.spine else {
            panic!("expected a single spine");
        };
        assert_eq!(element.node().len(), 3);
        assert_eq!(values(&overflowed), vec![100, 0, 1, 2, 3, 4]);
    }

    #[rstest]
    fn test_full_suffix_pushes_node3_into_spine() {
        let tree = build_by_snoc(6);
        let Tree::Deep(deep) = &tree else {
            panic!("expected a deep tree");
        };
        assert_eq!(deep.suffix.len(), 2);
        assert!(matches!(deep.spine, Tree::Single(_)));
        assert_eq!(values(&tree), (0..6).collect::<Vec<_>>());
    }

    #[rstest]
    #[case(1)]
    #[case(7)]
    #[case(50)]
    #[case(333)]
    fn test_measure_is_cached_per_rank(#[case] count: usize) {
        assert_eq!(build_by_cons(count).measure(&Size), Sum(count));
        assert_eq!(build_by_snoc(count).measure(&Size), Sum(count));
    }

    #[rstest]
    fn test_uncons_drains_in_order() {
        let mut tree = build_by_snoc(40);
        let mut drained = Vec::new();
        while let Some((head, rest)) = tree.uncons(&Size) {
            drained.push(*head.value());
            assert_eq!(rest.measure(&Size), Sum(40 - drained.len()));
            tree = rest;
        }
        assert_eq!(drained, (0..40).collect::<Vec<_>>());
    }

    #[rstest]
    fn test_unsnoc_drains_in_reverse() {
        let mut tree = build_by_cons(40);
        let mut drained = Vec::new();
        while let Some((rest, last)) = tree.unsnoc(&Size) {
            drained.push(*last.value());
            tree = rest;
        }
        assert_eq!(drained, (0..40).rev().collect::<Vec<_>>());
    }

    #[rstest]
    fn test_fold_right_visits_backwards() {
        let tree = build_by_snoc(20);
        let visited = tree.fold_right(
            Vec::new(),
            &mut |value: &usize, mut accumulator: Vec<usize>| {
                accumulator.push(*value);
                accumulator
            },
        );
        assert_eq!(visited, (0..20).rev().collect::<Vec<_>>());
    }

    #[rstest]
    fn test_depth_grows_logarithmically() {
        assert_eq!(TestTree::Empty.depth(), 0);
        assert_eq!(build_by_snoc(1).depth(), 0);
        assert_eq!(build_by_snoc(8).depth(), 1);
        assert!(build_by_snoc(1000).depth() <= 8);
    }

    #[rstest]
    fn test_deep_left_collapses_suffix_when_spine_empty() {
        let suffix = Digit::Three(Element::leaf(1), Element::leaf(2), Element::leaf(3));
        let tree = TestTree::deep_left(None, &Tree::Empty, &suffix, &Size);
        assert_eq!(values(&tree), vec![1, 2, 3]);
        assert_eq!(tree.measure(&Size), Sum(3));
    }

    #[rstest]
    fn test_persistence_after_cons() {
        let original = build_by_snoc(10);
        let extended = original.cons(Element::leaf(99), &Size);
        assert_eq!(values(&original), (0..10).collect::<Vec<_>>());
        assert_eq!(values(&extended)[0], 99);
    }
}
