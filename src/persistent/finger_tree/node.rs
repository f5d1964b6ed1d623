//! Elements and 2-3 nodes, the payload of every tree rank.
//!
//! The textbook finger tree nests `FingerTree<Node<A>>` inside
//! `FingerTree<A>`, a polymorphic recursion that Rust would have to
//! monomorphize without end. Instead every rank stores [`Element`]s: a leaf
//! holding a user value, or a branch holding a [`Node`] of the rank below. The
//! top rank holds only leaves and every spine rank holds only branches.

use smallvec::{SmallVec, smallvec};

use super::digit::Digit;
use crate::persistent::ReferenceCounter;
use crate::persistent::measure::Measure;
use crate::typeclass::Monoid;

pub(crate) enum Element<A, V> {
    Leaf(ReferenceCounter<A>),
    Branch(ReferenceCounter<Node<A, V>>),
}

impl<A, V> Clone for Element<A, V> {
    fn clone(&self) -> Self {
        match self {
            Self::Leaf(value) => Self::Leaf(value.clone()),
            Self::Branch(node) => Self::Branch(node.clone()),
        }
    }
}

impl<A, V> Element<A, V> {
    pub(crate) fn leaf(value: A) -> Self {
        Self::Leaf(ReferenceCounter::new(value))
    }

    pub(crate) fn branch(node: Node<A, V>) -> Self {
        Self::Branch(ReferenceCounter::new(node))
    }

    /// The user value of a top-rank element.
    pub(crate) fn value(&self) -> &A {
        match self {
            Self::Leaf(value) => value,
            Self::Branch(_) => unreachable!("branch element found at the leaf rank"),
        }
    }

    /// The node of a spine-rank element.
    pub(crate) fn node(&self) -> &Node<A, V> {
        match self {
            Self::Branch(node) => node,
            Self::Leaf(_) => unreachable!("leaf element found in a spine"),
        }
    }
}

impl<A: Clone, V> Element<A, V> {
    /// Takes the user value out of a top-rank element, cloning only when the
    /// leaf is still shared with another tree.
    pub(crate) fn into_value(self) -> A {
        match self {
            Self::Leaf(value) => {
                ReferenceCounter::try_unwrap(value).unwrap_or_else(|shared| (*shared).clone())
            }
            Self::Branch(_) => unreachable!("branch element found at the leaf rank"),
        }
    }
}

impl<A, V: Clone> Element<A, V> {
    /// Leaves are measured on demand; branches return their cached measure.
    pub(crate) fn measure<M>(&self, measure: &M) -> V
    where
        M: Measure<A, Value = V>,
    {
        match self {
            Self::Leaf(value) => measure.measure(value),
            Self::Branch(node) => node.measure().clone(),
        }
    }
}

pub(crate) enum Node<A, V> {
    Node2 {
        measure: V,
        first: Element<A, V>,
        second: Element<A, V>,
    },
    Node3 {
        measure: V,
        first: Element<A, V>,
        second: Element<A, V>,
        third: Element<A, V>,
    },
}

impl<A, V> Node<A, V> {
    pub(crate) const fn measure(&self) -> &V {
        match self {
            Self::Node2 { measure, .. } | Self::Node3 { measure, .. } => measure,
        }
    }

    #[cfg(test)]
    pub(crate) const fn len(&self) -> usize {
        match self {
            Self::Node2 { .. } => 2,
            Self::Node3 { .. } => 3,
        }
    }

    /// Pulls a node down one rank as a digit: `Node2` becomes `Two`, `Node3`
    /// becomes `Three`.
    pub(crate) fn to_digit(&self) -> Digit<A, V> {
        match self {
            Self::Node2 { first, second, .. } => Digit::Two(first.clone(), second.clone()),
            Self::Node3 {
                first,
                second,
                third,
                ..
            } => Digit::Three(first.clone(), second.clone(), third.clone()),
        }
    }

    pub(crate) fn children(&self) -> SmallVec<[&Element<A, V>; 3]> {
        match self {
            Self::Node2 { first, second, .. } => smallvec![first, second],
            Self::Node3 {
                first,
                second,
                third,
                ..
            } => smallvec![first, second, third],
        }
    }

    pub(crate) fn fold_left<'a, B, F>(&'a self, init: B, function: F) -> B
    where
        F: FnMut(B, &'a Element<A, V>) -> B,
    {
        self.children().into_iter().fold(init, function)
    }

    pub(crate) fn fold_right<'a, B, F>(&'a self, init: B, mut function: F) -> B
    where
        F: FnMut(&'a Element<A, V>, B) -> B,
    {
        self.children()
            .into_iter()
            .rev()
            .fold(init, |accumulator, element| function(element, accumulator))
    }
}

impl<A, V: Monoid + Clone> Node<A, V> {
    pub(crate) fn node2<M>(first: Element<A, V>, second: Element<A, V>, measure: &M) -> Self
    where
        M: Measure<A, Value = V>,
    {
        let cached = first.measure(measure).combine(second.measure(measure));
        Self::Node2 {
            measure: cached,
            first,
            second,
        }
    }

    pub(crate) fn node3<M>(
        first: Element<A, V>,
        second: Element<A, V>,
        third: Element<A, V>,
        measure: &M,
    ) -> Self
    where
        M: Measure<A, Value = V>,
    {
        let cached = first
            .measure(measure)
            .combine(second.measure(measure))
            .combine(third.measure(measure));
        Self::Node3 {
            measure: cached,
            first,
            second,
            third,
        }
    }

    /// Finds the child at which `predicate` over the running measure, started
    /// from `accumulated`, first holds. Falls back to the last child.
    ///
    /// Returns the running measure before that child along with it.
    pub(crate) fn lookup<M, P>(
        &self,
        predicate: &mut P,
        accumulated: V,
        measure: &M,
    ) -> (V, &Element<A, V>)
    where
        M: Measure<A, Value = V>,
        P: FnMut(&V) -> bool,
    {
        let children = self.children();
        let last = children.len() - 1;
        let mut before = accumulated;
        for &child in &children[..last] {
            let after = before.combine_ref(&child.measure(measure));
            if predicate(&after) {
                return (before, child);
            }
            before = after;
        }
        (before, children[last])
    }
}

/// Regroups a run of at least two elements into `Node3`s, falling back to
/// `Node2`s only where a lone element would otherwise be left over.
///
/// Concatenation feeds this at most 12 elements (two digits plus at most four
/// middle nodes), which yields at most 4 nodes.
pub(crate) fn group_into_nodes<A, V, M>(
    elements: &[Element<A, V>],
    measure: &M,
) -> SmallVec<[Element<A, V>; 4]>
where
    V: Monoid + Clone,
    M: Measure<A, Value = V>,
{
    let mut nodes = SmallVec::new();
    let mut rest = elements;
    while rest.len() > 4 {
        let (group, tail) = rest.split_at(3);
        nodes.push(Element::branch(Node::node3(
            group[0].clone(),
            group[1].clone(),
            group[2].clone(),
            measure,
        )));
        rest = tail;
    }
    nodes.extend(
        Digit::from_slice(rest)
            .to_nodes(measure)
            .into_iter()
            .map(Element::branch),
    );
    nodes
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::persistent::measure::Size;
    use crate::typeclass::Sum;
    use rstest::rstest;

    fn leaves(count: usize) -> Vec<Element<usize, Sum<usize>>> {
        (0..count).map(Element::leaf).collect()
    }

    fn values(node: &Node<usize, Sum<usize>>) -> Vec<usize> {
        node.fold_left(Vec::new(), |mut accumulator, child| {
            accumulator.push(*child.value());
            accumulator
        })
    }

    #[rstest]
    fn test_node_measure_is_cached_at_construction() {
        let elements = leaves(3);
        let node = Node::node3(
            elements[0].clone(),
            elements[1].clone(),
            elements[2].clone(),
            &Size,
        );
        assert_eq!(node.measure(), &Sum(3));
        assert_eq!(node.len(), 3);
    }

    #[rstest]
    fn test_branch_measure_uses_node_cache() {
        let elements = leaves(2);
        let branch = Element::branch(Node::node2(
            elements[0].clone(),
            elements[1].clone(),
            &Size,
        ));
        assert_eq!(branch.measure(&Size), Sum(2));
    }

    #[rstest]
    fn test_to_digit_preserves_order() {
        let elements = leaves(3);
        let node2 = Node::node2(elements[0].clone(), elements[1].clone(), &Size);
        let node3 = Node::node3(
            elements[0].clone(),
            elements[1].clone(),
            elements[2].clone(),
            &Size,
        );
        assert_eq!(node2.to_digit().len(), 2);
        assert_eq!(*node2.to_digit().last().value(), 1);
        assert_eq!(node3.to_digit().len(), 3);
        assert_eq!(*node3.to_digit().first().value(), 0);
    }

    #[rstest]
    fn test_fold_right_visits_children_backwards() {
        let elements = leaves(3);
        let node = Node::node3(
            elements[0].clone(),
            elements[1].clone(),
            elements[2].clone(),
            &Size,
        );
        let visited = node.fold_right(Vec::new(), |child, mut accumulator| {
            accumulator.push(*child.value());
            accumulator
        });
        assert_eq!(visited, vec![2, 1, 0]);
        assert_eq!(values(&node), vec![0, 1, 2]);
    }

    #[rstest]
    #[case(0, 0)]
    #[case(1, 1)]
    #[case(2, 2)]
    fn test_node3_lookup_finds_every_child(#[case] index: usize, #[case] expected: usize) {
        let elements = leaves(3);
        let node = Node::node3(
            elements[0].clone(),
            elements[1].clone(),
            elements[2].clone(),
            &Size,
        );
        let (before, child) =
            node.lookup(&mut |count: &Sum<usize>| count.0 > index, Sum(0), &Size);
        assert_eq!(*child.value(), expected);
        assert_eq!(before, Sum(expected));
    }

    #[rstest]
    fn test_node2_lookup_respects_accumulated_measure() {
        let elements = leaves(2);
        let node = Node::node2(elements[0].clone(), elements[1].clone(), &Size);
        let (before, child) =
            node.lookup(&mut |count: &Sum<usize>| count.0 > 11, Sum(10), &Size);
        assert_eq!(*child.value(), 1);
        assert_eq!(before, Sum(11));
    }

    #[rstest]
    #[case(2, vec![2])]
    #[case(3, vec![3])]
    #[case(4, vec![2, 2])]
    #[case(5, vec![3, 2])]
    #[case(6, vec![3, 3])]
    #[case(7, vec![3, 2, 2])]
    #[case(8, vec![3, 3, 2])]
    #[case(11, vec![3, 3, 3, 2])]
    #[case(12, vec![3, 3, 3, 3])]
    fn test_group_into_nodes_prefers_node3(#[case] count: usize, #[case] sizes: Vec<usize>) {
        let nodes = group_into_nodes(&leaves(count), &Size);
        let grouped: Vec<usize> = nodes.iter().map(|element| element.node().len()).collect();
        assert_eq!(grouped, sizes);

        let flattened: Vec<usize> = nodes
            .iter()
            .flat_map(|element| values(element.node()))
            .collect();
        assert_eq!(flattened, (0..count).collect::<Vec<_>>());
    }
}
