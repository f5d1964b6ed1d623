//! Digits: the one-to-four element prefix and suffix of a tree rank.

use smallvec::{SmallVec, smallvec};

use super::node::{Element, Node};
use super::tree::Tree;
use crate::persistent::error::FingerTreeError;
use crate::persistent::measure::Measure;
use crate::typeclass::Monoid;

pub(crate) enum Digit<A, V> {
    One(Element<A, V>),
    Two(Element<A, V>, Element<A, V>),
    Three(Element<A, V>, Element<A, V>, Element<A, V>),
    Four(Element<A, V>, Element<A, V>, Element<A, V>, Element<A, V>),
}

/// Outcome of splitting a digit: the elements before the focus, the focus,
/// and the elements after it. Either side may be empty.
pub(crate) type DigitSplit<A, V> = (Option<Digit<A, V>>, Element<A, V>, Option<Digit<A, V>>);

impl<A, V> Clone for Digit<A, V> {
    fn clone(&self) -> Self {
        match self {
            Self::One(first) => Self::One(first.clone()),
            Self::Two(first, second) => Self::Two(first.clone(), second.clone()),
            Self::Three(first, second, third) => {
                Self::Three(first.clone(), second.clone(), third.clone())
            }
            Self::Four(first, second, third, fourth) => {
                Self::Four(first.clone(), second.clone(), third.clone(), fourth.clone())
            }
        }
    }
}

impl<A, V> Digit<A, V> {
    #[cfg(test)]
    pub(crate) const fn len(&self) -> usize {
        match self {
            Self::One(_) => 1,
            Self::Two(..) => 2,
            Self::Three(..) => 3,
            Self::Four(..) => 4,
        }
    }

    pub(crate) const fn first(&self) -> &Element<A, V> {
        match self {
            Self::One(first)
            | Self::Two(first, _)
            | Self::Three(first, _, _)
            | Self::Four(first, _, _, _) => first,
        }
    }

    pub(crate) const fn last(&self) -> &Element<A, V> {
        match self {
            Self::One(first) => first,
            Self::Two(_, second) => second,
            Self::Three(_, _, third) => third,
            Self::Four(_, _, _, fourth) => fourth,
        }
    }

    /// Widens the digit at the front. `None` when it already holds four.
    pub(crate) fn prepend(&self, element: Element<A, V>) -> Option<Self> {
        match self {
            Self::One(first) => Some(Self::Two(element, first.clone())),
            Self::Two(first, second) => Some(Self::Three(element, first.clone(), second.clone())),
            Self::Three(first, second, third) => Some(Self::Four(
                element,
                first.clone(),
                second.clone(),
                third.clone(),
            )),
            Self::Four(..) => None,
        }
    }

    /// Widens the digit at the back. `None` when it already holds four.
    pub(crate) fn append(&self, element: Element<A, V>) -> Option<Self> {
        match self {
            Self::One(first) => Some(Self::Two(first.clone(), element)),
            Self::Two(first, second) => Some(Self::Three(first.clone(), second.clone(), element)),
            Self::Three(first, second, third) => Some(Self::Four(
                first.clone(),
                second.clone(),
                third.clone(),
                element,
            )),
            Self::Four(..) => None,
        }
    }

    /// Narrows the digit at the front. The remainder is `None` for `One`.
    pub(crate) fn pop_front(&self) -> (Element<A, V>, Option<Self>) {
        match self {
            Self::One(first) => (first.clone(), None),
            Self::Two(first, second) => (first.clone(), Some(Self::One(second.clone()))),
            Self::Three(first, second, third) => (
                first.clone(),
                Some(Self::Two(second.clone(), third.clone())),
            ),
            Self::Four(first, second, third, fourth) => (
                first.clone(),
                Some(Self::Three(second.clone(), third.clone(), fourth.clone())),
            ),
        }
    }

    /// Narrows the digit at the back. The remainder is `None` for `One`.
    pub(crate) fn pop_back(&self) -> (Option<Self>, Element<A, V>) {
        match self {
            Self::One(first) => (None, first.clone()),
            Self::Two(first, second) => (Some(Self::One(first.clone())), second.clone()),
            Self::Three(first, second, third) => (
                Some(Self::Two(first.clone(), second.clone())),
                third.clone(),
            ),
            Self::Four(first, second, third, fourth) => (
                Some(Self::Three(first.clone(), second.clone(), third.clone())),
                fourth.clone(),
            ),
        }
    }

    pub(crate) fn elements(&self) -> SmallVec<[&Element<A, V>; 4]> {
        match self {
            Self::One(first) => smallvec![first],
            Self::Two(first, second) => smallvec![first, second],
            Self::Three(first, second, third) => smallvec![first, second, third],
            Self::Four(first, second, third, fourth) => smallvec![first, second, third, fourth],
        }
    }

    pub(crate) fn to_elements(&self) -> SmallVec<[Element<A, V>; 4]> {
        self.elements().into_iter().cloned().collect()
    }

    pub(crate) fn try_from_slice(elements: &[Element<A, V>]) -> Result<Self, FingerTreeError> {
        match elements {
            [first] => Ok(Self::One(first.clone())),
            [first, second] => Ok(Self::Two(first.clone(), second.clone())),
            [first, second, third] => Ok(Self::Three(first.clone(), second.clone(), third.clone())),
            [first, second, third, fourth] => Ok(Self::Four(
                first.clone(),
                second.clone(),
                third.clone(),
                fourth.clone(),
            )),
            _ => Err(FingerTreeError::InvalidDigitSize {
                size: elements.len(),
            }),
        }
    }

    /// Builds a digit the tree algorithms know to be between one and four
    /// elements long.
    pub(crate) fn from_slice(elements: &[Element<A, V>]) -> Self {
        Self::try_from_slice(elements).unwrap_or_else(|error| unreachable!("{error}"))
    }

    /// Like [`Self::from_slice`], but an empty slice yields `None`.
    pub(crate) fn from_optional_slice(elements: &[Element<A, V>]) -> Option<Self> {
        (!elements.is_empty()).then(|| Self::from_slice(elements))
    }

    pub(crate) fn fold_left<'a, B, F>(&'a self, init: B, function: F) -> B
    where
        F: FnMut(B, &'a Element<A, V>) -> B,
    {
        self.elements().into_iter().fold(init, function)
    }

    pub(crate) fn fold_right<'a, B, F>(&'a self, init: B, mut function: F) -> B
    where
        F: FnMut(&'a Element<A, V>, B) -> B,
    {
        self.elements()
            .into_iter()
            .rev()
            .fold(init, |accumulator, element| function(element, accumulator))
    }
}

impl<A, V: Monoid + Clone> Digit<A, V> {
    pub(crate) fn measure<M>(&self, measure: &M) -> V
    where
        M: Measure<A, Value = V>,
    {
        self.fold_left(V::empty(), |accumulator, element| {
            accumulator.combine(element.measure(measure))
        })
    }

    /// Spreads the digit over a tree of the same rank with an empty spine.
    pub(crate) fn to_tree<M>(&self, measure: &M) -> Tree<A, V>
    where
        M: Measure<A, Value = V>,
    {
        match self {
            Self::One(first) => Tree::Single(first.clone()),
            Self::Two(first, second) => Tree::deep(
                Self::One(first.clone()),
                Tree::Empty,
                Self::One(second.clone()),
                measure,
            ),
            Self::Three(first, second, third) => Tree::deep(
                Self::Two(first.clone(), second.clone()),
                Tree::Empty,
                Self::One(third.clone()),
                measure,
            ),
            Self::Four(first, second, third, fourth) => Tree::deep(
                Self::Two(first.clone(), second.clone()),
                Tree::Empty,
                Self::Two(third.clone(), fourth.clone()),
                measure,
            ),
        }
    }

    /// Regroups two to four elements into one or two nodes of the next rank.
    pub(crate) fn to_nodes<M>(&self, measure: &M) -> SmallVec<[Node<A, V>; 2]>
    where
        M: Measure<A, Value = V>,
    {
        match self {
            Self::One(_) => unreachable!("a single element cannot form a node"),
            Self::Two(first, second) => {
                smallvec![Node::node2(first.clone(), second.clone(), measure)]
            }
            Self::Three(first, second, third) => smallvec![Node::node3(
                first.clone(),
                second.clone(),
                third.clone(),
                measure,
            )],
            Self::Four(first, second, third, fourth) => smallvec![
                Node::node2(first.clone(), second.clone(), measure),
                Node::node2(third.clone(), fourth.clone(), measure),
            ],
        }
    }

    /// Position of the first element at which `predicate` over the running
    /// measure holds, the last element if none does, and the running measure
    /// just before it.
    fn locate<M, P>(&self, predicate: &mut P, accumulated: V, measure: &M) -> (usize, V)
    where
        M: Measure<A, Value = V>,
        P: FnMut(&V) -> bool,
    {
        let elements = self.elements();
        let last = elements.len() - 1;
        let mut before = accumulated;
        for (index, element) in elements[..last].iter().enumerate() {
            let after = before.combine_ref(&element.measure(measure));
            if predicate(&after) {
                return (index, before);
            }
            before = after;
        }
        (last, before)
    }

    pub(crate) fn split<M, P>(
        &self,
        predicate: &mut P,
        accumulated: V,
        measure: &M,
    ) -> DigitSplit<A, V>
    where
        M: Measure<A, Value = V>,
        P: FnMut(&V) -> bool,
    {
        let (index, _) = self.locate(predicate, accumulated, measure);
        let elements = self.to_elements();
        (
            Self::from_optional_slice(&elements[..index]),
            elements[index].clone(),
            Self::from_optional_slice(&elements[index + 1..]),
        )
    }

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
        let (index, before) = self.locate(predicate, accumulated, measure);
        (before, self.elements()[index])
    }
}
