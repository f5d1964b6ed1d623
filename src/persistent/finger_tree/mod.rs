//! Persistent finger trees annotated with a monoidal measure.
//!
//! This module provides [`FingerTree`], the general-purpose sequence of Hinze
//! & Paterson's "Finger Trees: A Simple General-purpose Data Structure" (2006):
//!
//! - O(1) `measure` and `is_empty`
//! - O(1) amortized `cons`, `snoc`, `uncons`, `unsnoc`
//! - O(1) `head` and `last`
//! - O(log(min(n, m))) `append`
//! - O(log n) `split` and `lookup` by a monotonic predicate over the measure
//!
//! All operations return new trees without modifying the original. Untouched
//! subtrees are shared through reference counting.
//!
//! # Finger Tree Structure
//!
//! A tree is one of:
//! - Empty: no elements
//! - Single: exactly one element
//! - Deep: a prefix digit and a suffix digit of one to four elements each,
//!   with a spine between them holding 2-3 nodes of the rank below
//!
//! Every node and every deep tree caches the combined measure of its
//! contents, which is what lets `split` skip whole subtrees.
//!
//! # Examples
//!
//! ```rust
//! use fingertree::persistent::{FingerTree, Size};
//! use fingertree::typeclass::Sum;
//!
//! let tree: FingerTree<char, Size> = "finger".chars().collect();
//! assert_eq!(tree.head(), Ok(&'f'));
//! assert_eq!(tree.measure(), Sum(6));
//!
//! // Split before the fourth element
//! let (left, focus, right) = tree.split(|size| size.0 > 3).unwrap();
//! assert_eq!(left.iter().collect::<String>(), "fin");
//! assert_eq!(focus, 'g');
//! assert_eq!(right.iter().collect::<String>(), "er");
//!
//! // The original is unchanged
//! assert_eq!(tree.len(), 6);
//! ```

mod concat;
mod digit;
mod indexed;
mod iter;
mod node;
mod priority;
mod split;
mod tree;

use std::fmt;
use std::hash::{Hash, Hasher};

pub use iter::{FingerTreeIntoIterator, FingerTreeIterator};

use node::Element;
use tree::Tree;

use super::error::FingerTreeError;
use super::measure::Measure;
use crate::typeclass::{Foldable, Monoid, Semigroup};

/// A persistent sequence annotated with the measure `M`.
///
/// The measure instance travels with the tree: every tree derived from this
/// one (by `cons`, `split`, `append`, ...) carries a clone of it.
///
/// # Type Parameters
///
/// - `A`: the element type
/// - `M`: the [`Measure`] summarizing elements into `M::Value`
///
/// # Examples
///
/// ```rust
/// use fingertree::persistent::{FingerTree, Size};
///
/// let tree = FingerTree::new(Size).snoc(2).snoc(3).cons(1);
/// assert_eq!(tree.to_vec(), vec![1, 2, 3]);
///
/// let (rest, last) = tree.unsnoc().unwrap();
/// assert_eq!(last, 3);
/// assert_eq!(rest.to_vec(), vec![1, 2]);
/// ```
pub struct FingerTree<A, M: Measure<A>> {
    measure: M,
    root: Tree<A, M::Value>,
}

impl<A, M: Measure<A>> Clone for FingerTree<A, M> {
    fn clone(&self) -> Self {
        Self {
            measure: self.measure.clone(),
            root: self.root.clone(),
        }
    }
}

impl<A, M: Measure<A>> FingerTree<A, M> {
    /// Creates an empty tree that will summarize its elements with `measure`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fingertree::persistent::{FingerTree, Size};
    ///
    /// let tree: FingerTree<i32, Size> = FingerTree::new(Size);
    /// assert!(tree.is_empty());
    /// ```
    #[inline]
    pub const fn new(measure: M) -> Self {
        Self {
            measure,
            root: Tree::Empty,
        }
    }

    /// Creates a tree holding exactly one element.
    #[inline]
    pub fn singleton(measure: M, element: A) -> Self {
        Self {
            measure,
            root: Tree::Single(Element::leaf(element)),
        }
    }

    /// Builds a tree from an iterator by repeated `snoc`, keeping the order.
    ///
    /// Use this when the measure carries state (a [`MeasureFn`](crate::persistent::MeasureFn)
    /// closure, say); measures with a `Default` can use `collect` instead.
    pub fn from_iter_with<I>(measure: M, iterable: I) -> Self
    where
        I: IntoIterator<Item = A>,
    {
        iterable
            .into_iter()
            .fold(Self::new(measure), |tree, element| tree.snoc(element))
    }

    fn derive(&self, root: Tree<A, M::Value>) -> Self {
        Self {
            measure: self.measure.clone(),
            root,
        }
    }

    /// The measure instance this tree summarizes its elements with.
    #[inline]
    pub const fn measurer(&self) -> &M {
        &self.measure
    }

    /// Returns `true` if the tree holds no elements.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.root.is_empty()
    }

    /// Number of nested spine ranks. Grows logarithmically with the length.
    pub fn depth(&self) -> usize {
        self.root.depth()
    }

    /// The combined measure of all elements, left to right. O(1).
    ///
    /// The empty tree measures `M::Value::empty()`.
    #[inline]
    pub fn measure(&self) -> M::Value {
        self.root.measure(&self.measure)
    }

    /// Returns a new tree with `element` at the front.
    ///
    /// # Complexity
    ///
    /// O(1) amortized
    #[must_use]
    pub fn cons(&self, element: A) -> Self {
        self.derive(self.root.cons(Element::leaf(element), &self.measure))
    }

    /// Returns a new tree with `element` at the back.
    ///
    /// # Complexity
    ///
    /// O(1) amortized
    #[must_use]
    pub fn snoc(&self, element: A) -> Self {
        self.derive(self.root.snoc(Element::leaf(element), &self.measure))
    }

    /// Returns the first element.
    ///
    /// # Errors
    ///
    /// [`FingerTreeError::EmptyTree`] if the tree is empty.
    pub fn head(&self) -> Result<&A, FingerTreeError> {
        self.root
            .first()
            .map(Element::value)
            .ok_or(FingerTreeError::EmptyTree { operation: "head" })
    }

    /// Returns the last element.
    ///
    /// # Errors
    ///
    /// [`FingerTreeError::EmptyTree`] if the tree is empty.
    pub fn last(&self) -> Result<&A, FingerTreeError> {
        self.root
            .last()
            .map(Element::value)
            .ok_or(FingerTreeError::EmptyTree { operation: "last" })
    }

    /// Returns every element except the first.
    ///
    /// # Errors
    ///
    /// [`FingerTreeError::EmptyTree`] if the tree is empty.
    pub fn tail(&self) -> Result<Self, FingerTreeError> {
        self.root
            .uncons(&self.measure)
            .map(|(_, rest)| self.derive(rest))
            .ok_or(FingerTreeError::EmptyTree { operation: "tail" })
    }

    /// Returns every element except the last.
    ///
    /// # Errors
    ///
    /// [`FingerTreeError::EmptyTree`] if the tree is empty.
    pub fn init(&self) -> Result<Self, FingerTreeError> {
        self.root
            .unsnoc(&self.measure)
            .map(|(rest, _)| self.derive(rest))
            .ok_or(FingerTreeError::EmptyTree { operation: "init" })
    }

    /// Splits off the first element. `None` when the tree is empty.
    ///
    /// # Complexity
    ///
    /// O(1) amortized
    pub fn uncons(&self) -> Option<(A, Self)>
    where
        A: Clone,
    {
        let (head, rest) = self.root.uncons(&self.measure)?;
        Some((head.into_value(), self.derive(rest)))
    }

    /// Splits off the last element. `None` when the tree is empty.
    ///
    /// # Complexity
    ///
    /// O(1) amortized
    pub fn unsnoc(&self) -> Option<(Self, A)>
    where
        A: Clone,
    {
        let (rest, last) = self.root.unsnoc(&self.measure)?;
        Some((self.derive(rest), last.into_value()))
    }

    /// Concatenates two trees. The result keeps this tree's measure instance.
    ///
    /// # Complexity
    ///
    /// O(log(min(n, m)))
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fingertree::persistent::{FingerTree, Size};
    ///
    /// let left: FingerTree<i32, Size> = (1..=3).collect();
    /// let right: FingerTree<i32, Size> = (4..=6).collect();
    /// assert_eq!(left.append(&right).to_vec(), vec![1, 2, 3, 4, 5, 6]);
    /// ```
    #[must_use]
    pub fn append(&self, other: &Self) -> Self {
        self.derive(self.root.concat(&other.root, &self.measure))
    }

    /// Checks that `predicate` turns true somewhere in a non-empty tree.
    fn check_predicate<P>(
        &self,
        operation: &'static str,
        predicate: &mut P,
    ) -> Result<(), FingerTreeError>
    where
        P: FnMut(&M::Value) -> bool,
    {
        if self.is_empty() {
            return Err(FingerTreeError::EmptyTree { operation });
        }
        if predicate(&self.measure()) {
            Ok(())
        } else {
            #[cfg(feature = "tracing")]
            tracing::debug!(operation, "predicate is false on the whole tree");
            Err(FingerTreeError::PredicateNeverSatisfied)
        }
    }

    /// Splits the tree at the first element where `predicate`, applied to the
    /// running measure from the left, turns true.
    ///
    /// For `(left, focus, right)`, `predicate(left.measure())` is false and
    /// `predicate(left.measure() ⊕ measure(focus))` is true. The predicate
    /// must be monotonic: once true on a prefix it stays true on every longer
    /// prefix.
    ///
    /// # Errors
    ///
    /// - [`FingerTreeError::EmptyTree`] if the tree is empty.
    /// - [`FingerTreeError::PredicateNeverSatisfied`] if the predicate is false
    ///   on the measure of the whole tree.
    ///
    /// # Complexity
    ///
    /// O(log(min(i, n - i))) where `i` is the position of the focus
    pub fn split<P>(&self, mut predicate: P) -> Result<(Self, A, Self), FingerTreeError>
    where
        A: Clone,
        P: FnMut(&M::Value) -> bool,
    {
        self.check_predicate("split", &mut predicate)?;
        let (left, focus, right) = self
            .root
            .split_tree(&mut predicate, &M::Value::empty(), &self.measure)
            .ok_or(FingerTreeError::EmptyTree { operation: "split" })?;
        Ok((self.derive(left), focus.into_value(), self.derive(right)))
    }

    /// Finds the element `split` would focus on, without rebuilding either
    /// side.
    ///
    /// # Errors
    ///
    /// Same as [`Self::split`].
    pub fn lookup<P>(&self, mut predicate: P) -> Result<&A, FingerTreeError>
    where
        P: FnMut(&M::Value) -> bool,
    {
        self.check_predicate("lookup", &mut predicate)?;
        self.root
            .lookup(&mut predicate, M::Value::empty(), &self.measure)
            .map(|(_, element)| element.value())
            .ok_or(FingerTreeError::EmptyTree { operation: "lookup" })
    }

    /// Splits the tree in two: the right half starts at the element where
    /// `predicate` turns true.
    ///
    /// Total, unlike [`Self::split`]: an empty tree splits into two empty
    /// trees, and a predicate that never turns true puts everything left.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fingertree::persistent::{FingerTree, Size};
    ///
    /// let tree: FingerTree<i32, Size> = (1..=5).collect();
    /// let (left, right) = tree.split_at_boundary(|size| size.0 > 2);
    /// assert_eq!(left.to_vec(), vec![1, 2]);
    /// assert_eq!(right.to_vec(), vec![3, 4, 5]);
    /// ```
    pub fn split_at_boundary<P>(&self, mut predicate: P) -> (Self, Self)
    where
        P: FnMut(&M::Value) -> bool,
    {
        if self.is_empty() || !predicate(&self.measure()) {
            return (self.clone(), self.derive(Tree::Empty));
        }
        match self
            .root
            .split_tree(&mut predicate, &M::Value::empty(), &self.measure)
        {
            Some((left, focus, right)) => (
                self.derive(left),
                self.derive(right.cons(focus, &self.measure)),
            ),
            None => (self.derive(Tree::Empty), self.derive(Tree::Empty)),
        }
    }

    /// The longest prefix on which `predicate` stays false.
    #[must_use]
    pub fn take_until<P>(&self, predicate: P) -> Self
    where
        P: FnMut(&M::Value) -> bool,
    {
        self.split_at_boundary(predicate).0
    }

    /// Everything from the element where `predicate` turns true onward.
    #[must_use]
    pub fn drop_until<P>(&self, predicate: P) -> Self
    where
        P: FnMut(&M::Value) -> bool,
    {
        self.split_at_boundary(predicate).1
    }

    /// Returns the elements in reverse order, re-measured left to right.
    ///
    /// # Complexity
    ///
    /// O(n)
    #[must_use]
    pub fn reverse(&self) -> Self
    where
        A: Clone,
    {
        self.fold_left(self.derive(Tree::Empty), |reversed, element| {
            reversed.cons(element.clone())
        })
    }

    /// Folds the elements from left to right.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fingertree::persistent::{FingerTree, Size};
    ///
    /// let tree = [6, 5, 4, 3, 2, 1]
    ///     .into_iter()
    ///     .fold(FingerTree::new(Size), |tree, digit| tree.cons(digit));
    /// let digits = tree.fold_left(String::new(), |accumulator, digit| {
    ///     accumulator + &digit.to_string()
    /// });
    /// assert_eq!(digits, "123456");
    /// ```
    pub fn fold_left<'a, B, F>(&'a self, init: B, mut function: F) -> B
    where
        F: FnMut(B, &'a A) -> B,
    {
        self.root.fold_left(init, &mut function)
    }

    /// Folds the elements from right to left.
    pub fn fold_right<'a, B, F>(&'a self, init: B, mut function: F) -> B
    where
        F: FnMut(&'a A, B) -> B,
    {
        self.root.fold_right(init, &mut function)
    }

    /// Returns a double-ended iterator over references to the elements.
    pub fn iter(&self) -> FingerTreeIterator<'_, A, M> {
        FingerTreeIterator::new(&self.root)
    }

    /// Collects the elements into a `Vec`, front to back.
    pub fn to_vec(&self) -> Vec<A>
    where
        A: Clone,
    {
        self.iter().cloned().collect()
    }
}

// =============================================================================
// Standard Trait Implementations
// =============================================================================

impl<A, M: Measure<A> + Default> Default for FingerTree<A, M> {
    fn default() -> Self {
        Self::new(M::default())
    }
}

impl<A, M: Measure<A> + Default> FromIterator<A> for FingerTree<A, M> {
    fn from_iter<I: IntoIterator<Item = A>>(iterable: I) -> Self {
        Self::from_iter_with(M::default(), iterable)
    }
}

impl<A, M: Measure<A> + Default> From<Vec<A>> for FingerTree<A, M> {
    fn from(elements: Vec<A>) -> Self {
        elements.into_iter().collect()
    }
}

impl<A, M: Measure<A>> Extend<A> for FingerTree<A, M> {
    fn extend<I: IntoIterator<Item = A>>(&mut self, iterable: I) {
        for element in iterable {
            self.root = self.root.snoc(Element::leaf(element), &self.measure);
        }
    }
}

impl<A: PartialEq, M: Measure<A>> PartialEq for FingerTree<A, M> {
    fn eq(&self, other: &Self) -> bool {
        self.iter().eq(other.iter())
    }
}

impl<A: Eq, M: Measure<A>> Eq for FingerTree<A, M> {}

impl<A: Hash, M: Measure<A>> Hash for FingerTree<A, M> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        let mut count = 0_usize;
        for element in self {
            element.hash(state);
            count += 1;
        }
        count.hash(state);
    }
}

impl<A: fmt::Debug, M: Measure<A>> fmt::Debug for FingerTree<A, M> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_list().entries(self.iter()).finish()
    }
}

impl<A: fmt::Display, M: Measure<A>> fmt::Display for FingerTree<A, M> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "[")?;
        let mut first = true;
        for element in self {
            if first {
                first = false;
            } else {
                write!(formatter, ", ")?;
            }
            write!(formatter, "{element}")?;
        }
        write!(formatter, "]")
    }
}

// =============================================================================
// Type Class Implementations
// =============================================================================

impl<A, M: Measure<A>> Semigroup for FingerTree<A, M> {
    fn combine(self, other: Self) -> Self {
        self.append(&other)
    }

    fn combine_ref(&self, other: &Self) -> Self {
        self.append(other)
    }
}

impl<A, M: Measure<A> + Default> Monoid for FingerTree<A, M> {
    fn empty() -> Self {
        Self::default()
    }
}

impl<'a, A, M: Measure<A>> Foldable for &'a FingerTree<A, M> {
    type Item = &'a A;

    fn fold_left<B, F>(self, init: B, function: F) -> B
    where
        F: FnMut(B, &'a A) -> B,
    {
        FingerTree::fold_left(self, init, function)
    }

    fn fold_right<B, F>(self, init: B, function: F) -> B
    where
        F: FnMut(&'a A, B) -> B,
    {
        FingerTree::fold_right(self, init, function)
    }

    fn find<P>(self, predicate: P) -> Option<&'a A>
    where
        P: FnMut(&&'a A) -> bool,
    {
        self.iter().find(predicate)
    }
}

// =============================================================================
// Serde Support
// =============================================================================

#[cfg(feature = "serde")]
impl<A: serde::Serialize, M: Measure<A>> serde::Serialize for FingerTree<A, M> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeSeq;
        let mut seq = serializer.serialize_seq(None)?;
        for element in self {
            seq.serialize_element(element)?;
        }
        seq.end()
    }
}

#[cfg(feature = "serde")]
struct FingerTreeVisitor<A, M> {
    marker: std::marker::PhantomData<(A, M)>,
}

#[cfg(feature = "serde")]
impl<A, M> FingerTreeVisitor<A, M> {
    const fn new() -> Self {
        Self {
            marker: std::marker::PhantomData,
        }
    }
}

#[cfg(feature = "serde")]
impl<'de, A, M> serde::de::Visitor<'de> for FingerTreeVisitor<A, M>
where
    A: serde::Deserialize<'de>,
    M: Measure<A> + Default,
{
    type Value = FingerTree<A, M>;

    fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("a sequence")
    }

    fn visit_seq<S>(self, mut seq: S) -> Result<Self::Value, S::Error>
    where
        S: serde::de::SeqAccess<'de>,
    {
        let mut tree = FingerTree::default();
        while let Some(element) = seq.next_element()? {
            tree = tree.snoc(element);
        }
        Ok(tree)
    }
}

#[cfg(feature = "serde")]
impl<'de, A, M> serde::Deserialize<'de> for FingerTree<A, M>
where
    A: serde::Deserialize<'de>,
    M: Measure<A> + Default,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_seq(FingerTreeVisitor::new())
    }
}

// =============================================================================
// Tests
// =============================================================================
