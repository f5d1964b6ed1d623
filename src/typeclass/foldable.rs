//! Foldable type class - structures that can be reduced to a summary value.
//!
//! Implemented by value for owned containers and by reference for persistent
//! trees, where folding yields borrowed elements and leaves the tree intact.
//!
//! # Examples
//!
//! ```rust
//! use fingertree::typeclass::{Foldable, Sum};
//!
//! let values = vec![1, 2, 3, 4, 5];
//! let sum: Sum<i32> = values.clone().fold_map(Sum);
//! assert_eq!(sum.0, 15);
//! assert_eq!(values.fold_right(String::new(), |element, accumulator| {
//!     format!("{element}{accumulator}")
//! }), "12345");
//! ```

use super::monoid::Monoid;

/// A type class for structures that can be folded to a summary value.
pub trait Foldable: Sized {
    /// The element type yielded while folding.
    type Item;

    /// Folds the structure from left to right with an accumulator.
    fn fold_left<B, F>(self, init: B, function: F) -> B
    where
        F: FnMut(B, Self::Item) -> B;

    /// Folds the structure from right to left with an accumulator.
    fn fold_right<B, F>(self, init: B, function: F) -> B
    where
        F: FnMut(Self::Item, B) -> B;

    /// Maps each element to a `Monoid` and combines all results left to right.
    fn fold_map<N, F>(self, mut function: F) -> N
    where
        N: Monoid,
        F: FnMut(Self::Item) -> N,
    {
        self.fold_left(N::empty(), |accumulator, element| {
            accumulator.combine(function(element))
        })
    }

    /// Returns the number of elements in the structure.
    fn length(self) -> usize {
        self.fold_left(0, |count, _| count + 1)
    }

    /// Collects all elements into a `Vec` in fold order.
    fn to_list(self) -> Vec<Self::Item> {
        self.fold_left(Vec::new(), |mut accumulator, element| {
            accumulator.push(element);
            accumulator
        })
    }

    /// Finds the first element satisfying a predicate.
    fn find<P>(self, mut predicate: P) -> Option<Self::Item>
    where
        P: FnMut(&Self::Item) -> bool,
    {
        self.fold_left(None, |accumulator, element| {
            if accumulator.is_some() {
                accumulator
            } else if predicate(&element) {
                Some(element)
            } else {
                None
            }
        })
    }

    /// Checks if any element satisfies the predicate.
    fn exists<P>(self, predicate: P) -> bool
    where
        P: FnMut(&Self::Item) -> bool,
    {
        self.find(predicate).is_some()
    }

    /// Checks if all elements satisfy the predicate. Vacuously true when empty.
    fn for_all<P>(self, mut predicate: P) -> bool
    where
        P: FnMut(&Self::Item) -> bool,
    {
        !self.exists(|element| !predicate(element))
    }
}

impl<A> Foldable for Option<A> {
    type Item = A;

    fn fold_left<B, F>(self, init: B, mut function: F) -> B
    where
        F: FnMut(B, A) -> B,
    {
        match self {
            Some(value) => function(init, value),
            None => init,
        }
    }

    fn fold_right<B, F>(self, init: B, mut function: F) -> B
    where
        F: FnMut(A, B) -> B,
    {
        match self {
            Some(value) => function(value, init),
            None => init,
        }
    }
}

impl<T> Foldable for Vec<T> {
    type Item = T;

    fn fold_left<B, F>(self, init: B, function: F) -> B
    where
        F: FnMut(B, T) -> B,
    {
        self.into_iter().fold(init, function)
    }

    fn fold_right<B, F>(self, init: B, mut function: F) -> B
    where
        F: FnMut(T, B) -> B,
    {
        self.into_iter()
            .rev()
            .fold(init, |accumulator, element| function(element, accumulator))
    }

    fn length(self) -> usize {
        self.len()
    }

    fn to_list(self) -> Self {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::typeclass::{Max, Sum};
    use rstest::rstest;

    #[rstest]
    fn vec_fold_left_is_in_order() {
        let digits = vec![1, 2, 3];
        let result = digits.fold_left(String::new(), |accumulator, element| {
            format!("{accumulator}{element}")
        });
        assert_eq!(result, "123");
    }

    #[rstest]
    fn vec_fold_right_is_in_reverse_order() {
        let digits = vec![1, 2, 3];
        let visited = digits.fold_right(Vec::new(), |element, mut accumulator| {
            accumulator.push(element);
            accumulator
        });
        assert_eq!(visited, vec![3, 2, 1]);
    }

    #[rstest]
    fn vec_fold_map_with_max() {
        let maximum: Max<i32> = vec![4, 9, 2].fold_map(Max);
        assert_eq!(maximum, Max::new(9));
    }

    #[rstest]
    fn option_fold() {
        assert_eq!(Some(5).fold_left(1, |accumulator, element| accumulator + element), 6);
        assert_eq!(None::<i32>.fold_right(1, |element, accumulator| accumulator + element), 1);
        assert_eq!(Some(5).length(), 1);
    }

    #[rstest]
    fn find_returns_first_match() {
        assert_eq!(vec![1, 4, 6, 8].find(|element| *element > 3), Some(4));
        assert_eq!(vec![1, 2].find(|element| *element > 3), None);
    }

    #[rstest]
    fn exists_and_for_all() {
        assert!(vec![2, 4, 6].for_all(|element| element % 2 == 0));
        assert!(!vec![2, 5].for_all(|element| element % 2 == 0));
        assert!(vec![2, 5].exists(|element| element % 2 == 1));
        assert!(Vec::<i32>::new().for_all(|_| false));
    }

    #[rstest]
    fn fold_map_of_empty_is_identity() {
        let total: Sum<i32> = Vec::<i32>::new().fold_map(Sum);
        assert_eq!(total, Sum::new(0));
    }
}
