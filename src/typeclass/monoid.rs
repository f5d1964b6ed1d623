//! Monoid type class - semigroups with an identity element.
//!
//! A finger tree uses the identity as the measure of the empty tree and as the
//! starting accumulator of every split and lookup.
//!
//! # Laws
//!
//! For all `a`:
//!
//! ```text
//! T::empty().combine(a) == a
//! a.combine(T::empty()) == a
//! ```
//!
//! plus associativity inherited from [`Semigroup`].
//!
//! # Examples
//!
//! ```rust
//! use fingertree::typeclass::{Max, Monoid, Semigroup, Sum};
//!
//! assert_eq!(Sum::<usize>::empty(), Sum::new(0));
//! assert_eq!(Max::<i32>::empty(), Max::new(i32::MIN));
//! assert_eq!(String::empty().combine(String::from("hello")), "hello");
//! ```

use std::ops::Add;

use super::semigroup::Semigroup;
use super::wrappers::{Bounded, Max, Min, Product, Sum};

/// A type class for semigroups with an identity element.
pub trait Monoid: Semigroup {
    /// Returns the identity element for this monoid.
    fn empty() -> Self;

    /// Combines all elements in an iterator, starting from the identity element.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fingertree::typeclass::{Monoid, Sum};
    ///
    /// assert_eq!(Sum::combine_all(vec![Sum::new(1), Sum::new(2)]), Sum::new(3));
    /// assert_eq!(Sum::<i32>::combine_all(Vec::new()), Sum::new(0));
    /// ```
    fn combine_all<I>(iterator: I) -> Self
    where
        I: IntoIterator<Item = Self>,
        Self: Sized,
    {
        iterator
            .into_iter()
            .fold(Self::empty(), |accumulator, element| {
                accumulator.combine(element)
            })
    }

    /// Returns whether this value is the identity element.
    fn is_empty_value(&self) -> bool
    where
        Self: PartialEq + Sized,
    {
        *self == Self::empty()
    }
}

impl Monoid for String {
    fn empty() -> Self {
        Self::new()
    }
}

impl<T: Clone> Monoid for Vec<T> {
    fn empty() -> Self {
        Self::new()
    }
}

impl<T: Semigroup> Monoid for Option<T> {
    fn empty() -> Self {
        None
    }
}

impl Monoid for () {
    fn empty() -> Self {}
}

impl<A: Add<Output = A> + Default> Monoid for Sum<A> {
    fn empty() -> Self {
        Self(A::default())
    }
}

macro_rules! impl_product_monoid {
    ($one:expr => $($numeric:ty),* $(,)?) => {
        $(
            impl Monoid for Product<$numeric> {
                fn empty() -> Self {
                    Self($one)
                }
            }
        )*
    };
}

impl_product_monoid!(1 => i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
impl_product_monoid!(1.0 => f32, f64);

/// The identity is the smallest value, so it never wins a comparison.
impl<A: Ord + Bounded> Monoid for Max<A> {
    fn empty() -> Self {
        Self(A::MIN_VALUE)
    }
}

/// The identity is the largest value, so it never wins a comparison.
impl<A: Ord + Bounded> Monoid for Min<A> {
    fn empty() -> Self {
        Self(A::MAX_VALUE)
    }
}

impl<A: Monoid, B: Monoid> Monoid for (A, B) {
    fn empty() -> Self {
        (A::empty(), B::empty())
    }
}

impl<A: Monoid, B: Monoid, C: Monoid> Monoid for (A, B, C) {
    fn empty() -> Self {
        (A::empty(), B::empty(), C::empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn string_identity_laws() {
        let value = String::from("abc");
        assert_eq!(String::empty().combine(value.clone()), value);
        assert_eq!(value.clone().combine(String::empty()), value);
    }

    #[rstest]
    fn sum_identity_is_zero() {
        assert_eq!(Sum::<usize>::empty(), Sum::new(0));
        assert!(Sum::<usize>::empty().is_empty_value());
        assert!(!Sum::new(1_usize).is_empty_value());
    }

    #[rstest]
    fn product_identity_is_one() {
        assert_eq!(Product::<i64>::empty(), Product::new(1));
        assert_eq!(Product::<f64>::empty(), Product::new(1.0));
    }

    #[rstest]
    fn max_identity_never_wins() {
        assert_eq!(Max::<i32>::empty().combine(Max::new(-7)), Max::new(-7));
        assert_eq!(Max::new(-7).combine(Max::<i32>::empty()), Max::new(-7));
    }

    #[rstest]
    fn min_identity_never_wins() {
        assert_eq!(Min::<u8>::empty().combine(Min::new(200)), Min::new(200));
    }

    #[rstest]
    fn tuple_identity_is_component_identities() {
        let identity: (Sum<usize>, Max<i32>) = Monoid::empty();
        assert_eq!(identity, (Sum::new(0), Max::new(i32::MIN)));
    }

    #[rstest]
    fn combine_all_folds_in_order() {
        let parts = vec![String::from("1"), String::from("2"), String::from("3")];
        assert_eq!(String::combine_all(parts), "123");
    }

    #[rstest]
    fn option_identity_is_none() {
        let identity: Option<String> = Monoid::empty();
        assert_eq!(identity, None);
    }
}
