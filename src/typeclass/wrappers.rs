//! Newtype wrappers that pick a monoid for an underlying type.
//!
//! The same integer can be measured by addition ([`Sum`]), multiplication
//! ([`Product`]), or by keeping an extreme ([`Max`], [`Min`]). A counting
//! finger tree is measured by `Sum<usize>`, a priority queue by `Max<P>`.
//!
//! [`Bounded`] supplies the identity elements for `Max` and `Min`.

/// Additive monoid wrapper. Identity: `Sum(0)`.
///
/// # Examples
///
/// ```rust
/// use fingertree::typeclass::{Semigroup, Sum};
///
/// assert_eq!(Sum::new(3).combine(Sum::new(5)), Sum::new(8));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Sum<A>(pub A);

/// Multiplicative monoid wrapper. Identity: `Product(1)`.
///
/// `Default` is not derived: the default of a number is 0, not the
/// multiplicative identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Product<A>(pub A);

/// Maximum monoid wrapper. Identity: `Max(A::MIN_VALUE)`.
///
/// # Examples
///
/// ```rust
/// use fingertree::typeclass::{Max, Semigroup};
///
/// assert_eq!(Max::new(3).combine(Max::new(5)), Max::new(5));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Max<A>(pub A);

/// Minimum monoid wrapper. Identity: `Min(A::MAX_VALUE)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Min<A>(pub A);

macro_rules! impl_wrapper {
    ($($wrapper:ident),* $(,)?) => {
        $(
            impl<A> $wrapper<A> {
                /// Wraps the given value.
                #[inline]
                pub const fn new(value: A) -> Self {
                    Self(value)
                }

                /// Consumes the wrapper and returns the inner value.
                #[inline]
                pub fn into_inner(self) -> A {
                    self.0
                }

                /// Returns a reference to the inner value.
                #[inline]
                pub const fn as_inner(&self) -> &A {
                    &self.0
                }
            }

            impl<A> From<A> for $wrapper<A> {
                fn from(value: A) -> Self {
                    Self::new(value)
                }
            }
        )*
    };
}

impl_wrapper!(Sum, Product, Max, Min);

/// Types with a smallest and a largest value.
///
/// # Examples
///
/// ```rust
/// use fingertree::typeclass::Bounded;
///
/// #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
/// struct Urgency(u8);
///
/// impl Bounded for Urgency {
///     const MIN_VALUE: Self = Urgency(0);
///     const MAX_VALUE: Self = Urgency(9);
/// }
///
/// assert_eq!(Urgency::MAX_VALUE.0, 9);
/// ```
pub trait Bounded {
    /// The minimum value of this type.
    const MIN_VALUE: Self;

    /// The maximum value of this type.
    const MAX_VALUE: Self;
}

macro_rules! impl_bounded {
    ($($numeric:ty),* $(,)?) => {
        $(
            impl Bounded for $numeric {
                const MIN_VALUE: Self = Self::MIN;
                const MAX_VALUE: Self = Self::MAX;
            }
        )*
    };
}

impl_bounded!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

impl Bounded for char {
    const MIN_VALUE: Self = '\0';
    const MAX_VALUE: Self = Self::MAX;
}

impl Bounded for bool {
    const MIN_VALUE: Self = false;
    const MAX_VALUE: Self = true;
}

impl<A: Bounded, B: Bounded> Bounded for (A, B) {
    const MIN_VALUE: Self = (A::MIN_VALUE, B::MIN_VALUE);
    const MAX_VALUE: Self = (A::MAX_VALUE, B::MAX_VALUE);
}
