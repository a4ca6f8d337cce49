//! Newtype wrappers selecting a particular way of combining values.
//!
//! The same underlying type can combine in more than one way. These
//! wrappers pick one:
//!
//! - [`Sum`] adds, with identity `0`
//! - [`Product`] multiplies, with identity `1`
//! - [`First`] keeps the leftmost present value, with identity `First(Absent)`
//! - [`Last`] keeps the rightmost present value, with identity `Last(Absent)`

use crate::optional::Maybe;

/// The additive semigroup/monoid.
///
/// # Examples
///
/// ```rust
/// use maybe::typeclass::{Monoid, Semigroup, Sum};
///
/// assert_eq!(Sum(3).combine(Sum(5)), Sum(8));
/// assert_eq!(Sum::<i32>::empty(), Sum(0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Sum<A>(pub A);

impl<A> Sum<A> {
    /// Creates a new `Sum` wrapping the given value.
    #[inline]
    pub const fn new(value: A) -> Self {
        Self(value)
    }

    /// Consumes the `Sum` and returns the inner value.
    #[inline]
    pub fn into_inner(self) -> A {
        self.0
    }
}

/// The multiplicative semigroup/monoid.
///
/// # Examples
///
/// ```rust
/// use maybe::typeclass::{Monoid, Product, Semigroup};
///
/// assert_eq!(Product(3).combine(Product(5)), Product(15));
/// assert_eq!(Product::<i32>::empty(), Product(1));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Product<A>(pub A);

impl<A> Product<A> {
    /// Creates a new `Product` wrapping the given value.
    #[inline]
    pub const fn new(value: A) -> Self {
        Self(value)
    }

    /// Consumes the `Product` and returns the inner value.
    #[inline]
    pub fn into_inner(self) -> A {
        self.0
    }
}

/// Keeps the first present value when combined.
///
/// # Examples
///
/// ```rust
/// use maybe::optional::Maybe;
/// use maybe::typeclass::{First, Monoid};
///
/// let candidates = vec![
///     First(Maybe::absent()),
///     First(Maybe::present("primary")),
///     First(Maybe::present("fallback")),
/// ];
/// assert_eq!(First::combine_all(candidates), First(Maybe::present("primary")));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct First<A>(pub Maybe<A>);

impl<A> First<A> {
    /// Consumes the `First` and returns the wrapped `Maybe`.
    #[inline]
    pub fn into_inner(self) -> Maybe<A> {
        self.0
    }
}

impl<A> From<Maybe<A>> for First<A> {
    fn from(value: Maybe<A>) -> Self {
        Self(value)
    }
}

/// Keeps the last present value when combined.
///
/// # Examples
///
/// ```rust
/// use maybe::optional::Maybe;
/// use maybe::typeclass::{Last, Semigroup};
///
/// let overridden = Last(Maybe::present(1)).combine(Last(Maybe::present(2)));
/// assert_eq!(overridden, Last(Maybe::present(2)));
///
/// let kept = Last(Maybe::present(1)).combine(Last(Maybe::absent()));
/// assert_eq!(kept, Last(Maybe::present(1)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Last<A>(pub Maybe<A>);

impl<A> Last<A> {
    /// Consumes the `Last` and returns the wrapped `Maybe`.
    #[inline]
    pub fn into_inner(self) -> Maybe<A> {
        self.0
    }
}

impl<A> From<Maybe<A>> for Last<A> {
    fn from(value: Maybe<A>) -> Self {
        Self(value)
    }
}
