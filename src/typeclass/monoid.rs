//! Monoid type class - semigroups with an identity element.
//!
//! # Laws
//!
//! ```text
//! Self::empty().combine(a) == a
//! a.combine(Self::empty()) == a
//! ```
//!
//! `Maybe<T>` is a monoid for any semigroup `T`, with `Absent` as the
//! identity. This is what makes it useful for combining optional
//! configuration fragments or partial results:
//!
//! ```rust
//! use maybe::optional::Maybe;
//! use maybe::typeclass::{Monoid, Sum};
//!
//! let partials = vec![Maybe::present(Sum(2)), Maybe::absent(), Maybe::present(Sum(5))];
//! assert_eq!(Maybe::combine_all(partials), Maybe::present(Sum(7)));
//!
//! let nothing: Vec<Maybe<Sum<i32>>> = vec![];
//! assert_eq!(Maybe::combine_all(nothing), Maybe::absent());
//! ```

use std::ops::Add;

use super::semigroup::Semigroup;
use super::wrappers::{First, Last, Product, Sum};
use crate::optional::Maybe;

/// A type class for semigroups with an identity element.
pub trait Monoid: Semigroup {
    /// Returns the identity element for this monoid.
    fn empty() -> Self;

    /// Combines all elements, starting from the identity element.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybe::typeclass::Monoid;
    ///
    /// let parts = vec![String::from("a"), String::from("b")];
    /// assert_eq!(String::combine_all(parts), "ab");
    /// assert_eq!(String::combine_all(Vec::<String>::new()), "");
    /// ```
    fn combine_all<I>(iterator: I) -> Self
    where
        I: IntoIterator<Item = Self>,
        Self: Sized,
    {
        iterator
            .into_iter()
            .fold(Self::empty(), Self::combine)
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

impl Monoid for () {
    fn empty() -> Self {}
}

/// The identity element is `Absent`.
impl<T: Semigroup> Monoid for Maybe<T> {
    fn empty() -> Self {
        Self::Absent
    }
}

impl<A: Add<Output = A> + Default> Monoid for Sum<A> {
    fn empty() -> Self {
        Self(A::default())
    }
}

macro_rules! product_monoid {
    ($($numeric:ty => $one:expr),+ $(,)?) => {
        $(
            impl Monoid for Product<$numeric> {
                fn empty() -> Self {
                    Self($one)
                }
            }
        )+
    };
}

product_monoid!(
    i8 => 1, i16 => 1, i32 => 1, i64 => 1, i128 => 1, isize => 1,
    u8 => 1, u16 => 1, u32 => 1, u64 => 1, u128 => 1, usize => 1,
    f32 => 1.0, f64 => 1.0,
);

impl<A> Monoid for First<A> {
    fn empty() -> Self {
        Self(Maybe::Absent)
    }
}

impl<A> Monoid for Last<A> {
    fn empty() -> Self {
        Self(Maybe::Absent)
    }
}
