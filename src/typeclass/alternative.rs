//! Alternative type class - choice on Applicative functors.
//!
//! `Alternative` extends `Applicative` with:
//!
//! - `empty`: the failed computation
//! - `alt`: fall back to another computation
//! - `guard`: succeed only if a condition holds
//! - `optional`: turn failure into a successful "nothing"
//! - `choice`: the first success among many
//!
//! # Laws
//!
//! ```text
//! empty.alt(x) == x
//! x.alt(empty) == x
//! (x.alt(y)).alt(z) == x.alt(y.alt(z))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use maybe::optional::Maybe;
//! use maybe::typeclass::{Alternative, Functor};
//!
//! fn positive(n: i32) -> Maybe<i32> {
//!     <Maybe<()>>::guard(n > 0).fmap(move |()| n)
//! }
//! assert_eq!(positive(5), Maybe::present(5));
//! assert_eq!(positive(-3), Maybe::absent());
//!
//! let cached: Maybe<&str> = Maybe::absent();
//! assert_eq!(Alternative::alt(cached, Maybe::present("fetched")), Maybe::present("fetched"));
//! ```

use super::applicative::Applicative;
use crate::optional::Maybe;

/// A type class for applicative functors with choice.
///
/// # Laws
///
/// ```text
/// empty.alt(x) == x
/// x.alt(empty) == x
/// (x.alt(y)).alt(z) == x.alt(y.alt(z))
/// ```
pub trait Alternative: Applicative {
    /// Returns the identity element for `alt`: the failed computation.
    fn empty<B>() -> Self::WithType<B>;

    /// Returns `self` if it succeeded, otherwise `alternative`.
    #[must_use]
    fn alt(self, alternative: Self) -> Self;

    /// `pure(())` if `condition` holds, `empty` otherwise.
    #[inline]
    #[must_use]
    fn guard(condition: bool) -> Self::WithType<()>
    where
        Self: Sized,
    {
        if condition {
            Self::pure(())
        } else {
            Self::empty()
        }
    }

    /// Makes a computation optional: the result always succeeds and holds
    /// whether the original did.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybe::optional::Maybe;
    /// use maybe::typeclass::Alternative;
    ///
    /// assert_eq!(Maybe::present(42).optional(), Maybe::present(Maybe::present(42)));
    /// assert_eq!(Maybe::<i32>::absent().optional(), Maybe::present(Maybe::absent()));
    /// ```
    fn optional(self) -> Self::WithType<Maybe<Self::Inner>>
    where
        Self: Sized;

    /// Returns the first success among `alternatives`, or `empty`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybe::optional::Maybe;
    /// use maybe::typeclass::Alternative;
    ///
    /// let sources = vec![Maybe::absent(), Maybe::present(1), Maybe::present(2)];
    /// assert_eq!(Maybe::choice(sources), Maybe::present(1));
    /// ```
    fn choice<I>(alternatives: I) -> Self
    where
        I: IntoIterator<Item = Self>,
        Self: Sized;
}

impl<A> Alternative for Maybe<A> {
    #[inline]
    fn empty<B>() -> Maybe<B> {
        Maybe::Absent
    }

    #[inline]
    fn alt(self, alternative: Self) -> Self {
        Self::alt(self, alternative)
    }

    #[inline]
    fn optional(self) -> Maybe<Self> {
        Maybe::Present(self)
    }

    #[inline]
    fn choice<I>(alternatives: I) -> Self
    where
        I: IntoIterator<Item = Self>,
    {
        alternatives
            .into_iter()
            .find(Self::is_present)
            .unwrap_or(Self::Absent)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn maybe_empty_is_absent() {
        let empty: Maybe<i32> = <Maybe<()> as Alternative>::empty();
        assert_eq!(empty, Maybe::absent());
    }

    #[rstest]
    #[case(Maybe::absent(), Maybe::present(2), Maybe::present(2))]
    #[case(Maybe::present(1), Maybe::absent(), Maybe::present(1))]
    #[case(Maybe::present(1), Maybe::present(2), Maybe::present(1))]
    #[case(Maybe::absent(), Maybe::absent(), Maybe::absent())]
    fn maybe_alt(#[case] first: Maybe<i32>, #[case] second: Maybe<i32>, #[case] expected: Maybe<i32>) {
        assert_eq!(Alternative::alt(first, second), expected);
    }

    #[rstest]
    #[case(true, Maybe::present(()))]
    #[case(false, Maybe::absent())]
    fn maybe_guard(#[case] condition: bool, #[case] expected: Maybe<()>) {
        assert_eq!(<Maybe<()>>::guard(condition), expected);
    }

    #[rstest]
    fn maybe_choice_all_absent() {
        let sources: Vec<Maybe<i32>> = vec![Maybe::absent(), Maybe::absent()];
        assert_eq!(Maybe::choice(sources), Maybe::absent());
    }

    #[rstest]
    fn maybe_choice_empty_iterator() {
        assert_eq!(Maybe::<i32>::choice(Vec::new()), Maybe::absent());
    }

    /// Associativity: (x.alt(y)).alt(z) == x.alt(y.alt(z))
    #[rstest]
    fn maybe_alt_associativity() {
        let x: Maybe<i32> = Maybe::absent();
        let y = Maybe::present(2);
        let z = Maybe::present(3);
        assert_eq!(
            Alternative::alt(Alternative::alt(x, y), z),
            Alternative::alt(x, Alternative::alt(y, z))
        );
    }
}
