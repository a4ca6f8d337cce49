//! Monad type class - sequencing computations within a context.
//!
//! `Monad` extends `Applicative` with `flat_map`, which lets the result of
//! one step decide what the next step is. For [`Maybe`], the first absent
//! step short-circuits everything after it.
//!
//! # Laws
//!
//! ## Left Identity Law
//!
//! ```text
//! Self::pure(a).flat_map(f) == f(a)
//! ```
//!
//! ## Right Identity Law
//!
//! ```text
//! m.flat_map(Self::pure) == m
//! ```
//!
//! ## Associativity Law
//!
//! ```text
//! m.flat_map(f).flat_map(g) == m.flat_map(|x| f(x).flat_map(g))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use maybe::optional::Maybe;
//! use maybe::typeclass::Monad;
//!
//! fn parse_positive(text: &str) -> Maybe<i32> {
//!     Maybe::from(text.parse::<i32>().ok()).filter(|&n| n > 0)
//! }
//!
//! let result = Maybe::present("42")
//!     .flat_map(parse_positive)
//!     .flat_map(|n| Maybe::present(n * 2));
//! assert_eq!(result, Maybe::present(84));
//! ```

use super::applicative::Applicative;
use crate::optional::Maybe;

/// A type class for types that support sequencing of computations.
///
/// # Laws
///
/// ```text
/// Self::pure(a).flat_map(f) == f(a)
/// m.flat_map(Self::pure) == m
/// m.flat_map(f).flat_map(g) == m.flat_map(|x| f(x).flat_map(g))
/// ```
pub trait Monad: Applicative {
    /// Applies a function to the value inside the monad and flattens the result.
    ///
    /// In Haskell, this is `>>=` (bind).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybe::optional::Maybe;
    /// use maybe::typeclass::Monad;
    ///
    /// let w = Maybe::present(5).flat_map(|n| if n > 10 { Maybe::present(n) } else { Maybe::absent() });
    /// assert_eq!(w, Maybe::absent());
    /// ```
    fn flat_map<B, F>(self, function: F) -> Self::WithType<B>
    where
        F: FnOnce(Self::Inner) -> Self::WithType<B>;

    /// Alias for `flat_map`.
    #[inline]
    fn and_then<B, F>(self, function: F) -> Self::WithType<B>
    where
        Self: Sized,
        F: FnOnce(Self::Inner) -> Self::WithType<B>,
    {
        self.flat_map(function)
    }

    /// Sequences two computations, discarding the first result.
    ///
    /// In Haskell, this is the `>>` operator.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybe::optional::Maybe;
    /// use maybe::typeclass::Monad;
    ///
    /// assert_eq!(Maybe::present(5).then(Maybe::present("hello")), Maybe::present("hello"));
    /// assert_eq!(Maybe::<i32>::absent().then(Maybe::present("hello")), Maybe::absent());
    /// ```
    #[inline]
    fn then<B>(self, next: Self::WithType<B>) -> Self::WithType<B>
    where
        Self: Sized,
    {
        self.flat_map(|_| next)
    }
}

impl<A> Monad for Maybe<A> {
    #[inline]
    fn flat_map<B, F>(self, function: F) -> Maybe<B>
    where
        F: FnOnce(A) -> Maybe<B>,
    {
        Self::and_then(self, function)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn safe_reciprocal(n: i32) -> Maybe<f64> {
        if n == 0 {
            Maybe::absent()
        } else {
            Maybe::present(1.0 / f64::from(n))
        }
    }

    #[rstest]
    fn maybe_flat_map_present() {
        assert_eq!(Maybe::present(4).flat_map(safe_reciprocal), Maybe::present(0.25));
    }

    #[rstest]
    fn maybe_flat_map_step_decides_absence() {
        assert_eq!(Maybe::present(0).flat_map(safe_reciprocal), Maybe::absent());
    }

    #[rstest]
    fn maybe_flat_map_absent() {
        assert_eq!(Maybe::<i32>::absent().flat_map(safe_reciprocal), Maybe::absent());
    }

    #[rstest]
    fn maybe_then_with_absent_next() {
        assert_eq!(Maybe::present(1).then(Maybe::<i32>::absent()), Maybe::absent());
    }

    /// Left identity: pure(a).flat_map(f) == f(a)
    #[rstest]
    #[case(0)]
    #[case(8)]
    fn maybe_left_identity_law(#[case] value: i32) {
        let left = <Maybe<()>>::pure(value).flat_map(safe_reciprocal);
        assert_eq!(left, safe_reciprocal(value));
    }

    /// Right identity: m.flat_map(pure) == m
    #[rstest]
    #[case(Maybe::present(3))]
    #[case(Maybe::absent())]
    fn maybe_right_identity_law(#[case] value: Maybe<i32>) {
        assert_eq!(value.flat_map(<Maybe<()>>::pure), value);
    }
}
