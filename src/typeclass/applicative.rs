//! Applicative type class - applying functions within contexts.
//!
//! `Applicative` extends `Functor` with:
//!
//! - `pure`: lift a plain value into the context
//! - `apply`: apply a wrapped function to a wrapped argument
//! - `map2`, `map3`, `product`: combine independent wrapped values
//!
//! For [`Maybe`], combining succeeds only when every input is present.
//!
//! # Laws
//!
//! ## Identity Law
//!
//! ```text
//! pure(|x| x).apply(v) == v
//! ```
//!
//! ## Homomorphism Law
//!
//! ```text
//! pure(f).apply(pure(x)) == pure(f(x))
//! ```
//!
//! ## Interchange Law
//!
//! ```text
//! u.apply(pure(y)) == pure(|f| f(y)).apply(u)
//! ```
//!
//! ## Consistency with Functor
//!
//! ```text
//! pure(f).apply(v) == v.fmap(f)
//! ```
//!
//! # Examples
//!
//! ```rust
//! use maybe::optional::Maybe;
//! use maybe::typeclass::Applicative;
//!
//! let x: Maybe<i32> = <Maybe<()>>::pure(42);
//! assert_eq!(x, Maybe::present(42));
//!
//! let sum = Maybe::present(1).map2(Maybe::present(2), |x, y| x + y);
//! assert_eq!(sum, Maybe::present(3));
//!
//! let pair = Maybe::present(1).product(Maybe::present("hello"));
//! assert_eq!(pair, Maybe::present((1, "hello")));
//! ```

use super::functor::Functor;
use crate::optional::Maybe;

/// A type class for types that support lifting values and combining contexts.
///
/// # Laws
///
/// ```text
/// pure(|x| x).apply(v) == v
/// pure(f).apply(pure(x)) == pure(f(x))
/// u.apply(pure(y)) == pure(|f| f(y)).apply(u)
/// ```
pub trait Applicative: Functor {
    /// Lifts a pure value into the applicative context.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybe::optional::Maybe;
    /// use maybe::typeclass::Applicative;
    ///
    /// let x: Maybe<&str> = <Maybe<()>>::pure("hello");
    /// assert_eq!(x, Maybe::present("hello"));
    /// ```
    fn pure<B>(value: B) -> Self::WithType<B>;

    /// Combines two applicative values using a binary function.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybe::optional::Maybe;
    /// use maybe::typeclass::Applicative;
    ///
    /// assert_eq!(Maybe::present(1).map2(Maybe::present(2), |x, y| x + y), Maybe::present(3));
    /// assert_eq!(Maybe::present(1).map2(Maybe::<i32>::absent(), |x, y| x + y), Maybe::absent());
    /// ```
    fn map2<B, C, F>(self, other: Self::WithType<B>, function: F) -> Self::WithType<C>
    where
        F: FnOnce(Self::Inner, B) -> C;

    /// Combines three applicative values using a ternary function.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybe::optional::Maybe;
    /// use maybe::typeclass::Applicative;
    ///
    /// let sum = Maybe::present(1).map3(Maybe::present(2), Maybe::present(3), |x, y, z| x + y + z);
    /// assert_eq!(sum, Maybe::present(6));
    /// ```
    fn map3<B, C, D, F>(
        self,
        second: Self::WithType<B>,
        third: Self::WithType<C>,
        function: F,
    ) -> Self::WithType<D>
    where
        F: FnOnce(Self::Inner, B, C) -> D;

    /// Combines two applicative values into a tuple.
    #[inline]
    fn product<B>(self, other: Self::WithType<B>) -> Self::WithType<(Self::Inner, B)>
    where
        Self: Sized,
    {
        self.map2(other, |a, b| (a, b))
    }

    /// Keeps the left value; the right one only has to be present.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybe::optional::Maybe;
    /// use maybe::typeclass::Applicative;
    ///
    /// assert_eq!(Maybe::present(1).product_left(Maybe::present(2)), Maybe::present(1));
    /// assert_eq!(Maybe::present(1).product_left(Maybe::<i32>::absent()), Maybe::absent());
    /// ```
    #[inline]
    fn product_left<B>(self, other: Self::WithType<B>) -> Self::WithType<Self::Inner>
    where
        Self: Sized,
    {
        self.map2(other, |a, _| a)
    }

    /// Keeps the right value; the left one only has to be present.
    #[inline]
    fn product_right<B>(self, other: Self::WithType<B>) -> Self::WithType<B>
    where
        Self: Sized,
    {
        self.map2(other, |_, b| b)
    }

    /// Applies a function inside the context to a value inside the context.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybe::optional::Maybe;
    /// use maybe::typeclass::Applicative;
    ///
    /// let function: Maybe<fn(i32) -> i32> = Maybe::present((|x: i32| x + 1) as fn(i32) -> i32);
    /// assert_eq!(Applicative::apply(function, Maybe::present(5)), Maybe::present(6));
    /// ```
    fn apply<B, Output>(self, other: Self::WithType<B>) -> Self::WithType<Output>
    where
        Self: Sized,
        Self::Inner: FnOnce(B) -> Output;
}

impl<A> Applicative for Maybe<A> {
    #[inline]
    fn pure<B>(value: B) -> Maybe<B> {
        Maybe::Present(value)
    }

    #[inline]
    fn map2<B, C, F>(self, other: Maybe<B>, function: F) -> Maybe<C>
    where
        F: FnOnce(A, B) -> C,
    {
        self.zip_with(other, function)
    }

    #[inline]
    fn map3<B, C, D, F>(self, second: Maybe<B>, third: Maybe<C>, function: F) -> Maybe<D>
    where
        F: FnOnce(A, B, C) -> D,
    {
        self.zip(second)
            .zip_with(third, |(a, b), c| function(a, b, c))
    }

    #[inline]
    fn apply<B, Output>(self, other: Maybe<B>) -> Maybe<Output>
    where
        A: FnOnce(B) -> Output,
    {
        Self::apply(self, other)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn maybe_pure_is_present() {
        let value: Maybe<i32> = <Maybe<()>>::pure(7);
        assert_eq!(value, Maybe::present(7));
    }

    #[rstest]
    #[case(Maybe::present(1), Maybe::present(2), Maybe::present(3))]
    #[case(Maybe::present(1), Maybe::absent(), Maybe::absent())]
    #[case(Maybe::absent(), Maybe::present(2), Maybe::absent())]
    #[case(Maybe::absent(), Maybe::absent(), Maybe::absent())]
    fn maybe_map2(
        #[case] left: Maybe<i32>,
        #[case] right: Maybe<i32>,
        #[case] expected: Maybe<i32>,
    ) {
        assert_eq!(left.map2(right, |x, y| x + y), expected);
    }

    #[rstest]
    fn maybe_map3_absent_in_middle() {
        let result = Maybe::present(1).map3(Maybe::<i32>::absent(), Maybe::present(3), |x, y, z| {
            x + y + z
        });
        assert_eq!(result, Maybe::absent());
    }

    #[rstest]
    fn maybe_product_right() {
        assert_eq!(Maybe::present(1).product_right(Maybe::present("b")), Maybe::present("b"));
        assert_eq!(Maybe::<i32>::absent().product_right(Maybe::present("b")), Maybe::absent());
    }

    #[rstest]
    fn maybe_trait_apply_matches_inherent_apply() {
        let via_trait = Applicative::apply(Maybe::present(|n: i32| n * 3), Maybe::present(4));
        let via_inherent = Maybe::present(|n: i32| n * 3).apply(Maybe::present(4));
        assert_eq!(via_trait, via_inherent);
    }

    /// Homomorphism law: pure(f).apply(pure(x)) == pure(f(x))
    #[rstest]
    fn maybe_homomorphism_law() {
        let function = |n: i32| n.wrapping_mul(3);
        let left = <Maybe<()>>::pure(function).apply(<Maybe<()>>::pure(5));
        let right: Maybe<i32> = <Maybe<()>>::pure(function(5));
        assert_eq!(left, right);
    }

    /// Interchange law: u.apply(pure(y)) == pure(|f| f(y)).apply(u)
    #[rstest]
    fn maybe_interchange_law() {
        let wrapped: Maybe<fn(i32) -> i32> = Maybe::present((|n: i32| n + 10) as fn(i32) -> i32);
        let left = wrapped.apply(Maybe::present(5));
        let right = Maybe::present(|function: fn(i32) -> i32| function(5)).apply(wrapped);
        assert_eq!(left, right);
    }
}
