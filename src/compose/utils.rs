//! Composition functions behind the macros.
//!
//! - [`identity`]: returns its argument unchanged
//! - [`compose_pair`]: plain composition of two functions, `outer ∘ inner`
//! - [`kleisli`]: composition of two `Maybe`-returning steps
//!
//! `identity` is the function the functor identity law is stated with:
//! `m.map(identity) == m`. `Maybe::present` plays the same role for
//! [`kleisli`].

use crate::optional::Maybe;

/// Returns the value unchanged.
///
/// # Examples
///
/// ```
/// use maybe::compose::identity;
/// use maybe::optional::Maybe;
///
/// assert_eq!(identity(42), 42);
/// assert_eq!(Maybe::present("x").map(identity), Maybe::present("x"));
/// ```
#[inline]
pub const fn identity<T>(value: T) -> T {
    value
}

/// Composes two functions: `compose_pair(outer, inner)(x) == outer(inner(x))`.
///
/// This is the two-argument building block of [`compose!`](crate::compose!).
///
/// # Examples
///
/// ```
/// use maybe::compose::compose_pair;
/// use maybe::optional::Maybe;
///
/// let length_doubled = compose_pair(|n: usize| n * 2, |text: &str| text.len());
/// assert_eq!(length_doubled("abc"), 6);
/// assert_eq!(Maybe::present("ab").map(length_doubled), Maybe::present(4));
/// ```
#[inline]
pub fn compose_pair<A, B, C, F, G>(outer: F, inner: G) -> impl Fn(A) -> C
where
    F: Fn(B) -> C,
    G: Fn(A) -> B,
{
    move |input| outer(inner(input))
}

/// Composes two steps that may come up empty, left to right.
///
/// `kleisli(first, second)(x) == first(x).and_then(second)`. `second` runs
/// only when `first` produced a value.
///
/// # Laws
///
/// - **Left Identity**: `kleisli(Maybe::present, f) == f`
/// - **Right Identity**: `kleisli(f, Maybe::present) == f`
/// - **Associativity**: `kleisli(kleisli(f, g), h) == kleisli(f, kleisli(g, h))`
///
/// # Examples
///
/// ```
/// use maybe::compose::kleisli;
/// use maybe::optional::Maybe;
///
/// fn parse(text: &str) -> Maybe<u32> {
///     Maybe::from(text.parse().ok())
/// }
///
/// fn non_zero(n: u32) -> Maybe<u32> {
///     if n == 0 { Maybe::absent() } else { Maybe::present(n) }
/// }
///
/// let parse_non_zero = kleisli(parse, non_zero);
/// assert_eq!(parse_non_zero("7"), Maybe::present(7));
/// assert_eq!(parse_non_zero("0"), Maybe::absent());
/// assert_eq!(parse_non_zero("seven"), Maybe::absent());
/// ```
#[inline]
pub fn kleisli<A, B, C, F, G>(first: F, second: G) -> impl Fn(A) -> Maybe<C>
where
    F: Fn(A) -> Maybe<B>,
    G: Fn(B) -> Maybe<C>,
{
    move |input| first(input).and_then(&second)
}
