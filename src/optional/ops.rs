//! Free-function forms of the core operations.
//!
//! These mirror the inherent methods on [`Maybe`] with the argument order
//! used in prose about optional values: the function comes first for
//! `map` and `apply`, the container first for `and_then`, and the default
//! first for `get_or_else`. They are handy for point-free composition and
//! for passing the operations around as values.
//!
//! # Examples
//!
//! ```rust
//! use maybe::optional::{Maybe, absent, and_then, get_or_else, map, present};
//!
//! let doubled = map(|n: i32| n * 2, present(21));
//! assert_eq!(doubled, Maybe::present(42));
//!
//! let checked = and_then(doubled, |n| if n > 40 { present(n) } else { absent() });
//! assert_eq!(get_or_else(0, checked), 42);
//! ```

use super::maybe::Maybe;

/// Wraps `value` as `Present`.
#[inline]
pub const fn present<T>(value: T) -> Maybe<T> {
    Maybe::Present(value)
}

/// Returns `Absent` for any payload type.
#[inline]
pub const fn absent<T>() -> Maybe<T> {
    Maybe::Absent
}

/// Applies `function` to the payload of `maybe`, if any.
///
/// See [`Maybe::map`].
#[inline]
pub fn map<T, U, F>(function: F, maybe: Maybe<T>) -> Maybe<U>
where
    F: FnOnce(T) -> U,
{
    maybe.map(function)
}

/// Applies a wrapped function to a wrapped argument.
///
/// See [`Maybe::apply`].
///
/// # Examples
///
/// ```rust
/// use maybe::optional::{absent, apply, present};
///
/// let increment = present(|n: i32| n + 1);
/// assert_eq!(apply(increment, present(1)), present(2));
/// assert_eq!(apply(absent::<fn(i32) -> i32>(), present(1)), absent());
/// ```
#[inline]
pub fn apply<T, U, F>(function: Maybe<F>, argument: Maybe<T>) -> Maybe<U>
where
    F: FnOnce(T) -> U,
{
    function.apply(argument)
}

/// Feeds the payload of `maybe` into a step that may produce nothing.
///
/// See [`Maybe::and_then`].
#[inline]
pub fn and_then<T, U, F>(maybe: Maybe<T>, function: F) -> Maybe<U>
where
    F: FnOnce(T) -> Maybe<U>,
{
    maybe.and_then(function)
}

/// Returns the payload of `maybe`, or `default` when it is absent.
///
/// See [`Maybe::get_or_else`].
#[inline]
pub fn get_or_else<T>(default: T, maybe: Maybe<T>) -> T {
    maybe.get_or_else(default)
}
