//! Maybe type - a value that may or may not be present.
//!
//! This module provides the `Maybe<T>` type, which is either `Present(T)`
//! or `Absent`. `Absent` carries no payload: it says "nothing is there"
//! and nothing more.
//!
//! # Examples
//!
//! ```rust
//! use maybe::optional::Maybe;
//!
//! let present: Maybe<i32> = Maybe::present(42);
//! let absent: Maybe<i32> = Maybe::absent();
//!
//! // Case analysis must handle both variants
//! let describe = |value: Maybe<i32>| match value {
//!     Maybe::Present(number) => format!("got {number}"),
//!     Maybe::Absent => "nothing".to_string(),
//! };
//! assert_eq!(describe(present), "got 42");
//! assert_eq!(describe(absent), "nothing");
//! ```

use std::fmt;

use super::iter::Iter;

/// A value of type `T` that may be absent.
///
/// `Maybe<T>` is either `Present(T)`, holding exactly one value, or
/// `Absent`, holding nothing. Once built, a `Maybe` never changes variant or
/// payload; every operation consumes or borrows it and returns a new value.
///
/// The payload can only be obtained as a plain `T` through
/// [`get_or_else`](Self::get_or_else) (or its lazy sibling
/// [`get_or_else_with`](Self::get_or_else_with)) and through case analysis
/// with [`fold`](Self::fold) or `match`. There is no `unwrap`.
///
/// `Absent` sorts before any `Present` value, matching `Option`.
///
/// # Examples
///
/// ```rust
/// use maybe::optional::Maybe;
///
/// let price = Maybe::present(10).map(|cents| cents * 3);
/// assert_eq!(price, Maybe::present(30));
/// assert_eq!(price.get_or_else(0), 30);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
pub enum Maybe<T> {
    /// No value is present.
    #[default]
    Absent,
    /// A value is present.
    Present(T),
}

impl<T> Maybe<T> {
    // =========================================================================
    // Construction
    // =========================================================================

    /// Wraps a value as `Present`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybe::optional::Maybe;
    ///
    /// assert_eq!(Maybe::present("hello"), Maybe::Present("hello"));
    /// ```
    #[inline]
    pub const fn present(value: T) -> Self {
        Self::Present(value)
    }

    /// Returns `Absent`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybe::optional::Maybe;
    ///
    /// let nothing: Maybe<String> = Maybe::absent();
    /// assert!(nothing.is_absent());
    /// ```
    #[inline]
    pub const fn absent() -> Self {
        Self::Absent
    }

    // =========================================================================
    // Inspection
    // =========================================================================

    /// Returns `true` if this is a `Present` value.
    #[inline]
    pub const fn is_present(&self) -> bool {
        matches!(self, Self::Present(_))
    }

    /// Returns `true` if this is `Absent`.
    #[inline]
    pub const fn is_absent(&self) -> bool {
        matches!(self, Self::Absent)
    }

    /// Borrows the payload, producing a `Maybe<&T>`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybe::optional::Maybe;
    ///
    /// let name = Maybe::present("Ada".to_string());
    /// let length = name.as_ref().map(|text| text.len());
    /// assert_eq!(length, Maybe::present(3));
    /// // `name` is still usable
    /// assert_eq!(name, Maybe::present("Ada".to_string()));
    /// ```
    #[inline]
    pub const fn as_ref(&self) -> Maybe<&T> {
        match self {
            Self::Present(value) => Maybe::Present(value),
            Self::Absent => Maybe::Absent,
        }
    }

    /// Returns an iterator over the payload (zero or one element).
    #[inline]
    pub const fn iter(&self) -> Iter<'_, T> {
        Iter::new(self.as_ref())
    }

    // =========================================================================
    // Functor
    // =========================================================================

    /// Transforms the payload, preserving presence or absence.
    ///
    /// If this is `Present(x)`, returns `Present(function(x))`. If this is
    /// `Absent`, returns `Absent` and `function` is never called.
    ///
    /// # Laws
    ///
    /// ```text
    /// m.map(|x| x) == m
    /// m.map(f).map(g) == m.map(|x| g(f(x)))
    /// ```
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybe::optional::Maybe;
    ///
    /// assert_eq!(Maybe::present(5).map(|n| n.to_string()), Maybe::present("5".to_string()));
    /// assert_eq!(Maybe::<i32>::absent().map(|n| n.to_string()), Maybe::absent());
    /// ```
    #[inline]
    pub fn map<U, F>(self, function: F) -> Maybe<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Present(value) => Maybe::Present(function(value)),
            Self::Absent => Maybe::Absent,
        }
    }

    // =========================================================================
    // Monad
    // =========================================================================

    /// Sequences a computation that may itself produce nothing.
    ///
    /// If this is `Present(x)`, returns `function(x)` as-is; the function
    /// decides whether the result is present. If this is `Absent`, returns
    /// `Absent` without calling `function`.
    ///
    /// Chaining `and_then` replaces a pyramid of nested presence checks
    /// with a single left-to-right pipeline.
    ///
    /// # Laws
    ///
    /// ```text
    /// Maybe::present(a).and_then(f) == f(a)
    /// m.and_then(Maybe::present) == m
    /// m.and_then(f).and_then(g) == m.and_then(|x| f(x).and_then(g))
    /// ```
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybe::optional::Maybe;
    ///
    /// fn half(n: i32) -> Maybe<i32> {
    ///     if n % 2 == 0 { Maybe::present(n / 2) } else { Maybe::absent() }
    /// }
    ///
    /// assert_eq!(Maybe::present(8).and_then(half).and_then(half), Maybe::present(2));
    /// assert_eq!(Maybe::present(6).and_then(half).and_then(half), Maybe::absent());
    /// ```
    #[inline]
    pub fn and_then<U, F>(self, function: F) -> Maybe<U>
    where
        F: FnOnce(T) -> Maybe<U>,
    {
        match self {
            Self::Present(value) => function(value),
            Self::Absent => Maybe::Absent,
        }
    }

    // =========================================================================
    // Boundary
    // =========================================================================

    /// Leaves the `Maybe` world, substituting `default` for `Absent`.
    ///
    /// This is the sanctioned exit point. Call it at the edge of your
    /// program where the caller knows which default makes sense; keep
    /// threading `Maybe` through internal logic instead.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybe::optional::Maybe;
    ///
    /// assert_eq!(Maybe::present(3).get_or_else(0), 3);
    /// assert_eq!(Maybe::absent().get_or_else(0), 0);
    /// ```
    #[inline]
    pub fn get_or_else(self, default: T) -> T {
        match self {
            Self::Present(value) => value,
            Self::Absent => default,
        }
    }

    /// Like [`get_or_else`](Self::get_or_else), but computes the default
    /// only when it is needed.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybe::optional::Maybe;
    ///
    /// let label: Maybe<String> = Maybe::absent();
    /// assert_eq!(label.get_or_else_with(|| "untitled".to_string()), "untitled");
    /// ```
    #[inline]
    pub fn get_or_else_with<F>(self, default: F) -> T
    where
        F: FnOnce() -> T,
    {
        match self {
            Self::Present(value) => value,
            Self::Absent => default(),
        }
    }

    /// Eliminates the `Maybe` by handling both variants.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybe::optional::Maybe;
    ///
    /// let greeting = |name: Maybe<&str>| name.fold(|| "Hello!".to_string(), |n| format!("Hello, {n}!"));
    /// assert_eq!(greeting(Maybe::present("Ada")), "Hello, Ada!");
    /// assert_eq!(greeting(Maybe::absent()), "Hello!");
    /// ```
    #[inline]
    pub fn fold<U, A, P>(self, on_absent: A, on_present: P) -> U
    where
        A: FnOnce() -> U,
        P: FnOnce(T) -> U,
    {
        match self {
            Self::Present(value) => on_present(value),
            Self::Absent => on_absent(),
        }
    }

    /// Runs `function` on a borrowed payload, if there is one.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybe::optional::Maybe;
    ///
    /// let mut seen = Vec::new();
    /// Maybe::present(7).when_present(|n| seen.push(*n));
    /// Maybe::<i32>::absent().when_present(|n| seen.push(*n));
    /// assert_eq!(seen, vec![7]);
    /// ```
    #[inline]
    pub fn when_present<F>(&self, function: F)
    where
        F: FnOnce(&T),
    {
        match self {
            Self::Present(value) => function(value),
            Self::Absent => {}
        }
    }

    // =========================================================================
    // Selection
    // =========================================================================

    /// Keeps the payload only if it satisfies `predicate`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybe::optional::Maybe;
    ///
    /// assert_eq!(Maybe::present(4).filter(|n| n % 2 == 0), Maybe::present(4));
    /// assert_eq!(Maybe::present(3).filter(|n| n % 2 == 0), Maybe::absent());
    /// ```
    #[inline]
    #[must_use]
    pub fn filter<P>(self, predicate: P) -> Self
    where
        P: FnOnce(&T) -> bool,
    {
        match self {
            Self::Present(value) => {
                if predicate(&value) {
                    Self::Present(value)
                } else {
                    Self::Absent
                }
            }
            Self::Absent => Self::Absent,
        }
    }

    /// Returns `self` if present, otherwise `other`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybe::optional::Maybe;
    ///
    /// assert_eq!(Maybe::absent().alt(Maybe::present(2)), Maybe::present(2));
    /// assert_eq!(Maybe::present(1).alt(Maybe::present(2)), Maybe::present(1));
    /// ```
    #[inline]
    #[must_use]
    pub fn alt(self, other: Self) -> Self {
        match self {
            Self::Present(value) => Self::Present(value),
            Self::Absent => other,
        }
    }

    /// Returns `self` if present, otherwise the result of `alternative`.
    ///
    /// `alternative` is not called when `self` is present.
    #[inline]
    #[must_use]
    pub fn or_else<F>(self, alternative: F) -> Self
    where
        F: FnOnce() -> Self,
    {
        match self {
            Self::Present(value) => Self::Present(value),
            Self::Absent => alternative(),
        }
    }

    // =========================================================================
    // Combination
    // =========================================================================

    /// Pairs two payloads; absent if either side is absent.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybe::optional::Maybe;
    ///
    /// assert_eq!(Maybe::present(1).zip(Maybe::present("a")), Maybe::present((1, "a")));
    /// assert_eq!(Maybe::present(1).zip(Maybe::<&str>::absent()), Maybe::absent());
    /// ```
    #[inline]
    pub fn zip<U>(self, other: Maybe<U>) -> Maybe<(T, U)> {
        self.zip_with(other, |left, right| (left, right))
    }

    /// Combines two payloads with `function`; absent if either side is
    /// absent, in which case `function` is not called.
    #[inline]
    pub fn zip_with<U, R, F>(self, other: Maybe<U>, function: F) -> Maybe<R>
    where
        F: FnOnce(T, U) -> R,
    {
        match (self, other) {
            (Self::Present(left), Maybe::Present(right)) => Maybe::Present(function(left, right)),
            (Self::Present(_), Maybe::Absent) | (Self::Absent, Maybe::Present(_) | Maybe::Absent) => {
                Maybe::Absent
            }
        }
    }
}

// =============================================================================
// Applicative
// =============================================================================

impl<F> Maybe<F> {
    /// Applies a wrapped function to a wrapped argument.
    ///
    /// Returns `Present(f(x))` when both the function and the argument are
    /// present. Otherwise returns `Absent` and the function is never
    /// invoked.
    ///
    /// Together with [`map`](Maybe::map) this lifts a function of any
    /// arity: map a curried function over the first argument, then `apply`
    /// each remaining argument in turn.
    ///
    /// # Laws
    ///
    /// ```text
    /// Maybe::present(|x| x).apply(v) == v
    /// Maybe::present(f).apply(Maybe::present(x)) == Maybe::present(f(x))
    /// Maybe::present(f).apply(v) == v.map(f)
    /// ```
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybe::optional::Maybe;
    ///
    /// let volume = |width: u32| move |height: u32| move |depth: u32| width * height * depth;
    ///
    /// let result = Maybe::present(2).map(volume).apply(Maybe::present(3)).apply(Maybe::present(4));
    /// assert_eq!(result, Maybe::present(24));
    ///
    /// let missing = Maybe::present(2).map(volume).apply(Maybe::absent()).apply(Maybe::present(4));
    /// assert_eq!(missing, Maybe::absent());
    /// ```
    #[inline]
    pub fn apply<A, B>(self, argument: Maybe<A>) -> Maybe<B>
    where
        F: FnOnce(A) -> B,
    {
        match (self, argument) {
            (Self::Present(function), Maybe::Present(value)) => Maybe::Present(function(value)),
            (Self::Present(_), Maybe::Absent) | (Self::Absent, Maybe::Present(_) | Maybe::Absent) => {
                Maybe::Absent
            }
        }
    }
}

impl<T> Maybe<Maybe<T>> {
    /// Removes one level of nesting.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybe::optional::Maybe;
    ///
    /// assert_eq!(Maybe::present(Maybe::present(1)).flatten(), Maybe::present(1));
    /// assert_eq!(Maybe::present(Maybe::<i32>::absent()).flatten(), Maybe::absent());
    /// assert_eq!(Maybe::<Maybe<i32>>::absent().flatten(), Maybe::absent());
    /// ```
    #[inline]
    pub fn flatten(self) -> Maybe<T> {
        self.and_then(|inner| inner)
    }
}

#[cfg(test)]
impl<T> Maybe<T> {
    /// Unchecked extraction for test scaffolding only.
    ///
    /// Not part of the public API: production code must go through
    /// `get_or_else`, `fold` or `match`.
    ///
    /// # Panics
    ///
    /// Panics with `message` if this is `Absent`.
    pub(crate) fn expect_present(self, message: &str) -> T {
        match self {
            Self::Present(value) => value,
            Self::Absent => panic!("{message}"),
        }
    }
}

// =============================================================================
// Display Implementation
// =============================================================================

impl<T: fmt::Display> fmt::Display for Maybe<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Present(value) => write!(formatter, "Present({value})"),
            Self::Absent => formatter.write_str("Absent"),
        }
    }
}

// =============================================================================
// From Implementations
// =============================================================================

impl<T> From<Option<T>> for Maybe<T> {
    /// `Some(x)` becomes `Present(x)`, `None` becomes `Absent`.
    #[inline]
    fn from(option: Option<T>) -> Self {
        match option {
            Some(value) => Self::Present(value),
            None => Self::Absent,
        }
    }
}

impl<T> From<Maybe<T>> for Option<T> {
    /// `Present(x)` becomes `Some(x)`, `Absent` becomes `None`.
    #[inline]
    fn from(maybe: Maybe<T>) -> Self {
        match maybe {
            Maybe::Present(value) => Some(value),
            Maybe::Absent => None,
        }
    }
}

// =============================================================================
// Serde Support
// =============================================================================

#[cfg(feature = "serde")]
impl<T: serde::Serialize> serde::Serialize for Maybe<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        match self {
            Self::Present(value) => serializer.serialize_some(value),
            Self::Absent => serializer.serialize_none(),
        }
    }
}

#[cfg(feature = "serde")]
struct MaybeVisitor<T> {
    marker: std::marker::PhantomData<T>,
}

#[cfg(feature = "serde")]
impl<T> MaybeVisitor<T> {
    const fn new() -> Self {
        Self {
            marker: std::marker::PhantomData,
        }
    }
}

#[cfg(feature = "serde")]
impl<'de, T> serde::de::Visitor<'de> for MaybeVisitor<T>
where
    T: serde::Deserialize<'de>,
{
    type Value = Maybe<T>;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("an optional value")
    }

    fn visit_none<E>(self) -> Result<Self::Value, E>
    where
        E: serde::de::Error,
    {
        Ok(Maybe::Absent)
    }

    fn visit_unit<E>(self) -> Result<Self::Value, E>
    where
        E: serde::de::Error,
    {
        Ok(Maybe::Absent)
    }

    fn visit_some<D>(self, deserializer: D) -> Result<Self::Value, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        T::deserialize(deserializer).map(Maybe::Present)
    }
}

#[cfg(feature = "serde")]
impl<'de, T> serde::Deserialize<'de> for Maybe<T>
where
    T: serde::Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_option(MaybeVisitor::new())
    }
}

static_assertions::assert_impl_all!(Maybe<String>: Send, Sync, Clone, Eq, std::hash::Hash, Default);
static_assertions::assert_impl_all!(Maybe<i64>: Copy);
static_assertions::assert_not_impl_any!(Maybe<std::rc::Rc<i32>>: Send, Sync);
