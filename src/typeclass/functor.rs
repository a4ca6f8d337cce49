//! Functor type class - mapping over container values.
//!
//! This module provides the `Functor` trait, which represents types that can
//! have a function applied to their inner value while preserving structure.
//! For [`Maybe`], the structure is presence or absence: mapping never turns
//! a `Present` into an `Absent` or the other way round.
//!
//! # Laws
//!
//! ## Identity Law
//!
//! ```text
//! fa.fmap(|x| x) == fa
//! ```
//!
//! ## Composition Law
//!
//! ```text
//! fa.fmap(f).fmap(g) == fa.fmap(|x| g(f(x)))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use maybe::optional::Maybe;
//! use maybe::typeclass::Functor;
//!
//! let transformed: Maybe<String> = Maybe::present(5).fmap(|n| n.to_string());
//! assert_eq!(transformed, Maybe::present("5".to_string()));
//!
//! let transformed: Maybe<String> = Maybe::<i32>::absent().fmap(|n| n.to_string());
//! assert_eq!(transformed, Maybe::absent());
//! ```

use super::higher::TypeConstructor;
use crate::optional::Maybe;

/// A type class for types that can have a function mapped over their contents.
///
/// # Laws
///
/// ## Identity Law
///
/// ```text
/// fa.fmap(|x| x) == fa
/// ```
///
/// ## Composition Law
///
/// ```text
/// fa.fmap(f).fmap(g) == fa.fmap(|x| g(f(x)))
/// ```
pub trait Functor: TypeConstructor {
    /// Applies a function to the value inside the functor.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybe::optional::Maybe;
    /// use maybe::typeclass::Functor;
    ///
    /// assert_eq!(Maybe::present(5).fmap(|n| n * 2), Maybe::present(10));
    /// ```
    fn fmap<B, F>(self, function: F) -> Self::WithType<B>
    where
        F: FnOnce(Self::Inner) -> B;

    /// Applies a function to a reference of the value inside the functor.
    ///
    /// The functor is left untouched, so this also works for payloads that
    /// are not `Clone`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybe::optional::Maybe;
    /// use maybe::typeclass::Functor;
    ///
    /// let word = Maybe::present("hello".to_string());
    /// assert_eq!(word.fmap_ref(|s| s.len()), Maybe::present(5));
    /// assert!(word.is_present());
    /// ```
    fn fmap_ref<B, F>(&self, function: F) -> Self::WithType<B>
    where
        F: FnOnce(&Self::Inner) -> B;

    /// Replaces the value inside the functor with a constant value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybe::optional::Maybe;
    /// use maybe::typeclass::Functor;
    ///
    /// assert_eq!(Maybe::present(5).replace("replaced"), Maybe::present("replaced"));
    /// assert_eq!(Maybe::<i32>::absent().replace("replaced"), Maybe::absent());
    /// ```
    #[inline]
    fn replace<B>(self, value: B) -> Self::WithType<B>
    where
        Self: Sized,
    {
        self.fmap(|_| value)
    }

    /// Discards the value inside the functor, keeping only its shape.
    #[inline]
    fn void(self) -> Self::WithType<()>
    where
        Self: Sized,
    {
        self.replace(())
    }
}

impl<A> Functor for Maybe<A> {
    #[inline]
    fn fmap<B, F>(self, function: F) -> Maybe<B>
    where
        F: FnOnce(A) -> B,
    {
        self.map(function)
    }

    #[inline]
    fn fmap_ref<B, F>(&self, function: F) -> Maybe<B>
    where
        F: FnOnce(&A) -> B,
    {
        self.as_ref().map(function)
    }
}
