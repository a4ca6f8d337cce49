//! Foldable type class - folding structures into summary values.
//!
//! A [`Maybe`] folds like a collection of at most one element: folding an
//! `Absent` returns the initial accumulator untouched.
//!
//! # Examples
//!
//! ```rust
//! use maybe::optional::Maybe;
//! use maybe::typeclass::{Foldable, Sum};
//!
//! let total = Maybe::present(5).fold_left(10, |accumulator, element| accumulator + element);
//! assert_eq!(total, 15);
//!
//! let sum: Sum<i32> = Maybe::<i32>::absent().fold_map(Sum);
//! assert_eq!(sum, Sum(0));
//! ```

use super::higher::TypeConstructor;
use super::monoid::Monoid;
use crate::optional::Maybe;

/// A type class for structures that can be folded to a summary value.
pub trait Foldable: TypeConstructor {
    /// Folds the structure from left to right with an accumulator.
    fn fold_left<B, F>(self, init: B, function: F) -> B
    where
        F: FnMut(B, Self::Inner) -> B;

    /// Folds the structure from right to left with an accumulator.
    fn fold_right<B, F>(self, init: B, function: F) -> B
    where
        F: FnMut(Self::Inner, B) -> B;

    /// Maps each element to a `Monoid` and combines all results.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybe::optional::Maybe;
    /// use maybe::typeclass::{Foldable, Product};
    ///
    /// let product: Product<i32> = Maybe::present(6).fold_map(Product);
    /// assert_eq!(product, Product(6));
    /// ```
    fn fold_map<M, F>(self, mut function: F) -> M
    where
        M: Monoid,
        F: FnMut(Self::Inner) -> M,
        Self: Sized,
    {
        self.fold_left(M::empty(), |accumulator, element| {
            accumulator.combine(function(element))
        })
    }

    /// Returns whether the structure contains no elements.
    fn is_empty(&self) -> bool;

    /// Returns the number of elements in the structure.
    fn length(&self) -> usize;

    /// Converts the structure to a `Vec` containing all elements.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybe::optional::Maybe;
    /// use maybe::typeclass::Foldable;
    ///
    /// assert_eq!(Maybe::present(42).to_list(), vec![42]);
    /// assert_eq!(Maybe::<i32>::absent().to_list(), Vec::<i32>::new());
    /// ```
    fn to_list(self) -> Vec<Self::Inner>
    where
        Self: Sized,
    {
        self.fold_left(Vec::new(), |mut accumulator, element| {
            accumulator.push(element);
            accumulator
        })
    }

    /// Finds the first element satisfying a predicate.
    fn find<P>(self, mut predicate: P) -> Maybe<Self::Inner>
    where
        P: FnMut(&Self::Inner) -> bool,
        Self: Sized,
    {
        self.fold_left(Maybe::Absent, |accumulator, element| match accumulator {
            Maybe::Present(found) => Maybe::Present(found),
            Maybe::Absent => Maybe::Present(element).filter(|candidate| predicate(candidate)),
        })
    }

    /// Checks if any element satisfies the predicate.
    fn exists<P>(&self, predicate: P) -> bool
    where
        P: FnMut(&Self::Inner) -> bool;

    /// Checks if all elements satisfy the predicate.
    ///
    /// Vacuously `true` for an empty structure.
    fn for_all<P>(&self, mut predicate: P) -> bool
    where
        P: FnMut(&Self::Inner) -> bool,
    {
        !self.exists(|element| !predicate(element))
    }
}

impl<A> Foldable for Maybe<A> {
    fn fold_left<B, F>(self, init: B, mut function: F) -> B
    where
        F: FnMut(B, A) -> B,
    {
        match self {
            Self::Present(element) => function(init, element),
            Self::Absent => init,
        }
    }

    fn fold_right<B, F>(self, init: B, mut function: F) -> B
    where
        F: FnMut(A, B) -> B,
    {
        match self {
            Self::Present(element) => function(element, init),
            Self::Absent => init,
        }
    }

    #[inline]
    fn is_empty(&self) -> bool {
        self.is_absent()
    }

    #[inline]
    fn length(&self) -> usize {
        usize::from(self.is_present())
    }

    fn exists<P>(&self, mut predicate: P) -> bool
    where
        P: FnMut(&A) -> bool,
    {
        match self {
            Self::Present(element) => predicate(element),
            Self::Absent => false,
        }
    }
}
