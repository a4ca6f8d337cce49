//! Semigroup type class - types with an associative binary operation.
//!
//! # Laws
//!
//! ## Associativity
//!
//! ```text
//! (a.combine(b)).combine(c) == a.combine(b.combine(c))
//! ```
//!
//! # Maybe as a Semigroup
//!
//! `Maybe<T>` combines whenever `T` does. Present payloads are combined,
//! and an absent side is skipped:
//!
//! ```rust
//! use maybe::optional::Maybe;
//! use maybe::typeclass::Semigroup;
//!
//! let greeting = Maybe::present("Hello, ".to_string());
//! let name = Maybe::present("World!".to_string());
//! assert_eq!(greeting.combine(name), Maybe::present("Hello, World!".to_string()));
//!
//! let lonely = Maybe::present(vec![1]).combine(Maybe::absent());
//! assert_eq!(lonely, Maybe::present(vec![1]));
//! ```

use std::ops::{Add, Mul};

use super::wrappers::{First, Last, Product, Sum};
use crate::optional::Maybe;

/// A type class for types with an associative binary operation.
pub trait Semigroup {
    /// Combines two values into one.
    ///
    /// This operation must be associative.
    #[must_use]
    fn combine(self, other: Self) -> Self;

    /// Combines two values by reference, returning a new value.
    ///
    /// The default implementation clones both values and calls `combine`.
    #[must_use]
    fn combine_ref(&self, other: &Self) -> Self
    where
        Self: Clone,
    {
        self.clone().combine(other.clone())
    }

    /// Reduces all elements using the semigroup operation.
    ///
    /// Returns `Absent` if the iterator is empty. For a version that falls
    /// back to the identity element, see
    /// [`Monoid::combine_all`](super::Monoid::combine_all).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybe::optional::Maybe;
    /// use maybe::typeclass::Semigroup;
    ///
    /// let parts = vec![String::from("a"), String::from("b"), String::from("c")];
    /// assert_eq!(String::reduce_all(parts), Maybe::present(String::from("abc")));
    ///
    /// let empty: Vec<String> = vec![];
    /// assert_eq!(String::reduce_all(empty), Maybe::absent());
    /// ```
    fn reduce_all<I>(iterator: I) -> Maybe<Self>
    where
        I: IntoIterator<Item = Self>,
        Self: Sized,
    {
        iterator
            .into_iter()
            .reduce(Self::combine)
            .into()
    }
}

impl Semigroup for String {
    fn combine(mut self, other: Self) -> Self {
        self.push_str(&other);
        self
    }

    fn combine_ref(&self, other: &Self) -> Self {
        let mut result = Self::with_capacity(self.len() + other.len());
        result.push_str(self);
        result.push_str(other);
        result
    }
}

impl<T: Clone> Semigroup for Vec<T> {
    fn combine(mut self, mut other: Self) -> Self {
        self.append(&mut other);
        self
    }
}

/// The unit type forms a trivial semigroup.
impl Semigroup for () {
    fn combine(self, _other: Self) -> Self {}
}

/// `Maybe` lifts a semigroup, treating `Absent` as "nothing to add":
///
/// - `Present(a).combine(Present(b))` = `Present(a.combine(b))`
/// - `Present(a).combine(Absent)` = `Present(a)`
/// - `Absent.combine(Present(b))` = `Present(b)`
/// - `Absent.combine(Absent)` = `Absent`
impl<T: Semigroup> Semigroup for Maybe<T> {
    fn combine(self, other: Self) -> Self {
        match (self, other) {
            (Self::Present(left), Self::Present(right)) => Self::Present(left.combine(right)),
            (Self::Present(value), Self::Absent) | (Self::Absent, Self::Present(value)) => {
                Self::Present(value)
            }
            (Self::Absent, Self::Absent) => Self::Absent,
        }
    }
}

impl<A: Add<Output = A>> Semigroup for Sum<A> {
    fn combine(self, other: Self) -> Self {
        Self(self.0 + other.0)
    }
}

impl<A: Mul<Output = A>> Semigroup for Product<A> {
    fn combine(self, other: Self) -> Self {
        Self(self.0 * other.0)
    }
}

impl<A> Semigroup for First<A> {
    fn combine(self, other: Self) -> Self {
        Self(self.0.alt(other.0))
    }
}

impl<A> Semigroup for Last<A> {
    fn combine(self, other: Self) -> Self {
        Self(other.0.alt(self.0))
    }
}
