//! Higher-Kinded Type emulation through Generic Associated Types.
//!
//! Rust cannot abstract over a type constructor like `Maybe<_>` directly.
//! [`TypeConstructor`] recovers that ability with a GAT: a `Maybe<A>` knows
//! its payload type (`Inner = A`) and how to name itself with another
//! payload (`WithType<B> = Maybe<B>`). Every type class in this crate is
//! defined on top of it.
//!
//! # Example
//!
//! ```rust
//! use maybe::optional::Maybe;
//! use maybe::typeclass::TypeConstructor;
//!
//! fn emptied<T: TypeConstructor>(_value: T) -> T::WithType<String>
//! where
//!     T::WithType<String>: Default,
//! {
//!     Default::default()
//! }
//!
//! let emptied: Maybe<String> = emptied(Maybe::present(42));
//! assert_eq!(emptied, Maybe::absent());
//! ```

use crate::optional::Maybe;

/// A trait representing a type constructor applied to a payload type.
///
/// # Laws
///
/// **Consistency**: `<F as TypeConstructor>::WithType<F::Inner>` is `F`.
pub trait TypeConstructor {
    /// The payload type this constructor is currently applied to.
    type Inner;

    /// The same constructor applied to `B`.
    ///
    /// The bound keeps the result a `TypeConstructor`, so transformations
    /// can be chained.
    type WithType<B>: TypeConstructor<Inner = B>;
}

impl<A> TypeConstructor for Maybe<A> {
    type Inner = A;
    type WithType<B> = Maybe<B>;
}
