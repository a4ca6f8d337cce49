//! Type class traits and their instances for [`Maybe`](crate::optional::Maybe).
//!
//! - [`Functor`]: mapping over the payload
//! - [`Applicative`]: lifting values and applying wrapped functions
//! - [`Monad`]: sequencing steps that may produce nothing
//! - [`Foldable`]: folding to a summary value
//! - [`Alternative`]: falling back to another computation
//! - [`Semigroup`], [`Monoid`]: combining values, with `Absent` as identity
//!
//! ## Higher-Kinded Types Emulation
//!
//! Rust has no native higher-kinded types. [`TypeConstructor`] emulates them
//! with Generic Associated Types so the traits above can speak about
//! "the same container with a different payload".
//!
//! ## Wrappers
//!
//! - [`Sum`], [`Product`]: numeric monoids
//! - [`First`], [`Last`]: leftmost / rightmost present value
//!
//! # Examples
//!
//! ```rust
//! use maybe::optional::Maybe;
//! use maybe::typeclass::{Applicative, Monad};
//!
//! let x: Maybe<i32> = <Maybe<()>>::pure(42);
//! let sum = x.map2(Maybe::present(8), |a, b| a + b);
//! assert_eq!(sum.flat_map(|n| Maybe::present(n / 10)), Maybe::present(5));
//! ```

mod alternative;
mod applicative;
mod foldable;
mod functor;
mod higher;
mod monad;
mod monoid;
mod semigroup;
mod wrappers;

pub use alternative::Alternative;
pub use applicative::Applicative;
pub use foldable::Foldable;
pub use functor::Functor;
pub use higher::TypeConstructor;
pub use monad::Monad;
pub use monoid::Monoid;
pub use semigroup::Semigroup;
pub use wrappers::{First, Last, Product, Sum};
