//! # maybe
//!
//! An optional-value type for Rust: a [`Maybe`] either holds a value
//! (`Present`) or holds nothing (`Absent`), and chains of lookups that may
//! each come up empty are written as plain pipelines instead of nested
//! presence checks.
//!
//! ## Overview
//!
//! - **Core**: [`Maybe`] with `map`, `apply`, `and_then`, `get_or_else`
//!   and friends, plus free-function forms in [`optional`]
//! - **Type Classes**: Functor, Applicative, Monad, Foldable, Alternative,
//!   Semigroup and Monoid instances for `Maybe`
//! - **Function Composition**: `compose!`, `kleisli!` and the `maybe!`
//!   do-notation macro
//!
//! ## Feature Flags
//!
//! - `typeclass`: Type class traits and their `Maybe` instances (default)
//! - `compose`: Function composition utilities (default)
//! - `serde`: `Serialize`/`Deserialize` for `Maybe`, shaped like `Option`
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use maybe::prelude::*;
//!
//! #[derive(Clone)]
//! struct User { zip: Maybe<String> }
//!
//! fn lookup_user(id: u32) -> Maybe<User> {
//!     if id == 42 {
//!         Maybe::present(User { zip: Maybe::present("10115".to_string()) })
//!     } else {
//!         Maybe::absent()
//!     }
//! }
//!
//! fn shipping_cost(zip: String) -> Maybe<f64> {
//!     if zip.starts_with('1') { Maybe::present(7.5) } else { Maybe::absent() }
//! }
//!
//! let cost = lookup_user(42)
//!     .and_then(|user| user.zip)
//!     .and_then(shipping_cost);
//! assert_eq!(cost, Maybe::present(7.5));
//!
//! let fallback = lookup_user(999)
//!     .and_then(|user| user.zip)
//!     .and_then(shipping_cost)
//!     .get_or_else(0.0);
//! assert!(fallback.abs() < f64::EPSILON);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports the `Maybe` type with its free functions, and the type
/// classes and composition helpers when their features are enabled.
///
/// # Usage
///
/// ```rust
/// use maybe::prelude::*;
///
/// assert_eq!(present(1).map(|n| n + 1), present(2));
/// ```
pub mod prelude {
    pub use crate::optional::*;

    #[cfg(feature = "typeclass")]
    pub use crate::typeclass::*;

    #[cfg(feature = "compose")]
    pub use crate::compose::*;
}

pub mod optional;

#[cfg(feature = "typeclass")]
pub mod typeclass;

#[cfg(feature = "compose")]
pub mod compose;

pub use optional::{Maybe, absent, present};
