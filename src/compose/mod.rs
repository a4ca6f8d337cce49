//! Function composition utilities for `Maybe` pipelines.
//!
//! - [`compose!`]: compose plain functions right-to-left
//! - [`kleisli!`]: compose `Maybe`-returning steps left-to-right
//! - [`maybe!`]: do-notation over [`Maybe::and_then`](crate::optional::Maybe::and_then)
//!
//! # Helper Functions
//!
//! - [`identity`]: returns its argument unchanged
//! - [`compose_pair`]: the two-function composition `compose!` is built from
//! - [`kleisli()`]: the two-step composition `kleisli!` is built from
//!
//! # Examples
//!
//! ```
//! use maybe::{compose, kleisli};
//! use maybe::optional::Maybe;
//!
//! fn add_one(x: i32) -> i32 { x + 1 }
//! fn double(x: i32) -> i32 { x * 2 }
//! fn even(x: i32) -> Maybe<i32> {
//!     if x % 2 == 0 { Maybe::present(x) } else { Maybe::absent() }
//! }
//!
//! assert_eq!(compose!(add_one, double)(5), 11);
//! assert_eq!(kleisli!(even, |x: i32| Maybe::present(double(x)))(4), Maybe::present(8));
//! assert_eq!(kleisli!(even, |x: i32| Maybe::present(double(x)))(5), Maybe::absent());
//! ```

mod compose_macro;
mod kleisli_macro;
mod maybe_macro;
mod utils;

pub use utils::{compose_pair, identity, kleisli};

pub use crate::{compose, kleisli, maybe};
