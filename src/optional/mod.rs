//! The optional-value container and its core operations.
//!
//! - [`Maybe`]: a value that is either `Present(T)` or `Absent`
//! - [`map`], [`apply`], [`and_then`]: composition that propagates absence
//! - [`get_or_else`]: the boundary where a `Maybe<T>` becomes a plain `T`
//! - [`traverse`], [`sequence`]: turning many `Maybe` values into one
//!
//! # Examples
//!
//! Three lookups that may each come up empty, chained without nesting:
//!
//! ```rust
//! use maybe::optional::{Maybe, absent, present};
//!
//! struct User { zip: Maybe<String> }
//!
//! fn find_user(id: u32) -> Maybe<User> {
//!     if id == 42 { present(User { zip: present("12345".into()) }) } else { absent() }
//! }
//!
//! fn shipping_cost(zip: String) -> Maybe<f64> {
//!     if zip.starts_with('1') { present(7.5) } else { absent() }
//! }
//!
//! let cost = find_user(42).and_then(|user| user.zip).and_then(shipping_cost);
//! assert_eq!(cost, Maybe::present(7.5));
//!
//! let unknown = find_user(999).and_then(|user| user.zip).and_then(shipping_cost);
//! assert_eq!(unknown.get_or_else(0.0), 0.0);
//! ```

mod collect;
mod iter;
mod maybe;
mod ops;

pub use collect::{sequence, traverse};
pub use iter::{IntoIter, Iter};
pub use maybe::Maybe;
pub use ops::{absent, and_then, apply, get_or_else, map, present};
