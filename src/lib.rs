//! # Clearwater
//!
//! > *"Clear water hides nothing"*
//!
//! Typed wrappers for success, failure and presence of a value.
//!
//! ## The types
//!
//! - [`Maybe<T>`]: a value, or nothing, with no error attached
//! - [`Status<E>`]: an operation succeeded, or failed with a domain error
//! - [`Outcome<T, E>`]: an operation produced a value, or failed with a domain error
//! - [`DomainError`]: the capability every failure payload implements
//!
//! Each type is a two-tag enum fixed at construction. Branch on it with the
//! predicates, fold both branches into one value with `fold`, or extract the
//! payload at the boundary with one of the `unwrap` forms.
//!
//! ## Quick Example
//!
//! ```rust
//! use clearwater::{domain_error, Maybe, Outcome};
//!
//! domain_error!(EmptyName, "name must not be empty");
//!
//! fn greet(name: &str) -> Outcome<String, EmptyName> {
//!     if name.is_empty() {
//!         // A bare domain error converts into a failed outcome
//!         return EmptyName.into();
//!     }
//!     Outcome::ok(format!("Hello, {}!", name))
//! }
//!
//! assert_eq!(greet("Ada").unwrap(), "Hello, Ada!");
//! assert!(greet("").is_failure());
//!
//! let nickname: Maybe<&str> = Maybe::none();
//! assert_eq!(nickname.unwrap_or("friend"), "friend");
//! ```
//!
//! ## Features
//!
//! - `tracing`: log unwrap failures and rejected constructions
//! - `proptest`: `Arbitrary` implementations for the three wrapper types
//! - `try_trait`: `?` support for `Maybe` and `Outcome` (nightly)

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]
#![cfg_attr(feature = "try_trait", feature(try_trait_v2))]

pub mod error;
pub mod maybe;
pub mod outcome;
pub mod status;
pub mod testing;

// Re-exports
pub use error::{ArgumentError, DomainError, Failure, UnwrapError};
pub use maybe::Maybe;
pub use outcome::Outcome;
pub use status::Status;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::error::{ArgumentError, DomainError, Failure, UnwrapError};
    pub use crate::maybe::Maybe;
    pub use crate::outcome::Outcome;
    pub use crate::status::Status;
}
