//! Error identities shared by the wrapper types
//!
//! This module provides three things:
//! - [`DomainError`], the capability every failure payload implements: a
//!   human-readable message
//! - [`Failure`] and the [`domain_error!`](crate::domain_error) macro for
//!   declaring concrete domain errors
//! - the crate's own error kinds, [`UnwrapError`] and [`ArgumentError`]
//!
//! # Examples
//!
//! ```
//! use clearwater::{domain_error, DomainError, Outcome};
//!
//! domain_error!(UserNotFound, "user not found");
//!
//! let lookup: Outcome<u64, UserNotFound> = UserNotFound.into();
//! assert!(lookup.is_failure());
//! assert_eq!(lookup.error().map(|e| e.message()), Some("user not found".into()));
//! ```

use std::borrow::Cow;
use std::error::Error as StdError;
use std::fmt;

/// Message used when a value is unwrapped from an empty or failed wrapper.
pub const MISSING_VALUE: &str = "the result does not contain the value";

/// A structured failure carrying at least a human-readable message.
///
/// Downstream code extends this identity with its own error types, either
/// by implementing the trait on a struct or enum that holds more context, or
/// by declaring a fixed-message error with [`domain_error!`](crate::domain_error).
///
/// # Examples
///
/// ```
/// use std::borrow::Cow;
/// use clearwater::DomainError;
///
/// #[derive(Debug, PartialEq)]
/// struct QuotaExceeded {
///     limit: u32,
/// }
///
/// impl DomainError for QuotaExceeded {
///     fn message(&self) -> Cow<'_, str> {
///         format!("quota of {} requests exceeded", self.limit).into()
///     }
/// }
///
/// assert_eq!(QuotaExceeded { limit: 10 }.message(), "quota of 10 requests exceeded");
/// ```
pub trait DomainError: fmt::Debug {
    /// The human-readable message describing this failure.
    fn message(&self) -> Cow<'_, str>;
}

impl<E: DomainError + ?Sized> DomainError for &E {
    fn message(&self) -> Cow<'_, str> {
        (**self).message()
    }
}

impl<E: DomainError + ?Sized> DomainError for Box<E> {
    fn message(&self) -> Cow<'_, str> {
        (**self).message()
    }
}

/// A general-purpose domain error holding an owned message.
///
/// Useful when a dedicated error type would add nothing beyond its text.
///
/// # Examples
///
/// ```
/// use clearwater::{DomainError, Failure};
///
/// let err = Failure::new("connection refused");
/// assert_eq!(err.message(), "connection refused");
/// assert_eq!(err.to_string(), "connection refused");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Failure {
    message: String,
}

impl Failure {
    /// Create a failure with the given message.
    pub fn new(message: impl Into<String>) -> Self {
        Failure {
            message: message.into(),
        }
    }
}

impl DomainError for Failure {
    fn message(&self) -> Cow<'_, str> {
        Cow::Borrowed(&self.message)
    }
}

impl fmt::Display for Failure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl StdError for Failure {}

impl From<&str> for Failure {
    fn from(message: &str) -> Self {
        Failure::new(message)
    }
}

impl From<String> for Failure {
    fn from(message: String) -> Self {
        Failure::new(message)
    }
}

/// Declare a unit-struct domain error with a fixed message.
///
/// The generated type derives `Debug, Clone, Copy, PartialEq, Eq, Hash,
/// PartialOrd, Ord, Default` and implements [`DomainError`], `Display` and
/// `std::error::Error`.
///
/// # Examples
///
/// ```
/// use clearwater::{domain_error, DomainError};
///
/// domain_error!(
///     /// Raised when the session token has expired.
///     pub SessionExpired, "session expired"
/// );
///
/// assert_eq!(SessionExpired.message(), "session expired");
/// assert_eq!(SessionExpired, SessionExpired::default());
/// ```
#[macro_export]
macro_rules! domain_error {
    ($(#[$meta:meta])* $vis:vis $name:ident, $message:expr) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
        $vis struct $name;

        impl $crate::DomainError for $name {
            fn message(&self) -> ::std::borrow::Cow<'_, str> {
                ::std::borrow::Cow::Borrowed($message)
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str($message)
            }
        }

        impl ::std::error::Error for $name {}
    };
}

/// Error produced when a value is requested from an empty or failed wrapper.
///
/// The panicking `unwrap` forms panic with this error's `Display` text; the
/// `try_unwrap` forms return it.
///
/// # Examples
///
/// ```
/// use clearwater::{Failure, Outcome};
///
/// let outcome = Outcome::<i32, _>::fail(Failure::new("disk full"));
/// let err = outcome.try_unwrap().unwrap_err();
/// assert_eq!(err.message(), "the result does not contain the value: disk full");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct UnwrapError {
    message: String,
}

impl UnwrapError {
    /// Create an unwrap error with a custom message.
    pub fn new(message: impl Into<String>) -> Self {
        UnwrapError {
            message: message.into(),
        }
    }

    /// The error for an empty wrapper: [`MISSING_VALUE`].
    pub fn missing_value() -> Self {
        UnwrapError::new(MISSING_VALUE)
    }

    /// The error for a failed wrapper, embedding the underlying message.
    pub fn with_cause<E: DomainError + ?Sized>(cause: &E) -> Self {
        UnwrapError {
            message: format!("{}: {}", MISSING_VALUE, cause.message()),
        }
    }

    /// The message describing why unwrapping failed.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Panic with this error's message.
    #[track_caller]
    pub(crate) fn raise(self) -> ! {
        #[cfg(feature = "tracing")]
        tracing::error!(reason = %self.message, "unwrapped a value that is not present");
        panic!("{}", self.message)
    }
}

impl fmt::Display for UnwrapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl StdError for UnwrapError {}

/// Error returned when a constructor receives an absent value or error.
///
/// # Examples
///
/// ```
/// use clearwater::{ArgumentError, Maybe};
///
/// let err = Maybe::<i32>::try_some(None).unwrap_err();
/// assert_eq!(err, ArgumentError::new("value"));
/// assert_eq!(err.parameter(), "value");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ArgumentError {
    parameter: &'static str,
}

impl ArgumentError {
    /// Create an argument error naming the rejected parameter.
    pub fn new(parameter: &'static str) -> Self {
        ArgumentError { parameter }
    }

    /// Record a rejected construction and build its error.
    pub(crate) fn rejected(parameter: &'static str) -> Self {
        #[cfg(feature = "tracing")]
        tracing::warn!(parameter, "rejected null or default constructor argument");
        ArgumentError::new(parameter)
    }

    /// Name of the parameter that was rejected.
    pub fn parameter(&self) -> &'static str {
        self.parameter
    }
}

impl fmt::Display for ArgumentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "value cannot be null or default (parameter: {})",
            self.parameter
        )
    }
}

impl StdError for ArgumentError {}

#[cfg(test)]
mod tests {
    use super::*;

    domain_error!(Timeout, "operation timed out");

    #[derive(Debug, PartialEq)]
    enum Storage {
        NotFound(String),
        Corrupt,
    }

    impl DomainError for Storage {
        fn message(&self) -> Cow<'_, str> {
            match self {
                Storage::NotFound(key) => format!("key `{}` not found", key).into(),
                Storage::Corrupt => "storage is corrupt".into(),
            }
        }
    }

    #[test]
    fn test_failure_message_and_display() {
        let err = Failure::new("boom");
        assert_eq!(err.message(), "boom");
        assert_eq!(format!("{}", err), "boom");
    }

    #[test]
    fn test_failure_from_strings() {
        assert_eq!(Failure::from("a"), Failure::new("a"));
        assert_eq!(Failure::from(String::from("b")), Failure::new("b"));
    }

    #[test]
    fn test_failure_structural_equality() {
        assert_eq!(Failure::new("same"), Failure::new("same"));
        assert_ne!(Failure::new("same"), Failure::new("other"));
    }

    #[test]
    fn test_domain_error_macro() {
        assert_eq!(Timeout.message(), "operation timed out");
        assert_eq!(Timeout.to_string(), "operation timed out");
        assert_eq!(Timeout, Timeout::default());

        let _: &dyn StdError = &Timeout;
    }

    #[test]
    fn test_enum_domain_error() {
        assert_eq!(
            Storage::NotFound("cfg".to_string()).message(),
            "key `cfg` not found"
        );
        assert_eq!(Storage::Corrupt.message(), "storage is corrupt");
    }

    #[test]
    fn test_domain_error_through_references() {
        let boxed: Box<dyn DomainError> = Box::new(Timeout);
        assert_eq!(boxed.message(), "operation timed out");

        let err = Failure::new("borrowed");
        let by_ref: &Failure = &err;
        assert_eq!(DomainError::message(&by_ref), "borrowed");
    }

    #[test]
    fn test_unwrap_error_messages() {
        assert_eq!(UnwrapError::missing_value().message(), MISSING_VALUE);
        assert_eq!(
            UnwrapError::with_cause(&Timeout).message(),
            "the result does not contain the value: operation timed out"
        );
        assert_eq!(UnwrapError::new("custom").to_string(), "custom");
    }

    #[test]
    #[should_panic(expected = "the result does not contain the value")]
    fn test_unwrap_error_raise_panics_with_message() {
        UnwrapError::missing_value().raise();
    }

    #[test]
    fn test_argument_error_display() {
        let err = ArgumentError::new("error");
        assert_eq!(err.parameter(), "error");
        assert_eq!(
            err.to_string(),
            "value cannot be null or default (parameter: error)"
        );
    }
}
