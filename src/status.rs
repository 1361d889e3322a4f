//! Success or failure of an operation that produces no value
//!
//! `Status<E>` answers "did it work?" for commands: saves, deletes,
//! notifications. A failure carries a [`DomainError`](crate::DomainError);
//! a success carries nothing, so there is nothing to unwrap. Inspect it
//! with [`is_success`](Status::is_success), [`error`](Status::error), or
//! fold both branches with [`fold`](Status::fold).
//!
//! # Examples
//!
//! ```
//! use clearwater::{domain_error, Status};
//!
//! domain_error!(ReadOnly, "the volume is read-only");
//!
//! fn write(read_only: bool) -> Status<ReadOnly> {
//!     if read_only {
//!         return ReadOnly.into();
//!     }
//!     Status::ok()
//! }
//!
//! assert!(write(false).is_success());
//! assert_eq!(write(true).error(), Some(&ReadOnly));
//! ```

use crate::error::{ArgumentError, DomainError};
use crate::Outcome;

/// The result of an operation with no success payload.
///
/// # Example
///
/// ```rust
/// use clearwater::{Failure, Status};
///
/// let ok: Status<Failure> = Status::ok();
/// let failed = Status::fail(Failure::new("queue is full"));
///
/// assert_eq!(ok.fold(|| "sent".to_string(), |e| e.to_string()), "sent");
/// assert_eq!(failed.fold(|| "sent".to_string(), |e| e.to_string()), "queue is full");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Status<E> {
    /// The operation succeeded
    Success,
    /// The operation failed with an error
    Failure(E),
}

impl<E> Status<E> {
    // ========== Constructors ==========

    /// A successful status.
    #[inline]
    pub fn ok() -> Self {
        Status::Success
    }

    /// A failed status carrying `error`.
    #[inline]
    pub fn fail(error: E) -> Self {
        Status::Failure(error)
    }

    /// A failed status from a possibly-absent error, rejecting absence.
    ///
    /// An absent error is never read as success: it is reported as an
    /// [`ArgumentError`] for the `error` parameter.
    ///
    /// # Example
    ///
    /// ```rust
    /// use clearwater::{Failure, Status};
    ///
    /// let failed = Status::try_fail(Some(Failure::new("x"))).unwrap();
    /// assert!(failed.is_failure());
    ///
    /// let err = Status::<Failure>::try_fail(None).unwrap_err();
    /// assert_eq!(err.parameter(), "error");
    /// ```
    pub fn try_fail(error: Option<E>) -> Result<Self, ArgumentError> {
        match error {
            Some(e) => Ok(Status::Failure(e)),
            None => Err(ArgumentError::rejected("error")),
        }
    }

    // ========== Predicates ==========

    /// Returns `true` if the operation succeeded.
    #[inline]
    pub fn is_success(&self) -> bool {
        matches!(self, Status::Success)
    }

    /// Returns `true` if the operation failed.
    #[inline]
    pub fn is_failure(&self) -> bool {
        matches!(self, Status::Failure(_))
    }

    /// Borrow the error, if the operation failed.
    #[inline]
    pub fn error(&self) -> Option<&E> {
        match self {
            Status::Success => None,
            Status::Failure(e) => Some(e),
        }
    }

    // ========== Folding & Transformations ==========

    /// Fold both branches into a single value.
    ///
    /// Exactly one of the two closures runs.
    ///
    /// # Example
    ///
    /// ```rust
    /// use clearwater::{Failure, Status};
    ///
    /// let code = |s: Status<Failure>| s.fold(|| 0, |_| 1);
    /// assert_eq!(code(Status::ok()), 0);
    /// assert_eq!(code(Status::fail(Failure::new("x"))), 1);
    /// ```
    #[inline]
    pub fn fold<R, F, G>(self, on_success: F, on_failure: G) -> R
    where
        F: FnOnce() -> R,
        G: FnOnce(E) -> R,
    {
        match self {
            Status::Success => on_success(),
            Status::Failure(e) => on_failure(e),
        }
    }

    /// Transform the error, passing success through.
    #[inline]
    pub fn map_err<E2, F>(self, f: F) -> Status<E2>
    where
        F: FnOnce(E) -> E2,
    {
        match self {
            Status::Success => Status::Success,
            Status::Failure(e) => Status::Failure(f(e)),
        }
    }

    /// Run the next step only if this one succeeded.
    ///
    /// # Example
    ///
    /// ```rust
    /// use clearwater::{Failure, Status};
    ///
    /// let first: Status<Failure> = Status::fail(Failure::new("first"));
    /// let chained = first.and_then(|| Status::fail(Failure::new("second")));
    /// assert_eq!(chained.error(), Some(&Failure::new("first")));
    /// ```
    #[inline]
    pub fn and_then<F>(self, f: F) -> Self
    where
        F: FnOnce() -> Status<E>,
    {
        match self {
            Status::Success => f(),
            Status::Failure(e) => Status::Failure(e),
        }
    }

    /// Attach a value to a success, producing an [`Outcome`].
    ///
    /// # Example
    ///
    /// ```rust
    /// use clearwater::{Failure, Outcome, Status};
    ///
    /// let saved: Status<Failure> = Status::ok();
    /// assert_eq!(saved.with_value(17), Outcome::ok(17));
    /// ```
    #[inline]
    pub fn with_value<T>(self, value: T) -> Outcome<T, E> {
        match self {
            Status::Success => Outcome::Success(value),
            Status::Failure(e) => Outcome::Failure(e),
        }
    }

    // ========== Conversions ==========

    /// Convert to `Result<(), E>` for use with `?`.
    #[inline]
    pub fn into_result(self) -> Result<(), E> {
        match self {
            Status::Success => Ok(()),
            Status::Failure(e) => Err(e),
        }
    }

    /// Create from `Result<(), E>`.
    #[inline]
    pub fn from_result(result: Result<(), E>) -> Self {
        match result {
            Ok(()) => Status::Success,
            Err(e) => Status::Failure(e),
        }
    }
}

impl Status<Box<dyn DomainError>> {
    /// A failed status over the base error identity.
    #[inline]
    pub fn fail_boxed<E: DomainError + 'static>(error: E) -> Self {
        Status::Failure(Box::new(error))
    }
}

// ========== Trait Implementations ==========

impl<E> Default for Status<E> {
    /// Returns `Status::Success`.
    fn default() -> Self {
        Status::Success
    }
}

/// A bare domain error converts into a failed status.
///
/// As with `Outcome`, `E` must be the concrete error type; use
/// [`Status::fail_boxed`] for `Status<Box<dyn DomainError>>`.
impl<E: DomainError> From<E> for Status<E> {
    fn from(error: E) -> Self {
        Status::fail(error)
    }
}

impl<E> From<Result<(), E>> for Status<E> {
    fn from(result: Result<(), E>) -> Self {
        Status::from_result(result)
    }
}

impl<E> From<Status<E>> for Result<(), E> {
    fn from(status: Status<E>) -> Self {
        status.into_result()
    }
}
