//! Success with a value, or failure with a domain error
//!
//! `Outcome<T, E>` is the value-carrying counterpart of
//! [`Status`](crate::Status). Build one with [`Outcome::ok`] or
//! [`Outcome::fail`], or convert a bare domain error with `.into()`.
//!
//! # Unwrapping
//!
//! Several unwrap forms cover the ways a caller may want to react to a
//! failure at the boundary:
//!
//! | Method | On failure |
//! |--------|------------|
//! | [`unwrap`](Outcome::unwrap) | panics with the default message plus the error's message |
//! | [`expect`](Outcome::expect) | panics with exactly the given message |
//! | [`expect_with`](Outcome::expect_with) | panics with a message built from the error |
//! | [`unwrap_or_raise`](Outcome::unwrap_or_raise) | panics with a caller-built payload |
//! | [`try_unwrap`](Outcome::try_unwrap) | returns `Err(UnwrapError)` |
//!
//! The `unwrap_or*` forms and [`fold`](Outcome::fold) never panic.
//!
//! # Examples
//!
//! ```
//! use clearwater::{Failure, Outcome};
//!
//! fn parse_port(raw: &str) -> Outcome<u16, Failure> {
//!     match raw.parse() {
//!         Ok(port) => Outcome::ok(port),
//!         Err(_) => Failure::new(format!("`{}` is not a port", raw)).into(),
//!     }
//! }
//!
//! assert_eq!(parse_port("8080").unwrap(), 8080);
//! assert_eq!(parse_port("http").unwrap_or(80), 80);
//!
//! let summary = parse_port("x").fold(|p| p.to_string(), |e| e.to_string());
//! assert_eq!(summary, "`x` is not a port");
//! ```

use crate::error::{DomainError, UnwrapError};
use crate::{Maybe, Status};

/// An operation's value on success, or its domain error on failure.
///
/// Exactly one of [`value`](Outcome::value) and [`error`](Outcome::error)
/// is populated.
///
/// # Example
///
/// ```rust
/// use clearwater::{Failure, Outcome};
///
/// let ok: Outcome<i32, Failure> = Outcome::ok(7);
/// assert_eq!(ok.fold(|x| x, |_| -1), 7);
///
/// let failed: Outcome<i32, Failure> = Outcome::fail(Failure::new("nope"));
/// assert_eq!(failed.fold(|x| x, |_| -1), -1);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Outcome<T, E> {
    /// The operation succeeded with a value
    Success(T),
    /// The operation failed with an error
    Failure(E),
}

impl<T, E> Outcome<T, E> {
    // ========== Constructors ==========

    /// A successful outcome carrying `value`.
    #[inline]
    pub fn ok(value: T) -> Self {
        Outcome::Success(value)
    }

    /// A failed outcome carrying `error`.
    #[inline]
    pub fn fail(error: E) -> Self {
        Outcome::Failure(error)
    }

    /// Create from a standard `Result`.
    #[inline]
    pub fn from_result(result: Result<T, E>) -> Self {
        match result {
            Ok(v) => Outcome::Success(v),
            Err(e) => Outcome::Failure(e),
        }
    }

    // ========== Predicates ==========

    /// Returns `true` if the operation succeeded.
    #[inline]
    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Success(_))
    }

    /// Returns `true` if the operation failed.
    #[inline]
    pub fn is_failure(&self) -> bool {
        matches!(self, Outcome::Failure(_))
    }

    // ========== Accessors ==========

    /// Borrow the value, if the operation succeeded.
    #[inline]
    pub fn value(&self) -> Option<&T> {
        match self {
            Outcome::Success(v) => Some(v),
            Outcome::Failure(_) => None,
        }
    }

    /// Borrow the error, if the operation failed.
    #[inline]
    pub fn error(&self) -> Option<&E> {
        match self {
            Outcome::Success(_) => None,
            Outcome::Failure(e) => Some(e),
        }
    }

    /// Convert to `Outcome<&T, &E>`.
    #[inline]
    pub fn as_ref(&self) -> Outcome<&T, &E> {
        match self {
            Outcome::Success(v) => Outcome::Success(v),
            Outcome::Failure(e) => Outcome::Failure(e),
        }
    }

    /// Keep the value, discarding any error.
    #[inline]
    pub fn ok_value(self) -> Maybe<T> {
        match self {
            Outcome::Success(v) => Maybe::Some(v),
            Outcome::Failure(_) => Maybe::None,
        }
    }

    /// Keep the error, discarding any value.
    #[inline]
    pub fn err(self) -> Maybe<E> {
        match self {
            Outcome::Success(_) => Maybe::None,
            Outcome::Failure(e) => Maybe::Some(e),
        }
    }

    /// Convert to a standard `Result`.
    #[inline]
    pub fn into_result(self) -> Result<T, E> {
        match self {
            Outcome::Success(v) => Ok(v),
            Outcome::Failure(e) => Err(e),
        }
    }

    /// Drop the value, keeping only success or failure.
    #[inline]
    pub fn into_status(self) -> Status<E> {
        match self {
            Outcome::Success(_) => Status::Success,
            Outcome::Failure(e) => Status::Failure(e),
        }
    }

    // ========== Unwrapping ==========

    /// Extract the value with a custom panic message.
    ///
    /// Only `msg` is used; the error's own message is not appended. Use
    /// [`expect_with`](Outcome::expect_with) to include it.
    ///
    /// # Panics
    ///
    /// Panics with `msg` if this is a failure.
    #[inline]
    #[track_caller]
    pub fn expect(self, msg: &str) -> T {
        match self {
            Outcome::Success(v) => v,
            Outcome::Failure(_) => UnwrapError::new(msg).raise(),
        }
    }

    /// Extract the value, panicking with a message built from the error.
    ///
    /// # Panics
    ///
    /// Panics with the string returned by `message` if this is a failure.
    ///
    /// # Example
    ///
    /// ```rust,should_panic
    /// use clearwater::{Failure, Outcome};
    ///
    /// let failed: Outcome<i32, Failure> = Outcome::fail(Failure::new("disk full"));
    /// failed.expect_with(|e| format!("could not save: {}", e));
    /// ```
    #[inline]
    #[track_caller]
    pub fn expect_with<F>(self, message: F) -> T
    where
        F: FnOnce(&E) -> String,
    {
        match self {
            Outcome::Success(v) => v,
            Outcome::Failure(e) => UnwrapError::new(message(&e)).raise(),
        }
    }

    /// Extract the value, panicking with a caller-built payload on failure.
    ///
    /// The payload returned by `raise` goes to [`std::panic::panic_any`]
    /// unmodified, so it can be recovered with `catch_unwind` and
    /// `downcast`.
    ///
    /// # Panics
    ///
    /// Panics with the value returned by `raise` if this is a failure.
    ///
    /// # Example
    ///
    /// ```rust
    /// use std::panic;
    /// use clearwater::{Failure, Outcome};
    ///
    /// #[derive(Debug, PartialEq)]
    /// struct HttpError(u16, String);
    ///
    /// let caught = panic::catch_unwind(|| {
    ///     Outcome::<i32, _>::fail(Failure::new("missing"))
    ///         .unwrap_or_raise(|e| HttpError(404, e.to_string()))
    /// })
    /// .unwrap_err();
    ///
    /// assert_eq!(
    ///     caught.downcast_ref::<HttpError>(),
    ///     Some(&HttpError(404, "missing".to_string()))
    /// );
    /// ```
    #[track_caller]
    pub fn unwrap_or_raise<X, F>(self, raise: F) -> T
    where
        X: Send + 'static,
        F: FnOnce(E) -> X,
    {
        match self {
            Outcome::Success(v) => v,
            Outcome::Failure(e) => {
                #[cfg(feature = "tracing")]
                tracing::error!("unwrapped a failed outcome, raising caller payload");
                std::panic::panic_any(raise(e))
            }
        }
    }

    /// Return the value or a default.
    #[inline]
    pub fn unwrap_or(self, default: T) -> T {
        match self {
            Outcome::Success(v) => v,
            Outcome::Failure(_) => default,
        }
    }

    /// Return the value or compute one from the error.
    ///
    /// # Example
    ///
    /// ```rust
    /// use clearwater::{DomainError, Failure, Outcome};
    ///
    /// let failed: Outcome<usize, Failure> = Outcome::fail(Failure::new("four"));
    /// assert_eq!(failed.unwrap_or_else(|e| e.message().len()), 4);
    /// ```
    #[inline]
    pub fn unwrap_or_else<F>(self, f: F) -> T
    where
        F: FnOnce(E) -> T,
    {
        match self {
            Outcome::Success(v) => v,
            Outcome::Failure(e) => f(e),
        }
    }

    /// Return the value or `T::default()`.
    #[inline]
    pub fn unwrap_or_default(self) -> T
    where
        T: Default,
    {
        match self {
            Outcome::Success(v) => v,
            Outcome::Failure(_) => T::default(),
        }
    }

    // ========== Folding & Transformations ==========

    /// Fold both branches into a single value.
    ///
    /// Exactly one of the two closures runs.
    #[inline]
    pub fn fold<R, F, G>(self, on_success: F, on_failure: G) -> R
    where
        F: FnOnce(T) -> R,
        G: FnOnce(E) -> R,
    {
        match self {
            Outcome::Success(v) => on_success(v),
            Outcome::Failure(e) => on_failure(e),
        }
    }

    /// Transform the value, passing failures through.
    #[inline]
    pub fn map<U, F>(self, f: F) -> Outcome<U, E>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Outcome::Success(v) => Outcome::Success(f(v)),
            Outcome::Failure(e) => Outcome::Failure(e),
        }
    }

    /// Transform the error, passing values through.
    #[inline]
    pub fn map_err<E2, F>(self, f: F) -> Outcome<T, E2>
    where
        F: FnOnce(E) -> E2,
    {
        match self {
            Outcome::Success(v) => Outcome::Success(v),
            Outcome::Failure(e) => Outcome::Failure(f(e)),
        }
    }

    /// Chain a computation that may fail.
    ///
    /// # Example
    ///
    /// ```rust
    /// use clearwater::{Failure, Outcome};
    ///
    /// let checked = |x: i32| {
    ///     if x > 0 { Outcome::ok(x) } else { Outcome::fail(Failure::new("not positive")) }
    /// };
    ///
    /// assert_eq!(Outcome::ok(3).and_then(checked), Outcome::ok(3));
    /// assert!(Outcome::ok(-3).and_then(checked).is_failure());
    /// ```
    #[inline]
    pub fn and_then<U, F>(self, f: F) -> Outcome<U, E>
    where
        F: FnOnce(T) -> Outcome<U, E>,
    {
        match self {
            Outcome::Success(v) => f(v),
            Outcome::Failure(e) => Outcome::Failure(e),
        }
    }

    /// Recover from a failure with another computation.
    #[inline]
    pub fn or_else<E2, F>(self, f: F) -> Outcome<T, E2>
    where
        F: FnOnce(E) -> Outcome<T, E2>,
    {
        match self {
            Outcome::Success(v) => Outcome::Success(v),
            Outcome::Failure(e) => f(e),
        }
    }

    /// Iterate over the value, if any.
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.value().into_iter()
    }
}

impl<T, E: DomainError> Outcome<T, E> {
    /// Extract the value, or report the failure.
    ///
    /// The returned [`UnwrapError`] embeds the underlying error's message.
    ///
    /// # Example
    ///
    /// ```rust
    /// use clearwater::{Failure, Outcome};
    ///
    /// let err = Outcome::<(), _>::fail(Failure::new("timeout")).try_unwrap().unwrap_err();
    /// assert_eq!(err.message(), "the result does not contain the value: timeout");
    /// ```
    #[inline]
    pub fn try_unwrap(self) -> Result<T, UnwrapError> {
        match self {
            Outcome::Success(v) => Ok(v),
            Outcome::Failure(e) => Err(UnwrapError::with_cause(&e)),
        }
    }

    /// Extract the value.
    ///
    /// # Panics
    ///
    /// Panics with "the result does not contain the value: " followed by
    /// the error's message if this is a failure.
    ///
    /// # Example
    ///
    /// ```rust
    /// use clearwater::{Failure, Outcome};
    ///
    /// assert_eq!(Outcome::<_, Failure>::ok(5).unwrap(), 5);
    /// ```
    #[inline]
    #[track_caller]
    pub fn unwrap(self) -> T {
        match self.try_unwrap() {
            Ok(v) => v,
            Err(e) => e.raise(),
        }
    }
}

impl<T> Outcome<T, Box<dyn DomainError>> {
    /// A failed outcome over the base error identity.
    ///
    /// # Example
    ///
    /// ```rust
    /// use clearwater::{domain_error, DomainError, Outcome};
    ///
    /// domain_error!(Missing, "missing");
    ///
    /// let failed: Outcome<u128, Box<dyn DomainError>> = Outcome::fail_boxed(Missing);
    /// assert_eq!(failed.error().map(|e| e.message()), Some("missing".into()));
    /// ```
    #[inline]
    pub fn fail_boxed<E: DomainError + 'static>(error: E) -> Self {
        Outcome::Failure(Box::new(error))
    }
}

// ========== Trait Implementations ==========

/// A bare domain error converts into a failed outcome.
///
/// The conversion needs the concrete error type as `E`. For outcomes over
/// the base identity, `Box<dyn DomainError>`, box the error first or use
/// [`Outcome::fail_boxed`].
impl<T, E: DomainError> From<E> for Outcome<T, E> {
    fn from(error: E) -> Self {
        Outcome::fail(error)
    }
}

impl<T, E> From<Result<T, E>> for Outcome<T, E> {
    fn from(result: Result<T, E>) -> Self {
        Outcome::from_result(result)
    }
}

impl<T, E> From<Outcome<T, E>> for Result<T, E> {
    fn from(outcome: Outcome<T, E>) -> Self {
        outcome.into_result()
    }
}

impl<T, E> IntoIterator for Outcome<T, E> {
    type Item = T;
    type IntoIter = std::option::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.into_result().ok().into_iter()
    }
}

impl<'a, T, E> IntoIterator for &'a Outcome<T, E> {
    type Item = &'a T;
    type IntoIter = std::option::IntoIter<&'a T>;

    fn into_iter(self) -> Self::IntoIter {
        self.value().into_iter()
    }
}

#[cfg(feature = "try_trait")]
impl<T, E> std::ops::Try for Outcome<T, E> {
    type Output = T;
    type Residual = Outcome<std::convert::Infallible, E>;

    #[inline]
    fn from_output(output: T) -> Self {
        Outcome::Success(output)
    }

    #[inline]
    fn branch(self) -> std::ops::ControlFlow<Self::Residual, T> {
        match self {
            Outcome::Success(v) => std::ops::ControlFlow::Continue(v),
            Outcome::Failure(e) => std::ops::ControlFlow::Break(Outcome::Failure(e)),
        }
    }
}

#[cfg(feature = "try_trait")]
impl<T, E, E2: From<E>> std::ops::FromResidual<Outcome<std::convert::Infallible, E>>
    for Outcome<T, E2>
{
    #[inline]
    fn from_residual(residual: Outcome<std::convert::Infallible, E>) -> Self {
        match residual {
            Outcome::Failure(e) => Outcome::Failure(E2::from(e)),
            Outcome::Success(never) => match never {},
        }
    }
}

#[cfg(feature = "try_trait")]
impl<T, E, E2: From<E>> std::ops::FromResidual<Result<std::convert::Infallible, E>>
    for Outcome<T, E2>
{
    #[inline]
    fn from_residual(residual: Result<std::convert::Infallible, E>) -> Self {
        match residual {
            Err(e) => Outcome::Failure(E2::from(e)),
            Ok(never) => match never {},
        }
    }
}
