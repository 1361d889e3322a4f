//! Presence or absence of a value, with no error attached
//!
//! `Maybe<T>` is the crate's option type. It mirrors the standard
//! `Option<T>` closely but adds the unwrap forms used across this crate:
//! a fixed default message, caller-supplied messages, and caller-supplied
//! panic payloads.
//!
//! # Examples
//!
//! ```
//! use clearwater::Maybe;
//!
//! fn find_port(name: &str) -> Maybe<u16> {
//!     match name {
//!         "http" => Maybe::some(80),
//!         "https" => Maybe::some(443),
//!         _ => Maybe::none(),
//!     }
//! }
//!
//! assert_eq!(find_port("https").unwrap(), 443);
//! assert_eq!(find_port("gopher").unwrap_or(0), 0);
//!
//! let label = find_port("http").fold(|p| format!("port {}", p), || "unknown".to_string());
//! assert_eq!(label, "port 80");
//! ```

use crate::error::{ArgumentError, UnwrapError};
use crate::Outcome;

/// A value of type `T`, or nothing.
///
/// # Example
///
/// ```rust
/// use clearwater::Maybe;
///
/// let some: Maybe<i32> = 5_i32.into();
/// let none: Maybe<i32> = Maybe::none();
///
/// assert!(some.has_value());
/// assert!(!none.has_value());
/// assert_eq!(some.fold(|x| x + 1, || -1), 6);
/// assert_eq!(none.fold(|x| x + 1, || -1), -1);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Maybe<T> {
    /// A value is present
    Some(T),
    /// No value
    None,
}

impl<T> Maybe<T> {
    // ========== Constructors ==========

    /// Wrap a present value.
    ///
    /// # Example
    ///
    /// ```rust
    /// use clearwater::Maybe;
    ///
    /// assert!(Maybe::some("x").has_value());
    /// ```
    #[inline]
    pub fn some(value: T) -> Self {
        Maybe::Some(value)
    }

    /// The empty value.
    #[inline]
    pub fn none() -> Self {
        Maybe::None
    }

    /// Wrap a possibly-absent value, rejecting absence.
    ///
    /// This is the checked `some` constructor for values that arrive as
    /// `Option<T>`: an absent argument is a caller bug and is reported as
    /// an [`ArgumentError`] rather than silently becoming `Maybe::None`.
    /// Use [`Maybe::from_option`] when absence is expected.
    ///
    /// # Example
    ///
    /// ```rust
    /// use clearwater::Maybe;
    ///
    /// assert_eq!(Maybe::try_some(Some(3)), Ok(Maybe::some(3)));
    /// assert!(Maybe::<i32>::try_some(None).is_err());
    /// ```
    pub fn try_some(value: Option<T>) -> Result<Self, ArgumentError> {
        match value {
            Some(v) => Ok(Maybe::Some(v)),
            None => Err(ArgumentError::rejected("value")),
        }
    }

    /// Convert an `Option`, mapping `None` to `Maybe::None`.
    ///
    /// Unlike [`try_some`](Maybe::try_some), absence is accepted here: it is
    /// the lossless counterpart of [`into_option`](Maybe::into_option).
    ///
    /// # Example
    ///
    /// ```rust
    /// use clearwater::Maybe;
    ///
    /// assert_eq!(Maybe::from_option(Some(1)), Maybe::some(1));
    /// assert_eq!(Maybe::<i32>::from_option(None), Maybe::none());
    /// ```
    #[inline]
    pub fn from_option(value: Option<T>) -> Self {
        match value {
            Some(v) => Maybe::Some(v),
            None => Maybe::None,
        }
    }

    // ========== Predicates ==========

    /// Returns `true` if a value is present.
    #[inline]
    pub fn has_value(&self) -> bool {
        matches!(self, Maybe::Some(_))
    }

    /// Returns `true` if no value is present.
    #[inline]
    pub fn is_none(&self) -> bool {
        matches!(self, Maybe::None)
    }

    // ========== Accessors ==========

    /// Borrow the held value, if any.
    ///
    /// # Example
    ///
    /// ```rust
    /// use clearwater::Maybe;
    ///
    /// assert_eq!(Maybe::some(1).value(), Some(&1));
    /// assert_eq!(Maybe::<i32>::none().value(), None);
    /// ```
    #[inline]
    pub fn value(&self) -> Option<&T> {
        match self {
            Maybe::Some(v) => Some(v),
            Maybe::None => None,
        }
    }

    /// Convert to `Maybe<&T>`.
    #[inline]
    pub fn as_ref(&self) -> Maybe<&T> {
        match self {
            Maybe::Some(v) => Maybe::Some(v),
            Maybe::None => Maybe::None,
        }
    }

    /// Convert into the standard `Option<T>`.
    #[inline]
    pub fn into_option(self) -> Option<T> {
        match self {
            Maybe::Some(v) => Some(v),
            Maybe::None => None,
        }
    }

    // ========== Unwrapping ==========

    /// Extract the value, or report why it is missing.
    ///
    /// # Example
    ///
    /// ```rust
    /// use clearwater::{Maybe, UnwrapError};
    ///
    /// assert_eq!(Maybe::some(2).try_unwrap(), Ok(2));
    /// assert_eq!(Maybe::<i32>::none().try_unwrap(), Err(UnwrapError::missing_value()));
    /// ```
    #[inline]
    pub fn try_unwrap(self) -> Result<T, UnwrapError> {
        match self {
            Maybe::Some(v) => Ok(v),
            Maybe::None => Err(UnwrapError::missing_value()),
        }
    }

    /// Extract the value.
    ///
    /// # Panics
    ///
    /// Panics with "the result does not contain the value" if empty.
    ///
    /// # Example
    ///
    /// ```rust
    /// use clearwater::Maybe;
    ///
    /// assert_eq!(Maybe::some(42).unwrap(), 42);
    /// ```
    #[inline]
    #[track_caller]
    pub fn unwrap(self) -> T {
        match self.try_unwrap() {
            Ok(v) => v,
            Err(e) => e.raise(),
        }
    }

    /// Extract the value with a custom panic message.
    ///
    /// # Panics
    ///
    /// Panics with `msg` if empty.
    #[inline]
    #[track_caller]
    pub fn expect(self, msg: &str) -> T {
        match self {
            Maybe::Some(v) => v,
            Maybe::None => UnwrapError::new(msg).raise(),
        }
    }

    /// Extract the value, panicking with a caller-built payload if empty.
    ///
    /// The payload produced by `raise` is handed to
    /// [`std::panic::panic_any`] unmodified, so it can be recovered with
    /// `catch_unwind` and `downcast`.
    ///
    /// # Panics
    ///
    /// Panics with the value returned by `raise` if empty.
    ///
    /// # Example
    ///
    /// ```rust
    /// use std::panic;
    /// use clearwater::Maybe;
    ///
    /// #[derive(Debug, PartialEq)]
    /// struct ConfigMissing(&'static str);
    ///
    /// let caught = panic::catch_unwind(|| {
    ///     Maybe::<u32>::none().unwrap_or_raise(|| ConfigMissing("port"))
    /// })
    /// .unwrap_err();
    /// assert_eq!(caught.downcast_ref::<ConfigMissing>(), Some(&ConfigMissing("port")));
    /// ```
    #[track_caller]
    pub fn unwrap_or_raise<X, F>(self, raise: F) -> T
    where
        X: Send + 'static,
        F: FnOnce() -> X,
    {
        match self {
            Maybe::Some(v) => v,
            Maybe::None => {
                #[cfg(feature = "tracing")]
                tracing::error!("unwrapped an empty value, raising caller payload");
                std::panic::panic_any(raise())
            }
        }
    }

    /// Return the value or a default.
    #[inline]
    pub fn unwrap_or(self, default: T) -> T {
        match self {
            Maybe::Some(v) => v,
            Maybe::None => default,
        }
    }

    /// Return the value or compute one.
    #[inline]
    pub fn unwrap_or_else<F>(self, f: F) -> T
    where
        F: FnOnce() -> T,
    {
        match self {
            Maybe::Some(v) => v,
            Maybe::None => f(),
        }
    }

    /// Return the value or `T::default()`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use clearwater::Maybe;
    ///
    /// assert_eq!(Maybe::<String>::none().unwrap_or_default(), "");
    /// ```
    #[inline]
    pub fn unwrap_or_default(self) -> T
    where
        T: Default,
    {
        self.unwrap_or_else(T::default)
    }

    // ========== Folding & Transformations ==========

    /// Fold both cases into a single value.
    ///
    /// Exactly one of the two closures runs.
    ///
    /// # Example
    ///
    /// ```rust
    /// use clearwater::Maybe;
    ///
    /// assert_eq!(Maybe::some(5).fold(|x| x + 1, || -1), 6);
    /// assert_eq!(Maybe::none().fold(|x: i32| x + 1, || -1), -1);
    /// ```
    #[inline]
    pub fn fold<R, F, G>(self, on_some: F, on_none: G) -> R
    where
        F: FnOnce(T) -> R,
        G: FnOnce() -> R,
    {
        match self {
            Maybe::Some(v) => on_some(v),
            Maybe::None => on_none(),
        }
    }

    /// Transform the held value.
    #[inline]
    pub fn map<U, F>(self, f: F) -> Maybe<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Maybe::Some(v) => Maybe::Some(f(v)),
            Maybe::None => Maybe::None,
        }
    }

    /// Chain a computation that may itself produce nothing.
    #[inline]
    pub fn and_then<U, F>(self, f: F) -> Maybe<U>
    where
        F: FnOnce(T) -> Maybe<U>,
    {
        match self {
            Maybe::Some(v) => f(v),
            Maybe::None => Maybe::None,
        }
    }

    /// Keep the value only if it satisfies `predicate`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use clearwater::Maybe;
    ///
    /// assert_eq!(Maybe::some(4).filter(|x| x % 2 == 0), Maybe::some(4));
    /// assert_eq!(Maybe::some(3).filter(|x| x % 2 == 0), Maybe::none());
    /// ```
    #[inline]
    pub fn filter<P>(self, predicate: P) -> Self
    where
        P: FnOnce(&T) -> bool,
    {
        match self {
            Maybe::Some(v) if predicate(&v) => Maybe::Some(v),
            _ => Maybe::None,
        }
    }

    /// Turn absence into a failure carrying `error`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use clearwater::{Failure, Maybe, Outcome};
    ///
    /// let missing = Maybe::<u8>::none().ok_or(Failure::new("no byte"));
    /// assert_eq!(missing, Outcome::fail(Failure::new("no byte")));
    /// ```
    #[inline]
    pub fn ok_or<E>(self, error: E) -> Outcome<T, E> {
        match self {
            Maybe::Some(v) => Outcome::Success(v),
            Maybe::None => Outcome::Failure(error),
        }
    }

    /// Iterate over the held value, if any.
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.value().into_iter()
    }
}

// ========== Trait Implementations ==========

impl<T> Default for Maybe<T> {
    /// Returns `Maybe::None`.
    fn default() -> Self {
        Maybe::None
    }
}

impl<T> From<T> for Maybe<T> {
    fn from(value: T) -> Self {
        Maybe::some(value)
    }
}

/// Same as [`Maybe::from_option`]: `None` becomes `Maybe::None` without
/// being rejected. Checked construction goes through [`Maybe::try_some`].
impl<T> From<Option<T>> for Maybe<T> {
    fn from(value: Option<T>) -> Self {
        Maybe::from_option(value)
    }
}

impl<T> From<Maybe<T>> for Option<T> {
    fn from(value: Maybe<T>) -> Self {
        value.into_option()
    }
}

impl<T> IntoIterator for Maybe<T> {
    type Item = T;
    type IntoIter = std::option::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.into_option().into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Maybe<T> {
    type Item = &'a T;
    type IntoIter = std::option::IntoIter<&'a T>;

    fn into_iter(self) -> Self::IntoIter {
        self.value().into_iter()
    }
}

#[cfg(feature = "try_trait")]
impl<T> std::ops::Try for Maybe<T> {
    type Output = T;
    type Residual = Maybe<std::convert::Infallible>;

    #[inline]
    fn from_output(output: T) -> Self {
        Maybe::Some(output)
    }

    #[inline]
    fn branch(self) -> std::ops::ControlFlow<Self::Residual, T> {
        match self {
            Maybe::Some(v) => std::ops::ControlFlow::Continue(v),
            Maybe::None => std::ops::ControlFlow::Break(Maybe::None),
        }
    }
}

#[cfg(feature = "try_trait")]
impl<T> std::ops::FromResidual<Maybe<std::convert::Infallible>> for Maybe<T> {
    #[inline]
    fn from_residual(_: Maybe<std::convert::Infallible>) -> Self {
        Maybe::None
    }
}

#[cfg(feature = "try_trait")]
impl<T> std::ops::FromResidual<Option<std::convert::Infallible>> for Maybe<T> {
    #[inline]
    fn from_residual(_: Option<std::convert::Infallible>) -> Self {
        Maybe::None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::MISSING_VALUE;
    use crate::Failure;
    use std::panic;

    #[test]
    fn test_some_has_value() {
        let m = Maybe::some(7);
        assert!(m.has_value());
        assert!(!m.is_none());
        assert_eq!(m.unwrap(), 7);
    }

    #[test]
    fn test_none_has_no_value() {
        let m: Maybe<i32> = Maybe::none();
        assert!(!m.has_value());
        assert!(m.is_none());
        assert_eq!(m.value(), None);
    }

    #[test]
    fn test_try_some_rejects_absent_value() {
        assert_eq!(Maybe::try_some(Some("a")), Ok(Maybe::some("a")));

        let err = Maybe::<&str>::try_some(None).unwrap_err();
        assert_eq!(err.parameter(), "value");
    }

    #[test]
    fn test_from_option_accepts_absence() {
        assert_eq!(Maybe::from_option(Some("a")), Maybe::some("a"));
        assert_eq!(Maybe::<&str>::from_option(None), Maybe::none());
        assert!(Maybe::<&str>::try_some(None).is_err());

        let converted: Maybe<&str> = None.into();
        assert_eq!(converted, Maybe::from_option(None));
    }

    #[test]
    #[should_panic(expected = "the result does not contain the value")]
    fn test_unwrap_none_panics() {
        Maybe::<i32>::none().unwrap();
    }

    #[test]
    fn test_try_unwrap() {
        assert_eq!(Maybe::some(1).try_unwrap(), Ok(1));
        let err = Maybe::<i32>::none().try_unwrap().unwrap_err();
        assert_eq!(err.message(), MISSING_VALUE);
    }

    #[test]
    #[should_panic(expected = "port must be configured")]
    fn test_expect_uses_custom_message() {
        Maybe::<u16>::none().expect("port must be configured");
    }

    #[test]
    fn test_expect_on_some() {
        assert_eq!(Maybe::some(3).expect("unused"), 3);
    }

    #[test]
    fn test_unwrap_or_raise_forwards_payload() {
        let caught = panic::catch_unwind(|| {
            Maybe::<i32>::none().unwrap_or_raise(|| Failure::new("custom"))
        })
        .unwrap_err();

        assert_eq!(
            caught.downcast_ref::<Failure>(),
            Some(&Failure::new("custom"))
        );
    }

    #[test]
    fn test_unwrap_or_raise_does_not_call_factory_on_some() {
        let mut called = false;
        let v = Maybe::some(9).unwrap_or_raise(|| {
            called = true;
            "never"
        });
        assert_eq!(v, 9);
        assert!(!called);
    }

    #[test]
    fn test_unwrap_or() {
        assert_eq!(Maybe::some(1).unwrap_or(5), 1);
        assert_eq!(Maybe::none().unwrap_or(5), 5);
    }

    #[test]
    fn test_unwrap_or_else() {
        assert_eq!(Maybe::none().unwrap_or_else(|| 8), 8);
        assert_eq!(Maybe::some(2).unwrap_or_else(|| 8), 2);
    }

    #[test]
    fn test_unwrap_or_default_is_idempotent() {
        let m: Maybe<i32> = Maybe::none();
        assert_eq!(m.unwrap_or_default(), 0);
        assert_eq!(m.unwrap_or_default(), 0);

        let m = Maybe::some(4);
        assert_eq!(m.unwrap_or_default(), 4);
        assert_eq!(m.unwrap_or_default(), 4);
    }

    #[test]
    fn test_fold_runs_exactly_one_branch() {
        let mut some_calls = 0;
        let mut none_calls = 0;

        Maybe::some(1).fold(|_| some_calls += 1, || none_calls += 1);
        assert_eq!((some_calls, none_calls), (1, 0));

        Maybe::<i32>::none().fold(|_| some_calls += 1, || none_calls += 1);
        assert_eq!((some_calls, none_calls), (1, 1));
    }

    #[test]
    fn test_fold_values() {
        assert_eq!(Maybe::some(5).fold(|x| x + 1, || -1), 6);
        assert_eq!(Maybe::<i32>::none().fold(|x| x + 1, || -1), -1);
    }

    #[test]
    fn test_map_and_then_filter() {
        assert_eq!(Maybe::some(2).map(|x| x * 10), Maybe::some(20));
        assert_eq!(Maybe::<i32>::none().map(|x| x * 10), Maybe::none());

        let half = |x: i32| {
            if x % 2 == 0 {
                Maybe::some(x / 2)
            } else {
                Maybe::none()
            }
        };
        assert_eq!(Maybe::some(8).and_then(half), Maybe::some(4));
        assert_eq!(Maybe::some(7).and_then(half), Maybe::none());

        assert_eq!(Maybe::some(7).filter(|x| *x > 5), Maybe::some(7));
        assert_eq!(Maybe::some(3).filter(|x| *x > 5), Maybe::none());
    }

    #[test]
    fn test_ok_or() {
        let ok: Outcome<i32, Failure> = Maybe::some(1).ok_or(Failure::new("x"));
        assert_eq!(ok, Outcome::ok(1));

        let failed: Outcome<i32, Failure> = Maybe::none().ok_or(Failure::new("x"));
        assert_eq!(failed, Outcome::fail(Failure::new("x")));
    }

    #[test]
    fn test_conversions() {
        let from_value: Maybe<&str> = "hello".into();
        assert_eq!(from_value, Maybe::some("hello"));

        let from_option: Maybe<i32> = Maybe::from(None::<i32>);
        assert_eq!(from_option, Maybe::none());

        let back: Option<i32> = Maybe::some(3).into();
        assert_eq!(back, Some(3));
    }

    #[test]
    fn test_default_is_none() {
        assert_eq!(Maybe::<i32>::default(), Maybe::none());
    }

    #[test]
    fn test_iteration() {
        let m = Maybe::some(3);
        assert_eq!(m.iter().collect::<Vec<_>>(), vec![&3]);
        assert_eq!((&m).into_iter().count(), 1);
        assert_eq!(m.into_iter().collect::<Vec<_>>(), vec![3]);
        assert_eq!(Maybe::<i32>::none().into_iter().count(), 0);
    }
}
