//! Testing utilities for code built on Clearwater's types
//!
//! This module provides assertion macros with readable failure output and,
//! behind the `proptest` feature, `Arbitrary` implementations for
//! [`Maybe`](crate::Maybe), [`Status`](crate::Status) and
//! [`Outcome`](crate::Outcome).
//!
//! # Examples
//!
//! ```rust
//! use clearwater::{assert_failure, assert_some, assert_success, Failure, Maybe, Outcome};
//!
//! let ok = Outcome::<_, Failure>::ok(42);
//! assert_success!(ok);
//!
//! let failed = Outcome::<i32, _>::fail(Failure::new("error"));
//! assert_failure!(failed);
//!
//! assert_some!(Maybe::some(1));
//! ```

/// Assert that a `Status` or `Outcome` succeeded.
///
/// Panics with the error if it failed.
///
/// # Example
///
/// ```rust
/// use clearwater::{assert_success, Failure, Status};
///
/// assert_success!(Status::<Failure>::ok());
/// ```
#[macro_export]
macro_rules! assert_success {
    ($outcome:expr) => {
        match &$outcome {
            outcome if outcome.is_success() => {}
            outcome => {
                panic!("Expected Success, got Failure: {:?}", outcome.error());
            }
        }
    };
}

/// Assert that a `Status` or `Outcome` failed.
///
/// Panics with the full value if it succeeded.
///
/// # Example
///
/// ```rust
/// use clearwater::{assert_failure, Failure, Outcome};
///
/// assert_failure!(Outcome::<i32, _>::fail(Failure::new("error")));
/// ```
#[macro_export]
macro_rules! assert_failure {
    ($outcome:expr) => {
        match &$outcome {
            outcome if outcome.is_failure() => {}
            outcome => {
                panic!("Expected Failure, got Success: {:?}", outcome);
            }
        }
    };
}

/// Assert that a `Status` or `Outcome` failed with a specific message.
///
/// # Example
///
/// ```rust
/// use clearwater::{assert_failure_message, Failure, Status};
///
/// let status = Status::fail(Failure::new("disk full"));
/// assert_failure_message!(status, "disk full");
/// ```
#[macro_export]
macro_rules! assert_failure_message {
    ($outcome:expr, $expected:expr) => {
        match (&$outcome).error() {
            Some(error) => {
                assert_eq!($crate::DomainError::message(error), $expected);
            }
            None => {
                panic!(
                    "Expected Failure with message {:?}, got Success",
                    $expected
                );
            }
        }
    };
}

/// Assert that a `Maybe` holds a value.
///
/// # Example
///
/// ```rust
/// use clearwater::{assert_some, Maybe};
///
/// assert_some!(Maybe::some("here"));
/// ```
#[macro_export]
macro_rules! assert_some {
    ($maybe:expr) => {
        match &$maybe {
            $crate::Maybe::Some(_) => {}
            $crate::Maybe::None => {
                panic!("Expected Some, got None");
            }
        }
    };
}

/// Assert that a `Maybe` is empty.
///
/// # Example
///
/// ```rust
/// use clearwater::{assert_none, Maybe};
///
/// assert_none!(Maybe::<i32>::none());
/// ```
#[macro_export]
macro_rules! assert_none {
    ($maybe:expr) => {
        match &$maybe {
            $crate::Maybe::None => {}
            $crate::Maybe::Some(v) => {
                panic!("Expected None, got Some: {:?}", v);
            }
        }
    };
}

#[cfg(feature = "proptest")]
use proptest::prelude::*;

#[cfg(feature = "proptest")]
impl<T> Arbitrary for crate::Maybe<T>
where
    T: Arbitrary + 'static,
{
    type Parameters = T::Parameters;
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(args: Self::Parameters) -> Self::Strategy {
        prop_oneof![
            any_with::<T>(args).prop_map(crate::Maybe::some),
            Just(()).prop_map(|_| crate::Maybe::none()),
        ]
        .boxed()
    }
}

#[cfg(feature = "proptest")]
impl<E> Arbitrary for crate::Status<E>
where
    E: Arbitrary + 'static,
{
    type Parameters = E::Parameters;
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(args: Self::Parameters) -> Self::Strategy {
        prop_oneof![
            Just(()).prop_map(|_| crate::Status::ok()),
            any_with::<E>(args).prop_map(crate::Status::fail),
        ]
        .boxed()
    }
}

#[cfg(feature = "proptest")]
impl<T, E> Arbitrary for crate::Outcome<T, E>
where
    T: Arbitrary + 'static,
    E: Arbitrary + 'static,
{
    type Parameters = (T::Parameters, E::Parameters);
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(args: Self::Parameters) -> Self::Strategy {
        let (t_params, e_params) = args;
        prop_oneof![
            any_with::<T>(t_params).prop_map(crate::Outcome::ok),
            any_with::<E>(e_params).prop_map(crate::Outcome::fail),
        ]
        .boxed()
    }
}

#[cfg(test)]
mod tests {
    use crate::{Failure, Maybe, Outcome, Status};

    #[test]
    fn assert_success_macro() {
        assert_success!(Outcome::<_, Failure>::ok(42));
        assert_success!(Status::<Failure>::ok());
    }

    #[test]
    fn assert_failure_macro() {
        assert_failure!(Outcome::<i32, _>::fail(Failure::new("error")));
        assert_failure!(Status::fail(Failure::new("error")));
    }

    #[test]
    fn assert_failure_message_macro() {
        let outcome = Outcome::<i32, _>::fail(Failure::new("error1"));
        assert_failure_message!(outcome, "error1");
    }

    #[test]
    fn assert_some_and_none_macros() {
        assert_some!(Maybe::some(1));
        assert_none!(Maybe::<i32>::none());
    }

    #[test]
    #[should_panic(expected = "Expected Success, got Failure")]
    fn assert_success_panics_on_failure() {
        assert_success!(Outcome::<i32, _>::fail(Failure::new("error")));
    }

    #[test]
    #[should_panic(expected = "Expected Failure, got Success")]
    fn assert_failure_panics_on_success() {
        assert_failure!(Status::<Failure>::ok());
    }

    #[test]
    #[should_panic(expected = "Expected Failure with message")]
    fn assert_failure_message_panics_on_success() {
        assert_failure_message!(Outcome::<_, Failure>::ok(1), "error");
    }

    #[test]
    #[should_panic(expected = "Expected Some, got None")]
    fn assert_some_panics_on_none() {
        assert_some!(Maybe::<i32>::none());
    }

    #[test]
    #[should_panic(expected = "Expected None, got Some")]
    fn assert_none_panics_on_some() {
        assert_none!(Maybe::some(3));
    }

    #[cfg(feature = "proptest")]
    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn outcome_arbitrary_holds_exactly_one_side(
                outcome in any::<Outcome<i32, String>>()
            ) {
                prop_assert!(outcome.value().is_some() != outcome.error().is_some());
            }

            #[test]
            fn maybe_arbitrary_matches_has_value(maybe in any::<Maybe<u8>>()) {
                prop_assert_eq!(maybe.has_value(), maybe.value().is_some());
            }

            #[test]
            fn status_arbitrary_matches_error(status in any::<Status<String>>()) {
                prop_assert_eq!(status.is_failure(), status.error().is_some());
            }
        }
    }
}
