//! Error policies and the result shape they resolve to.
//!
//! A policy is a zero-sized marker type chosen as a generic parameter. The
//! marker fixes, at monomorphization time, both the concrete return type of a
//! fallible function ([`ResultShape`]) and how a failure leaves it:
//!
//! - [`Exceptions`]: the function returns `R` and failures unwind out of band
//!   via [`raise`](crate::raise).
//! - [`Expected`]: the function returns `Result<R, E>` and failures come back
//!   in the `Err` arm.
//!
//! Nothing here is inspected at run time. [`Policy`] is the value-level name
//! of a policy for display and configuration; dispatch never consults it.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ParsePolicyError;
use crate::raise::{raise, Throwable};
use crate::unexpected::Unexpected;

/// The two failure-reporting conventions.
///
/// Parsing and deserialization accept the same names, trimmed and in any
/// case. Serialization and `Display` always write the lowercase name.
///
/// # Examples
///
/// ```
/// use expection::Policy;
///
/// let policy: Policy = "Expected".parse()?;
/// assert!(policy.is_expected());
/// assert_eq!(policy.to_string(), "expected");
/// # Ok::<(), expection::ParsePolicyError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Policy {
    /// Failures unwind; the success value is returned bare.
    Exceptions,
    /// Failures are returned in the `Err` arm of a `Result`.
    Expected,
}

impl Policy {
    /// Returns a short stable identifier suitable for logging/debugging.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Exceptions => "exceptions",
            Self::Expected => "expected",
        }
    }

    /// Returns true if failures unwind under this policy.
    #[must_use]
    pub const fn is_exceptions(self) -> bool {
        matches!(self, Self::Exceptions)
    }

    /// Returns true if failures are returned as values under this policy.
    #[must_use]
    pub const fn is_expected(self) -> bool {
        matches!(self, Self::Expected)
    }
}

impl Default for Policy {
    fn default() -> Self {
        DEFAULT_POLICY
    }
}

impl fmt::Display for Policy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Policy {
    type Err = ParsePolicyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("exceptions") {
            Ok(Self::Exceptions)
        } else if s.eq_ignore_ascii_case("expected") {
            Ok(Self::Expected)
        } else {
            Err(ParsePolicyError::unknown(s))
        }
    }
}

impl<'de> Deserialize<'de> for Policy {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

mod sealed {
    pub trait Sealed {}

    impl Sealed for super::Exceptions {}
    impl Sealed for super::Expected {}
}

/// Type-level error policy.
///
/// Implemented only by [`Exceptions`] and [`Expected`]. Every method is
/// resolved per instantiation, so a function generic over `P: ErrorPolicy`
/// compiles to two independent bodies with no branch between them.
pub trait ErrorPolicy:
    sealed::Sealed + Copy + Default + fmt::Debug + Send + Sync + 'static
{
    /// The value-level name of this policy.
    const POLICY: Policy;

    /// Concrete return type for success type `R` and error payload `E`.
    type Shape<R, E>;

    /// Puts a success value into this policy's shape.
    fn wrap<R, E>(value: R) -> Self::Shape<R, E>;

    /// Builds a failure from `args`.
    ///
    /// Exactly one of the two recipes is called: `exception` (whose result is
    /// raised) under [`Exceptions`], `unexpected` under [`Expected`].
    fn fail<R, E, A, X, FX, FU>(args: A, exception: FX, unexpected: FU) -> Self::Shape<R, E>
    where
        X: Throwable,
        FX: FnOnce(A) -> X,
        FU: FnOnce(A) -> Unexpected<E>;

    /// Views a shaped value as a `Result`.
    ///
    /// Under [`Exceptions`] this is always `Ok`: failures never reach a value
    /// of that shape.
    fn into_result<R, E>(shape: Self::Shape<R, E>) -> Result<R, E>;
}

/// Policy marker: failures unwind, successes are returned bare.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Exceptions;

/// Policy marker: results are `Result<R, E>`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Expected;

impl ErrorPolicy for Exceptions {
    const POLICY: Policy = Policy::Exceptions;

    type Shape<R, E> = R;

    #[inline]
    fn wrap<R, E>(value: R) -> Self::Shape<R, E> {
        value
    }

    #[inline]
    #[track_caller]
    fn fail<R, E, A, X, FX, FU>(args: A, exception: FX, _unexpected: FU) -> Self::Shape<R, E>
    where
        X: Throwable,
        FX: FnOnce(A) -> X,
        FU: FnOnce(A) -> Unexpected<E>,
    {
        raise(exception(args))
    }

    #[inline]
    fn into_result<R, E>(shape: Self::Shape<R, E>) -> Result<R, E> {
        Ok(shape)
    }
}

impl ErrorPolicy for Expected {
    const POLICY: Policy = Policy::Expected;

    type Shape<R, E> = Result<R, E>;

    #[inline]
    fn wrap<R, E>(value: R) -> Self::Shape<R, E> {
        Ok(value)
    }

    #[inline]
    fn fail<R, E, A, X, FX, FU>(args: A, _exception: FX, unexpected: FU) -> Self::Shape<R, E>
    where
        X: Throwable,
        FX: FnOnce(A) -> X,
        FU: FnOnce(A) -> Unexpected<E>,
    {
        Err(unexpected(args).into_error())
    }

    #[inline]
    fn into_result<R, E>(shape: Self::Shape<R, E>) -> Result<R, E> {
        shape
    }
}

/// The policy used when a caller does not name one.
///
/// Fixed at build time: `Expected` when `EXPECTION_DEFAULT_POLICY=expected`
/// or the `default-expected` feature is set, `Exceptions` otherwise.
#[cfg(not(expection_default_expected))]
pub type DefaultPolicy = Exceptions;

/// The policy used when a caller does not name one.
///
/// Fixed at build time: `Expected` when `EXPECTION_DEFAULT_POLICY=expected`
/// or the `default-expected` feature is set, `Exceptions` otherwise.
#[cfg(expection_default_expected)]
pub type DefaultPolicy = Expected;

/// Value-level name of [`DefaultPolicy`].
pub const DEFAULT_POLICY: Policy = <DefaultPolicy as ErrorPolicy>::POLICY;

/// Return type of a function producing `R` or failing with `E` under `P`.
///
/// `E` defaults to `()` for contexts with no error payload, and `R = ()`
/// covers functions with no success payload.
///
/// ```
/// use expection::{Exceptions, Expected, ResultShape};
///
/// let bare: ResultShape<f64, String, Exceptions> = 0.5;
/// let tagged: ResultShape<f64, String, Expected> = Ok(0.5);
/// assert_eq!(Ok(bare), tagged);
/// ```
pub type ResultShape<R, E = (), P = DefaultPolicy> = <P as ErrorPolicy>::Shape<R, E>;
