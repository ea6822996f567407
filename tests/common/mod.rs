//! Sample error type exercising every failure strategy.
//!
//! Real code picks one strategy; the fixture implements all four so each can
//! be checked against the same logical failure.

#![allow(dead_code)]

use expection::{
    catch, failure, make_failure, make_failure_via, make_failure_with, success, ErrorFunctor,
    ErrorPolicy, ExceptionConstructible, IntoException, ResultShape, Unexpected,
};
use thiserror::Error;

pub const DIVIDE_BY_ZERO: &str = "Division by Zero";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kind {
    DivideByZero,
}

impl Kind {
    pub const fn message(self) -> &'static str {
        match self {
            Self::DivideByZero => DIVIDE_BY_ZERO,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DivideByError {
    pub kind: Kind,
}

impl DivideByError {
    pub const fn message(&self) -> &'static str {
        self.kind.message()
    }
}

#[derive(Debug, Error)]
#[error("{0}")]
pub struct RuntimeError(pub &'static str);

impl From<Kind> for DivideByError {
    fn from(kind: Kind) -> Self {
        Self { kind }
    }
}

// In-place
impl ExceptionConstructible<Kind> for DivideByError {
    type Exception = RuntimeError;

    fn exception(kind: Kind) -> RuntimeError {
        RuntimeError(kind.message())
    }
}

// Conversion
impl IntoException for DivideByError {
    type Exception = RuntimeError;

    fn into_exception(self) -> RuntimeError {
        RuntimeError(self.message())
    }
}

pub struct DivideByErrorFunctor;

impl ErrorFunctor<DivideByError, Kind> for DivideByErrorFunctor {
    type Exception = RuntimeError;

    fn exception(kind: Kind) -> RuntimeError {
        RuntimeError(kind.message())
    }

    fn unexpected(kind: Kind) -> Unexpected<DivideByError> {
        Unexpected::new(DivideByError::from(kind))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureMethod {
    InPlace,
    Functor,
    Callable,
    Conversion,
}

impl FailureMethod {
    pub const ALL: [Self; 4] = [Self::InPlace, Self::Functor, Self::Callable, Self::Conversion];
}

pub fn divide_by<P: ErrorPolicy>(
    method: FailureMethod,
    numerator: i32,
    denominator: i32,
) -> ResultShape<f64, DivideByError, P> {
    if denominator == 0 {
        let kind = Kind::DivideByZero;
        return match method {
            FailureMethod::InPlace => make_failure::<f64, DivideByError, P, _>(kind),
            FailureMethod::Functor => {
                make_failure_via::<f64, DivideByError, DivideByErrorFunctor, P, _>(kind)
            }
            FailureMethod::Callable => make_failure_with::<f64, DivideByError, P, _, _>(
                |kind: Kind| Unexpected::new(DivideByError::from(kind)),
                |kind: Kind| RuntimeError(kind.message()),
                kind,
            ),
            FailureMethod::Conversion => failure::<f64, P, _>(DivideByError { kind }),
        };
    }

    success::<f64, DivideByError, P>(f64::from(numerator) / f64::from(denominator))
}

/// Logical outcome of a call, whichever channel the failure took.
pub fn outcome<P: ErrorPolicy>(
    method: FailureMethod,
    numerator: i32,
    denominator: i32,
) -> Result<f64, String> {
    let shaped = catch(|| {
        P::into_result::<f64, DivideByError>(divide_by::<P>(method, numerator, denominator))
    });
    match shaped {
        Ok(Ok(value)) => Ok(value),
        Ok(Err(err)) => Err(err.message().to_string()),
        Err(raised) => Err(raised.message()),
    }
}

pub fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-12
}
