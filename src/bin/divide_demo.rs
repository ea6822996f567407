//! Divides a few numbers under each error policy and logs what comes back.
//!
//! ```text
//! cargo run --features demo --bin divide-demo
//! EXPECTION_DEFAULT_POLICY=expected cargo run --features demo --bin divide-demo
//! ```

use thiserror::Error;
use tracing::{debug, info, warn};
use tracing_subscriber::{fmt, EnvFilter};

use expection::{
    catch, install_hook_with, make_failure, success, DefaultPolicy, ErrorPolicy,
    ExceptionConstructible, Exceptions, Expected, ResultShape, DEFAULT_POLICY,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DivideByErrorKind {
    DivideByZero,
}

impl DivideByErrorKind {
    const fn message(self) -> &'static str {
        match self {
            Self::DivideByZero => "Division by Zero",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct DivideByError {
    kind: DivideByErrorKind,
}

impl DivideByError {
    const fn message(self) -> &'static str {
        self.kind.message()
    }
}

#[derive(Debug, Error)]
#[error("{0}")]
struct RuntimeError(&'static str);

impl From<DivideByErrorKind> for DivideByError {
    fn from(kind: DivideByErrorKind) -> Self {
        Self { kind }
    }
}

impl ExceptionConstructible<DivideByErrorKind> for DivideByError {
    type Exception = RuntimeError;

    fn exception(kind: DivideByErrorKind) -> RuntimeError {
        RuntimeError(kind.message())
    }
}

fn divide_by<P: ErrorPolicy>(numerator: i32, denominator: i32) -> ResultShape<f64, DivideByError, P> {
    if denominator == 0 {
        return make_failure::<f64, DivideByError, P, _>(DivideByErrorKind::DivideByZero);
    }

    success::<f64, DivideByError, P>(f64::from(numerator) / f64::from(denominator))
}

fn main() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt().with_env_filter(env_filter).init();

    // Caught failures are logged below; the hook only records where they were raised.
    let _hook = install_hook_with(|report| debug!(%report, "raised"));

    info!(policy = %DEFAULT_POLICY, "default policy");

    match catch(|| divide_by::<DefaultPolicy>(1, 2)) {
        Ok(value) => info!(?value, "1 / 2"),
        Err(raised) => warn!(error = %raised, "1 / 2 raised"),
    }
    match catch(|| divide_by::<DefaultPolicy>(1, 0)) {
        Ok(value) => info!(?value, "1 / 0"),
        Err(raised) => warn!(error = %raised, "caught"),
    }

    match divide_by::<Expected>(1, 0) {
        Ok(value) => info!(value, "expected policy"),
        Err(err) => warn!(error = err.message(), "unexpected"),
    }

    match catch(|| divide_by::<Exceptions>(1, 0)) {
        Ok(value) => info!(value, "exceptions policy"),
        Err(raised) => warn!(error = %raised, "caught"),
    }
}
