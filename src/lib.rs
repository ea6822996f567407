//! # expection - one function body, two failure conventions
//!
//! expection lets a fallible function be written once and report failures
//! either by unwinding (a "throw") or by returning `Result`, chosen by a
//! type parameter. Each choice is monomorphized separately, so the
//! convention not chosen costs nothing.
//!
//! ## Core Concepts
//!
//! - **Policy**: [`Exceptions`] or [`Expected`], a zero-sized type parameter
//! - **`ResultShape`**: the return type a policy resolves to, `R` or `Result<R, E>`
//! - **Constructors**: [`success`] plus four interchangeable failure strategies
//! - **Default policy**: [`DefaultPolicy`], fixed at build time by
//!   `EXPECTION_DEFAULT_POLICY` or the `default-expected` feature
//!
//! The test suite covers whichever default the build selected. Run it a
//! second time with `EXPECTION_DEFAULT_POLICY=expected cargo test` (or
//! `cargo test --features default-expected`) to cover the other one.
//!
//! ## Usage
//!
//! ```rust
//! use expection::{catch, make_failure, success, ErrorPolicy, ExceptionConstructible};
//! use expection::{Exceptions, Expected, ResultShape};
//!
//! #[derive(Debug, PartialEq)]
//! enum MathError {
//!     DivideByZero,
//! }
//!
//! impl From<()> for MathError {
//!     fn from((): ()) -> Self {
//!         MathError::DivideByZero
//!     }
//! }
//!
//! impl ExceptionConstructible<()> for MathError {
//!     type Exception = std::io::Error;
//!
//!     fn exception((): ()) -> std::io::Error {
//!         std::io::Error::new(std::io::ErrorKind::InvalidInput, "Division by Zero")
//!     }
//! }
//!
//! fn divide<P: ErrorPolicy>(n: i32, d: i32) -> ResultShape<f64, MathError, P> {
//!     if d == 0 {
//!         return make_failure::<f64, MathError, P, _>(());
//!     }
//!     success::<f64, MathError, P>(f64::from(n) / f64::from(d))
//! }
//!
//! // Result-returning instantiation.
//! assert_eq!(divide::<Expected>(1, 0), Err(MathError::DivideByZero));
//!
//! // Unwinding instantiation: the bare value, or a raised failure.
//! assert_eq!(divide::<Exceptions>(1, 2), 0.5);
//! let raised = catch(|| divide::<Exceptions>(1, 0)).unwrap_err();
//! assert_eq!(raised.message(), "Division by Zero");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod by_default;
pub mod construct;
pub mod error;
pub mod policy;
pub mod raise;
pub mod unexpected;

// Re-export primary types at crate root for convenience
pub use construct::{
    failure, make_failure, make_failure_via, make_failure_with, success, success_unit,
    ErrorFunctor, ExceptionConstructible, IntoException,
};
pub use error::ParsePolicyError;
pub use policy::{
    DefaultPolicy, ErrorPolicy, Exceptions, Expected, Policy, ResultShape, DEFAULT_POLICY,
};
pub use raise::{catch, install_hook, install_hook_with, raise, HookGuard, Raised, Throwable};
pub use unexpected::Unexpected;
