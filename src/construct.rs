//! Success and failure constructors.
//!
//! A fallible function is written once, generic over `P: ErrorPolicy`, and
//! returns [`ResultShape<R, E, P>`]. Inside it, [`success`] produces the
//! success shape and one of four failure strategies produces the failure:
//!
//! | Strategy | Function | The recipes live on |
//! |---|---|---|
//! | in-place | [`make_failure`] | `E` ([`ExceptionConstructible`]) |
//! | functor | [`make_failure_via`] | a helper type ([`ErrorFunctor`]) |
//! | callable | [`make_failure_with`] | two closures at the call site |
//! | conversion | [`failure`] | an existing `E` ([`IntoException`]) |
//!
//! Every strategy raises under [`Exceptions`](crate::Exceptions) and returns
//! `Err` under [`Expected`](crate::Expected); which one is fixed by `P` when
//! the function is instantiated. A type that lacks the capability a strategy
//! needs is rejected by the compiler:
//!
//! ```compile_fail
//! use expection::{make_failure, Expected};
//!
//! #[derive(Debug)]
//! struct Plain(u8);
//!
//! impl From<u8> for Plain {
//!     fn from(code: u8) -> Self {
//!         Plain(code)
//!     }
//! }
//!
//! // `Plain` cannot build a throwable from `u8`.
//! let _ = make_failure::<i32, Plain, Expected, u8>(7);
//! ```
//!
//! ```compile_fail
//! use expection::{failure, Exceptions};
//!
//! #[derive(Debug)]
//! struct Plain;
//!
//! // `Plain` has no conversion to a throwable.
//! let _ = failure::<i32, Exceptions, _>(Plain);
//! ```
//!
//! ```compile_fail
//! use expection::{make_failure_with, Expected, Unexpected};
//!
//! // A `String` is not a throwable.
//! let _ = make_failure_with::<i32, String, Expected, &str, String>(
//!     |msg| Unexpected::new(msg.to_string()),
//!     |msg| msg.to_string(),
//!     "boom",
//! );
//! ```

use crate::policy::{ErrorPolicy, ResultShape};
use crate::raise::Throwable;
use crate::unexpected::Unexpected;

/// In-place capability: `Self` builds its own throwable from `Args`, and its
/// failure arm by plain construction through `From<Args>`.
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot build a throwable from `{Args}`",
    label = "missing in-place failure capability",
    note = "implement `ExceptionConstructible<{Args}>` and `From<{Args}>` for `{Self}` to use `make_failure`"
)]
pub trait ExceptionConstructible<Args>: From<Args> {
    /// The throwable raised under [`Exceptions`](crate::Exceptions).
    type Exception: Throwable;

    /// Builds the throwable.
    fn exception(args: Args) -> Self::Exception;
}

/// Functor capability: a stateless helper that knows both recipes for `E`.
///
/// Useful when `E` is a plain data type that should not carry construction
/// logic itself.
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not a failure functor for `{E}` with arguments `{Args}`",
    label = "missing functor failure capability",
    note = "implement `ErrorFunctor<{E}, {Args}>` for `{Self}` to use `make_failure_via`"
)]
pub trait ErrorFunctor<E, Args> {
    /// The throwable raised under [`Exceptions`](crate::Exceptions).
    type Exception: Throwable;

    /// Builds the throwable.
    fn exception(args: Args) -> Self::Exception;

    /// Builds the wrapped failure arm.
    fn unexpected(args: Args) -> Unexpected<E>;
}

/// Conversion capability: an existing error value turns into a throwable.
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot be converted into a throwable",
    label = "missing conversion failure capability",
    note = "implement `IntoException` for `{Self}` to use `failure`"
)]
pub trait IntoException {
    /// The throwable raised under [`Exceptions`](crate::Exceptions).
    type Exception: Throwable;

    /// Converts `self` into its throwable.
    fn into_exception(self) -> Self::Exception;
}

/// Success shape for `value` under `P`.
///
/// `value` itself under `Exceptions`, `Ok(value)` under `Expected`.
#[inline]
#[must_use]
pub fn success<R, E, P>(value: R) -> ResultShape<R, E, P>
where
    P: ErrorPolicy,
{
    P::wrap::<R, E>(value)
}

/// Success shape for functions with no success payload.
#[inline]
#[must_use]
pub fn success_unit<E, P>() -> ResultShape<(), E, P>
where
    P: ErrorPolicy,
{
    P::wrap::<(), E>(())
}

/// In-place strategy: fails with an `E` built from `args`.
///
/// Raises `E::exception(args)` under `Exceptions`; returns
/// `Err(E::from(args))` under `Expected`.
///
/// # Examples
///
/// ```
/// use expection::{make_failure, ExceptionConstructible, Expected};
///
/// #[derive(Debug, PartialEq)]
/// struct NotFound(u32);
///
/// impl From<u32> for NotFound {
///     fn from(id: u32) -> Self {
///         NotFound(id)
///     }
/// }
///
/// impl ExceptionConstructible<u32> for NotFound {
///     type Exception = std::io::Error;
///
///     fn exception(id: u32) -> std::io::Error {
///         std::io::Error::new(std::io::ErrorKind::NotFound, format!("no record {id}"))
///     }
/// }
///
/// let r = make_failure::<String, NotFound, Expected, _>(9);
/// assert_eq!(r, Err(NotFound(9)));
/// ```
#[inline]
#[track_caller]
pub fn make_failure<R, E, P, Args>(args: Args) -> ResultShape<R, E, P>
where
    P: ErrorPolicy,
    E: ExceptionConstructible<Args>,
{
    P::fail::<R, E, _, _, _, _>(args, E::exception, |args| Unexpected::new(E::from(args)))
}

/// Functor strategy: fails using the recipes on helper type `F`.
#[inline]
#[track_caller]
pub fn make_failure_via<R, E, F, P, Args>(args: Args) -> ResultShape<R, E, P>
where
    P: ErrorPolicy,
    F: ErrorFunctor<E, Args>,
{
    P::fail::<R, E, _, _, _, _>(args, F::exception, F::unexpected)
}

/// Callable strategy: fails using two closures supplied at the call site.
///
/// Only the closure matching `P` is called.
///
/// # Examples
///
/// ```
/// use expection::{catch, make_failure_with, Exceptions, Unexpected};
///
/// let raised = catch(|| {
///     make_failure_with::<u8, String, Exceptions, _, _>(
///         |msg: &str| Unexpected::new(msg.to_string()),
///         |msg: &str| std::io::Error::new(std::io::ErrorKind::Other, msg),
///         "overflow",
///     )
/// })
/// .unwrap_err();
/// assert_eq!(raised.message(), "overflow");
/// ```
#[inline]
#[track_caller]
pub fn make_failure_with<R, E, P, Args, X>(
    unexpected: impl FnOnce(Args) -> Unexpected<E>,
    exception: impl FnOnce(Args) -> X,
    args: Args,
) -> ResultShape<R, E, P>
where
    P: ErrorPolicy,
    X: Throwable,
{
    P::fail::<R, E, _, _, _, _>(args, exception, unexpected)
}

/// Conversion strategy: fails with an already-built `error`.
///
/// Raises `error.into_exception()` under `Exceptions`; returns `Err(error)`
/// unchanged under `Expected`.
#[inline]
#[track_caller]
pub fn failure<R, P, E>(error: E) -> ResultShape<R, E, P>
where
    P: ErrorPolicy,
    E: IntoException,
{
    P::fail::<R, E, _, _, _, _>(error, E::into_exception, Unexpected::new)
}
