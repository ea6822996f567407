//! The constructors with the policy fixed to [`DefaultPolicy`].
//!
//! Rust has no default type arguments on functions, so code that wants "the
//! configured policy" without naming one calls these instead:
//!
//! ```
//! use expection::{by_default, ExceptionConstructible, ResultShape};
//!
//! #[derive(Debug)]
//! struct Empty;
//!
//! impl From<()> for Empty {
//!     fn from((): ()) -> Self {
//!         Empty
//!     }
//! }
//!
//! impl ExceptionConstructible<()> for Empty {
//!     type Exception = std::fmt::Error;
//!
//!     fn exception((): ()) -> std::fmt::Error {
//!         std::fmt::Error
//!     }
//! }
//!
//! fn first(items: &[u8]) -> ResultShape<u8, Empty> {
//!     match items.first() {
//!         Some(&item) => by_default::success::<u8, Empty>(item),
//!         None => by_default::make_failure::<u8, Empty, ()>(()),
//!     }
//! }
//!
//! let _ = first(&[3, 4]);
//! ```

use crate::construct::{self, ErrorFunctor, ExceptionConstructible, IntoException};
use crate::policy::{DefaultPolicy, ResultShape};
use crate::raise::Throwable;
use crate::unexpected::Unexpected;

/// [`success`](construct::success) under [`DefaultPolicy`].
#[inline]
#[must_use]
pub fn success<R, E>(value: R) -> ResultShape<R, E> {
    construct::success::<R, E, DefaultPolicy>(value)
}

/// [`success_unit`](construct::success_unit) under [`DefaultPolicy`].
#[inline]
#[must_use]
pub fn success_unit<E>() -> ResultShape<(), E> {
    construct::success_unit::<E, DefaultPolicy>()
}

/// [`make_failure`](construct::make_failure) under [`DefaultPolicy`].
#[inline]
#[track_caller]
pub fn make_failure<R, E, Args>(args: Args) -> ResultShape<R, E>
where
    E: ExceptionConstructible<Args>,
{
    construct::make_failure::<R, E, DefaultPolicy, Args>(args)
}

/// [`make_failure_via`](construct::make_failure_via) under [`DefaultPolicy`].
#[inline]
#[track_caller]
pub fn make_failure_via<R, E, F, Args>(args: Args) -> ResultShape<R, E>
where
    F: ErrorFunctor<E, Args>,
{
    construct::make_failure_via::<R, E, F, DefaultPolicy, Args>(args)
}

/// [`make_failure_with`](construct::make_failure_with) under [`DefaultPolicy`].
#[inline]
#[track_caller]
pub fn make_failure_with<R, E, Args, X>(
    unexpected: impl FnOnce(Args) -> Unexpected<E>,
    exception: impl FnOnce(Args) -> X,
    args: Args,
) -> ResultShape<R, E>
where
    X: Throwable,
{
    construct::make_failure_with::<R, E, DefaultPolicy, Args, X>(unexpected, exception, args)
}

/// [`failure`](construct::failure) under [`DefaultPolicy`].
#[inline]
#[track_caller]
pub fn failure<R, E>(error: E) -> ResultShape<R, E>
where
    E: IntoException,
{
    construct::failure::<R, DefaultPolicy, E>(error)
}
