//! Out-of-band failure transport for the [`Exceptions`](crate::Exceptions) policy.
//!
//! A raised failure is a panic whose payload is a [`Raised`] wrapping the
//! throwable. [`catch`] is the matching frame for callers that want the
//! throwable back as a value; foreign panics pass through it untouched.
//!
//! A raised failure nobody catches is reported by the panic hook. The default
//! hook cannot print a [`Raised`] payload, so programs that let failures
//! escape call [`install_hook`] first.
//!
//! Recovering a raised failure requires `panic = "unwind"`. Under
//! `panic = "abort"` raising still never returns to the call site.

use std::error::Error;
use std::fmt;
use std::panic::{self, Location, UnwindSafe};
use std::sync::Arc;

/// An error type that can be raised.
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot be raised as a failure",
    label = "not a throwable",
    note = "throwables implement `std::error::Error + Send + Sync + 'static`"
)]
pub trait Throwable: Error + Send + Sync + 'static {}

impl<T> Throwable for T where T: Error + Send + Sync + 'static {}

/// Panic payload carrying a raised throwable.
#[derive(Debug)]
pub struct Raised {
    inner: Box<dyn Error + Send + Sync + 'static>,
}

impl Raised {
    /// Wraps a throwable.
    #[must_use]
    pub fn new<X: Throwable>(exception: X) -> Self {
        Self {
            inner: Box::new(exception),
        }
    }

    /// The throwable's `Display` message.
    #[must_use]
    pub fn message(&self) -> String {
        self.inner.to_string()
    }

    /// Returns true if the throwable is an `X`.
    #[must_use]
    pub fn is<X: Throwable>(&self) -> bool {
        self.inner.is::<X>()
    }

    /// Borrows the throwable as an `X`, if it is one.
    #[must_use]
    pub fn downcast_ref<X: Throwable>(&self) -> Option<&X> {
        self.inner.downcast_ref::<X>()
    }

    /// Takes the throwable out as an `X`, or gives `self` back.
    ///
    /// # Errors
    /// Returns `self` unchanged if the throwable is not an `X`.
    pub fn downcast<X: Throwable>(self) -> Result<X, Self> {
        self.inner
            .downcast::<X>()
            .map(|boxed| *boxed)
            .map_err(|inner| Self { inner })
    }

    /// Takes the boxed throwable out.
    #[must_use]
    pub fn into_inner(self) -> Box<dyn Error + Send + Sync + 'static> {
        self.inner
    }
}

impl fmt::Display for Raised {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.inner, f)
    }
}

impl Error for Raised {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        self.inner.source()
    }
}

/// Raises `exception`. Control never returns to the caller.
#[cold]
#[track_caller]
pub fn raise<X: Throwable>(exception: X) -> ! {
    panic::panic_any(Raised::new(exception))
}

/// Runs `f`, returning any failure it raises as `Err`.
///
/// Panics that did not come from [`raise`] are resumed.
///
/// # Errors
/// Returns the [`Raised`] payload if `f` raised.
///
/// # Examples
///
/// ```
/// use expection::{catch, raise};
///
/// let raised = catch(|| -> u8 { raise(std::fmt::Error) }).unwrap_err();
/// assert!(raised.is::<std::fmt::Error>());
/// ```
pub fn catch<T, F>(f: F) -> Result<T, Raised>
where
    F: FnOnce() -> T + UnwindSafe,
{
    match panic::catch_unwind(f) {
        Ok(value) => Ok(value),
        Err(payload) => match payload.downcast::<Raised>() {
            Ok(raised) => Err(*raised),
            Err(foreign) => panic::resume_unwind(foreign),
        },
    }
}

/// Restores the panic hook that was active before [`install_hook`] or
/// [`install_hook_with`] when dropped.
///
/// A guard dropped while its thread is unwinding leaves the hook in place.
#[must_use = "dropping the guard uninstalls the hook immediately"]
pub struct HookGuard {
    restore: Option<Box<dyn FnOnce() + Send>>,
}

impl HookGuard {
    /// Keeps the hook installed for the rest of the process.
    pub fn forget(mut self) {
        self.restore = None;
    }
}

impl fmt::Debug for HookGuard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HookGuard")
            .field("armed", &self.restore.is_some())
            .finish()
    }
}

impl Drop for HookGuard {
    fn drop(&mut self) {
        // The hook cannot be swapped while this thread unwinds.
        if std::thread::panicking() {
            return;
        }
        if let Some(restore) = self.restore.take() {
            restore();
        }
    }
}

/// Installs a panic hook that reports raised failures on stderr as
/// `panicked at <location>: <message>`.
///
/// Panics that did not come from [`raise`] go to the previously installed
/// hook.
///
/// # Examples
///
/// ```no_run
/// use expection::{install_hook, raise};
///
/// let _hook = install_hook();
/// // stderr: "panicked at <file>:<line>:<col>: an error occurred when formatting an argument"
/// raise(std::fmt::Error);
/// ```
pub fn install_hook() -> HookGuard {
    install_hook_with(|report| eprintln!("{report}"))
}

/// Like [`install_hook`], but hands each report line to `write`.
pub fn install_hook_with<W>(write: W) -> HookGuard
where
    W: Fn(&str) + Send + Sync + 'static,
{
    let previous = Arc::new(panic::take_hook());
    let chained = Arc::clone(&previous);

    panic::set_hook(Box::new(move |info| match info.payload().downcast_ref::<Raised>() {
        Some(raised) => write(&report(raised, info.location())),
        None => chained(info),
    }));

    HookGuard {
        restore: Some(Box::new(move || {
            panic::set_hook(Box::new(move |info| previous(info)));
        })),
    }
}

fn report(raised: &Raised, location: Option<&Location<'_>>) -> String {
    match location {
        Some(location) => format!("panicked at {location}: {raised}"),
        None => format!("panicked: {raised}"),
    }
}

#[cfg(test)]
mod tests {
    use std::io;

    use thiserror::Error;

    use super::*;

    #[derive(Debug, Error)]
    #[error("disk full: {path}")]
    struct DiskFull {
        path: String,
        #[source]
        cause: io::Error,
    }

    fn disk_full() -> DiskFull {
        DiskFull {
            path: "/tmp/out".to_string(),
            cause: io::Error::new(io::ErrorKind::Other, "ENOSPC"),
        }
    }

    #[test]
    fn test_raised_display_forwards_message() {
        let raised = Raised::new(disk_full());
        assert_eq!(raised.message(), "disk full: /tmp/out");
        assert_eq!(format!("{raised}"), "disk full: /tmp/out");
    }

    #[test]
    fn test_raised_source_forwards() {
        let raised = Raised::new(disk_full());
        let source = raised.source().expect("source must be forwarded");
        assert_eq!(source.to_string(), "ENOSPC");
    }

    #[test]
    fn test_raised_downcast() {
        let raised = Raised::new(disk_full());
        assert!(raised.is::<DiskFull>());
        assert!(!raised.is::<io::Error>());
        assert_eq!(raised.downcast_ref::<DiskFull>().unwrap().path, "/tmp/out");

        let raised = raised.downcast::<io::Error>().unwrap_err();
        let full = raised.downcast::<DiskFull>().unwrap();
        assert_eq!(full.cause.kind(), io::ErrorKind::Other);
    }

    #[test]
    fn test_catch_passes_value_through() {
        assert_eq!(catch(|| 41 + 1).unwrap(), 42);
    }

    #[test]
    fn test_catch_recovers_raised() {
        let raised = catch(|| -> u32 { raise(disk_full()) }).unwrap_err();
        assert_eq!(raised.message(), "disk full: /tmp/out");
        assert!(raised.into_inner().is::<DiskFull>());
    }

    #[test]
    fn test_report_names_location_and_message() {
        let location = Location::caller();
        let line = report(&Raised::new(disk_full()), Some(location));
        assert_eq!(line, format!("panicked at {location}: disk full: /tmp/out"));
        assert!(line.starts_with("panicked at src/raise.rs:"));
    }

    #[test]
    fn test_report_without_location() {
        let line = report(&Raised::new(disk_full()), None);
        assert_eq!(line, "panicked: disk full: /tmp/out");
    }

    #[test]
    fn test_catch_resumes_foreign_panics() {
        let outer = panic::catch_unwind(|| catch(|| -> u32 { panic!("not raised") }));
        let payload = outer.unwrap_err();
        assert_eq!(payload.downcast_ref::<&str>(), Some(&"not raised"));
    }
}
