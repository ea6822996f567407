//! The failure arm for the [`Expected`](crate::Expected) policy.

/// An error payload already wrapped as a failure.
///
/// Recipes that build the failure arm themselves (see
/// [`ErrorFunctor`](crate::ErrorFunctor) and
/// [`make_failure_with`](crate::make_failure_with)) return this rather than a
/// bare `E`, so a recipe cannot be mixed up with a success value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Unexpected<E>(E);

impl<E> Unexpected<E> {
    /// Wraps an error payload.
    #[must_use]
    pub const fn new(error: E) -> Self {
        Self(error)
    }

    /// Borrows the payload.
    #[must_use]
    pub const fn error(&self) -> &E {
        &self.0
    }

    /// Unwraps the payload.
    pub fn into_error(self) -> E {
        self.0
    }

    /// Maps the payload, keeping it in the failure arm.
    pub fn map<F, G>(self, f: G) -> Unexpected<F>
    where
        G: FnOnce(E) -> F,
    {
        Unexpected(f(self.0))
    }
}

impl<R, E> From<Unexpected<E>> for Result<R, E> {
    fn from(unexpected: Unexpected<E>) -> Self {
        Err(unexpected.0)
    }
}
