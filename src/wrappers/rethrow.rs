use crate::prelude::*;
use std::future::Future;
use std::marker::PhantomData;
use tracing::debug;

/// An error kind that can stand in for a caught failure.
///
/// The caught failure is handed over as `cause` and should be reported from
/// [`Error::source`](std::error::Error::source) so the chain stays intact.
pub trait Rethrown: StdError + Send + Sync + Sized + 'static {
    fn from_caught(cause: BoxError, extra: Extra) -> Self;
}

impl Rethrown for ScopeError {
    fn from_caught(cause: BoxError, extra: Extra) -> Self {
        ScopeError::Runtime { source: cause, extra }
    }
}

/// Converts selected failure kinds raised by a block into `T`.
///
/// Failures outside the kind set pass through untouched.
pub struct Rethrow<T = ScopeError> {
    kinds: ErrorKinds,
    extra: Extra,
    target: PhantomData<fn() -> T>,
}

/// Catch `kinds` and raise them again as [`ScopeError::Runtime`].
///
/// Use [`Rethrow::as_kind`] to pick another target.
pub fn rethrow(kinds: ErrorKinds) -> Rethrow<ScopeError> {
    Rethrow {
        kinds,
        extra: Extra::new(),
        target: PhantomData,
    }
}

impl<T: Rethrown> Rethrow<T> {
    /// Switch the error kind raised in place of caught failures.
    pub fn as_kind<U: Rethrown>(self) -> Rethrow<U> {
        Rethrow {
            kinds: self.kinds,
            extra: self.extra,
            target: PhantomData,
        }
    }

    /// Add a value to the payload passed to the target's constructor.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<serde_json::Value>) -> Self {
        self.extra.insert(key.into(), value.into());
        self
    }

    pub fn with_extra(mut self, extra: Extra) -> Self {
        self.extra.extend(extra);
        self
    }

    pub fn kinds(&self) -> &ErrorKinds {
        &self.kinds
    }

    pub fn extra(&self) -> &Extra {
        &self.extra
    }

    /// Convert `error` if it belongs to the kind set, otherwise return it as is.
    pub fn intercept(&self, error: BoxError) -> BoxError {
        match self.kinds.first_match(&*error) {
            Some(kind) => {
                debug!(
                    caught = kind.short_name(),
                    raised = std::any::type_name::<T>(),
                    "Rethrowing caught error"
                );
                Box::new(T::from_caught(error, self.extra.clone()))
            }
            None => error,
        }
    }

    /// Run `block`, converting matching failures.
    pub fn run<R, E, F>(&self, block: F) -> Result<R, BoxError>
    where
        F: FnOnce() -> Result<R, E>,
        E: Into<BoxError>,
    {
        block().map_err(|error| self.intercept(error.into()))
    }

    /// Await `future`, converting matching failures.
    pub async fn run_async<R, E, Fut>(&self, future: Fut) -> Result<R, BoxError>
    where
        Fut: Future<Output = Result<R, E>>,
        E: Into<BoxError>,
    {
        future.await.map_err(|error| self.intercept(error.into()))
    }
}
