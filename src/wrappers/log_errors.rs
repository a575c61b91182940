use crate::prelude::*;
use std::future::Future;

/// Logs selected failure kinds at `ERROR` and swallows them.
///
/// Works like a suppressing guard with a logging call attached: a matching
/// failure produces exactly one log record and the block counts as finished.
/// Anything else propagates unchanged.
pub struct LogErrors<L> {
    logger: L,
    kinds: ErrorKinds,
}

pub fn log_errors<L: Logger>(logger: L, kinds: ErrorKinds) -> LogErrors<L> {
    LogErrors { logger, kinds }
}

impl LogErrors<TracingLogger> {
    /// Guard that logs through the default [`TracingLogger`].
    pub fn new(kinds: ErrorKinds) -> Self {
        log_errors(TracingLogger::default(), kinds)
    }
}

impl<L: Logger> LogErrors<L> {
    pub fn logger(&self) -> &L {
        &self.logger
    }

    pub fn kinds(&self) -> &ErrorKinds {
        &self.kinds
    }

    /// Log and drop `error` if it matches, otherwise hand it back.
    pub fn handle(&self, error: BoxError) -> Result<(), BoxError> {
        match self.kinds.first_match(&*error) {
            Some(kind) => {
                self.logger.error(&describe(kind, &*error));
                Ok(())
            }
            None => Err(error),
        }
    }

    /// Run `block`. A suppressed failure yields `Ok(None)`.
    pub fn run<R, E, F>(&self, block: F) -> Result<Option<R>, BoxError>
    where
        F: FnOnce() -> Result<R, E>,
        E: Into<BoxError>,
    {
        match block() {
            Ok(value) => Ok(Some(value)),
            Err(error) => self.handle(error.into()).map(|()| None),
        }
    }

    pub async fn run_async<R, E, Fut>(&self, future: Fut) -> Result<Option<R>, BoxError>
    where
        Fut: Future<Output = Result<R, E>>,
        E: Into<BoxError>,
    {
        match future.await {
            Ok(value) => Ok(Some(value)),
            Err(error) => self.handle(error.into()).map(|()| None),
        }
    }
}

/// `Kind("message")`, the text of a suppressed failure's log record.
fn describe(kind: ErrorKind, error: &(dyn StdError + 'static)) -> String {
    format!("{}({:?})", kind.short_name(), error.to_string())
}
