use crate::prelude::*;
use thiserror::Error;

/// Type-erased failure raised by a guarded block.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Key-value payload handed to a rethrow target when it is constructed.
pub type Extra = serde_json::Map<String, serde_json::Value>;

#[derive(Error, Debug)]
pub enum ScopeError {
    /// Default target of [`rethrow`](crate::rethrow): the caught error wrapped
    /// as a generic runtime failure.
    #[error("runtime error: {source}")]
    Runtime {
        #[source]
        source: BoxError,
        extra: Extra,
    },
}

impl ScopeError {
    /// Payload supplied through `Rethrow::with`.
    pub fn extra(&self) -> &Extra {
        match self {
            Self::Runtime { extra, .. } => extra,
        }
    }
}

/// Walks an error and its chain of sources, starting with the error itself.
pub fn causes<'a>(error: &'a (dyn StdError + 'static)) -> impl Iterator<Item = &'a (dyn StdError + 'static)> {
    std::iter::successors(Some(error), |&current| current.source())
}

/// Returns the first link in the cause chain whose concrete type is `E`.
pub fn find_cause<'a, E>(error: &'a (dyn StdError + 'static)) -> Option<&'a E>
where
    E: StdError + 'static,
{
    causes(error).find_map(|link| link.downcast_ref::<E>())
}
