//! Scoped helpers around fallible blocks of code.
//!
//! - [`rethrow`] converts selected error kinds into one unified error kind,
//!   keeping the original as the cause.
//! - [`log_errors`] logs selected error kinds at `ERROR` and suppresses them.
//! - [`timer`] measures how long a block took and can report it on exit.
//!
//! ```
//! use context_utils::{kinds, rethrow, ScopeError};
//! use std::num::ParseIntError;
//!
//! let result = rethrow(kinds![ParseIntError]).run(|| "x".parse::<i32>());
//! assert!(result.unwrap_err().is::<ScopeError>());
//! ```

#[macro_use]
mod macros;

pub mod clock;
pub mod error;
pub mod kinds;
pub mod logger;
pub mod prelude;
pub mod wrappers;

pub use clock::{Clock, MonotonicClock, SystemClock};
pub use error::{causes, find_cause, BoxError, Extra, ScopeError};
pub use kinds::{ErrorKind, ErrorKinds};
pub use logger::{Logger, TracingLogger};
pub use wrappers::log_errors::{log_errors, LogErrors};
pub use wrappers::rethrow::{rethrow, Rethrow, Rethrown};
pub use wrappers::timer::{format_duration, timer, Timer, TimerScope, Timing};
