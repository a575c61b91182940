pub mod log_errors;
pub mod rethrow;
pub mod timer;

pub use log_errors::{log_errors, LogErrors};
pub use rethrow::{rethrow, Rethrow, Rethrown};
pub use timer::{format_duration, timer, Timer, TimerScope, Timing};
