pub use crate::error::{BoxError, Extra, ScopeError};
pub use crate::kinds::{ErrorKind, ErrorKinds};
pub use crate::logger::{Logger, TracingLogger};
pub use crate::clock::{Clock, MonotonicClock, SystemClock};
pub use std::error::Error as StdError;
