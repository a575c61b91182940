use crate::prelude::*;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::future::Future;
use std::io::{self, Write};
use std::ops::Deref;
use std::panic::{self, AssertUnwindSafe};
use tracing::{debug, warn};

type Reporter = Box<dyn FnMut(&str) + Send>;

/// Measures how long a block of code takes.
///
/// `start` is recorded on [`enter`](Timer::enter); `end` and `duration` when the
/// returned scope is dropped, including while unwinding. With reporting
/// enabled the reporter receives `Timer: <formatted>` once per exit.
///
/// ```
/// use context_utils::timer;
///
/// let mut t = timer();
/// let sum: u64 = t.time(|| (0..1_000).sum());
/// assert_eq!(sum, 499_500);
/// assert_eq!(t.end().unwrap() - t.start().unwrap(), t.duration().unwrap());
/// ```
pub struct Timer {
    start: Option<f64>,
    end: Option<f64>,
    duration: Option<f64>,
    report: bool,
    reporter: Reporter,
    clock: Box<dyn Clock + Send>,
}

/// Timer that does not report, printing to stdout if reporting is switched on.
pub fn timer() -> Timer {
    Timer::new()
}

impl Timer {
    pub fn new() -> Self {
        Self {
            start: None,
            end: None,
            duration: None,
            report: false,
            reporter: Box::new(print_report),
            clock: Box::new(SystemClock),
        }
    }

    pub fn with_report(mut self, report: bool) -> Self {
        self.report = report;
        self
    }

    /// Shorthand for `with_report(true)`.
    pub fn reporting(self) -> Self {
        self.with_report(true)
    }

    /// Replace the stdout reporter.
    pub fn with_reporter<F>(mut self, reporter: F) -> Self
    where
        F: FnMut(&str) + Send + 'static,
    {
        self.reporter = Box::new(reporter);
        self
    }

    pub fn with_clock<C>(mut self, clock: C) -> Self
    where
        C: Clock + Send + 'static,
    {
        self.clock = Box::new(clock);
        self
    }

    /// Record the start time. Exit bookkeeping runs when the scope drops.
    pub fn enter(&mut self) -> TimerScope<'_> {
        self.start = Some(self.clock.now());
        TimerScope { timer: self }
    }

    pub fn time<R>(&mut self, block: impl FnOnce() -> R) -> R {
        let _scope = self.enter();
        block()
    }

    pub async fn time_async<F: Future>(&mut self, future: F) -> F::Output {
        let _scope = self.enter();
        future.await
    }

    pub fn start(&self) -> Option<f64> {
        self.start
    }

    pub fn end(&self) -> Option<f64> {
        self.end
    }

    /// Seconds between `start` and `end`.
    pub fn duration(&self) -> Option<f64> {
        self.duration
    }

    /// Duration rendered by [`format_duration`]; `None` until the timer exits.
    pub fn formatted(&self) -> Option<String> {
        self.duration.map(format_duration)
    }

    pub fn is_reporting(&self) -> bool {
        self.report
    }

    pub fn timing(&self) -> Timing {
        Timing {
            start: self.start,
            end: self.end,
            duration: self.duration,
        }
    }

    fn exit(&mut self) {
        let end = self.clock.now();
        let duration = end - self.start.unwrap_or(end);
        self.end = Some(end);
        self.duration = Some(duration);
        debug!(duration = duration, "Timer stopped");

        if self.report {
            let line = format!("Timer: {}", format_duration(duration));
            // may run while unwinding; a second panic would abort
            let reporter = &mut self.reporter;
            if panic::catch_unwind(AssertUnwindSafe(|| reporter(&line))).is_err() {
                warn!(report = %line, "Timer reporter panicked");
            }
        }
    }
}

/// Default reporter: one line on stdout.
fn print_report(line: &str) {
    if let Err(e) = writeln!(io::stdout().lock(), "{}", line) {
        warn!(report = %line, "Failed to write timer report: {}", e);
    }
}

impl Default for Timer {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Timer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Timer")
            .field("start", &self.start)
            .field("end", &self.end)
            .field("duration", &self.duration)
            .field("report", &self.report)
            .finish_non_exhaustive()
    }
}

/// An entered [`Timer`]. Dropping it stops the timer.
pub struct TimerScope<'a> {
    timer: &'a mut Timer,
}

impl TimerScope<'_> {
    pub fn stop(self) {}
}

impl Deref for TimerScope<'_> {
    type Target = Timer;

    fn deref(&self) -> &Timer {
        &*self.timer
    }
}

impl Drop for TimerScope<'_> {
    fn drop(&mut self) {
        self.timer.exit();
    }
}

/// Snapshot of a timer's recorded values.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Timing {
    pub start: Option<f64>,
    pub end: Option<f64>,
    pub duration: Option<f64>,
}

/// Renders seconds as `<minutes>m<seconds>s`, seconds rounded to 2 places.
///
/// `61.239` becomes `1m1.24s`; whole seconds keep one decimal (`2m0.0s`).
pub fn format_duration(seconds: f64) -> String {
    let minutes = (seconds / 60.0).floor();
    // `{:.2}` rounds the exact binary value, so 2.675 (really 2.67499..) gives 2.67
    let mut secs = format!("{:.2}", seconds.rem_euclid(60.0));
    let trimmed = secs.trim_end_matches('0').len();
    secs.truncate(trimmed);
    if secs.ends_with('.') {
        secs.push('0');
    }
    format!("{}m{}s", minutes, secs)
}
