use std::borrow::Cow;
use std::sync::Arc;
use tracing::Level;

const DEFAULT_LOGGER_NAME: &str = "context_utils";

/// Anything that accepts a severity-tagged message.
pub trait Logger {
    fn log(&self, level: Level, message: &str);

    fn error(&self, message: &str) {
        self.log(Level::ERROR, message);
    }
}

impl<L: Logger + ?Sized> Logger for &L {
    fn log(&self, level: Level, message: &str) {
        (**self).log(level, message);
    }
}

impl<L: Logger + ?Sized> Logger for Box<L> {
    fn log(&self, level: Level, message: &str) {
        (**self).log(level, message);
    }
}

impl<L: Logger + ?Sized> Logger for Arc<L> {
    fn log(&self, level: Level, message: &str) {
        (**self).log(level, message);
    }
}

/// Forwards messages to `tracing`, tagging each event with the logger name.
#[derive(Clone, Debug)]
pub struct TracingLogger {
    name: Cow<'static, str>,
}

impl TracingLogger {
    pub fn new() -> Self {
        Self {
            name: Cow::Borrowed(DEFAULT_LOGGER_NAME),
        }
    }

    /// Logger whose events carry `name` instead of the default.
    pub fn named(name: impl Into<Cow<'static, str>>) -> Self {
        Self { name: name.into() }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl Default for TracingLogger {
    fn default() -> Self {
        Self::new()
    }
}

impl Logger for TracingLogger {
    fn log(&self, level: Level, message: &str) {
        // tracing needs the level at compile time
        match level {
            Level::ERROR => tracing::error!(logger = self.name(), "{}", message),
            Level::WARN => tracing::warn!(logger = self.name(), "{}", message),
            Level::INFO => tracing::info!(logger = self.name(), "{}", message),
            Level::DEBUG => tracing::debug!(logger = self.name(), "{}", message),
            _ => tracing::trace!(logger = self.name(), "{}", message),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::io;
    use std::sync::Mutex;

    #[derive(Default)]
    struct Recorder {
        records: RefCell<Vec<(Level, String)>>,
    }

    impl Logger for Recorder {
        fn log(&self, level: Level, message: &str) {
            self.records.borrow_mut().push((level, message.to_string()));
        }
    }

    #[test]
    fn test_error_uses_error_level() {
        let recorder = Recorder::default();
        recorder.error("boom");
        assert_eq!(*recorder.records.borrow(), vec![(Level::ERROR, "boom".to_string())]);
    }

    #[test]
    fn test_forwarding_impls() {
        let recorder = Arc::new(Recorder::default());
        let by_ref: &Recorder = &recorder;
        by_ref.log(Level::WARN, "via ref");
        recorder.log(Level::INFO, "via arc");
        assert_eq!(recorder.records.borrow().len(), 2);
    }

    #[test]
    fn test_tracing_logger_names() {
        assert_eq!(TracingLogger::default().name(), "context_utils");
        assert_eq!(TracingLogger::named("jobs").name(), "jobs");
        assert_eq!(TracingLogger::named(String::from("owned")).name(), "owned");
    }

    #[derive(Clone, Default)]
    struct SharedBuffer(Arc<Mutex<Vec<u8>>>);

    impl io::Write for SharedBuffer {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_tracing_logger_emits_every_level() {
        let buffer = SharedBuffer::default();
        let writer = buffer.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(move || writer.clone())
            .with_max_level(Level::TRACE)
            .with_ansi(false)
            .finish();

        tracing::subscriber::with_default(subscriber, || {
            let logger = TracingLogger::named("levels");
            for level in [Level::ERROR, Level::WARN, Level::INFO, Level::DEBUG, Level::TRACE] {
                logger.log(level, &format!("at {}", level));
            }
        });

        let output = String::from_utf8_lossy(&buffer.0.lock().unwrap()).into_owned();
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines.len(), 5);
        for (line, level) in lines.iter().zip(["ERROR", "WARN", "INFO", "DEBUG", "TRACE"]) {
            assert!(line.contains(level), "missing {} in {}", level, line);
            assert!(line.contains(&format!("at {}", level)));
            assert!(line.contains("logger=\"levels\""), "missing logger field in {}", line);
        }
    }
}
