//! In-memory, level-filtered log service (translates the `Logger` singleton
//! of the C++ catalogue).
//!
//! Records at or above the configured minimum level are retained in an
//! in-memory buffer; records below it are dropped entirely. One mutex guards
//! both the buffer and the minimum level, so a reader never observes a
//! half-applied update and concurrent writers interleave whole records.

use std::fmt;
use std::sync::{Mutex, OnceLock};

use chrono::{DateTime, Utc};

/// Severity of a log record, totally ordered from `Debug` up to `Error`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum LogLevel {
    /// Diagnostic detail.
    Debug,
    /// Routine information.
    Info,
    /// Something unexpected but recoverable.
    Warn,
    /// A failure.
    Error,
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            LogLevel::Debug => "DEBUG",
            LogLevel::Info => "INFO",
            LogLevel::Warn => "WARN",
            LogLevel::Error => "ERROR",
        };
        f.write_str(s)
    }
}

/// A single retained log record.
#[derive(Debug, Clone, PartialEq)]
pub struct LogRecord {
    /// Severity of the record.
    pub level: LogLevel,
    /// The logged message.
    pub message: String,
    /// Optional category tag, e.g. a subsystem name.
    pub category: Option<String>,
    /// When the record was appended.
    pub timestamp: DateTime<Utc>,
}

struct LoggerState {
    min_level: LogLevel,
    records: Vec<LogRecord>,
}

/// The log service.
///
/// ```
/// use dp_services::{LogLevel, Logger};
///
/// let log = Logger::new();
/// log.debug("discarded: below the default Info threshold");
/// log.warn("retained");
/// assert_eq!(log.len(), 1);
/// assert_eq!(log.records()[0].level, LogLevel::Warn);
/// ```
pub struct Logger {
    state: Mutex<LoggerState>,
}

impl Logger {
    /// Create a logger with the default minimum level, [`LogLevel::Info`].
    pub fn new() -> Self {
        Self::with_min_level(LogLevel::Info)
    }

    /// Create a logger retaining records at or above `min_level`.
    pub fn with_min_level(min_level: LogLevel) -> Self {
        Logger {
            state: Mutex::new(LoggerState {
                min_level,
                records: Vec::new(),
            }),
        }
    }

    /// Return a reference to the process-wide instance, constructing it on
    /// the first call from any thread.
    pub fn instance() -> &'static Logger {
        static INSTANCE: OnceLock<Logger> = OnceLock::new();
        INSTANCE.get_or_init(Logger::new)
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, LoggerState> {
        self.state.lock().expect("Logger mutex poisoned")
    }

    /// Append a record if `level` is at or above the minimum level.
    ///
    /// Exactly one record is retained per call that passes the filter;
    /// filtered-out calls retain nothing.
    pub fn log(&self, level: LogLevel, message: &str, category: Option<&str>) {
        let mut state = self.lock();
        if level >= state.min_level {
            state.records.push(LogRecord {
                level,
                message: message.to_string(),
                category: category.map(str::to_string),
                timestamp: Utc::now(),
            });
        }
    }

    /// Log at [`LogLevel::Debug`] with no category.
    pub fn debug(&self, message: &str) {
        self.log(LogLevel::Debug, message, None);
    }

    /// Log at [`LogLevel::Info`] with no category.
    pub fn info(&self, message: &str) {
        self.log(LogLevel::Info, message, None);
    }

    /// Log at [`LogLevel::Warn`] with no category.
    pub fn warn(&self, message: &str) {
        self.log(LogLevel::Warn, message, None);
    }

    /// Log at [`LogLevel::Error`] with no category.
    pub fn error(&self, message: &str) {
        self.log(LogLevel::Error, message, None);
    }

    /// Set the minimum retained level.
    pub fn set_min_level(&self, level: LogLevel) {
        self.lock().min_level = level;
    }

    /// The current minimum retained level.
    pub fn min_level(&self) -> LogLevel {
        self.lock().min_level
    }

    /// A snapshot of all retained records, in append order.
    pub fn records(&self) -> Vec<LogRecord> {
        self.lock().records.clone()
    }

    /// A snapshot of the retained records with exactly the given level.
    pub fn records_at(&self, level: LogLevel) -> Vec<LogRecord> {
        self.lock()
            .records
            .iter()
            .filter(|r| r.level == level)
            .cloned()
            .collect()
    }

    /// Number of retained records.
    pub fn len(&self) -> usize {
        self.lock().records.len()
    }

    /// `true` if no records are retained.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Drop all retained records. The minimum level is unchanged.
    pub fn clear(&self) {
        self.lock().records.clear();
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn below_threshold_retains_nothing() {
        let log = Logger::new();
        log.debug("dropped");
        assert!(log.is_empty());

        log.set_min_level(LogLevel::Debug);
        log.debug("kept");
        assert_eq!(log.len(), 1);
    }

    #[test]
    fn one_record_per_passing_call() {
        let log = Logger::new();
        log.info("a");
        log.warn("b");
        log.error("c");
        assert_eq!(log.len(), 3);

        let records = log.records();
        assert_eq!(records[0].message, "a");
        assert_eq!(records[2].level, LogLevel::Error);
    }

    #[test]
    fn filter_by_level() {
        let log = Logger::with_min_level(LogLevel::Debug);
        log.log(LogLevel::Warn, "w1", Some("net"));
        log.debug("d1");
        log.warn("w2");

        let warnings = log.records_at(LogLevel::Warn);
        assert_eq!(warnings.len(), 2);
        assert_eq!(warnings[0].category.as_deref(), Some("net"));
    }

    #[test]
    fn clear_keeps_min_level() {
        let log = Logger::with_min_level(LogLevel::Error);
        log.error("boom");
        log.clear();
        assert!(log.is_empty());
        assert_eq!(log.min_level(), LogLevel::Error);
    }

    #[test]
    fn level_ordering() {
        assert!(LogLevel::Debug < LogLevel::Info);
        assert!(LogLevel::Info < LogLevel::Warn);
        assert!(LogLevel::Warn < LogLevel::Error);
        assert_eq!(LogLevel::Warn.to_string(), "WARN");
    }
}
