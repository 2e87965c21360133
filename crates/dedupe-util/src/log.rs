//! Log sink port for engine events.
//!
//! The engine never prints on its own: every notable step is handed to a
//! [`LogSink`] supplied by the caller. The CLI renders records as status
//! lines, library callers can forward them to `tracing`, and tests capture
//! them with [`MemorySink`].

use std::fmt;
use std::sync::Mutex;

/// Severity of a [`LogRecord`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Level {
    Debug,
    Info,
    Warn,
}

/// A single event emitted by the engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogRecord {
    pub level: Level,
    /// Short verb describing the step, e.g. `Scanning` or `Removing`.
    pub label: &'static str,
    pub message: String,
}

impl fmt::Display for LogRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.label, self.message)
    }
}

/// Destination for engine log records.
pub trait LogSink: Send + Sync {
    fn emit(&self, record: LogRecord);

    fn debug(&self, label: &'static str, message: String) {
        self.emit(LogRecord {
            level: Level::Debug,
            label,
            message,
        });
    }

    fn info(&self, label: &'static str, message: String) {
        self.emit(LogRecord {
            level: Level::Info,
            label,
            message,
        });
    }

    fn warn(&self, label: &'static str, message: String) {
        self.emit(LogRecord {
            level: Level::Warn,
            label,
            message,
        });
    }
}

/// Forwards records to the `tracing` macros.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl LogSink for TracingSink {
    fn emit(&self, record: LogRecord) {
        match record.level {
            Level::Debug => tracing::debug!(label = record.label, "{}", record.message),
            Level::Info => tracing::info!(label = record.label, "{}", record.message),
            Level::Warn => tracing::warn!(label = record.label, "{}", record.message),
        }
    }
}

/// Collects records in memory.
#[derive(Debug, Default)]
pub struct MemorySink {
    records: Mutex<Vec<LogRecord>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of everything emitted so far.
    pub fn records(&self) -> Vec<LogRecord> {
        match self.records.lock() {
            Ok(guard) => guard.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    /// Records carrying the given label, in emission order.
    pub fn with_label(&self, label: &str) -> Vec<LogRecord> {
        self.records()
            .into_iter()
            .filter(|r| r.label == label)
            .collect()
    }
}

impl LogSink for MemorySink {
    fn emit(&self, record: LogRecord) {
        match self.records.lock() {
            Ok(mut guard) => guard.push(record),
            Err(poisoned) => poisoned.into_inner().push(record),
        }
    }
}
