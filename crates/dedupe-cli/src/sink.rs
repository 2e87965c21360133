//! Renders engine log records as status lines on stderr.

use dedupe_util::log::{Level, LogRecord, LogSink};
use dedupe_util::progress;

/// Prints info and warning records; debug records only reach `tracing`.
pub struct StatusSink;

impl LogSink for StatusSink {
    fn emit(&self, record: LogRecord) {
        match record.level {
            Level::Debug => tracing::debug!("{record}"),
            Level::Info if record.label == "Removing" || record.label == "Finished" => {
                progress::status(record.label, &record.message)
            }
            Level::Info => progress::status_info(record.label, &record.message),
            Level::Warn => progress::status_warn(record.label, &record.message),
        }
    }
}
