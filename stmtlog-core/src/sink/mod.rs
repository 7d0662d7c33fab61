mod recording;
mod tracing_sink;


pub use recording::RecordingSink;
pub use tracing_sink::{SQL_TARGET, TracingSink};

use crate::event::StatementRecord;
use crate::settings::LogLevel;

/// What a sink receives for one accepted statement.
#[derive(Debug, Clone, PartialEq)]
pub enum LogPayload {
    /// A rendered line (`text` and `json` formats).
    Text(String),
    /// A structured value (`hash` format).
    Record(StatementRecord),
}

impl LogPayload {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            LogPayload::Text(line) => Some(line),
            LogPayload::Record(_) => None,
        }
    }

    pub fn as_record(&self) -> Option<&StatementRecord> {
        match self {
            LogPayload::Text(_) => None,
            LogPayload::Record(record) => Some(record),
        }
    }
}

impl From<String> for LogPayload {
    fn from(line: String) -> Self {
        LogPayload::Text(line)
    }
}

impl From<&str> for LogPayload {
    fn from(line: &str) -> Self {
        LogPayload::Text(line.to_string())
    }
}

impl From<StatementRecord> for LogPayload {
    fn from(record: StatementRecord) -> Self {
        LogPayload::Record(record)
    }
}

/// Destination for accepted statements, with one write method per severity.
///
/// Errors returned by a sink are handed back to the caller of
/// `StatementLogFilter::process` unchanged.
pub trait LogSink: Send + Sync {
    fn debug(&self, payload: LogPayload) -> anyhow::Result<()>;

    fn info(&self, payload: LogPayload) -> anyhow::Result<()>;

    fn warn(&self, payload: LogPayload) -> anyhow::Result<()>;

    fn error(&self, payload: LogPayload) -> anyhow::Result<()>;

    fn fatal(&self, payload: LogPayload) -> anyhow::Result<()>;

    /// Routes the payload to the write method named by `level`.
    fn write(&self, level: LogLevel, payload: LogPayload) -> anyhow::Result<()> {
        match level {
            LogLevel::Debug => self.debug(payload),
            LogLevel::Info => self.info(payload),
            LogLevel::Warn => self.warn(payload),
            LogLevel::Error => self.error(payload),
            LogLevel::Fatal => self.fatal(payload),
        }
    }
}
