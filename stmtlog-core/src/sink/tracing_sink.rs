use crate::settings::LogLevel;
use crate::sink::{LogPayload, LogSink};
use tracing::{debug, error, info, warn};

/// Target every statement line is emitted under.
pub const SQL_TARGET: &str = "stmtlog::sql";

// ----------------------------------------------------------------------------
// Emit macro (DRY-out logging calls)
// ----------------------------------------------------------------------------

// tracing has no fatal level; fatal lines go out as errors tagged `fatal`.
macro_rules! emit {
    ($level:expr, $($fields:tt)*) => {
        match $level {
            LogLevel::Debug => debug!(target: SQL_TARGET, $($fields)*),
            LogLevel::Info  => info!(target: SQL_TARGET, $($fields)*),
            LogLevel::Warn  => warn!(target: SQL_TARGET, $($fields)*),
            LogLevel::Error => error!(target: SQL_TARGET, $($fields)*),
            LogLevel::Fatal => error!(target: SQL_TARGET, fatal = true, $($fields)*),
        }
    };
}

// ----------------------------------------------------------------------------
// Sink implementation
// ----------------------------------------------------------------------------

/// Writes statements to the installed `tracing` subscriber.
///
/// Text payloads become the event message. Records are split into `sql` and
/// `binds` fields, with the binds encoded as JSON.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl TracingSink {
    pub fn new() -> Self {
        Self
    }

    fn emit(&self, level: LogLevel, payload: LogPayload) -> anyhow::Result<()> {
        match payload {
            LogPayload::Text(line) => {
                emit!(level, "{}", line);
            }
            LogPayload::Record(record) => {
                let binds = serde_json::to_string(&record.binds)?;
                emit!(level, sql = %record.sql, binds = %binds, "statement");
            }
        }

        Ok(())
    }
}

impl LogSink for TracingSink {
    fn debug(&self, payload: LogPayload) -> anyhow::Result<()> {
        self.emit(LogLevel::Debug, payload)
    }

    fn info(&self, payload: LogPayload) -> anyhow::Result<()> {
        self.emit(LogLevel::Info, payload)
    }

    fn warn(&self, payload: LogPayload) -> anyhow::Result<()> {
        self.emit(LogLevel::Warn, payload)
    }

    fn error(&self, payload: LogPayload) -> anyhow::Result<()> {
        self.emit(LogLevel::Error, payload)
    }

    fn fatal(&self, payload: LogPayload) -> anyhow::Result<()> {
        self.emit(LogLevel::Fatal, payload)
    }
}
