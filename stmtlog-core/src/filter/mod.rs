mod error;
mod format;
mod outcome;

#[cfg(test)]
pub(crate) mod tests;

pub use error::FilterError;
pub use format::format_statement;
pub use outcome::{FilterOutcome, SkipReason};

use crate::event::StatementEvent;
use crate::settings::{FilterConfig, FilterSettings, FilterSnapshot};
use crate::sink::LogSink;
use std::sync::Arc;

/// Decides, per statement notification, whether a log line is written and
/// writes it.
///
/// Settings are read once per event from a lock-free snapshot, so a change
/// made through `FilterSettings` applies to the next processed event.
pub struct StatementLogFilter {
    settings: Arc<FilterSettings>,
    sink: Arc<dyn LogSink>,
}

impl StatementLogFilter {
    /// Filter bound to the process-wide settings.
    pub fn new(sink: Arc<dyn LogSink>) -> Self {
        Self::with_settings(FilterSettings::global(), sink)
    }

    pub fn with_settings(settings: Arc<FilterSettings>, sink: Arc<dyn LogSink>) -> Self {
        Self { settings, sink }
    }

    pub fn settings(&self) -> &FilterSettings {
        &self.settings
    }

    /// Runs the skip pipeline and, when nothing trips, formats the statement
    /// and writes it at the configured level.
    ///
    /// Matching order...
    /// 1. Kill switch
    /// 2. Missing statement text
    /// 3. Cached result
    /// 4. Ignored operation name
    /// 5. Target statement keywords
    pub fn process(&self, event: &StatementEvent) -> Result<FilterOutcome, FilterError> {
        let snapshot = self.settings.snapshot();

        let sql = match accept(&snapshot, event) {
            Ok(sql) => sql,
            Err(reason) => {
                tracing::trace!(
                    reason = %reason,
                    operation = %event.operation_name,
                    "statement skipped"
                );
                return Ok(FilterOutcome::Skipped(reason));
            }
        };

        let config = snapshot.config();
        let payload = format_statement(&config.log_format, sql, event.binds())?;

        self.sink
            .write(config.log_level, payload)
            .map_err(FilterError::Sink)?;

        Ok(FilterOutcome::Emitted(config.log_level))
    }
}

fn accept<'e>(
    snapshot: &FilterSnapshot,
    event: &'e StatementEvent,
) -> Result<&'e str, SkipReason> {
    //---------------------------------------------------------------------
    // 1. Kill switch
    //---------------------------------------------------------------------
    if snapshot.config().disabled {
        return Err(SkipReason::Disabled);
    }

    //---------------------------------------------------------------------
    // 2-4. Event shape
    //---------------------------------------------------------------------
    let Some(sql) = event.statement() else {
        return Err(SkipReason::EmptyStatement);
    };

    // Cached results never reached the executor.
    if event.is_cached {
        return Err(SkipReason::Cached);
    }

    if FilterConfig::is_ignored_operation(&event.operation_name) {
        return Err(SkipReason::IgnoredOperation);
    }

    //---------------------------------------------------------------------
    // 5. Statement keywords
    //---------------------------------------------------------------------
    if !snapshot.matcher().is_match(sql) {
        return Err(SkipReason::NotTargeted);
    }

    Ok(sql)
}
