use crate::event::{Binds, StatementRecord};
use crate::filter::FilterError;
use crate::settings::{CustomFormatter, LogFormat};
use crate::sink::LogPayload;
use serde::Serialize;

/// Formatter resolved from the configured `LogFormat` for one event.
enum Formatter<'a> {
    Text,
    Json,
    Hash,
    Custom(&'a CustomFormatter),
}

#[derive(Serialize)]
struct RecordRef<'a> {
    sql: &'a str,
    binds: &'a Binds,
}

impl<'a> Formatter<'a> {
    fn resolve(format: &'a LogFormat) -> Result<Self, FilterError> {
        match format {
            LogFormat::Text => Ok(Formatter::Text),
            LogFormat::Json => Ok(Formatter::Json),
            LogFormat::Hash => Ok(Formatter::Hash),
            LogFormat::Custom(f) => Ok(Formatter::Custom(f)),
            LogFormat::Unsupported(token) => Err(FilterError::UnsupportedFormat {
                format: token.clone(),
            }),
        }
    }

    fn format(&self, sql: &str, binds: Binds) -> Result<LogPayload, FilterError> {
        match self {
            Formatter::Text if binds.is_empty() => Ok(LogPayload::Text(sql.to_string())),
            Formatter::Text => Ok(LogPayload::Text(format!("{sql}  {binds:?}"))),
            Formatter::Json => {
                let line = serde_json::to_string(&RecordRef {
                    sql,
                    binds: &binds,
                })?;
                Ok(LogPayload::Text(line))
            }
            Formatter::Hash => Ok(LogPayload::Record(StatementRecord::new(sql, binds))),
            Formatter::Custom(f) => f(sql, &binds).map_err(FilterError::Formatter),
        }
    }
}

/// Renders one statement with the given format.
///
/// Pure: identical inputs always give identical payloads (a custom formatter
/// is trusted to be pure as well).
pub fn format_statement(
    format: &LogFormat,
    sql: &str,
    binds: Binds,
) -> Result<LogPayload, FilterError> {
    Formatter::resolve(format)?.format(sql, binds)
}
