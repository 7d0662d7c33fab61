use super::test_helpers::isolated_filter;
use crate::event::{BindValue, Binds, StatementEvent, StatementRecord};
use crate::filter::{FilterError, FilterOutcome, format_statement};
use crate::settings::{FilterSettings, LogFormat, LogLevel};
use crate::sink::{LogPayload, LogSink};
use crate::StatementLogFilter;
use anyhow::anyhow;
use pretty_assertions::assert_eq;
use std::sync::Arc;

const DELETE_SQL: &str = "DELETE FROM users WHERE id = $1";

fn delete_event() -> StatementEvent {
    StatementEvent::new(DELETE_SQL).with_bind("id", 1)
}

#[test]
fn text_format_appends_binds_after_two_spaces() {
    // Arrange
    let (filter, settings, sink) = isolated_filter();
    settings.set_log_format(LogFormat::Text);

    // Act
    filter.process(&delete_event()).unwrap();

    // Assert
    assert_eq!(
        sink.payloads(),
        vec![LogPayload::Text(
            r#"DELETE FROM users WHERE id = $1  {"id": 1}"#.to_string()
        )]
    );
}

#[test]
fn text_format_without_binds_is_the_raw_statement() {
    let payload = format_statement(&LogFormat::Text, "TRUNCATE users", Binds::new()).unwrap();

    assert_eq!(payload, LogPayload::Text("TRUNCATE users".to_string()));
}

#[test]
fn json_format_writes_sql_and_binds() {
    // Arrange
    let (filter, settings, sink) = isolated_filter();
    settings.set_log_format(LogFormat::Json);

    // Act
    filter.process(&delete_event()).unwrap();

    // Assert
    assert_eq!(
        sink.payloads(),
        vec![LogPayload::Text(
            r#"{"sql":"DELETE FROM users WHERE id = $1","binds":{"id":1}}"#.to_string()
        )]
    );
}

#[test]
fn json_format_keeps_bind_order_and_types() {
    let binds: Binds = [
        ("name", BindValue::from("New name")),
        ("age", BindValue::Integer(42)),
        ("disabled", BindValue::Bool(false)),
    ]
    .into_iter()
    .collect();

    let payload = format_statement(&LogFormat::Json, "UPDATE users SET ...", binds).unwrap();

    assert_eq!(
        payload.as_text(),
        Some(r#"{"sql":"UPDATE users SET ...","binds":{"name":"New name","age":42,"disabled":false}}"#)
    );
}

#[test]
fn hash_format_writes_a_structured_record() {
    // Arrange
    let (filter, settings, sink) = isolated_filter();
    settings.set_log_format(LogFormat::Hash);

    // Act
    filter.process(&delete_event()).unwrap();

    // Assert
    let expected = StatementRecord::new(DELETE_SQL, [("id", 1)].into_iter().collect());
    let payloads = sink.payloads();
    assert_eq!(payloads, vec![LogPayload::Record(expected)]);
    assert_eq!(payloads[0].as_text(), None);
    let record = payloads[0].as_record().unwrap();
    assert_eq!(record.binds.get("id"), Some(&BindValue::Integer(1)));
}

#[test]
fn custom_formatter_output_is_passed_through() {
    // Arrange
    let (filter, settings, sink) = isolated_filter();
    settings.set_log_format(LogFormat::custom(|_sql, _binds| {
        Ok(LogPayload::from("custom proc"))
    }));

    // Act
    filter.process(&delete_event()).unwrap();

    // Assert
    assert_eq!(sink.payloads(), vec![LogPayload::from("custom proc")]);
}

#[test]
fn custom_formatter_receives_statement_and_binds() {
    let format = LogFormat::custom(|sql, binds| {
        Ok(LogPayload::Text(format!("{}|{}", sql.len(), binds.len())))
    });

    let payload = format_statement(&format, DELETE_SQL, delete_event().binds()).unwrap();

    assert_eq!(payload, LogPayload::Text(format!("{}|1", DELETE_SQL.len())));
}

#[test]
fn custom_formatter_errors_propagate() {
    let (filter, settings, sink) = isolated_filter();
    settings.set_log_format(LogFormat::custom(|_, _| Err(anyhow!("formatter exploded"))));

    let err = filter.process(&delete_event()).unwrap_err();

    assert!(matches!(err, FilterError::Formatter(_)));
    assert_eq!(err.to_string(), "formatter exploded");
    assert!(sink.is_empty());
}

#[test]
fn unsupported_format_fails_on_first_qualifying_event() {
    // Arrange
    let (filter, settings, sink) = isolated_filter();
    settings.set_log_format(LogFormat::from_token("unexpected"));

    // Act
    let err = filter.process(&StatementEvent::new("INSERT")).unwrap_err();

    // Assert
    assert!(matches!(
        err,
        FilterError::UnsupportedFormat { ref format } if format == "unexpected"
    ));
    assert!(sink.is_empty());
}

#[test]
fn unsupported_format_is_not_raised_for_skipped_events() {
    let (filter, settings, _) = isolated_filter();
    settings.set_log_format(LogFormat::from_token("unexpected"));

    let outcome = filter
        .process(&StatementEvent::new("SELECT 1"))
        .unwrap();

    assert!(!outcome.is_emitted());
}

#[test]
fn corrected_format_recovers_on_the_next_event() {
    // Arrange
    let (filter, settings, sink) = isolated_filter();
    settings.set_log_format(LogFormat::from_token("yaml"));
    assert!(filter.process(&delete_event()).is_err());

    // Act
    settings.set_log_format(LogFormat::Json);
    let outcome = filter.process(&delete_event()).unwrap();

    // Assert
    assert_eq!(outcome, FilterOutcome::Emitted(LogLevel::Info));
    assert_eq!(sink.len(), 1);
}

#[test]
fn formatting_is_idempotent() {
    for format in [LogFormat::Text, LogFormat::Json, LogFormat::Hash] {
        let first = format_statement(&format, DELETE_SQL, delete_event().binds()).unwrap();
        let second = format_statement(&format, DELETE_SQL, delete_event().binds()).unwrap();

        assert_eq!(first, second, "{format}");
    }
}

struct FailingSink;

impl LogSink for FailingSink {
    fn debug(&self, _: LogPayload) -> anyhow::Result<()> {
        Err(anyhow!("sink closed"))
    }

    fn info(&self, _: LogPayload) -> anyhow::Result<()> {
        Err(anyhow!("sink closed"))
    }

    fn warn(&self, _: LogPayload) -> anyhow::Result<()> {
        Err(anyhow!("sink closed"))
    }

    fn error(&self, _: LogPayload) -> anyhow::Result<()> {
        Err(anyhow!("sink closed"))
    }

    fn fatal(&self, _: LogPayload) -> anyhow::Result<()> {
        Err(anyhow!("sink closed"))
    }
}

#[test]
fn sink_errors_propagate_unchanged() {
    let filter = StatementLogFilter::with_settings(
        Arc::new(FilterSettings::default()),
        Arc::new(FailingSink),
    );

    let err = filter.process(&delete_event()).unwrap_err();

    assert!(matches!(err, FilterError::Sink(_)));
    assert_eq!(err.to_string(), "sink closed");
}
