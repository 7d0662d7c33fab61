use integration_tests::harness::{TestPipeline, TestTracing};
use pretty_assertions::assert_eq;
use std::sync::Arc;
use stmtlog_core::replay::replay;
use stmtlog_core::sink::SQL_TARGET;
use stmtlog_core::{LogFormat, StatementLogFilter, TracingSink};

#[test]
fn hash_format_reaches_the_subscriber_as_fields() {
    let pipeline = TestPipeline::start("default");
    pipeline.settings.set_log_format(LogFormat::Hash);
    let filter =
        StatementLogFilter::with_settings(pipeline.settings.clone(), Arc::new(TracingSink::new()));
    let capture = TestTracing::start();

    let input = r#"{"sql": "DELETE FROM users WHERE id = $1", "binds": [{"name": "id", "value": 1}]}"#;
    replay(input.as_bytes(), &filter).unwrap();

    let events = capture.events_for(SQL_TARGET);
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].level, tracing::Level::INFO);
    assert_eq!(
        events[0].field("sql"),
        Some("DELETE FROM users WHERE id = $1")
    );
    assert_eq!(events[0].field("binds"), Some(r#"{"id":1}"#));
}
