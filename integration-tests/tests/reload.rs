use integration_tests::harness::{TestPipeline, TestTracing, write_config};
use pretty_assertions::assert_eq;
use stmtlog_core::conf::reload_filter_settings;
use stmtlog_core::{LogFormat, LogLevel};

#[test]
fn reload_applies_to_the_next_event() {
    let dir = tempfile::tempdir().unwrap();
    write_config(dir.path(), "statement_log = {}");
    let pipeline = TestPipeline::from_config_dir(dir.path());

    pipeline.replay_events("mixed").unwrap();
    let before = pipeline.sink.len();

    write_config(
        dir.path(),
        r#"statement_log = {
  level             = "debug"
  target_statements = ["select"]
}"#,
    );
    pipeline.reload(dir.path());
    pipeline.sink.clear();

    let summary = pipeline.replay_events("mixed").unwrap();

    assert_eq!(before, 4);
    assert_eq!(summary.emitted, 1);
    assert_eq!(pipeline.settings.log_level(), LogLevel::Debug);
    assert_eq!(pipeline.texts(), vec!["SELECT * FROM users".to_string()]);
}

#[test]
fn failed_reload_keeps_live_settings() {
    let dir = tempfile::tempdir().unwrap();
    write_config(dir.path(), r#"statement_log = { format = "json" }"#);
    let pipeline = TestPipeline::from_config_dir(dir.path());

    write_config(dir.path(), r#"statement_log = { target_statements = [" "] }"#);
    let result = reload_filter_settings(dir.path(), &pipeline.settings);

    assert!(result.is_err());
    assert!(matches!(pipeline.settings.log_format(), LogFormat::Json));
    assert_eq!(pipeline.settings.target_statements().len(), 9);
}

#[test]
fn reload_logs_old_and_new_values() {
    let dir = tempfile::tempdir().unwrap();
    write_config(dir.path(), "statement_log = {}");
    let pipeline = TestPipeline::from_config_dir(dir.path());
    let capture = TestTracing::start();

    write_config(dir.path(), r#"statement_log = { level = "error" }"#);
    pipeline.reload(dir.path());

    let events = capture.events();
    let reload = events
        .iter()
        .find(|e| e.field("message") == Some("statement log settings reloaded"))
        .expect("reload event");
    assert_eq!(reload.field("old_level"), Some("info"));
    assert_eq!(reload.field("new_level"), Some("error"));
}
