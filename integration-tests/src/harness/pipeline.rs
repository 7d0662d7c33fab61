use crate::harness::config::fixture_dir;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use std::sync::Arc;
use stmtlog_core::conf::{load_config, reload_filter_settings};
use stmtlog_core::replay::{ReplayError, ReplaySummary, replay};
use stmtlog_core::{FilterSettings, LogPayload, RecordingSink, StatementLogFilter};

/// A filter wired to its own settings and a recording sink.
///
/// Never touches the process-wide settings, so tests run in parallel.
pub struct TestPipeline {
    pub settings: Arc<FilterSettings>,
    pub sink: Arc<RecordingSink>,
    pub filter: StatementLogFilter,
}

impl TestPipeline {
    /// Pipeline configured from `fixtures/<fixture>/stmtlog.hcl`.
    pub fn start(fixture: &str) -> Self {
        Self::from_config_dir(&fixture_dir(fixture))
    }

    pub fn from_config_dir(dir: &Path) -> Self {
        let cfg = load_config(dir).expect("failed to load test config");
        let settings =
            Arc::new(FilterSettings::new(cfg).expect("test config must build settings"));
        let sink = Arc::new(RecordingSink::new());
        let filter = StatementLogFilter::with_settings(settings.clone(), sink.clone());

        Self {
            settings,
            sink,
            filter,
        }
    }

    /// Replays `fixtures/events/<name>.jsonl`.
    pub fn replay_events(&self, name: &str) -> Result<ReplaySummary, ReplayError> {
        let path = fixture_dir("events").join(format!("{name}.jsonl"));
        let file = File::open(&path).expect("missing events fixture");
        replay(BufReader::new(file), &self.filter)
    }

    pub fn reload(&self, dir: &Path) {
        reload_filter_settings(dir, &self.settings).expect("reload failed");
    }

    pub fn texts(&self) -> Vec<String> {
        self.sink
            .payloads()
            .into_iter()
            .filter_map(|p| match p {
                LogPayload::Text(s) => Some(s),
                LogPayload::Record(_) => None,
            })
            .collect()
    }
}
