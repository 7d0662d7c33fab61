use crate::conf::reload_filter_settings;
use crate::filter::StatementLogFilter;
use crate::replay::{ReplaySummary, replay};
use crate::settings::FilterSettings;
use crate::sink::TracingSink;
use anyhow::{Context, Result};
use std::fs::File;
use std::io::{self, BufReader};
use std::path::PathBuf;
use std::sync::Arc;

/// Replays a JSON-lines event stream through the statement log filter.
///
/// Reads `input` when given, stdin otherwise. Statement lines go to the
/// installed `tracing` subscriber; the summary goes to stderr.
pub fn run(config: Option<PathBuf>, input: Option<PathBuf>) -> Result<()> {
    if let Some(config) = config {
        reload_filter_settings(&config, &FilterSettings::global())?;
    }

    let filter = StatementLogFilter::new(Arc::new(TracingSink::new()));

    let summary = match input {
        Some(path) => {
            let file = File::open(&path)
                .with_context(|| format!("failed to open {}", path.display()))?;
            replay(BufReader::new(file), &filter)?
        }
        None => {
            let stdin = io::stdin();
            replay(stdin.lock(), &filter)?
        }
    };

    print_summary(&summary);

    Ok(())
}

fn print_summary(summary: &ReplaySummary) {
    eprintln!(
        "replayed {} events: {} logged, {} skipped",
        summary.total,
        summary.emitted,
        summary.skipped_total()
    );
    for (reason, count) in &summary.skipped {
        eprintln!("  {reason}: {count}");
    }
}
