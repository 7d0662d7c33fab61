use crate::filter::StatementLogFilter;
use crate::settings::FilterSettings;
use crate::sink::RecordingSink;
use std::sync::Arc;

/// Filter with its own default settings, so tests never touch the
/// process-wide instance.
pub fn isolated_filter() -> (StatementLogFilter, Arc<FilterSettings>, Arc<RecordingSink>) {
    let settings = Arc::new(FilterSettings::default());
    let sink = Arc::new(RecordingSink::new());
    let filter = StatementLogFilter::with_settings(settings.clone(), sink.clone());
    (filter, settings, sink)
}
