use crate::settings::LogLevel;
use crate::sink::{LogPayload, LogSink};
use std::sync::{Mutex, MutexGuard, PoisonError};

/// Keeps every write in memory, in arrival order.
#[derive(Debug, Default)]
pub struct RecordingSink {
    writes: Mutex<Vec<(LogLevel, LogPayload)>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn writes(&self) -> Vec<(LogLevel, LogPayload)> {
        self.lock().clone()
    }

    pub fn payloads(&self) -> Vec<LogPayload> {
        self.lock().iter().map(|(_, p)| p.clone()).collect()
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    pub fn clear(&self) {
        self.lock().clear();
    }

    fn record(&self, level: LogLevel, payload: LogPayload) -> anyhow::Result<()> {
        self.lock().push((level, payload));
        Ok(())
    }

    fn lock(&self) -> MutexGuard<'_, Vec<(LogLevel, LogPayload)>> {
        self.writes.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl LogSink for RecordingSink {
    fn debug(&self, payload: LogPayload) -> anyhow::Result<()> {
        self.record(LogLevel::Debug, payload)
    }

    fn info(&self, payload: LogPayload) -> anyhow::Result<()> {
        self.record(LogLevel::Info, payload)
    }

    fn warn(&self, payload: LogPayload) -> anyhow::Result<()> {
        self.record(LogLevel::Warn, payload)
    }

    fn error(&self, payload: LogPayload) -> anyhow::Result<()> {
        self.record(LogLevel::Error, payload)
    }

    fn fatal(&self, payload: LogPayload) -> anyhow::Result<()> {
        self.record(LogLevel::Fatal, payload)
    }
}
