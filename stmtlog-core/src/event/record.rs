use crate::event::Binds;
use serde::Serialize;

/// Structured `{ sql, binds }` value for sinks that understand payloads
/// rather than lines.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatementRecord {
    pub sql: String,
    pub binds: Binds,
}

impl StatementRecord {
    pub fn new(sql: impl Into<String>, binds: Binds) -> Self {
        Self {
            sql: sql.into(),
            binds,
        }
    }
}
