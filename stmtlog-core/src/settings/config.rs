use crate::settings::{LogFormat, LogLevel};
use smallvec::SmallVec;

/// Statements logged unless configured otherwise.
pub const DEFAULT_TARGET_STATEMENTS: [&str; 9] = [
    "insert",
    "update",
    "delete",
    "truncate",
    "begin",
    "commit",
    "rollback",
    "savepoint",
    "release savepoint",
];

/// Operation names that never produce a log line (schema introspection and
/// query plans). Not configurable.
pub const IGNORED_OPERATION_NAMES: [&str; 2] = ["SCHEMA", "EXPLAIN"];

/// Most deployments keep the default keyword list, which fits inline.
pub type TargetStatements = SmallVec<[String; 9]>;

/// Filter configuration as read on every processed event.
#[derive(Debug, Clone)]
pub struct FilterConfig {
    pub disabled: bool,
    pub log_level: LogLevel,
    pub log_format: LogFormat,
    pub target_statements: TargetStatements,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            disabled: false,
            log_level: LogLevel::default(),
            log_format: LogFormat::default(),
            target_statements: DEFAULT_TARGET_STATEMENTS
                .iter()
                .map(|s| s.to_string())
                .collect(),
        }
    }
}

impl FilterConfig {
    pub fn is_ignored_operation(name: &str) -> bool {
        IGNORED_OPERATION_NAMES.contains(&name)
    }
}
