use crate::settings::{DEFAULT_TARGET_STATEMENTS, FilterConfig, LogFormat, LogLevel};
use serde::{Deserialize, Serialize};

/// Top level of `stmtlog.hcl`.
#[derive(Debug, Default, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    #[serde(default)]
    pub statement_log: StatementLogSpec,
}

/// The `statement_log` block. Every field is optional.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct StatementLogSpec {
    #[serde(default)]
    pub disable: bool,

    #[serde(default)]
    pub level: LogLevel,

    /// Unknown tokens are kept and rejected when the first statement is
    /// formatted.
    #[serde(default)]
    pub format: LogFormat,

    #[serde(default = "default_target_statements")]
    pub target_statements: Vec<String>,
}

fn default_target_statements() -> Vec<String> {
    DEFAULT_TARGET_STATEMENTS
        .iter()
        .map(|s| s.to_string())
        .collect()
}

impl Default for StatementLogSpec {
    fn default() -> Self {
        Self {
            disable: false,
            level: LogLevel::default(),
            format: LogFormat::default(),
            target_statements: default_target_statements(),
        }
    }
}

impl From<StatementLogSpec> for FilterConfig {
    fn from(spec: StatementLogSpec) -> Self {
        Self {
            disabled: spec.disable,
            log_level: spec.level,
            log_format: spec.format,
            target_statements: spec.target_statements.into_iter().collect(),
        }
    }
}
