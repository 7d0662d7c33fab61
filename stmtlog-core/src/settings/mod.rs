mod config;
mod error;
mod format;
mod level;
mod matcher;
mod state;

#[cfg(test)]
mod tests;

pub use config::{
    DEFAULT_TARGET_STATEMENTS, FilterConfig, IGNORED_OPERATION_NAMES, TargetStatements,
};
pub use error::SettingsError;
pub use format::{CustomFormatter, LogFormat};
pub use level::{LogLevel, ParseLogLevelError};
pub use matcher::StatementMatcher;
pub use state::{FilterSettings, FilterSnapshot};
