use crate::settings::LogLevel;
use std::fmt;

/// Why an event produced no log line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SkipReason {
    Disabled,
    EmptyStatement,
    Cached,
    IgnoredOperation,
    NotTargeted,
}

impl SkipReason {
    pub fn as_str(self) -> &'static str {
        match self {
            SkipReason::Disabled => "disabled",
            SkipReason::EmptyStatement => "empty_statement",
            SkipReason::Cached => "cached",
            SkipReason::IgnoredOperation => "ignored_operation",
            SkipReason::NotTargeted => "not_targeted",
        }
    }
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterOutcome {
    /// Exactly one line was written at this level.
    Emitted(LogLevel),

    /// Nothing was written.
    Skipped(SkipReason),
}

impl FilterOutcome {
    pub fn is_emitted(&self) -> bool {
        matches!(self, FilterOutcome::Emitted(_))
    }
}
