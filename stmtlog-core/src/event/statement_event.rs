use crate::event::{BindParam, BindValue, Binds};

/// A single statement-execution notification.
///
/// Built by the notification source for every executed statement and handed
/// to the filter once. The filter never mutates it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StatementEvent {
    /// Raw statement text. Absent or empty text is never logged.
    pub statement_text: Option<String>,

    /// Bound parameters in the order the statement declares them.
    pub parameters: Vec<BindParam>,

    /// The result was served from a cache and nothing was executed.
    pub is_cached: bool,

    /// Internal tag for the kind of operation, e.g. `SQL`, `EXPLAIN`, `SCHEMA`.
    pub operation_name: String,
}

impl StatementEvent {
    pub const DEFAULT_OPERATION_NAME: &'static str = "SQL";

    pub fn new(statement_text: impl Into<String>) -> Self {
        Self {
            statement_text: Some(statement_text.into()),
            parameters: Vec::new(),
            is_cached: false,
            operation_name: Self::DEFAULT_OPERATION_NAME.to_string(),
        }
    }

    /// An event that carries no statement text at all.
    pub fn without_statement() -> Self {
        Self {
            statement_text: None,
            operation_name: Self::DEFAULT_OPERATION_NAME.to_string(),
            ..Self::default()
        }
    }

    pub fn with_bind(mut self, name: impl Into<String>, value: impl Into<BindValue>) -> Self {
        self.parameters.push(BindParam::new(name, value));
        self
    }

    pub fn cached(mut self, is_cached: bool) -> Self {
        self.is_cached = is_cached;
        self
    }

    pub fn with_operation_name(mut self, name: impl Into<String>) -> Self {
        self.operation_name = name.into();
        self
    }

    /// Statement text, or `None` when it is absent or empty.
    pub fn statement(&self) -> Option<&str> {
        self.statement_text.as_deref().filter(|s| !s.is_empty())
    }

    pub fn binds(&self) -> Binds {
        Binds::from(self.parameters.as_slice())
    }
}
