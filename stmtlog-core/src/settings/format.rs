use crate::event::Binds;
use crate::sink::LogPayload;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::sync::Arc;

/// Caller-supplied formatter: `(statement_text, binds) -> payload`.
pub type CustomFormatter =
    Arc<dyn Fn(&str, &Binds) -> anyhow::Result<LogPayload> + Send + Sync + 'static>;

/// How an accepted statement is rendered before it reaches the sink.
///
/// `Unsupported` keeps a token that named no known format. It is accepted
/// when configured and rejected when the first qualifying event is formatted.
#[derive(Clone, Default)]
pub enum LogFormat {
    /// Statement text, followed by two spaces and the binds when there are any.
    #[default]
    Text,
    /// `{"sql": ..., "binds": {...}}` serialized to a string.
    Json,
    /// Structured `StatementRecord` payload.
    Hash,
    Custom(CustomFormatter),
    Unsupported(String),
}

impl LogFormat {
    pub fn custom<F>(formatter: F) -> Self
    where
        F: Fn(&str, &Binds) -> anyhow::Result<LogPayload> + Send + Sync + 'static,
    {
        LogFormat::Custom(Arc::new(formatter))
    }

    pub fn from_token(token: &str) -> Self {
        match token {
            "text" => LogFormat::Text,
            "json" => LogFormat::Json,
            "hash" => LogFormat::Hash,
            other => LogFormat::Unsupported(other.to_string()),
        }
    }

    pub fn token(&self) -> &str {
        match self {
            LogFormat::Text => "text",
            LogFormat::Json => "json",
            LogFormat::Hash => "hash",
            LogFormat::Custom(_) => "custom",
            LogFormat::Unsupported(token) => token,
        }
    }
}

impl fmt::Debug for LogFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogFormat::Text => f.write_str("Text"),
            LogFormat::Json => f.write_str("Json"),
            LogFormat::Hash => f.write_str("Hash"),
            LogFormat::Custom(_) => f.write_str("Custom(<fn>)"),
            LogFormat::Unsupported(token) => f.debug_tuple("Unsupported").field(token).finish(),
        }
    }
}

impl fmt::Display for LogFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

impl Serialize for LogFormat {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.token())
    }
}

impl<'de> Deserialize<'de> for LogFormat {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let token = String::deserialize(deserializer)?;
        Ok(LogFormat::from_token(&token))
    }
}
