use thiserror::Error;

#[derive(Debug, Error)]
pub enum FilterError {
    /// The configured format names no known formatter. Only the current call
    /// fails; correcting the format fixes the next one.
    #[error("unsupported log format '{format}', expected one of: text, json, hash, or a custom formatter")]
    UnsupportedFormat { format: String },

    #[error("failed to encode statement as JSON")]
    Encode(#[from] serde_json::Error),

    /// Raised by a custom formatter.
    #[error(transparent)]
    Formatter(anyhow::Error),

    /// Raised by the sink while writing.
    #[error(transparent)]
    Sink(anyhow::Error),
}
