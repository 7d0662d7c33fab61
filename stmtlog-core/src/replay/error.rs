use crate::filter::FilterError;
use crate::replay::BindType;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ReplayError {
    #[error("failed to read replay input")]
    Io(#[from] std::io::Error),

    #[error("line {line}: malformed statement event")]
    Malformed {
        line: usize,
        #[source]
        source: serde_json::Error,
    },

    #[error("line {line}: bind '{name}' cannot be cast to {ty}: {reason}")]
    Cast {
        line: usize,
        name: String,
        ty: BindType,
        reason: String,
    },

    #[error("line {line}")]
    Filter {
        line: usize,
        #[source]
        source: FilterError,
    },
}
