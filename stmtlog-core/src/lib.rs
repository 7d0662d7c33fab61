pub mod cli;
pub mod conf;
pub mod event;
pub mod filter;
pub mod logging;
pub mod replay;
pub mod settings;
pub mod sink;

pub use event::{BindParam, BindValue, Binds, StatementEvent, StatementRecord};
pub use filter::{FilterError, FilterOutcome, SkipReason, StatementLogFilter};
pub use settings::{FilterConfig, FilterSettings, LogFormat, LogLevel};
pub use sink::{LogPayload, LogSink, RecordingSink, TracingSink};
