mod config;
pub mod pipeline;
pub mod tracing;

pub use config::{fixture_dir, write_config};
pub use pipeline::TestPipeline;
pub use tracing::{CapturedEvent, TestTracing};
