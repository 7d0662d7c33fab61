mod error;
mod loader;
pub mod types;


pub use error::ConfigError;
pub use loader::{CONFIG_FILE_NAME, load_config, load_config_file, reload_filter_settings};
pub use types::{ConfigFile, StatementLogSpec};
