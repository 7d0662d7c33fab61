use crate::conf::ConfigError;
use crate::conf::types::ConfigFile;
use crate::settings::{FilterConfig, FilterSettings, StatementMatcher};
use std::fs;
use std::path::{Path, PathBuf};

pub const CONFIG_FILE_NAME: &str = "stmtlog.hcl";

/// Accepts either a config directory or the config file itself.
fn resolve_config_path(root: &Path) -> PathBuf {
    if root.is_dir() {
        root.join(CONFIG_FILE_NAME)
    } else {
        root.to_path_buf()
    }
}

/// Reads and parses the config file without lowering it.
pub fn load_config_file(root: &Path) -> Result<ConfigFile, ConfigError> {
    //--------------------------------------------------------------------------
    // Hard fail: IO and parsing
    //--------------------------------------------------------------------------
    let path = resolve_config_path(root);

    let s = fs::read_to_string(&path).map_err(|e| ConfigError::read_file(&path, e))?;
    let file: ConfigFile = hcl::from_str(&s).map_err(|e| ConfigError::parse(&path, e))?;

    //--------------------------------------------------------------------------
    // Keywords must compile now, not on the first reload that uses them
    //--------------------------------------------------------------------------
    StatementMatcher::compile(file.statement_log.target_statements.as_slice())
        .map_err(|e| ConfigError::settings(&path, e))?;

    Ok(file)
}

pub fn load_config(root: &Path) -> Result<FilterConfig, ConfigError> {
    Ok(load_config_file(root)?.statement_log.into())
}

/// Loads the config and swaps it into `settings` in one step.
///
/// On error the live settings are left untouched.
pub fn reload_filter_settings(root: &Path, settings: &FilterSettings) -> Result<(), ConfigError> {
    // Parse and validate config.
    let cfg = load_config(root)?;

    // Log comparison against current settings.
    let current = settings.snapshot();
    let old = current.config();
    tracing::info!(
        old_disabled = old.disabled,
        old_level = %old.log_level,
        old_format = %old.log_format,
        old_targets = old.target_statements.len(),
        new_disabled = cfg.disabled,
        new_level = %cfg.log_level,
        new_format = %cfg.log_format,
        new_targets = cfg.target_statements.len(),
        "statement log settings reloaded"
    );

    // Atomic swap (point of no return).
    settings
        .replace(cfg)
        .map_err(|e| ConfigError::settings(resolve_config_path(root), e))
}
