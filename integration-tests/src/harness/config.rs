use std::fs;
use std::path::{Path, PathBuf};
use stmtlog_core::conf::CONFIG_FILE_NAME;

/// Directory of a checked-in fixture under `integration-tests/fixtures`.
pub fn fixture_dir(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("fixtures")
        .join(name)
}

/// Writes `body` as the config file of `dir`.
pub fn write_config(dir: &Path, body: &str) {
    fs::write(dir.join(CONFIG_FILE_NAME), body).expect("failed to write test config");
}
