use thiserror::Error;

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("target statement #{index} is blank")]
    BlankTargetStatement { index: usize },

    #[error("failed to compile statement matcher")]
    Matcher(#[from] regex::Error),
}
