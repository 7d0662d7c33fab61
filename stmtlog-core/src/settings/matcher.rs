use crate::settings::SettingsError;
use regex::{Regex, RegexBuilder};

/// Decides whether a statement starts with one of the target keywords.
///
/// Compiles the keywords into a single case-insensitive alternation anchored
/// at the very start of the text (`\A(?-u:\s)*(kw|kw|...)`). Leading ASCII
/// whitespace, newlines included, is skipped; other Unicode spaces are not.
/// Later lines are never inspected.
#[derive(Debug, Clone)]
pub struct StatementMatcher {
    pattern: Option<Regex>,
}

impl StatementMatcher {
    pub fn compile<S: AsRef<str>>(keywords: &[S]) -> Result<Self, SettingsError> {
        if keywords.is_empty() {
            return Ok(Self { pattern: None });
        }

        let mut alternatives = Vec::with_capacity(keywords.len());
        for (index, keyword) in keywords.iter().enumerate() {
            let keyword = keyword.as_ref();
            if keyword.trim().is_empty() {
                return Err(SettingsError::BlankTargetStatement { index });
            }
            alternatives.push(regex::escape(keyword));
        }

        let pattern = RegexBuilder::new(&format!(r"\A(?-u:\s)*(?:{})", alternatives.join("|")))
            .case_insensitive(true)
            .build()?;

        Ok(Self {
            pattern: Some(pattern),
        })
    }

    pub fn is_match(&self, statement: &str) -> bool {
        match &self.pattern {
            Some(pattern) => pattern.is_match(statement),
            None => false,
        }
    }
}
