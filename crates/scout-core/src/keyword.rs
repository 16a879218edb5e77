use std::sync::LazyLock;

use regex::Regex;

use crate::error::AppError;

/// Default maximum keyword length after trimming.
pub const KEYWORD_MAX_LEN: usize = 50;

/// Word characters, whitespace, and hyphens only.
static ALLOWED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[\w\s-]+$").expect("static pattern"));

/// A search term that has passed validation.
///
/// Only `Keyword`s reach the network and cache layers; the raw query
/// string never does.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Keyword(String);

impl Keyword {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Keyword {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Validate a raw search term with the default length limit.
///
/// Pure function: trims leading/trailing whitespace, then rejects empty
/// input, over-length input, and any character outside word characters,
/// whitespace, and hyphen.
pub fn validate(raw: &str) -> Result<Keyword, AppError> {
    validate_with_limit(raw, KEYWORD_MAX_LEN)
}

/// Validate with an explicit length limit (see [`crate::ScrapeConfig`]).
pub fn validate_with_limit(raw: &str, max_len: usize) -> Result<Keyword, AppError> {
    let trimmed = raw.trim();

    if trimmed.is_empty() {
        return Err(AppError::InvalidInput("Keyword is required".into()));
    }
    if trimmed.chars().count() > max_len {
        return Err(AppError::InvalidInput(format!(
            "Keyword must be at most {max_len} characters"
        )));
    }
    if !ALLOWED.is_match(trimmed) {
        return Err(AppError::InvalidInput(
            "Keyword may only contain letters, digits, spaces, and hyphens".into(),
        ));
    }

    Ok(Keyword(trimmed.to_string()))
}
