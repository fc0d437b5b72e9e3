// File: postfmt-core/src/validators.rs
//! Validation for user-chosen names and short plain-text fields.
//!
//! Group names end up in URLs and page titles, so they are restricted to a
//! small character set and must not contain censored words. Messages are
//! written to be shown to the user as-is.
//!
//! License: MIT OR APACHE 2.0

use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

use crate::censor::CensorFilter;

pub const MIN_GROUP_NAME_LEN: usize = 3;
pub const MAX_GROUP_NAME_LEN: usize = 40;

/// Maximum length of a group description or announcement.
pub const MAX_SHORT_TEXT_LEN: usize = 160;

static NAME_CHARS: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[A-Za-z0-9_-]+$").unwrap());

/// A user-facing validation failure.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ValidationError {
    #[error("Name cannot be blank.")]
    BlankName,

    #[error("Name can contain only english alphabets, numbers, hyphens, and underscore.")]
    InvalidNameCharacters,

    #[error("Group name should have 3-40 characters.")]
    GroupNameLength,

    /// Carries the name with the offending words masked.
    #[error("Fix group name: {0}")]
    CensoredName(String),

    #[error("{field} should have less than {max} characters.")]
    TooLong { field: String, max: usize },
}

/// Checks that `name` is non-empty and uses only ASCII letters, digits,
/// hyphens and underscores.
pub fn validate_name(name: &str) -> Result<(), ValidationError> {
    if name.is_empty() {
        return Err(ValidationError::BlankName);
    }
    if !NAME_CHARS.is_match(name) {
        return Err(ValidationError::InvalidNameCharacters);
    }
    Ok(())
}

/// Validates a group name: length first, then censorship, then characters.
pub fn validate_group_name(name: &str, filter: &CensorFilter) -> Result<(), ValidationError> {
    let len = name.chars().count();
    if !(MIN_GROUP_NAME_LEN..=MAX_GROUP_NAME_LEN).contains(&len) {
        return Err(ValidationError::GroupNameLength);
    }
    let censored = filter.censor(name);
    if censored != name {
        return Err(ValidationError::CensoredName(censored));
    }
    validate_name(name)
}

/// Checks a short plain-text field such as a group description.
pub fn validate_short_text(field: &str, text: &str) -> Result<(), ValidationError> {
    if text.chars().count() > MAX_SHORT_TEXT_LEN {
        return Err(ValidationError::TooLong {
            field: field.to_string(),
            max: MAX_SHORT_TEXT_LEN,
        });
    }
    Ok(())
}
