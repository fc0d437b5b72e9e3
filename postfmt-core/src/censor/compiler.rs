//! compiler.rs - Compiles a censor word list into a single matcher.
//!
//! Every entry is matched as literal text: regex metacharacters in an entry
//! are escaped, so `a.b` only ever masks the three characters `a.b`. Matching
//! is case-insensitive and, unless whole-word mode is on, not anchored, so a
//! short entry also masks longer words that contain it.
//!
//! License: MIT OR APACHE 2.0

use log::{debug, warn};
use regex::{Regex, RegexBuilder};

use crate::errors::PostfmtError;

/// Fixed replacement for every censored match, whatever its length.
pub const CENSOR_PLACEHOLDER: &str = "****";

/// Maximum allowed length, in bytes, of a single censored entry.
pub const MAX_WORD_LENGTH: usize = 500;

/// A compiled alternation over all configured entries.
#[derive(Debug)]
pub struct CensorMatcher {
    regex: Regex,
    terms: Vec<String>,
}

impl CensorMatcher {
    /// The compiled expression.
    pub fn regex(&self) -> &Regex {
        &self.regex
    }

    /// The entries this matcher was built from, in configured order.
    pub fn terms(&self) -> &[String] {
        &self.terms
    }

    /// Replaces every match with [`CENSOR_PLACEHOLDER`].
    pub fn mask(&self, text: &str) -> String {
        self.regex.replace_all(text, CENSOR_PLACEHOLDER).into_owned()
    }
}

/// Splits a comma-separated word list, trimming each entry and dropping
/// blank ones.
pub fn parse_word_list(source: &str) -> Vec<&str> {
    source
        .split(',')
        .map(str::trim)
        .filter(|w| !w.is_empty())
        .collect()
}

fn term_pattern(term: &str, whole_words: bool) -> String {
    let escaped = regex::escape(term);
    if !whole_words {
        return escaped;
    }
    // `\b` only anchors next to word characters; an entry like "c++" keeps
    // its trailing edge unanchored.
    let is_word = |c: char| c.is_alphanumeric() || c == '_';
    let lead = if term.chars().next().is_some_and(is_word) { r"\b" } else { "" };
    let trail = if term.chars().last().is_some_and(is_word) { r"\b" } else { "" };
    format!("{lead}{escaped}{trail}")
}

/// Compiles a comma-separated word list.
///
/// Returns `Ok(None)` when the list has no non-blank entries, in which case
/// censoring is the identity.
pub fn compile_word_list(source: &str, whole_words: bool) -> Result<Option<CensorMatcher>, PostfmtError> {
    let terms = parse_word_list(source);
    if terms.is_empty() {
        debug!(target: "postfmt_core::censor", "Word list is empty; censorship disabled.");
        return Ok(None);
    }

    if let Some(long) = terms.iter().find(|t| t.len() > MAX_WORD_LENGTH) {
        warn!(
            target: "postfmt_core::censor",
            "Rejecting word list: an entry is {} bytes long.",
            long.len()
        );
        return Err(PostfmtError::WordLengthExceeded(
            long.to_string(),
            long.len(),
            MAX_WORD_LENGTH,
        ));
    }

    let alternation = terms
        .iter()
        .map(|t| term_pattern(t, whole_words))
        .collect::<Vec<_>>()
        .join("|");

    let regex = RegexBuilder::new(&format!("(?:{alternation})"))
        .case_insensitive(true)
        .size_limit(10 * (1 << 20)) // 10 MB limit for compiled regex
        .build()
        .map_err(|e| PostfmtError::CensorCompilationError(source.to_string(), e))?;

    debug!(
        target: "postfmt_core::censor",
        "Compiled censor matcher over {} entries (whole words: {}).",
        terms.len(),
        whole_words
    );

    Ok(Some(CensorMatcher {
        regex,
        terms: terms.into_iter().map(str::to_string).collect(),
    }))
}
