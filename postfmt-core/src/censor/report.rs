//! Records describing censored words found in a piece of text.
//!
//! Used to show moderators what a word list would mask before it is saved, and
//! by the `scan` command.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One occurrence of a censored word.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CensorMatch {
    /// The matched text exactly as it appears in the input.
    pub term: String,
    /// Byte offset of the first matched byte.
    pub start: usize,
    /// Byte offset one past the last matched byte.
    pub end: usize,
}

/// Occurrence count for one censored word, case-folded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CensorSummaryItem {
    pub term: String,
    pub occurrences: usize,
}

/// Groups matches by lower-cased term, sorted by term.
pub fn summarize(matches: &[CensorMatch]) -> Vec<CensorSummaryItem> {
    let mut counts: BTreeMap<String, usize> = BTreeMap::new();
    for m in matches {
        *counts.entry(m.term.to_lowercase()).or_default() += 1;
    }
    counts
        .into_iter()
        .map(|(term, occurrences)| CensorSummaryItem { term, occurrences })
        .collect()
}
