//! Code block dialects.
//!
//! A document uses exactly one of two code block syntaxes. Fenced blocks win
//! as soon as a fence marker appears anywhere; otherwise four-space indented
//! lines are treated as code. The choice is made once per document.

use super::rules::{FENCE, FENCED_CODE, INDENTED_CODE};

/// The code block syntax a document is written in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CodeDialect {
    /// Triple-backtick fences, optionally with a language tag.
    Fenced,
    /// Lines indented by four spaces.
    Indented,
}

impl CodeDialect {
    /// Picks the dialect for a whole document.
    pub fn sniff(text: &str) -> Self {
        if text.contains(FENCE) {
            CodeDialect::Fenced
        } else {
            CodeDialect::Indented
        }
    }

    /// Replaces this dialect's code blocks with `<pre>` elements.
    pub fn apply(self, text: &str) -> String {
        match self {
            CodeDialect::Fenced => FENCED_CODE.replace_all(text, "<pre>${1}</pre>").into_owned(),
            CodeDialect::Indented => INDENTED_CODE
                .replace_all(text, "<pre>${1}</pre>")
                // Consecutive indented lines form one block.
                .replace("</pre><pre>", "\n"),
        }
    }
}
