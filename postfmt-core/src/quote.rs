//! Reply quoting.
//!
//! Produces the plaintext that seeds a reply composer: the original post with
//! its code fences removed and every line pushed one quote level deeper,
//! wrapped in a fenced block headed by "<author> wrote:". The result is raw
//! content, so it goes through the normal renderer once the reply is posted.

use crate::markup::rules::{FENCED_CODE, QUOTE_LINE};

/// Builds the quoted text for replying to `original`, written by `author`.
///
/// ```
/// use postfmt_core::quote_for_reply;
///
/// assert_eq!(quote_for_reply("alice", "hello"), "```\nalice wrote:\n> hello\n```\n");
/// ```
pub fn quote_for_reply(author: &str, original: &str) -> String {
    let normalized = original.replace('\r', "");
    let unfenced = FENCED_CODE.replace_all(&normalized, "\n${1}\n");
    let body = unfenced.strip_prefix('\n').unwrap_or(&unfenced);
    let quoted = QUOTE_LINE.replace_all(body, "${1}> ${2}");
    format!("```\n{author} wrote:\n{quoted}\n```\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_does_not_panic() {
        assert_eq!(quote_for_reply("bob", ""), "```\nbob wrote:\n\n```\n");
    }

    #[test]
    fn every_line_is_quoted() {
        assert_eq!(
            quote_for_reply("bob", "one\ntwo"),
            "```\nbob wrote:\n> one\n> two\n```\n"
        );
    }

    #[test]
    fn blank_lines_stay_blank() {
        assert_eq!(
            quote_for_reply("bob", "one\n\ntwo"),
            "```\nbob wrote:\n> one\n\n> two\n```\n"
        );
    }

    #[test]
    fn nested_quotes_gain_a_level() {
        assert_eq!(
            quote_for_reply("carol", "> bob said\n>> alice said\nreply"),
            "```\ncarol wrote:\n>> bob said\n>>> alice said\n> reply\n```\n"
        );
    }

    #[test]
    fn leading_whitespace_is_dropped() {
        assert_eq!(quote_for_reply("bob", "   indented"), "```\nbob wrote:\n> indented\n```\n");
    }

    #[test]
    fn fences_are_collapsed_to_body() {
        assert_eq!(
            quote_for_reply("bob", "```rust\nlet x = 1;\n```"),
            "```\nbob wrote:\n> let x = 1;\n\n```\n"
        );
    }

    #[test]
    fn adjacent_fenced_blocks_are_both_unwrapped() {
        assert_eq!(
            quote_for_reply("bob", "```\none\n```\n```\ntwo\n```"),
            "```\nbob wrote:\n> one\n\n> two\n\n```\n"
        );
    }

    #[test]
    fn carriage_returns_are_stripped() {
        assert_eq!(quote_for_reply("bob", "a\r\nb"), "```\nbob wrote:\n> a\n> b\n```\n");
    }

    #[test]
    fn single_leading_newline_is_dropped() {
        assert_eq!(quote_for_reply("bob", "\nhi"), "```\nbob wrote:\n> hi\n```\n");
    }
}
