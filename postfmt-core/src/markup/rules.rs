//! Patterns used by the markup passes and the reply quoter.
//!
//! All patterns run over text that has already been HTML-escaped (except in
//! the reply quoter), so they never see a raw `<`, `>`, `"` or `'` from the
//! user.

use lazy_static::lazy_static;
use regex::Regex;

/// Marker whose presence anywhere switches a document to fenced code blocks.
pub const FENCE: &str = "```";

lazy_static! {
    /// An opening fence line (optional language tag) through the next closing
    /// fence line. Consumes the newline before the opening fence and the one
    /// after the closing fence. Fences are anchored on line starts rather than
    /// on a preceding newline, so a block directly after another still matches.
    pub static ref FENCED_CODE: Regex =
        Regex::new(r"(?m)\n?^```.*\n(?s:(.+?))\n```$\n?").unwrap();

    /// A line indented by four spaces, together with the newline before it.
    pub static ref INDENTED_CODE: Regex = Regex::new(r"(?:^|\n)    ([^\n]+)").unwrap();

    /// A `<pre>` region inserted by the code block pass.
    pub static ref PRE_BLOCK: Regex = Regex::new(r"(?s)<pre>.*?</pre>").unwrap();

    pub static ref BOLD: Regex = Regex::new(r"\*\*([^*\n]+)\*\*").unwrap();

    pub static ref ITALIC: Regex = Regex::new(r"\*([^*\n]+)\*").unwrap();

    /// An http(s) URL on a dotted host or `localhost`, with an optional port
    /// and a path/query/fragment drawn from a restricted character set. The
    /// last character may not be a `.` so trailing full stops stay outside.
    pub static ref LINK: Regex = Regex::new(
        r"https?://([A-Za-z0-9\-]+\.[A-Za-z0-9\-.]+|localhost)(:[0-9]+)?[a-zA-Z0-9@:%_+.~#?&/=;\-]*[a-zA-Z0-9@:%_+~#?&/=;\-]"
    )
    .unwrap();

    /// One logical line of a reply: its existing run of `>` markers, then its
    /// first non-blank content through the end of the line.
    pub static ref QUOTE_LINE: Regex = Regex::new(r"((?:^|\n)>*)[ \t]*(\S[^\n]*)").unwrap();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn link_excludes_trailing_dot() {
        let m = LINK.find("go to https://example.com.").unwrap();
        assert_eq!(m.as_str(), "https://example.com");
    }

    #[test]
    fn link_accepts_localhost_with_port() {
        let m = LINK.find("http://localhost:8080/a?b=c#d").unwrap();
        assert_eq!(m.as_str(), "http://localhost:8080/a?b=c#d");
    }

    #[test]
    fn link_requires_scheme() {
        assert!(LINK.find("ftp://example.com/x").is_none());
        assert!(LINK.find("example.com/x").is_none());
    }

    #[test]
    fn fenced_code_stops_at_next_fence() {
        let text = "```\na\n```\nmid\n```\nb\n```";
        let bodies: Vec<_> = FENCED_CODE
            .captures_iter(text)
            .map(|c| c[1].to_string())
            .collect();
        assert_eq!(bodies, vec!["a", "b"]);
    }

    #[test]
    fn fenced_code_matches_adjacent_blocks() {
        let text = "```\na\n```\n```\nb\n```";
        let bodies: Vec<_> = FENCED_CODE
            .captures_iter(text)
            .map(|c| c[1].to_string())
            .collect();
        assert_eq!(bodies, vec!["a", "b"]);
    }

    #[test]
    fn fence_must_start_a_line() {
        assert!(FENCED_CODE.find("text ```\na\n```").is_none());
    }
}
