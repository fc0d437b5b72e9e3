// postfmt-core/src/escape.rs
//! HTML escaping for raw user content.
//!
//! This is the only defense against markup injection in the pipeline, so it
//! must run before any pass that inserts tags of its own.

/// Replaces `&`, `<`, `>`, `"` and `'` with their HTML entities.
///
/// ```
/// use postfmt_core::escape_html;
///
/// assert_eq!(escape_html("<a href='x'>"), "&lt;a href=&#39;x&#39;&gt;");
/// ```
pub fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len() + raw.len() / 8);
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escapes_all_five_characters() {
        assert_eq!(escape_html(r#"&<>"'"#), "&amp;&lt;&gt;&quot;&#39;");
    }

    #[test]
    fn script_tag_is_neutralized() {
        let out = escape_html("<script>alert(1)</script>");
        assert!(!out.contains("<script>"));
        assert_eq!(out, "&lt;script&gt;alert(1)&lt;/script&gt;");
    }

    #[test]
    fn ampersand_is_escaped_once() {
        // Existing entities are treated as text, not re-interpreted.
        assert_eq!(escape_html("&amp;"), "&amp;amp;");
    }

    #[test]
    fn plain_text_is_unchanged() {
        assert_eq!(escape_html("hello world"), "hello world");
        assert_eq!(escape_html(""), "");
    }
}
