// postfmt-core/src/markup/mod.rs
//! Lightweight forum markup.
//!
//! Raw content goes through a fixed sequence of passes. The order matters:
//! escaping has to happen before any tag is inserted, double newlines have to
//! become paragraph breaks before single ones become `<br>`, and bold has to
//! run before italic so `**x**` is not eaten by the single-asterisk rule.
//!
//! Censorship is not a pass here; [`Renderer`](crate::Renderer) applies it to
//! the output of [`transform`].

pub mod code;
pub mod rules;

use log::trace;

use crate::escape::escape_html;
pub use code::CodeDialect;
use rules::{BOLD, ITALIC, LINK, PRE_BLOCK};

/// One step of the markup pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pass {
    /// Removes every carriage return.
    NormalizeLineEndings,
    /// HTML-escapes the text.
    Escape,
    /// Converts code blocks of the document's dialect to `<pre>`.
    CodeBlocks,
    /// `\n\n` becomes a paragraph break, then `\n` becomes `<br>`.
    Paragraphs,
    /// `**text**` becomes `<b>text</b>`.
    Bold,
    /// `*text*` becomes `<em>text</em>`.
    Italic,
    /// Bare http(s) URLs become links.
    AutoLink,
    /// Wraps everything in one outer paragraph.
    WrapParagraph,
}

/// The passes in the order [`transform`] runs them.
pub const PIPELINE: [Pass; 8] = [
    Pass::NormalizeLineEndings,
    Pass::Escape,
    Pass::CodeBlocks,
    Pass::Paragraphs,
    Pass::Bold,
    Pass::Italic,
    Pass::AutoLink,
    Pass::WrapParagraph,
];

impl Pass {
    pub fn name(self) -> &'static str {
        match self {
            Pass::NormalizeLineEndings => "normalize-line-endings",
            Pass::Escape => "escape",
            Pass::CodeBlocks => "code-blocks",
            Pass::Paragraphs => "paragraphs",
            Pass::Bold => "bold",
            Pass::Italic => "italic",
            Pass::AutoLink => "auto-link",
            Pass::WrapParagraph => "wrap-paragraph",
        }
    }

    /// Runs this pass alone. `dialect` is only consulted by
    /// [`Pass::CodeBlocks`].
    pub fn apply(self, text: &str, dialect: CodeDialect) -> String {
        match self {
            Pass::NormalizeLineEndings => text.replace('\r', ""),
            Pass::Escape => escape_html(text),
            Pass::CodeBlocks => dialect.apply(text),
            Pass::Paragraphs => break_paragraphs(text),
            Pass::Bold => BOLD.replace_all(text, "<b>${1}</b>").into_owned(),
            Pass::Italic => ITALIC.replace_all(text, "<em>${1}</em>").into_owned(),
            Pass::AutoLink => LINK.replace_all(text, r#"<a href="${0}">${0}</a>"#).into_owned(),
            Pass::WrapParagraph => format!("<p>{text}</p>"),
        }
    }
}

/// Runs every markup pass over `raw`, in [`PIPELINE`] order.
///
/// The result is HTML but not yet censored. Call this exactly once per raw
/// input; feeding rendered output back in escapes it a second time.
pub fn transform(raw: &str) -> String {
    // Escaping and line-ending removal never add or remove backticks, so the
    // raw text is as good as any intermediate for choosing the dialect.
    let dialect = CodeDialect::sniff(raw);
    trace!("Transforming {} bytes as {:?} dialect.", raw.len(), dialect);

    PIPELINE
        .iter()
        .fold(raw.to_string(), |text, pass| pass.apply(&text, dialect))
}

/// Converts newlines outside `<pre>` regions to paragraph and line breaks.
/// Newlines inside code blocks are kept as they are.
fn break_paragraphs(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + text.len() / 4);
    let mut last_end = 0;
    for block in PRE_BLOCK.find_iter(text) {
        out.push_str(&break_lines(&text[last_end..block.start()]));
        out.push_str(block.as_str());
        last_end = block.end();
    }
    out.push_str(&break_lines(&text[last_end..]));
    out
}

fn break_lines(text: &str) -> String {
    text.replace("\n\n", "</p><p>").replace('\n', "<br>")
}
