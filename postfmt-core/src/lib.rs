// postfmt-core/src/lib.rs
//! # postfmt Core Library
//!
//! `postfmt-core` turns raw text submitted by forum users into HTML that can
//! be embedded in a page without further escaping. It applies a small,
//! forum-flavoured markup (code blocks, paragraphs, bold, italic, bare links),
//! builds quoted text for replies, and masks words from a censor list that an
//! administrator can change at any time.
//!
//! The library does no I/O of its own beyond loading configuration. Callers
//! hand it strings and a [`WordListSource`] and get strings back.
//!
//! ## Modules
//!
//! * `escape`: HTML escaping of raw content.
//! * `markup`: the ordered markup passes and code block dialects.
//! * `quote`: reply quoting.
//! * `censor`: word list compilation, the cached [`CensorFilter`], word list
//!   sources and match reports.
//! * `renderer`: [`Renderer`], tying markup and censorship together.
//! * `config`: [`RenderConfig`] loading, merging and validation.
//! * `validators`: group name and short field validation.
//! * `humanize`: relative timestamps.
//! * `headless`: one-shot convenience wrappers.
//!
//! ## Usage Example
//!
//! ```rust
//! use std::sync::Arc;
//! use postfmt_core::{CensorFilter, LiveWordList, Renderer, quote_for_reply};
//!
//! // The word list is owned by configuration and may change at any time.
//! let words = Arc::new(LiveWordList::new("darn"));
//! let renderer = Renderer::new(Arc::new(CensorFilter::new(words.clone())));
//!
//! let html = renderer.render("**Darn**, see https://example.com/faq");
//! assert_eq!(
//!     html.as_str(),
//!     r#"<p><b>****</b>, see <a href="https://example.com/faq">https://example.com/faq</a></p>"#
//! );
//!
//! // An admin clears the list; the next render reflects it.
//! words.set("");
//! assert_eq!(renderer.render("darn").as_str(), "<p>darn</p>");
//!
//! assert!(quote_for_reply("alice", "hello").contains("alice wrote:\n> hello"));
//! ```
//!
//! ## Error Handling
//!
//! Rendering, quoting and censoring are total: malformed markup passes
//! through unchanged. Configuration loading returns `anyhow::Result`; the
//! library's own failures are [`PostfmtError`], and user-facing validation
//! failures are [`ValidationError`].
//!
//! ---
//! License: MIT OR Apache-2.0

pub mod censor;
pub mod config;
pub mod errors;
pub mod escape;
pub mod headless;
pub mod humanize;
pub mod markup;
pub mod quote;
pub mod renderer;
pub mod validators;

/// Configuration types and helpers.
pub use config::{merge_config, RenderConfig, CONFIG_FILE_NAME};

pub use errors::PostfmtError;

pub use escape::escape_html;

pub use markup::{transform, CodeDialect, Pass, PIPELINE};

pub use quote::quote_for_reply;

/// Censorship filter, its word list sources and reporting types.
pub use censor::{
    compile_word_list,
    summarize,
    CensorFilter,
    CensorMatch,
    CensorMatcher,
    CensorSummaryItem,
    FileWordList,
    LiveWordList,
    WordListSource,
    CENSOR_PLACEHOLDER,
    MAX_WORD_LENGTH,
};

pub use renderer::{RenderedHtml, Renderer};

pub use headless::{headless_censor_string, headless_render_string};

pub use validators::{validate_group_name, validate_name, validate_short_text, ValidationError};

pub use humanize::{time_ago, time_ago_from_now};
