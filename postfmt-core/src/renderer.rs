// postfmt-core/src/renderer.rs
//! The content renderer: markup passes followed by censorship.
//!
//! A [`Renderer`] owns a shared [`CensorFilter`]. Rich fields (comments,
//! posts) go through [`Renderer::render`]; plain fields that bypass markup
//! (titles, descriptions, announcements) go through [`Renderer::render_plain`].

use log::debug;
use serde::Serialize;
use std::fmt;
use std::sync::Arc;

use crate::censor::CensorFilter;
use crate::config::RenderConfig;
use crate::markup;

/// HTML ready to be spliced into a page as-is.
///
/// Only [`Renderer::render`] produces one. Every angle bracket from the raw
/// input has been escaped; the only tags present were inserted by the markup
/// passes. Templates must not escape it again.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct RenderedHtml(String);

impl RenderedHtml {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for RenderedHtml {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for RenderedHtml {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<RenderedHtml> for String {
    fn from(html: RenderedHtml) -> Self {
        html.0
    }
}

/// Renders user content with a shared censorship filter.
#[derive(Debug, Clone)]
pub struct Renderer {
    filter: Arc<CensorFilter>,
}

impl Renderer {
    pub fn new(filter: Arc<CensorFilter>) -> Self {
        Self { filter }
    }

    /// A renderer whose word list is fixed to the config's.
    pub fn from_config(config: &RenderConfig) -> Self {
        Self::new(Arc::new(CensorFilter::from_config(config)))
    }

    /// Renders a rich field to HTML. Censorship runs last, over the whole
    /// output.
    pub fn render(&self, raw: &str) -> RenderedHtml {
        let html = markup::transform(raw);
        let censored = self.filter.censor(&html);
        debug!("Rendered {} raw bytes into {} bytes of HTML.", raw.len(), censored.len());
        RenderedHtml(censored)
    }

    /// Censors a plain-text field. The result is still plain text and must be
    /// escaped by whatever embeds it.
    pub fn render_plain(&self, text: &str) -> String {
        self.filter.censor(text)
    }

    pub fn filter(&self) -> &Arc<CensorFilter> {
        &self.filter
    }
}
