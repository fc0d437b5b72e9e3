// File: postfmt-core/src/headless.rs

//! `headless.rs`
//! One-shot helpers for callers that render a single piece of content and do
//! not keep a [`Renderer`] around (scripts, the CLI, tests).
//!
//! Each call validates the config and compiles its word list from scratch, so
//! long-running services should hold a [`Renderer`] instead.

use anyhow::Result;

use crate::config::RenderConfig;
use crate::renderer::{RenderedHtml, Renderer};

/// Renders `raw` to censored HTML using the word list in `config`.
pub fn headless_render_string(config: &RenderConfig, raw: &str) -> Result<RenderedHtml> {
    config.validate()?;
    Ok(Renderer::from_config(config).render(raw))
}

/// Censors a plain-text field using the word list in `config`.
pub fn headless_censor_string(config: &RenderConfig, text: &str) -> Result<String> {
    config.validate()?;
    Ok(Renderer::from_config(config).render_plain(text))
}
