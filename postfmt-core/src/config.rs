//! Configuration management for `postfmt-core`.
//!
//! Holds the censorship settings the renderer consults. Settings are read
//! from YAML, merged over embedded defaults, and validated by compiling the
//! word list once up front so a bad list is reported at load time rather than
//! on the first render.
//!
//! License: MIT OR Apache-2.0

use anyhow::{Context, Result};
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::censor::compiler::compile_word_list;
use crate::censor::source::WordListSource;

/// Name of the configuration file looked up by [`RenderConfig::candidate_paths`].
pub const CONFIG_FILE_NAME: &str = "postfmt.yaml";

/// Rendering configuration.
///
/// Both fields are optional so that a user file can override only what it
/// names when merged over the defaults.
#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Comma-separated literal terms to censor. `Some("")` disables censorship.
    pub censored_words: Option<String>,
    /// Anchor every term on word boundaries instead of matching substrings.
    pub match_whole_words: Option<bool>,
}

impl RenderConfig {
    /// Builds a config from a word list, as an admin form would submit it.
    pub fn with_words(words: impl Into<String>) -> Self {
        Self {
            censored_words: Some(words.into()),
            match_whole_words: None,
        }
    }

    /// The effective comma-separated word list.
    pub fn censored_words(&self) -> &str {
        self.censored_words.as_deref().unwrap_or("")
    }

    /// Whether terms are anchored on word boundaries.
    pub fn match_whole_words(&self) -> bool {
        self.match_whole_words.unwrap_or(false)
    }

    /// Loads a configuration from a YAML file and validates it.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        info!("Loading render config from: {}", path.display());
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config = Self::from_yaml(&text)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;
        config.validate()?;
        Ok(config)
    }

    /// Parses a configuration from YAML text without validating it.
    pub fn from_yaml(text: &str) -> Result<Self> {
        // An empty document is a valid "nothing overridden" config.
        if text.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yml::from_str(text)?)
    }

    /// Loads the defaults embedded in the binary.
    pub fn load_default() -> Result<Self> {
        debug!("Loading default render config from embedded string...");
        let default_yaml = include_str!("../config/default.yaml");
        Self::from_yaml(default_yaml).context("Failed to parse default render config")
    }

    /// Compiles the word list once to surface errors before first use.
    pub fn validate(&self) -> Result<()> {
        compile_word_list(self.censored_words(), self.match_whole_words())
            .context("Censored word list is invalid")?;
        Ok(())
    }

    /// Locations searched for a user config, in priority order.
    pub fn candidate_paths() -> Vec<PathBuf> {
        let base_dirs = vec![
            Some(PathBuf::from(".")),
            dirs::config_dir().map(|p| p.join("postfmt")),
            dirs::home_dir().map(|p| p.join(".postfmt")),
            Some(PathBuf::from("/etc/postfmt")),
        ];

        base_dirs
            .into_iter()
            .flatten()
            .map(|dir| dir.join(CONFIG_FILE_NAME))
            .collect()
    }

    /// Loads the defaults, merged with the first user config found in
    /// [`candidate_paths`](Self::candidate_paths), if any.
    pub fn discover() -> Result<Self> {
        let defaults = Self::load_default()?;
        let user = match Self::candidate_paths().into_iter().find(|p| p.is_file()) {
            Some(path) => Some(Self::load_from_file(&path)?),
            None => {
                debug!("No user render config found; using defaults.");
                None
            }
        };
        Ok(merge_config(defaults, user))
    }
}

impl WordListSource for RenderConfig {
    fn word_list(&self) -> String {
        self.censored_words().to_string()
    }
}

/// Merges a user config over the defaults. Fields the user set win, including
/// an explicitly empty word list.
pub fn merge_config(default_config: RenderConfig, user_config: Option<RenderConfig>) -> RenderConfig {
    let Some(user) = user_config else {
        return default_config;
    };

    let merged = RenderConfig {
        censored_words: user.censored_words.or(default_config.censored_words),
        match_whole_words: user.match_whole_words.or(default_config.match_whole_words),
    };
    debug!(
        "Merged render config: {} censored entries, whole words: {}",
        merged.censored_words().split(',').filter(|w| !w.trim().is_empty()).count(),
        merged.match_whole_words()
    );
    merged
}
