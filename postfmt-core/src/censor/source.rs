// postfmt-core/src/censor/source.rs
//! Providers of the live censor word list.
//!
//! The filter never caches the list itself, only what it compiled from it, so
//! a source must return the value currently in effect on every call.

use log::{debug, warn};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{PoisonError, RwLock};
use std::time::SystemTime;

use crate::config::RenderConfig;

/// Read accessor for the current comma-separated censor word list.
pub trait WordListSource: Send + Sync {
    fn word_list(&self) -> String;
}

impl<F> WordListSource for F
where
    F: Fn() -> String + Send + Sync,
{
    fn word_list(&self) -> String {
        self()
    }
}

/// An in-memory word list that can be replaced at any time, e.g. when an
/// admin saves new settings.
#[derive(Debug, Default)]
pub struct LiveWordList {
    words: RwLock<String>,
}

impl LiveWordList {
    pub fn new(words: impl Into<String>) -> Self {
        Self {
            words: RwLock::new(words.into()),
        }
    }

    /// Replaces the word list. The next censor call picks it up.
    pub fn set(&self, words: impl Into<String>) {
        let mut guard = self.words.write().unwrap_or_else(PoisonError::into_inner);
        *guard = words.into();
    }

    pub fn get(&self) -> String {
        self.words.read().unwrap_or_else(PoisonError::into_inner).clone()
    }
}

impl WordListSource for LiveWordList {
    fn word_list(&self) -> String {
        self.get()
    }
}

/// Identifies one version of a config file on disk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct FileStamp {
    modified: Option<SystemTime>,
    len: u64,
}

#[derive(Debug)]
struct FileSnapshot {
    stamp: FileStamp,
    words: String,
}

/// Reads the word list from a YAML config file, re-reading it only when the
/// file's modification time or size changes.
///
/// If the file becomes unreadable or unparsable the last good list stays in
/// effect.
#[derive(Debug)]
pub struct FileWordList {
    path: PathBuf,
    snapshot: RwLock<Option<FileSnapshot>>,
}

impl FileWordList {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            snapshot: RwLock::new(None),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn stamp(&self) -> Option<FileStamp> {
        let meta = fs::metadata(&self.path).ok()?;
        Some(FileStamp {
            modified: meta.modified().ok(),
            len: meta.len(),
        })
    }

    fn read_words(&self) -> anyhow::Result<String> {
        let text = fs::read_to_string(&self.path)?;
        let config = RenderConfig::from_yaml(&text)?;
        Ok(config.censored_words().to_string())
    }
}

impl WordListSource for FileWordList {
    fn word_list(&self) -> String {
        let stamp = self.stamp();
        {
            let snapshot = self.snapshot.read().unwrap_or_else(PoisonError::into_inner);
            if let Some(snap) = snapshot.as_ref() {
                if Some(snap.stamp) == stamp {
                    return snap.words.clone();
                }
            }
        }

        let Some(stamp) = stamp else {
            warn!("Word list file {} is not readable; keeping last list.", self.path.display());
            return self.last_words();
        };

        match self.read_words() {
            Ok(words) => {
                debug!("Reloaded word list from {}.", self.path.display());
                let mut snapshot = self.snapshot.write().unwrap_or_else(PoisonError::into_inner);
                *snapshot = Some(FileSnapshot {
                    stamp,
                    words: words.clone(),
                });
                words
            }
            Err(e) => {
                warn!("Failed to reload word list from {}: {}", self.path.display(), e);
                self.last_words()
            }
        }
    }
}

impl FileWordList {
    fn last_words(&self) -> String {
        self.snapshot
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .as_ref()
            .map(|s| s.words.clone())
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn live_list_reflects_updates() {
        let live = LiveWordList::new("foo");
        assert_eq!(live.word_list(), "foo");
        live.set("bar,baz");
        assert_eq!(live.word_list(), "bar,baz");
    }

    #[test]
    fn closures_are_sources() {
        let source = || "spam".to_string();
        assert_eq!(source.word_list(), "spam");
    }

    #[test]
    fn file_list_reloads_on_change() -> anyhow::Result<()> {
        let mut file = NamedTempFile::new()?;
        writeln!(file, "censored_words: \"foo\"")?;
        file.flush()?;
        let source = FileWordList::new(file.path());
        assert_eq!(source.word_list(), "foo");

        fs::write(file.path(), "censored_words: \"foobar, baz\"\n")?;
        assert_eq!(source.word_list(), "foobar, baz");
        Ok(())
    }

    #[test]
    fn file_list_keeps_last_good_value() -> anyhow::Result<()> {
        let file = NamedTempFile::new()?;
        fs::write(file.path(), "censored_words: \"foo\"\n")?;
        let source = FileWordList::new(file.path());
        assert_eq!(source.word_list(), "foo");

        fs::write(file.path(), "censored_words: [unterminated\n")?;
        assert_eq!(source.word_list(), "foo");
        Ok(())
    }

    #[test]
    fn missing_file_yields_empty_list() {
        let source = FileWordList::new("/nonexistent/postfmt.yaml");
        assert_eq!(source.word_list(), "");
    }
}
