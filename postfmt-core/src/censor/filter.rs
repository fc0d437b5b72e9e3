//! filter.rs - The cached, thread-safe censorship filter.
//!
//! The filter holds a single-entry cache: the matcher compiled from the last
//! word list it saw, stored in one `Arc` together with that list. Every call
//! compares the live list against the cached one and recompiles only when they
//! differ. A new matcher is built outside the lock and published with a single
//! pointer swap, so readers always see a matcher paired with the list it was
//! built from.
//!
//! License: MIT OR APACHE 2.0

use log::{debug, error, trace};
use std::fmt;
use std::sync::{Arc, PoisonError, RwLock};

use crate::censor::compiler::{compile_word_list, CensorMatcher};
use crate::censor::report::CensorMatch;
use crate::censor::source::{LiveWordList, WordListSource};
use crate::config::RenderConfig;

#[derive(Debug)]
struct CachedMatcher {
    source: String,
    matcher: Option<CensorMatcher>,
}

/// Masks configured words with [`CENSOR_PLACEHOLDER`](crate::censor::CENSOR_PLACEHOLDER).
///
/// Share one filter (behind an `Arc`) between all requests so the compiled
/// matcher is reused.
pub struct CensorFilter {
    source: Arc<dyn WordListSource>,
    match_whole_words: bool,
    cache: RwLock<Option<Arc<CachedMatcher>>>,
}

impl fmt::Debug for CensorFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CensorFilter")
            .field("match_whole_words", &self.match_whole_words)
            .field("cache", &self.cache)
            .finish_non_exhaustive()
    }
}

impl CensorFilter {
    pub fn new(source: Arc<dyn WordListSource>) -> Self {
        Self {
            source,
            match_whole_words: false,
            cache: RwLock::new(None),
        }
    }

    /// A filter whose list is fixed to the config's current value.
    pub fn from_config(config: &RenderConfig) -> Self {
        Self::new(Arc::new(config.clone())).with_whole_words(config.match_whole_words())
    }

    /// A filter that never censors anything.
    pub fn disabled() -> Self {
        Self::new(Arc::new(LiveWordList::default()))
    }

    /// Anchors every entry on word boundaries.
    pub fn with_whole_words(mut self, whole_words: bool) -> Self {
        self.match_whole_words = whole_words;
        self
    }

    pub fn match_whole_words(&self) -> bool {
        self.match_whole_words
    }

    /// Masks every configured word in `text`.
    pub fn censor(&self, text: &str) -> String {
        match &self.current().matcher {
            Some(matcher) => matcher.mask(text),
            None => text.to_string(),
        }
    }

    /// True when `text` contains none of the configured words.
    pub fn is_clean(&self, text: &str) -> bool {
        self.current()
            .matcher
            .as_ref()
            .map_or(true, |m| !m.regex().is_match(text))
    }

    /// Locates every censored word in `text` without masking it.
    pub fn find_matches(&self, text: &str) -> Vec<CensorMatch> {
        let cached = self.current();
        let Some(matcher) = cached.matcher.as_ref() else {
            return Vec::new();
        };
        matcher
            .regex()
            .find_iter(text)
            .map(|m| CensorMatch {
                term: m.as_str().to_string(),
                start: m.start(),
                end: m.end(),
            })
            .collect()
    }

    /// Number of entries in the matcher currently in effect.
    pub fn active_terms(&self) -> usize {
        self.current().matcher.as_ref().map_or(0, |m| m.terms().len())
    }

    /// Returns the matcher for the live word list, rebuilding it if the list
    /// changed since the last call.
    fn current(&self) -> Arc<CachedMatcher> {
        let live = self.source.word_list();

        {
            let cache = self.cache.read().unwrap_or_else(PoisonError::into_inner);
            if let Some(cached) = cache.as_ref() {
                if cached.source == live {
                    trace!(target: "postfmt_core::censor", "Reusing cached censor matcher.");
                    return Arc::clone(cached);
                }
            }
        } // Read lock is released here.

        debug!(target: "postfmt_core::censor", "Word list changed; rebuilding censor matcher.");
        let rebuilt = Arc::new(self.build(live));

        let mut cache = self.cache.write().unwrap_or_else(PoisonError::into_inner);
        // Another thread may have published the same list while we compiled.
        if let Some(cached) = cache.as_ref() {
            if cached.source == rebuilt.source {
                return Arc::clone(cached);
            }
        }
        *cache = Some(Arc::clone(&rebuilt));
        rebuilt
    }

    fn build(&self, source: String) -> CachedMatcher {
        let matcher = match compile_word_list(&source, self.match_whole_words) {
            Ok(matcher) => matcher,
            Err(e) => {
                // Cached as "no matcher" so a bad list is not recompiled per call.
                error!(target: "postfmt_core::censor", "Censorship disabled for current word list: {}", e);
                None
            }
        };
        CachedMatcher { source, matcher }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::censor::compiler::MAX_WORD_LENGTH;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::thread;

    fn live_filter(words: &str) -> (Arc<LiveWordList>, CensorFilter) {
        let live = Arc::new(LiveWordList::new(words));
        let filter = CensorFilter::new(live.clone());
        (live, filter)
    }

    #[test]
    fn masks_case_variants() {
        let (_, filter) = live_filter("foo,bar");
        assert_eq!(filter.censor("Foo and BAR and fOo"), "**** and **** and ****");
    }

    #[test]
    fn empty_list_is_identity() {
        let (_, filter) = live_filter("");
        assert_eq!(filter.censor("anything goes"), "anything goes");
        assert!(filter.is_clean("anything goes"));
        assert_eq!(filter.active_terms(), 0);
    }

    #[test]
    fn list_changes_are_picked_up() {
        let (live, filter) = live_filter("foo");
        assert_eq!(filter.censor("foo bar"), "**** bar");

        live.set("bar");
        assert_eq!(filter.censor("foo bar"), "foo ****");

        live.set("foo");
        assert_eq!(filter.censor("foo bar"), "**** bar");

        live.set("");
        assert_eq!(filter.censor("foo bar"), "foo bar");
    }

    #[test]
    fn unchanged_list_reuses_matcher() {
        let (_, filter) = live_filter("foo");
        let first = filter.current();
        let second = filter.current();
        assert!(Arc::ptr_eq(&first, &second));
    }

    #[test]
    fn source_is_consulted_on_every_call() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = calls.clone();
        let filter = CensorFilter::new(Arc::new(move || {
            counter.fetch_add(1, Ordering::SeqCst);
            "foo".to_string()
        }));
        filter.censor("a");
        filter.censor("b");
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn invalid_list_fails_open_without_panicking() {
        let long = "y".repeat(MAX_WORD_LENGTH + 1);
        let (_, filter) = live_filter(&long);
        assert_eq!(filter.censor("text"), "text");
    }

    #[test]
    fn whole_word_mode() {
        let filter = CensorFilter::from_config(&RenderConfig {
            censored_words: Some("ass".to_string()),
            match_whole_words: Some(true),
        });
        assert_eq!(filter.censor("class ass"), "class ****");
    }

    #[test]
    fn find_matches_reports_spans() {
        let (_, filter) = live_filter("foo");
        let matches = filter.find_matches("a FOO b foo");
        assert_eq!(matches.len(), 2);
        assert_eq!(matches[0].term, "FOO");
        assert_eq!((matches[0].start, matches[0].end), (2, 5));
        assert_eq!((matches[1].start, matches[1].end), (8, 11));
    }

    #[test]
    fn concurrent_readers_see_consistent_lists() {
        let (live, filter) = live_filter("alpha");
        let filter = Arc::new(filter);

        let readers: Vec<_> = (0..4)
            .map(|_| {
                let filter = Arc::clone(&filter);
                thread::spawn(move || {
                    for _ in 0..200 {
                        let out = filter.censor("alpha beta");
                        // Exactly one of the two lists is in effect at any time.
                        assert!(out == "**** beta" || out == "alpha ****", "unexpected output: {out}");
                    }
                })
            })
            .collect();

        for i in 0..200 {
            live.set(if i % 2 == 0 { "beta" } else { "alpha" });
        }

        for reader in readers {
            reader.join().unwrap();
        }
    }
}
