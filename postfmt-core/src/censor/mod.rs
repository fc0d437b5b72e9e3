//! Word censorship over a live, mutable word list.
//!
//! The word list comes from a [`WordListSource`] injected into a
//! [`CensorFilter`]. The filter compiles the list into one case-insensitive
//! matcher and keeps it until the source reports a different list.
//!
//! * `compiler`: turns a comma-separated list into a [`CensorMatcher`].
//! * `filter`: the cached, thread-safe [`CensorFilter`].
//! * `source`: the [`WordListSource`] trait and its stock implementations.
//! * `report`: match and summary records for scanning text without masking it.

pub mod compiler;
pub mod filter;
pub mod report;
pub mod source;

pub use compiler::{compile_word_list, parse_word_list, CensorMatcher, CENSOR_PLACEHOLDER, MAX_WORD_LENGTH};
pub use filter::CensorFilter;
pub use report::{summarize, CensorMatch, CensorSummaryItem};
pub use source::{FileWordList, LiveWordList, WordListSource};
