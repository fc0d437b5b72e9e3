//! errors.rs - Custom error types for the postfmt-core library.
//!
//! Rendering itself never fails; these errors come from compiling a censor
//! word list. Configuration loading wraps them in `anyhow` context.
//!
//! License: MIT OR APACHE 2.0

use thiserror::Error;

/// All error types produced by `postfmt-core`.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum PostfmtError {
    #[error("Failed to compile censor word list '{0}': {1}")]
    CensorCompilationError(String, regex::Error),

    #[error("Censored word '{0}': length ({1}) exceeds maximum allowed ({2})")]
    WordLengthExceeded(String, usize, usize),
}
