// postfmt/src/lib.rs
//! # postfmt CLI Application
//!
//! Command-line front end for `postfmt-core`: renders posts, builds reply
//! quotes, censors text and checks names from files or stdin.

pub mod cli;
pub mod commands;
pub mod logger;
pub mod ui;

pub use commands::dispatch;
