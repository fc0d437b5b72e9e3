// postfmt/src/logger.rs
//! Logger setup for the CLI.

use env_logger::{Builder, Env};
use log::LevelFilter;

/// Initializes `env_logger`.
///
/// `RUST_LOG` decides the level unless `level` is given, in which case it
/// applies to every target. Repeated calls are ignored, so tests can call this
/// freely.
pub fn init_logger(level: Option<LevelFilter>) {
    let mut builder = Builder::from_env(Env::default().default_filter_or("warn"));
    if let Some(level) = level {
        builder.filter_level(level);
    }
    builder.format_timestamp(None).target(env_logger::Target::Stderr);
    let _ = builder.try_init();
}
