// postfmt/src/commands/mod.rs
//! Subcommand implementations and the helpers they share: reading input,
//! resolving configuration, and printing status messages.

pub mod censor;
pub mod check_name;
pub mod quote;
pub mod render;
pub mod scan;

use anyhow::{Context, Result};
use is_terminal::IsTerminal;
use log::debug;
use std::fs;
use std::io::{self, Read};
use std::path::Path;
use std::process::ExitCode;

use postfmt_core::{merge_config, RenderConfig};

use crate::cli::{Cli, Commands};
use crate::ui::output_format;

/// Helper for printing info messages to stderr.
pub fn info_msg(msg: impl AsRef<str>) {
    let supports_color = io::stderr().is_terminal();
    let _ = output_format::print_info_message(&mut io::stderr(), msg.as_ref(), supports_color);
}

/// Helper for printing warning messages to stderr.
pub fn warn_msg(msg: impl AsRef<str>) {
    let supports_color = io::stderr().is_terminal();
    let _ = output_format::print_warn_message(&mut io::stderr(), msg.as_ref(), supports_color);
}

/// Helper for printing error messages to stderr.
pub fn error_msg(msg: impl AsRef<str>) {
    let supports_color = io::stderr().is_terminal();
    let _ = output_format::print_error_message(&mut io::stderr(), msg.as_ref(), supports_color);
}

/// Reads the whole input from `path`, or from stdin when no path is given.
pub fn read_input(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) => {
            debug!("Reading input from file: {}", path.display());
            fs::read_to_string(path)
                .with_context(|| format!("Failed to read input file: {}", path.display()))
        }
        None => {
            debug!("Reading input from stdin.");
            let mut buffer = String::new();
            io::stdin()
                .read_to_string(&mut buffer)
                .context("Failed to read from stdin")?;
            Ok(buffer)
        }
    }
}

/// Builds the effective configuration: embedded defaults, then the file given
/// with `--config` (or the first discovered one), then command-line overrides.
pub fn resolve_config(cli: &Cli) -> Result<RenderConfig> {
    let mut config = match &cli.config {
        Some(path) => {
            let user = RenderConfig::load_from_file(path)
                .with_context(|| format!("Failed to load config file: {}", path.display()))?;
            merge_config(RenderConfig::load_default()?, Some(user))
        }
        None => RenderConfig::discover()?,
    };

    if let Some(words) = &cli.censor {
        debug!("Censor list overridden from the command line or environment.");
        config.censored_words = Some(words.clone());
    }
    if cli.whole_words {
        config.match_whole_words = Some(true);
    }

    config.validate()?;
    Ok(config)
}

/// Runs the selected subcommand and returns the process exit code.
pub fn dispatch(cli: &Cli) -> Result<ExitCode> {
    let config = resolve_config(cli)?;

    match &cli.command {
        Commands::Render(cmd) => render::run_render(cmd, &config, cli.quiet),
        Commands::Quote(cmd) => quote::run_quote(cmd, &config),
        Commands::Censor(cmd) => censor::run_censor(cmd, &config, cli),
        Commands::Scan(cmd) => scan::run_scan(cmd, &config, cli.quiet),
        Commands::CheckName(cmd) => check_name::run_check_name(cmd, &config, cli.quiet),
    }
}
