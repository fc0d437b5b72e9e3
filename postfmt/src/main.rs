// postfmt/src/main.rs
//! postfmt entry point.
//!
//! Loads `.env`, parses arguments, sets up logging and hands off to the
//! selected subcommand.

use clap::Parser;
use log::LevelFilter;
use std::process::ExitCode;

use postfmt::cli::Cli;
use postfmt::commands::{dispatch, error_msg};
use postfmt::logger;

fn main() -> ExitCode {
    // A missing .env file is fine.
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let level = if cli.quiet {
        Some(LevelFilter::Off)
    } else if cli.debug {
        Some(LevelFilter::Debug)
    } else {
        None
    };
    logger::init_logger(level);

    match dispatch(&cli) {
        Ok(code) => code,
        Err(e) => {
            error_msg(format!("{:#}", e));
            ExitCode::FAILURE
        }
    }
}
