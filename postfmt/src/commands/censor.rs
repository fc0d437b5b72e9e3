//! `censor` command: masks censored words in plain text.
//!
//! In line-buffered mode each line is censored and flushed as soon as it is
//! read. When the word list comes from a `--config` file, the filter watches
//! that file, so a list edited while the stream is running applies from the
//! next line on.

use anyhow::{Context, Result};
use log::{debug, info};
use std::fs::File;
use std::io::{self, BufRead, BufReader, Read, Write};
use std::process::ExitCode;
use std::sync::Arc;

use postfmt_core::{CensorFilter, FileWordList, RenderConfig};

use crate::cli::{CensorCommand, Cli};
use crate::commands::read_input;

pub fn run_censor(cmd: &CensorCommand, config: &RenderConfig, cli: &Cli) -> Result<ExitCode> {
    let filter = build_filter(cmd, config, cli);
    let stdout = io::stdout();
    let mut writer = stdout.lock();

    if cmd.line_buffered {
        info!("Censoring input line by line.");
        let reader: Box<dyn Read> = match &cmd.input_file {
            Some(path) => Box::new(
                File::open(path)
                    .with_context(|| format!("Failed to open input file: {}", path.display()))?,
            ),
            None => Box::new(io::stdin()),
        };
        censor_lines(&filter, BufReader::new(reader), &mut writer)?;
    } else {
        let input = read_input(cmd.input_file.as_deref())?;
        write!(writer, "{}", filter.censor(&input))?;
    }

    Ok(ExitCode::SUCCESS)
}

fn build_filter(cmd: &CensorCommand, config: &RenderConfig, cli: &Cli) -> CensorFilter {
    match (&cli.config, &cli.censor) {
        (Some(path), None) if cmd.line_buffered => {
            debug!("Watching {} for word list changes.", path.display());
            CensorFilter::new(Arc::new(FileWordList::new(path)))
                .with_whole_words(config.match_whole_words())
        }
        _ => CensorFilter::from_config(config),
    }
}

/// Censors `reader` one line at a time, flushing after every line.
pub fn censor_lines<R: BufRead, W: Write>(filter: &CensorFilter, reader: R, writer: &mut W) -> Result<()> {
    for line in reader.lines() {
        let line = line.context("Failed to read input line")?;
        writeln!(writer, "{}", filter.censor(&line))?;
        writer.flush()?;
    }
    Ok(())
}
