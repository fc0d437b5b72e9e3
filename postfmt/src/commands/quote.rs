//! `quote` command.

use anyhow::Result;
use std::io::{self, Write};
use std::process::ExitCode;

use postfmt_core::{quote_for_reply, RenderConfig, Renderer};

use crate::cli::QuoteCommand;
use crate::commands::read_input;

pub fn run_quote(cmd: &QuoteCommand, config: &RenderConfig) -> Result<ExitCode> {
    let original = read_input(cmd.input_file.as_deref())?;
    let quoted = quote_for_reply(&cmd.author, &original);

    let mut stdout = io::stdout().lock();
    if cmd.render {
        let html = Renderer::from_config(config).render(&quoted);
        writeln!(stdout, "{}", html)?;
    } else {
        // The quote already ends with a newline.
        write!(stdout, "{}", quoted)?;
    }
    Ok(ExitCode::SUCCESS)
}
