//! `render` command: raw post text to censored HTML.

use anyhow::{Context, Result};
use log::info;
use std::fs;
use std::io::{self, Write};
use std::process::ExitCode;

use postfmt_core::{escape_html, RenderConfig, Renderer};

use crate::cli::RenderCommand;
use crate::commands::{info_msg, read_input};

pub fn run_render(cmd: &RenderCommand, config: &RenderConfig, quiet: bool) -> Result<ExitCode> {
    info!("Starting render operation.");
    let input = read_input(cmd.input_file.as_deref())?;
    let renderer = Renderer::from_config(config);

    let output = if cmd.plain {
        escape_html(&renderer.render_plain(&input))
    } else {
        renderer.render(&input).into_string()
    };

    match &cmd.output {
        Some(path) => {
            if !quiet {
                info_msg(format!("Writing rendered HTML to file: {}", path.display()));
            }
            let mut file = fs::File::create(path)
                .with_context(|| format!("Failed to create output file: {}", path.display()))?;
            writeln!(file, "{}", output)?;
        }
        None => {
            let stdout = io::stdout();
            let mut writer = stdout.lock();
            writeln!(writer, "{}", output)?;
        }
    }

    info!("Render operation completed.");
    Ok(ExitCode::SUCCESS)
}
