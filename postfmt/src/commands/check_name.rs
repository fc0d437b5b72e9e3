//! `check-name` command.

use anyhow::Result;
use is_terminal::IsTerminal;
use std::io;
use std::process::ExitCode;

use postfmt_core::{validate_group_name, validate_name, CensorFilter, RenderConfig};

use crate::cli::CheckNameCommand;
use crate::commands::error_msg;
use crate::ui::output_format;

pub fn run_check_name(cmd: &CheckNameCommand, config: &RenderConfig, quiet: bool) -> Result<ExitCode> {
    let result = if cmd.group {
        validate_group_name(&cmd.name, &CensorFilter::from_config(config))
    } else {
        validate_name(&cmd.name)
    };

    match result {
        Ok(()) => {
            if !quiet {
                let stdout = io::stdout();
                let supports_color = stdout.is_terminal();
                output_format::print_success_message(
                    &mut stdout.lock(),
                    &format!("'{}' is a valid name.", cmd.name),
                    supports_color,
                )?;
            }
            Ok(ExitCode::SUCCESS)
        }
        Err(e) => {
            error_msg(e.to_string());
            Ok(ExitCode::FAILURE)
        }
    }
}
