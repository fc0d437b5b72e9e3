//! `scan` command: reports censored words without changing the text.

use anyhow::{Context, Result};
use is_terminal::IsTerminal;
use log::info;
use serde::Serialize;
use std::io::{self, Write};
use std::process::ExitCode;

use postfmt_core::{summarize, CensorFilter, CensorSummaryItem, RenderConfig};

use crate::cli::ScanCommand;
use crate::commands::{read_input, warn_msg};
use crate::ui::censor_summary;

/// Machine-readable scan result printed with `--json`.
#[derive(Debug, Serialize)]
pub struct ScanReport {
    pub total: usize,
    pub terms: Vec<CensorSummaryItem>,
}

pub fn scan_text(filter: &CensorFilter, text: &str) -> ScanReport {
    let matches = filter.find_matches(text);
    ScanReport {
        total: matches.len(),
        terms: summarize(&matches),
    }
}

pub fn run_scan(cmd: &ScanCommand, config: &RenderConfig, quiet: bool) -> Result<ExitCode> {
    let input = read_input(cmd.input_file.as_deref())?;
    let filter = CensorFilter::from_config(config);
    let report = scan_text(&filter, &input);
    info!("Scan found {} censored word(s) across {} term(s).", report.total, report.terms.len());

    let stdout = io::stdout();
    if cmd.json {
        let json = serde_json::to_string_pretty(&report).context("Failed to serialize scan report")?;
        writeln!(stdout.lock(), "{}", json)?;
    } else {
        let supports_color = stdout.is_terminal();
        censor_summary::print_summary(&report.terms, &mut stdout.lock(), supports_color)?;
    }

    if let Some(threshold) = cmd.fail_over_threshold {
        if report.total > threshold {
            if !quiet {
                warn_msg(format!(
                    "Found {} censored word(s), over the threshold of {}.",
                    report.total, threshold
                ));
            }
            return Ok(ExitCode::FAILURE);
        }
    }
    Ok(ExitCode::SUCCESS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use postfmt_core::LiveWordList;
    use std::sync::Arc;
    use test_log::test;

    #[test]
    fn report_counts_every_occurrence() {
        let filter = CensorFilter::new(Arc::new(LiveWordList::new("drat,heck")));
        let report = scan_text(&filter, "Drat, drat and heck.");
        assert_eq!(report.total, 3);
        assert_eq!(report.terms.len(), 2);
        assert_eq!(report.terms[0].term, "drat");
        assert_eq!(report.terms[0].occurrences, 2);
    }
}
