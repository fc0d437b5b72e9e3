// postfmt/src/cli.rs
//! Command-line interface definition for the postfmt application: global
//! flags shared by every command, and one argument struct per subcommand.
//! License: MIT OR Apache-2.0

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Top-level CLI definition.
#[derive(Parser, Debug)]
#[command(
    name = "postfmt",
    version = env!("CARGO_PKG_VERSION"),
    about = "Render forum posts to safe HTML, quote them for replies, and censor configured words",
    long_about = "postfmt applies the forum's lightweight markup (code blocks, paragraphs, bold, italic and bare links) to raw post text, producing HTML that is safe to embed. It can also build the quoted text for a reply, mask words from a censor list, report which censored words a text contains, and check group names.",
    arg_required_else_help = true,
)]
pub struct Cli {
    /// Disable informational messages
    #[arg(long, short = 'q', global = true, help = "Suppress all informational and debug messages.")]
    pub quiet: bool,

    /// Enable debug logging (overrides RUST_LOG)
    #[arg(long, short = 'd', global = true, help = "Enable debug logging.")]
    pub debug: bool,

    /// Path to a render configuration file (YAML).
    #[arg(long = "config", value_name = "FILE", global = true, help = "Path to a render configuration file (YAML).")]
    pub config: Option<PathBuf>,

    /// Comma-separated censor list; overrides the configuration file.
    #[arg(
        long = "censor",
        value_name = "WORDS",
        env = "POSTFMT_CENSORED_WORDS",
        global = true,
        help = "Comma-separated words to censor, overriding the configured list."
    )]
    pub censor: Option<String>,

    /// Match censored words on word boundaries only.
    #[arg(long = "whole-words", global = true, help = "Censor whole words only instead of any substring.")]
    pub whole_words: bool,

    /// The subcommand to run
    #[command(subcommand)]
    pub command: Commands,
}

/// All available commands for the `postfmt` CLI.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Renders raw post text to censored HTML.
    #[command(about = "Renders raw post text from a file or stdin to censored HTML.")]
    Render(RenderCommand),

    /// Builds the quoted text that pre-fills a reply.
    #[command(about = "Builds the quoted text that pre-fills a reply to a post.")]
    Quote(QuoteCommand),

    /// Masks censored words in plain text.
    #[command(about = "Masks censored words in text without applying markup.")]
    Censor(CensorCommand),

    /// Reports censored words found in a text without changing it.
    #[command(about = "Reports which censored words a text contains, without changing it.")]
    Scan(ScanCommand),

    /// Validates a user or group name.
    #[command(name = "check-name", about = "Validates a user or group name.")]
    CheckName(CheckNameCommand),
}

/// Arguments for the `render` command.
#[derive(Parser, Debug)]
pub struct RenderCommand {
    #[arg(long, short = 'i', value_name = "FILE", help = "Read input from a specified file instead of stdin.")]
    pub input_file: Option<PathBuf>,

    #[arg(long, short = 'o', value_name = "FILE", help = "Write output to a specified file instead of stdout.")]
    pub output: Option<PathBuf>,

    /// Treat the input as a plain field (title, description): censor and
    /// escape it, no markup.
    #[arg(long, help = "Censor and escape the input as a plain field, without markup.")]
    pub plain: bool,
}

/// Arguments for the `quote` command.
#[derive(Parser, Debug)]
pub struct QuoteCommand {
    #[arg(long, short = 'a', value_name = "NAME", help = "Name of the post's author.")]
    pub author: String,

    #[arg(long, short = 'i', value_name = "FILE", help = "Read the quoted post from a file instead of stdin.")]
    pub input_file: Option<PathBuf>,

    /// Print the quote rendered to HTML instead of as raw reply text.
    #[arg(long, help = "Render the quote to HTML, as it would appear once the reply is posted.")]
    pub render: bool,
}

/// Arguments for the `censor` command.
#[derive(Parser, Debug)]
pub struct CensorCommand {
    #[arg(long, short = 'i', value_name = "FILE", help = "Read input from a specified file instead of stdin.")]
    pub input_file: Option<PathBuf>,

    /// Censor input line by line. With `--config`, edits to the file's word
    /// list take effect on the next line.
    #[arg(long = "line-buffered", help = "Process input line by line (useful for streaming data from pipes).")]
    pub line_buffered: bool,
}

/// Arguments for the `scan` command.
#[derive(Parser, Debug)]
pub struct ScanCommand {
    #[arg(long, short = 'i', value_name = "FILE", help = "Read input from a specified file instead of stdin.")]
    pub input_file: Option<PathBuf>,

    #[arg(long, help = "Print the scan summary as JSON.")]
    pub json: bool,

    /// Exit with a non-zero code if the number of censored words found exceeds this threshold.
    #[arg(long = "fail-over-threshold", value_name = "N", help = "Exit with a non-zero code if more than N censored words are found.")]
    pub fail_over_threshold: Option<usize>,
}

/// Arguments for the `check-name` command.
#[derive(Parser, Debug)]
pub struct CheckNameCommand {
    /// The name to check.
    pub name: String,

    /// Apply group name rules (length limits and the censor list).
    #[arg(long, help = "Apply group name rules: length limits and the censor list.")]
    pub group: bool,
}
