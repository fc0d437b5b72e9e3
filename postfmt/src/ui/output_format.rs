//! Status message formatting for stderr.
//!
//! Messages are colored only when the destination supports it, so piped
//! output and test captures stay plain.

use owo_colors::OwoColorize;
use std::io::{self, Write};

use crate::ui::theme::ThemeEntry;

/// Writes `text` in the entry's color, or plain when color is unsupported.
pub fn write_styled<W: Write>(
    writer: &mut W,
    text: &str,
    entry: ThemeEntry,
    supports_color: bool,
) -> io::Result<()> {
    if supports_color {
        write!(writer, "{}", text.color(entry.color()))
    } else {
        write!(writer, "{}", text)
    }
}

fn print_message<W: Write>(
    writer: &mut W,
    prefix: &str,
    msg: &str,
    entry: ThemeEntry,
    supports_color: bool,
) -> io::Result<()> {
    write_styled(writer, prefix, entry, supports_color)?;
    writeln!(writer, " {}", msg)
}

pub fn print_info_message<W: Write>(writer: &mut W, msg: &str, supports_color: bool) -> io::Result<()> {
    print_message(writer, "[info]", msg, ThemeEntry::Info, supports_color)
}

pub fn print_success_message<W: Write>(writer: &mut W, msg: &str, supports_color: bool) -> io::Result<()> {
    print_message(writer, "[ok]", msg, ThemeEntry::Success, supports_color)
}

pub fn print_warn_message<W: Write>(writer: &mut W, msg: &str, supports_color: bool) -> io::Result<()> {
    print_message(writer, "[warn]", msg, ThemeEntry::Warn, supports_color)
}

pub fn print_error_message<W: Write>(writer: &mut W, msg: &str, supports_color: bool) -> io::Result<()> {
    print_message(writer, "[error]", msg, ThemeEntry::Error, supports_color)
}
