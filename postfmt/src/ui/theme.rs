//! Colors used for terminal output.
//!
//! Every styled element of the CLI's output is a [`ThemeEntry`]; the mapping
//! to ANSI colors is fixed. Status messages are styled with `owo-colors` and
//! the scan table with `comfy-table`, so each entry converts to both.

use comfy_table::Color as TableColor;
use owo_colors::AnsiColors;

/// The logical parts of the output that get a color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ThemeEntry {
    Header,
    Success,
    Info,
    Warn,
    Error,
    /// Term column of the scan summary.
    SummaryTerm,
    /// Occurrence column of the scan summary.
    SummaryOccurrences,
}

impl ThemeEntry {
    pub fn color(self) -> AnsiColors {
        match self {
            ThemeEntry::Header => AnsiColors::BrightWhite,
            ThemeEntry::Success => AnsiColors::Green,
            ThemeEntry::Info => AnsiColors::Cyan,
            ThemeEntry::Warn => AnsiColors::Yellow,
            ThemeEntry::Error => AnsiColors::Red,
            ThemeEntry::SummaryTerm => AnsiColors::Magenta,
            ThemeEntry::SummaryOccurrences => AnsiColors::BrightYellow,
        }
    }

    /// The same color as [`color`](Self::color), for table cells.
    pub fn table_color(self) -> TableColor {
        match self.color() {
            AnsiColors::Black => TableColor::Black,
            AnsiColors::Red => TableColor::DarkRed,
            AnsiColors::Green => TableColor::DarkGreen,
            AnsiColors::Yellow => TableColor::DarkYellow,
            AnsiColors::Blue => TableColor::DarkBlue,
            AnsiColors::Magenta => TableColor::DarkMagenta,
            AnsiColors::Cyan => TableColor::DarkCyan,
            AnsiColors::White => TableColor::Grey,
            AnsiColors::BrightBlack => TableColor::DarkGrey,
            AnsiColors::BrightRed => TableColor::Red,
            AnsiColors::BrightGreen => TableColor::Green,
            AnsiColors::BrightYellow => TableColor::Yellow,
            AnsiColors::BrightBlue => TableColor::Blue,
            AnsiColors::BrightMagenta => TableColor::Magenta,
            AnsiColors::BrightCyan => TableColor::Cyan,
            AnsiColors::BrightWhite => TableColor::White,
            _ => TableColor::Reset,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summary_columns_use_theme_colors() {
        assert_eq!(ThemeEntry::SummaryTerm.table_color(), TableColor::DarkMagenta);
        assert_eq!(ThemeEntry::SummaryOccurrences.table_color(), TableColor::Yellow);
    }
}
