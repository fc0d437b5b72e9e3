// postfmt/src/ui/censor_summary.rs
//! Table output for the `scan` command.

use comfy_table::presets::UTF8_FULL;
use comfy_table::{Cell, ContentArrangement, Table};
use std::io::{self, Write};

use postfmt_core::CensorSummaryItem;

use crate::ui::output_format::write_styled;
use crate::ui::theme::ThemeEntry;

/// Prints one row per censored term with its occurrence count, followed by a
/// total line. Nothing but a short note is printed for an empty summary.
pub fn print_summary<W: Write>(
    summary: &[CensorSummaryItem],
    writer: &mut W,
    supports_color: bool,
) -> io::Result<()> {
    if summary.is_empty() {
        write_styled(writer, "No censored words found.", ThemeEntry::Success, supports_color)?;
        return writeln!(writer);
    }

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);
    if supports_color {
        table.enforce_styling();
    } else {
        table.force_no_tty();
    }
    table.set_header(vec![Cell::new("Term"), Cell::new("Occurrences")]);

    for item in summary {
        let (term, count) = (Cell::new(&item.term), Cell::new(item.occurrences));
        if supports_color {
            table.add_row(vec![
                term.fg(ThemeEntry::SummaryTerm.table_color()),
                count.fg(ThemeEntry::SummaryOccurrences.table_color()),
            ]);
        } else {
            table.add_row(vec![term, count]);
        }
    }

    writeln!(writer, "{table}")?;
    let total: usize = summary.iter().map(|i| i.occurrences).sum();
    write_styled(writer, &format!("Total: {total}"), ThemeEntry::Header, supports_color)?;
    writeln!(writer)
}
