//! Aligned text table for the terminal.

use crate::models::{ReportRow, HEADERS};
use itertools::Itertools;

/// Spacing between columns.
const COLUMN_GAP: &str = "  ";

/// Left-align a value in a field of `width` characters.
///
/// Values longer than `width` are printed as is.
pub fn format_field<T: ToString>(value: T, width: usize) -> String {
    let value_str = value.to_string();
    format!("{value_str:<width$}")
}

/// Render rows as a header line, a dashed divider and one line per row.
pub fn render_table(rows: &[ReportRow]) -> String {
    let mut widths: Vec<usize> = HEADERS.iter().map(|h| h.chars().count()).collect();
    for row in rows {
        for (width, cell) in widths.iter_mut().zip(row.cells()) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let divider: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();

    let mut out = String::new();
    out.push_str(&format_line(HEADERS.iter().copied(), &widths));
    out.push_str(&format_line(divider.iter().map(String::as_str), &widths));
    for row in rows {
        out.push_str(&format_line(row.cells().into_iter(), &widths));
    }
    out
}

fn format_line<'a>(cells: impl Iterator<Item = &'a str>, widths: &[usize]) -> String {
    let line = cells
        .zip(widths)
        .map(|(cell, width)| format_field(cell, *width))
        .join(COLUMN_GAP);
    format!("{}\n", line.trim_end())
}
