//! CSV output formatting for report rows.

use crate::models::{ReportRow, HEADERS};
use itertools::Itertools;

/// Render the header and rows as CSV, one record per line.
pub fn render_csv(rows: &[ReportRow]) -> String {
    let mut out = String::new();
    out.push_str(&csv_line(HEADERS.iter().copied()));
    for row in rows {
        out.push_str(&csv_line(row.cells().into_iter()));
    }
    out
}

fn csv_line<'a>(cells: impl Iterator<Item = &'a str>) -> String {
    format!("{}\n", cells.map(escape_csv_field).join(","))
}

/// Quote a field when it holds a comma, quote or line break.
fn escape_csv_field(input: &str) -> String {
    if input.contains([',', '"', '\n', '\r']) {
        // Excel does not like spaces after the comma between fields, so none are added.
        let escaped = input.replace('"', "\"\"");
        format!("\"{}\"", escaped)
    } else {
        input.to_string()
    }
}
