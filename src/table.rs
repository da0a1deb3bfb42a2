//! Plain text tables: no borders, left-aligned columns padded to the widest
//! cell, two spaces between columns.

use crate::consts::{COLUMN_GAP, PAY_PERIOD_HEADER};
use crate::period::PeriodLabel;

/// Renders `rows` under `headers`, one line per row.
///
/// Rows shorter than the header are padded with empty cells. Trailing
/// whitespace is dropped from every line.
pub fn render_plain<S: AsRef<str>>(headers: &[&str], rows: &[Vec<S>]) -> String {
    let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
    for row in rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.as_ref().chars().count());
        }
    }

    let header_line = render_line(&widths, headers.iter().copied());
    let mut lines = vec![header_line];
    lines.extend(
        rows.iter()
            .map(|row| render_line(&widths, row.iter().map(AsRef::as_ref))),
    );
    lines.join("\n")
}

fn render_line<'a>(widths: &[usize], cells: impl Iterator<Item = &'a str>) -> String {
    let mut cells = cells.fuse();
    let line = widths
        .iter()
        .map(|&width| format!("{:<width$}", cells.next().unwrap_or_default()))
        .collect::<Vec<_>>()
        .join(COLUMN_GAP);
    line.trim_end().to_owned()
}

/// Renders labels as a single `pay_period` column.
pub fn render_labels(labels: &[PeriodLabel]) -> String {
    let rows: Vec<Vec<&str>> = labels.iter().map(|label| vec![label.as_str()]).collect();
    render_plain(&[PAY_PERIOD_HEADER], &rows)
}
