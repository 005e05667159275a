//! Console report - render the snapshot as an aligned text table.
//!
//! Shows every column at full width; nothing is truncated. Invalid markers
//! render as `NaN`, matching how the source data's missing values are usually
//! displayed.

use crate::models::EnrichedRecord;

/// Render the snapshot as an aligned table, one row per record.
///
/// Text columns (ZIP, COORDINATES) are left-aligned; numeric columns are
/// right-aligned. Column widths grow to the longest cell.
pub fn render_table(snapshot: &[EnrichedRecord]) -> String {
    let headers = EnrichedRecord::column_names();

    let rows: Vec<[String; 5]> = snapshot
        .iter()
        .map(|r| {
            [
                r.zip.clone(),
                r.coordinates.clone(),
                format_number(r.avg_income_household),
                format_number(r.latitude),
                format_number(r.longitude),
            ]
        })
        .collect();

    let mut widths: [usize; 5] = headers.map(str::len);
    for row in &rows {
        for (w, cell) in widths.iter_mut().zip(row.iter()) {
            *w = (*w).max(cell.len());
        }
    }

    // Right-align numeric columns, left-align the text ones
    let numeric = [false, false, true, true, true];

    let mut out = String::new();
    render_row(&mut out, &headers.map(String::from), &widths, &numeric);
    for row in &rows {
        render_row(&mut out, row, &widths, &numeric);
    }
    out
}

fn render_row(out: &mut String, cells: &[String; 5], widths: &[usize; 5], numeric: &[bool; 5]) {
    for (i, cell) in cells.iter().enumerate() {
        if i > 0 {
            out.push_str("  ");
        }
        if numeric[i] {
            out.push_str(&format!("{:>width$}", cell, width = widths[i]));
        } else {
            out.push_str(&format!("{:<width$}", cell, width = widths[i]));
        }
    }
    // Trailing padding on the last column serves no purpose
    while out.ends_with(' ') {
        out.pop();
    }
    out.push('\n');
}

/// Format an optional number, `NaN` for the invalid marker.
fn format_number(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("{v}"),
        None => "NaN".to_string(),
    }
}
