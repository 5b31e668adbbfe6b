use std::fmt::Write;

use crate::process::Session;

const COLUMNS: [(&str, usize); 6] = [
    ("Title", 28),
    ("Place of Origin", 16),
    ("Artist", 24),
    ("Inscriptions", 16),
    ("Start Date", 10),
    ("End Date", 10),
];

/// Shortens `text` to `width` chars, ending in `…` when cut. Newlines become spaces.
fn fit(text: &str, width: usize) -> String {
    let flat = text.replace(['\n', '\r'], " ");
    if flat.chars().count() <= width {
        return flat;
    }
    let mut cut: String = flat.chars().take(width.saturating_sub(1)).collect();
    cut.push('…');
    cut
}

fn cell_text(text: Option<&str>) -> &str {
    text.unwrap_or("")
}

fn cell_num(num: Option<i64>) -> String {
    num.map(|n| n.to_string()).unwrap_or_default()
}

/// The selected-count label, the current page as a table and a pagination footer.
pub fn render_page(session: &Session) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Total Selected IDs: {}", session.selected_count());

    let _ = write!(out, "{:<4} {:>3} ", "[ ]", "#");
    for (header, width) in COLUMNS {
        let _ = write!(out, "| {:<width$} ", header);
    }
    out.push('\n');

    for (row, record) in session.records().iter().enumerate() {
        let mark = if session.is_row_selected(row) { "[x]" } else { "[ ]" };
        let cells = [
            fit(cell_text(record.title.as_deref()), COLUMNS[0].1),
            fit(cell_text(record.place_of_origin.as_deref()), COLUMNS[1].1),
            fit(cell_text(record.artist_display.as_deref()), COLUMNS[2].1),
            fit(cell_text(record.inscriptions.as_deref()), COLUMNS[3].1),
            cell_num(record.date_start),
            cell_num(record.date_end),
        ];

        let _ = write!(out, "{:<4} {:>3} ", mark, row + 1);
        for (cell, (_, width)) in cells.iter().zip(COLUMNS) {
            let _ = write!(out, "| {:<width$} ", cell);
        }
        out.push('\n');
    }

    if session.records().is_empty() {
        out.push_str("No records found.\n");
    }
    let _ = writeln!(
        out,
        "Page {} of {} ({} records)",
        session.page_index() + 1,
        session.page_count().max(1),
        session.total()
    );
    out
}
