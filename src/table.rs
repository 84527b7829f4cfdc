//! Plain-text table rendering for record views.
//!
//! Column widths adapt to the data between a per-column floor and cap.
//! Only the comment column truncates; it gets a `...` marker when cut.

use crate::models::AnnotationRecord;

const SEPARATOR: &str = "  |  ";
const ELLIPSIS: &str = "...";

const HEADERS: [&str; 5] = ["!", "user", "date", "comment", "file"];
const CAPS: [usize; 5] = [1, 10, 10, 50, 15];
const FLOORS: [usize; 5] = [1, 4, 4, 7, 7];

const COMMENT: usize = 3;

/// Render `records` as a table: header, dash line, one row per record,
/// closing dash line. Every line ends with `\n`.
pub fn render_table(records: &[&AnnotationRecord]) -> String {
    let rows: Vec<[&str; 5]> = records.iter().map(|r| cells(r)).collect();
    let widths = column_widths(&rows);

    let header = format_line(&HEADERS, &widths);
    let rule = "-".repeat(char_len(&header));

    let mut out = String::new();
    out.push_str(&header);
    out.push('\n');
    out.push_str(&rule);
    out.push('\n');
    for row in &rows {
        let comment = truncate(row[COMMENT], widths[COMMENT]);
        let mut row = *row;
        row[COMMENT] = &comment;
        out.push_str(&format_line(&row, &widths));
        out.push('\n');
    }
    out.push_str(&rule);
    out.push('\n');
    out
}

fn cells(record: &AnnotationRecord) -> [&str; 5] {
    [
        if record.importance { "!" } else { " " },
        &record.user,
        &record.date,
        &record.comment,
        &record.file_name,
    ]
}

/// `min(cap, max(longest, floor))` for each column.
fn column_widths(rows: &[[&str; 5]]) -> [usize; 5] {
    let mut widths = FLOORS;
    for row in rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(char_len(cell));
        }
    }
    for (width, cap) in widths.iter_mut().zip(CAPS) {
        *width = (*width).min(cap);
    }
    widths
}

fn format_line(cells: &[&str; 5], widths: &[usize; 5]) -> String {
    cells
        .iter()
        .zip(widths)
        .map(|(cell, width)| pad(cell, *width))
        .collect::<Vec<_>>()
        .join(SEPARATOR)
}

/// Right-pad with spaces to `width` chars. Longer text is left as is.
fn pad(text: &str, width: usize) -> String {
    let len = char_len(text);
    let mut out = String::with_capacity(text.len() + width.saturating_sub(len));
    out.push_str(text);
    out.extend(std::iter::repeat(' ').take(width.saturating_sub(len)));
    out
}

fn truncate(text: &str, width: usize) -> String {
    if char_len(text) <= width {
        return text.to_string();
    }
    let keep = width.saturating_sub(ELLIPSIS.len());
    let mut out: String = text.chars().take(keep).collect();
    out.push_str(ELLIPSIS);
    out
}

fn char_len(text: &str) -> usize {
    text.chars().count()
}
