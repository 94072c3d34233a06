//! Fixed-width text tables over the history document.
//!
//! Three layouts, all driven by an ascending set of entry indices (default:
//! every entry):
//!
//! - [`compact_table`] - `ID | Initial Time | Final Time | Elapsed Time`, the
//!   layout of earlier versions of the tool
//! - [`summary_table`] - the compact columns plus a truncated description
//! - [`description_detail`] - one block per entry with the full description
//!   word-wrapped inside the table frame
//!
//! Rendering never mutates the document. A requested index past the last
//! entry fails with [`StoreError::IndexOutOfRange`].

use std::collections::BTreeSet;

use crate::models::{HistoryDocument, WorkEntry, format_duration};
use crate::store::StoreError;

const ID_WIDTH: usize = 5;
const TIME_WIDTH: usize = 30;
const DESC_WIDTH: usize = 40;

/// Width of the four-column frame including its five `|` separators.
const COMPACT_WIDTH: usize = ID_WIDTH + 3 * TIME_WIDTH + 5;
/// The summary layout appends one description column and its separator.
const SUMMARY_WIDTH: usize = COMPACT_WIDTH + DESC_WIDTH + 1;
/// Interior width of the four-column frame, used for wrapped descriptions.
const DETAIL_INNER_WIDTH: usize = COMPACT_WIDTH - 2;

/// Four-column table without descriptions.
pub fn compact_table(
    doc: &HistoryDocument,
    query: Option<&BTreeSet<usize>>,
) -> Result<String, StoreError> {
    let rows = selected(doc, query)?;
    let rule = rule_line(COMPACT_WIDTH);

    let mut out = title(doc);
    out.push_str(&rule);
    out.push_str(&compact_row("ID", "Initial Time", "Final Time", "Elapsed Time"));
    out.push_str(&rule);
    for (index, entry) in rows {
        out.push_str(&compact_row(
            &index.to_string(),
            &entry.init_time,
            &entry.final_time,
            &format_duration(entry.elapsed),
        ));
        out.push_str(&rule);
    }
    out.push_str(&total_line(doc));
    Ok(out)
}

/// Four columns plus a description column truncated to the column width.
pub fn summary_table(
    doc: &HistoryDocument,
    query: Option<&BTreeSet<usize>>,
) -> Result<String, StoreError> {
    let rows = selected(doc, query)?;
    let rule = rule_line(SUMMARY_WIDTH);

    let mut out = title(doc);
    out.push_str(&rule);
    out.push_str(&summary_row("ID", "Initial Time", "Final Time", "Elapsed Time", "Description"));
    out.push_str(&rule);
    for (index, entry) in rows {
        out.push_str(&summary_row(
            &index.to_string(),
            &entry.init_time,
            &entry.final_time,
            &format_duration(entry.elapsed),
            &truncate(&entry.description, DESC_WIDTH),
        ));
        out.push_str(&rule);
    }
    out.push_str(&total_line(doc));
    Ok(out)
}

/// One block per entry: its four-column row followed by the full description
/// word-wrapped to the frame's interior, with a blank interior row above and
/// below.
pub fn description_detail(
    doc: &HistoryDocument,
    query: Option<&BTreeSet<usize>>,
) -> Result<String, StoreError> {
    let rows = selected(doc, query)?;
    let rule = rule_line(COMPACT_WIDTH);

    let mut out = title(doc);
    out.push_str(&rule);
    out.push_str(&compact_row("ID", "Initial Time", "Final Time", "Elapsed Time"));
    out.push_str(&rule);
    for (index, entry) in rows {
        out.push_str(&compact_row(
            &index.to_string(),
            &entry.init_time,
            &entry.final_time,
            &format_duration(entry.elapsed),
        ));
        out.push_str(&rule);
        out.push_str(&interior_row(""));
        for line in wrap(&entry.description, DETAIL_INNER_WIDTH) {
            out.push_str(&interior_row(&line));
        }
        out.push_str(&interior_row(""));
        out.push_str(&rule);
    }
    out.push_str(&total_line(doc));
    Ok(out)
}

/// Resolve the query into `(index, entry)` pairs in ascending index order.
fn selected<'a>(
    doc: &'a HistoryDocument,
    query: Option<&BTreeSet<usize>>,
) -> Result<Vec<(usize, &'a WorkEntry)>, StoreError> {
    let len = doc.worked_hours.len();
    match query {
        None => Ok(doc.worked_hours.iter().enumerate().collect()),
        Some(indices) => indices
            .iter()
            .map(|&index| {
                doc.worked_hours
                    .get(index)
                    .map(|entry| (index, entry))
                    .ok_or(StoreError::IndexOutOfRange { index, len })
            })
            .collect(),
    }
}

fn title(doc: &HistoryDocument) -> String {
    format!("\n - Project name: {}\n\n - Worked hours: \n\n", doc.name)
}

fn total_line(doc: &HistoryDocument) -> String {
    format!("\n - Total time worked: {}\n", format_duration(doc.total_time_worked))
}

fn rule_line(width: usize) -> String {
    let mut line = "-".repeat(width);
    line.push('\n');
    line
}

fn compact_row(id: &str, init: &str, fin: &str, elapsed: &str) -> String {
    format!(
        "|{}|{}|{}|{}|\n",
        center(id, ID_WIDTH),
        center(init, TIME_WIDTH),
        center(fin, TIME_WIDTH),
        center(elapsed, TIME_WIDTH),
    )
}

fn summary_row(id: &str, init: &str, fin: &str, elapsed: &str, description: &str) -> String {
    format!(
        "|{}|{}|{}|{}|{}|\n",
        center(id, ID_WIDTH),
        center(init, TIME_WIDTH),
        center(fin, TIME_WIDTH),
        center(elapsed, TIME_WIDTH),
        center(description, DESC_WIDTH),
    )
}

fn interior_row(content: &str) -> String {
    format!("|{}|\n", center(content, DETAIL_INNER_WIDTH))
}

fn center(text: &str, width: usize) -> String {
    format!("{text:^width$}")
}

/// Cut a description down to `width` characters, marking the cut with `...`.
fn truncate(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        text.to_string()
    } else {
        let kept: String = text.chars().take(width.saturating_sub(3)).collect();
        format!("{kept}...")
    }
}

/// Greedy word wrap; words longer than the width are hard-split.
fn wrap(text: &str, width: usize) -> Vec<String> {
    let mut lines: Vec<String> = Vec::new();
    let mut current = String::new();
    let mut current_len = 0usize;

    for word in text.split_whitespace() {
        for piece in split_oversized(word, width) {
            let piece_len = piece.chars().count();
            let separator = usize::from(current_len > 0);
            if current_len + separator + piece_len > width {
                lines.push(std::mem::take(&mut current));
                current_len = 0;
            }
            if current_len > 0 {
                current.push(' ');
                current_len += 1;
            }
            current.push_str(&piece);
            current_len += piece_len;
        }
    }
    if !current.is_empty() {
        lines.push(current);
    }
    if lines.is_empty() {
        lines.push(String::new());
    }
    lines
}

fn split_oversized(word: &str, width: usize) -> Vec<String> {
    let chars: Vec<char> = word.chars().collect();
    if chars.len() <= width {
        return vec![word.to_string()];
    }
    chars.chunks(width).map(|chunk| chunk.iter().collect()).collect()
}
