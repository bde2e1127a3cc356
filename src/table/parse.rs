// src/table/parse.rs
//
// Turns a scraped fragment holding one `<table>` into a rectangular Table of
// text cells. The portal's header cells are captured for display but carry no
// semantic weight — the page specs address everything by position until the
// canonical renames have been applied.

use crate::core::html::{inner_after_open_tag, next_tag_block_ci, strip_tags};
use crate::core::sanitize::normalize_entities;
use crate::error::{ReportError, Result};
use crate::table::{Cell, Table};

/// Parse the single `<table>` element in `fragment`.
///
/// A row of `<th>` cells (with no `<td>`) becomes the header row; every other
/// row must match its width. Ragged rows are rejected, not padded.
pub fn parse_table(fragment: &str) -> Result<Table> {
    let (tb_s, tb_e) =
        next_tag_block_ci(fragment, "<table", "</table>", 0).ok_or(ReportError::NoTable)?;
    let table = &fragment[tb_s..tb_e];

    let mut headers: Option<Vec<String>> = None;
    let mut rows: Vec<Vec<Cell>> = Vec::new();

    let mut pos = 0usize;
    while let Some((tr_s, tr_e)) = next_tag_block_ci(table, "<tr", "</tr>", pos) {
        let tr = &table[tr_s..tr_e];
        pos = tr_e;

        let cells = collect_cells(tr, "<td", "</td>");
        if cells.is_empty() {
            // Header row, or markup noise with no cells at all.
            let ths = collect_cells(tr, "<th", "</th>");
            if !ths.is_empty() && headers.is_none() && rows.is_empty() {
                headers = Some(ths);
            }
            continue;
        }

        rows.push(cells.into_iter().map(Cell::Text).collect());
    }

    let width = match (&headers, rows.first()) {
        (Some(h), _) => h.len(),
        (None, Some(r)) => r.len(),
        (None, None) => return Err(ReportError::NoTable),
    };

    for (i, row) in rows.iter().enumerate() {
        if row.len() != width {
            return Err(ReportError::Ragged {
                row: i,
                found: row.len(),
                expected: width,
            });
        }
    }

    // Positional headers when the source supplies none.
    let headers =
        headers.unwrap_or_else(|| (0..width).map(|i| i.to_string()).collect());

    Table::new(headers, rows)
}

fn collect_cells(tr: &str, open: &str, close: &str) -> Vec<String> {
    let mut out = Vec::new();
    let mut pos = 0usize;
    while let Some((c_s, c_e)) = next_tag_block_ci(tr, open, close, pos) {
        let inner = inner_after_open_tag(&tr[c_s..c_e]);
        out.push(strip_tags(normalize_entities(&inner)));
        pos = c_e;
    }
    out
}
