// src/table/mod.rs
//
// The in-memory tabular structure every report pipeline works over, plus the
// structural primitives (drop/rename/insert/replace/rearrange) the pipelines
// compose. A table is mutated in place, one transformation at a time; dropped
// columns are gone for good — nothing downstream resurrects them.
//
// Cells come out of the parser as Text and are retyped by `coerce` where a
// step needs numeric or date semantics.

use std::cmp::Ordering;
use std::fmt;

use chrono::NaiveDate;

use crate::error::{ReportError, Result};

pub mod coerce;
pub mod parse;

/// A single cell value.
#[derive(Clone, Debug, PartialEq)]
pub enum Cell {
    Text(String),
    Int(i64),
    Float(f64),
    Bool(bool),
    Date(NaiveDate),
}

impl Cell {
    pub fn text<S: Into<String>>(s: S) -> Self {
        Cell::Text(s.into())
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Cell::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            Cell::Int(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_date(&self) -> Option<NaiveDate> {
        match self {
            Cell::Date(d) => Some(*d),
            _ => None,
        }
    }

    /// Blank means an empty (or whitespace-only) text cell.
    pub fn is_blank(&self) -> bool {
        matches!(self, Cell::Text(s) if s.trim().is_empty())
    }

    /// Ordering used by `sort_desc_by`. Same-typed cells compare naturally;
    /// mixed types fall back to their rendered text.
    fn cmp_cell(&self, other: &Cell) -> Ordering {
        match (self, other) {
            (Cell::Int(a), Cell::Int(b)) => a.cmp(b),
            (Cell::Float(a), Cell::Float(b)) => a.partial_cmp(b).unwrap_or(Ordering::Equal),
            (Cell::Date(a), Cell::Date(b)) => a.cmp(b),
            (Cell::Bool(a), Cell::Bool(b)) => a.cmp(b),
            (Cell::Text(a), Cell::Text(b)) => a.cmp(b),
            _ => self.to_string().cmp(&other.to_string()),
        }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cell::Text(s) => write!(f, "{}", s),
            Cell::Int(n) => write!(f, "{}", n),
            Cell::Float(x) => write!(f, "{}", x),
            Cell::Bool(b) => write!(f, "{}", b),
            Cell::Date(d) => write!(f, "{}", d.format(crate::dates::FORM_DATE_FMT)),
        }
    }
}

/// Column address: positional straight off the parser, by name once the
/// page spec has renamed things.
#[derive(Clone, Copy, Debug)]
pub enum Column<'a> {
    Index(usize),
    Name(&'a str),
}

/// Where `insert_column` puts the new column. The third case the source
/// system allowed ("neither end nor an index") is unrepresentable here;
/// an out-of-range index is still rejected as a config error.
#[derive(Clone, Copy, Debug)]
pub enum InsertAt {
    End,
    At(usize),
}

#[derive(Clone, Debug, PartialEq)]
pub struct Table {
    headers: Vec<String>,
    rows: Vec<Vec<Cell>>,
}

impl Table {
    /// Build a table from headers and rows. Rejects ragged input.
    pub fn new(headers: Vec<String>, rows: Vec<Vec<Cell>>) -> Result<Self> {
        let width = headers.len();
        for (i, row) in rows.iter().enumerate() {
            if row.len() != width {
                return Err(ReportError::Ragged {
                    row: i,
                    found: row.len(),
                    expected: width,
                });
            }
        }
        Ok(Self { headers, rows })
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn rows(&self) -> &[Vec<Cell>] {
        &self.rows
    }

    pub fn n_cols(&self) -> usize {
        self.headers.len()
    }

    pub fn n_rows(&self) -> usize {
        self.rows.len()
    }

    pub fn cell(&self, row: usize, col: usize) -> Option<&Cell> {
        self.rows.get(row).and_then(|r| r.get(col))
    }

    /// Overwrite one cell; out-of-range writes are ignored.
    pub fn set_cell(&mut self, row: usize, col: usize, value: Cell) {
        if let Some(c) = self.rows.get_mut(row).and_then(|r| r.get_mut(col)) {
            *c = value;
        }
    }

    /// Resolve a column address to its current position.
    pub fn resolve(&self, column: Column<'_>) -> Result<usize> {
        match column {
            Column::Index(i) if i < self.headers.len() => Ok(i),
            Column::Index(i) => Err(ReportError::MissingColumn {
                name: format!("#{}", i),
            }),
            Column::Name(name) => self
                .headers
                .iter()
                .position(|h| h == name)
                .ok_or_else(|| ReportError::MissingColumn { name: s!(name) }),
        }
    }

    /* ---------------- structural primitives ---------------- */

    /// Remove the given columns from the header set and every row.
    /// All addresses are resolved eagerly, so a single bad name fails the
    /// whole call before anything is mutated.
    pub fn drop_columns(&mut self, columns: &[Column<'_>]) -> Result<()> {
        let mut ix: Vec<usize> = columns
            .iter()
            .map(|c| self.resolve(*c))
            .collect::<Result<_>>()?;
        ix.sort_unstable();
        ix.dedup();

        // Remove right-to-left so earlier positions stay valid.
        for &i in ix.iter().rev() {
            self.headers.remove(i);
            for row in &mut self.rows {
                row.remove(i);
            }
        }
        Ok(())
    }

    /// Bulk rename. Applied in order, so on a key collision the last
    /// mapping wins.
    pub fn rename_columns(&mut self, mapping: &[(Column<'_>, &str)]) -> Result<()> {
        for (col, new_name) in mapping {
            let i = self.resolve(*col)?;
            self.headers[i] = s!(*new_name);
        }
        Ok(())
    }

    /// Insert a new column filled with `default` in every existing row.
    pub fn insert_column(&mut self, name: &str, position: InsertAt, default: Cell) -> Result<()> {
        let at = match position {
            InsertAt::End => self.headers.len(),
            InsertAt::At(i) if i <= self.headers.len() => i,
            InsertAt::At(i) => {
                return Err(ReportError::Config(format!(
                    "insert position {} is past the last column ({})",
                    i,
                    self.headers.len()
                )));
            }
        };
        self.headers.insert(at, s!(name));
        for row in &mut self.rows {
            row.insert(at, default.clone());
        }
        Ok(())
    }

    /// Global substring replacement over every text cell of one column.
    /// Cells without the substring are untouched; non-text cells are a no-op.
    pub fn replace_substring(&mut self, column: Column<'_>, from: &str, to: &str) -> Result<()> {
        let i = self.resolve(column)?;
        for row in &mut self.rows {
            if let Cell::Text(s) = &mut row[i] {
                if s.contains(from) {
                    *s = s.replace(from, to);
                }
            }
        }
        Ok(())
    }

    /// Reorder the table to exactly `order` (columns not listed are dropped,
    /// matching how the source system reindexed its frames). Every requested
    /// name must exist.
    pub fn rearrange_columns(&mut self, order: &[&str]) -> Result<()> {
        let ix: Vec<usize> = order
            .iter()
            .map(|&name| self.resolve(Column::Name(name)))
            .collect::<Result<_>>()?;

        self.headers = ix.iter().map(|&i| self.headers[i].clone()).collect();
        self.rows = self
            .rows
            .iter()
            .map(|row| ix.iter().map(|&i| row[i].clone()).collect())
            .collect();
        Ok(())
    }

    /* ---------------- row helpers ---------------- */

    pub fn remove_row(&mut self, row: usize) {
        if row < self.rows.len() {
            self.rows.remove(row);
        }
    }

    pub fn retain_rows<F: FnMut(&[Cell]) -> bool>(&mut self, mut keep: F) {
        self.rows.retain(|row| keep(row));
    }

    /// Stable descending sort on one column; ties keep their current order.
    pub fn sort_desc_by(&mut self, column: Column<'_>) -> Result<()> {
        let i = self.resolve(column)?;
        self.rows.sort_by(|a, b| b[i].cmp_cell(&a[i]));
        Ok(())
    }
}
