// src/table/coerce.rs
//
// Column-wide type coercion. Policy (see the shaping pipelines): float→int
// always rounds to nearest before truncating — the portal reports fractional
// pounds and flooring them would systematically under-weigh cargo. Any cell
// that cannot be represented in the target type fails the whole call with the
// offending raw value; there is no silent null substitution.

use chrono::NaiveDate;

use crate::error::{ReportError, Result};
use crate::table::{Cell, Column, Table};

/// Target semantic type for a column.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CellKind {
    Text,
    Int,
    Float,
    Bool,
    Date,
}

impl CellKind {
    pub fn label(self) -> &'static str {
        match self {
            CellKind::Text => "text",
            CellKind::Int => "int",
            CellKind::Float => "float",
            CellKind::Bool => "bool",
            CellKind::Date => "date",
        }
    }
}

/// Date formats the portal uses: its form dates (`25-Mar-2023`) and ISO.
const DATE_FORMATS: &[&str] = &["%d-%b-%Y", "%Y-%m-%d"];

/// Convert every cell of `column` to `kind`, in place.
pub fn coerce(table: &mut Table, column: Column<'_>, kind: CellKind) -> Result<()> {
    let i = table.resolve(column)?;
    let name = table.headers()[i].clone();

    // Convert into a scratch vector first so a failure mid-column leaves the
    // table untouched.
    let mut converted = Vec::with_capacity(table.n_rows());
    for (row_ix, row) in table.rows().iter().enumerate() {
        let cell = &row[i];
        let new = convert(cell, kind).ok_or_else(|| ReportError::Coercion {
            row: row_ix,
            column: name.clone(),
            value: cell.to_string(),
            target: kind.label(),
        })?;
        converted.push(new);
    }

    for (row_ix, new) in converted.into_iter().enumerate() {
        table.set_cell(row_ix, i, new);
    }
    Ok(())
}

/// Single-cell conversion. `None` means not representable.
pub fn convert(cell: &Cell, kind: CellKind) -> Option<Cell> {
    match kind {
        CellKind::Text => Some(Cell::Text(cell.to_string())),
        CellKind::Int => to_int(cell).map(Cell::Int),
        CellKind::Float => to_float(cell).map(Cell::Float),
        CellKind::Bool => to_bool(cell).map(Cell::Bool),
        CellKind::Date => to_date(cell).map(Cell::Date),
    }
}

/// Round-to-nearest before truncation; never a silent floor.
pub fn to_int(cell: &Cell) -> Option<i64> {
    match cell {
        Cell::Int(n) => Some(*n),
        Cell::Float(x) => Some(x.round() as i64),
        Cell::Bool(b) => Some(i64::from(*b)),
        Cell::Text(s) => {
            let s = s.trim();
            if let Ok(n) = s.parse::<i64>() {
                return Some(n);
            }
            s.parse::<f64>().ok().map(|x| x.round() as i64)
        }
        Cell::Date(_) => None,
    }
}

fn to_float(cell: &Cell) -> Option<f64> {
    match cell {
        Cell::Float(x) => Some(*x),
        Cell::Int(n) => Some(*n as f64),
        Cell::Text(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }
}

fn to_bool(cell: &Cell) -> Option<bool> {
    match cell {
        Cell::Bool(b) => Some(*b),
        Cell::Int(0) => Some(false),
        Cell::Int(1) => Some(true),
        Cell::Text(s) => match s.trim().to_ascii_lowercase().as_str() {
            "true" | "yes" | "1" => Some(true),
            "false" | "no" | "0" => Some(false),
            _ => None,
        },
        _ => None,
    }
}

fn to_date(cell: &Cell) -> Option<NaiveDate> {
    match cell {
        Cell::Date(d) => Some(*d),
        Cell::Text(s) => {
            let s = s.trim();
            DATE_FORMATS
                .iter()
                .find_map(|fmt| NaiveDate::parse_from_str(s, fmt).ok())
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn one_column(values: &[&str]) -> Table {
        Table::new(
            vec![s!("v")],
            values.iter().map(|v| vec![Cell::text(*v)]).collect(),
        )
        .unwrap()
    }

    #[test]
    fn fractional_weight_rounds_before_truncating() {
        let mut t = one_column(&["12.6"]);
        coerce(&mut t, Column::Name("v"), CellKind::Int).unwrap();
        assert_eq!(t.cell(0, 0), Some(&Cell::Int(13)));

        assert_eq!(to_int(&Cell::Float(12.6)), Some(13));
        assert_eq!(to_int(&Cell::Float(12.4)), Some(12));
    }

    #[test]
    fn bad_cell_fails_with_value_and_row_and_leaves_table_alone() {
        let mut t = one_column(&["10", "heavy"]);
        let err = coerce(&mut t, Column::Name("v"), CellKind::Int).unwrap_err();
        match err {
            ReportError::Coercion { row, value, target, .. } => {
                assert_eq!(row, 1);
                assert_eq!(value, "heavy");
                assert_eq!(target, "int");
            }
            other => panic!("unexpected error: {other:?}"),
        }
        // First cell still text; the failed pass mutated nothing.
        assert_eq!(t.cell(0, 0), Some(&Cell::text("10")));
    }

    #[test]
    fn vendor_and_iso_dates_parse() {
        let mut t = one_column(&["25-Mar-2023", "2023-03-25"]);
        coerce(&mut t, Column::Name("v"), CellKind::Date).unwrap();
        let expect = NaiveDate::from_ymd_opt(2023, 3, 25).unwrap();
        assert_eq!(t.cell(0, 0), Some(&Cell::Date(expect)));
        assert_eq!(t.cell(1, 0), Some(&Cell::Date(expect)));
    }

    #[test]
    fn bool_column() {
        let mut t = one_column(&["Yes", "0"]);
        coerce(&mut t, Column::Name("v"), CellKind::Bool).unwrap();
        assert_eq!(t.cell(0, 0), Some(&Cell::Bool(true)));
        assert_eq!(t.cell(1, 0), Some(&Cell::Bool(false)));
    }
}
