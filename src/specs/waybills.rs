// src/specs/waybills.rs
//
// Layout of the "waybills to ship" report table (vendor report id 75).
// Column semantics are only knowable by position; the positions below were
// determined against the live layout and hold nothing else.

use crate::error::Result;
use crate::table::{Column, Table};

/* ---------------- canonical column names ---------------- */

pub const ROUTE: &str = "Route";
pub const AWB: &str = "AWB";
pub const GOODS_DESC: &str = "Goods Desc.";
pub const CONSIGNEE: &str = "Consignee";
pub const PIECE_COUNT: &str = "Piece Count";
pub const WEIGHT: &str = "Weight";
pub const HOURS_LEFT: &str = "Hours Left";
pub const RECVD_DATE: &str = "Recvd Date";
pub const DAYS: &str = "Days";
pub const STATUS: &str = "Status";
pub const REMARKS: &str = "Remarks";

/* ---------------- vendor layout ---------------- */

/// Source positions that carry meaning. Everything else is noise and dropped.
pub const COLUMN_NAMES: &[(usize, &str)] = &[
    (1, ROUTE),
    (4, AWB),
    (5, GOODS_DESC),
    (6, CONSIGNEE),
    (10, PIECE_COUNT),
    (11, WEIGHT),
    (12, HOURS_LEFT),
    (15, RECVD_DATE),
];

/// Source positions with no use in either report.
pub const DROP_COLUMNS: &[usize] = &[0, 2, 3, 7, 8, 9, 13, 14];

/// The portal renders routes as `"WPG = XYZ"`; only the destination matters.
pub const ROUTE_PREFIX: &str = "WPG = ";

/// Where the computed Days column goes on the bot worklist: between Weight
/// and Recvd Date.
pub const DAYS_INSERT_AT: usize = 6;

/// Overdue marker in the Hours Left column. The portal encodes "6 hours
/// overdue" as the text `-6`; this is a flag to look for, not a number to
/// parse.
pub const PAST_SLA_MARKER: char = '-';

/// Initial shaping shared by the SLA and Bot pipelines: canonical names on,
/// noise columns off, route prefix stripped. Positional knowledge ends here.
pub fn shape(mut raw: Table) -> Result<Table> {
    let renames: Vec<(Column<'_>, &str)> = COLUMN_NAMES
        .iter()
        .map(|&(i, name)| (Column::Index(i), name))
        .collect();
    raw.rename_columns(&renames)?;

    let drops: Vec<Column<'_>> = DROP_COLUMNS.iter().map(|&i| Column::Index(i)).collect();
    raw.drop_columns(&drops)?;

    raw.replace_substring(Column::Name(ROUTE), ROUTE_PREFIX, "")?;
    Ok(raw)
}
