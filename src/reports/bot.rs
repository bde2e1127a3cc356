// src/reports/bot.rs
//
// The bot worklist: cargo that has sat in the system long enough to need
// manual scheduling, most-overdue first. Consumes the shaped waybill table
// after the SLA pass and owns it — the transformation is destructive.

use chrono::NaiveDate;

use crate::dates;
use crate::error::Result;
use crate::specs::waybills;
use crate::table::coerce::{self, CellKind};
use crate::table::{Cell, Column, InsertAt, Table};

/// One worklist entry, typed for the export collaborator. Status and remarks
/// start blank; the report consumer fills them in by hand.
#[derive(Clone, Debug, PartialEq)]
pub struct ShipmentRecord {
    pub route: String,
    pub awb: String,
    pub goods_description: String,
    pub consignee: String,
    pub piece_count: i64,
    pub weight: i64,
    /// Raw overdue marker. The column is dropped before the worklist is
    /// built, so this is `None` for every record coming out of `filter`.
    pub hours_remaining_raw: Option<String>,
    pub received_date: NaiveDate,
    /// Always ≥ 1: the receipt day counts.
    pub days_in_system: i64,
    pub status: String,
    pub remarks: String,
}

/// The bot half of the SLA/Bot report.
#[derive(Clone, Debug, PartialEq)]
pub struct BotWorklist {
    pub records: Vec<ShipmentRecord>,
    /// The threshold the worklist was filtered with, echoed for the footer.
    pub day_sorter: i64,
    /// Highest days-in-system across the surviving rows; `None` when the
    /// worklist is empty (no sentinel strings cross this boundary).
    pub highest_day: Option<i64>,
}

impl BotWorklist {
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Display form for the report header; the empty worklist shows "N/A".
    pub fn highest_day_label(&self) -> String {
        match self.highest_day {
            Some(d) => d.to_string(),
            None => s!("N/A"),
        }
    }
}

/// Build the worklist from the shaped waybill table.
///
/// `today` is injected so runs are reproducible; `day_sorter` is the
/// configured minimum days-in-system.
pub fn filter(mut table: Table, day_sorter: i64, today: NaiveDate) -> Result<BotWorklist> {
    // The overdue marker did its job in the SLA pass.
    table.drop_columns(&[Column::Name(waybills::HOURS_LEFT)])?;

    // The portal injects a subheader as the first data row.
    table.remove_row(0);

    // Undated rows cannot be scheduled.
    let recvd_ix = table.resolve(Column::Name(waybills::RECVD_DATE))?;
    table.retain_rows(|row| !row[recvd_ix].is_blank());

    table.insert_column(waybills::STATUS, InsertAt::End, Cell::text(""))?;
    table.insert_column(waybills::REMARKS, InsertAt::End, Cell::text(""))?;
    table.insert_column(
        waybills::DAYS,
        InsertAt::At(waybills::DAYS_INSERT_AT),
        Cell::Int(0),
    )?;

    coerce::coerce(&mut table, Column::Name(waybills::RECVD_DATE), CellKind::Date)?;

    let recvd_ix = table.resolve(Column::Name(waybills::RECVD_DATE))?;
    let days_ix = table.resolve(Column::Name(waybills::DAYS))?;
    for row_ix in 0..table.n_rows() {
        // Coerced above; a non-date here is unreachable.
        let received = table.cell(row_ix, recvd_ix).and_then(Cell::as_date);
        if let Some(received) = received {
            table.set_cell(row_ix, days_ix, Cell::Int(dates::days_since(received, today)));
        }
    }

    table.retain_rows(|row| row[days_ix].as_int().is_some_and(|d| d >= day_sorter));
    table.sort_desc_by(Column::Name(waybills::DAYS))?;

    coerce::coerce(&mut table, Column::Name(waybills::PIECE_COUNT), CellKind::Int)?;
    coerce::coerce(&mut table, Column::Name(waybills::WEIGHT), CellKind::Int)?;

    let records = extract_records(&table)?;
    let highest_day = records.iter().map(|r| r.days_in_system).max();

    Ok(BotWorklist {
        records,
        day_sorter,
        highest_day,
    })
}

fn extract_records(table: &Table) -> Result<Vec<ShipmentRecord>> {
    let route = table.resolve(Column::Name(waybills::ROUTE))?;
    let awb = table.resolve(Column::Name(waybills::AWB))?;
    let goods = table.resolve(Column::Name(waybills::GOODS_DESC))?;
    let consignee = table.resolve(Column::Name(waybills::CONSIGNEE))?;
    let pieces = table.resolve(Column::Name(waybills::PIECE_COUNT))?;
    let weight = table.resolve(Column::Name(waybills::WEIGHT))?;
    let days = table.resolve(Column::Name(waybills::DAYS))?;
    let recvd = table.resolve(Column::Name(waybills::RECVD_DATE))?;
    let status = table.resolve(Column::Name(waybills::STATUS))?;
    let remarks = table.resolve(Column::Name(waybills::REMARKS))?;

    Ok(table
        .rows()
        .iter()
        .map(|row| ShipmentRecord {
            route: row[route].to_string(),
            awb: row[awb].to_string(),
            goods_description: row[goods].to_string(),
            consignee: row[consignee].to_string(),
            piece_count: row[pieces].as_int().unwrap_or(0),
            weight: row[weight].as_int().unwrap_or(0),
            hours_remaining_raw: None,
            received_date: row[recvd].as_date().unwrap_or_default(),
            days_in_system: row[days].as_int().unwrap_or(0),
            status: row[status].to_string(),
            remarks: row[remarks].to_string(),
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dates::format_form_date;
    use chrono::Days;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2023, 3, 25).unwrap()
    }

    /// Shaped table: a subheader row followed by one row per (route, recvd
    /// offset in days back, weight). `None` offset means no received date.
    fn shaped(rows: &[(&str, Option<u64>, &str)]) -> Table {
        let headers = vec![
            s!(waybills::ROUTE),
            s!(waybills::AWB),
            s!(waybills::GOODS_DESC),
            s!(waybills::CONSIGNEE),
            s!(waybills::PIECE_COUNT),
            s!(waybills::WEIGHT),
            s!(waybills::HOURS_LEFT),
            s!(waybills::RECVD_DATE),
        ];
        let mut all = vec![vec![
            Cell::text("Route"),
            Cell::text("AWB"),
            Cell::text("Goods"),
            Cell::text("Consignee"),
            Cell::text("Pcs"),
            Cell::text("Weight"),
            Cell::text("Hours"),
            Cell::text("Recvd"),
        ]];
        all.extend(rows.iter().map(|&(route, back, weight)| {
            let recvd = back
                .map(|b| format_form_date(today() - Days::new(b)))
                .unwrap_or_default();
            vec![
                Cell::text(route),
                Cell::text("204587"),
                Cell::text("DRY GOODS"),
                Cell::text("NORTHERN STORE"),
                Cell::text("2"),
                Cell::text(weight),
                Cell::text("-6"),
                Cell::text(recvd),
            ]
        }));
        Table::new(headers, all).unwrap()
    }

    #[test]
    fn keeps_only_rows_at_or_over_threshold_sorted_descending() {
        // days_in_system = offset + 1, so offsets 2/7/9/0 → days 3/8/10/1.
        let t = shaped(&[
            ("YFO", Some(2), "40"),
            ("YST", Some(7), "55"),
            ("YTH", Some(9), "61"),
            ("ZAC", Some(0), "12"),
        ]);
        let wl = filter(t, 8, today()).unwrap();

        let days: Vec<i64> = wl.records.iter().map(|r| r.days_in_system).collect();
        assert_eq!(days, vec![10, 8]);
        assert_eq!(wl.records[0].route, "YTH");
        assert_eq!(wl.highest_day, Some(10));
        assert_eq!(wl.highest_day_label(), "10");
        assert_eq!(wl.day_sorter, 8);
    }

    #[test]
    fn empty_surviving_set_reports_na() {
        let t = shaped(&[("YFO", Some(1), "40")]);
        let wl = filter(t, 8, today()).unwrap();
        assert!(wl.is_empty());
        assert_eq!(wl.highest_day, None);
        assert_eq!(wl.highest_day_label(), "N/A");
    }

    #[test]
    fn subheader_and_undated_rows_are_dropped() {
        let t = shaped(&[("YFO", None, "40"), ("YTH", Some(10), "61.4")]);
        let wl = filter(t, 8, today()).unwrap();
        assert_eq!(wl.records.len(), 1);
        let rec = &wl.records[0];
        assert_eq!(rec.route, "YTH");
        assert_eq!(rec.days_in_system, 11);
        assert_eq!(rec.weight, 61); // 61.4 rounds down
        assert_eq!(rec.piece_count, 2);
        assert_eq!(rec.status, "");
        assert_eq!(rec.remarks, "");
        assert_eq!(rec.hours_remaining_raw, None);
    }

    #[test]
    fn received_today_is_one_day_in_system() {
        let t = shaped(&[("YFO", Some(0), "40")]);
        let wl = filter(t, 1, today()).unwrap();
        assert_eq!(wl.records[0].days_in_system, 1);
    }
}
