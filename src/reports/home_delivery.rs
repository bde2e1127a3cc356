// src/reports/home_delivery.rs
//
// Home Delivery report: after the scraper has looked every AWB up on the
// portal, split them into shipped and not-shipped sheets, each with its own
// column shape (specs::awb_search).

use chrono::NaiveDate;

use crate::error::{ReportError, Result};
use crate::specs::awb_search;
use crate::table::{Cell, Column, Table};

/// One AWB from the search results, enriched by the flight-status lookup.
/// `awb_number` is stored bare (prefix stripped); the report shapes put the
/// prefix back.
#[derive(Clone, Debug, PartialEq)]
pub struct AwbRecord {
    pub awb_number: String,
    pub consignee: String,
    pub community: String,
    pub piece_count: i64,
    /// `None` means the upstream lookup never ran — a contract violation the
    /// classifier refuses to paper over.
    pub flight_status: Option<String>,
    pub flight_number: Option<String>,
    pub flight_date: Option<NaiveDate>,
}

impl AwbRecord {
    /// Record fresh off the search results, before the status lookup.
    pub fn new(awb_number: &str, consignee: &str, community: &str, piece_count: i64) -> Self {
        Self {
            awb_number: awb_search::strip_prefix(awb_number),
            consignee: s!(consignee),
            community: s!(community),
            piece_count,
            flight_status: None,
            flight_number: None,
            flight_date: None,
        }
    }
}

/// The two sheets of the Home Delivery report, shaped and ready for export.
#[derive(Clone, Debug, PartialEq)]
pub struct HomeDeliveryReport {
    pub shipped: Table,
    pub not_shipped: Table,
}

/// Partition looked-up AWBs into shipped / not shipped and shape each sheet.
pub fn classify(records: Vec<AwbRecord>) -> Result<HomeDeliveryReport> {
    let mut shipped: Vec<AwbRecord> = Vec::new();
    let mut not_shipped: Vec<AwbRecord> = Vec::new();

    for record in records {
        let status = record
            .flight_status
            .as_deref()
            .ok_or_else(|| ReportError::MissingColumn {
                name: format!("flight status for AWB {}", record.awb_number),
            })?;
        if status.contains(awb_search::SHIPPED_MARKER) {
            shipped.push(record);
        } else {
            not_shipped.push(record);
        }
    }

    Ok(HomeDeliveryReport {
        shipped: shape_shipped(&shipped)?,
        not_shipped: shape_not_shipped(&not_shipped)?,
    })
}

/// Shipped sheet: status column dropped (everything here is allocated),
/// flight numbers upper-cased, newest flights first, canonical column order.
fn shape_shipped(records: &[AwbRecord]) -> Result<Table> {
    let headers = vec![
        s!(awb_search::STATUS),
        s!(awb_search::RAW_FLIGHT_NO),
        s!(awb_search::RAW_FLIGHT_DATE),
        s!(awb_search::COMMUNITY),
        s!(awb_search::AWB_NO),
        s!(awb_search::PIECES),
        s!(awb_search::CONSIGNEE),
    ];

    let mut rows = Vec::with_capacity(records.len());
    for r in records {
        let flight_no = r
            .flight_number
            .as_deref()
            .ok_or_else(|| ReportError::MissingColumn {
                name: format!("flight number for AWB {}", r.awb_number),
            })?;
        let flight_date = r.flight_date.ok_or_else(|| ReportError::MissingColumn {
            name: format!("flight date for AWB {}", r.awb_number),
        })?;
        rows.push(vec![
            Cell::text(r.flight_status.clone().unwrap_or_default()),
            Cell::text(flight_no.to_uppercase()),
            Cell::Date(flight_date),
            Cell::text(&*r.community),
            Cell::text(awb_search::with_prefix(&r.awb_number)),
            Cell::Int(r.piece_count),
            Cell::text(&*r.consignee),
        ]);
    }

    let mut t = Table::new(headers, rows)?;
    t.drop_columns(&[Column::Name(awb_search::STATUS)])?;
    t.rename_columns(&[
        (Column::Name(awb_search::RAW_FLIGHT_NO), awb_search::FLIGHT_NO),
        (Column::Name(awb_search::RAW_FLIGHT_DATE), awb_search::FLIGHT_DATE),
    ])?;
    t.rearrange_columns(awb_search::SHIPPED_ORDER)?;
    t.sort_desc_by(Column::Name(awb_search::FLIGHT_DATE))?;
    Ok(t)
}

/// Not-shipped sheet: just the waybill, where it was going, and why it is
/// still here.
fn shape_not_shipped(records: &[AwbRecord]) -> Result<Table> {
    let headers = vec![
        s!(awb_search::AWB_NO),
        s!(awb_search::COMMUNITY),
        s!(awb_search::STATUS),
    ];
    let rows = records
        .iter()
        .map(|r| {
            vec![
                Cell::text(awb_search::with_prefix(&r.awb_number)),
                Cell::text(&*r.community),
                Cell::text(r.flight_status.clone().unwrap_or_default()),
            ]
        })
        .collect();

    let mut t = Table::new(headers, rows)?;
    // Shape is already canonical; rearrange keeps it honest if the build
    // order above ever drifts.
    t.rearrange_columns(awb_search::NON_SHIPPED_ORDER)?;
    Ok(t)
}
