// src/dates.rs
//
// Date arithmetic for the pipelines. The reference ("today") date is always
// injected by the caller — nothing in here reads the wall clock, so every
// computation is reproducible in tests.

use chrono::{Days, Months, NaiveDate};

/// The date format the portal's report forms use, e.g. `25-Mar-2023`.
pub const FORM_DATE_FMT: &str = "%d-%b-%Y";

/// Days a shipment has been in the system, counting the receipt day itself:
/// a shipment received on `reference` is 1 day old, not 0.
pub fn days_since(received: NaiveDate, reference: NaiveDate) -> i64 {
    (received - reference).num_days().abs() + 1
}

/// Start of the lookback window the scraper fills into the report form:
/// `reference` minus the configured months and days.
pub fn window_start(reference: NaiveDate, months_back: u32, days_back: u64) -> NaiveDate {
    reference - Months::new(months_back) - Days::new(days_back)
}

/// Render a date the way the portal's form fields expect it.
pub fn format_form_date(date: NaiveDate) -> String {
    date.format(FORM_DATE_FMT).to_string()
}
