// src/config.rs
//
// Explicit passthrough configuration for one report run. These are the values
// the surrounding application persists in its settings store and hands to the
// pipelines; the core never reads ambient/global state. Beyond type, nothing
// here is validated — airport codes etc. are the settings layer's problem.

use chrono::NaiveDate;

use crate::dates;

#[derive(Clone, Debug, PartialEq)]
pub struct ReportConfig {
    /// Minimum days-in-system for a row to appear on the bot worklist.
    pub day_sorter: i64,
    /// Origin airport code filled into the waybills report form.
    pub from_airport: String,
    /// Destination airport code, empty meaning "all".
    pub to_airport: String,
    /// Lookback window for the report form, months component.
    pub months_back: u32,
    /// Lookback window, days component.
    pub days_back: u64,
    /// Consignee keyword the Home Delivery AWB search filters on.
    pub keyword: String,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            day_sorter: 8,
            from_airport: s!("WPG"),
            to_airport: s!(),
            months_back: 3,
            days_back: 0,
            keyword: s!(),
        }
    }
}

impl ReportConfig {
    /// Form-ready start of the lookback window relative to `reference`.
    pub fn window_start_form_date(&self, reference: NaiveDate) -> String {
        dates::format_form_date(dates::window_start(
            reference,
            self.months_back,
            self.days_back,
        ))
    }
}
