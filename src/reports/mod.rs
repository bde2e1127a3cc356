// src/reports/mod.rs
//! Report pipelines and the datasets they hand to the export collaborator.
//!
//! Call chain:
//! ```text
//! orchestrator → build_sla_bot_report(html, config, today)
//!                  → table::parse → specs::waybills::shape
//!                  → sla::aggregate + bot::filter
//! orchestrator → build_home_delivery_report(records)
//!                  → home_delivery::classify
//! ```
//! Every input is explicit (scraped HTML string, configuration, reference
//! date); one call is one unit of work with no partial state. Output datasets
//! are handed off once and never mutated afterwards.

pub mod bot;
pub mod home_delivery;
pub mod sla;

use chrono::NaiveDate;

pub use bot::{BotWorklist, ShipmentRecord};
pub use home_delivery::{AwbRecord, HomeDeliveryReport};
pub use sla::SlaAggregate;

use crate::config::ReportConfig;
use crate::error::Result;
use crate::specs::waybills;
use crate::table;

/// Everything the SLA/Bot report export needs.
#[derive(Clone, Debug, PartialEq)]
pub struct SlaBotReport {
    pub sla: SlaAggregate,
    pub bot: BotWorklist,
}

/// Full SLA/Bot pipeline over one scraped waybills-to-ship table.
pub fn build_sla_bot_report(
    html: &str,
    config: &ReportConfig,
    today: NaiveDate,
) -> Result<SlaBotReport> {
    let raw = table::parse::parse_table(html)?;
    let shaped = waybills::shape(raw)?;

    let sla = sla::aggregate(&shaped)?;
    let bot = bot::filter(shaped, config.day_sorter, today)?;

    Ok(SlaBotReport { sla, bot })
}

/// Full Home Delivery pipeline over lookup-enriched AWB records.
pub fn build_home_delivery_report(records: Vec<AwbRecord>) -> Result<HomeDeliveryReport> {
    home_delivery::classify(records)
}
