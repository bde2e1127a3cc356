// src/specs/awb_search.rs
//
// Knowledge about the portal's AWB search page used by the Home Delivery
// report: the carrier prefix the search form refuses, the status text that
// marks a shipped AWB, and the column shapes of the two output sheets.

/* ---------------- column names ---------------- */

pub const AWB_NO: &str = "AWB No.";
pub const CONSIGNEE: &str = "Consignee";
pub const COMMUNITY: &str = "Community";
pub const PIECES: &str = "No. of Pieces";
pub const STATUS: &str = "Status";
pub const FLIGHT_NO: &str = "Flight No.";
pub const FLIGHT_DATE: &str = "Date";

/// Working names the classifier builds with before the partition-specific
/// renames; the search results carry them in lowercase.
pub const RAW_FLIGHT_NO: &str = "flight_no";
pub const RAW_FLIGHT_DATE: &str = "flight_date";

/* ---------------- vendor quirks ---------------- */

/// Carrier prefix on every waybill number. The search form wants the bare
/// number, the report must show the full one.
pub const AWB_PREFIX: &str = "518-";

/// A flight-status text containing this marks the AWB as shipped
/// (e.g. `"Allocated - Flight 123"`).
pub const SHIPPED_MARKER: &str = "Allocated";

/// Column order of the "Home Delivery Sent" sheet.
pub const SHIPPED_ORDER: &[&str] = &[FLIGHT_DATE, FLIGHT_NO, COMMUNITY, AWB_NO, PIECES, CONSIGNEE];

/// Column order of the "Home Delivery NOT Sent" sheet. Consignee, flight and
/// piece data are unreliable for unshipped items and never shown.
pub const NON_SHIPPED_ORDER: &[&str] = &[AWB_NO, COMMUNITY, STATUS];

/// Bare number for the search form.
pub fn strip_prefix(awb: &str) -> String {
    awb.trim().trim_start_matches(AWB_PREFIX).to_string()
}

/// Full waybill number for the report.
pub fn with_prefix(awb: &str) -> String {
    if awb.starts_with(AWB_PREFIX) {
        s!(awb)
    } else {
        format!("{}{}", AWB_PREFIX, awb)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prefix_round_trip() {
        assert_eq!(strip_prefix("518-443322"), "443322");
        assert_eq!(strip_prefix("443322"), "443322");
        assert_eq!(with_prefix("443322"), "518-443322");
        assert_eq!(with_prefix("518-443322"), "518-443322");
    }
}
