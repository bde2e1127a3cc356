// tests/home_delivery_report.rs
//
// End-to-end run of the Home Delivery pipeline over lookup-enriched AWB
// records, checking both sheet shapes and the partition rule.

use chrono::NaiveDate;

use waybill_report::reports::{build_home_delivery_report, AwbRecord};
use waybill_report::table::Cell;

fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).unwrap()
}

fn record(
    awb: &str,
    consignee: &str,
    community: &str,
    pieces: i64,
    status: &str,
    flight: Option<(&str, NaiveDate)>,
) -> AwbRecord {
    let mut r = AwbRecord::new(awb, consignee, community, pieces);
    r.flight_status = Some(String::from(status));
    if let Some((no, date)) = flight {
        r.flight_number = Some(String::from(no));
        r.flight_date = Some(date);
    }
    r
}

#[test]
fn report_splits_sent_and_not_sent_sheets() {
    let report = build_home_delivery_report(vec![
        record("518-300100", "A PERSON", "YTH", 3, "Allocated - Flight 123", Some(("pw204", d(2023, 3, 21)))),
        record("518-300101", "B PERSON", "YST", 1, "Pending", None),
        record("518-300102", "C PERSON", "XSI", 2, "Allocated", Some(("pw119", d(2023, 3, 23)))),
        record("518-300103", "D PERSON", "ZAC", 4, "On Hold - storage", None),
    ])
    .unwrap();

    // Sent sheet: canonical column order, newest flight first, prefixes back,
    // flight numbers upper-cased.
    assert_eq!(
        report.shipped.headers(),
        &[
            String::from("Date"),
            String::from("Flight No."),
            String::from("Community"),
            String::from("AWB No."),
            String::from("No. of Pieces"),
            String::from("Consignee"),
        ]
    );
    assert_eq!(report.shipped.n_rows(), 2);
    assert_eq!(report.shipped.cell(0, 0), Some(&Cell::Date(d(2023, 3, 23))));
    assert_eq!(report.shipped.cell(0, 1), Some(&Cell::text("PW119")));
    assert_eq!(report.shipped.cell(0, 3), Some(&Cell::text("518-300102")));
    assert_eq!(report.shipped.cell(1, 1), Some(&Cell::text("PW204")));
    assert_eq!(report.shipped.cell(1, 4), Some(&Cell::Int(3)));

    // Not-sent sheet: waybill, destination and status only.
    assert_eq!(
        report.not_shipped.headers(),
        &[String::from("AWB No."), String::from("Community"), String::from("Status")]
    );
    assert_eq!(report.not_shipped.n_rows(), 2);
    assert_eq!(report.not_shipped.cell(0, 0), Some(&Cell::text("518-300101")));
    assert_eq!(report.not_shipped.cell(1, 2), Some(&Cell::text("On Hold - storage")));
}

#[test]
fn lookup_gap_fails_loudly() {
    let records = vec![
        record("518-300200", "A", "YTH", 1, "Allocated", Some(("pw1", d(2023, 3, 20)))),
        AwbRecord::new("518-300201", "B", "YST", 1), // status never looked up
    ];
    let err = build_home_delivery_report(records).unwrap_err();
    assert!(err.to_string().contains("300201"));
}

#[test]
fn empty_input_produces_two_empty_sheets() {
    let report = build_home_delivery_report(Vec::new()).unwrap();
    assert_eq!(report.shipped.n_rows(), 0);
    assert_eq!(report.not_shipped.n_rows(), 0);
    // Shapes hold even with no rows.
    assert_eq!(report.shipped.n_cols(), 6);
    assert_eq!(report.not_shipped.n_cols(), 3);
}
