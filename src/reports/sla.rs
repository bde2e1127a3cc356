// src/reports/sla.rs
//
// Past-SLA summary: which destinations have overdue freight waiting, and how
// much of it by weight. Consumes the shaped waybill table (see
// specs::waybills::shape) without mutating it — the bot pipeline takes the
// table afterwards.

use std::collections::HashMap;

use crate::error::{ReportError, Result};
use crate::specs::waybills;
use crate::table::{coerce, Column, Table};

/// Destination codes that report as one named super-group. Tagged data, not
/// branches: adding a group here is the whole change.
pub const ALIAS_GROUPS: &[(&str, &[&str])] = &[
    ("YST/WGK Locations", &["YST", "WGK"]),
    ("YTH Locations", &["ZAC", "XLB", "YTH", "XTL", "YBT", "XSI"]),
];

/// Destination-group → total overdue weight, ordered by descending weight.
/// Keys are either original route codes or one of the `ALIAS_GROUPS` names;
/// no weight is counted twice. Empty when nothing is past SLA — that is a
/// valid report, not an error.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SlaAggregate {
    groups: Vec<(String, i64)>,
}

impl SlaAggregate {
    pub fn groups(&self) -> &[(String, i64)] {
        &self.groups
    }

    pub fn weight_for(&self, group: &str) -> Option<i64> {
        self.groups
            .iter()
            .find(|(name, _)| name == group)
            .map(|&(_, w)| w)
    }

    /// Footer scalar for the report.
    pub fn total_weight(&self) -> i64 {
        self.groups.iter().map(|&(_, w)| w).sum()
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}

/// Build the past-SLA summary from the shaped waybill table.
pub fn aggregate(table: &Table) -> Result<SlaAggregate> {
    let route_ix = table.resolve(Column::Name(waybills::ROUTE))?;
    let weight_ix = table.resolve(Column::Name(waybills::WEIGHT))?;
    let hours_ix = table.resolve(Column::Name(waybills::HOURS_LEFT))?;

    // Group in first-seen order; the final sort is stable, so this order
    // breaks weight ties.
    let mut order: Vec<String> = Vec::new();
    let mut sums: HashMap<String, i64> = HashMap::new();

    for (row_ix, row) in table.rows().iter().enumerate() {
        // Past-SLA marker: a source-system artifact, not a signed number.
        let overdue = row[hours_ix]
            .to_string()
            .contains(waybills::PAST_SLA_MARKER);
        if !overdue {
            continue;
        }

        let weight = coerce::to_int(&row[weight_ix]).ok_or_else(|| ReportError::Coercion {
            row: row_ix,
            column: s!(waybills::WEIGHT),
            value: row[weight_ix].to_string(),
            target: "int",
        })?;

        let route = row[route_ix].to_string();
        if !sums.contains_key(&route) {
            order.push(route.clone());
        }
        *sums.entry(route).or_insert(0) += weight;
    }

    merge_aliases(&mut order, &mut sums);

    let mut groups: Vec<(String, i64)> = order
        .into_iter()
        .map(|name| {
            let w = sums[&name];
            (name, w)
        })
        .collect();
    groups.sort_by(|a, b| b.1.cmp(&a.1)); // stable: ties keep grouping order

    Ok(SlaAggregate { groups })
}

/// Collapse alias members into their canonical group. A group with no member
/// present in the data is never created.
fn merge_aliases(order: &mut Vec<String>, sums: &mut HashMap<String, i64>) {
    for &(canonical, members) in ALIAS_GROUPS {
        let mut total = 0i64;
        let mut seen = false;
        for &member in members {
            if let Some(w) = sums.remove(member) {
                total += w;
                seen = true;
            }
        }
        if !seen {
            continue;
        }
        order.retain(|name| !members.contains(&name.as_str()));
        order.push(s!(canonical));
        sums.insert(s!(canonical), total);
    }
}
