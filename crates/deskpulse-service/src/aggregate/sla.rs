//! SLA compliance per priority.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::Serialize;

use deskpulse_entity::{Priority, TicketView};

use super::{percentage, round1};

/// Compliance for one priority.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SlaBucket {
    pub priority: Priority,
    /// Tickets in the bucket.
    pub total: usize,
    /// Tickets within their SLA at evaluation time.
    pub met: usize,
    /// `met / total * 100`, rounded to one decimal. Always within `[0, 100]`.
    pub percentage: f64,
    /// Whether the unrounded percentage is under the dashboard target.
    pub below_target: bool,
}

/// Group by priority and compute the share of tickets within SLA at `now`.
///
/// Buckets are ordered from Low to Critical; a priority with no tickets is
/// omitted.
pub fn sla_by_priority(
    view: &TicketView<'_>,
    now: DateTime<Utc>,
    target_percent: f64,
) -> Vec<SlaBucket> {
    let mut groups: BTreeMap<Priority, (usize, usize)> = BTreeMap::new();
    for ticket in view {
        let (total, met) = groups.entry(ticket.priority).or_default();
        *total += 1;
        if ticket.sla_met(now) {
            *met += 1;
        }
    }

    groups
        .into_iter()
        .filter_map(|(priority, (total, met))| {
            percentage(met, total).map(|pct| SlaBucket {
                priority,
                total,
                met,
                percentage: round1(pct),
                below_target: pct < target_percent,
            })
        })
        .collect()
}
