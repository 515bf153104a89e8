//! Headline figures for the dashboard.

use chrono::{DateTime, Utc};
use serde::Serialize;

use deskpulse_entity::TicketView;

use super::{percentage, round1};

/// Summary figures shown above the charts.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct KpiSummary {
    pub total_tickets: usize,
    /// Open, In Progress, and Pending tickets.
    pub open_tickets: usize,
    /// Share of tickets within SLA, rounded to one decimal; 0 when there are none.
    pub sla_compliance_percent: f64,
    /// Mean resolution time over tickets that have one.
    pub avg_resolution_hours: Option<f64>,
    pub sla_target_percent: f64,
    pub target_met: bool,
}

pub fn kpi_summary(view: &TicketView<'_>, now: DateTime<Utc>, target_percent: f64) -> KpiSummary {
    let total = view.len();
    let open = view.iter().filter(|t| t.status.is_active()).count();
    let met = view.iter().filter(|t| t.sla_met(now)).count();
    let compliance = percentage(met, total).unwrap_or(0.0);

    let resolutions: Vec<f64> = view.iter().filter_map(|t| t.resolution_hours()).collect();
    let avg_resolution_hours = (!resolutions.is_empty())
        .then(|| round1(resolutions.iter().sum::<f64>() / resolutions.len() as f64));

    KpiSummary {
        total_tickets: total,
        open_tickets: open,
        sla_compliance_percent: round1(compliance),
        avg_resolution_hours,
        sla_target_percent: target_percent,
        target_met: total > 0 && compliance >= target_percent,
    }
}
