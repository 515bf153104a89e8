//! Weekly report generation service.

use std::collections::BTreeMap;
use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};
use serde::Serialize;

use deskpulse_entity::{TicketStatus, TicketTable, TicketView};

use crate::aggregate::{Dimension, distribution, kpi_summary, round1};

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Generates the weekly ticket summary.
#[derive(Debug, Clone)]
pub struct WeeklyReportService {
    /// Loaded ticket table.
    table: Arc<TicketTable>,
}

/// Report period as calendar dates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportPeriod {
    pub start: String,
    pub end: String,
}

/// Headline metrics for the period.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportMetrics {
    pub total_tickets: usize,
    /// Tickets with status Resolved; Closed tickets are not counted.
    pub resolved_tickets: usize,
    /// Percent within SLA, one decimal; 0 for an empty week.
    pub sla_compliance: f64,
    /// Mean resolution hours, one decimal; 0 when nothing was resolved.
    pub avg_resolution_time: f64,
}

/// Weekly report data, sent as-is to the `weekly-report` workflow.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeeklyReport {
    pub period: ReportPeriod,
    pub metrics: ReportMetrics,
    pub by_priority: BTreeMap<String, usize>,
    pub by_department: BTreeMap<String, usize>,
    pub by_category: BTreeMap<String, usize>,
}

impl WeeklyReportService {
    /// Creates a new weekly report service.
    pub fn new(table: Arc<TicketTable>) -> Self {
        Self { table }
    }

    /// Generates a report over tickets created in the 7 days up to `now`.
    pub fn generate(&self, now: DateTime<Utc>) -> WeeklyReport {
        let start = now - Duration::days(7);
        let week: TicketView<'_> = self
            .table
            .iter()
            .filter(|t| t.created_date >= start && t.created_date <= now)
            .collect();

        // The compliance target does not affect the figures used here.
        let kpis = kpi_summary(&week, now, 0.0);

        WeeklyReport {
            period: ReportPeriod {
                start: start.format(DATE_FORMAT).to_string(),
                end: now.format(DATE_FORMAT).to_string(),
            },
            metrics: ReportMetrics {
                total_tickets: week.len(),
                resolved_tickets: week
                    .iter()
                    .filter(|t| t.status == TicketStatus::Resolved)
                    .count(),
                sla_compliance: kpis.sla_compliance_percent,
                avg_resolution_time: round1(kpis.avg_resolution_hours.unwrap_or(0.0)),
            },
            by_priority: counts(&week, Dimension::Priority),
            by_department: counts(&week, Dimension::Department),
            by_category: counts(&week, Dimension::Category),
        }
    }
}

fn counts(view: &TicketView<'_>, dimension: Dimension) -> BTreeMap<String, usize> {
    distribution(view, dimension)
        .into_iter()
        .map(|c| (c.label, c.count))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregate::fixtures::{at, open, resolved};
    use deskpulse_entity::Priority;

    #[test]
    fn test_only_last_seven_days_count() {
        let now = at(20, 12);
        let mut closed = resolved("T4", Priority::Medium, at(18, 0), 3);
        closed.status = TicketStatus::Closed;
        closed.category = "Email".to_string();

        let table = Arc::new(TicketTable::new(vec![
            open("T1", Priority::Low, at(1, 0)),
            resolved("T2", Priority::High, at(15, 0), 4),
            open("T3", Priority::Critical, at(20, 11)),
            closed,
        ]));

        let report = WeeklyReportService::new(table).generate(now);
        assert_eq!(report.period.start, "2025-03-13");
        assert_eq!(report.period.end, "2025-03-20");
        assert_eq!(report.metrics.total_tickets, 3);
        assert_eq!(report.metrics.resolved_tickets, 1);
        assert_eq!(report.metrics.sla_compliance, 100.0);
        assert_eq!(report.metrics.avg_resolution_time, 3.5);
        assert_eq!(report.by_priority.get("High"), Some(&1));
        assert_eq!(report.by_priority.get("Low"), None);
        assert_eq!(report.by_category.get("Email"), Some(&1));
        assert_eq!(report.by_department.get("IT"), Some(&3));
    }

    #[test]
    fn test_empty_week() {
        let report = WeeklyReportService::new(Arc::new(TicketTable::empty())).generate(at(20, 12));
        assert_eq!(report.metrics.total_tickets, 0);
        assert_eq!(report.metrics.sla_compliance, 0.0);
        assert_eq!(report.metrics.avg_resolution_time, 0.0);
        assert!(report.by_priority.is_empty());
    }
}
