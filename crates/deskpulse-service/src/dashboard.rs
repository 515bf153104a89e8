//! Dashboard session.
//!
//! Owns the loaded ticket table and the presentation thresholds, and runs
//! the filter and aggregation pipelines for each chart. One session is
//! built at startup and shared by every trigger.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::Serialize;

use deskpulse_core::config::dashboard::DashboardConfig;
use deskpulse_entity::{TicketTable, TicketView};

use crate::aggregate::{
    self, CategoryCount, Dimension, FilterOptions, KpiSummary, SlaBucket, TrendSeries,
    WeekdayCount,
};
use crate::filter::{FilterCriteria, filter_tickets};
use crate::report::{WeeklyReport, WeeklyReportService};
use crate::sla::{SlaEvaluation, SlaEvaluator};

/// A chart series, or the explicit signal that the filters selected nothing.
///
/// Serializes as `{"status":"no_data"}` or `{"status":"ok","data":...}`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", content = "data", rename_all = "snake_case")]
pub enum ChartData<T> {
    NoData,
    Ok(T),
}

impl<T> ChartData<T> {
    pub fn is_no_data(&self) -> bool {
        matches!(self, Self::NoData)
    }

    /// The series, if there is one.
    pub fn data(self) -> Option<T> {
        match self {
            Self::NoData => None,
            Self::Ok(data) => Some(data),
        }
    }
}

/// The shared dashboard context.
#[derive(Debug, Clone)]
pub struct DashboardSession {
    table: Arc<TicketTable>,
    config: DashboardConfig,
    evaluator: SlaEvaluator,
    reports: WeeklyReportService,
}

impl DashboardSession {
    /// Creates a session over a loaded table.
    pub fn new(table: Arc<TicketTable>, config: DashboardConfig) -> Self {
        Self {
            reports: WeeklyReportService::new(Arc::clone(&table)),
            table,
            config,
            evaluator: SlaEvaluator::new(),
        }
    }

    pub fn table(&self) -> &TicketTable {
        &self.table
    }

    pub fn config(&self) -> &DashboardConfig {
        &self.config
    }

    /// Headline figures over the filtered tickets. Zero-valued when nothing matches.
    pub fn kpis(&self, criteria: &FilterCriteria, now: DateTime<Utc>) -> KpiSummary {
        let view = self.filter(criteria);
        aggregate::kpi_summary(&view, now, self.config.sla_target_percent)
    }

    pub fn filter_options(&self) -> FilterOptions {
        aggregate::filter_options(&self.table)
    }

    pub fn trends(&self, criteria: &FilterCriteria) -> ChartData<TrendSeries> {
        self.chart(criteria, aggregate::trend_series)
    }

    pub fn distribution(
        &self,
        criteria: &FilterCriteria,
        dimension: Dimension,
    ) -> ChartData<Vec<CategoryCount>> {
        self.chart(criteria, |view| aggregate::distribution(view, dimension))
    }

    pub fn sla_compliance(
        &self,
        criteria: &FilterCriteria,
        now: DateTime<Utc>,
    ) -> ChartData<Vec<SlaBucket>> {
        let target = self.config.sla_target_percent;
        self.chart(criteria, |view| aggregate::sla_by_priority(view, now, target))
    }

    pub fn weekday(&self, criteria: &FilterCriteria) -> ChartData<Vec<WeekdayCount>> {
        self.chart(criteria, aggregate::weekday_distribution)
    }

    /// SLA scans over the whole table, ignoring any dashboard filter.
    pub fn evaluate_sla(&self, now: DateTime<Utc>) -> SlaEvaluation {
        self.evaluator.evaluate(&self.table, now)
    }

    pub fn weekly_report(&self, now: DateTime<Utc>) -> WeeklyReport {
        self.reports.generate(now)
    }

    fn filter(&self, criteria: &FilterCriteria) -> TicketView<'_> {
        let view = filter_tickets(self.table.as_ref(), criteria);
        tracing::debug!(
            selected = view.len(),
            total = self.table.len(),
            "Applied dashboard filter"
        );
        view
    }

    fn chart<T>(
        &self,
        criteria: &FilterCriteria,
        reduce: impl FnOnce(&TicketView<'_>) -> T,
    ) -> ChartData<T> {
        let view = self.filter(criteria);
        if view.is_empty() {
            ChartData::NoData
        } else {
            ChartData::Ok(reduce(&view))
        }
    }
}
