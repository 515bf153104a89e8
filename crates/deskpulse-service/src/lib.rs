//! # deskpulse-service
//!
//! Dashboard logic for DeskPulse. Every pipeline here is a pure function of
//! a ticket table (or a filtered view of one) and, where SLA status is
//! involved, an explicit evaluation time.
//!
//! The [`DashboardSession`] bundles the loaded table with the dashboard
//! thresholds and is the object the API, the worker, and the CLI share.

pub mod aggregate;
pub mod alert;
pub mod dashboard;
pub mod filter;
pub mod report;
pub mod sla;

pub use aggregate::{
    CategoryCount, DailyCount, Dimension, FilterOptions, KpiSummary, SlaBucket, TrendSeries,
    WeekdayCount,
};
pub use alert::{AlertPayloadBuilder, CriticalEscalationPayload, SlaBreachPayload, SlackMessage};
pub use dashboard::{ChartData, DashboardSession};
pub use filter::{FilterCriteria, FilterParams, filter_tickets};
pub use report::{WeeklyReport, WeeklyReportService};
pub use sla::{CriticalEscalation, SlaEvaluation, SlaEvaluator, SlaWarning};
