//! Periodic reports.

pub mod weekly;

pub use weekly::{ReportMetrics, ReportPeriod, WeeklyReport, WeeklyReportService};
