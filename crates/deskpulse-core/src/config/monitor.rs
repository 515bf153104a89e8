//! Periodic alert monitor configuration.

use serde::{Deserialize, Serialize};

/// Schedules for the periodic SLA monitor and the weekly report.
///
/// Schedules use six-field cron syntax (seconds first).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonitorConfig {
    /// Whether the scheduler runs inside the server.
    #[serde(default = "default_true")]
    pub enabled: bool,
    /// Tick schedule for SLA warning and escalation checks.
    #[serde(default = "default_schedule")]
    pub schedule: String,
    /// Schedule for the weekly report workflow.
    #[serde(default = "default_weekly_report_schedule")]
    pub weekly_report_schedule: String,
}

impl Default for MonitorConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            schedule: default_schedule(),
            weekly_report_schedule: default_weekly_report_schedule(),
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_schedule() -> String {
    "*/30 * * * * *".to_string()
}

fn default_weekly_report_schedule() -> String {
    "0 0 8 * * 1".to_string()
}
