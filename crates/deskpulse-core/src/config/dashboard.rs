//! Dashboard thresholds.

use serde::{Deserialize, Serialize};

/// Presentation thresholds applied to aggregation results.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardConfig {
    /// SLA compliance target in percent; buckets below it are flagged.
    #[serde(default = "default_sla_target")]
    pub sla_target_percent: f64,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            sla_target_percent: default_sla_target(),
        }
    }
}

fn default_sla_target() -> f64 {
    95.0
}
