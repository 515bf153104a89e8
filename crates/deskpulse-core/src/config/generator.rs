//! Sample-data generator configuration.

use serde::{Deserialize, Serialize};

/// Settings for synthesizing sample ticket data.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratorConfig {
    /// Number of tickets to generate.
    #[serde(default = "default_tickets")]
    pub tickets: usize,
    /// Fixed RNG seed for reproducible output.
    #[serde(default)]
    pub seed: Option<u64>,
    /// How far back creation dates may reach, in days.
    #[serde(default = "default_lookback_days")]
    pub lookback_days: i64,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            tickets: default_tickets(),
            seed: None,
            lookback_days: default_lookback_days(),
        }
    }
}

fn default_tickets() -> usize {
    1000
}

fn default_lookback_days() -> i64 {
    182
}
