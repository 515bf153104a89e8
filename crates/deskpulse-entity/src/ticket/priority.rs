//! Ticket priority.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use deskpulse_core::error::AppError;

/// Urgency of a ticket. Ordered from least to most urgent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Priority {
    /// Routine request.
    Low,
    /// Normal business impact.
    Medium,
    /// Significant business impact.
    High,
    /// Outage or blocking issue.
    Critical,
}

impl Priority {
    /// Every priority, least urgent first.
    pub const ALL: [Priority; 4] = [Self::Low, Self::Medium, Self::High, Self::Critical];

    /// SLA target assigned to new tickets of this priority, in hours.
    pub fn default_sla_target_hours(&self) -> f64 {
        match self {
            Self::Low => 72.0,
            Self::Medium => 24.0,
            Self::High => 8.0,
            Self::Critical => 4.0,
        }
    }

    /// Return the priority label.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
            Self::Critical => "Critical",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Priority {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|p| p.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| AppError::validation(format!("Unknown priority '{s}'")))
    }
}
