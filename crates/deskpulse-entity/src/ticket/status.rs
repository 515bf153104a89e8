//! Ticket lifecycle status.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use deskpulse_core::error::AppError;

/// Lifecycle status of a ticket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum TicketStatus {
    /// Logged, not yet picked up.
    Open,
    /// Assigned and being worked on.
    #[serde(rename = "In Progress")]
    InProgress,
    /// Fixed, awaiting confirmation.
    Resolved,
    /// Confirmed and closed.
    Closed,
    /// Waiting on the requester or a third party.
    Pending,
}

impl TicketStatus {
    /// Every status in lifecycle order.
    pub const ALL: [TicketStatus; 5] = [
        Self::Open,
        Self::InProgress,
        Self::Resolved,
        Self::Closed,
        Self::Pending,
    ];

    /// Whether the ticket has a resolution (and therefore a resolved date).
    pub fn is_resolved(&self) -> bool {
        matches!(self, Self::Resolved | Self::Closed)
    }

    /// Whether the ticket still counts against its SLA clock.
    pub fn is_active(&self) -> bool {
        matches!(self, Self::Open | Self::InProgress | Self::Pending)
    }

    /// Return the status label.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Open => "Open",
            Self::InProgress => "In Progress",
            Self::Resolved => "Resolved",
            Self::Closed => "Closed",
            Self::Pending => "Pending",
        }
    }
}

impl fmt::Display for TicketStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TicketStatus {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|st| {
                st.as_str().eq_ignore_ascii_case(wanted)
                    || st.as_str().replace(' ', "_").eq_ignore_ascii_case(wanted)
            })
            .ok_or_else(|| AppError::validation(format!("Unknown status '{s}'")))
    }
}
