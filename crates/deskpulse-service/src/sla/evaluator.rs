//! Warning and escalation scans over the full ticket table.

use chrono::{DateTime, Utc};
use serde::Serialize;

use deskpulse_entity::{Priority, Ticket, TicketStatus, TicketTable};

/// Fraction of the SLA target after which an active ticket is flagged.
pub const WARNING_THRESHOLD: f64 = 0.8;

/// An active ticket that has used most of its SLA allowance.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SlaWarning {
    pub ticket_id: String,
    pub title: String,
    pub priority: Priority,
    pub department: String,
    pub hours_elapsed: f64,
    pub sla_target: f64,
    /// Negative once the target has passed.
    pub time_remaining: f64,
    pub assignee: Option<String>,
}

/// An unresolved critical ticket past its SLA target.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CriticalEscalation {
    pub ticket_id: String,
    pub title: String,
    pub department: String,
    pub assignee: Option<String>,
    pub hours_overdue: f64,
    pub requester: String,
}

/// Output of one evaluation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SlaEvaluation {
    pub evaluated_at: DateTime<Utc>,
    pub warnings: Vec<SlaWarning>,
    pub escalations: Vec<CriticalEscalation>,
}

impl SlaEvaluation {
    pub fn is_clear(&self) -> bool {
        self.warnings.is_empty() && self.escalations.is_empty()
    }
}

/// Stateless SLA rule engine.
///
/// Both scans read the table as of `now` and may report the same ticket.
#[derive(Debug, Clone, Copy, Default)]
pub struct SlaEvaluator;

impl SlaEvaluator {
    pub fn new() -> Self {
        Self
    }

    /// Run both scans.
    pub fn evaluate(&self, table: &TicketTable, now: DateTime<Utc>) -> SlaEvaluation {
        let evaluation = SlaEvaluation {
            evaluated_at: now,
            warnings: self.warnings(table, now),
            escalations: self.escalations(table, now),
        };
        tracing::debug!(
            warnings = evaluation.warnings.len(),
            escalations = evaluation.escalations.len(),
            "SLA evaluation complete"
        );
        evaluation
    }

    /// Open, In Progress, and Pending tickets at or beyond the warning threshold.
    pub fn warnings(&self, table: &TicketTable, now: DateTime<Utc>) -> Vec<SlaWarning> {
        table
            .iter()
            .filter(|t| t.status.is_active())
            .filter_map(|t| warning(t, now))
            .collect()
    }

    /// Critical Open or In Progress tickets whose SLA is no longer met.
    pub fn escalations(&self, table: &TicketTable, now: DateTime<Utc>) -> Vec<CriticalEscalation> {
        table
            .iter()
            .filter(|t| t.priority == Priority::Critical)
            .filter(|t| matches!(t.status, TicketStatus::Open | TicketStatus::InProgress))
            .filter(|t| !t.sla_met(now))
            .map(|t| CriticalEscalation {
                ticket_id: t.ticket_id.clone(),
                title: t.title.clone(),
                department: t.department.clone(),
                assignee: t.assignee.clone(),
                hours_overdue: t.hours_elapsed(now) - t.sla_target_hours,
                requester: t.requester.clone(),
            })
            .collect()
    }
}

fn warning(ticket: &Ticket, now: DateTime<Utc>) -> Option<SlaWarning> {
    let hours_elapsed = ticket.hours_elapsed(now);
    (hours_elapsed >= WARNING_THRESHOLD * ticket.sla_target_hours).then(|| SlaWarning {
        ticket_id: ticket.ticket_id.clone(),
        title: ticket.title.clone(),
        priority: ticket.priority,
        department: ticket.department.clone(),
        hours_elapsed,
        sla_target: ticket.sla_target_hours,
        time_remaining: ticket.sla_target_hours - hours_elapsed,
        assignee: ticket.assignee.clone(),
    })
}
