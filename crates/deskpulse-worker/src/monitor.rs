//! Alert monitor: one SLA evaluation and delivery round per tick.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::Serialize;

use deskpulse_core::traits::dispatcher::{DeliveryReceipt, NotificationDispatcher};
use deskpulse_service::alert::workflows;
use deskpulse_service::{AlertPayloadBuilder, DashboardSession};

/// What happened to one payload during a monitor run.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "outcome", content = "detail", rename_all = "snake_case")]
pub enum AlertOutcome {
    /// The run did not evaluate (integration unavailable or no tickets).
    Skipped,
    /// Evaluation found nothing for this workflow.
    NothingToSend,
    /// The payload was accepted.
    Delivered(DeliveryReceipt),
    /// Delivery failed; the message says why.
    Failed(String),
}

impl AlertOutcome {
    pub fn is_failure(&self) -> bool {
        matches!(self, Self::Failed(_))
    }
}

/// Summary of one monitor run.
#[derive(Debug, Clone, Serialize)]
pub struct MonitorReport {
    pub evaluated_at: DateTime<Utc>,
    /// Whether the integration answered its health probe.
    pub available: bool,
    pub warnings: usize,
    pub escalations: usize,
    pub sla_breach: AlertOutcome,
    pub critical_escalation: AlertOutcome,
}

/// Evaluates SLA state and forwards alerts through a dispatcher.
///
/// Stateless between runs: every call recomputes from the current table.
#[derive(Debug, Clone)]
pub struct AlertMonitor {
    /// Shared dashboard context.
    session: Arc<DashboardSession>,
    /// Outbound delivery.
    dispatcher: Arc<dyn NotificationDispatcher>,
}

impl AlertMonitor {
    /// Creates a new alert monitor.
    pub fn new(session: Arc<DashboardSession>, dispatcher: Arc<dyn NotificationDispatcher>) -> Self {
        Self {
            session,
            dispatcher,
        }
    }

    /// Run one monitor round as of `now`. Never fails; delivery problems
    /// are reported in the returned [`MonitorReport`].
    pub async fn run_once(&self, now: DateTime<Utc>) -> MonitorReport {
        let available = self.dispatcher.available().await;
        if !available || self.session.table().is_empty() {
            tracing::debug!(available, "Alert monitor skipped");
            return MonitorReport {
                evaluated_at: now,
                available,
                warnings: 0,
                escalations: 0,
                sla_breach: AlertOutcome::Skipped,
                critical_escalation: AlertOutcome::Skipped,
            };
        }

        let evaluation = self.session.evaluate_sla(now);
        let sla_breach = self
            .deliver(
                workflows::SLA_BREACH_ALERT,
                AlertPayloadBuilder::sla_breach(&evaluation),
            )
            .await;
        let critical_escalation = self
            .deliver(
                workflows::CRITICAL_ESCALATION,
                AlertPayloadBuilder::critical_escalation(&evaluation),
            )
            .await;

        tracing::info!(
            warnings = evaluation.warnings.len(),
            escalations = evaluation.escalations.len(),
            "Alert monitor run complete"
        );

        MonitorReport {
            evaluated_at: now,
            available,
            warnings: evaluation.warnings.len(),
            escalations: evaluation.escalations.len(),
            sla_breach,
            critical_escalation,
        }
    }

    /// Build the weekly report as of `now` and send it.
    pub async fn send_weekly_report(&self, now: DateTime<Utc>) -> AlertOutcome {
        let report = self.session.weekly_report(now);
        self.deliver(workflows::WEEKLY_REPORT, Some(report)).await
    }

    async fn deliver<T: Serialize>(&self, workflow: &str, payload: Option<T>) -> AlertOutcome {
        let Some(payload) = payload else {
            return AlertOutcome::NothingToSend;
        };
        let body = match serde_json::to_value(&payload) {
            Ok(body) => body,
            Err(e) => return AlertOutcome::Failed(format!("Failed to encode payload: {e}")),
        };

        match self.dispatcher.dispatch(workflow, &body).await {
            Ok(receipt) => AlertOutcome::Delivered(receipt),
            Err(e) => {
                tracing::warn!(workflow, "Alert delivery failed: {e}");
                AlertOutcome::Failed(e.to_string())
            }
        }
    }
}
