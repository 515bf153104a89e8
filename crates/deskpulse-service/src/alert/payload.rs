//! Payload shapes and their builders.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::aggregate::round1;
use crate::sla::{CriticalEscalation, SlaEvaluation, SlaWarning};

/// Channel used when a Slack message does not name one.
pub const DEFAULT_SLACK_CHANNEL: &str = "#it-support";

/// Body for the `sla-breach-alert` workflow.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SlaBreachPayload {
    pub alerts: Vec<SlaWarning>,
    pub timestamp: DateTime<Utc>,
    pub total_warnings: usize,
}

/// Body for the `critical-escalation` workflow.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CriticalEscalationPayload {
    pub tickets: Vec<CriticalEscalation>,
    pub timestamp: DateTime<Utc>,
    pub count: usize,
}

/// Body for the `slack-notification` workflow.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SlackMessage {
    pub message: String,
    pub channel: String,
    pub timestamp: DateTime<Utc>,
}

/// Builds workflow payloads. Construction never fails.
#[derive(Debug, Clone, Copy, Default)]
pub struct AlertPayloadBuilder;

impl AlertPayloadBuilder {
    /// The breach payload, or `None` when there are no warnings.
    ///
    /// Hour figures are rounded to one decimal.
    pub fn sla_breach(evaluation: &SlaEvaluation) -> Option<SlaBreachPayload> {
        if evaluation.warnings.is_empty() {
            return None;
        }
        let alerts: Vec<SlaWarning> = evaluation
            .warnings
            .iter()
            .map(|w| SlaWarning {
                hours_elapsed: round1(w.hours_elapsed),
                time_remaining: round1(w.time_remaining),
                ..w.clone()
            })
            .collect();
        Some(SlaBreachPayload {
            total_warnings: alerts.len(),
            alerts,
            timestamp: evaluation.evaluated_at,
        })
    }

    /// The escalation payload, or `None` when no critical ticket is overdue.
    pub fn critical_escalation(evaluation: &SlaEvaluation) -> Option<CriticalEscalationPayload> {
        if evaluation.escalations.is_empty() {
            return None;
        }
        let tickets: Vec<CriticalEscalation> = evaluation
            .escalations
            .iter()
            .map(|e| CriticalEscalation {
                hours_overdue: round1(e.hours_overdue),
                ..e.clone()
            })
            .collect();
        Some(CriticalEscalationPayload {
            count: tickets.len(),
            tickets,
            timestamp: evaluation.evaluated_at,
        })
    }

    pub fn slack(message: impl Into<String>, channel: Option<&str>, now: DateTime<Utc>) -> SlackMessage {
        SlackMessage {
            message: message.into(),
            channel: channel
                .filter(|c| !c.trim().is_empty())
                .unwrap_or(DEFAULT_SLACK_CHANNEL)
                .to_string(),
            timestamp: now,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use deskpulse_entity::Priority;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 5, 20, 12, 0, 0).unwrap()
    }

    fn evaluation(warnings: Vec<SlaWarning>, escalations: Vec<CriticalEscalation>) -> SlaEvaluation {
        SlaEvaluation {
            evaluated_at: now(),
            warnings,
            escalations,
        }
    }

    fn warning() -> SlaWarning {
        SlaWarning {
            ticket_id: "TKT-000101".to_string(),
            title: "VPN down".to_string(),
            priority: Priority::Critical,
            department: "IT".to_string(),
            hours_elapsed: 10.04,
            sla_target: 4.0,
            time_remaining: -6.04,
            assignee: None,
        }
    }

    #[test]
    fn test_empty_sets_mean_nothing_to_send() {
        let eval = evaluation(Vec::new(), Vec::new());
        assert!(AlertPayloadBuilder::sla_breach(&eval).is_none());
        assert!(AlertPayloadBuilder::critical_escalation(&eval).is_none());
    }

    #[test]
    fn test_breach_payload_shape() {
        let payload = AlertPayloadBuilder::sla_breach(&evaluation(vec![warning()], Vec::new())).unwrap();
        assert_eq!(payload.total_warnings, 1);
        assert_eq!(payload.alerts[0].hours_elapsed, 10.0);
        assert_eq!(payload.alerts[0].time_remaining, -6.0);

        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(json["total_warnings"], 1);
        assert_eq!(json["alerts"][0]["ticket_id"], "TKT-000101");
        assert_eq!(json["alerts"][0]["priority"], "Critical");
        assert!(json["alerts"][0]["assignee"].is_null());
        assert!(json["timestamp"].as_str().unwrap().starts_with("2025-05-20T12:00:00"));
    }

    #[test]
    fn test_escalation_payload_shape() {
        let escalation = CriticalEscalation {
            ticket_id: "TKT-000102".to_string(),
            title: "Core switch failure".to_string(),
            department: "Operations".to_string(),
            assignee: Some("Wen Zhang".to_string()),
            hours_overdue: 6.04,
            requester: "Olga Varga".to_string(),
        };
        let payload =
            AlertPayloadBuilder::critical_escalation(&evaluation(Vec::new(), vec![escalation])).unwrap();
        assert_eq!(payload.count, 1);
        assert_eq!(payload.tickets[0].hours_overdue, 6.0);

        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(json["tickets"][0]["requester"], "Olga Varga");
        assert_eq!(json["count"], 1);
    }

    #[test]
    fn test_slack_channel_defaults() {
        let msg = AlertPayloadBuilder::slack("Queue is growing", None, now());
        assert_eq!(msg.channel, DEFAULT_SLACK_CHANNEL);
        let msg = AlertPayloadBuilder::slack("Queue is growing", Some("#ops"), now());
        assert_eq!(msg.channel, "#ops");
    }
}
