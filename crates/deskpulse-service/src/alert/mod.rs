//! Alert payload builder.
//!
//! Turns SLA evaluation output into the JSON bodies the notification
//! workflows expect. A builder returns `None` when there is nothing to send.

mod payload;

pub use payload::{
    AlertPayloadBuilder, CriticalEscalationPayload, DEFAULT_SLACK_CHANNEL, SlaBreachPayload,
    SlackMessage,
};

/// Workflow names payloads are addressed to.
pub mod workflows {
    pub const SLA_BREACH_ALERT: &str = "sla-breach-alert";
    pub const CRITICAL_ESCALATION: &str = "critical-escalation";
    pub const WEEKLY_REPORT: &str = "weekly-report";
    pub const SLACK_NOTIFICATION: &str = "slack-notification";
    pub const CREATE_JIRA_TICKET: &str = "create-jira-ticket";
}
