//! Known workflows on the automation service.

use serde::Serialize;

use deskpulse_service::alert::workflows;

/// Description of a workflow the dashboard can trigger.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct WorkflowDefinition {
    pub name: &'static str,
    pub description: &'static str,
    pub triggers: &'static [&'static str],
    pub actions: &'static [&'static str],
}

pub const WORKFLOWS: [WorkflowDefinition; 5] = [
    WorkflowDefinition {
        name: workflows::SLA_BREACH_ALERT,
        description: "Monitors SLA breaches and sends alerts",
        triggers: &["webhook"],
        actions: &["email", "slack", "teams"],
    },
    WorkflowDefinition {
        name: workflows::WEEKLY_REPORT,
        description: "Generates and distributes weekly reports",
        triggers: &["schedule", "webhook"],
        actions: &["email", "pdf-generation", "file-storage"],
    },
    WorkflowDefinition {
        name: workflows::CRITICAL_ESCALATION,
        description: "Escalates critical tickets to management",
        triggers: &["webhook"],
        actions: &["email", "sms", "jira", "slack"],
    },
    WorkflowDefinition {
        name: workflows::SLACK_NOTIFICATION,
        description: "Sends notifications to Slack channels",
        triggers: &["webhook"],
        actions: &["slack-message"],
    },
    WorkflowDefinition {
        name: workflows::CREATE_JIRA_TICKET,
        description: "Creates JIRA tickets for complex issues",
        triggers: &["webhook"],
        actions: &["jira-create", "email-notification"],
    },
];

/// Names of every catalogued workflow, in catalog order.
pub fn workflow_names() -> Vec<String> {
    WORKFLOWS.iter().map(|w| w.name.to_string()).collect()
}

pub fn find(name: &str) -> Option<&'static WorkflowDefinition> {
    WORKFLOWS.iter().find(|w| w.name == name)
}
