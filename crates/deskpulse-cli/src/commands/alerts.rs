//! SLA alert commands.

use std::sync::Arc;

use chrono::Utc;
use clap::Args;
use serde::Serialize;
use tabled::Tabled;

use deskpulse_core::config::AppConfig;
use deskpulse_core::error::AppError;
use deskpulse_workflow::WorkflowClient;
use deskpulse_worker::{AlertMonitor, AlertOutcome};

use crate::output::{self, OutputFormat};

/// Arguments for the alerts command
#[derive(Debug, Args)]
pub struct AlertsArgs {
    /// Run the monitor once and deliver payloads to the workflow service
    #[arg(long)]
    pub dispatch: bool,
}

/// Warning display row
#[derive(Debug, Serialize, Tabled)]
struct WarningRow {
    ticket: String,
    priority: String,
    department: String,
    elapsed_h: String,
    target_h: String,
    remaining_h: String,
    assignee: String,
}

/// Escalation display row
#[derive(Debug, Serialize, Tabled)]
struct EscalationRow {
    ticket: String,
    department: String,
    overdue_h: String,
    assignee: String,
    requester: String,
}

/// Execute the alerts command
pub async fn execute(args: &AlertsArgs, config: &AppConfig, format: OutputFormat) -> Result<(), AppError> {
    let session = super::load_session(config)?;

    if args.dispatch {
        let client = Arc::new(WorkflowClient::new(&config.workflow)?);
        let monitor = AlertMonitor::new(session, client);
        let report = monitor.run_once(Utc::now()).await;
        match format {
            OutputFormat::Json => output::print_json(&report),
            OutputFormat::Table => {
                output::print_kv("Integration available", &report.available.to_string());
                output::print_kv("Warnings", &report.warnings.to_string());
                output::print_kv("Escalations", &report.escalations.to_string());
                output::print_kv("sla-breach-alert", &describe(&report.sla_breach));
                output::print_kv("critical-escalation", &describe(&report.critical_escalation));
            }
        }
        return Ok(());
    }

    let evaluation = session.evaluate_sla(Utc::now());
    if format == OutputFormat::Json {
        output::print_json(&evaluation);
        return Ok(());
    }

    let warnings: Vec<WarningRow> = evaluation
        .warnings
        .iter()
        .map(|w| WarningRow {
            ticket: w.ticket_id.clone(),
            priority: w.priority.to_string(),
            department: w.department.clone(),
            elapsed_h: format!("{:.1}", w.hours_elapsed),
            target_h: format!("{:.1}", w.sla_target),
            remaining_h: format!("{:.1}", w.time_remaining),
            assignee: w.assignee.clone().unwrap_or_default(),
        })
        .collect();
    let escalations: Vec<EscalationRow> = evaluation
        .escalations
        .iter()
        .map(|e| EscalationRow {
            ticket: e.ticket_id.clone(),
            department: e.department.clone(),
            overdue_h: format!("{:.1}", e.hours_overdue),
            assignee: e.assignee.clone().unwrap_or_default(),
            requester: e.requester.clone(),
        })
        .collect();

    output::print_heading(&format!("SLA warnings ({})", warnings.len()));
    output::print_list(&warnings, format);
    output::print_heading(&format!("Critical escalations ({})", escalations.len()));
    output::print_list(&escalations, format);
    Ok(())
}

pub(crate) fn describe(outcome: &AlertOutcome) -> String {
    match outcome {
        AlertOutcome::Skipped => "skipped".to_string(),
        AlertOutcome::NothingToSend => "nothing to send".to_string(),
        AlertOutcome::Delivered(receipt) => format!("delivered ({})", receipt.message),
        AlertOutcome::Failed(e) => format!("failed: {e}"),
    }
}
