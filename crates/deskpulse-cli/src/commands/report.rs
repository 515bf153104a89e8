//! Report commands.

use std::sync::Arc;

use chrono::Utc;
use clap::{Args, Subcommand};

use deskpulse_core::config::AppConfig;
use deskpulse_core::error::AppError;
use deskpulse_workflow::WorkflowClient;
use deskpulse_worker::{AlertMonitor, AlertOutcome};

use crate::output::{self, OutputFormat};

/// Arguments for report commands
#[derive(Debug, Args)]
pub struct ReportArgs {
    /// Report subcommand
    #[command(subcommand)]
    pub command: ReportCommand,
}

/// Report subcommands
#[derive(Debug, Subcommand)]
pub enum ReportCommand {
    /// Summary of tickets created in the last 7 days
    Weekly {
        /// Send the report to the weekly-report workflow
        #[arg(long)]
        dispatch: bool,
    },
}

/// Execute report commands
pub async fn execute(args: &ReportArgs, config: &AppConfig, format: OutputFormat) -> Result<(), AppError> {
    let session = super::load_session(config)?;

    match &args.command {
        ReportCommand::Weekly { dispatch: false } => {
            let report = session.weekly_report(Utc::now());
            match format {
                OutputFormat::Json => output::print_json(&report),
                OutputFormat::Table => {
                    output::print_kv(
                        "Period",
                        &format!("{} to {}", report.period.start, report.period.end),
                    );
                    output::print_kv("Tickets", &report.metrics.total_tickets.to_string());
                    output::print_kv("Resolved", &report.metrics.resolved_tickets.to_string());
                    output::print_kv(
                        "SLA compliance",
                        &format!("{:.1}%", report.metrics.sla_compliance),
                    );
                    output::print_kv(
                        "Avg resolution (h)",
                        &format!("{:.1}", report.metrics.avg_resolution_time),
                    );
                    for (title, counts) in [
                        ("By priority", &report.by_priority),
                        ("By department", &report.by_department),
                        ("By category", &report.by_category),
                    ] {
                        output::print_heading(title);
                        for (label, count) in counts {
                            output::print_kv(label, &count.to_string());
                        }
                    }
                }
            }
        }
        ReportCommand::Weekly { dispatch: true } => {
            let client = Arc::new(WorkflowClient::new(&config.workflow)?);
            let outcome = AlertMonitor::new(session, client)
                .send_weekly_report(Utc::now())
                .await;
            match format {
                OutputFormat::Json => output::print_json(&outcome),
                OutputFormat::Table => match &outcome {
                    AlertOutcome::Delivered(_) => output::print_success("Weekly report delivered"),
                    other => output::print_warning(&super::alerts::describe(other)),
                },
            }
            if let AlertOutcome::Failed(e) = outcome {
                return Err(AppError::external_service(e));
            }
        }
    }
    Ok(())
}
