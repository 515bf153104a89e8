//! Workflow integration commands.

use clap::{Args, Subcommand};

use deskpulse_core::config::AppConfig;
use deskpulse_core::error::AppError;
use deskpulse_workflow::WorkflowClient;

use crate::output::{self, OutputFormat};

/// Arguments for integration commands
#[derive(Debug, Args)]
pub struct IntegrationArgs {
    /// Integration subcommand
    #[command(subcommand)]
    pub command: IntegrationCommand,
}

/// Integration subcommands
#[derive(Debug, Subcommand)]
pub enum IntegrationCommand {
    /// Probe the workflow service
    Status,
    /// Look up a workflow execution
    Execution {
        /// Execution ID
        id: String,
    },
}

/// Execute integration commands
pub async fn execute(
    args: &IntegrationArgs,
    config: &AppConfig,
    format: OutputFormat,
) -> Result<(), AppError> {
    let client = WorkflowClient::new(&config.workflow)?;

    match &args.command {
        IntegrationCommand::Status => {
            let status = client.integration_status().await;
            match format {
                OutputFormat::Json => output::print_json(&status),
                OutputFormat::Table => {
                    output::print_kv("URL", &status.url);
                    output::print_kv("Available", &status.available.to_string());
                    output::print_kv("Status", &format!("{:?}", status.status).to_lowercase());
                    output::print_kv("Workflows", &status.workflows.join(", "));
                    if let Some(message) = &status.message {
                        output::print_warning(message);
                    }
                }
            }
        }
        IntegrationCommand::Execution { id } => {
            let body = client
                .execution_status(id)
                .await
                .map_err(|e| AppError::external_service(e.to_string()))?;
            output::print_json(&body);
        }
    }
    Ok(())
}
