//! CLI command definitions and dispatch.

pub mod alerts;
pub mod config;
pub mod dashboard;
pub mod filter;
pub mod generate;
pub mod integration;
pub mod report;

use std::sync::Arc;

use clap::{Parser, Subcommand};

use deskpulse_core::config::AppConfig;
use deskpulse_core::error::AppError;
use deskpulse_dataset::TicketLoader;
use deskpulse_service::DashboardSession;

use crate::output::{self, OutputFormat};

/// Environment variable selecting the configuration overlay.
const ENV_VAR: &str = "DESKPULSE_ENV";

/// DeskPulse: IT support ticket analytics
#[derive(Debug, Parser)]
#[command(name = "deskpulse", version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "config/default.toml")]
    pub config: String,

    /// Output format
    #[arg(short, long, value_enum, default_value = "table")]
    pub format: OutputFormat,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Generate a sample ticket dataset
    Generate(generate::GenerateArgs),
    /// Show headline dashboard figures
    Kpis(filter::FilterArgs),
    /// Break the filtered tickets down by a dimension
    Breakdown(dashboard::BreakdownArgs),
    /// Show or dispatch SLA warnings and escalations
    Alerts(alerts::AlertsArgs),
    /// Reports
    Report(report::ReportArgs),
    /// Workflow integration
    Integration(integration::IntegrationArgs),
    /// Configuration management
    Config(config::ConfigArgs),
}

impl Cli {
    /// Execute the CLI command
    pub async fn execute(&self) -> Result<(), AppError> {
        let config = load_config(&self.config)?;
        match &self.command {
            Commands::Generate(args) => generate::execute(args, &config),
            Commands::Kpis(args) => dashboard::kpis(args, &config, self.format),
            Commands::Breakdown(args) => dashboard::breakdown(args, &config, self.format),
            Commands::Alerts(args) => alerts::execute(args, &config, self.format).await,
            Commands::Report(args) => report::execute(args, &config, self.format).await,
            Commands::Integration(args) => integration::execute(args, &config, self.format).await,
            Commands::Config(args) => config::execute(args, &config, &self.config, self.format),
        }
    }
}

/// Helper: load configuration from file plus the environment overlay
pub fn load_config(config_path: &str) -> Result<AppConfig, AppError> {
    let env = std::env::var(ENV_VAR).unwrap_or_else(|_| "development".to_string());
    tracing::debug!("Loading config from '{}' (env: {})", config_path, env);
    AppConfig::load_from(config_path, &env)
}

/// Helper: load the ticket table and build a dashboard session
pub fn load_session(config: &AppConfig) -> Result<Arc<DashboardSession>, AppError> {
    let report = TicketLoader::from_config(&config.dataset).load()?;
    if report.missing {
        output::print_warning(&format!(
            "Dataset '{}' not found; run `deskpulse generate` first",
            config.dataset.path
        ));
    } else if !report.skipped.is_empty() {
        output::print_warning(&format!(
            "Skipped {} malformed row(s) in '{}'",
            report.skipped.len(),
            config.dataset.path
        ));
    }
    Ok(Arc::new(DashboardSession::new(
        Arc::new(report.table),
        config.dashboard.clone(),
    )))
}
