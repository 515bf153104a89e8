//! Configuration management CLI commands.

use clap::{Args, Subcommand};

use deskpulse_core::config::AppConfig;
use deskpulse_core::error::AppError;
use deskpulse_dataset::generator::MAX_LOOKBACK_DAYS;

use crate::output::{self, OutputFormat};

/// Arguments for config commands
#[derive(Debug, Args)]
pub struct ConfigArgs {
    /// Config subcommand
    #[command(subcommand)]
    pub command: ConfigCommand,
}

/// Config subcommands
#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Show current configuration
    Show,
    /// Validate configuration file
    Validate,
}

/// Execute config commands
pub fn execute(
    args: &ConfigArgs,
    config: &AppConfig,
    config_path: &str,
    format: OutputFormat,
) -> Result<(), AppError> {
    match &args.command {
        ConfigCommand::Show => match format {
            OutputFormat::Json => output::print_json(&masked(config)),
            OutputFormat::Table => println!("{:#?}", masked(config)),
        },
        ConfigCommand::Validate => {
            validate(config)?;
            output::print_success(&format!("Configuration '{config_path}' is valid"));
            output::print_kv(
                "Server",
                &format!("{}:{}", config.server.host, config.server.port),
            );
            output::print_kv("Dataset", &config.dataset.path);
            output::print_kv("Workflow service", &config.workflow.base_url);
            output::print_kv("Monitor schedule", &config.monitor.schedule);
        }
    }

    Ok(())
}

fn validate(config: &AppConfig) -> Result<(), AppError> {
    if config.dataset.delimiter.len() != 1 {
        return Err(AppError::configuration(format!(
            "dataset.delimiter must be a single byte, got '{}'",
            config.dataset.delimiter
        )));
    }
    if !(0.0..=100.0).contains(&config.dashboard.sla_target_percent) {
        return Err(AppError::configuration(
            "dashboard.sla_target_percent must be between 0 and 100",
        ));
    }
    if config.workflow.timeout_seconds == 0 || config.workflow.timeout_seconds > 30 {
        return Err(AppError::configuration(
            "workflow.timeout_seconds must be between 1 and 30",
        ));
    }
    if !(1..=MAX_LOOKBACK_DAYS).contains(&config.generator.lookback_days) {
        return Err(AppError::configuration(format!(
            "generator.lookback_days must be between 1 and {MAX_LOOKBACK_DAYS}"
        )));
    }
    if config.monitor.schedule.split_whitespace().count() != 6 {
        return Err(AppError::configuration(
            "monitor.schedule must be a six-field cron expression",
        ));
    }
    Ok(())
}

/// Copy of the configuration with the API key hidden
fn masked(config: &AppConfig) -> AppConfig {
    let mut config = config.clone();
    if config.workflow.api_key.is_some() {
        config.workflow.api_key = Some("****".to_string());
    }
    config
}
