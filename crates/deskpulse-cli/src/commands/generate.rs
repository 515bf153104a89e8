//! Sample data generation command.

use std::path::PathBuf;

use chrono::Utc;
use clap::Args;

use deskpulse_core::config::AppConfig;
use deskpulse_core::error::AppError;
use deskpulse_dataset::{GeneratorOptions, TicketGenerator, write_tickets};

use crate::output;

/// Arguments for the generate command
#[derive(Debug, Args)]
pub struct GenerateArgs {
    /// Number of tickets (defaults to generator.tickets)
    #[arg(short = 'n', long)]
    pub count: Option<usize>,
    /// Random seed for reproducible output (defaults to generator.seed)
    #[arg(long)]
    pub seed: Option<u64>,
    /// Output path (defaults to dataset.path)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Execute the generate command
pub fn execute(args: &GenerateArgs, config: &AppConfig) -> Result<(), AppError> {
    let count = args.count.unwrap_or(config.generator.tickets);
    let path = args
        .output
        .clone()
        .unwrap_or_else(|| PathBuf::from(&config.dataset.path));
    let mut generator = match args.seed {
        Some(seed) => TicketGenerator::seeded(GeneratorOptions::from(&config.generator), seed)?,
        None => TicketGenerator::from_config(&config.generator)?,
    };

    let now = Utc::now();
    let tickets = generator.generate(count, now);
    write_tickets(&path, &tickets, now, config.dataset.delimiter_byte())?;

    output::print_success(&format!(
        "Generated {} ticket(s) into '{}'",
        tickets.len(),
        path.display()
    ));
    Ok(())
}
