//! Delimited-file ticket loader.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use serde::Serialize;

use deskpulse_core::config::dataset::DatasetConfig;
use deskpulse_core::result::AppResult;
use deskpulse_entity::{Ticket, TicketTable};

use crate::record::TicketRecord;

/// A row that was left out of the table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkippedRow {
    /// 1-based line number in the source file.
    pub line: u64,
    /// Why the row was rejected.
    pub reason: String,
}

/// Result of loading a ticket file.
#[derive(Debug, Clone)]
pub struct LoadReport {
    /// The valid rows.
    pub table: TicketTable,
    /// Rows that violated the schema or the ticket invariants.
    pub skipped: Vec<SkippedRow>,
    /// Whether the source file was absent.
    pub missing: bool,
}

impl LoadReport {
    fn missing() -> Self {
        Self {
            table: TicketTable::empty(),
            skipped: Vec::new(),
            missing: true,
        }
    }
}

/// Reads ticket tables from delimited files.
#[derive(Debug, Clone)]
pub struct TicketLoader {
    path: PathBuf,
    delimiter: u8,
}

impl TicketLoader {
    /// Create a loader for a comma-delimited file.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            delimiter: b',',
        }
    }

    /// Create a loader from the dataset configuration section.
    pub fn from_config(config: &DatasetConfig) -> Self {
        Self {
            path: PathBuf::from(&config.path),
            delimiter: config.delimiter_byte(),
        }
    }

    /// Use a different field delimiter.
    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Path this loader reads from.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the table.
    ///
    /// A missing file yields an empty table. Rows that fail validation are
    /// skipped and reported; only an unreadable file or header is an error.
    pub fn load(&self) -> AppResult<LoadReport> {
        if !self.path.exists() {
            tracing::warn!(
                "Ticket file '{}' not found, starting with an empty table",
                self.path.display()
            );
            return Ok(LoadReport::missing());
        }

        let mut reader = csv::ReaderBuilder::new()
            .delimiter(self.delimiter)
            .trim(csv::Trim::Headers)
            .from_path(&self.path)?;
        let headers = reader.headers()?.clone();

        let mut tickets: Vec<Ticket> = Vec::new();
        let mut skipped = Vec::new();
        let mut seen = HashSet::new();

        for (idx, result) in reader.records().enumerate() {
            let mut line = idx as u64 + 2;
            let outcome = match result {
                Ok(record) => {
                    if let Some(pos) = record.position() {
                        line = pos.line();
                    }
                    record
                        .deserialize::<TicketRecord>(Some(&headers))
                        .map_err(|e| e.to_string())
                        .and_then(TicketRecord::into_ticket)
                }
                Err(e) => Err(e.to_string()),
            };

            match outcome {
                Ok(ticket) if !seen.insert(ticket.ticket_id.clone()) => skipped.push(SkippedRow {
                    line,
                    reason: format!("Duplicate ticket_id '{}'", ticket.ticket_id),
                }),
                Ok(ticket) => tickets.push(ticket),
                Err(reason) => skipped.push(SkippedRow { line, reason }),
            }
        }

        for row in &skipped {
            tracing::debug!(line = row.line, reason = %row.reason, "Skipped ticket row");
        }
        if !skipped.is_empty() {
            tracing::warn!(
                "Skipped {} malformed row(s) in '{}'",
                skipped.len(),
                self.path.display()
            );
        }
        tracing::info!(
            "Loaded {} ticket(s) from '{}'",
            tickets.len(),
            self.path.display()
        );

        Ok(LoadReport {
            table: TicketTable::new(tickets),
            skipped,
            missing: false,
        })
    }
}
