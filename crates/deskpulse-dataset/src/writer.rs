//! Ticket file writer.

use std::path::Path;

use chrono::{DateTime, Utc};

use deskpulse_core::result::AppResult;
use deskpulse_entity::Ticket;

use crate::record::TicketRow;

/// Write tickets to `path` in the schema [`crate::TicketLoader`] reads.
///
/// Fields are separated by `delimiter`. Parent directories are created as
/// needed. The `sla_met` column is a snapshot taken at `now`; the loader
/// ignores it.
pub fn write_tickets(
    path: &Path,
    tickets: &[Ticket],
    now: DateTime<Utc>,
    delimiter: u8,
) -> AppResult<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }

    let mut writer = csv::WriterBuilder::new()
        .delimiter(delimiter)
        .from_path(path)?;
    for ticket in tickets {
        writer.serialize(TicketRow::from_ticket(ticket, now))?;
    }
    writer.flush()?;

    tracing::info!("Wrote {} ticket(s) to '{}'", tickets.len(), path.display());
    Ok(())
}
