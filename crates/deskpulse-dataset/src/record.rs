//! On-disk row schema for ticket files.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use deskpulse_entity::{Priority, Ticket, TicketStatus};

use crate::timestamp::{format_timestamp, parse_timestamp};

/// A raw row as read from a ticket file.
///
/// Every column is optional at this stage so that a missing optional column
/// does not fail the whole file; required fields are checked in
/// [`TicketRecord::into_ticket`]. Unknown columns are ignored, including
/// any stored `sla_met` flag.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct TicketRecord {
    pub ticket_id: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub priority: Option<String>,
    pub status: Option<String>,
    pub category: Option<String>,
    pub department: Option<String>,
    pub requester: Option<String>,
    pub assignee: Option<String>,
    pub created_date: Option<String>,
    pub resolved_date: Option<String>,
    pub sla_target_hours: Option<String>,
    pub resolution_hours: Option<String>,
    pub customer_satisfaction: Option<String>,
}

impl TicketRecord {
    /// Validate the row and convert it into a [`Ticket`].
    ///
    /// Returns a human-readable reason when the row violates the ticket
    /// invariants.
    pub fn into_ticket(self) -> Result<Ticket, String> {
        let ticket_id = required(self.ticket_id, "ticket_id")?;
        let priority: Priority = required(self.priority, "priority")?
            .parse()
            .map_err(|e: deskpulse_core::AppError| e.message)?;
        let status: TicketStatus = required(self.status, "status")?
            .parse()
            .map_err(|e: deskpulse_core::AppError| e.message)?;
        let category = required(self.category, "category")?;
        let department = required(self.department, "department")?;
        let requester = required(self.requester, "requester")?;

        let created_raw = required(self.created_date, "created_date")?;
        let created_date = parse_timestamp(&created_raw)
            .ok_or_else(|| format!("Unparseable created_date '{created_raw}'"))?;

        let resolved_date = match non_empty(self.resolved_date) {
            Some(raw) => Some(
                parse_timestamp(&raw)
                    .ok_or_else(|| format!("Unparseable resolved_date '{raw}'"))?,
            ),
            None => None,
        };

        match (status.is_resolved(), resolved_date) {
            (true, None) => return Err(format!("Status '{status}' requires a resolved_date")),
            (false, Some(_)) => {
                return Err(format!("Status '{status}' must not have a resolved_date"));
            }
            (true, Some(resolved)) if resolved < created_date => {
                return Err("resolved_date precedes created_date".to_string());
            }
            _ => {}
        }

        let sla_target_hours = match non_empty(self.sla_target_hours) {
            Some(raw) => parse_number(&raw, "sla_target_hours")?,
            None => priority.default_sla_target_hours(),
        };
        if sla_target_hours <= 0.0 {
            return Err(format!("sla_target_hours must be positive, got {sla_target_hours}"));
        }

        let resolution_hours = match non_empty(self.resolution_hours) {
            Some(raw) => {
                let hours = parse_number(&raw, "resolution_hours")?;
                if hours < 0.0 {
                    return Err(format!("resolution_hours must not be negative, got {hours}"));
                }
                if !status.is_resolved() {
                    return Err(format!("Status '{status}' must not have resolution_hours"));
                }
                if let Some(resolved) = resolved_date {
                    let derived = (resolved - created_date).num_milliseconds() as f64 / 3_600_000.0;
                    if (hours - derived).abs() > RESOLUTION_TOLERANCE_HOURS {
                        return Err(format!(
                            "resolution_hours {hours} does not match resolved_date - created_date ({derived:.2}h)"
                        ));
                    }
                }
                Some(hours)
            }
            None => None,
        };

        let customer_satisfaction = match non_empty(self.customer_satisfaction) {
            Some(raw) => Some(parse_satisfaction(&raw)?),
            None => None,
        };

        Ok(Ticket {
            ticket_id,
            title: self.title.unwrap_or_default(),
            description: self.description.unwrap_or_default(),
            priority,
            status,
            category,
            department,
            requester,
            assignee: non_empty(self.assignee),
            created_date,
            resolved_date,
            sla_target_hours,
            resolution_hours,
            customer_satisfaction,
        })
    }
}

/// A row as written by [`crate::writer::write_tickets`].
#[derive(Debug, Clone, Serialize)]
pub struct TicketRow<'a> {
    pub ticket_id: &'a str,
    pub title: &'a str,
    pub description: &'a str,
    pub priority: &'static str,
    pub status: &'static str,
    pub category: &'a str,
    pub department: &'a str,
    pub requester: &'a str,
    pub assignee: Option<&'a str>,
    pub created_date: String,
    pub resolved_date: Option<String>,
    pub sla_target_hours: f64,
    pub resolution_hours: Option<f64>,
    pub sla_met: bool,
    pub customer_satisfaction: Option<u8>,
}

impl<'a> TicketRow<'a> {
    /// Project a ticket into its on-disk row. `sla_met` is a snapshot taken at `now`.
    pub fn from_ticket(ticket: &'a Ticket, now: DateTime<Utc>) -> Self {
        Self {
            ticket_id: &ticket.ticket_id,
            title: &ticket.title,
            description: &ticket.description,
            priority: ticket.priority.as_str(),
            status: ticket.status.as_str(),
            category: &ticket.category,
            department: &ticket.department,
            requester: &ticket.requester,
            assignee: ticket.assignee.as_deref(),
            created_date: format_timestamp(&ticket.created_date),
            resolved_date: ticket.resolved_date.as_ref().map(format_timestamp),
            sla_target_hours: ticket.sla_target_hours,
            resolution_hours: ticket.resolution_hours,
            sla_met: ticket.sla_met(now),
            customer_satisfaction: ticket.customer_satisfaction,
        }
    }
}

/// Allowed drift between stored and timestamp-derived resolution hours.
const RESOLUTION_TOLERANCE_HOURS: f64 = 1.0 / 60.0;

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn required(value: Option<String>, field: &str) -> Result<String, String> {
    non_empty(value).ok_or_else(|| format!("Missing required field '{field}'"))
}

fn parse_number(raw: &str, field: &str) -> Result<f64, String> {
    raw.parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| format!("Invalid {field} '{raw}'"))
}

// Dataframe exports write nullable integers as floats ("4.0").
fn parse_satisfaction(raw: &str) -> Result<u8, String> {
    let value = parse_number(raw, "customer_satisfaction")?;
    if value.fract() != 0.0 || !(1.0..=5.0).contains(&value) {
        return Err(format!("customer_satisfaction must be 1-5, got '{raw}'"));
    }
    Ok(value as u8)
}
