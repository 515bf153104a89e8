//! Ticket model.

use chrono::{DateTime, Datelike, NaiveDate, Utc, Weekday};
use serde::{Deserialize, Serialize};

use super::priority::Priority;
use super::status::TicketStatus;

const MILLIS_PER_HOUR: f64 = 3_600_000.0;

/// One row of the ticket table.
///
/// SLA status is never stored: for unresolved tickets it depends on the
/// evaluation time, so it is recomputed on demand via [`Ticket::sla_met`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ticket {
    /// Unique identifier, e.g. `TKT-000042`.
    pub ticket_id: String,
    /// Short summary.
    pub title: String,
    /// Free-text description.
    #[serde(default)]
    pub description: String,
    /// Urgency.
    pub priority: Priority,
    /// Lifecycle status.
    pub status: TicketStatus,
    /// Category (Hardware, Software, ...).
    pub category: String,
    /// Requesting department.
    pub department: String,
    /// Person who raised the ticket.
    pub requester: String,
    /// Assigned agent; absent while the ticket is open.
    pub assignee: Option<String>,
    /// When the ticket was raised.
    pub created_date: DateTime<Utc>,
    /// When the ticket was resolved; present only for resolved or closed tickets.
    pub resolved_date: Option<DateTime<Utc>>,
    /// Hours allowed for resolution, fixed at creation.
    pub sla_target_hours: f64,
    /// Stored resolution time in hours, if the source provided one.
    pub resolution_hours: Option<f64>,
    /// Satisfaction score 1-5, only for closed tickets.
    pub customer_satisfaction: Option<u8>,
}

impl Ticket {
    /// Whether the ticket has been resolved or closed.
    pub fn is_resolved(&self) -> bool {
        self.status.is_resolved()
    }

    /// Hours between creation and `now`. Negative if `now` precedes creation.
    pub fn hours_elapsed(&self, now: DateTime<Utc>) -> f64 {
        hours_between(self.created_date, now)
    }

    /// Resolution time in hours: the stored value, or the span between the
    /// creation and resolution timestamps.
    pub fn resolution_hours(&self) -> Option<f64> {
        self.resolution_hours.or_else(|| {
            self.resolved_date
                .map(|resolved| hours_between(self.created_date, resolved))
        })
    }

    /// Whether the ticket is within its SLA as of `now`.
    ///
    /// Resolved tickets compare their resolution time with the target; all
    /// others compare the time elapsed so far.
    pub fn sla_met(&self, now: DateTime<Utc>) -> bool {
        let hours = match self.resolution_hours() {
            Some(hours) if self.is_resolved() => hours,
            _ => self.hours_elapsed(now),
        };
        hours <= self.sla_target_hours
    }

    /// Calendar date the ticket was created.
    pub fn created_day(&self) -> NaiveDate {
        self.created_date.date_naive()
    }

    /// Calendar date the ticket was resolved, if any.
    pub fn resolved_day(&self) -> Option<NaiveDate> {
        self.resolved_date.map(|d| d.date_naive())
    }

    /// Day of the week the ticket was created.
    pub fn created_weekday(&self) -> Weekday {
        self.created_date.weekday()
    }
}

fn hours_between(from: DateTime<Utc>, to: DateTime<Utc>) -> f64 {
    (to - from).num_milliseconds() as f64 / MILLIS_PER_HOUR
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn ticket(status: TicketStatus, created: DateTime<Utc>) -> Ticket {
        Ticket {
            ticket_id: "TKT-000001".to_string(),
            title: "VPN drops".to_string(),
            description: String::new(),
            priority: Priority::High,
            status,
            category: "Network".to_string(),
            department: "Sales".to_string(),
            requester: "Dana Reyes".to_string(),
            assignee: None,
            created_date: created,
            resolved_date: None,
            sla_target_hours: 8.0,
            resolution_hours: None,
            customer_satisfaction: None,
        }
    }

    #[test]
    fn test_open_ticket_sla_is_live() {
        let created = Utc.with_ymd_and_hms(2025, 1, 6, 9, 0, 0).unwrap();
        let t = ticket(TicketStatus::Open, created);
        assert!(t.sla_met(created + Duration::hours(8)));
        assert!(!t.sla_met(created + Duration::hours(9)));
    }

    #[test]
    fn test_resolved_ticket_uses_resolution_time() {
        let created = Utc.with_ymd_and_hms(2025, 1, 6, 9, 0, 0).unwrap();
        let mut t = ticket(TicketStatus::Resolved, created);
        t.resolved_date = Some(created + Duration::hours(5));
        assert_eq!(t.resolution_hours(), Some(5.0));
        assert!(t.sla_met(created + Duration::days(30)));
    }

    #[test]
    fn test_stored_resolution_hours_take_precedence() {
        let created = Utc.with_ymd_and_hms(2025, 1, 6, 9, 0, 0).unwrap();
        let mut t = ticket(TicketStatus::Closed, created);
        t.resolved_date = Some(created + Duration::hours(5));
        t.resolution_hours = Some(12.5);
        assert_eq!(t.resolution_hours(), Some(12.5));
        assert!(!t.sla_met(created + Duration::hours(6)));
    }

    #[test]
    fn test_calendar_helpers() {
        let created = Utc.with_ymd_and_hms(2025, 1, 6, 23, 30, 0).unwrap();
        let t = ticket(TicketStatus::Open, created);
        assert_eq!(t.created_weekday(), Weekday::Mon);
        assert_eq!(t.created_day(), NaiveDate::from_ymd_opt(2025, 1, 6).unwrap());
        assert_eq!(t.resolved_day(), None);
    }
}
