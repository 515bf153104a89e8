//! Filter criteria.

use deskpulse_core::types::{DateRange, Selection};
use deskpulse_entity::{Priority, Ticket, TicketStatus};

/// The constraints a dashboard view applies to the ticket table.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterCriteria {
    /// Inclusive range on the creation date; `None` leaves dates unconstrained.
    pub date_range: Option<DateRange>,
    pub priority: Selection<Priority>,
    pub department: Selection<String>,
    pub status: Selection<TicketStatus>,
}

impl FilterCriteria {
    /// Whether `ticket` satisfies every constrained dimension.
    pub fn matches(&self, ticket: &Ticket) -> bool {
        self.date_range
            .is_none_or(|range| range.contains(ticket.created_day()))
            && self.priority.matches(&ticket.priority)
            && self.department.matches(&ticket.department)
            && self.status.matches(&ticket.status)
    }

    /// Whether no dimension is constrained.
    pub fn is_unconstrained(&self) -> bool {
        self.date_range.is_none()
            && self.priority.is_all()
            && self.department.is_all()
            && self.status.is_all()
    }
}
