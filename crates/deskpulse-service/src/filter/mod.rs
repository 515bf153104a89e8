//! Filter engine.
//!
//! Narrows a ticket table to the rows matching every constrained
//! dimension. The result is a borrowed view in table order; no row is
//! copied or modified.

mod criteria;
mod params;

pub use criteria::FilterCriteria;
pub use params::FilterParams;

use deskpulse_entity::{Ticket, TicketView};

/// Select the tickets matching `criteria`.
///
/// An empty input or criteria that select nothing both give an empty view.
pub fn filter_tickets<'a, I>(tickets: I, criteria: &FilterCriteria) -> TicketView<'a>
where
    I: IntoIterator<Item = &'a Ticket>,
{
    tickets
        .into_iter()
        .filter(|ticket| criteria.matches(ticket))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, TimeZone, Utc};
    use deskpulse_core::types::{DateRange, Selection};
    use deskpulse_entity::{Priority, TicketStatus, TicketTable};

    fn ticket(id: &str, priority: Priority, status: TicketStatus, dept: &str, day: u32) -> Ticket {
        Ticket {
            ticket_id: id.to_string(),
            title: format!("Ticket {id}"),
            description: String::new(),
            priority,
            status,
            category: "Software".to_string(),
            department: dept.to_string(),
            requester: "Ana Silva".to_string(),
            assignee: None,
            created_date: Utc.with_ymd_and_hms(2025, 3, day, 23, 30, 0).unwrap(),
            resolved_date: None,
            sla_target_hours: priority.default_sla_target_hours(),
            resolution_hours: None,
            customer_satisfaction: None,
        }
    }

    fn table() -> TicketTable {
        TicketTable::new(vec![
            ticket("T1", Priority::High, TicketStatus::Open, "IT", 1),
            ticket("T2", Priority::High, TicketStatus::Pending, "HR", 2),
            ticket("T3", Priority::Low, TicketStatus::Open, "IT", 3),
            ticket("T4", Priority::Critical, TicketStatus::InProgress, "IT", 4),
            ticket("T5", Priority::High, TicketStatus::Open, "IT", 5),
        ])
    }

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, d).unwrap()
    }

    #[test]
    fn test_unconstrained_keeps_everything() {
        let table = table();
        let view = filter_tickets(&table, &FilterCriteria::default());
        assert_eq!(view.len(), table.len());
    }

    #[test]
    fn test_dimensions_are_conjunctive() {
        let table = table();
        let criteria = FilterCriteria {
            priority: Selection::Only(Priority::High),
            department: Selection::Only("IT".to_string()),
            ..Default::default()
        };
        assert_eq!(filter_tickets(&table, &criteria).ids(), vec!["T1", "T5"]);
    }

    #[test]
    fn test_sequential_filters_compose() {
        let table = table();
        let by_priority = FilterCriteria {
            priority: Selection::Only(Priority::High),
            ..Default::default()
        };
        let by_department = FilterCriteria {
            department: Selection::Only("IT".to_string()),
            ..Default::default()
        };
        let both = FilterCriteria {
            priority: Selection::Only(Priority::High),
            department: Selection::Only("IT".to_string()),
            ..Default::default()
        };

        let first = filter_tickets(&table, &by_priority);
        let chained = filter_tickets(&first, &by_department);
        assert_eq!(chained.ids(), filter_tickets(&table, &both).ids());
    }

    #[test]
    fn test_filter_is_idempotent_subset() {
        let table = table();
        let criteria = FilterCriteria {
            status: Selection::Only(TicketStatus::Open),
            ..Default::default()
        };
        let once = filter_tickets(&table, &criteria);
        let twice = filter_tickets(&once, &criteria);
        assert_eq!(once.ids(), twice.ids());
        assert!(once.ids().iter().all(|id| table.get(id).is_some()));
    }

    #[test]
    fn test_date_range_is_inclusive_on_created_day() {
        let table = table();
        let criteria = FilterCriteria {
            date_range: Some(DateRange::new(day(2), day(4))),
            ..Default::default()
        };
        assert_eq!(filter_tickets(&table, &criteria).ids(), vec!["T2", "T3", "T4"]);
    }

    #[test]
    fn test_nothing_selected_is_empty_view() {
        let table = table();
        let criteria = FilterCriteria {
            department: Selection::Only("Legal".to_string()),
            ..Default::default()
        };
        assert!(filter_tickets(&table, &criteria).is_empty());
        assert!(filter_tickets(&TicketTable::empty(), &FilterCriteria::default()).is_empty());
    }
}
