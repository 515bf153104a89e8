//! Values offered by the dashboard filter controls.

use std::collections::BTreeSet;

use chrono::NaiveDate;
use serde::Serialize;

use deskpulse_entity::{Priority, TicketStatus, TicketTable};

/// Distinct values present in the table, plus the span of creation dates.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct FilterOptions {
    pub priorities: Vec<Priority>,
    pub departments: Vec<String>,
    pub statuses: Vec<TicketStatus>,
    /// Earliest creation date; `None` for an empty table.
    pub min_date: Option<NaiveDate>,
    /// Latest creation date; `None` for an empty table.
    pub max_date: Option<NaiveDate>,
}

pub fn filter_options(table: &TicketTable) -> FilterOptions {
    let priorities: BTreeSet<Priority> = table.iter().map(|t| t.priority).collect();
    let departments: BTreeSet<&str> = table.iter().map(|t| t.department.as_str()).collect();
    let statuses: BTreeSet<TicketStatus> = table.iter().map(|t| t.status).collect();

    FilterOptions {
        priorities: priorities.into_iter().collect(),
        departments: departments.into_iter().map(str::to_string).collect(),
        statuses: statuses.into_iter().collect(),
        min_date: table.iter().map(|t| t.created_day()).min(),
        max_date: table.iter().map(|t| t.created_day()).max(),
    }
}
