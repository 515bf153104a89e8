//! Value counts over a categorical column.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use deskpulse_core::error::AppError;
use deskpulse_entity::{Ticket, TicketView};

/// A column tickets can be grouped by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Dimension {
    Priority,
    Status,
    Department,
    Category,
}

impl Dimension {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Priority => "priority",
            Self::Status => "status",
            Self::Department => "department",
            Self::Category => "category",
        }
    }

    fn label<'t>(&self, ticket: &'t Ticket) -> &'t str {
        match self {
            Self::Priority => ticket.priority.as_str(),
            Self::Status => ticket.status.as_str(),
            Self::Department => &ticket.department,
            Self::Category => &ticket.category,
        }
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Dimension {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "priority" => Ok(Self::Priority),
            "status" => Ok(Self::Status),
            "department" => Ok(Self::Department),
            "category" => Ok(Self::Category),
            other => Err(AppError::validation(format!("Unknown dimension '{other}'"))),
        }
    }
}

/// Number of tickets carrying one value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryCount {
    pub label: String,
    pub count: usize,
}

/// Count tickets per distinct value of `dimension`.
///
/// Only values present in the view appear. Ordered by count descending,
/// then label ascending.
pub fn distribution(view: &TicketView<'_>, dimension: Dimension) -> Vec<CategoryCount> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for ticket in view {
        *counts.entry(dimension.label(ticket)).or_default() += 1;
    }

    let mut result: Vec<CategoryCount> = counts
        .into_iter()
        .map(|(label, count)| CategoryCount {
            label: label.to_string(),
            count,
        })
        .collect();
    result.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.label.cmp(&b.label)));
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregate::fixtures::{at, open, resolved};
    use deskpulse_entity::{Priority, TicketTable};

    #[test]
    fn test_counts_sorted_with_label_tiebreak() {
        let table = TicketTable::new(vec![
            open("T1", Priority::High, at(1, 8)),
            open("T2", Priority::Low, at(1, 8)),
            open("T3", Priority::High, at(1, 8)),
            resolved("T4", Priority::Critical, at(1, 8), 2),
        ]);
        let counts = distribution(&table.view(), Dimension::Priority);
        let pairs: Vec<_> = counts.iter().map(|c| (c.label.as_str(), c.count)).collect();
        assert_eq!(pairs, vec![("High", 2), ("Critical", 1), ("Low", 1)]);

        let statuses = distribution(&table.view(), Dimension::Status);
        assert_eq!(statuses[0].label, "Open");
        assert_eq!(statuses[0].count, 3);
    }

    #[test]
    fn test_empty_view_has_no_buckets() {
        assert!(distribution(&TicketTable::empty().view(), Dimension::Department).is_empty());
    }

    #[test]
    fn test_parse_dimension() {
        assert_eq!("Department".parse::<Dimension>().unwrap(), Dimension::Department);
        assert!("weekday".parse::<Dimension>().is_err());
    }
}
