//! In-memory ticket table and borrowed row views.

use std::collections::HashMap;

use super::model::Ticket;

/// The loaded ticket dataset.
///
/// Read-only after construction; share it behind an `Arc` between the API,
/// the scheduler, and the CLI.
#[derive(Debug, Clone, Default)]
pub struct TicketTable {
    tickets: Vec<Ticket>,
    index: HashMap<String, usize>,
}

impl TicketTable {
    /// Build a table from rows. Later rows with an already-seen id are ignored
    /// by [`TicketTable::get`] but kept in iteration order.
    pub fn new(tickets: Vec<Ticket>) -> Self {
        let mut index = HashMap::with_capacity(tickets.len());
        for (pos, t) in tickets.iter().enumerate() {
            index.entry(t.ticket_id.clone()).or_insert(pos);
        }
        Self { tickets, index }
    }

    /// An empty table, used when no dataset is available.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.tickets.len()
    }

    /// Whether the table has no rows.
    pub fn is_empty(&self) -> bool {
        self.tickets.is_empty()
    }

    /// All rows in load order.
    pub fn tickets(&self) -> &[Ticket] {
        &self.tickets
    }

    /// Iterate over rows in load order.
    pub fn iter(&self) -> std::slice::Iter<'_, Ticket> {
        self.tickets.iter()
    }

    /// Look up a ticket by id.
    pub fn get(&self, ticket_id: &str) -> Option<&Ticket> {
        self.index.get(ticket_id).map(|&pos| &self.tickets[pos])
    }

    /// A view over every row.
    pub fn view(&self) -> TicketView<'_> {
        self.tickets.iter().collect()
    }
}

impl<'a> IntoIterator for &'a TicketTable {
    type Item = &'a Ticket;
    type IntoIter = std::slice::Iter<'a, Ticket>;

    fn into_iter(self) -> Self::IntoIter {
        self.tickets.iter()
    }
}

/// A borrowed subset of a [`TicketTable`], in table order.
#[derive(Debug, Clone, Default)]
pub struct TicketView<'a> {
    rows: Vec<&'a Ticket>,
}

impl<'a> TicketView<'a> {
    /// Number of rows in the view.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the view selects nothing.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Iterate over the selected rows.
    pub fn iter(&self) -> impl Iterator<Item = &'a Ticket> + '_ {
        self.rows.iter().copied()
    }

    /// Ids of the selected rows, in order.
    pub fn ids(&self) -> Vec<&'a str> {
        self.rows.iter().map(|t| t.ticket_id.as_str()).collect()
    }
}

impl<'a> FromIterator<&'a Ticket> for TicketView<'a> {
    fn from_iter<I: IntoIterator<Item = &'a Ticket>>(iter: I) -> Self {
        Self {
            rows: iter.into_iter().collect(),
        }
    }
}

impl<'a, 'v> IntoIterator for &'v TicketView<'a> {
    type Item = &'a Ticket;
    type IntoIter = std::iter::Copied<std::slice::Iter<'v, &'a Ticket>>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.iter().copied()
    }
}
