//! Domain entity models for DeskPulse.
//!
//! The ticket table is loaded once per session and shared read-only; no
//! component mutates tickets after load.

pub mod ticket;

pub use ticket::{Priority, Ticket, TicketStatus, TicketTable, TicketView};
