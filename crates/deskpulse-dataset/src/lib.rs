//! Ticket dataset I/O for DeskPulse.
//!
//! This crate provides:
//! - A delimited-file loader that degrades to an empty table when the file
//!   is absent and skips malformed rows without affecting the others
//! - A writer producing the same schema the loader reads
//! - A sample-data generator producing realistic tickets

pub mod generator;
pub mod loader;
pub mod record;
pub mod timestamp;
pub mod writer;

pub use generator::{GeneratorOptions, TicketGenerator};
pub use loader::{LoadReport, SkippedRow, TicketLoader};
pub use writer::write_tickets;
