//! Support ticket entity.

pub mod model;
pub mod priority;
pub mod status;
pub mod table;

pub use model::Ticket;
pub use priority::Priority;
pub use status::TicketStatus;
pub use table::{TicketTable, TicketView};
