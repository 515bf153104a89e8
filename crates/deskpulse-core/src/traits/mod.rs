//! Core traits defined in `deskpulse-core` and implemented by other crates.

pub mod dispatcher;

pub use dispatcher::{DeliveryError, DeliveryReceipt, DeliveryResult, NotificationDispatcher};
