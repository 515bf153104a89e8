//! # deskpulse-workflow
//!
//! HTTP client for the external workflow-automation service. Payloads are
//! posted to `{base_url}/webhook/{workflow}`; the client implements
//! [`NotificationDispatcher`](deskpulse_core::traits::NotificationDispatcher)
//! so the alert monitor can deliver through it without knowing about HTTP.

pub mod catalog;
pub mod client;
pub mod status;

pub use catalog::{WORKFLOWS, WorkflowDefinition};
pub use client::WorkflowClient;
pub use status::{ConnectionState, IntegrationStatus};
