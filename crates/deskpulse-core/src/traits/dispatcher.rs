//! Notification dispatcher contract.
//!
//! The dashboard core decides *what* to send and *when*; delivery is owned by
//! an implementation of [`NotificationDispatcher`]. Delivery never fails the
//! evaluation that produced the payload: the outcome is returned as a typed
//! result for the caller to log.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Acknowledgement of a successful delivery.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeliveryReceipt {
    /// Workflow the payload was delivered to.
    pub workflow: String,
    /// Response body returned by the endpoint, if it was JSON.
    pub response: Option<serde_json::Value>,
    /// Human-readable summary.
    pub message: String,
}

/// Why a delivery did not succeed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DeliveryError {
    /// The endpoint could not be reached.
    #[error("connection error to workflow service: {0}")]
    Transport(String),
    /// The endpoint did not answer within the configured timeout.
    #[error("delivery timed out after {0}s")]
    Timeout(u64),
    /// The endpoint answered with a status other than 200.
    #[error("HTTP {code}: {body}")]
    Status {
        /// HTTP status code.
        code: u16,
        /// Response body text.
        body: String,
    },
    /// The payload could not be encoded.
    #[error("failed to encode payload: {0}")]
    Encode(String),
}

/// Outcome of a single delivery attempt.
pub type DeliveryResult = Result<DeliveryReceipt, DeliveryError>;

/// Delivers JSON payloads to named workflows.
#[async_trait]
pub trait NotificationDispatcher: Send + Sync + std::fmt::Debug + 'static {
    /// Deliver `payload` to the workflow called `workflow`.
    async fn dispatch(&self, workflow: &str, payload: &serde_json::Value) -> DeliveryResult;

    /// Whether the delivery target is currently reachable. Never fails.
    async fn available(&self) -> bool {
        true
    }
}
