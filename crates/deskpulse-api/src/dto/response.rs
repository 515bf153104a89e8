//! Response DTOs.

use serde::{Deserialize, Serialize};

use deskpulse_core::traits::dispatcher::DeliveryResult;

/// Standard success response wrapper.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T: Serialize> {
    /// Whether the request was successful.
    pub success: bool,
    /// Response data.
    pub data: T,
}

impl<T: Serialize> ApiResponse<T> {
    /// Creates a successful response.
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data,
        }
    }
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Overall status.
    pub status: String,
    /// Server version.
    pub version: String,
    /// Rows in the loaded ticket table.
    pub tickets: usize,
    /// Seconds since startup.
    pub uptime_seconds: u64,
}

/// Outcome of a manual workflow trigger.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeliveryResponse {
    /// Workflow the payload was sent to.
    pub workflow: String,
    /// Whether the workflow accepted the payload.
    pub delivered: bool,
    /// Summary or failure reason.
    pub message: String,
    /// JSON body returned by the workflow, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response: Option<serde_json::Value>,
}

impl DeliveryResponse {
    pub fn from_result(workflow: &str, result: DeliveryResult) -> Self {
        match result {
            Ok(receipt) => Self {
                workflow: receipt.workflow,
                delivered: true,
                message: receipt.message,
                response: receipt.response,
            },
            Err(e) => Self {
                workflow: workflow.to_string(),
                delivered: false,
                message: e.to_string(),
                response: None,
            },
        }
    }
}
