//! Request DTOs.

use serde::Deserialize;

/// Body for `POST /api/integration/slack`.
#[derive(Debug, Clone, Deserialize)]
pub struct SlackRequest {
    /// Message text.
    pub message: String,
    /// Target channel; the default channel is used when absent.
    #[serde(default)]
    pub channel: Option<String>,
}
