//! Workflow-automation (webhook) integration configuration.

use serde::{Deserialize, Serialize};

/// Settings for the external workflow-automation service.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkflowConfig {
    /// Base URL of the automation instance. Trailing slashes are ignored.
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Optional bearer token sent with every request.
    #[serde(default)]
    pub api_key: Option<String>,
    /// Timeout for webhook deliveries in seconds.
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u64,
    /// Timeout for execution status lookups in seconds.
    #[serde(default = "default_status_timeout")]
    pub status_timeout_seconds: u64,
    /// Path of the health endpoint, relative to the base URL.
    #[serde(default = "default_health_path")]
    pub health_path: String,
    /// Timeout for the health probe in seconds.
    #[serde(default = "default_health_timeout")]
    pub health_timeout_seconds: u64,
}

impl Default for WorkflowConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            api_key: None,
            timeout_seconds: default_timeout(),
            status_timeout_seconds: default_status_timeout(),
            health_path: default_health_path(),
            health_timeout_seconds: default_health_timeout(),
        }
    }
}

fn default_base_url() -> String {
    "http://localhost:5678".to_string()
}

fn default_timeout() -> u64 {
    30
}

fn default_status_timeout() -> u64 {
    10
}

fn default_health_path() -> String {
    "/healthz".to_string()
}

fn default_health_timeout() -> u64 {
    2
}
