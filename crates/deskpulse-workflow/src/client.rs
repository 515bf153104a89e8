//! Webhook client for the workflow-automation service.

use std::time::Duration;

use async_trait::async_trait;
use serde::Serialize;
use serde_json::Value;

use deskpulse_core::config::workflow::WorkflowConfig;
use deskpulse_core::error::AppError;
use deskpulse_core::result::AppResult;
use deskpulse_core::traits::dispatcher::{
    DeliveryError, DeliveryReceipt, DeliveryResult, NotificationDispatcher,
};

use crate::catalog::workflow_names;
use crate::status::IntegrationStatus;

/// Upper bound on any request to the workflow service.
const MAX_TIMEOUT_SECS: u64 = 30;

/// Posts JSON payloads to named workflows and probes service health.
#[derive(Debug, Clone)]
pub struct WorkflowClient {
    http: reqwest::Client,
    base_url: String,
    api_key: Option<String>,
    timeout: Duration,
    status_timeout: Duration,
    health_url: String,
    health_timeout: Duration,
}

impl WorkflowClient {
    /// Build a client from the workflow configuration section.
    pub fn new(config: &WorkflowConfig) -> AppResult<Self> {
        let http = reqwest::Client::builder()
            .build()
            .map_err(|e| AppError::internal(format!("Failed to build HTTP client: {e}")))?;

        let base_url = config.base_url.trim_end_matches('/').to_string();
        let health_url = format!("{base_url}/{}", config.health_path.trim_start_matches('/'));

        Ok(Self {
            http,
            base_url,
            api_key: config.api_key.clone().filter(|k| !k.is_empty()),
            timeout: Duration::from_secs(config.timeout_seconds.min(MAX_TIMEOUT_SECS)),
            status_timeout: Duration::from_secs(config.status_timeout_seconds.min(MAX_TIMEOUT_SECS)),
            health_url,
            health_timeout: Duration::from_secs(config.health_timeout_seconds),
        })
    }

    /// Base URL without a trailing slash.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Serialize `payload` and deliver it to `workflow`.
    pub async fn trigger<T: Serialize + ?Sized>(&self, workflow: &str, payload: &T) -> DeliveryResult {
        let body = serde_json::to_value(payload).map_err(|e| DeliveryError::Encode(e.to_string()))?;
        self.dispatch(workflow, &body).await
    }

    /// Look up a workflow execution by id.
    ///
    /// The id is sent as a single encoded path segment; `.` and `..` are rejected.
    pub async fn execution_status(&self, execution_id: &str) -> Result<Value, DeliveryError> {
        let url = self.execution_url(execution_id)?;
        let response = self
            .authorize(self.http.get(url))
            .timeout(self.status_timeout)
            .send()
            .await
            .map_err(|e| transport_error(e, self.status_timeout))?;

        let code = response.status().as_u16();
        let text = response
            .text()
            .await
            .map_err(|e| transport_error(e, self.status_timeout))?;
        if code != 200 {
            return Err(DeliveryError::Status { code, body: text });
        }
        serde_json::from_str(&text).map_err(|e| DeliveryError::Transport(format!("Invalid JSON response: {e}")))
    }

    /// Probe the health endpoint. Never fails; problems are reported in the status.
    pub async fn integration_status(&self) -> IntegrationStatus {
        let workflows = workflow_names();
        match self
            .http
            .get(&self.health_url)
            .timeout(self.health_timeout)
            .send()
            .await
        {
            Ok(response) => {
                IntegrationStatus::answered(self.base_url.clone(), workflows, response.status().as_u16())
            }
            Err(e) => {
                tracing::debug!("Workflow service health probe failed: {e}");
                IntegrationStatus::unreachable(self.base_url.clone(), workflows, &e.to_string())
            }
        }
    }

    fn execution_url(&self, execution_id: &str) -> Result<reqwest::Url, DeliveryError> {
        if matches!(execution_id.trim(), "" | "." | "..") {
            return Err(DeliveryError::Encode(format!(
                "Invalid execution id '{execution_id}'"
            )));
        }
        let mut url = reqwest::Url::parse(&self.base_url)
            .map_err(|e| DeliveryError::Transport(format!("Invalid base URL: {e}")))?;
        url.path_segments_mut()
            .map_err(|_| DeliveryError::Transport(format!("Base URL '{}' cannot carry a path", self.base_url)))?
            .pop_if_empty()
            .extend(["api", "v1", "executions", execution_id]);
        Ok(url)
    }

    fn authorize(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match &self.api_key {
            Some(key) => request.bearer_auth(key),
            None => request,
        }
    }
}

#[async_trait]
impl NotificationDispatcher for WorkflowClient {
    async fn dispatch(&self, workflow: &str, payload: &Value) -> DeliveryResult {
        let url = format!("{}/webhook/{workflow}", self.base_url);
        let response = self
            .authorize(self.http.post(&url))
            .header(reqwest::header::ACCEPT, "application/json")
            .json(payload)
            .timeout(self.timeout)
            .send()
            .await
            .map_err(|e| transport_error(e, self.timeout))?;

        let code = response.status().as_u16();
        let text = response
            .text()
            .await
            .map_err(|e| transport_error(e, self.timeout))?;

        if code != 200 {
            tracing::warn!(workflow, code, "Workflow rejected payload");
            return Err(DeliveryError::Status { code, body: text });
        }

        tracing::info!(workflow, "Workflow triggered");
        Ok(DeliveryReceipt {
            workflow: workflow.to_string(),
            response: serde_json::from_str(&text).ok(),
            message: "Workflow triggered successfully".to_string(),
        })
    }

    async fn available(&self) -> bool {
        self.integration_status().await.available
    }
}

fn transport_error(err: reqwest::Error, timeout: Duration) -> DeliveryError {
    if err.is_timeout() {
        DeliveryError::Timeout(timeout.as_secs())
    } else {
        DeliveryError::Transport(err.to_string())
    }
}
