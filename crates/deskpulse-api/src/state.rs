//! Application state shared across all handlers.

use std::sync::Arc;
use std::time::Instant;

use deskpulse_core::config::AppConfig;
use deskpulse_service::DashboardSession;
use deskpulse_workflow::WorkflowClient;
use deskpulse_worker::AlertMonitor;

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
/// All fields are `Arc`-wrapped for cheap cloning across tasks.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Application configuration
    pub config: Arc<AppConfig>,
    /// Loaded tickets and dashboard thresholds
    pub session: Arc<DashboardSession>,
    /// SLA monitor used for on-demand evaluation
    pub monitor: Arc<AlertMonitor>,
    /// Workflow-automation client
    pub workflow: Arc<WorkflowClient>,
    /// Process start, for uptime reporting
    pub started_at: Instant,
}

impl AppState {
    pub fn new(
        config: Arc<AppConfig>,
        session: Arc<DashboardSession>,
        monitor: Arc<AlertMonitor>,
        workflow: Arc<WorkflowClient>,
    ) -> Self {
        Self {
            config,
            session,
            monitor,
            workflow,
            started_at: Instant::now(),
        }
    }
}
