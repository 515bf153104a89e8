//! Cron scheduler for the periodic tick and the weekly report.

use std::sync::Arc;

use chrono::Utc;
use tokio_cron_scheduler::{Job as CronJob, JobScheduler};

use deskpulse_core::config::monitor::MonitorConfig;
use deskpulse_core::error::AppError;

use crate::monitor::{AlertMonitor, AlertOutcome};

/// Cron-based scheduler for periodic background tasks
pub struct CronScheduler {
    /// The underlying job scheduler
    scheduler: JobScheduler,
    /// Monitor invoked on every tick
    monitor: Arc<AlertMonitor>,
    /// Schedules
    config: MonitorConfig,
}

impl std::fmt::Debug for CronScheduler {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CronScheduler")
            .field("schedule", &self.config.schedule)
            .field("weekly_report_schedule", &self.config.weekly_report_schedule)
            .finish()
    }
}

impl CronScheduler {
    /// Create a new cron scheduler
    pub async fn new(monitor: Arc<AlertMonitor>, config: MonitorConfig) -> Result<Self, AppError> {
        let scheduler = JobScheduler::new()
            .await
            .map_err(|e| AppError::internal(format!("Failed to create scheduler: {e}")))?;

        Ok(Self {
            scheduler,
            monitor,
            config,
        })
    }

    /// Register the alert monitor tick and the weekly report
    pub async fn register_default_tasks(&self) -> Result<(), AppError> {
        self.register_alert_monitor().await?;
        self.register_weekly_report().await?;

        tracing::info!("All scheduled tasks registered");
        Ok(())
    }

    /// Start the scheduler
    pub async fn start(&self) -> Result<(), AppError> {
        self.scheduler
            .start()
            .await
            .map_err(|e| AppError::internal(format!("Failed to start scheduler: {e}")))?;

        tracing::info!("Cron scheduler started");
        Ok(())
    }

    /// Shutdown the scheduler
    pub async fn shutdown(&mut self) -> Result<(), AppError> {
        self.scheduler
            .shutdown()
            .await
            .map_err(|e| AppError::internal(format!("Failed to shutdown scheduler: {e}")))?;

        tracing::info!("Cron scheduler shut down");
        Ok(())
    }

    /// SLA evaluation and alert delivery on every tick
    async fn register_alert_monitor(&self) -> Result<(), AppError> {
        let monitor = Arc::clone(&self.monitor);
        let job = CronJob::new_async(self.config.schedule.as_str(), move |_uuid, _lock| {
            let monitor = Arc::clone(&monitor);
            Box::pin(async move {
                let report = monitor.run_once(Utc::now()).await;
                if report.sla_breach.is_failure() || report.critical_escalation.is_failure() {
                    tracing::warn!(
                        warnings = report.warnings,
                        escalations = report.escalations,
                        "Alert monitor tick finished with delivery failures"
                    );
                }
            })
        })
        .map_err(|e| AppError::configuration(format!("Invalid monitor schedule '{}': {e}", self.config.schedule)))?;

        self.scheduler
            .add(job)
            .await
            .map_err(|e| AppError::internal(format!("Failed to add alert_monitor schedule: {e}")))?;

        tracing::info!("Registered: alert_monitor ({})", self.config.schedule);
        Ok(())
    }

    /// Weekly report delivery
    async fn register_weekly_report(&self) -> Result<(), AppError> {
        let monitor = Arc::clone(&self.monitor);
        let job = CronJob::new_async(self.config.weekly_report_schedule.as_str(), move |_uuid, _lock| {
            let monitor = Arc::clone(&monitor);
            Box::pin(async move {
                match monitor.send_weekly_report(Utc::now()).await {
                    AlertOutcome::Delivered(_) => tracing::info!("Weekly report delivered"),
                    AlertOutcome::Failed(e) => tracing::error!("Weekly report delivery failed: {e}"),
                    _ => {}
                }
            })
        })
        .map_err(|e| {
            AppError::configuration(format!(
                "Invalid weekly report schedule '{}': {e}",
                self.config.weekly_report_schedule
            ))
        })?;

        self.scheduler
            .add(job)
            .await
            .map_err(|e| AppError::internal(format!("Failed to add weekly_report schedule: {e}")))?;

        tracing::info!("Registered: weekly_report ({})", self.config.weekly_report_schedule);
        Ok(())
    }
}
