//! DeskPulse Server: IT support ticket analytics dashboard
//!
//! Main entry point that wires all crates together and starts the server.

use std::sync::Arc;
use std::time::Duration;

use tracing_subscriber::{EnvFilter, fmt};

use deskpulse_api::{AppState, build_router};
use deskpulse_core::config::AppConfig;
use deskpulse_core::error::AppError;
use deskpulse_dataset::TicketLoader;
use deskpulse_service::DashboardSession;
use deskpulse_workflow::WorkflowClient;
use deskpulse_worker::{AlertMonitor, CronScheduler};

#[tokio::main]
async fn main() {
    let config = match load_configuration() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    init_logging(&config);

    if let Err(e) = run(config).await {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }
}

/// Load configuration from file and environment
fn load_configuration() -> Result<AppConfig, AppError> {
    let config_path =
        std::env::var("DESKPULSE_CONFIG").unwrap_or_else(|_| "config/default.toml".to_string());
    let env = std::env::var("DESKPULSE_ENV").unwrap_or_else(|_| "development".to_string());

    AppConfig::load_from(&config_path, &env)
}

/// Initialize tracing/logging
fn init_logging(config: &AppConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    match config.logging.format.as_str() {
        "json" => {
            fmt()
                .json()
                .with_env_filter(filter)
                .with_target(true)
                .with_thread_ids(true)
                .init();
        }
        _ => {
            fmt()
                .pretty()
                .with_env_filter(filter)
                .with_target(true)
                .init();
        }
    }
}

/// Main server run function
async fn run(config: AppConfig) -> Result<(), AppError> {
    tracing::info!("Starting DeskPulse v{}", env!("CARGO_PKG_VERSION"));

    // ── Step 1: Load the ticket table ────────────────────────────
    let report = TicketLoader::from_config(&config.dataset).load()?;
    if report.missing {
        tracing::warn!(
            "Dataset '{}' not found; dashboards will report no data",
            config.dataset.path
        );
    }
    let session = Arc::new(DashboardSession::new(
        Arc::new(report.table),
        config.dashboard.clone(),
    ));

    // ── Step 2: Workflow integration ─────────────────────────────
    let workflow = Arc::new(WorkflowClient::new(&config.workflow)?);
    let monitor = Arc::new(AlertMonitor::new(
        Arc::clone(&session),
        Arc::clone(&workflow) as _,
    ));
    tracing::info!("Workflow service at {}", workflow.base_url());

    // ── Step 3: Scheduler ────────────────────────────────────────
    let mut scheduler = if config.monitor.enabled {
        let scheduler = CronScheduler::new(Arc::clone(&monitor), config.monitor.clone()).await?;
        scheduler.register_default_tasks().await?;
        scheduler.start().await?;
        Some(scheduler)
    } else {
        tracing::info!("Alert monitor disabled");
        None
    };

    // ── Step 4: HTTP server ──────────────────────────────────────
    let config = Arc::new(config);
    let state = AppState::new(Arc::clone(&config), session, monitor, workflow);
    let app = build_router(state);

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind {}: {}", addr, e)))?;

    tracing::info!("DeskPulse server listening on {}", addr);

    let (shutdown_tx, mut shutdown_rx) = tokio::sync::watch::channel(false);
    let server = axum::serve(listener, app).with_graceful_shutdown(async move {
        shutdown_signal().await;
        tracing::info!("Shutdown signal received, starting graceful shutdown...");
        let _ = shutdown_tx.send(true);
    });
    let mut server = std::pin::pin!(server.into_future());

    // Once the signal arrives, in-flight requests get a bounded grace period.
    let grace = Duration::from_secs(config.server.shutdown_grace_seconds);
    tokio::select! {
        result = &mut server => {
            result.map_err(|e| AppError::internal(format!("Server error: {}", e)))?;
        }
        _ = async {
            let _ = shutdown_rx.changed().await;
            tokio::time::sleep(grace).await;
        } => {
            tracing::warn!("Grace period of {}s elapsed, dropping open connections", grace.as_secs());
        }
    }

    // ── Step 5: Stop background tasks ────────────────────────────
    if let Some(scheduler) = scheduler.as_mut() {
        scheduler.shutdown().await?;
    }

    tracing::info!("DeskPulse server shut down gracefully");
    Ok(())
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM)
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
