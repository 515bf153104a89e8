//! Route definitions for the DeskPulse HTTP API.
//!
//! All routes are mounted under `/api`.

use axum::Router;
use axum::http::Method;
use axum::routing::{get, post};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::state::AppState;

/// Build the complete Axum router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .merge(health_routes())
        .merge(dashboard_routes())
        .merge(chart_routes())
        .merge(alert_routes())
        .merge(integration_routes());

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers(Any);

    Router::new()
        .nest("/api", api_routes)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(handlers::health::health))
}

fn dashboard_routes() -> Router<AppState> {
    Router::new()
        .route("/dashboard/kpis", get(handlers::dashboard::kpis))
        .route("/dashboard/filters", get(handlers::dashboard::filters))
        .route("/reports/weekly", get(handlers::dashboard::weekly_report))
}

fn chart_routes() -> Router<AppState> {
    Router::new()
        .route("/charts/trends", get(handlers::charts::trends))
        .route("/charts/priority", get(handlers::charts::priority))
        .route("/charts/status", get(handlers::charts::status))
        .route("/charts/departments", get(handlers::charts::departments))
        .route("/charts/sla", get(handlers::charts::sla))
        .route("/charts/weekday", get(handlers::charts::weekday))
}

fn alert_routes() -> Router<AppState> {
    Router::new().route("/alerts/preview", get(handlers::alerts::preview))
}

fn integration_routes() -> Router<AppState> {
    Router::new()
        .route("/integration/status", get(handlers::integration::status))
        .route("/integration/evaluate", post(handlers::integration::evaluate))
        .route("/integration/slack", post(handlers::integration::slack))
        .route("/integration/jira", post(handlers::integration::jira))
        .route(
            "/integration/executions/{id}",
            get(handlers::integration::execution),
        )
}
