//! Dashboard header handlers.

use axum::Json;
use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use chrono::Utc;

use deskpulse_service::{FilterOptions, FilterParams, KpiSummary, WeeklyReport};

use crate::dto::response::ApiResponse;
use crate::error::ApiError;
use crate::handlers::criteria;
use crate::state::AppState;

/// GET /api/dashboard/kpis
pub async fn kpis(
    State(state): State<AppState>,
    query: Result<Query<FilterParams>, QueryRejection>,
) -> Result<Json<ApiResponse<KpiSummary>>, ApiError> {
    let criteria = criteria(query)?;
    Ok(Json(ApiResponse::ok(state.session.kpis(&criteria, Utc::now()))))
}

/// GET /api/dashboard/filters
pub async fn filters(State(state): State<AppState>) -> Json<ApiResponse<FilterOptions>> {
    Json(ApiResponse::ok(state.session.filter_options()))
}

/// GET /api/reports/weekly
pub async fn weekly_report(State(state): State<AppState>) -> Json<ApiResponse<WeeklyReport>> {
    Json(ApiResponse::ok(state.session.weekly_report(Utc::now())))
}
