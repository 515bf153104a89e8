//! Chart series handlers.
//!
//! Each returns `{"status":"no_data"}` inside the response envelope when
//! the filters select no tickets.

use axum::Json;
use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use chrono::Utc;

use deskpulse_service::{
    CategoryCount, ChartData, Dimension, FilterParams, SlaBucket, TrendSeries, WeekdayCount,
};

use crate::dto::response::ApiResponse;
use crate::error::ApiError;
use crate::handlers::criteria;
use crate::state::AppState;

type ChartResult<T> = Result<Json<ApiResponse<ChartData<T>>>, ApiError>;

/// GET /api/charts/trends
pub async fn trends(
    State(state): State<AppState>,
    query: Result<Query<FilterParams>, QueryRejection>,
) -> ChartResult<TrendSeries> {
    let criteria = criteria(query)?;
    Ok(Json(ApiResponse::ok(state.session.trends(&criteria))))
}

/// GET /api/charts/priority
pub async fn priority(
    State(state): State<AppState>,
    query: Result<Query<FilterParams>, QueryRejection>,
) -> ChartResult<Vec<CategoryCount>> {
    distribution(&state, query, Dimension::Priority)
}

/// GET /api/charts/status
pub async fn status(
    State(state): State<AppState>,
    query: Result<Query<FilterParams>, QueryRejection>,
) -> ChartResult<Vec<CategoryCount>> {
    distribution(&state, query, Dimension::Status)
}

/// GET /api/charts/departments
pub async fn departments(
    State(state): State<AppState>,
    query: Result<Query<FilterParams>, QueryRejection>,
) -> ChartResult<Vec<CategoryCount>> {
    distribution(&state, query, Dimension::Department)
}

/// GET /api/charts/sla
pub async fn sla(
    State(state): State<AppState>,
    query: Result<Query<FilterParams>, QueryRejection>,
) -> ChartResult<Vec<SlaBucket>> {
    let criteria = criteria(query)?;
    Ok(Json(ApiResponse::ok(
        state.session.sla_compliance(&criteria, Utc::now()),
    )))
}

/// GET /api/charts/weekday
pub async fn weekday(
    State(state): State<AppState>,
    query: Result<Query<FilterParams>, QueryRejection>,
) -> ChartResult<Vec<WeekdayCount>> {
    let criteria = criteria(query)?;
    Ok(Json(ApiResponse::ok(state.session.weekday(&criteria))))
}

fn distribution(
    state: &AppState,
    query: Result<Query<FilterParams>, QueryRejection>,
    dimension: Dimension,
) -> ChartResult<Vec<CategoryCount>> {
    let criteria = criteria(query)?;
    Ok(Json(ApiResponse::ok(
        state.session.distribution(&criteria, dimension),
    )))
}
