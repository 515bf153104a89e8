//! Alert preview handler.

use axum::Json;
use axum::extract::State;
use chrono::Utc;

use deskpulse_service::SlaEvaluation;

use crate::dto::response::ApiResponse;
use crate::state::AppState;

/// GET /api/alerts/preview
///
/// Current SLA warnings and escalations, without dispatching anything.
pub async fn preview(State(state): State<AppState>) -> Json<ApiResponse<SlaEvaluation>> {
    Json(ApiResponse::ok(state.session.evaluate_sla(Utc::now())))
}
