//! Workflow-integration handlers.

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use chrono::Utc;
use serde_json::Value;

use deskpulse_core::error::AppError;
use deskpulse_core::traits::dispatcher::DeliveryError;
use deskpulse_service::AlertPayloadBuilder;
use deskpulse_service::alert::workflows;
use deskpulse_workflow::IntegrationStatus;
use deskpulse_worker::MonitorReport;

use crate::dto::request::SlackRequest;
use crate::dto::response::{ApiResponse, DeliveryResponse};
use crate::error::ApiError;
use crate::state::AppState;

/// GET /api/integration/status
pub async fn status(State(state): State<AppState>) -> Json<ApiResponse<IntegrationStatus>> {
    Json(ApiResponse::ok(state.workflow.integration_status().await))
}

/// POST /api/integration/evaluate
///
/// Runs one monitor round immediately.
pub async fn evaluate(State(state): State<AppState>) -> Json<ApiResponse<MonitorReport>> {
    Json(ApiResponse::ok(state.monitor.run_once(Utc::now()).await))
}

/// POST /api/integration/slack
pub async fn slack(
    State(state): State<AppState>,
    body: Result<Json<SlackRequest>, JsonRejection>,
) -> Result<Json<ApiResponse<DeliveryResponse>>, ApiError> {
    let Json(req) = body?;
    if req.message.trim().is_empty() {
        return Err(AppError::validation("Message must not be empty").into());
    }
    let message = AlertPayloadBuilder::slack(req.message, req.channel.as_deref(), Utc::now());
    let result = state
        .workflow
        .trigger(workflows::SLACK_NOTIFICATION, &message)
        .await;
    Ok(Json(ApiResponse::ok(DeliveryResponse::from_result(
        workflows::SLACK_NOTIFICATION,
        result,
    ))))
}

/// POST /api/integration/jira
///
/// Forwards the request body unchanged.
pub async fn jira(
    State(state): State<AppState>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<Json<ApiResponse<DeliveryResponse>>, ApiError> {
    let Json(ticket) = body?;
    if !ticket.is_object() {
        return Err(AppError::validation("Ticket data must be a JSON object").into());
    }
    let result = state
        .workflow
        .trigger(workflows::CREATE_JIRA_TICKET, &ticket)
        .await;
    Ok(Json(ApiResponse::ok(DeliveryResponse::from_result(
        workflows::CREATE_JIRA_TICKET,
        result,
    ))))
}

/// GET /api/integration/executions/{id}
pub async fn execution(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<Value>>, ApiError> {
    match state.workflow.execution_status(&id).await {
        Ok(body) => Ok(Json(ApiResponse::ok(body))),
        Err(DeliveryError::Status { code: 404, .. }) => {
            Err(AppError::not_found(format!("Execution '{id}' not found")).into())
        }
        Err(DeliveryError::Encode(message)) => Err(AppError::validation(message).into()),
        Err(e) => Err(AppError::external_service(e.to_string()).into()),
    }
}
