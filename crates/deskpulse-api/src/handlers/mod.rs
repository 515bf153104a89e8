//! HTTP request handlers, grouped by area.

pub mod alerts;
pub mod charts;
pub mod dashboard;
pub mod health;
pub mod integration;

use axum::extract::Query;
use axum::extract::rejection::QueryRejection;

use deskpulse_service::{FilterCriteria, FilterParams};

use crate::error::ApiError;

/// Validate the filter query shared by the dashboard and chart endpoints.
pub(crate) fn criteria(
    query: Result<Query<FilterParams>, QueryRejection>,
) -> Result<FilterCriteria, ApiError> {
    let Query(params) = query?;
    Ok(params.into_criteria()?)
}
