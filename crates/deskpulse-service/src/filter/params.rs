//! Raw filter parameters as they arrive from a query string or CLI flags.

use chrono::NaiveDate;
use serde::Deserialize;

use deskpulse_core::error::AppError;
use deskpulse_core::result::AppResult;
use deskpulse_core::types::{DateRange, Selection};

use super::criteria::FilterCriteria;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Unvalidated filter input.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FilterParams {
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub priority: Option<String>,
    pub department: Option<String>,
    pub status: Option<String>,
}

impl FilterParams {
    /// Validate into [`FilterCriteria`].
    ///
    /// The date range applies only when both bounds are given. Unknown
    /// priority or status values and malformed dates are validation errors;
    /// departments are free text.
    pub fn into_criteria(self) -> AppResult<FilterCriteria> {
        let start = parse_date(self.start_date.as_deref(), "start_date")?;
        let end = parse_date(self.end_date.as_deref(), "end_date")?;
        let date_range = match (start, end) {
            (Some(start), Some(end)) => Some(DateRange::new(start, end)),
            _ => None,
        };

        Ok(FilterCriteria {
            date_range,
            priority: Selection::parse(self.priority.as_deref())?,
            department: Selection::parse(self.department.as_deref())
                .unwrap_or_else(|e: std::convert::Infallible| match e {}),
            status: Selection::parse(self.status.as_deref())?,
        })
    }
}

fn parse_date(raw: Option<&str>, field: &str) -> AppResult<Option<NaiveDate>> {
    match raw.map(str::trim).filter(|v| !v.is_empty()) {
        None => Ok(None),
        Some(v) => NaiveDate::parse_from_str(v, DATE_FORMAT)
            .map(Some)
            .map_err(|_| AppError::validation(format!("Invalid {field} '{v}', expected YYYY-MM-DD"))),
    }
}
