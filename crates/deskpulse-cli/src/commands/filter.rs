//! Filter flags shared by the dashboard commands.

use clap::Args;

use deskpulse_core::error::AppError;
use deskpulse_service::{FilterCriteria, FilterParams};

/// Dashboard filter flags
#[derive(Debug, Clone, Args)]
pub struct FilterArgs {
    /// First creation date included (YYYY-MM-DD)
    #[arg(long)]
    pub start_date: Option<String>,
    /// Last creation date included (YYYY-MM-DD)
    #[arg(long)]
    pub end_date: Option<String>,
    /// Priority, or "all"
    #[arg(long)]
    pub priority: Option<String>,
    /// Department, or "all"
    #[arg(long)]
    pub department: Option<String>,
    /// Status, or "all"
    #[arg(long)]
    pub status: Option<String>,
}

impl FilterArgs {
    pub fn criteria(&self) -> Result<FilterCriteria, AppError> {
        FilterParams {
            start_date: self.start_date.clone(),
            end_date: self.end_date.clone(),
            priority: self.priority.clone(),
            department: self.department.clone(),
            status: self.status.clone(),
        }
        .into_criteria()
    }
}
