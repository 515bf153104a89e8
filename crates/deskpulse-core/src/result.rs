//! Convenience result type alias for DeskPulse.

use crate::error::AppError;

/// A specialized `Result` type for DeskPulse operations.
pub type AppResult<T> = Result<T, AppError>;
