//! # deskpulse-api
//!
//! HTTP API layer for DeskPulse built on Axum.
//!
//! Every chart endpoint is a filter-change trigger: it parses the filter
//! query, runs the pipeline for that chart, and returns either the series
//! or an explicit "no data" marker.

pub mod dto;
pub mod error;
pub mod handlers;
pub mod router;
pub mod state;

pub use router::build_router;
pub use state::AppState;
