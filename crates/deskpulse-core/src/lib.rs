//! # deskpulse-core
//!
//! Core crate for DeskPulse. Contains configuration schemas, the unified
//! error system, filter primitives shared by the dashboard pipelines, and
//! the contract for outbound notification delivery.
//!
//! This crate has **no** internal dependencies on other DeskPulse crates.

pub mod config;
pub mod error;
pub mod result;
pub mod traits;
pub mod types;

pub use error::AppError;
pub use result::AppResult;
