//! Core type definitions used across the DeskPulse workspace.

pub mod filter;

pub use filter::{DateRange, Selection};
