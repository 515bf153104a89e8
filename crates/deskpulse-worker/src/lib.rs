//! Periodic tasks for DeskPulse.
//!
//! This crate provides:
//! - The alert monitor, which evaluates SLA state on each tick and hands
//!   the resulting payloads to a notification dispatcher
//! - A cron scheduler that drives the monitor and the weekly report

pub mod monitor;
pub mod scheduler;

pub use monitor::{AlertMonitor, AlertOutcome, MonitorReport};
pub use scheduler::CronScheduler;
