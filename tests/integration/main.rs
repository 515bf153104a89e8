//! HTTP-level integration tests driving the router in-process.

mod helpers;

mod alert_test;
mod chart_test;
mod dashboard_test;
mod workflow_test;
