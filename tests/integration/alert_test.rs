//! Integration tests for SLA alert previews and monitor runs.

use axum::http::StatusCode;

use crate::helpers::{TestApp, fixture_tickets};

#[tokio::test]
async fn test_preview_lists_warnings_and_escalations() {
    let app = TestApp::new().await;

    let response = app.get("/api/alerts/preview").await;

    assert_eq!(response.status, StatusCode::OK);
    let warnings = response.data()["warnings"].as_array().unwrap();
    let ids: Vec<&str> = warnings
        .iter()
        .map(|w| w["ticket_id"].as_str().unwrap())
        .collect();
    assert_eq!(ids, ["TKT-1", "TKT-2"]);

    let escalations = response.data()["escalations"].as_array().unwrap();
    assert_eq!(escalations.len(), 1);
    assert_eq!(escalations[0]["ticket_id"], "TKT-1");
    assert!(escalations[0]["hours_overdue"].as_f64().unwrap() >= 6.0);

    assert!(app.delivered_workflows().is_empty());
}

#[tokio::test]
async fn test_evaluate_dispatches_both_alerts() {
    let app = TestApp::new().await;

    let response = app.request("POST", "/api/integration/evaluate", None).await;

    assert_eq!(response.status, StatusCode::OK);
    let report = response.data();
    assert_eq!(report["available"], true);
    assert_eq!(report["warnings"], 2);
    assert_eq!(report["escalations"], 1);
    assert_eq!(report["sla_breach"]["outcome"], "delivered");
    assert_eq!(report["critical_escalation"]["outcome"], "delivered");

    assert_eq!(
        app.delivered_workflows(),
        ["sla-breach-alert", "critical-escalation"]
    );
    let deliveries = app.deliveries.lock().unwrap();
    assert_eq!(deliveries[0].1["total_warnings"], 2);
    assert_eq!(deliveries[1].1["count"], 1);
}

#[tokio::test]
async fn test_evaluate_skips_when_service_is_down() {
    let app = TestApp::offline(fixture_tickets(chrono::Utc::now()));

    let response = app.request("POST", "/api/integration/evaluate", None).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.data()["available"], false);
    assert_eq!(response.data()["sla_breach"]["outcome"], "skipped");
    assert_eq!(response.data()["critical_escalation"]["outcome"], "skipped");
}
