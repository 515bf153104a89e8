//! Integration tests for the dashboard header, filters and reports.

use axum::http::StatusCode;

use crate::helpers::TestApp;

#[tokio::test]
async fn test_health_reports_ticket_count() {
    let app = TestApp::offline(Vec::new());

    let response = app.get("/api/health").await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["success"], true);
    assert_eq!(response.data()["status"], "ok");
    assert_eq!(response.data()["tickets"], 0);
}

#[tokio::test]
async fn test_kpis_over_full_table() {
    let app = TestApp::new().await;

    let response = app.get("/api/dashboard/kpis").await;

    assert_eq!(response.status, StatusCode::OK);
    let kpis = response.data();
    assert_eq!(kpis["total_tickets"], 5);
    assert_eq!(kpis["open_tickets"], 3);
    assert_eq!(kpis["sla_compliance_percent"], 60.0);
    assert_eq!(kpis["avg_resolution_hours"], 20.0);
    assert_eq!(kpis["target_met"], false);
}

#[tokio::test]
async fn test_kpis_respect_filters() {
    let app = TestApp::new().await;

    let response = app
        .get("/api/dashboard/kpis?priority=Medium&department=all")
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.data()["total_tickets"], 2);
    assert_eq!(response.data()["open_tickets"], 1);
}

#[tokio::test]
async fn test_filter_options_are_sorted() {
    let app = TestApp::new().await;

    let response = app.get("/api/dashboard/filters").await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(
        response.data()["departments"],
        serde_json::json!(["Finance", "HR", "IT"])
    );
    assert!(response.data()["min_date"].is_string());
}

#[tokio::test]
async fn test_filter_options_on_empty_table() {
    let app = TestApp::offline(Vec::new());

    let response = app.get("/api/dashboard/filters").await;

    assert_eq!(response.status, StatusCode::OK);
    assert!(response.data()["min_date"].is_null());
    assert_eq!(response.data()["priorities"], serde_json::json!([]));
}

#[tokio::test]
async fn test_weekly_report() {
    let app = TestApp::new().await;

    let response = app.get("/api/reports/weekly").await;

    assert_eq!(response.status, StatusCode::OK);
    let report = response.data();
    assert_eq!(report["metrics"]["total_tickets"], 5);
    assert_eq!(report["metrics"]["resolved_tickets"], 1);
    assert_eq!(report["by_department"]["Finance"], 2);
    assert!(report["period"]["start"].is_string());
}
