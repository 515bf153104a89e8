//! Integration tests for the chart endpoints.

use axum::http::StatusCode;
use serde_json::json;

use crate::helpers::TestApp;

#[tokio::test]
async fn test_priority_distribution() {
    let app = TestApp::new().await;

    let response = app.get("/api/charts/priority").await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.data()["status"], "ok");
    assert_eq!(
        response.data()["data"],
        json!([
            {"label": "Medium", "count": 2},
            {"label": "Critical", "count": 1},
            {"label": "High", "count": 1},
            {"label": "Low", "count": 1},
        ])
    );
}

#[tokio::test]
async fn test_empty_selection_is_no_data() {
    let app = TestApp::new().await;

    for path in [
        "/api/charts/trends",
        "/api/charts/priority",
        "/api/charts/status",
        "/api/charts/departments",
        "/api/charts/sla",
        "/api/charts/weekday",
    ] {
        let response = app.get(&format!("{path}?department=Legal")).await;
        assert_eq!(response.status, StatusCode::OK, "{path}");
        assert_eq!(response.data(), &json!({"status": "no_data"}), "{path}");
    }
}

#[tokio::test]
async fn test_empty_table_is_no_data() {
    let app = TestApp::offline(Vec::new());

    let response = app.get("/api/charts/trends").await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.data()["status"], "no_data");
}

#[tokio::test]
async fn test_sla_chart_flags_buckets_below_target() {
    let app = TestApp::new().await;

    let response = app.get("/api/charts/sla").await;

    assert_eq!(response.status, StatusCode::OK);
    let buckets = response.data()["data"].as_array().unwrap();
    let priorities: Vec<&str> = buckets
        .iter()
        .map(|b| b["priority"].as_str().unwrap())
        .collect();
    assert_eq!(priorities, ["Low", "Medium", "High", "Critical"]);

    assert_eq!(buckets[0]["percentage"], 100.0);
    assert_eq!(buckets[0]["below_target"], false);
    assert_eq!(buckets[1]["percentage"], 50.0);
    assert_eq!(buckets[1]["below_target"], true);
    assert_eq!(buckets[3]["met"], 0);
}

#[tokio::test]
async fn test_weekday_always_has_seven_days() {
    let app = TestApp::new().await;

    let response = app.get("/api/charts/weekday").await;

    assert_eq!(response.status, StatusCode::OK);
    let days = response.data()["data"].as_array().unwrap();
    assert_eq!(days.len(), 7);
    assert_eq!(days[0]["day"], "Monday");
    let total: u64 = days.iter().map(|d| d["count"].as_u64().unwrap()).sum();
    assert_eq!(total, 5);
}

#[tokio::test]
async fn test_status_filter_narrows_trend() {
    let app = TestApp::new().await;

    let response = app.get("/api/charts/trends?status=Closed").await;

    assert_eq!(response.status, StatusCode::OK);
    let series = &response.data()["data"];
    assert_eq!(series["created"].as_array().unwrap().len(), 1);
    assert_eq!(series["resolved"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_unknown_priority_is_rejected() {
    let app = TestApp::new().await;

    let response = app.get("/api/charts/status?priority=Urgent").await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["error"], "VALIDATION_ERROR");
    assert!(response.body["message"].as_str().unwrap().contains("Urgent"));
}

#[tokio::test]
async fn test_malformed_date_is_rejected() {
    let app = TestApp::new().await;

    let response = app
        .get("/api/charts/departments?start_date=2025-13-01&end_date=2025-12-31")
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["error"], "VALIDATION_ERROR");
}
