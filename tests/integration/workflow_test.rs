//! Integration tests for the workflow-integration endpoints.

use axum::http::StatusCode;
use serde_json::json;

use crate::helpers::TestApp;

#[tokio::test]
async fn test_status_when_connected() {
    let app = TestApp::new().await;

    let response = app.get("/api/integration/status").await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.data()["available"], true);
    assert_eq!(response.data()["status"], "connected");
    assert_eq!(response.data()["workflows"].as_array().unwrap().len(), 5);
}

#[tokio::test]
async fn test_status_when_unreachable() {
    let app = TestApp::offline(Vec::new());

    let response = app.get("/api/integration/status").await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.data()["available"], false);
    assert_eq!(response.data()["status"], "disconnected");
    assert!(
        response.data()["message"]
            .as_str()
            .unwrap()
            .starts_with("Workflow service not accessible")
    );
}

#[tokio::test]
async fn test_slack_uses_default_channel() {
    let app = TestApp::new().await;

    let response = app
        .request(
            "POST",
            "/api/integration/slack",
            Some(json!({"message": "Printer queue cleared"})),
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.data()["workflow"], "slack-notification");
    assert_eq!(response.data()["delivered"], true);

    let deliveries = app.deliveries.lock().unwrap();
    assert_eq!(deliveries.len(), 1);
    assert_eq!(deliveries[0].1["channel"], "#it-support");
    assert_eq!(deliveries[0].1["message"], "Printer queue cleared");
}

#[tokio::test]
async fn test_slack_rejects_blank_message() {
    let app = TestApp::new().await;

    let response = app
        .request("POST", "/api/integration/slack", Some(json!({"message": "  "})))
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert!(app.delivered_workflows().is_empty());
}

#[tokio::test]
async fn test_slack_body_errors_use_error_envelope() {
    let app = TestApp::new().await;

    let response = app
        .request("POST", "/api/integration/slack", Some(json!({"channel": "#ops"})))
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["error"], "VALIDATION_ERROR");
    assert!(response.body["message"].as_str().unwrap().contains("message"));
    assert!(app.delivered_workflows().is_empty());
}

#[tokio::test]
async fn test_jira_rejects_malformed_json() {
    let app = TestApp::new().await;

    let response = app.raw_post("/api/integration/jira", "{not json").await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["error"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_jira_forwards_body_unchanged() {
    let app = TestApp::new().await;
    let ticket = json!({"summary": "VPN down", "fields": {"priority": "Critical"}});

    let response = app
        .request("POST", "/api/integration/jira", Some(ticket.clone()))
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.data()["delivered"], true);
    let deliveries = app.deliveries.lock().unwrap();
    assert_eq!(deliveries[0].0, "create-jira-ticket");
    assert_eq!(deliveries[0].1, ticket);
}

#[tokio::test]
async fn test_jira_requires_object() {
    let app = TestApp::new().await;

    let response = app
        .request("POST", "/api/integration/jira", Some(json!(["not", "an", "object"])))
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_delivery_failure_is_reported_not_raised() {
    let app = TestApp::offline(Vec::new());

    let response = app
        .request("POST", "/api/integration/slack", Some(json!({"message": "hello"})))
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.data()["delivered"], false);
}

#[tokio::test]
async fn test_execution_lookup() {
    let app = TestApp::new().await;

    let found = app.get("/api/integration/executions/42").await;
    assert_eq!(found.status, StatusCode::OK);
    assert_eq!(found.data()["id"], "42");

    let missing = app.get("/api/integration/executions/missing").await;
    assert_eq!(missing.status, StatusCode::NOT_FOUND);

    let traversal = app
        .get("/api/integration/executions/..%2F..%2F..%2Fadmin%2Fusers")
        .await;
    assert_eq!(traversal.status, StatusCode::OK);
    assert_eq!(traversal.data()["id"], "../../../admin/users");

    let dot_dot = app.get("/api/integration/executions/..").await;
    assert_eq!(dot_dot.status, StatusCode::BAD_REQUEST);
}
