//! Shared test helpers for integration tests.

use std::sync::{Arc, Mutex};

use axum::Router;
use axum::body::Body;
use axum::extract::{Path, State};
use axum::http::{Request, StatusCode};
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::Json;
use chrono::{DateTime, Duration, Utc};
use serde_json::Value;
use tower::ServiceExt;

use deskpulse_api::{AppState, build_router};
use deskpulse_core::config::AppConfig;
use deskpulse_entity::{Priority, Ticket, TicketStatus, TicketTable};
use deskpulse_service::DashboardSession;
use deskpulse_workflow::WorkflowClient;
use deskpulse_worker::AlertMonitor;

/// Payloads received by the stub workflow service, as `(workflow, body)`
pub type Deliveries = Arc<Mutex<Vec<(String, Value)>>>;

/// Test application context
pub struct TestApp {
    /// The Axum router for making test requests
    pub router: Router,
    /// Webhook bodies received by the stub workflow service
    pub deliveries: Deliveries,
}

impl TestApp {
    /// Application over the standard fixture table, wired to a live stub
    /// workflow service.
    pub async fn new() -> Self {
        Self::with_tickets(fixture_tickets(Utc::now())).await
    }

    /// Application over the given tickets, wired to a live stub workflow service.
    pub async fn with_tickets(tickets: Vec<Ticket>) -> Self {
        let deliveries = Deliveries::default();
        let base_url = spawn_workflow_stub(Arc::clone(&deliveries)).await;
        Self::build(tickets, base_url, deliveries)
    }

    /// Application whose workflow service cannot be reached.
    pub fn offline(tickets: Vec<Ticket>) -> Self {
        Self::build(tickets, "http://127.0.0.1:9".to_string(), Deliveries::default())
    }

    fn build(tickets: Vec<Ticket>, base_url: String, deliveries: Deliveries) -> Self {
        let mut config = AppConfig::default();
        config.workflow.base_url = base_url;
        config.workflow.timeout_seconds = 2;
        config.workflow.health_timeout_seconds = 1;
        config.monitor.enabled = false;

        let session = Arc::new(DashboardSession::new(
            Arc::new(TicketTable::new(tickets)),
            config.dashboard.clone(),
        ));
        let workflow =
            Arc::new(WorkflowClient::new(&config.workflow).expect("Failed to build workflow client"));
        let monitor = Arc::new(AlertMonitor::new(
            Arc::clone(&session),
            Arc::clone(&workflow) as _,
        ));
        let state = AppState::new(Arc::new(config), session, monitor, workflow);

        Self {
            router: build_router(state),
            deliveries,
        }
    }

    /// Make a request to the application
    pub async fn request(&self, method: &str, path: &str, body: Option<Value>) -> TestResponse {
        let body_str = body
            .map(|b| serde_json::to_string(&b).expect("Failed to serialize body"))
            .unwrap_or_default();

        let req = Request::builder()
            .method(method)
            .uri(path)
            .header("Content-Type", "application/json")
            .body(Body::from(body_str))
            .expect("Failed to build request");

        self.send(req).await
    }

    async fn send(&self, req: Request<Body>) -> TestResponse {
        let response = self
            .router
            .clone()
            .oneshot(req)
            .await
            .expect("Failed to send request");

        let status = response.status();
        let body_bytes = axum::body::to_bytes(response.into_body(), 1024 * 1024)
            .await
            .expect("Failed to read body");

        let body: Value = serde_json::from_slice(&body_bytes).unwrap_or(Value::Null);

        TestResponse { status, body }
    }

    /// POST a raw body, bypassing JSON encoding
    pub async fn raw_post(&self, path: &str, body: &str) -> TestResponse {
        let req = Request::builder()
            .method("POST")
            .uri(path)
            .header("Content-Type", "application/json")
            .body(Body::from(body.to_string()))
            .expect("Failed to build request");
        self.send(req).await
    }

    /// GET shorthand
    pub async fn get(&self, path: &str) -> TestResponse {
        self.request("GET", path, None).await
    }

    /// Workflows that received a payload, in delivery order
    pub fn delivered_workflows(&self) -> Vec<String> {
        self.deliveries
            .lock()
            .expect("deliveries lock")
            .iter()
            .map(|(name, _)| name.clone())
            .collect()
    }
}

/// Response from a test request
#[derive(Debug)]
pub struct TestResponse {
    /// HTTP status code
    pub status: StatusCode,
    /// Parsed JSON body
    pub body: Value,
}

impl TestResponse {
    /// The `data` member of the success envelope
    pub fn data(&self) -> &Value {
        &self.body["data"]
    }
}

/// Start a stand-in workflow service on an ephemeral port.
async fn spawn_workflow_stub(deliveries: Deliveries) -> String {
    let app = Router::new()
        .route("/healthz", get(|| async { "ok" }))
        .route(
            "/webhook/{name}",
            post(
                |State(deliveries): State<Deliveries>,
                 Path(name): Path<String>,
                 Json(body): Json<Value>| async move {
                    deliveries
                        .lock()
                        .expect("deliveries lock")
                        .push((name.clone(), body));
                    Json(serde_json::json!({ "executionId": format!("exec-{name}") }))
                },
            ),
        )
        .route(
            "/api/v1/executions/{id}",
            get(|Path(id): Path<String>| async move {
                if id == "missing" {
                    (StatusCode::NOT_FOUND, "not found").into_response()
                } else {
                    Json(serde_json::json!({ "id": id, "status": "success" })).into_response()
                }
            }),
        )
        .with_state(deliveries);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind stub");
    let addr = listener.local_addr().expect("stub address");
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("stub server");
    });
    format!("http://{addr}")
}

/// Build a ticket created `age_hours` before `now`.
pub fn ticket(
    id: &str,
    priority: Priority,
    status: TicketStatus,
    department: &str,
    now: DateTime<Utc>,
    age_hours: i64,
) -> Ticket {
    let created_date = now - Duration::hours(age_hours);
    Ticket {
        ticket_id: id.to_string(),
        title: format!("Issue {id}"),
        description: String::new(),
        priority,
        status,
        category: "Software".to_string(),
        department: department.to_string(),
        requester: "Dana Reyes".to_string(),
        assignee: (status != TicketStatus::Open).then(|| "Sam Okafor".to_string()),
        created_date,
        resolved_date: None,
        sla_target_hours: priority.default_sla_target_hours(),
        resolution_hours: None,
        customer_satisfaction: None,
    }
}

/// Mark a ticket resolved `hours` after creation.
pub fn resolved(mut ticket: Ticket, status: TicketStatus, hours: i64) -> Ticket {
    ticket.status = status;
    ticket.assignee = Some("Sam Okafor".to_string());
    ticket.resolved_date = Some(ticket.created_date + Duration::hours(hours));
    ticket.resolution_hours = Some(hours as f64);
    if status == TicketStatus::Closed {
        ticket.customer_satisfaction = Some(4);
    }
    ticket
}

/// Five tickets relative to `now`:
///
/// - `TKT-1` Critical Open, 10h old: breached and escalated
/// - `TKT-2` High In Progress, 7h of 8h used: warning only
/// - `TKT-3` Low Resolved in 10h: met
/// - `TKT-4` Medium Closed in 30h: missed
/// - `TKT-5` Medium Pending in HR, 1h old
pub fn fixture_tickets(now: DateTime<Utc>) -> Vec<Ticket> {
    vec![
        ticket("TKT-1", Priority::Critical, TicketStatus::Open, "IT", now, 10),
        ticket("TKT-2", Priority::High, TicketStatus::InProgress, "IT", now, 7),
        resolved(
            ticket("TKT-3", Priority::Low, TicketStatus::Open, "Finance", now, 48),
            TicketStatus::Resolved,
            10,
        ),
        resolved(
            ticket("TKT-4", Priority::Medium, TicketStatus::Open, "Finance", now, 72),
            TicketStatus::Closed,
            30,
        ),
        ticket("TKT-5", Priority::Medium, TicketStatus::Pending, "HR", now, 1),
    ]
}
