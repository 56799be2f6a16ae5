//! In-process stand-in for the backend API and ranking service.
//!
//! Each mock binds an ephemeral port, answers canned replies keyed by method and path,
//! and records every request it sees so tests can assert on the exact wire traffic.

#![allow(dead_code)]

use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

use axum::body::Bytes;
use axum::extract::State;
use axum::http::{header, HeaderMap, Method, StatusCode, Uri};
use axum::response::{IntoResponse, Response};
use axum::{Json, Router};
use serde_json::{json, Value};
use talent_portal::domain::{Job, Talent};
use talent_portal::ServiceEndpoints;

#[derive(Debug, Clone)]
pub enum Reply {
    Json(StatusCode, Value),
    Raw(StatusCode, &'static str),
}

#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: Method,
    pub path: String,
    pub query: Option<String>,
    pub content_type: Option<String>,
    pub body: Option<Value>,
}

struct MockState {
    routes: Vec<(Method, String, Reply)>,
    recorded: Mutex<Vec<RecordedRequest>>,
}

pub struct MockUpstream {
    addr: SocketAddr,
    state: Arc<MockState>,
}

impl MockUpstream {
    pub async fn start(routes: Vec<(Method, &str, Reply)>) -> Self {
        let state = Arc::new(MockState {
            routes: routes
                .into_iter()
                .map(|(method, path, reply)| (method, path.to_string(), reply))
                .collect(),
            recorded: Mutex::new(Vec::new()),
        });

        let app = Router::new().fallback(answer).with_state(state.clone());
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind mock upstream");
        let addr = listener.local_addr().expect("mock address");
        tokio::spawn(async move {
            axum::serve(listener, app).await.expect("mock upstream serves");
        });

        Self { addr, state }
    }

    pub fn url(&self) -> String {
        format!("http://{}", self.addr)
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.state.recorded.lock().expect("recorder poisoned").clone()
    }

    pub fn single_request(&self) -> RecordedRequest {
        let requests = self.requests();
        assert_eq!(requests.len(), 1, "expected exactly one request: {requests:?}");
        requests.into_iter().next().expect("one request")
    }
}

async fn answer(
    State(state): State<Arc<MockState>>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    let path = uri.path().to_string();
    state
        .recorded
        .lock()
        .expect("recorder poisoned")
        .push(RecordedRequest {
            method: method.clone(),
            path: path.clone(),
            query: uri.query().map(str::to_string),
            content_type: headers
                .get(header::CONTENT_TYPE)
                .and_then(|value| value.to_str().ok())
                .map(str::to_string),
            body: serde_json::from_slice(&body).ok(),
        });

    let reply = state
        .routes
        .iter()
        .find(|(route_method, route_path, _)| *route_method == method && *route_path == path)
        .map(|(_, _, reply)| reply.clone());

    match reply {
        Some(Reply::Json(status, value)) => (status, Json(value)).into_response(),
        Some(Reply::Raw(status, text)) => (
            status,
            [(header::CONTENT_TYPE, "application/json")],
            text,
        )
            .into_response(),
        None => (StatusCode::NOT_FOUND, Json(json!({ "detail": "Not Found" }))).into_response(),
    }
}

/// Both services pointed at the same mock.
pub fn endpoints(mock: &MockUpstream) -> ServiceEndpoints {
    ServiceEndpoints::parse(&mock.url(), &mock.url()).expect("mock endpoints parse")
}

/// An address nothing listens on, for transport failures.
pub async fn unreachable_url() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind probe");
    let addr = listener.local_addr().expect("probe address");
    drop(listener);
    format!("http://{addr}")
}

pub fn talent_json(id: &str) -> Value {
    json!({
        "id": id,
        "name": format!("Candidate {id}"),
        "email": format!("{id}@example.com"),
        "handle": id,
        "skills": "Rust, Kubernetes",
        "title": "Senior Engineer",
        "location": "Oakland, CA",
        "experience": "8 years",
        "verified": 1,
        "created_at": "2025-03-01T12:00:00Z"
    })
}

pub fn talent(id: &str) -> Talent {
    serde_json::from_value(talent_json(id)).expect("valid talent")
}

pub fn job_json(id: &str) -> Value {
    json!({
        "id": id,
        "title": "Senior Backend Engineer",
        "description": "Own the ranking pipeline",
        "company_name": "Acme",
        "location": "San Francisco, CA",
        "location_type": "onsite",
        "employment_type": "full-time",
        "salary_min": 180000,
        "salary_max": 220000,
        "salary_currency": "USD",
        "skills_required": "Rust,Kubernetes,Postgres",
        "experience_level": "senior",
        "status": "active",
        "created_at": "2025-03-01T12:00:00Z"
    })
}

pub fn job(id: &str) -> Job {
    serde_json::from_value(job_json(id)).expect("valid job")
}

pub fn feedback_json(id: &str, talent_id: &str, feedback_type: &str) -> Value {
    json!({
        "id": id,
        "talent_id": talent_id,
        "job_id": "j1",
        "feedback_type": feedback_type,
        "created_at": "2025-03-02T09:30:00Z"
    })
}
