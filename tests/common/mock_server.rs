//! Mock users REST server for exercising the HTTP client.

#![allow(dead_code)]

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use serde_json::{json, Value};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::sync::Mutex;

#[derive(Default)]
struct ServerState {
    users: Vec<Value>,
    next_id: u64,
    requests: Vec<String>,
}

type Shared = Arc<Mutex<ServerState>>;

/// A running mock server; the task stops with the test runtime.
pub struct MockServer {
    pub addr: SocketAddr,
    state: Shared,
}

impl MockServer {
    pub async fn start(users: Vec<Value>) -> Self {
        let state: Shared = Arc::new(Mutex::new(ServerState {
            next_id: users.len() as u64 + 1,
            users,
            requests: Vec::new(),
        }));

        let app = Router::new()
            .route("/users", get(list).post(create))
            .route("/users/{id}", get(show).put(update).delete(remove))
            .with_state(Arc::clone(&state));

        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self { addr, state }
    }

    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// `METHOD /path` for every request received.
    pub async fn requests(&self) -> Vec<String> {
        self.state.lock().await.requests.clone()
    }
}

fn not_found(id: &str) -> Response {
    (
        StatusCode::NOT_FOUND,
        Json(json!({ "error": format!("user {} not found", id) })),
    )
        .into_response()
}

fn id_matches(user: &Value, id: &str) -> bool {
    match &user["id"] {
        Value::Number(n) => n.to_string() == id,
        Value::String(s) => s == id,
        _ => false,
    }
}

async fn list(State(state): State<Shared>) -> Json<Vec<Value>> {
    let mut state = state.lock().await;
    state.requests.push("GET /users".to_string());
    Json(state.users.clone())
}

async fn show(State(state): State<Shared>, Path(id): Path<String>) -> Response {
    let mut state = state.lock().await;
    state.requests.push(format!("GET /users/{}", id));
    match state.users.iter().find(|user| id_matches(user, &id)) {
        Some(user) => Json(user.clone()).into_response(),
        None => not_found(&id),
    }
}

async fn create(State(state): State<Shared>, Json(mut body): Json<Value>) -> Response {
    let mut state = state.lock().await;
    state.requests.push("POST /users".to_string());
    if body.get("name").and_then(Value::as_str).unwrap_or("").is_empty() {
        return (StatusCode::BAD_REQUEST, "name is required").into_response();
    }
    body["id"] = json!(state.next_id);
    state.next_id += 1;
    state.users.push(body.clone());
    Json(body).into_response()
}

async fn update(
    State(state): State<Shared>,
    Path(id): Path<String>,
    Json(body): Json<Value>,
) -> Response {
    let mut state = state.lock().await;
    state.requests.push(format!("PUT /users/{}", id));
    let Some(user) = state.users.iter_mut().find(|user| id_matches(user, &id)) else {
        return not_found(&id);
    };
    let existing_id = user["id"].clone();
    *user = body;
    user["id"] = existing_id;
    StatusCode::OK.into_response()
}

async fn remove(State(state): State<Shared>, Path(id): Path<String>) -> Response {
    let mut state = state.lock().await;
    state.requests.push(format!("DELETE /users/{}", id));
    let before = state.users.len();
    state.users.retain(|user| !id_matches(user, &id));
    if state.users.len() == before {
        return not_found(&id);
    }
    StatusCode::OK.into_response()
}
