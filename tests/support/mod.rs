//! Mock RiskDesk backend for integration tests.
//!
//! Runs a real axum server on an ephemeral port so the client is exercised
//! over actual HTTP, including headers and status codes. State is shared
//! with the test through `BackendState` for request counting and failure
//! injection.

// Each test binary uses a different slice of this module.
#![allow(dead_code)]

use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::{Arc, Mutex};

use axum::extract::{Form, Path, State};
use axum::http::{header, HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::{json, Value};

use riskdesk_client::{ApiClient, Config, MemoryCredentialStore, SessionStore};

pub const USERNAME: &str = "jsmith";
pub const PASSWORD: &str = "hunter2";

/// Injected failure for the positions endpoint.
#[derive(Debug, Clone)]
pub struct Outage {
    pub status: u16,
    pub retry_after: Option<u64>,
    pub remaining: u32,
}

/// Shared mock state, inspectable from tests.
pub struct BackendState {
    /// Token the server currently accepts.
    pub token: Mutex<String>,
    pub user: Mutex<Value>,
    pub limits: Mutex<Value>,
    pub backtests: Mutex<Vec<Value>>,
    pub outage: Mutex<Option<Outage>>,
    pub positions_requests: AtomicU32,
    pub profile_requests: AtomicU32,
}

impl Default for BackendState {
    fn default() -> Self {
        Self {
            token: Mutex::new("test-token-1".to_string()),
            user: Mutex::new(json!({
                "username": USERNAME,
                "email": "jsmith@example.com",
                "role": "trader",
                "created_at": "2026-01-15T09:30:00Z"
            })),
            limits: Mutex::new(json!({
                "max_position_size": 500.0,
                "max_daily_loss": 25000.0,
                "max_leverage": 4.0,
                "allowed_symbols": ["ES", "NQ"]
            })),
            backtests: Mutex::new(Vec::new()),
            outage: Mutex::new(None),
            positions_requests: AtomicU32::new(0),
            profile_requests: AtomicU32::new(0),
        }
    }
}

impl BackendState {
    /// Make the current token invalid, so the next authenticated call 401s.
    pub fn revoke_token(&self) {
        *self.token.lock().unwrap() = "rotated-token".to_string();
    }

    pub fn set_outage(&self, outage: Outage) {
        *self.outage.lock().unwrap() = Some(outage);
    }

    fn authorized(&self, headers: &HeaderMap) -> bool {
        let expected = format!("Bearer {}", self.token.lock().unwrap());
        headers
            .get(header::AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .map(|v| v == expected)
            .unwrap_or(false)
    }
}

/// A running mock backend.
pub struct MockBackend {
    pub base_url: String,
    pub state: Arc<BackendState>,
}

/// Start the mock backend on an ephemeral port.
pub async fn spawn_backend() -> MockBackend {
    let state = Arc::new(BackendState::default());

    let app = Router::new()
        .route("/api/auth/login", post(login))
        .route("/api/auth/register", post(register))
        .route("/api/auth/me", get(profile).put(update_profile))
        .route("/api/positions", get(positions))
        .route("/api/positions/{symbol}", get(position))
        .route("/api/risk/limits", get(limits).put(update_limits))
        .route("/api/backtests", post(submit_backtest).get(list_backtests))
        .route("/api/backtests/{id}", get(backtest))
        .with_state(state.clone());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    MockBackend {
        base_url: format!("http://{}", addr),
        state,
    }
}

/// Build a client over an in-memory session, returning the credential store
/// for storage-level assertions.
pub fn client_for(backend: &MockBackend) -> (ApiClient, Arc<MemoryCredentialStore>) {
    let mut config = Config::default();
    config.api.base_url = backend.base_url.clone();
    config.api.timeout_secs = 5;

    let credentials = Arc::new(MemoryCredentialStore::new());
    let session = Arc::new(SessionStore::new(credentials.clone()).unwrap());
    let client = ApiClient::new(&config, session).unwrap();
    (client, credentials)
}

fn unauthorized() -> Response {
    (
        StatusCode::UNAUTHORIZED,
        Json(json!({"detail": "Not authenticated"})),
    )
        .into_response()
}

async fn login(
    State(state): State<Arc<BackendState>>,
    Form(form): Form<std::collections::HashMap<String, String>>,
) -> Response {
    let username = form.get("username").map(String::as_str);
    let password = form.get("password").map(String::as_str);

    if username == Some(USERNAME) && password == Some(PASSWORD) {
        let token = state.token.lock().unwrap().clone();
        Json(json!({"access_token": token, "token_type": "bearer"})).into_response()
    } else {
        (
            StatusCode::UNAUTHORIZED,
            Json(json!({"detail": "Incorrect username or password"})),
        )
            .into_response()
    }
}

async fn register(Json(body): Json<Value>) -> Response {
    let user = json!({
        "username": body["username"],
        "email": body["email"],
        "role": "trader",
        "created_at": "2026-02-01T00:00:00Z"
    });
    (StatusCode::CREATED, Json(user)).into_response()
}

async fn profile(State(state): State<Arc<BackendState>>, headers: HeaderMap) -> Response {
    state.profile_requests.fetch_add(1, Ordering::SeqCst);
    if !state.authorized(&headers) {
        return unauthorized();
    }
    Json(state.user.lock().unwrap().clone()).into_response()
}

async fn update_profile(
    State(state): State<Arc<BackendState>>,
    headers: HeaderMap,
    Json(fields): Json<Value>,
) -> Response {
    if !state.authorized(&headers) {
        return unauthorized();
    }

    let mut user = state.user.lock().unwrap();
    if let (Value::Object(user), Value::Object(fields)) = (&mut *user, fields) {
        for (key, value) in fields {
            user.insert(key, value);
        }
    }
    Json(user.clone()).into_response()
}

async fn positions(State(state): State<Arc<BackendState>>, headers: HeaderMap) -> Response {
    state.positions_requests.fetch_add(1, Ordering::SeqCst);

    {
        let mut outage = state.outage.lock().unwrap();
        if let Some(active) = outage.as_mut() {
            if active.remaining > 0 {
                active.remaining -= 1;
                let status = StatusCode::from_u16(active.status).unwrap();
                let body = Json(json!({"detail": "service unavailable"}));
                return match active.retry_after {
                    Some(seconds) => {
                        (status, [(header::RETRY_AFTER, seconds.to_string())], body)
                            .into_response()
                    }
                    None => (status, body).into_response(),
                };
            }
        }
    }

    if !state.authorized(&headers) {
        return unauthorized();
    }

    Json(json!([
        {"symbol": "ES", "quantity": 10.0, "avg_price": 5000.25,
         "market_value": 50002.5, "unrealized_pnl": 1250.0},
        {"symbol": "NQ", "quantity": -5.0, "avg_price": 17800.0,
         "market_value": -89000.0, "unrealized_pnl": -430.0}
    ]))
    .into_response()
}

async fn position(
    State(state): State<Arc<BackendState>>,
    headers: HeaderMap,
    Path(symbol): Path<String>,
) -> Response {
    if !state.authorized(&headers) {
        return unauthorized();
    }

    if symbol == "ES" {
        Json(json!({"symbol": "ES", "quantity": 10.0, "avg_price": 5000.25,
                    "market_value": 50002.5, "unrealized_pnl": 1250.0}))
        .into_response()
    } else {
        (
            StatusCode::NOT_FOUND,
            Json(json!({"detail": format!("no position in {}", symbol)})),
        )
            .into_response()
    }
}

async fn limits(State(state): State<Arc<BackendState>>, headers: HeaderMap) -> Response {
    if !state.authorized(&headers) {
        return unauthorized();
    }
    Json(state.limits.lock().unwrap().clone()).into_response()
}

async fn update_limits(
    State(state): State<Arc<BackendState>>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> Response {
    if !state.authorized(&headers) {
        return unauthorized();
    }

    if body["max_leverage"].as_f64().unwrap_or(0.0) <= 0.0 {
        return (
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(json!({"detail": [{"msg": "max_leverage must be positive",
                                    "loc": ["body", "max_leverage"]}]})),
        )
            .into_response();
    }

    *state.limits.lock().unwrap() = body.clone();
    Json(body).into_response()
}

async fn submit_backtest(
    State(state): State<Arc<BackendState>>,
    headers: HeaderMap,
    Json(request): Json<Value>,
) -> Response {
    if !state.authorized(&headers) {
        return unauthorized();
    }

    let mut runs = state.backtests.lock().unwrap();
    let run = json!({
        "id": format!("bt-{}", runs.len() + 1),
        "status": "pending",
        "request": request
    });
    runs.push(run.clone());
    (StatusCode::CREATED, Json(run)).into_response()
}

async fn list_backtests(State(state): State<Arc<BackendState>>, headers: HeaderMap) -> Response {
    if !state.authorized(&headers) {
        return unauthorized();
    }
    Json(Value::Array(state.backtests.lock().unwrap().clone())).into_response()
}

async fn backtest(
    State(state): State<Arc<BackendState>>,
    headers: HeaderMap,
    Path(id): Path<String>,
) -> Response {
    if !state.authorized(&headers) {
        return unauthorized();
    }

    let runs = state.backtests.lock().unwrap();
    match runs.iter().find(|run| run["id"] == id.as_str()) {
        // Runs complete instantly in the mock
        Some(run) => {
            let mut done = run.clone();
            done["status"] = json!("completed");
            done["metrics"] = json!({
                "total_return": 0.08,
                "max_drawdown": -0.03,
                "sharpe_ratio": 1.1,
                "trade_count": 42
            });
            Json(done).into_response()
        }
        None => (
            StatusCode::NOT_FOUND,
            Json(json!({"detail": "backtest not found"})),
        )
            .into_response(),
    }
}
