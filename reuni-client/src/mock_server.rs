//! In-process stand-in for the configuration service.
//!
//! Serves the same endpoints and envelopes as the real service from memory,
//! on an ephemeral loopback port. Every accepted submission becomes a new
//! version with `created_by: "mock"`.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};

use axum::{
    body::Bytes,
    extract::{Path, State},
    http::{header, HeaderMap, StatusCode},
    response::{IntoResponse, Json, Response},
    routing::get,
    Router,
};
use serde::Deserialize;
use serde_json::{json, Value};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

use crate::types::{ConfigurationMap, ConfigurationVersion, Scope};

/// Typed view of a submitted body; keeps the key order the client sent.
#[derive(Deserialize)]
struct Submission {
    configuration: ConfigurationMap,
}

#[derive(Default)]
struct MockState {
    token: String,
    scopes: HashMap<String, Vec<ConfigurationVersion>>,
    submissions: Vec<Value>,
    rejection: Option<(StatusCode, String)>,
}

type SharedState = Arc<Mutex<MockState>>;

/// A running mock service; stops when dropped.
pub struct MockServer {
    url: String,
    state: SharedState,
    handle: JoinHandle<()>,
}

impl MockServer {
    /// Start serving on `127.0.0.1` with an OS-assigned port. Requests must
    /// carry `Authorization: Bearer <token>`.
    pub async fn start(token: &str) -> std::io::Result<Self> {
        let state: SharedState = Arc::new(Mutex::new(MockState {
            token: token.to_string(),
            ..MockState::default()
        }));

        let app = Router::new()
            .route(
                "/{organization}/{service}/{namespace}",
                axum::routing::post(submit_configuration),
            )
            .route("/{organization}/{service}/{namespace}/{item}", get(get_item))
            .with_state(state.clone());

        let listener = TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;
        let handle = tokio::spawn(async move {
            let _ = axum::serve(listener, app).await;
        });

        Ok(Self {
            url: format!("http://{addr}"),
            state,
            handle,
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Store `configuration` as the next version of `scope`.
    pub fn seed(&self, scope: &Scope, configuration: ConfigurationMap) -> i64 {
        push_version(&mut lock(&self.state), &scope.path(), configuration)
    }

    pub fn versions(&self, scope: &Scope) -> Vec<i64> {
        lock(&self.state)
            .scopes
            .get(&scope.path())
            .map(|versions| versions.iter().map(|v| v.version).collect())
            .unwrap_or_default()
    }

    pub fn latest(&self, scope: &Scope) -> Option<ConfigurationVersion> {
        lock(&self.state)
            .scopes
            .get(&scope.path())
            .and_then(|versions| versions.last().cloned())
    }

    /// Raw JSON bodies of every POST received, accepted or not.
    pub fn submissions(&self) -> Vec<Value> {
        lock(&self.state).submissions.clone()
    }

    /// Answer every following submission with `status` and an error envelope.
    pub fn reject_submissions(&self, status: u16, message: &str) {
        let status = StatusCode::from_u16(status).unwrap_or(StatusCode::BAD_REQUEST);
        lock(&self.state).rejection = Some((status, message.to_string()));
    }
}

impl Drop for MockServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

fn lock(state: &SharedState) -> MutexGuard<'_, MockState> {
    state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

fn push_version(state: &mut MockState, path: &str, configuration: ConfigurationMap) -> i64 {
    let versions = state.scopes.entry(path.to_string()).or_default();
    let version = versions.last().map_or(1, |v| v.version + 1);
    versions.push(ConfigurationVersion {
        version,
        configuration,
        created_by: "mock".to_string(),
    });
    version
}

fn error_reply(status: StatusCode, message: &str) -> Response {
    (
        status,
        Json(json!({"status": status.as_u16(), "message": message})),
    )
        .into_response()
}

fn verify_auth_token(state: &MockState, headers: &HeaderMap) -> bool {
    headers
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
        .is_some_and(|token| token == state.token)
}

/// `versions`, `latest`, or a numeric version under a scope
async fn get_item(
    State(state): State<SharedState>,
    Path((organization, service, namespace, item)): Path<(String, String, String, String)>,
    headers: HeaderMap,
) -> Response {
    let state = lock(&state);
    if !verify_auth_token(&state, &headers) {
        return error_reply(StatusCode::UNAUTHORIZED, "unauthorized");
    }

    let path = Scope::new(organization, service, namespace).path();
    let versions = state.scopes.get(&path).map(Vec::as_slice).unwrap_or_default();

    match item.as_str() {
        "versions" => {
            let numbers: Vec<i64> = versions.iter().map(|v| v.version).collect();
            Json(json!({ "versions": numbers })).into_response()
        }
        "latest" => match versions.last() {
            Some(latest) => Json(json!({ "version": latest.version })).into_response(),
            None => error_reply(StatusCode::NOT_FOUND, "configuration not found"),
        },
        other => {
            let Ok(number) = other.parse::<i64>() else {
                return error_reply(StatusCode::BAD_REQUEST, "invalid version");
            };
            match versions.iter().find(|v| v.version == number) {
                Some(found) => Json(found.clone()).into_response(),
                None => error_reply(StatusCode::NOT_FOUND, "version not found"),
            }
        }
    }
}

async fn submit_configuration(
    State(state): State<SharedState>,
    Path((organization, service, namespace)): Path<(String, String, String)>,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    let mut state = lock(&state);
    if !verify_auth_token(&state, &headers) {
        return error_reply(StatusCode::UNAUTHORIZED, "unauthorized");
    }

    let Ok(raw) = serde_json::from_slice::<Value>(&body) else {
        return error_reply(StatusCode::BAD_REQUEST, "invalid json");
    };
    state.submissions.push(raw);

    if let Some((status, message)) = state.rejection.clone() {
        return error_reply(status, &message);
    }

    let Ok(submission) = serde_json::from_slice::<Submission>(&body) else {
        return error_reply(StatusCode::BAD_REQUEST, "invalid configuration");
    };

    let path = Scope::new(organization, service, namespace).path();
    let version = push_version(&mut state, &path, submission.configuration);
    (StatusCode::CREATED, Json(json!({ "version": version }))).into_response()
}
