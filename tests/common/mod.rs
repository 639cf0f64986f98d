//! Mock ping service shared by the integration tests.
//!
//! Mimics the hosted service's contract: 200/"OK" for known identifiers,
//! 200/"OK (not found)" for a valid ping key with an unknown slug, 404 for
//! everything else. Supports mounting behind a path prefix.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::body::Bytes;
use axum::extract::State;
use axum::http::{Method, StatusCode, Uri};
use axum::Router;
use tokio::net::TcpListener;

pub const UUID_VALID: &str = "aaaaaaaa-aaaa-aaaa-aaaa-aaaaaaaaaaaa";
pub const PING_KEY_VALID: &str = "abcdefgh";
pub const SLUG_VALID: &str = "foo";

/// One request as seen by the mock service.
#[derive(Debug, Clone)]
pub struct Recorded {
    pub method: String,
    pub path: String,
    pub body: String,
}

#[derive(Clone)]
struct MockState {
    prefix: &'static str,
    response_delay: Option<Duration>,
    requests: Arc<Mutex<Vec<Recorded>>>,
}

pub struct MockService {
    /// Base URL of the service, including the mount prefix.
    pub url: String,
    requests: Arc<Mutex<Vec<Recorded>>>,
}

impl MockService {
    pub fn recorded(&self) -> Vec<Recorded> {
        self.requests.lock().unwrap().clone()
    }
}

pub async fn start_mock_service(prefix: &'static str) -> MockService {
    start_delayed_mock_service(prefix, None).await
}

/// Starts a mock that sleeps before answering, for timeout tests.
pub async fn start_delayed_mock_service(
    prefix: &'static str,
    response_delay: Option<Duration>,
) -> MockService {
    let requests = Arc::new(Mutex::new(Vec::new()));
    let state = MockState {
        prefix,
        response_delay,
        requests: requests.clone(),
    };
    let app = Router::new().fallback(handle).with_state(state);

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    MockService {
        url: format!("http://{addr}{prefix}"),
        requests,
    }
}

async fn handle(
    State(state): State<MockState>,
    method: Method,
    uri: Uri,
    body: Bytes,
) -> (StatusCode, String) {
    if let Some(delay) = state.response_delay {
        tokio::time::sleep(delay).await;
    }

    state.requests.lock().unwrap().push(Recorded {
        method: method.to_string(),
        path: uri.path().to_owned(),
        body: String::from_utf8_lossy(&body).into_owned(),
    });

    let Some(path) = uri.path().strip_prefix(state.prefix) else {
        return (StatusCode::NOT_FOUND, "not found".to_owned());
    };
    let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();

    match segments.as_slice() {
        [uuid] if *uuid == UUID_VALID => (StatusCode::OK, "OK".to_owned()),
        [uuid, op] if *uuid == UUID_VALID && operation_ok(op) => {
            (StatusCode::OK, "OK".to_owned())
        }
        [key, slug] if *key == PING_KEY_VALID => slug_response(slug),
        [key, slug, op] if *key == PING_KEY_VALID && operation_ok(op) => slug_response(slug),
        _ => (StatusCode::NOT_FOUND, "not found".to_owned()),
    }
}

fn slug_response(slug: &str) -> (StatusCode, String) {
    if slug == SLUG_VALID {
        (StatusCode::OK, "OK".to_owned())
    } else {
        // the service acknowledges the ping key but not the slug
        (StatusCode::OK, "OK (not found)".to_owned())
    }
}

fn operation_ok(op: &str) -> bool {
    matches!(op, "start" | "fail" | "log") || op.chars().all(|c| c.is_ascii_digit())
}
