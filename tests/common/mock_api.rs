//! In-process stand-in for the video API.
//!
//! Responses are registered per `METHOD path`; anything unregistered is a
//! 404. Every `/api/v1` call must carry Basic auth for [`USERNAME`] /
//! [`PASSWORD`] or it gets a 401 before routing.

#![allow(dead_code)]

use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::Arc;

use axum::body::to_bytes;
use axum::extract::{Request, State};
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Router;
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use tokio::net::TcpListener;
use tokio::sync::Mutex;
use tokio::task::JoinHandle;

pub const USERNAME: &str = "admin";
pub const PASSWORD: &str = "secret";

#[derive(Debug, Clone)]
pub struct Recorded {
    pub method: String,
    pub path: String,
    pub headers: Vec<(String, String)>,
    pub body: Vec<u8>,
}

impl Recorded {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}

#[derive(Debug, Clone)]
pub struct MockResponse {
    pub status: StatusCode,
    pub json: String,
}

impl MockResponse {
    pub fn json(body: &str) -> Self {
        Self {
            status: StatusCode::OK,
            json: body.to_string(),
        }
    }

    pub fn status(code: u16) -> Self {
        Self {
            status: StatusCode::from_u16(code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
            json: String::new(),
        }
    }
}

impl IntoResponse for MockResponse {
    fn into_response(self) -> Response {
        (
            self.status,
            [(header::CONTENT_TYPE, "application/json")],
            self.json,
        )
            .into_response()
    }
}

#[derive(Clone, Default)]
struct Shared {
    log: Arc<Mutex<Vec<Recorded>>>,
    routes: Arc<Mutex<HashMap<(String, String), MockResponse>>>,
}

pub struct MockApi {
    pub addr: SocketAddr,
    shared: Shared,
    server: JoinHandle<()>,
}

impl MockApi {
    pub async fn start() -> Self {
        let shared = Shared::default();
        let app = Router::new().fallback(serve).with_state(shared.clone());

        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind mock API");
        let addr = listener.local_addr().expect("mock API has no address");
        let server = tokio::spawn(async move {
            let _ = axum::serve(listener, app).await;
        });

        Self {
            addr,
            shared,
            server,
        }
    }

    /// Answer `method path` with `response` from now on.
    pub async fn respond(&self, method: &str, path: &str, response: MockResponse) {
        self.shared
            .routes
            .lock()
            .await
            .insert((method.to_uppercase(), path.to_string()), response);
    }

    /// Every request received so far, in arrival order.
    pub async fn captured_requests(&self) -> Vec<Recorded> {
        self.shared.log.lock().await.clone()
    }

    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }
}

impl Drop for MockApi {
    fn drop(&mut self) {
        self.server.abort();
    }
}

fn basic_auth() -> String {
    let token = STANDARD.encode(format!("{}:{}", USERNAME, PASSWORD));
    format!("Basic {}", token)
}

async fn serve(State(shared): State<Shared>, request: Request) -> MockResponse {
    let (parts, body) = request.into_parts();
    let method = parts.method.as_str().to_string();
    let path = parts.uri.path().to_string();
    let authorized = parts
        .headers
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        == Some(basic_auth().as_str());

    let body = to_bytes(body, 16 * 1024 * 1024)
        .await
        .map(|bytes| bytes.to_vec())
        .unwrap_or_default();
    shared.log.lock().await.push(Recorded {
        method: method.clone(),
        path: path.clone(),
        headers: parts
            .headers
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_str().unwrap_or_default().to_string()))
            .collect(),
        body,
    });

    if path.starts_with("/api/v1") && !authorized {
        return MockResponse::status(401);
    }

    shared
        .routes
        .lock()
        .await
        .get(&(method, path))
        .cloned()
        .unwrap_or_else(|| MockResponse::status(404))
}
