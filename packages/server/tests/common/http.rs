//! HTTP client for integration testing.
//!
//! Sends requests straight into the axum router without binding a socket.

use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use serde_json::Value;
use tower::ServiceExt;

/// HTTP client for executing requests against the router in tests.
pub struct ApiClient {
    app: Router,
}

/// Result of an HTTP request.
#[derive(Debug)]
pub struct ApiResponse {
    pub status: StatusCode,
    pub body: Value,
}

impl ApiResponse {
    /// Gets a string field from the JSON body, panicking if absent.
    pub fn str(&self, key: &str) -> String {
        self.body[key]
            .as_str()
            .unwrap_or_else(|| panic!("missing string field {key} in {}", self.body))
            .to_string()
    }
}

impl ApiClient {
    pub fn new(app: Router) -> Self {
        Self { app }
    }

    /// POST a JSON body, optionally with a bearer token.
    pub async fn post(&self, path: &str, body: Value, token: Option<&str>) -> ApiResponse {
        let request = Request::builder()
            .method(Method::POST)
            .uri(path)
            .header(header::CONTENT_TYPE, "application/json");
        let request = match token {
            Some(token) => request.header(header::AUTHORIZATION, format!("Bearer {}", token)),
            None => request,
        };

        self.send(request.body(Body::from(body.to_string())).unwrap())
            .await
    }

    /// POST raw bytes with a JSON content type.
    pub async fn post_raw(&self, path: &str, body: &str) -> ApiResponse {
        let request = Request::builder()
            .method(Method::POST)
            .uri(path)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap();

        self.send(request).await
    }

    /// GET, optionally with a bearer token.
    pub async fn get(&self, path: &str, token: Option<&str>) -> ApiResponse {
        let request = Request::builder().method(Method::GET).uri(path);
        let request = match token {
            Some(token) => request.header(header::AUTHORIZATION, format!("Bearer {}", token)),
            None => request,
        };

        self.send(request.body(Body::empty()).unwrap()).await
    }

    async fn send(&self, request: Request<Body>) -> ApiResponse {
        let response = self.app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or_else(|_| {
                Value::String(String::from_utf8_lossy(&bytes).into_owned())
            })
        };

        ApiResponse { status, body }
    }
}
