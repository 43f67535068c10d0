//! Greeting HTTP Server
//!
//! HTTP front for the message sender. Request headers are handed to the
//! core as metadata and the greeting is written back as the body.

use crate::application::{MessageSender, SendError};
use crate::domain::ports::RequestMetadata;
use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::Serialize;
use std::future::Future;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

impl RequestMetadata for HeaderMap {
    fn get(&self, key: &str) -> Option<&str> {
        HeaderMap::get(self, key).and_then(|value| value.to_str().ok())
    }
}

/// Error response body.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Health response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

/// HTTP server state.
#[derive(Clone)]
pub struct HttpState {
    pub sender: Arc<MessageSender>,
}

/// Greeting HTTP server.
pub struct HttpServer {
    listen_addr: String,
    state: HttpState,
}

impl HttpServer {
    pub fn new(sender: Arc<MessageSender>, listen_addr: String) -> Self {
        Self {
            listen_addr,
            state: HttpState { sender },
        }
    }

    pub fn listen_addr(&self) -> &str {
        &self.listen_addr
    }

    /// Build the router. Exposed so tests can drive it in-process.
    pub fn router(&self) -> Router {
        Router::new()
            .route("/", get(greeting_handler))
            .route("/api/v1/location", get(location_handler))
            .route("/health", get(health_handler))
            .layer(TraceLayer::new_for_http())
            .with_state(self.state.clone())
    }

    /// Run the server until `shutdown` completes.
    #[cfg_attr(coverage_nightly, coverage(off))]
    pub async fn run<F>(&self, shutdown: F) -> anyhow::Result<()>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let listener = TcpListener::bind(&self.listen_addr).await?;
        tracing::info!("greeting server listening on {}", self.listen_addr);

        axum::serve(listener, self.router())
            .with_graceful_shutdown(shutdown)
            .await?;

        tracing::info!("greeting server stopped");
        Ok(())
    }
}

// Handler functions

async fn greeting_handler(State(state): State<HttpState>, headers: HeaderMap) -> Response {
    match state.sender.send(&headers) {
        Ok(message) => (StatusCode::OK, message).into_response(),
        Err(e) => error_response(e),
    }
}

async fn location_handler(State(state): State<HttpState>, headers: HeaderMap) -> Response {
    match state.sender.locate(&headers) {
        Ok(location) => (StatusCode::OK, Json(location)).into_response(),
        Err(e) => error_response(e),
    }
}

async fn health_handler() -> impl IntoResponse {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

fn error_response(err: SendError) -> Response {
    let status = match &err {
        SendError::MissingRequiredField { .. } => StatusCode::BAD_REQUEST,
        SendError::Localization(_) => StatusCode::INTERNAL_SERVER_ERROR,
    };
    tracing::warn!("request failed ({}): {}", status, err);

    (
        status,
        Json(ErrorResponse {
            error: err.to_string(),
        }),
    )
        .into_response()
}
