//! Request handlers.

use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::header::AUTHORIZATION;
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use toyval_platform::LocalPlatform;
use toyval_traits::{Document, ErrorBody, PlatformClient, PlatformError};

/// Application state.
pub struct AppState {
    /// The Platform evaluating documents
    pub platform: Arc<LocalPlatform>,
    /// Bearer token required on evaluate, if any
    pub api_key: Option<String>,
}

/// Health check response.
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Always `"ok"`
    pub status: String,
    /// Server version
    pub version: String,
    /// Documents evaluated since start
    pub evaluations: u64,
    /// Evaluations that failed
    pub failures: u64,
}

/// Health check handler.
pub async fn health(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        evaluations: state.platform.evaluations(),
        failures: state.platform.failures(),
    })
}

/// HTTP status for a Platform error.
pub fn status_for(error: &PlatformError) -> StatusCode {
    match error {
        PlatformError::InvalidDocument(_) | PlatformError::Serialization(_) => StatusCode::BAD_REQUEST,
        PlatformError::AuthenticationFailed(_) => StatusCode::UNAUTHORIZED,
        PlatformError::UnknownConvention(_)
        | PlatformError::MalformedTenor(_)
        | PlatformError::Computation { .. } => StatusCode::UNPROCESSABLE_ENTITY,
        PlatformError::Timeout => StatusCode::GATEWAY_TIMEOUT,
        PlatformError::ConnectionFailed(_) => StatusCode::BAD_GATEWAY,
        PlatformError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

fn error_response(error: PlatformError) -> Response {
    (status_for(&error), Json(ErrorBody::from(error))).into_response()
}

fn authorized(state: &AppState, headers: &HeaderMap) -> bool {
    let Some(expected) = state.api_key.as_deref() else {
        return true;
    };
    headers
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
        .is_some_and(|token| token == expected)
}

/// Evaluate a document.
pub async fn evaluate(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    body: Result<Json<Document>, JsonRejection>,
) -> Response {
    if !authorized(&state, &headers) {
        warn!("Rejected evaluate request with missing or wrong bearer token");
        return error_response(PlatformError::AuthenticationFailed(
            "missing or invalid bearer token".into(),
        ));
    }

    let Json(document) = match body {
        Ok(body) => body,
        Err(rejection) => {
            return error_response(PlatformError::Serialization(rejection.body_text()));
        }
    };

    debug!(request_id = %document.request_id, nodes = document.len(), "Evaluate request");
    match state.platform.evaluate(&document).await {
        Ok(table) => Json(table).into_response(),
        Err(e) => error_response(e),
    }
}
