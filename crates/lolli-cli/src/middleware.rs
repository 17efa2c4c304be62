//! HTTP middleware: Basic-Auth gates and request logging

use crate::{ApiError, FileServerState, MonitorState};
use axum::{
    body::Body,
    extract::State,
    http::{header, Request},
    middleware::Next,
    response::Response,
};
use lolli_core::{check_basic, AuthOutcome};
use std::sync::Arc;

fn authorization_header(request: &Request<Body>) -> Option<&str> {
    request
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
}

/// Auth gate for the secured file service.
///
/// Missing credentials get a 401 challenge so browsers prompt; a wrong
/// password gets a flat 403. Open instances (no password configured) pass
/// everything through.
pub async fn require_basic_auth(
    State(state): State<Arc<FileServerState>>,
    request: Request<Body>,
    next: Next,
) -> Result<Response, ApiError> {
    let Some(expected) = state.password.as_deref() else {
        return Ok(next.run(request).await);
    };

    match check_basic(expected, authorization_header(&request)) {
        AuthOutcome::Allowed => Ok(next.run(request).await),
        AuthOutcome::MissingCredentials => {
            tracing::warn!("rejected request without credentials");
            Err(ApiError::Unauthorized {
                realm: "Authorization Required",
            })
        }
        AuthOutcome::WrongPassword => {
            tracing::warn!("rejected request with wrong password");
            Err(ApiError::Forbidden)
        }
    }
}

/// Auth gate for the monitor front end: both denial reasons challenge with
/// 401, so the browser re-prompts on a typo instead of dead-ending.
pub async fn monitor_auth(
    State(state): State<Arc<MonitorState>>,
    request: Request<Body>,
    next: Next,
) -> Result<Response, ApiError> {
    match check_basic(&state.password, authorization_header(&request)) {
        AuthOutcome::Allowed => Ok(next.run(request).await),
        AuthOutcome::MissingCredentials | AuthOutcome::WrongPassword => {
            Err(ApiError::Unauthorized {
                realm: "Enter password for system monitor",
            })
        }
    }
}

/// Logging middleware
pub async fn log_requests(request: Request<Body>, next: Next) -> Response {
    let method = request.method().clone();
    let uri = request.uri().clone();
    let start = std::time::Instant::now();

    let response = next.run(request).await;

    let duration = start.elapsed();
    let status = response.status();

    tracing::info!(
        method = %method,
        uri = %uri,
        status = %status.as_u16(),
        duration_ms = %duration.as_millis(),
        "Request completed"
    );

    response
}
