//! HTTP route definitions

use crate::{handlers, middleware, FileServerState, MonitorState};
use axum::{middleware as axum_middleware, routing::get, Router};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

/// Router for one file service instance, open or secured.
///
/// The auth middleware is always present; it passes everything through when
/// the state carries no password, so open and secured instances share one
/// shape.
pub fn file_server_router(state: Arc<FileServerState>) -> Router {
    // Later layers wrap earlier ones: the request log sits outside the auth
    // gate so denied requests still get their completion line.
    Router::new()
        .route("/", get(handlers::browse))
        .route("/{*path}", get(handlers::browse))
        .layer(axum_middleware::from_fn_with_state(
            Arc::clone(&state),
            middleware::require_basic_auth,
        ))
        .layer(axum_middleware::from_fn(middleware::log_requests))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Router for one monitor front end
pub fn monitor_router(state: Arc<MonitorState>) -> Router {
    Router::new()
        .route("/", get(handlers::monitor_index))
        .route("/api/systeminfo", get(handlers::system_info))
        .layer(axum_middleware::from_fn_with_state(
            Arc::clone(&state),
            middleware::monitor_auth,
        ))
        .layer(axum_middleware::from_fn(middleware::log_requests))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
