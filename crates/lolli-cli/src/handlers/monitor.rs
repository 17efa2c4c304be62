//! Monitor front-end handlers

use crate::{render, ApiError, MonitorState};
use axum::{
    extract::State,
    response::{Html, IntoResponse, Response},
    Json,
};
use std::sync::Arc;

/// GET `/` — the dashboard shell
pub async fn monitor_index() -> Response {
    Html(render::monitor_page()).into_response()
}

/// GET `/api/systeminfo` — one fresh snapshot from the metrics provider
pub async fn system_info(
    State(state): State<Arc<MonitorState>>,
) -> Result<Response, ApiError> {
    let snapshot = state
        .provider
        .snapshot()
        .await
        .map_err(|err| ApiError::Collaborator(format!("{err:#}")))?;

    Ok(Json(snapshot).into_response())
}
