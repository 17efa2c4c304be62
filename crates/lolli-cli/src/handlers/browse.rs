//! Directory browsing and file download

use crate::{render, ApiError, FileServerState};
use axum::{
    body::Body,
    extract::{Path, State},
    http::{header, StatusCode},
    response::{Html, IntoResponse, Response},
};
use bytes::Bytes;
use lolli_core::{build_listing, resolve_request_path};
use std::sync::Arc;

/// GET `/` and GET `/{*path}` — one handler for the whole tree.
///
/// The client path is resolved under the served root first; everything after
/// that point works on the trusted resolved path only. Directories render as
/// a listing page, files come back as attachment downloads.
pub async fn browse(
    State(state): State<Arc<FileServerState>>,
    path: Option<Path<String>>,
) -> Result<Response, ApiError> {
    let raw = path.map(|Path(p)| p).unwrap_or_default();
    let resolved = resolve_request_path(&state.root, &raw)?;

    let metadata = tokio::fs::metadata(&resolved).await?;
    if metadata.is_dir() {
        let mut entries = Vec::new();
        let mut dir = tokio::fs::read_dir(&resolved).await?;
        while let Some(entry) = dir.next_entry().await? {
            let name = entry.file_name().to_string_lossy().into_owned();
            let is_dir = entry.file_type().await?.is_dir();
            entries.push((name, is_dir));
        }

        let listing = build_listing(&raw, entries);
        Ok(Html(render::listing_page(&listing)).into_response())
    } else {
        tracing::info!("Downloading: {}", resolved.display());

        let contents = Bytes::from(tokio::fs::read(&resolved).await?);
        let mime = mime_guess::from_path(&resolved).first_or_octet_stream();
        let filename = resolved
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "download".to_string());

        Ok((
            StatusCode::OK,
            [
                (header::CONTENT_TYPE, mime.to_string()),
                (
                    header::CONTENT_DISPOSITION,
                    format!("attachment; filename=\"{}\"", filename.replace('"', "")),
                ),
            ],
            Body::from(contents),
        )
            .into_response())
    }
}
