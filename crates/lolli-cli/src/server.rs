//! Server startup and lifecycle

use crate::collab::MetricsProvider;
use crate::{routes, FileServerState, MonitorState};
use std::path::PathBuf;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::info;

/// Run one file service bound to `port`, confined to `root`.
///
/// Serves until the process dies; a bind failure comes back to the caller.
pub async fn run_file_server(
    root: PathBuf,
    port: u16,
    password: Option<String>,
) -> anyhow::Result<()> {
    let secured = password.is_some();
    let state = FileServerState::new(root.clone(), password);
    let app = routes::file_server_router(state);

    let listener = TcpListener::bind(("0.0.0.0", port)).await?;
    if secured {
        info!("Secured server started on http://localhost:{port}");
    } else {
        info!("Server started on http://localhost:{port}");
    }
    info!("Serving {}", root.display());

    axum::serve(listener, app).await?;
    Ok(())
}

/// Run one monitor front end bound to `port`
pub async fn run_monitor(
    port: u16,
    password: String,
    provider: Arc<dyn MetricsProvider>,
) -> anyhow::Result<()> {
    let state = MonitorState::new(password, provider);
    let app = routes::monitor_router(state);

    let listener = TcpListener::bind(("0.0.0.0", port)).await?;
    info!("Monitor started on http://localhost:{port}");

    axum::serve(listener, app).await?;
    Ok(())
}
