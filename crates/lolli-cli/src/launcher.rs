//! Service launcher
//!
//! One spawned task per descriptor, in configuration order. A descriptor
//! that fails to start (a port already bound, a dead script path) is logged
//! and does not stop the descriptors after it, and never takes down a
//! service that already started.

use crate::collab::{
    archive::archive_and_report, script::run_and_report, HostMetricsProvider, HttpArchiver,
    NodeScriptRunner,
};
use crate::server::{run_file_server, run_monitor};
use lolli_core::ServiceDescriptor;
use std::sync::Arc;
use tokio::task::JoinHandle;
use tracing::error;

/// Launch every descriptor; fire-and-forget.
///
/// The returned handles let the caller keep the process resident; file
/// servers and monitors never resolve, archiver and script tasks resolve
/// when the collaborator finishes.
pub fn launch_all(descriptors: Vec<ServiceDescriptor>) -> Vec<JoinHandle<()>> {
    descriptors.into_iter().map(launch).collect()
}

/// Launch one descriptor in its own task
pub fn launch(descriptor: ServiceDescriptor) -> JoinHandle<()> {
    tokio::spawn(async move {
        match descriptor {
            ServiceDescriptor::FileServer {
                root,
                port,
                password,
            } => {
                if let Err(err) = run_file_server(root, port, password).await {
                    error!(port, error = %err, "file server failed to start");
                }
            }
            ServiceDescriptor::Monitor { port, password } => {
                let provider = Arc::new(HostMetricsProvider::new());
                if let Err(err) = run_monitor(port, password, provider).await {
                    error!(port, error = %err, "monitor failed to start");
                }
            }
            ServiceDescriptor::Archiver { url, dest } => {
                archive_and_report(&HttpArchiver::new(), &url, &dest).await;
            }
            ServiceDescriptor::Script { path } => {
                run_and_report(&NodeScriptRunner::new(), &path).await;
            }
        }
    })
}
