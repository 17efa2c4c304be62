//! Per-service state
//!
//! Each descriptor gets its own state object behind an `Arc`; nothing here
//! is shared between services and nothing is mutable after launch.

use crate::collab::MetricsProvider;
use std::path::PathBuf;
use std::sync::Arc;

/// State of one file service instance, open or secured.
///
/// No `Debug` on purpose: the password must not reach a log line.
#[derive(Clone)]
pub struct FileServerState {
    /// Absolute served root; the confinement boundary
    pub root: PathBuf,
    /// When set, the service is the secured variant
    pub password: Option<String>,
}

impl FileServerState {
    pub fn new(root: PathBuf, password: Option<String>) -> Arc<Self> {
        Arc::new(Self { root, password })
    }
}

/// State of one monitor front end
#[derive(Clone)]
pub struct MonitorState {
    pub password: String,
    pub provider: Arc<dyn MetricsProvider>,
}

impl MonitorState {
    pub fn new(password: String, provider: Arc<dyn MetricsProvider>) -> Arc<Self> {
        Arc::new(Self { password, provider })
    }
}
