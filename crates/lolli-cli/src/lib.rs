//! # Lollipop
//!
//! Multi-service static file server.
//!
//! This crate provides:
//! - **File Services**: directory browsing and file download over HTTP, in
//!   an open and a password-gated flavor
//! - **Monitor**: a Basic-Auth gated host-metrics dashboard
//! - **Launcher**: one isolated service per configuration descriptor
//! - **Collaborators**: thin adapters for the site archiver, the metrics
//!   provider, and the script runner
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │                   HTTP Clients                      │
//! └─────────────────────────┬───────────────────────────┘
//!                           │  one listener per descriptor
//! ┌─────────────────────────▼───────────────────────────┐
//! │                     Lollipop                        │
//! ├─────────────────────────────────────────────────────┤
//! │  Auth Middleware │ Request Logging │ Trace Layer    │
//! ├─────────────────────────────────────────────────────┤
//! │   Browse / Download Handlers   │  Monitor Handlers  │
//! ├─────────────────────────────────────────────────────┤
//! │                    lolli-core                       │
//! │   (descriptors, path confinement, listings, auth)   │
//! └─────────────────────────────────────────────────────┘
//! ```

pub mod collab;
pub mod error;
pub mod handlers;
pub mod launcher;
pub mod middleware;
pub mod render;
pub mod routes;
pub mod server;
pub mod state;

pub use error::ApiError;
pub use launcher::launch_all;
pub use server::{run_file_server, run_monitor};
pub use state::{FileServerState, MonitorState};
