//! # Lolli Core
//!
//! Core logic for the lollipop multi-service file server.
//!
//! This crate provides:
//! - **Service Descriptors**: the typed configuration grammar and parser
//! - **Path Confinement**: resolution of untrusted request paths under a root
//! - **Directory Listings**: the order-preserving listing data model
//! - **Auth Gate**: HTTP Basic-Auth credential checking
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │           HTTP Service Layer            │
//! ├─────────────────────────────────────────┤
//! │   Auth Gate   │   Path Resolver         │
//! ├─────────────────────────────────────────┤
//! │   Listing Model   │   Config Parser     │
//! └─────────────────────────────────────────┘
//! ```
//!
//! Everything in here is deliberately HTTP-framework free; the `lolli-cli`
//! crate wires these pieces into axum services.

pub mod auth;
pub mod config;
pub mod error;
pub mod listing;
pub mod resolve;

pub use auth::{check_basic, AuthOutcome};
pub use config::{parse_config, ServiceDescriptor};
pub use error::{ConfigError, PathViolation, Result};
pub use listing::{build_listing, ListingEntry};
pub use resolve::resolve_request_path;
