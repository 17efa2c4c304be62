//! Error types for the lolli-core crate

use thiserror::Error;

/// Result type alias using `ConfigError`
pub type Result<T> = std::result::Result<T, ConfigError>;

/// Errors that can occur while parsing a configuration file
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Two port-bearing descriptors claim the same port
    #[error("port {0} is already in use, each server or monitor needs a unique port")]
    DuplicatePort(u16),

    /// A port token is missing or not a number
    #[error("invalid port {token:?} in descriptor {descriptor:?}")]
    InvalidPort { descriptor: String, token: String },

    /// A descriptor is missing a required token
    #[error("descriptor {descriptor:?} is missing its {field}")]
    MissingField {
        descriptor: String,
        field: &'static str,
    },

    /// An empty `()` group
    #[error("empty descriptor group")]
    EmptyDescriptor,

    /// A `(` without a matching `)`
    #[error("unterminated descriptor group: {0:?}")]
    UnterminatedGroup(String),
}

/// An untrusted request path tried to escape the served root
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("request path {path:?} escapes the served root")]
pub struct PathViolation {
    /// The offending client-supplied path
    pub path: String,
}
