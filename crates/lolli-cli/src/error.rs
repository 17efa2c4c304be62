//! Request-level error type and HTTP status mapping

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use lolli_core::PathViolation;
use thiserror::Error;

/// Errors surfaced to HTTP clients.
///
/// The secured file server answers 401 when no credentials were offered and
/// 403 when the offered password is wrong; the monitor challenges with 401
/// in both cases. The asymmetry is inherited behavior, kept on purpose —
/// unify the codes only if the products decide to.
#[derive(Error, Debug)]
pub enum ApiError {
    /// No credentials offered; answer carries a `WWW-Authenticate` challenge
    #[error("authorization required")]
    Unauthorized { realm: &'static str },

    /// Credentials offered and rejected
    #[error("forbidden")]
    Forbidden,

    /// Request path escapes the served root
    #[error(transparent)]
    PathViolation(#[from] PathViolation),

    /// stat/read/enumerate failure on the served tree
    #[error("filesystem error: {0}")]
    Filesystem(#[from] std::io::Error),

    /// An external collaborator reported failure
    #[error("collaborator failure: {0}")]
    Collaborator(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            Self::Unauthorized { realm } => (
                StatusCode::UNAUTHORIZED,
                [(
                    "WWW-Authenticate",
                    format!("Basic realm=\"{realm}\""),
                )],
                "Authorization Required",
            )
                .into_response(),
            Self::Forbidden => (StatusCode::FORBIDDEN, "Forbidden").into_response(),
            Self::PathViolation(violation) => {
                tracing::warn!(path = %violation.path, "rejected path escape attempt");
                (StatusCode::FORBIDDEN, "Forbidden").into_response()
            }
            Self::Filesystem(err) => {
                tracing::error!(error = %err, "error reading path");
                (StatusCode::INTERNAL_SERVER_ERROR, "Error reading path").into_response()
            }
            Self::Collaborator(message) => {
                tracing::error!(error = %message, "collaborator failure");
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal error").into_response()
            }
        }
    }
}
