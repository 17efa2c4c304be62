//! HTTP Basic-Auth gate
//!
//! Only the password half of the credential is checked; the username is
//! carried by the scheme but ignored here, matching the served products'
//! single-secret model.

use base64::{engine::general_purpose, Engine as _};

/// Outcome of checking an `Authorization` header against the expected secret
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthOutcome {
    /// Password matches; let the request through
    Allowed,
    /// No `Authorization` header at all; the caller should challenge with
    /// `WWW-Authenticate: Basic`
    MissingCredentials,
    /// Credentials were offered and do not match (covers malformed headers
    /// too: something was offered, it is not the secret)
    WrongPassword,
}

/// Check a raw `Authorization` header value against `expected`.
///
/// The header must be `Basic <base64(user:password)>`; comparison of the
/// password is byte-for-byte. The expected secret is never logged.
pub fn check_basic(expected: &str, header: Option<&str>) -> AuthOutcome {
    let Some(header) = header else {
        return AuthOutcome::MissingCredentials;
    };

    match decode_password(header) {
        Some(password) if password.as_bytes() == expected.as_bytes() => AuthOutcome::Allowed,
        _ => AuthOutcome::WrongPassword,
    }
}

/// Extract the password from `Basic <base64(user:password)>`, if the header
/// is well formed.
fn decode_password(header: &str) -> Option<String> {
    let encoded = header
        .strip_prefix("Basic ")
        .or_else(|| header.strip_prefix("basic "))?;
    let decoded = general_purpose::STANDARD.decode(encoded.trim()).ok()?;
    let credentials = String::from_utf8(decoded).ok()?;
    let (_username, password) = credentials.split_once(':')?;
    Some(password.to_string())
}
