//! Path confinement for untrusted request paths
//!
//! Resolution is purely lexical: `.` and empty segments are dropped, `..`
//! pops a previously accepted segment, and a `..` with nothing left to pop
//! is an escape attempt. Containment is decided component-wise by
//! construction, never by comparing path strings, so a root of `/srv/www`
//! can never accept `/srv/www-secret`.

use crate::error::PathViolation;
use std::path::{Component, Path, PathBuf};

/// Resolve a client-supplied relative path under `root`.
///
/// Returns the joined absolute path, guaranteed to be `root` itself or
/// strictly below it, or a [`PathViolation`] if the input tries to climb
/// out. Never touches the filesystem and never panics.
pub fn resolve_request_path(root: &Path, raw: &str) -> Result<PathBuf, PathViolation> {
    let mut accepted: Vec<&str> = Vec::new();

    for segment in raw.split('/') {
        match segment {
            "" | "." => {}
            ".." => {
                if accepted.pop().is_none() {
                    return Err(PathViolation {
                        path: raw.to_string(),
                    });
                }
            }
            name => {
                // A decoded segment that still parses as something other
                // than a plain name (a rooted or parent component) must not
                // silently re-anchor the path.
                if Path::new(name)
                    .components()
                    .any(|c| !matches!(c, Component::Normal(_)))
                {
                    return Err(PathViolation {
                        path: raw.to_string(),
                    });
                }
                accepted.push(name);
            }
        }
    }

    let mut resolved = root.to_path_buf();
    for segment in accepted {
        resolved.push(segment);
    }
    Ok(resolved)
}
