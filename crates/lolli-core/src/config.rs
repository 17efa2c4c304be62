//! Configuration grammar and service descriptors
//!
//! A configuration file is a sequence of parenthesized groups, each group a
//! whitespace-separated token list:
//!
//! ```text
//! (monitor 5000 password)
//! (sucker https://example.com myFolder)
//! (js /path/to/script.js)
//! (/path/to/directory1 4000 -p passwordHere)
//! (/path/to/directory2 3000)
//! ```
//!
//! The first token selects the descriptor kind; any unrecognized first token
//! is a filesystem path and yields a [`ServiceDescriptor::FileServer`].

use crate::error::{ConfigError, Result};
use std::collections::HashSet;
use std::fmt;
use std::path::PathBuf;

/// One service to launch, produced immutably by [`parse_config`]
#[derive(Clone, PartialEq, Eq)]
pub enum ServiceDescriptor {
    /// Serve a directory over HTTP, optionally gated by a password
    FileServer {
        /// Absolute root directory; the confinement boundary for all
        /// request-path resolution
        root: PathBuf,
        port: u16,
        password: Option<String>,
    },
    /// Host-metrics dashboard, always password gated
    Monitor { port: u16, password: String },
    /// Archive a website into a destination directory
    Archiver { url: String, dest: PathBuf },
    /// Run a script through the script-runner collaborator
    Script { path: PathBuf },
}

// Hand-written so passwords never reach a log line through `{:?}`.
impl fmt::Debug for ServiceDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FileServer {
                root,
                port,
                password,
            } => f
                .debug_struct("FileServer")
                .field("root", root)
                .field("port", port)
                .field("password", &password.as_ref().map(|_| "<redacted>"))
                .finish(),
            Self::Monitor { port, .. } => f
                .debug_struct("Monitor")
                .field("port", port)
                .field("password", &"<redacted>")
                .finish(),
            Self::Archiver { url, dest } => f
                .debug_struct("Archiver")
                .field("url", url)
                .field("dest", dest)
                .finish(),
            Self::Script { path } => f.debug_struct("Script").field("path", path).finish(),
        }
    }
}

impl ServiceDescriptor {
    /// The network port this descriptor binds, if any
    pub fn port(&self) -> Option<u16> {
        match self {
            Self::FileServer { port, .. } | Self::Monitor { port, .. } => Some(*port),
            Self::Archiver { .. } | Self::Script { .. } => None,
        }
    }
}

/// Parse configuration text into an ordered descriptor list.
///
/// Port uniqueness across port-bearing descriptors is enforced as each group
/// is parsed; the first duplicate aborts the whole parse. No partial list is
/// ever returned.
pub fn parse_config(text: &str) -> Result<Vec<ServiceDescriptor>> {
    let mut descriptors = Vec::new();
    let mut used_ports: HashSet<u16> = HashSet::new();

    for group in extract_groups(text)? {
        let tokens: Vec<&str> = group.split_whitespace().collect();
        let descriptor = parse_group(&tokens)?;

        if let Some(port) = descriptor.port() {
            if !used_ports.insert(port) {
                return Err(ConfigError::DuplicatePort(port));
            }
        }
        descriptors.push(descriptor);
    }

    Ok(descriptors)
}

/// Pull out the contents of every `( ... )` group; text between groups is
/// ignored. Groups do not nest.
fn extract_groups(text: &str) -> Result<Vec<&str>> {
    let mut groups = Vec::new();
    let mut rest = text;

    while let Some(open) = rest.find('(') {
        let after = &rest[open + 1..];
        let close = after
            .find(')')
            .ok_or_else(|| ConfigError::UnterminatedGroup(truncate(after)))?;
        groups.push(&after[..close]);
        rest = &after[close + 1..];
    }

    Ok(groups)
}

fn truncate(s: &str) -> String {
    s.chars().take(32).collect()
}

fn parse_group(tokens: &[&str]) -> Result<ServiceDescriptor> {
    let Some(&kind) = tokens.first() else {
        return Err(ConfigError::EmptyDescriptor);
    };

    match kind {
        "monitor" => {
            let port = parse_port(kind, tokens.get(1))?;
            let password = require(kind, tokens.get(2), "password")?;
            Ok(ServiceDescriptor::Monitor {
                port,
                password: password.to_string(),
            })
        }
        "sucker" => {
            let url = require(kind, tokens.get(1), "source URL")?;
            let dest = require(kind, tokens.get(2), "destination directory")?;
            Ok(ServiceDescriptor::Archiver {
                url: url.to_string(),
                dest: PathBuf::from(dest),
            })
        }
        "js" => {
            let path = require(kind, tokens.get(1), "script path")?;
            Ok(ServiceDescriptor::Script {
                path: PathBuf::from(path),
            })
        }
        path => parse_file_server(path, &tokens[1..]),
    }
}

/// `<path> <port>` with an optional `-p <password>` pair anywhere after the
/// path.
fn parse_file_server(path: &str, rest: &[&str]) -> Result<ServiceDescriptor> {
    let mut password = None;
    let mut positional = Vec::new();

    let mut iter = rest.iter();
    while let Some(&token) = iter.next() {
        if token == "-p" {
            let secret = iter
                .next()
                .ok_or_else(|| ConfigError::MissingField {
                    descriptor: path.to_string(),
                    field: "password after -p",
                })?;
            password = Some(secret.to_string());
        } else {
            positional.push(token);
        }
    }

    let port = parse_port(path, positional.first())?;
    let root = std::path::absolute(path).map_err(|_| ConfigError::MissingField {
        descriptor: path.to_string(),
        field: "root path",
    })?;

    Ok(ServiceDescriptor::FileServer {
        root,
        port,
        password,
    })
}

fn parse_port(descriptor: &str, token: Option<&&str>) -> Result<u16> {
    let token = token.ok_or_else(|| ConfigError::MissingField {
        descriptor: descriptor.to_string(),
        field: "port",
    })?;
    token.parse().map_err(|_| ConfigError::InvalidPort {
        descriptor: descriptor.to_string(),
        token: token.to_string(),
    })
}

fn require<'a>(
    descriptor: &str,
    token: Option<&&'a str>,
    field: &'static str,
) -> Result<&'a str> {
    token.copied().ok_or_else(|| ConfigError::MissingField {
        descriptor: descriptor.to_string(),
        field,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_all_descriptor_kinds() {
        let text = "\
            (monitor 5000 hunter2)\n\
            (sucker https://example.com mirror)\n\
            (js /opt/task.js)\n\
            (/srv/public 4000)\n";
        let descriptors = parse_config(text).unwrap();

        assert_eq!(descriptors.len(), 4);
        assert_eq!(
            descriptors[0],
            ServiceDescriptor::Monitor {
                port: 5000,
                password: "hunter2".to_string(),
            }
        );
        assert_eq!(
            descriptors[1],
            ServiceDescriptor::Archiver {
                url: "https://example.com".to_string(),
                dest: PathBuf::from("mirror"),
            }
        );
        assert_eq!(
            descriptors[2],
            ServiceDescriptor::Script {
                path: PathBuf::from("/opt/task.js"),
            }
        );
        assert_eq!(
            descriptors[3],
            ServiceDescriptor::FileServer {
                root: PathBuf::from("/srv/public"),
                port: 4000,
                password: None,
            }
        );
    }

    #[test]
    fn file_server_password_flag_anywhere() {
        let with_trailing = parse_config("(/srv/public 4000 -p secret)").unwrap();
        let with_leading = parse_config("(/srv/public -p secret 4000)").unwrap();
        assert_eq!(with_trailing, with_leading);

        match &with_trailing[0] {
            ServiceDescriptor::FileServer { password, port, .. } => {
                assert_eq!(password.as_deref(), Some("secret"));
                assert_eq!(*port, 4000);
            }
            other => panic!("expected file server, got {other:?}"),
        }
    }

    #[test]
    fn relative_root_is_absolutized() {
        let descriptors = parse_config("(./public 5000)").unwrap();
        match &descriptors[0] {
            ServiceDescriptor::FileServer { root, .. } => {
                assert!(root.is_absolute(), "root should be absolute: {root:?}");
            }
            other => panic!("expected file server, got {other:?}"),
        }
    }

    #[test]
    fn duplicate_port_aborts_whole_parse() {
        let err = parse_config("(a.txt 4000)(b.txt 4000)").unwrap_err();
        assert!(matches!(err, ConfigError::DuplicatePort(4000)));
    }

    #[test]
    fn monitor_and_file_server_share_port_namespace() {
        let err = parse_config("(/srv/public 6000)(monitor 6000 secret)").unwrap_err();
        assert!(matches!(err, ConfigError::DuplicatePort(6000)));
    }

    #[test]
    fn non_numeric_port_is_rejected() {
        let err = parse_config("(/srv/public eighty)").unwrap_err();
        assert!(matches!(err, ConfigError::InvalidPort { .. }));
    }

    #[test]
    fn missing_tokens_are_rejected() {
        assert!(matches!(
            parse_config("(monitor 5000)").unwrap_err(),
            ConfigError::MissingField { field: "password", .. }
        ));
        assert!(matches!(
            parse_config("(sucker https://example.com)").unwrap_err(),
            ConfigError::MissingField { .. }
        ));
        assert!(matches!(
            parse_config("(/srv/public 4000 -p)").unwrap_err(),
            ConfigError::MissingField { field: "password after -p", .. }
        ));
    }

    #[test]
    fn empty_group_and_unterminated_group() {
        assert!(matches!(
            parse_config("()").unwrap_err(),
            ConfigError::EmptyDescriptor
        ));
        assert!(matches!(
            parse_config("(/srv/public 4000").unwrap_err(),
            ConfigError::UnterminatedGroup(_)
        ));
    }

    #[test]
    fn text_outside_groups_is_ignored() {
        let descriptors = parse_config("# comment\n(/srv/public 4000)\ntrailing").unwrap();
        assert_eq!(descriptors.len(), 1);
    }

    #[test]
    fn empty_config_yields_no_descriptors() {
        assert!(parse_config("").unwrap().is_empty());
    }

    #[test]
    fn debug_never_shows_passwords() {
        let descriptors = parse_config("(monitor 5000 hunter2)(/srv/x 4000 -p abc123)").unwrap();
        let rendered = format!("{descriptors:?}");
        assert!(!rendered.contains("hunter2"));
        assert!(!rendered.contains("abc123"));
    }
}
