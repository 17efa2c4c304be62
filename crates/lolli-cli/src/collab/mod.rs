//! External collaborator boundaries
//!
//! The site archiver, the metrics provider, and the script runner are
//! external capabilities: lollipop invokes them through these traits and
//! handles their success or failure, nothing more. Failures are logged at
//! this boundary and never take the launching process down.

pub mod archive;
pub mod metrics;
pub mod script;

pub use archive::{HttpArchiver, SiteArchiver};
pub use metrics::{HostMetricsProvider, MetricsProvider, MetricsSnapshot};
pub use script::{NodeScriptRunner, ScriptOutput, ScriptRunner};
