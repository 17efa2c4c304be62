//! Request handlers

pub mod browse;
pub mod monitor;

pub use browse::browse;
pub use monitor::{monitor_index, system_info};
