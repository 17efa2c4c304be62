//! System metrics provider collaborator
//!
//! The monitor front end only consumes [`MetricsSnapshot`]s; where they come
//! from is this boundary's business. [`HostMetricsProvider`] is a thin
//! adapter over `/proc` and `ps`, so it is Linux-shaped; swap in another
//! provider for other hosts.

use anyhow::Context;
use async_trait::async_trait;
use serde::Serialize;
use tracing::warn;

/// Load of one CPU core, percent since boot
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CoreLoad {
    pub core: usize,
    pub usage: f64,
}

/// Memory totals in megabytes; used for both RAM and swap
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MemoryUsage {
    pub total: f64,
    pub used: f64,
}

/// One mounted filesystem, megabytes
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DiskUsage {
    pub mount: String,
    pub total: f64,
    pub used: f64,
}

/// One process row as reported by `ps aux`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProcessInfo {
    pub user: String,
    pub pid: String,
    pub cpu: String,
    pub mem: String,
    pub command: String,
}

/// Everything the monitor dashboard shows, in the wire shape it expects
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricsSnapshot {
    pub cpu_stats: Vec<CoreLoad>,
    pub ram_stats: MemoryUsage,
    pub disk_stats: Vec<DiskUsage>,
    pub process_list: Vec<ProcessInfo>,
    pub swap_usage: MemoryUsage,
}

/// Source of host telemetry snapshots
#[async_trait]
pub trait MetricsProvider: Send + Sync {
    async fn snapshot(&self) -> anyhow::Result<MetricsSnapshot>;
}

/// `/proc` + `ps aux` backed provider
#[derive(Default)]
pub struct HostMetricsProvider;

impl HostMetricsProvider {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl MetricsProvider for HostMetricsProvider {
    async fn snapshot(&self) -> anyhow::Result<MetricsSnapshot> {
        let stat = tokio::fs::read_to_string("/proc/stat")
            .await
            .context("reading /proc/stat")?;
        let meminfo = tokio::fs::read_to_string("/proc/meminfo")
            .await
            .context("reading /proc/meminfo")?;
        let (ram_stats, swap_usage) = parse_meminfo(&meminfo);

        Ok(MetricsSnapshot {
            cpu_stats: parse_cpu_stat(&stat),
            ram_stats,
            disk_stats: list_disks().await,
            process_list: list_processes().await,
            swap_usage,
        })
    }
}

async fn list_disks() -> Vec<DiskUsage> {
    match run_command("df", &["-Pm"]).await {
        Ok(output) => parse_df(&output),
        Err(err) => {
            warn!(error = %err, "couldn't list disks");
            Vec::new()
        }
    }
}

async fn list_processes() -> Vec<ProcessInfo> {
    match run_command("ps", &["aux", "--no-headers"]).await {
        Ok(output) => parse_ps(&output),
        Err(err) => {
            warn!(error = %err, "couldn't list processes");
            Vec::new()
        }
    }
}

async fn run_command(program: &str, args: &[&str]) -> anyhow::Result<String> {
    let output = tokio::process::Command::new(program)
        .args(args)
        .output()
        .await
        .with_context(|| format!("spawning {program}"))?;
    anyhow::ensure!(output.status.success(), "{program} exited with failure");
    Ok(String::from_utf8_lossy(&output.stdout).into_owned())
}

/// Per-core busy percentage since boot from `/proc/stat` contents
fn parse_cpu_stat(stat: &str) -> Vec<CoreLoad> {
    stat.lines()
        .filter(|line| line.starts_with("cpu") && !line.starts_with("cpu "))
        .enumerate()
        .filter_map(|(core, line)| {
            let ticks: Vec<u64> = line
                .split_whitespace()
                .skip(1)
                .filter_map(|t| t.parse().ok())
                .collect();
            let total: u64 = ticks.iter().sum();
            if total == 0 || ticks.len() < 5 {
                return None;
            }
            let idle = ticks[3] + ticks[4];
            let usage = (total - idle) as f64 / total as f64 * 100.0;
            Some(CoreLoad {
                core,
                usage: (usage * 100.0).round() / 100.0,
            })
        })
        .collect()
}

/// RAM and swap usage in MB from `/proc/meminfo` contents
fn parse_meminfo(meminfo: &str) -> (MemoryUsage, MemoryUsage) {
    fn field(meminfo: &str, name: &str) -> f64 {
        meminfo
            .lines()
            .find(|line| line.starts_with(name))
            .and_then(|line| line.split_whitespace().nth(1))
            .and_then(|kb| kb.parse::<f64>().ok())
            .map(|kb| kb / 1024.0)
            .unwrap_or(0.0)
    }

    let mem_total = field(meminfo, "MemTotal:");
    let mem_available = field(meminfo, "MemAvailable:");
    let swap_total = field(meminfo, "SwapTotal:");
    let swap_free = field(meminfo, "SwapFree:");

    (
        MemoryUsage {
            total: mem_total,
            used: (mem_total - mem_available).max(0.0),
        },
        MemoryUsage {
            total: swap_total,
            used: (swap_total - swap_free).max(0.0),
        },
    )
}

/// Mounted filesystems from `df -Pm` output
fn parse_df(output: &str) -> Vec<DiskUsage> {
    output
        .lines()
        .skip(1)
        .filter_map(|line| {
            let fields: Vec<&str> = line.split_whitespace().collect();
            if fields.len() < 6 {
                return None;
            }
            Some(DiskUsage {
                mount: fields[5..].join(" "),
                total: fields[1].parse().ok()?,
                used: fields[2].parse().ok()?,
            })
        })
        .collect()
}

/// Process rows from `ps aux` output
fn parse_ps(output: &str) -> Vec<ProcessInfo> {
    output
        .lines()
        .filter_map(|line| {
            let fields: Vec<&str> = line.split_whitespace().collect();
            if fields.len() < 11 {
                return None;
            }
            Some(ProcessInfo {
                user: fields[0].to_string(),
                pid: fields[1].to_string(),
                cpu: fields[2].to_string(),
                mem: fields[3].to_string(),
                command: fields[10..].join(" "),
            })
        })
        .collect()
}
