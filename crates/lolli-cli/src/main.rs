//! lollipop - multi-service static file server

use anyhow::Context;
use clap::{Parser, Subcommand};
use lolli_cli::collab::{
    archive::archive_and_report, script::run_and_report, HostMetricsProvider, HttpArchiver,
    NodeScriptRunner,
};
use lolli_cli::{launch_all, run_file_server, run_monitor};
use lolli_core::{parse_config, ServiceDescriptor};
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// First port of the no-arguments "serve every subdirectory" mode
const DEFAULT_PORT_BASE: u16 = 9000;

#[derive(Parser, Debug)]
#[command(name = "lollipop")]
#[command(about = "Serve directories over HTTP, with optional password gating")]
#[command(version)]
#[command(args_conflicts_with_subcommands = true)]
struct Args {
    /// Configuration file (e.g. lolli.pop) describing the services to launch
    #[arg(short = 'c', long = "config", value_name = "CONFIG_FILE")]
    config: Option<PathBuf>,

    /// Password for the directly-started server
    #[arg(short = 'p', long = "password")]
    password: Option<String>,

    /// Directory to serve directly
    directory: Option<PathBuf>,

    /// Port for the directly-served directory
    port: Option<u16>,

    /// Enable debug logging
    #[arg(short, long, env = "LOLLIPOP_DEBUG")]
    debug: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Scrape and save a website into a folder
    Sucker { url: String, folder: PathBuf },
    /// Run a JavaScript file through the script runner
    #[command(alias = "js")]
    Execute { script: PathBuf },
    /// Start the password-gated system monitor
    Monitor { port: u16, password: String },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    let mut args = Args::parse();

    // Setup logging
    let log_level = if args.debug { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                format!("lolli_cli={log_level},lolli_core={log_level},tower_http=warn").into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // No graceful drain: print the farewell and go.
    tokio::spawn(async {
        if tokio::signal::ctrl_c().await.is_ok() {
            println!("Lollipop!");
            std::process::exit(0);
        }
    });

    match args.command.take() {
        Some(Command::Sucker { url, folder }) => {
            archive_and_report(&HttpArchiver::new(), &url, &folder).await;
            Ok(())
        }
        Some(Command::Execute { script }) => {
            run_and_report(&NodeScriptRunner::new(), &script).await;
            Ok(())
        }
        Some(Command::Monitor { port, password }) => {
            run_monitor(port, password, Arc::new(HostMetricsProvider::new())).await
        }
        None => run_servers(args).await,
    }
}

async fn run_servers(args: Args) -> anyhow::Result<()> {
    if let Some(config_path) = args.config {
        let text = std::fs::read_to_string(&config_path)
            .with_context(|| format!("reading {}", config_path.display()))?;
        // A bad config is fatal before anything starts.
        let descriptors = parse_config(&text)?;

        let handles = launch_all(descriptors);
        futures::future::join_all(handles).await;
        return Ok(());
    }

    if let Some(directory) = args.directory {
        let port = args
            .port
            .context("you must provide a port after the directory")?;
        let root = std::path::absolute(&directory)
            .with_context(|| format!("resolving {}", directory.display()))?;
        return run_file_server(root, port, args.password).await;
    }

    // No arguments: serve every subdirectory of the current directory on
    // sequential ports.
    let cwd = std::env::current_dir().context("reading current directory")?;
    let mut descriptors = Vec::new();
    let mut port = DEFAULT_PORT_BASE;
    for entry in std::fs::read_dir(&cwd).context("listing current directory")? {
        let entry = entry?;
        if entry.file_type()?.is_dir() {
            descriptors.push(ServiceDescriptor::FileServer {
                root: cwd.join(entry.file_name()),
                port,
                password: None,
            });
            port += 1;
        }
    }

    if descriptors.is_empty() {
        anyhow::bail!("no subdirectories to serve in {}", cwd.display());
    }

    let handles = launch_all(descriptors);
    futures::future::join_all(handles).await;
    Ok(())
}
