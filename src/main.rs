use anyhow::Context;
use clap::{Parser, Subcommand};
use colonization_dashboard::config::Config;
use colonization_dashboard::logging;
use colonization_dashboard::observability::init_metrics;
use colonization_dashboard::pipeline::{run_pipeline, PreparedData};
use colonization_dashboard::server::{start_server, AppState};
use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{error, info};

#[derive(Parser)]
#[command(name = "colonization_dashboard")]
#[command(about = "Digital Colonization story dashboard")]
#[command(version)]
struct Cli {
    /// Path to a TOML config file (defaults to ./dashboard.toml when present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Load and validate every source, then print a summary
    Prepare {
        /// Directory holding the seven CSV sources
        #[arg(long)]
        data_dir: Option<PathBuf>,
        /// Also write prepared_tables.json into this directory
        #[arg(long)]
        output: Option<PathBuf>,
    },
    /// Prepare the data, then serve the dashboard page
    Serve {
        /// Directory holding the seven CSV sources
        #[arg(long)]
        data_dir: Option<PathBuf>,
        /// Port to listen on
        #[arg(long)]
        port: Option<u16>,
    },
}

fn prepare(data_dir: &Path) -> anyhow::Result<PreparedData> {
    run_pipeline(data_dir).with_context(|| {
        format!(
            "dashboard data in '{}' is not valid; nothing will be shown",
            data_dir.display()
        )
    })
}

fn print_summary(data: &PreparedData) -> anyhow::Result<()> {
    let summary = data.summary();
    println!("\n📊 Prepared tables:");
    for (name, rows) in &summary.tables {
        println!("   {name:<24} {rows:>5} rows");
    }
    println!("   {:<24} {:>5} nodes", "flow graph", summary.flow_nodes);
    println!("   fingerprint: {}", data.fingerprint()?);
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let mut config = Config::load(cli.config.as_deref())?;
    let _guard = logging::init_logging(&config.logging);

    match cli.command {
        Commands::Prepare { data_dir, output } => {
            if let Some(dir) = data_dir {
                config.data_dir = dir;
            }
            println!("🔄 Preparing dashboard data from {}...", config.data_dir.display());

            let data = match prepare(&config.data_dir) {
                Ok(data) => data,
                Err(e) => {
                    error!("Preparation failed: {:#}", e);
                    return Err(e);
                }
            };
            print_summary(&data)?;

            if let Some(output_dir) = output {
                let path = data.write_json(&output_dir)?;
                info!("💾 Saved prepared tables to {}", path.display());
                println!("💾 Saved prepared tables to {}", path.display());
            }
            println!("✅ All sources valid");
        }
        Commands::Serve { data_dir, port } => {
            if let Some(dir) = data_dir {
                config.data_dir = dir;
            }
            if let Some(port) = port {
                config.server.port = port;
            }

            let data = match prepare(&config.data_dir) {
                Ok(data) => data,
                Err(e) => {
                    error!("Startup aborted: {:#}", e);
                    return Err(e);
                }
            };
            let state = Arc::new(AppState::from_prepared(&data)?);

            if let Some(metrics_port) = config.metrics_port {
                init_metrics(metrics_port);
            }

            let addr: SocketAddr = format!("{}:{}", config.server.host, config.server.port)
                .parse()
                .with_context(|| format!("invalid listen address {}", config.server.host))?;

            start_server(state, &config.server.assets_dir, addr)
                .await
                .map_err(|e| anyhow::anyhow!("server error: {e}"))?;
        }
    }
    Ok(())
}
