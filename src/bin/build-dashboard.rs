//! Dashboard Builder Binary
//!
//! Prepares the data and writes the complete dashboard document (sections,
//! chart traces, layout) as JSON, for renderers that work from a static file.
//!
//! Usage:
//!   cargo run --bin build-dashboard                          # data/ -> dashboard.json
//!   cargo run --bin build-dashboard -- --data-dir fixtures --output out.json

use anyhow::Context;
use clap::Parser;
use colonization_dashboard::config::Config;
use colonization_dashboard::dashboard::DashboardBuilder;
use colonization_dashboard::run_pipeline;
use std::fs;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "build-dashboard")]
#[command(about = "Write the dashboard JSON document")]
struct Args {
    /// Directory holding the seven CSV sources
    #[arg(long)]
    data_dir: Option<PathBuf>,
    /// Where to save the document
    #[arg(long, default_value = "dashboard.json")]
    output: PathBuf,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let config = Config::load(None)?;
    let data_dir = args.data_dir.unwrap_or(config.data_dir);

    eprintln!("📋 Preparing data from {}", data_dir.display());
    let data = run_pipeline(&data_dir)
        .with_context(|| format!("cannot build dashboard from '{}'", data_dir.display()))?;

    let dashboard_json = DashboardBuilder::from_prepared(&data)
        .with_fingerprint(data.fingerprint()?)
        .build();

    let json_string = serde_json::to_string_pretty(&dashboard_json)?;

    // Print to stdout by default
    println!("{}", json_string);

    fs::write(&args.output, &json_string)
        .with_context(|| format!("failed to write {}", args.output.display()))?;

    eprintln!("✅ Dashboard generated successfully!");
    eprintln!("📄 Saved to: {}", args.output.display());
    Ok(())
}
