// Data preparation pipeline: ingestion of the CSV sources and the derived tables

pub mod ingestion;
pub mod processing;

use crate::error::Result;
use crate::observability::MetricName;
use crate::table::Table;
use crate::types::{
    AdAlgoRow, AttentionRow, DependencyRow, FlowRow, LocalAppRow, OwnershipRow, ScreenTimeRow,
    SourceId,
};
use metrics::histogram;
use processing::{build_flow_graph_index, compute_attention_index, FlowGraph, FromTable};
use serde::Serialize;
use sha2::{Digest, Sha256};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, instrument};

pub use ingestion::load_table;

/// File written by [`PreparedData::write_json`]
pub const PREPARED_TABLES_FILE: &str = "prepared_tables.json";

/// Everything the dashboard binds to, computed once at startup
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PreparedData {
    pub dependency: Vec<DependencyRow>,
    pub ownership: Vec<OwnershipRow>,
    pub flows: FlowGraph,
    pub local_apps: Vec<LocalAppRow>,
    pub laws: Table,
    pub screen_time: Vec<ScreenTimeRow>,
    pub ad_algo: Vec<AdAlgoRow>,
    pub attention: Vec<AttentionRow>,
}

/// Row counts per prepared table
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PreparedSummary {
    pub tables: Vec<(String, usize)>,
    pub flow_nodes: usize,
}

impl PreparedData {
    pub fn summary(&self) -> PreparedSummary {
        let source_rows = [
            self.dependency.len(),
            self.ownership.len(),
            self.flows.links.len(),
            self.local_apps.len(),
            self.laws.len(),
            self.screen_time.len(),
            self.ad_algo.len(),
        ];
        let mut tables: Vec<(String, usize)> = SourceId::ALL
            .iter()
            .zip(source_rows)
            .map(|(source_id, rows)| (source_id.to_string(), rows))
            .collect();
        tables.push(("attention_index".to_string(), self.attention.len()));

        PreparedSummary {
            tables,
            flow_nodes: self.flows.nodes.len(),
        }
    }

    /// SHA-256 over the serialized tables; equal inputs give equal digests
    pub fn fingerprint(&self) -> Result<String> {
        let bytes = serde_json::to_vec(self)?;
        Ok(hex::encode(Sha256::digest(&bytes)))
    }

    /// Persist the prepared tables as pretty JSON under `output_dir`
    pub fn write_json(&self, output_dir: &Path) -> Result<PathBuf> {
        fs::create_dir_all(output_dir)?;
        let path = output_dir.join(PREPARED_TABLES_FILE);
        fs::write(&path, serde_json::to_string_pretty(self)?)?;
        Ok(path)
    }
}

/// Load every source under `data_dir` and compute the derived tables.
///
/// All or nothing: the first missing source, schema mismatch or bad value
/// aborts the run.
#[instrument(skip(data_dir), fields(data_dir = %data_dir.display()))]
pub fn run_pipeline(data_dir: &Path) -> Result<PreparedData> {
    let started = std::time::Instant::now();
    info!("🚀 Preparing dashboard data");

    let dependency = DependencyRow::from_table(&load_table(data_dir, SourceId::YouthDependencyIndex)?)?;
    let ownership = OwnershipRow::from_table(&load_table(data_dir, SourceId::PlatformOwnership)?)?;
    let flow_rows = FlowRow::from_table(&load_table(data_dir, SourceId::DataFlowPaths)?)?;
    let local_apps = LocalAppRow::from_table(&load_table(data_dir, SourceId::LocalAppsUsage)?)?;
    let laws = load_table(data_dir, SourceId::DigitalLawsScore)?;
    let screen_time = ScreenTimeRow::from_table(&load_table(data_dir, SourceId::ScreenTimeStats)?)?;
    let ad_algo = AdAlgoRow::from_table(&load_table(data_dir, SourceId::AdAlgoExposure)?)?;

    let flows = build_flow_graph_index(&flow_rows);
    let attention = compute_attention_index(&screen_time, &ad_algo);

    info!(
        "✅ Prepared {} flow links across {} countries, {} attention rows",
        flows.links.len(),
        flows.nodes.len(),
        attention.len()
    );
    histogram!(MetricName::PipelineDuration.as_str()).record(started.elapsed().as_secs_f64());

    Ok(PreparedData {
        dependency,
        ownership,
        flows,
        local_apps,
        laws,
        screen_time,
        ad_algo,
        attention,
    })
}
