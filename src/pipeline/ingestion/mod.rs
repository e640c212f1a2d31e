// Pipeline ingestion: locating and reading the CSV sources into tables

use crate::error::{DashboardError, Result};
use crate::observability::MetricName;
use crate::table::Table;
use crate::types::SourceId;
use csv::{ReaderBuilder, Trim};
use metrics::counter;
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use tracing::{debug, instrument};

/// Where a source lives under the data directory
pub fn source_path(data_dir: &Path, source_id: SourceId) -> PathBuf {
    data_dir.join(source_id.file_name())
}

/// Read one named CSV source and check its header against the required columns.
#[instrument(skip(data_dir), fields(source = %source_id))]
pub fn load_table(data_dir: &Path, source_id: SourceId) -> Result<Table> {
    let path = source_path(data_dir, source_id);
    if !path.is_file() {
        return Err(DashboardError::SourceNotFound {
            source_id: source_id.to_string(),
            path: path.display().to_string(),
        });
    }

    let malformed = |source: csv::Error| DashboardError::MalformedCsv {
        source_id: source_id.to_string(),
        source,
    };

    let mut reader = ReaderBuilder::new()
        .trim(Trim::All)
        .from_path(&path)
        .map_err(malformed)?;

    let columns: Vec<String> = reader
        .headers()
        .map_err(malformed)?
        .iter()
        .map(str::to_string)
        .collect();
    check_header(source_id, &columns)?;

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record.map_err(malformed)?;
        rows.push(record.iter().map(str::to_string).collect());
    }

    let table = Table::new(source_id, columns, rows);
    table.require_columns(source_id.required_columns())?;

    counter!(MetricName::RowsLoaded.as_str(), "source" => source_id.as_str()).increment(table.len() as u64);
    debug!("Loaded {} rows from {}", table.len(), path.display());
    Ok(table)
}

fn check_header(source_id: SourceId, columns: &[String]) -> Result<()> {
    if columns.iter().all(|c| c.is_empty()) {
        return Err(DashboardError::Schema {
            source_id: source_id.to_string(),
            message: "no header row".to_string(),
        });
    }

    let mut seen = HashSet::new();
    if let Some(dup) = columns.iter().find(|c| !seen.insert(c.as_str())) {
        return Err(DashboardError::Schema {
            source_id: source_id.to_string(),
            message: format!("duplicate column: {dup}"),
        });
    }
    Ok(())
}
