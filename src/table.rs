//! In-memory CSV table with named columns.
//!
//! Tables keep every cell as trimmed text; typed views are pulled out column
//! by column so that a bad cell reports the exact source, row and column.

use crate::error::{DashboardError, Result};
use crate::types::SourceId;
use serde::Serialize;
use serde_json::{Map, Number, Value};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Table {
    pub source_id: SourceId,
    columns: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new(source_id: SourceId, columns: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        Self {
            source_id,
            columns,
            rows,
        }
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    /// Fails with a schema error listing every required column that is absent
    pub fn require_columns(&self, required: &[&str]) -> Result<()> {
        let missing: Vec<&str> = required
            .iter()
            .copied()
            .filter(|name| self.column_index(name).is_none())
            .collect();

        if missing.is_empty() {
            Ok(())
        } else {
            Err(DashboardError::Schema {
                source_id: self.source_id.to_string(),
                message: format!("missing column(s): {}", missing.join(", ")),
            })
        }
    }

    /// Extract one column, converting each cell with `convert`.
    ///
    /// A cell for which `convert` returns `None` is a parse error carrying the
    /// 1-based data row number.
    pub fn map_column<T, F>(&self, name: &str, convert: F) -> Result<Vec<T>>
    where
        F: Fn(&str) -> Option<T>,
    {
        let idx = self.column_index(name).ok_or_else(|| DashboardError::Schema {
            source_id: self.source_id.to_string(),
            message: format!("missing column(s): {name}"),
        })?;

        self.rows
            .iter()
            .enumerate()
            .map(|(i, row)| {
                let raw = row.get(idx).map(String::as_str).unwrap_or("");
                convert(raw).ok_or_else(|| DashboardError::Parse {
                    source_id: self.source_id.to_string(),
                    row: i + 1,
                    column: name.to_string(),
                    value: raw.to_string(),
                })
            })
            .collect()
    }

    pub fn text_column(&self, name: &str) -> Result<Vec<String>> {
        self.map_column(name, |raw| Some(raw.to_string()))
    }

    pub fn float_column(&self, name: &str) -> Result<Vec<f64>> {
        self.map_column(name, parse_decimal)
    }

    /// Rows as JSON objects for verbatim rendering. Numeric-looking cells
    /// become numbers, everything else stays text.
    pub fn to_records(&self) -> Vec<Map<String, Value>> {
        self.rows
            .iter()
            .map(|row| {
                self.columns
                    .iter()
                    .zip(row.iter())
                    .map(|(column, cell)| (column.clone(), cell_value(cell)))
                    .collect()
            })
            .collect()
    }
}

/// Parse a trimmed decimal; empty, non-numeric and non-finite values are rejected
pub fn parse_decimal(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

fn cell_value(cell: &str) -> Value {
    if let Ok(int) = cell.parse::<i64>() {
        return Value::Number(int.into());
    }
    parse_decimal(cell)
        .and_then(Number::from_f64)
        .map(Value::Number)
        .unwrap_or_else(|| Value::String(cell.to_string()))
}
