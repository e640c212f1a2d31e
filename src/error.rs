use thiserror::Error;

#[derive(Error, Debug)]
pub enum DashboardError {
    #[error("Source '{source_id}' not found at {path}")]
    SourceNotFound { source_id: String, path: String },

    #[error("Schema error in '{source_id}': {message}")]
    Schema { source_id: String, message: String },

    #[error("Parse error in '{source_id}' row {row}, column {column}: cannot parse {value:?}")]
    Parse {
        source_id: String,
        row: usize,
        column: String,
        value: String,
    },

    #[error("Malformed CSV in '{source_id}': {source}")]
    MalformedCsv {
        source_id: String,
        #[source]
        source: csv::Error,
    },

    #[error("Invalid percentage value: {0:?}")]
    InvalidPercentage(String),

    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML deserialization failed: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl DashboardError {
    /// True for the data-quality failures that abort startup (missing source,
    /// schema mismatch, unparseable value, malformed file).
    pub fn is_data_error(&self) -> bool {
        matches!(
            self,
            DashboardError::SourceNotFound { .. }
                | DashboardError::Schema { .. }
                | DashboardError::Parse { .. }
                | DashboardError::MalformedCsv { .. }
                | DashboardError::InvalidPercentage(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, DashboardError>;
