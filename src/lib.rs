pub mod config;
pub mod constants;
pub mod dashboard;
pub mod error;
pub mod logging;
pub mod observability;
pub mod pipeline;
pub mod server;
pub mod table;
pub mod types;

pub use error::{DashboardError, Result};
pub use pipeline::{run_pipeline, PreparedData};
