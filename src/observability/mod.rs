// Observability: metric names and the Prometheus exporter

pub mod metrics;

pub use metrics::{init_metrics, MetricName};
