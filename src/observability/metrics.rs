//! Metric names recorded by the pipeline and the page server.

use std::fmt;
use std::net::SocketAddr;

/// All metric names used in the crate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MetricName {
    RowsLoaded,
    PipelineDuration,
    PageRequests,
}

impl MetricName {
    pub fn as_str(&self) -> &'static str {
        match self {
            MetricName::RowsLoaded => "dashboard_rows_loaded_total",
            MetricName::PipelineDuration => "dashboard_pipeline_duration_seconds",
            MetricName::PageRequests => "dashboard_page_requests_total",
        }
    }
}

impl fmt::Display for MetricName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Install the Prometheus exporter on `port`. Failure is reported, not fatal.
pub fn init_metrics(port: u16) {
    let addr: SocketAddr = ([0, 0, 0, 0], port).into();
    let builder = metrics_exporter_prometheus::PrometheusBuilder::new().with_http_listener(addr);
    match builder.install() {
        Ok(()) => {
            tracing::info!("Prometheus exporter listening on http://{}/metrics", addr);
        }
        Err(e) => {
            tracing::warn!("Prometheus exporter install failed (possibly already installed): {}", e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_follow_prometheus_conventions() {
        for name in [
            MetricName::RowsLoaded,
            MetricName::PipelineDuration,
            MetricName::PageRequests,
        ] {
            let s = name.to_string();
            assert!(s.starts_with("dashboard_"));
            assert!(s.ends_with("_total") || s.ends_with("_seconds"));
        }
    }
}
