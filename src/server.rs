use crate::dashboard::{DashboardBuilder, DASHBOARD_TITLE};
use crate::error::Result;
use crate::observability::MetricName;
use crate::pipeline::PreparedData;
use axum::{
    http::Method,
    response::{Html, IntoResponse, Json},
    routing::get,
    Extension, Router,
};
use hyper::Server;
use metrics::counter;
use serde_json::Value;
use std::net::SocketAddr;
use std::path::Path;
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tracing::info;

/// Immutable state built once before the listener is bound
pub struct AppState {
    pub dashboard: Value,
    pub tables: Value,
    pub fingerprint: String,
}

impl AppState {
    pub fn from_prepared(data: &PreparedData) -> Result<Self> {
        let fingerprint = data.fingerprint()?;
        let dashboard = DashboardBuilder::from_prepared(data)
            .with_fingerprint(fingerprint.clone())
            .build();
        Ok(Self {
            dashboard,
            tables: serde_json::to_value(data)?,
            fingerprint,
        })
    }
}

/// Health check endpoint
async fn health(Extension(state): Extension<Arc<AppState>>) -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "healthy",
        "service": "colonization-dashboard",
        "version": env!("CARGO_PKG_VERSION"),
        "fingerprint": state.fingerprint,
    }))
}

async fn dashboard_json(Extension(state): Extension<Arc<AppState>>) -> impl IntoResponse {
    Json(state.dashboard.clone())
}

async fn tables_json(Extension(state): Extension<Arc<AppState>>) -> impl IntoResponse {
    Json(state.tables.clone())
}

/// Page shell; charts are drawn client side from `/api/dashboard`
async fn index() -> impl IntoResponse {
    counter!(MetricName::PageRequests.as_str()).increment(1);
    let html = r#"<!DOCTYPE html>
<html lang="en">
  <head>
    <meta charset="utf-8" />
    <meta name="viewport" content="width=device-width, initial-scale=1" />
    <title>__TITLE__</title>
    <link rel="stylesheet" href="/assets/styles.css" />
    <script src="https://cdn.plot.ly/plotly-2.27.0.min.js"></script>
  </head>
  <body class="dashboard">
    <div id="header" class="dashboard-header"></div>
    <div id="sections"></div>
    <script>
      function el(tag, cls, text) {
        var e = document.createElement(tag);
        if (cls) e.className = cls;
        if (text) e.textContent = text;
        return e;
      }
      function renderTable(host, chart) {
        var card = el('div', 'card');
        card.appendChild(el('h3', 'table-title', chart.title));
        var table = el('table');
        var head = el('tr');
        chart.data.columns.forEach(function (c) { head.appendChild(el('th', null, c.name)); });
        table.appendChild(head);
        chart.data.records.forEach(function (r) {
          var row = el('tr');
          chart.data.columns.forEach(function (c) { row.appendChild(el('td', null, String(r[c.id]))); });
          table.appendChild(row);
        });
        card.appendChild(table);
        host.appendChild(card);
      }
      fetch('/api/dashboard').then(function (r) { return r.json(); }).then(function (doc) {
        var header = document.getElementById('header');
        header.appendChild(el('h1', 'title', doc.header.headline));
        header.appendChild(el('p', 'subtitle', doc.header.subtitle));
        var sections = document.getElementById('sections');
        doc.sections.forEach(function (s) {
          var div = el('div', 'story-section');
          div.id = s.id;
          div.appendChild(el('h2', null, s.heading));
          div.appendChild(el('p', null, s.narrative));
          sections.appendChild(div);
          if (s.chart.kind === 'table') {
            renderTable(div, s.chart);
          } else {
            var plot = el('div', 'graph');
            div.appendChild(plot);
            Plotly.newPlot(plot, s.chart.data, s.chart.layout, s.chart.config);
          }
        });
      });
    </script>
  </body>
</html>"#;
    Html(html.replace("__TITLE__", DASHBOARD_TITLE))
}

/// Create the HTTP router over the prepared state
pub fn create_server(state: Arc<AppState>, assets_dir: &Path) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET])
        .allow_headers(Any);

    Router::new()
        .route("/", get(index))
        .route("/health", get(health))
        .route("/api/dashboard", get(dashboard_json))
        .route("/api/tables", get(tables_json))
        .nest_service("/assets", ServeDir::new(assets_dir))
        .layer(Extension(state))
        .layer(ServiceBuilder::new().layer(cors))
}

/// Start the HTTP server on the given address
pub async fn start_server(
    state: Arc<AppState>,
    assets_dir: &Path,
    addr: SocketAddr,
) -> std::result::Result<(), Box<dyn std::error::Error>> {
    let app = create_server(state, assets_dir);

    info!("🚀 Dashboard running on http://{addr}");
    info!("💚 Health check: http://{addr}/health");

    Server::bind(&addr).serve(app.into_make_service()).await?;

    Ok(())
}
