//! Chart bindings and page layout for the story dashboard
//!
//! Turns [`PreparedData`] into a JSON document: page header plus six story
//! sections, each with a heading, a short narrative and exactly one chart or
//! table. A client-side renderer draws the charts from the traces and layout
//! given here; nothing in this module renders HTML.

pub mod charts;
pub mod theme;
pub mod treemap;

use crate::pipeline::PreparedData;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

pub const DASHBOARD_TITLE: &str = "Digital Colonization Narrative";
pub const HEADLINE: &str = "📱 Digital Colonization";
pub const SUBTITLE: &str = "Uncovering the Global Grip Over Your Digital World";

/// The chart kinds the renderer knows how to draw
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    Pie,
    Treemap,
    Sankey,
    Bar,
    Table,
}

/// A ready-made dataset plus everything needed to draw it
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartBinding {
    pub kind: ChartKind,
    pub title: String,
    /// Trace list for plots; `{columns, records}` for tables
    pub data: Value,
    pub layout: Value,
    pub config: Value,
}

impl ChartBinding {
    fn plot(kind: ChartKind, title: &str, traces: Vec<Value>, layout: Value) -> Self {
        Self {
            kind,
            title: title.to_string(),
            data: Value::Array(traces),
            layout,
            config: theme::chart_config(),
        }
    }
}

/// One story section of the page
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Section {
    pub id: String,
    pub heading: String,
    pub narrative: String,
    pub chart: ChartBinding,
}

impl Section {
    fn new(id: &str, heading: &str, narrative: &str, chart: ChartBinding) -> Self {
        Self {
            id: id.to_string(),
            heading: heading.to_string(),
            narrative: narrative.to_string(),
            chart,
        }
    }
}

/// Dashboard builder for the single story page
pub struct DashboardBuilder {
    title: String,
    sections: Vec<Section>,
    fingerprint: Option<String>,
}

impl DashboardBuilder {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            sections: Vec::new(),
            fingerprint: None,
        }
    }

    pub fn add_section(mut self, section: Section) -> Self {
        self.sections.push(section);
        self
    }

    /// Record which prepared data the page was built from
    pub fn with_fingerprint(mut self, fingerprint: impl Into<String>) -> Self {
        self.fingerprint = Some(fingerprint.into());
        self
    }

    /// The six story sections, in page order
    pub fn from_prepared(data: &PreparedData) -> Self {
        Self::new(DASHBOARD_TITLE)
            .add_section(Section::new(
                "youth-dependency",
                "🌍 Youth Dependency on Foreign Tech",
                "The future of any nation lies in its youth. Yet today, they rely heavily on platforms not made or governed by their own country.",
                charts::youth_dependency_donut(&data.dependency),
            ))
            .add_section(Section::new(
                "platform-ownership",
                "🏢 Who Really Owns Your Digital Space?",
                "Tech platforms might feel local, but their ownership is concentrated in the hands of a few global corporations.",
                charts::ownership_treemap(&data.ownership),
            ))
            .add_section(Section::new(
                "data-flows",
                "📡 Cross-Border Data Flows",
                "Every click, every swipe, your data travels far. This visual shows where your information flows across borders.",
                charts::data_flow_sankey(&data.flows),
            ))
            .add_section(Section::new(
                "local-alternatives",
                "📲 Rise of Local Alternatives",
                "Despite the dominance of foreign apps, countries are building their own platforms. But are youth embracing them?",
                charts::local_alternatives_bar(&data.local_apps),
            ))
            .add_section(Section::new(
                "digital-laws",
                "🛡️ Are We Protected Enough?",
                "How do digital laws across nations compare? Which countries offer better protection against tech overreach?",
                charts::policy_table(&data.laws),
            ))
            .add_section(Section::new(
                "attention",
                "💥 Exploiting Attention in the Algorithm Age",
                "Platforms thrive on your attention. The more you stay, the more they profit. Here's how deeply different nations are being pulled into the algorithm trap.",
                charts::attention_bar(&data.attention),
            ))
    }

    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    /// Build the complete dashboard document
    pub fn build(&self) -> Value {
        json!({
            "title": self.title,
            "header": {
                "headline": HEADLINE,
                "subtitle": SUBTITLE,
            },
            "generated_at": Utc::now().to_rfc3339(),
            "data_fingerprint": self.fingerprint,
            "sections": self.sections,
        })
    }
}
