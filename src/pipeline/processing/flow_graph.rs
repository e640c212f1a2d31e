use crate::types::{FlowLink, FlowRow};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Node list and annotated links for the cross-border flow diagram
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlowGraph {
    /// Distinct country names; a node's id is its position here
    pub nodes: Vec<String>,
    pub index: BTreeMap<String, usize>,
    pub links: Vec<FlowLink>,
}

impl FlowGraph {
    pub fn node_name(&self, idx: usize) -> Option<&str> {
        self.nodes.get(idx).map(String::as_str)
    }
}

/// Human readable edge label, `"<Platform> → <Company>"`
pub fn edge_label(platform: &str, company: &str) -> String {
    format!("{platform} → {company}")
}

/// Assign ids to every origin/destination country in first-seen order
/// (row by row, origin before destination) and annotate each row with them.
pub fn build_flow_graph_index(rows: &[FlowRow]) -> FlowGraph {
    let mut nodes: Vec<String> = Vec::new();
    let mut index: BTreeMap<String, usize> = BTreeMap::new();

    let mut intern = |name: &str| -> usize {
        if let Some(&idx) = index.get(name) {
            return idx;
        }
        let idx = nodes.len();
        nodes.push(name.to_string());
        index.insert(name.to_string(), idx);
        idx
    };

    let links = rows
        .iter()
        .map(|row| {
            let source_idx = intern(&row.origin_country);
            let target_idx = intern(&row.destination_country);
            FlowLink {
                row: row.clone(),
                source_idx,
                target_idx,
                label: edge_label(&row.platform, &row.company),
            }
        })
        .collect();

    FlowGraph {
        nodes,
        index,
        links,
    }
}
