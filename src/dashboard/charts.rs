//! One binding per chart: prepared rows turned into traces plus layout.

use super::theme::{self, *};
use super::treemap::build_treemap;
use super::{ChartBinding, ChartKind};
use crate::constants::ATTENTION_INDEX;
use crate::pipeline::processing::FlowGraph;
use crate::table::Table;
use crate::types::{AttentionRow, DependencyRow, LocalAppRow, OwnershipRow};
use serde_json::{json, Value};

pub fn youth_dependency_donut(rows: &[DependencyRow]) -> ChartBinding {
    let title = "Youth Dependency (%)";
    let labels: Vec<&str> = rows.iter().map(|r| r.country.as_str()).collect();
    let values: Vec<f64> = rows.iter().map(|r| r.youth_dependency_index_percent).collect();

    ChartBinding::plot(
        ChartKind::Pie,
        title,
        vec![json!({
            "type": "pie",
            "labels": labels,
            "values": values,
            "hole": DONUT_HOLE,
        })],
        base_layout(title),
    )
}

pub fn ownership_treemap(rows: &[OwnershipRow]) -> ChartBinding {
    let title = "Platform Ownership Map";
    let nodes = build_treemap(rows);

    // Colour by country of origin in first-seen order
    let mut origins: Vec<&str> = Vec::new();
    for row in rows {
        if !origins.contains(&row.country_of_origin.as_str()) {
            origins.push(&row.country_of_origin);
        }
    }
    let colors: Vec<&str> = nodes
        .iter()
        .map(|node| match &node.origin {
            Some(origin) => origins
                .iter()
                .position(|o| *o == origin.as_str())
                .map(category_color)
                .unwrap_or(MIXED_ORIGIN_COLOR),
            None => MIXED_ORIGIN_COLOR,
        })
        .collect();

    ChartBinding::plot(
        ChartKind::Treemap,
        title,
        vec![json!({
            "type": "treemap",
            "branchvalues": "total",
            "ids": nodes.iter().map(|n| n.id.as_str()).collect::<Vec<_>>(),
            "labels": nodes.iter().map(|n| n.label.as_str()).collect::<Vec<_>>(),
            "parents": nodes.iter().map(|n| n.parent.as_str()).collect::<Vec<_>>(),
            "values": nodes.iter().map(|n| n.value).collect::<Vec<_>>(),
            "customdata": nodes.iter().map(|n| n.origin.as_deref().unwrap_or("(?)")).collect::<Vec<_>>(),
            "marker": { "colors": colors },
            "hovertemplate": "%{label}<br>Ownership: %{value}%<br>Origin: %{customdata}<extra></extra>",
        })],
        base_layout(title),
    )
}

pub fn data_flow_sankey(flows: &FlowGraph) -> ChartBinding {
    let title = "Data Flow Across Borders";
    let mut layout = base_layout(title);
    layout["font"]["size"] = json!(10);

    ChartBinding::plot(
        ChartKind::Sankey,
        title,
        vec![json!({
            "type": "sankey",
            "node": {
                "pad": 15,
                "thickness": 20,
                "label": flows.nodes,
                "color": SANKEY_NODE_COLOR,
            },
            "link": {
                "source": flows.links.iter().map(|l| l.source_idx).collect::<Vec<_>>(),
                "target": flows.links.iter().map(|l| l.target_idx).collect::<Vec<_>>(),
                "value": vec![1; flows.links.len()],
                "label": flows.links.iter().map(|l| l.label.as_str()).collect::<Vec<_>>(),
            },
        })],
        layout,
    )
}

/// Grouped bars, one series per country in first-seen order
pub fn local_alternatives_bar(rows: &[LocalAppRow]) -> ChartBinding {
    let title = "Local Alternatives Usage";
    let mut countries: Vec<&str> = Vec::new();
    for row in rows {
        if !countries.contains(&row.country.as_str()) {
            countries.push(&row.country);
        }
    }

    let traces = countries
        .iter()
        .enumerate()
        .map(|(position, country)| {
            let series: Vec<&LocalAppRow> = rows.iter().filter(|r| r.country == *country).collect();
            json!({
                "type": "bar",
                "name": country,
                "x": series.iter().map(|r| r.app_name.as_str()).collect::<Vec<_>>(),
                "y": series.iter().map(|r| r.youth_adoption_percent).collect::<Vec<_>>(),
                "marker": { "color": category_color(position) },
            })
        })
        .collect();

    ChartBinding::plot(ChartKind::Bar, title, traces, styled_bar_layout(title))
}

/// The laws table verbatim, columns in file order
pub fn policy_table(laws: &Table) -> ChartBinding {
    let columns: Vec<Value> = laws
        .columns()
        .iter()
        .map(|c| json!({ "name": c, "id": c }))
        .collect();

    ChartBinding {
        kind: ChartKind::Table,
        title: "Policy Comparison".to_string(),
        data: json!({
            "columns": columns,
            "records": laws.to_records(),
        }),
        layout: theme::table_style(),
        config: Value::Null,
    }
}

pub fn attention_bar(rows: &[AttentionRow]) -> ChartBinding {
    let title = "Attention Exploitation Index";
    let values: Vec<f64> = rows.iter().map(|r| r.attention_index).collect();

    ChartBinding::plot(
        ChartKind::Bar,
        title,
        vec![json!({
            "type": "bar",
            "x": rows.iter().map(|r| r.country.as_str()).collect::<Vec<_>>(),
            "y": values,
            "marker": {
                "color": values,
                "colorscale": ATTENTION_COLOR_SCALE,
                "showscale": true,
                "colorbar": { "title": { "text": ATTENTION_INDEX } },
            },
        })],
        base_layout(title),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::processing::build_flow_graph_index;
    use crate::types::{FlowRow, SourceId};

    #[test]
    fn donut_keeps_row_order() {
        let binding = youth_dependency_donut(&[
            DependencyRow {
                country: "India".into(),
                youth_dependency_index_percent: 78.0,
            },
            DependencyRow {
                country: "Nigeria".into(),
                youth_dependency_index_percent: 64.5,
            },
        ]);
        assert_eq!(binding.kind, ChartKind::Pie);
        assert_eq!(binding.data[0]["labels"], json!(["India", "Nigeria"]));
        assert_eq!(binding.data[0]["values"], json!([78.0, 64.5]));
        assert_eq!(binding.data[0]["hole"], json!(0.45));
        assert_eq!(binding.config["displayModeBar"], json!(false));
    }

    #[test]
    fn sankey_has_one_unit_link_per_row() {
        let flows = build_flow_graph_index(&[
            FlowRow {
                origin_country: "India".into(),
                destination_country: "USA".into(),
                platform: "Instagram".into(),
                company: "Meta".into(),
            },
            FlowRow {
                origin_country: "Kenya".into(),
                destination_country: "USA".into(),
                platform: "WhatsApp".into(),
                company: "Meta".into(),
            },
        ]);
        let binding = data_flow_sankey(&flows);
        let trace = &binding.data[0];
        assert_eq!(trace["node"]["label"], json!(["India", "USA", "Kenya"]));
        assert_eq!(trace["node"]["color"], json!("#30cfd0"));
        assert_eq!(trace["link"]["source"], json!([0, 2]));
        assert_eq!(trace["link"]["target"], json!([1, 1]));
        assert_eq!(trace["link"]["value"], json!([1, 1]));
        assert_eq!(trace["link"]["label"][1], json!("WhatsApp → Meta"));
        assert_eq!(binding.layout["font"]["size"], json!(10));
    }

    #[test]
    fn local_bars_group_by_country() {
        let rows = vec![
            LocalAppRow {
                app_name: "Koo".into(),
                country: "India".into(),
                youth_adoption_percent: 12.0,
            },
            LocalAppRow {
                app_name: "Moj".into(),
                country: "India".into(),
                youth_adoption_percent: 20.0,
            },
            LocalAppRow {
                app_name: "VK".into(),
                country: "Russia".into(),
                youth_adoption_percent: 70.0,
            },
        ];
        let binding = local_alternatives_bar(&rows);
        assert_eq!(binding.data.as_array().map(Vec::len), Some(2));
        assert_eq!(binding.data[0]["name"], json!("India"));
        assert_eq!(binding.data[0]["x"], json!(["Koo", "Moj"]));
        assert_eq!(binding.data[1]["y"], json!([70.0]));
        assert_eq!(binding.layout["title"]["font"]["color"], json!("#ff6ec4"));
    }

    #[test]
    fn policy_table_keeps_file_column_order() {
        let laws = Table::new(
            SourceId::DigitalLawsScore,
            vec!["Country".into(), "Privacy_Law".into(), "Score".into()],
            vec![vec!["India".into(), "DPDP 2023".into(), "6".into()]],
        );
        let binding = policy_table(&laws);
        assert_eq!(binding.kind, ChartKind::Table);
        assert_eq!(
            binding.data["columns"],
            json!([
                { "name": "Country", "id": "Country" },
                { "name": "Privacy_Law", "id": "Privacy_Law" },
                { "name": "Score", "id": "Score" },
            ])
        );
        assert_eq!(binding.data["records"][0]["Score"], json!(6));
    }

    #[test]
    fn attention_colours_by_index() {
        let binding = attention_bar(&[AttentionRow {
            country: "X".into(),
            avg_screen_time_min: 10.0,
            ad_algo_score: 2.0,
            attention_index: 20.0,
        }]);
        assert_eq!(binding.data[0]["y"], json!([20.0]));
        assert_eq!(binding.data[0]["marker"]["color"], json!([20.0]));
        assert_eq!(binding.data[0]["marker"]["colorscale"], json!("Plasma"));
    }
}
