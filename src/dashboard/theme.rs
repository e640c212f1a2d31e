//! Styling shared by every chart on the page.

use serde_json::{json, Value};

pub const TRANSPARENT: &str = "rgba(0,0,0,0)";
pub const FONT_COLOR: &str = "white";
pub const FONT_FAMILY: &str = "Segoe UI";
pub const ACCENT_PINK: &str = "#ff6ec4";
pub const SANKEY_NODE_COLOR: &str = "#30cfd0";
pub const MIXED_ORIGIN_COLOR: &str = "#7f7f7f";
pub const GRID_COLOR: &str = "rgba(255,255,255,0.1)";
pub const LEGEND_BORDER: &str = "rgba(255,255,255,0.2)";
pub const ATTENTION_COLOR_SCALE: &str = "Plasma";
pub const DONUT_HOLE: f64 = 0.45;

pub const TABLE_CELL_BACKGROUND: &str = "#1f1f2e";
pub const TABLE_CELL_COLOR: &str = "#fff";
pub const TABLE_HEADER_BACKGROUND: &str = "#333";
pub const TABLE_HEADER_COLOR: &str = "#f0f0f0";

/// Discrete palette for categorical colouring (treemap origins, bar series)
pub const CATEGORY_PALETTE: [&str; 10] = [
    "#636efa", "#EF553B", "#00cc96", "#ab63fa", "#FFA15A", "#19d3f3", "#FF6692", "#B6E880",
    "#FF97FF", "#FECB52",
];

pub fn category_color(position: usize) -> &'static str {
    CATEGORY_PALETTE[position % CATEGORY_PALETTE.len()]
}

/// Transparent paper with white text
pub fn base_layout(title: &str) -> Value {
    json!({
        "title": { "text": title },
        "paper_bgcolor": TRANSPARENT,
        "font": { "color": FONT_COLOR },
    })
}

/// The fuller treatment used by the local alternatives bar chart
pub fn styled_bar_layout(title: &str) -> Value {
    json!({
        "title": {
            "text": title,
            "font": { "size": 18, "color": ACCENT_PINK, "family": FONT_FAMILY },
        },
        "paper_bgcolor": TRANSPARENT,
        "plot_bgcolor": TRANSPARENT,
        "font": { "color": FONT_COLOR, "family": FONT_FAMILY },
        "legend": {
            "font": { "color": FONT_COLOR },
            "bgcolor": TRANSPARENT,
            "bordercolor": LEGEND_BORDER,
        },
        "xaxis": { "color": FONT_COLOR, "gridcolor": GRID_COLOR },
        "yaxis": { "color": FONT_COLOR, "gridcolor": GRID_COLOR },
        "barmode": "group",
    })
}

/// Charts are static; hide the mode bar
pub fn chart_config() -> Value {
    json!({ "displayModeBar": false })
}

pub fn table_style() -> Value {
    json!({
        "style_table": { "overflowX": "auto" },
        "style_cell": {
            "textAlign": "center",
            "color": TABLE_CELL_COLOR,
            "backgroundColor": TABLE_CELL_BACKGROUND,
        },
        "style_header": {
            "backgroundColor": TABLE_HEADER_BACKGROUND,
            "fontWeight": "bold",
            "color": TABLE_HEADER_COLOR,
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palette_wraps_around() {
        assert_eq!(category_color(0), category_color(CATEGORY_PALETTE.len()));
        assert_ne!(category_color(0), category_color(1));
    }
}
