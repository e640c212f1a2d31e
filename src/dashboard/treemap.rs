use crate::types::OwnershipRow;
use serde::Serialize;

/// One rectangle of the ownership treemap
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TreemapNode {
    pub id: String,
    pub label: String,
    /// Empty for a parent company
    pub parent: String,
    pub value: f64,
    /// `None` when the platforms underneath come from different countries
    pub origin: Option<String>,
}

/// Two-level hierarchy Parent_Company -> Platform.
///
/// A company's value is the sum of its platforms. A repeated
/// (company, platform) pair collapses into one leaf whose value is the sum.
/// Companies come first, then platforms, both in first-seen order.
///
/// Ids escape `\` and `/` inside names, so a leaf id always has exactly
/// one bare `/` and a company id has none.
pub fn build_treemap(rows: &[OwnershipRow]) -> Vec<TreemapNode> {
    let mut parents: Vec<TreemapNode> = Vec::new();
    let mut leaves: Vec<TreemapNode> = Vec::new();

    for row in rows {
        let parent_id = escape_id(&row.parent_company);
        let leaf_id = format!("{}/{}", parent_id, escape_id(&row.platform));
        match leaves.iter_mut().find(|leaf| leaf.id == leaf_id) {
            Some(leaf) => {
                leaf.value += row.ownership_percentage;
                merge_origin(&mut leaf.origin, &row.country_of_origin);
            }
            None => leaves.push(TreemapNode {
                id: leaf_id,
                label: row.platform.clone(),
                parent: parent_id.clone(),
                value: row.ownership_percentage,
                origin: Some(row.country_of_origin.clone()),
            }),
        }

        match parents.iter_mut().find(|p| p.id == parent_id) {
            Some(parent) => {
                parent.value += row.ownership_percentage;
                merge_origin(&mut parent.origin, &row.country_of_origin);
            }
            None => parents.push(TreemapNode {
                id: parent_id,
                label: row.parent_company.clone(),
                parent: String::new(),
                value: row.ownership_percentage,
                origin: Some(row.country_of_origin.clone()),
            }),
        }
    }

    parents.extend(leaves);
    parents
}

fn escape_id(name: &str) -> String {
    name.replace('\\', "\\\\").replace('/', "\\/")
}

fn merge_origin(current: &mut Option<String>, incoming: &str) {
    if current.as_deref() != Some(incoming) {
        *current = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn own(parent: &str, platform: &str, origin: &str, pct: f64) -> OwnershipRow {
        OwnershipRow {
            parent_company: parent.into(),
            platform: platform.into(),
            country_of_origin: origin.into(),
            ownership_percentage: pct,
        }
    }

    #[test]
    fn parent_value_is_sum_of_platforms() {
        let nodes = build_treemap(&[
            own("Meta", "Facebook", "USA", 100.0),
            own("Meta", "Instagram", "USA", 100.0),
            own("Tencent", "WeChat", "China", 90.0),
        ]);

        let ids: Vec<&str> = nodes.iter().map(|n| n.id.as_str()).collect();
        assert_eq!(
            ids,
            vec!["Meta", "Tencent", "Meta/Facebook", "Meta/Instagram", "Tencent/WeChat"]
        );
        assert_eq!(nodes[0].value, 200.0);
        assert_eq!(nodes[0].parent, "");
        assert_eq!(nodes[2].parent, "Meta");
        assert_eq!(nodes[2].label, "Facebook");

        for parent in nodes.iter().filter(|n| n.parent.is_empty()) {
            let children: f64 = nodes
                .iter()
                .filter(|n| n.parent == parent.id)
                .map(|n| n.value)
                .sum();
            assert_eq!(parent.value, children);
        }
    }

    #[test]
    fn repeated_pair_is_merged() {
        let nodes = build_treemap(&[
            own("Alphabet", "YouTube", "USA", 40.0),
            own("Alphabet", "YouTube", "USA", 60.0),
        ]);
        assert_eq!(nodes.len(), 2);
        assert_eq!(nodes[1].value, 100.0);
    }

    #[test]
    fn slash_in_names_keeps_ids_unique() {
        let nodes = build_treemap(&[
            own("A/B", "X", "USA", 10.0),
            own("A", "B", "USA", 20.0),
        ]);

        let ids: Vec<&str> = nodes.iter().map(|n| n.id.as_str()).collect();
        assert_eq!(ids, vec![r"A\/B", "A", r"A\/B/X", "A/B"]);
        assert_eq!(nodes[2].parent, nodes[0].id);
        assert_eq!(nodes[3].parent, nodes[1].id);
        assert_eq!(nodes[0].label, "A/B");

        let mut unique = ids.clone();
        unique.sort();
        unique.dedup();
        assert_eq!(unique.len(), ids.len());
    }

    #[test]
    fn mixed_origins_leave_parent_uncoloured() {
        let nodes = build_treemap(&[
            own("Naspers", "Tencent stake", "South Africa", 30.0),
            own("Naspers", "OLX", "Netherlands", 100.0),
        ]);
        assert_eq!(nodes[0].origin, None);
        assert_eq!(nodes[1].origin.as_deref(), Some("South Africa"));
    }
}
