//! User-facing strings derived from a node's weight and diff.

use crate::model::{FlameNode, NodeId, Tree};
use crate::units::Unit;

pub const ROOT_LABEL: &str = "root";

pub fn percentage_text(node: &FlameNode, total: i64) -> String {
    format!("{:.2}%", node.percentage(total))
}

/// `+5 (+50.00%)`, or `None` when there is nothing to report.
///
/// The ratio suffix is only present while the baseline value is positive.
pub fn diff_text(node: &FlameNode, unit: &Unit) -> Option<String> {
    if !node.has_diff() {
        return None;
    }
    let diff = node.diff_value();
    let sign = if diff > 0 { "+" } else { "" };
    let mut out = format!("{sign}{}", unit.format(diff));
    if node.previous_value() > 0 {
        out.push_str(&format!(" ({sign}{:.2}%)", node.diff_ratio() * 100.0));
    }
    Some(out)
}

/// `"<name> (<pct>%) <value>[ Diff: <diff>]"`.
pub fn node_numbers(name: &str, node: &FlameNode, total: i64, unit: &Unit) -> String {
    let mut out = format!(
        "{name} ({}) {}",
        percentage_text(node, total),
        unit.format(node.cumulative)
    );
    if let Some(d) = diff_text(node, unit) {
        out.push_str(" Diff: ");
        out.push_str(&d);
    }
    out
}

pub fn node_text(tree: &Tree, node: &FlameNode) -> String {
    node_numbers(display_label(tree, node), node, tree.total, &tree.unit)
}

/// Full name for the status line; the root has none of its own.
pub fn display_label<'t>(tree: &Tree, node: &'t FlameNode) -> &'t str {
    if tree.is_root(node.id) {
        ROOT_LABEL
    } else {
        node.display_name()
    }
}

/// Compact text painted inside a rectangle.
pub fn rect_label<'t>(tree: &Tree, node: &'t FlameNode) -> &'t str {
    if tree.is_root(node.id) {
        ROOT_LABEL
    } else {
        node.short_name()
    }
}

/// Summary for the status area: the hovered node if any, else the root.
pub fn describe(tree: &Tree, hover: Option<NodeId>) -> String {
    hover
        .and_then(|id| tree.get(id))
        .or_else(|| tree.root_node())
        .map(|n| node_text(tree, n))
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::tests::sample_tree;

    fn frame(cumulative: i64, diff: Option<i64>) -> FlameNode {
        let mut n = sample_tree().nodes[1].clone();
        n.full_name = "f".into();
        n.name = "f".into();
        n.cumulative = cumulative;
        n.diff = diff;
        n
    }

    #[test]
    fn diff_segment_is_omitted_without_change() {
        let unit = Unit::Count;
        assert_eq!(node_numbers("f", &frame(15, None), 100, &unit), "f (15.00%) 15");
        assert_eq!(node_numbers("f", &frame(15, Some(0)), 100, &unit), "f (15.00%) 15");
    }

    #[test]
    fn diff_with_ratio() {
        let unit = Unit::Count;
        assert_eq!(
            node_numbers("f", &frame(15, Some(5)), 100, &unit),
            "f (15.00%) 15 Diff: +5 (+50.00%)"
        );
        assert_eq!(diff_text(&frame(10, Some(-5)), &unit).as_deref(), Some("-5 (-33.33%)"));
    }

    #[test]
    fn ratio_is_dropped_for_non_positive_baseline() {
        let unit = Unit::Count;
        assert_eq!(diff_text(&frame(5, Some(5)), &unit).as_deref(), Some("+5"));
        assert_eq!(diff_text(&frame(5, Some(8)), &unit).as_deref(), Some("+8"));
    }

    #[test]
    fn percentage_of_empty_total_is_zero() {
        assert_eq!(percentage_text(&frame(10, None), 0), "0.00%");
        assert_eq!(percentage_text(&frame(10, None), -5), "0.00%");
    }

    #[test]
    fn bytes_unit_applies_to_value_and_diff() {
        let unit = Unit::Bytes;
        assert_eq!(
            node_numbers("alloc", &frame(3000, Some(1000)), 6000, &unit),
            "alloc (50.00%) 3.00 KB Diff: +1.00 KB (+50.00%)"
        );
    }

    #[test]
    fn root_is_labelled_root() {
        let tree = sample_tree();
        let root = tree.root_node().unwrap();
        assert_eq!(rect_label(&tree, root), ROOT_LABEL);
        assert_eq!(display_label(&tree, root), ROOT_LABEL);
        let a = &tree.nodes[1];
        assert_eq!(rect_label(&tree, a), "A");
    }

    #[test]
    fn describe_falls_back_to_root() {
        let tree = sample_tree();
        assert_eq!(describe(&tree, None), "root (100.00%) 100");
        let a2 = tree.nodes.iter().find(|n| n.full_name == "A2").unwrap().id;
        assert_eq!(describe(&tree, Some(a2)), "A2 (20.00%) 20 Diff: +5 (+33.33%)");
        // stale hover ids degrade to the root summary
        assert_eq!(describe(&tree, Some(NodeId(999))), "root (100.00%) 100");
    }
}
