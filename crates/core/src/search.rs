use fuzzy_matcher::skim::SkimMatcherV2;
use fuzzy_matcher::FuzzyMatcher;

use crate::model::{NodeId, Tree};

/// Best fuzzy match for `query` among non-root frames. Equal scores go to
/// the heavier frame, then to the one found first.
pub fn find_frame(tree: &Tree, query: &str) -> Option<NodeId> {
    if query.trim().is_empty() {
        return None;
    }
    let m = SkimMatcherV2::default();
    let mut best: Option<(i64, i64, NodeId)> = None;
    for node in tree.nodes.iter().filter(|n| !tree.is_root(n.id)) {
        let Some(score) = m.fuzzy_match(&node.full_name, query) else {
            continue;
        };
        let better = match best {
            None => true,
            Some((s, w, _)) => (score, node.cumulative) > (s, w),
        };
        if better {
            best = Some((score, node.cumulative, node.id));
        }
    }
    best.map(|(_, _, id)| id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::tests::sample_tree;

    #[test]
    fn exact_name_wins() {
        let tree = sample_tree();
        let id = find_frame(&tree, "A2").unwrap();
        assert_eq!(tree.get(id).unwrap().full_name, "A2");
    }

    #[test]
    fn ties_prefer_heavier_frames() {
        let tree = sample_tree();
        // "A", "A1" and "A2" all contain the query
        let id = find_frame(&tree, "a").unwrap();
        assert_eq!(tree.get(id).unwrap().full_name, "A");
    }

    #[test]
    fn no_match() {
        let tree = sample_tree();
        assert_eq!(find_frame(&tree, "zzz"), None);
        assert_eq!(find_frame(&tree, "  "), None);
    }
}
