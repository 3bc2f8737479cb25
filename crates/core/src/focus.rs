use std::fmt;

use serde::{Deserialize, Serialize};

use crate::model::{FlameNode, NodeId, Tree};

/// Zoomed-in lineage: node identifiers from the root (exclusive) downward.
/// Empty means the whole tree is visible.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct FocusPath(Vec<String>);

impl FocusPath {
    pub fn root() -> Self {
        Self(Vec::new())
    }

    pub fn from_segments<I, S>(segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(segments.into_iter().map(Into::into).collect())
    }

    /// Path that zooms onto `id`: its ancestry plus its own identifier.
    pub fn to_node(tree: &Tree, id: NodeId) -> Self {
        Self(tree.lineage(id))
    }

    /// Parses `a;b;c`. Blank input is the root path.
    pub fn parse(s: &str) -> Self {
        if s.trim().is_empty() {
            return Self::root();
        }
        Self::from_segments(s.split(';'))
    }

    pub fn is_root(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn segments(&self) -> &[String] {
        &self.0
    }

    pub fn child(&self, id: impl Into<String>) -> Self {
        let mut next = self.0.clone();
        next.push(id.into());
        Self(next)
    }
}

impl fmt::Display for FocusPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0.join(";"))
    }
}

/// Siblings that take part in layout given the remaining path segments.
///
/// With segments left only the matching identifier survives and the tail
/// is handed down; with none left every sibling is visible. A segment that
/// matches nothing leaves the group empty.
pub fn visible_siblings<'t, 'p>(
    siblings: impl Iterator<Item = &'t FlameNode>,
    remaining: &'p [String],
) -> (Vec<&'t FlameNode>, &'p [String]) {
    match remaining.split_first() {
        None => (siblings.collect(), remaining),
        Some((head, tail)) => (siblings.filter(|n| n.full_name == *head).collect(), tail),
    }
}
