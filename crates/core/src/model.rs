use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::units::Unit;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NodeId(pub u32);

impl NodeId {
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// Decoded flamegraph document, as handed over by whatever produced it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Flamegraph {
    pub root: FlamegraphNode,
    pub total: i64,
    #[serde(default)]
    pub unit: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlamegraphNode {
    #[serde(default)]
    pub full_name: String,
    #[serde(default)]
    pub name: String,
    pub cumulative: i64,
    #[serde(default)]
    pub diff: Option<i64>,
    #[serde(default, alias = "childrenList")]
    pub children: Vec<FlamegraphNode>,
}

impl FlamegraphNode {
    pub fn new(full_name: impl Into<String>, cumulative: i64) -> Self {
        let full_name = full_name.into();
        Self {
            name: full_name.clone(),
            full_name,
            cumulative,
            diff: None,
            children: Vec::new(),
        }
    }

    pub fn with_diff(mut self, diff: i64) -> Self {
        self.diff = Some(diff);
        self
    }

    pub fn with_children(mut self, children: Vec<FlamegraphNode>) -> Self {
        self.children = children;
        self
    }
}

/// One stack frame in the arena. Children keep their input order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FlameNode {
    pub id: NodeId,
    pub parent: Option<NodeId>,
    pub full_name: String,
    pub name: String,
    pub cumulative: i64,
    pub diff: Option<i64>,
    pub children: Vec<NodeId>,
}

impl FlameNode {
    /// Label used inside rectangles: the first whitespace-delimited token.
    pub fn short_name(&self) -> &str {
        let label = if self.name.is_empty() {
            &self.full_name
        } else {
            &self.name
        };
        label.split_whitespace().next().unwrap_or("")
    }

    pub fn display_name(&self) -> &str {
        if self.name.is_empty() {
            &self.full_name
        } else {
            &self.name
        }
    }

    pub fn diff_value(&self) -> i64 {
        self.diff.unwrap_or(0)
    }

    /// Weight in the baseline profile, `cumulative - diff`.
    pub fn previous_value(&self) -> i64 {
        self.cumulative.saturating_sub(self.diff_value())
    }

    pub fn percentage(&self, total: i64) -> f64 {
        if total <= 0 {
            return 0.0;
        }
        self.cumulative as f64 * 100.0 / total as f64
    }

    /// `diff / previous`, or 0 when the baseline is not positive.
    pub fn diff_ratio(&self) -> f64 {
        let previous = self.previous_value();
        if previous > 0 {
            self.diff_value() as f64 / previous as f64
        } else {
            0.0
        }
    }

    pub fn has_diff(&self) -> bool {
        self.diff_value() != 0
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Tree {
    pub root: NodeId,
    pub nodes: Vec<FlameNode>,
    pub total: i64,
    pub unit: Unit,
}

impl Tree {
    /// Flattens a decoded document into the arena, depth first so that
    /// every node's id is smaller than its descendants'.
    pub fn from_graph(graph: &Flamegraph) -> Result<Tree, Error> {
        let mut nodes: Vec<FlameNode> = Vec::new();
        let mut pending: Vec<(&FlamegraphNode, Option<NodeId>)> = vec![(&graph.root, None)];

        while let Some((data, parent)) = pending.pop() {
            if data.cumulative < 0 {
                return Err(Error::NegativeWeight {
                    name: data.full_name.clone(),
                    cumulative: data.cumulative,
                });
            }
            let id = NodeId(u32::try_from(nodes.len()).map_err(|_| Error::TooManyNodes)?);
            nodes.push(FlameNode {
                id,
                parent,
                full_name: data.full_name.clone(),
                name: data.name.clone(),
                cumulative: data.cumulative,
                diff: data.diff,
                children: Vec::with_capacity(data.children.len()),
            });
            if let Some(pid) = parent {
                nodes[pid.index()].children.push(id);
            }
            // reversed so the first child is popped (and linked) first
            for child in data.children.iter().rev() {
                pending.push((child, Some(id)));
            }
        }

        Ok(Tree {
            root: NodeId(0),
            nodes,
            total: graph.total,
            unit: Unit::parse(&graph.unit),
        })
    }

    pub fn get(&self, id: NodeId) -> Option<&FlameNode> {
        self.nodes.get(id.index())
    }

    pub fn root_node(&self) -> Option<&FlameNode> {
        self.get(self.root)
    }

    pub fn is_root(&self, id: NodeId) -> bool {
        id == self.root
    }

    pub fn has_samples(&self) -> bool {
        self.total > 0 && !self.nodes.is_empty()
    }

    pub fn children(&self, id: NodeId) -> impl Iterator<Item = &FlameNode> + '_ {
        self.get(id)
            .map(|n| n.children.as_slice())
            .unwrap_or(&[])
            .iter()
            .filter_map(move |c| self.get(*c))
    }

    /// Identifiers from the root (exclusive) down to `id` (inclusive).
    pub fn lineage(&self, id: NodeId) -> Vec<String> {
        let mut out = Vec::new();
        let mut cur = self.get(id);
        while let Some(node) = cur {
            let Some(parent) = node.parent else { break };
            out.push(node.full_name.clone());
            cur = self.get(parent);
        }
        out.reverse();
        out
    }

    /// Number of rows below the root in the deepest branch.
    pub fn max_depth(&self) -> usize {
        let mut depths = vec![0usize; self.nodes.len()];
        let mut max = 0;
        // parents always precede their children in the arena
        for node in &self.nodes {
            if let Some(p) = node.parent {
                let d = depths[p.index()] + 1;
                depths[node.id.index()] = d;
                max = max.max(d);
            }
        }
        max
    }
}
