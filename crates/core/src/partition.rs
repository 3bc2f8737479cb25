//! Icicle layout: each row splits its parent's span among the visible
//! children in proportion to their cumulative weight.

use serde::Serialize;

use crate::config::ViewConfig;
use crate::focus::{visible_siblings, FocusPath};
use crate::model::{FlameNode, NodeId, Tree};

#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
}

impl Rect {
    pub fn contains(&self, x: f64, y: f64) -> bool {
        x >= self.x && x < self.x + self.w && y >= self.y && y < self.y + self.h
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct IcicleRect {
    pub id: NodeId,
    pub depth: usize,
    pub rect: Rect,
    /// Wide enough to carry a text label.
    pub show_label: bool,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct IcicleLayout {
    /// Pre-order, left to right within a row.
    pub rects: Vec<IcicleRect>,
    pub width: f64,
    pub height: f64,
}

impl IcicleLayout {
    pub fn is_empty(&self) -> bool {
        self.rects.is_empty()
    }

    pub fn hit_test(&self, x: f64, y: f64) -> Option<&IcicleRect> {
        self.rects.iter().find(|r| r.rect.contains(x, y))
    }

    pub fn rect_of(&self, id: NodeId) -> Option<&IcicleRect> {
        self.rects.iter().find(|r| r.id == id)
    }
}

/// Linear map from `[0, domain]` onto `[0, range]`. An empty or invalid
/// domain maps everything to 0.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LinearScale {
    domain: f64,
    range: f64,
}

impl LinearScale {
    pub fn new(domain: f64, range: f64) -> Self {
        Self { domain, range }
    }

    pub fn apply(&self, v: f64) -> f64 {
        if !(self.domain > 0.0 && self.domain.is_finite() && self.range.is_finite()) {
            return 0.0;
        }
        v * self.range / self.domain
    }
}

/// `(offset, width)` for each weight inside `width`. Offsets come from
/// integer prefix sums so rounding does not accumulate across siblings.
pub fn partition(weights: &[i64], width: f64) -> Vec<(f64, f64)> {
    let sum: i128 = weights.iter().map(|w| (*w).max(0) as i128).sum();
    let scale = LinearScale::new(sum as f64, width);
    let mut before: i128 = 0;
    weights
        .iter()
        .map(|w| {
            let w = (*w).max(0) as i128;
            let span = (scale.apply(before as f64), scale.apply(w as f64));
            before += w;
            span
        })
        .collect()
}

struct Placed<'p> {
    id: NodeId,
    x: f64,
    w: f64,
    depth: usize,
    remaining: &'p [String],
}

fn push_group<'p>(
    stack: &mut Vec<Placed<'p>>,
    group: &[&FlameNode],
    remaining: &'p [String],
    x: f64,
    w: f64,
    depth: usize,
    min_width: f64,
) {
    let weights: Vec<i64> = group.iter().map(|n| n.cumulative).collect();
    let spans = partition(&weights, w);
    // reversed so the leftmost sibling is popped first
    for (node, (offset, width)) in group.iter().zip(spans).rev() {
        if width <= min_width {
            continue;
        }
        stack.push(Placed {
            id: node.id,
            x: x + offset,
            w: width,
            depth,
            remaining,
        });
    }
}

/// Lays out the part of `tree` selected by `path` into `width` pixels.
///
/// The root always spans row 0. Below it, each level keeps only the child
/// named by the next path segment until the path runs out, after which
/// every child is laid out. A non-positive width yields an empty layout.
pub fn layout(tree: &Tree, path: &FocusPath, width: f64, config: &ViewConfig) -> IcicleLayout {
    let mut out = IcicleLayout {
        rects: Vec::new(),
        width,
        height: 0.0,
    };
    if !(width.is_finite() && width > 0.0) {
        return out;
    }
    let Some(root) = tree.root_node() else {
        return out;
    };

    let row = config.row_height;
    let mut stack: Vec<Placed<'_>> = Vec::new();
    push_group(&mut stack, &[root], path.segments(), 0.0, width, 0, config.min_visible_width);

    let mut max_depth = None;
    while let Some(p) = stack.pop() {
        let rect = Rect {
            x: p.x,
            y: p.depth as f64 * row,
            w: p.w,
            h: row,
        };
        out.rects.push(IcicleRect {
            id: p.id,
            depth: p.depth,
            rect,
            show_label: p.w > config.label_min_width,
        });
        max_depth = max_depth.max(Some(p.depth));

        let (visible, rest) = visible_siblings(tree.children(p.id), p.remaining);
        if visible.is_empty() {
            if let Some(segment) = p.remaining.first() {
                tracing::debug!(%segment, "focus segment not found, subtree left empty");
            }
            continue;
        }
        push_group(&mut stack, &visible, rest, p.x, p.w, p.depth + 1, config.min_visible_width);
    }

    if let Some(d) = max_depth {
        out.height = (d + 1) as f64 * row;
    }
    out
}
