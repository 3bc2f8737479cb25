use std::time::Instant;

use tracing::info;

use crate::config::ViewConfig;
use crate::controller::{Controller, InteractionSink};
use crate::focus::FocusPath;
use crate::metrics;
use crate::model::{NodeId, Tree};
use crate::partition::{layout, IcicleLayout};

pub const NO_DATA: &str = "no data...";
pub const NO_SAMPLES: &str = "Profile has no samples";

/// What the rendering surface should show right now.
#[derive(Debug, Clone, PartialEq)]
pub enum Frame {
    NoData(&'static str),
    /// No positive width has been measured yet.
    Unmeasured,
    Graph(IcicleLayout),
}

/// One icicle graph as embedded in an application: the current tree, the
/// measured width and the interaction state, with layout recomputed on
/// demand from those inputs.
#[derive(Debug, Clone)]
pub struct IcicleView {
    config: ViewConfig,
    tree: Option<Tree>,
    width: f64,
    controller: Controller,
    last_layout: IcicleLayout,
}

impl IcicleView {
    pub fn new(config: ViewConfig) -> Self {
        Self {
            controller: Controller::new(&config),
            config,
            tree: None,
            width: 0.0,
            last_layout: IcicleLayout::default(),
        }
    }

    pub fn config(&self) -> &ViewConfig {
        &self.config
    }

    pub fn tree(&self) -> Option<&Tree> {
        self.tree.as_ref()
    }

    pub fn path(&self) -> &FocusPath {
        self.controller.path()
    }

    pub fn hover(&self) -> Option<NodeId> {
        self.controller.hover()
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    /// Swaps in a new tree; hover and focus start over.
    pub fn set_tree(&mut self, tree: Option<Tree>, sink: &mut impl InteractionSink) {
        if let Some(t) = &tree {
            info!(nodes = t.nodes.len(), total = t.total, "tree loaded");
        }
        self.tree = tree;
        self.last_layout = IcicleLayout::default();
        self.controller.reset(sink);
    }

    pub fn set_width(&mut self, width: f64) {
        self.width = width;
    }

    pub fn set_path(&mut self, path: FocusPath, sink: &mut impl InteractionSink) -> bool {
        self.controller.set_path(path, sink)
    }

    /// Lays out the current inputs and remembers the result for hit testing.
    pub fn frame(&mut self) -> Frame {
        let tree = match &self.tree {
            None => return Frame::NoData(NO_DATA),
            Some(t) if !t.has_samples() => return Frame::NoData(NO_SAMPLES),
            Some(t) => t,
        };
        if !(self.width.is_finite() && self.width > 0.0) {
            return Frame::Unmeasured;
        }
        self.last_layout = layout(tree, self.controller.path(), self.width, &self.config);
        Frame::Graph(self.last_layout.clone())
    }

    pub fn last_layout(&self) -> &IcicleLayout {
        &self.last_layout
    }

    /// Status line for the hovered node, or the root when nothing is hovered.
    pub fn status_text(&self) -> String {
        match &self.tree {
            None => NO_DATA.to_string(),
            Some(t) if !t.has_samples() => NO_SAMPLES.to_string(),
            Some(t) => metrics::describe(t, self.controller.hover()),
        }
    }

    pub fn pointer_moved(&mut self, x: f64, y: f64, now: Instant) {
        let hit = self.last_layout.hit_test(x, y).map(|r| r.id);
        self.controller.on_hover(hit, now);
    }

    pub fn pointer_left(&mut self, now: Instant) {
        self.controller.on_hover(None, now);
    }

    pub fn pointer_clicked(&mut self, x: f64, y: f64, now: Instant) {
        let (Some(tree), Some(hit)) = (&self.tree, self.last_layout.hit_test(x, y)) else {
            return;
        };
        self.controller.on_click(tree, hit.id, now);
    }

    pub fn next_deadline(&self) -> Option<Instant> {
        self.controller.next_deadline()
    }

    pub fn tick(&mut self, now: Instant, sink: &mut impl InteractionSink) -> bool {
        self.controller.tick(now, sink)
    }
}
