use std::time::Instant;

use tracing::debug;

use crate::config::ViewConfig;
use crate::focus::FocusPath;
use crate::model::{NodeId, Tree};
use crate::throttle::Throttle;

/// Receives state changes. Only called when the value actually changed.
pub trait InteractionSink {
    fn on_path_change(&mut self, path: &FocusPath);
    fn on_hover_change(&mut self, node: Option<NodeId>);
}

/// Adapts a pair of closures into an [`InteractionSink`].
pub struct Callbacks<P, H> {
    pub on_path: P,
    pub on_hover: H,
}

impl<P, H> InteractionSink for Callbacks<P, H>
where
    P: FnMut(&FocusPath),
    H: FnMut(Option<NodeId>),
{
    fn on_path_change(&mut self, path: &FocusPath) {
        (self.on_path)(path)
    }

    fn on_hover_change(&mut self, node: Option<NodeId>) {
        (self.on_hover)(node)
    }
}

/// Sink for callers that only read state back from the controller.
impl InteractionSink for () {
    fn on_path_change(&mut self, _path: &FocusPath) {}
    fn on_hover_change(&mut self, _node: Option<NodeId>) {}
}

/// Owns the focus path and hover selection; everything else reads them.
#[derive(Debug, Clone)]
pub struct Controller {
    path: FocusPath,
    hover: Option<NodeId>,
    hover_throttle: Throttle<Option<NodeId>>,
    click_throttle: Throttle<FocusPath>,
}

impl Controller {
    pub fn new(config: &ViewConfig) -> Self {
        Self {
            path: FocusPath::root(),
            hover: None,
            hover_throttle: Throttle::new(config.hover_window()),
            click_throttle: Throttle::new(config.click_window()),
        }
    }

    pub fn path(&self) -> &FocusPath {
        &self.path
    }

    pub fn hover(&self) -> Option<NodeId> {
        self.hover
    }

    /// Pointer entered `node` (or left the graph, for `None`).
    pub fn on_hover(&mut self, node: Option<NodeId>, now: Instant) {
        self.hover_throttle.offer(node, now);
    }

    /// Zoom request for the node reached through `ancestry`.
    pub fn on_click_path(&mut self, ancestry: &FocusPath, id: &str, now: Instant) {
        self.click_throttle.offer(ancestry.child(id), now);
    }

    /// Zoom request for `node`; its ancestry is read from the tree. The
    /// root has no ancestry, so clicking it requests the whole-tree view.
    pub fn on_click(&mut self, tree: &Tree, node: NodeId, now: Instant) {
        self.click_throttle.offer(FocusPath::to_node(tree, node), now);
    }

    /// Earliest time at which [`Controller::tick`] has something to apply.
    pub fn next_deadline(&self) -> Option<Instant> {
        match (self.hover_throttle.deadline(), self.click_throttle.deadline()) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        }
    }

    /// Applies whatever the throttles released by `now`. Returns whether
    /// any state changed.
    pub fn tick(&mut self, now: Instant, sink: &mut impl InteractionSink) -> bool {
        let mut changed = false;
        if let Some(hover) = self.hover_throttle.poll(now) {
            changed |= self.apply_hover(hover, sink);
        }
        if let Some(path) = self.click_throttle.poll(now) {
            changed |= self.set_path(path, sink);
        }
        changed
    }

    /// Replaces the focus path immediately, e.g. from an outer "reset" control.
    pub fn set_path(&mut self, path: FocusPath, sink: &mut impl InteractionSink) -> bool {
        if path == self.path {
            return false;
        }
        debug!(from = %self.path, to = %path, "focus path changed");
        self.path = path;
        sink.on_path_change(&self.path);
        true
    }

    fn apply_hover(&mut self, hover: Option<NodeId>, sink: &mut impl InteractionSink) -> bool {
        if hover == self.hover {
            return false;
        }
        debug!(?hover, "hover changed");
        self.hover = hover;
        sink.on_hover_change(hover);
        true
    }

    /// Back to the initial state, as when a new tree arrives. Pending
    /// throttled events refer to the old tree and are dropped.
    pub fn reset(&mut self, sink: &mut impl InteractionSink) {
        self.hover_throttle.cancel();
        self.click_throttle.cancel();
        self.apply_hover(None, sink);
        self.set_path(FocusPath::root(), sink);
    }
}
