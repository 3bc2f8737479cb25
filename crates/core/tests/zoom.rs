use std::time::{Duration, Instant};

use icicle_core::{
    layout, Flamegraph, FlamegraphNode, FocusPath, Frame, IcicleView, InteractionSink, NodeId,
    Tree, ViewConfig,
};

fn two_children() -> Tree {
    let graph = Flamegraph {
        root: FlamegraphNode::new("", 100).with_children(vec![
            FlamegraphNode::new("A", 70).with_children(vec![
                FlamegraphNode::new("A1", 50)
                    .with_children(vec![FlamegraphNode::new("A1a", 50)]),
                FlamegraphNode::new("A2", 20),
            ]),
            FlamegraphNode::new("B", 30).with_children(vec![FlamegraphNode::new("B1", 30)]),
        ]),
        total: 100,
        unit: "samples".into(),
    };
    Tree::from_graph(&graph).unwrap()
}

fn rows(tree: &Tree, view: &mut IcicleView) -> Vec<(usize, String, f64, f64)> {
    let Frame::Graph(l) = view.frame() else {
        panic!("expected a graph");
    };
    l.rects
        .iter()
        .map(|r| {
            let n = tree.get(r.id).unwrap();
            (r.depth, n.full_name.clone(), r.rect.x, r.rect.w)
        })
        .collect()
}

#[derive(Default)]
struct Log(Vec<String>);

impl InteractionSink for Log {
    fn on_path_change(&mut self, path: &FocusPath) {
        self.0.push(format!("path {path}"));
    }

    fn on_hover_change(&mut self, node: Option<NodeId>) {
        self.0.push(format!("hover {:?}", node.map(|n| n.0)));
    }
}

#[test]
fn click_zooms_and_empty_path_restores() {
    let tree = two_children();
    let window = Duration::from_millis(100);
    let t0 = Instant::now();
    let mut log = Log::default();
    let mut view = IcicleView::new(ViewConfig::default());
    view.set_tree(Some(tree.clone()), &mut log);
    view.set_width(200.0);

    let full = rows(&tree, &mut view);
    assert_eq!(full[1], (1, "A".to_string(), 0.0, 140.0));
    let b = full.iter().find(|r| r.1 == "B").unwrap();
    assert_eq!((b.2, b.3), (140.0, 60.0));

    // click A1 (x inside A1 on row 2)
    view.pointer_clicked(20.0, 45.0, t0);
    view.tick(t0 + window, &mut log);
    assert_eq!(view.path(), &FocusPath::from_segments(["A", "A1"]));

    let zoomed = rows(&tree, &mut view);
    let names: Vec<_> = zoomed.iter().map(|r| r.1.as_str()).collect();
    // lineage along the path, then everything below A1 unfiltered
    assert_eq!(names, ["", "A", "A1", "A1a"]);
    assert!(zoomed.iter().all(|r| r.3 == 200.0));

    view.set_path(FocusPath::root(), &mut log);
    assert_eq!(rows(&tree, &mut view), full);
    assert_eq!(log.0, ["path A;A1", "path "]);
}

#[test]
fn tree_replacement_with_stale_path_shows_prefix_only() {
    let tree = two_children();
    let config = ViewConfig::default();
    let path = FocusPath::from_segments(["B", "A1"]);
    let l = layout(&tree, &path, 200.0, &config);
    assert_eq!(l.rects.len(), 2);
    assert_eq!(l.height, 2.0 * config.row_height);
}
