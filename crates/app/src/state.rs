use crossbeam_channel::{unbounded, Receiver, Sender};
use icicle_core::search::find_frame;
use icicle_core::{FocusPath, IcicleView, Tree, ViewConfig};
use std::path::PathBuf;

pub enum LoadMsg {
    Done(Tree),
    Error(String),
}

pub struct AppState {
    pub source: Option<PathBuf>,
    pub load_rx: Option<Receiver<LoadMsg>>,
    pub view: IcicleView,
    pub search: String,
    pub error: Option<String>,
    /// Last pointer position fed to the view, in graph coordinates.
    pub pointer: Option<(f64, f64)>,
}

impl AppState {
    pub fn new(config: ViewConfig) -> Self {
        Self {
            source: None,
            load_rx: None,
            view: IcicleView::new(config),
            search: String::new(),
            error: None,
            pointer: None,
        }
    }

    pub fn start_load(&mut self, path: PathBuf) {
        self.source = Some(path.clone());
        self.error = None;
        self.pointer = None;
        self.view.set_tree(None, &mut ());

        let (tx, rx): (Sender<LoadMsg>, Receiver<LoadMsg>) = unbounded();
        self.load_rx = Some(rx);

        std::thread::spawn(move || {
            let msg = match icicle_core::import::load_json_file(&path) {
                Ok(tree) => LoadMsg::Done(tree),
                Err(e) => LoadMsg::Error(e.to_string()),
            };
            let _ = tx.send(msg);
        });
    }

    pub fn finish_load(&mut self, msg: LoadMsg) {
        match msg {
            LoadMsg::Done(tree) => self.view.set_tree(Some(tree), &mut ()),
            LoadMsg::Error(e) => {
                tracing::error!(error = %e, "failed to load profile");
                self.error = Some(e);
            }
        }
    }

    pub fn reset_zoom(&mut self) {
        self.view.set_path(FocusPath::root(), &mut ());
    }

    pub fn zoom_to_search(&mut self) {
        let Some(tree) = self.view.tree() else { return };
        match find_frame(tree, &self.search) {
            Some(id) => {
                let path = FocusPath::to_node(tree, id);
                self.view.set_path(path, &mut ());
            }
            None => self.error = Some(format!("no frame matches {:?}", self.search)),
        }
    }
}
