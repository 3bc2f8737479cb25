mod state;
mod ui;

use std::path::PathBuf;

use eframe::egui;
use icicle_core::ViewConfig;
use state::AppState;
use tracing_subscriber::EnvFilter;

struct MyApp {
    state: AppState,
}

impl MyApp {
    fn new(_cc: &eframe::CreationContext<'_>, config: ViewConfig, open: Option<PathBuf>) -> Self {
        let mut state = AppState::new(config);
        if let Some(path) = open {
            state.start_load(path);
        }
        Self { state }
    }
}

impl eframe::App for MyApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        ui::draw(&mut self.state, ctx);
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut args = std::env::args_os().skip(1).map(PathBuf::from);
    let open = args.next();
    let config = match args.next() {
        Some(path) => ViewConfig::from_json_file(&path)?,
        None => ViewConfig::default(),
    };

    let options = eframe::NativeOptions::default();
    eframe::run_native(
        "Icicle",
        options,
        Box::new(move |cc| Ok(Box::new(MyApp::new(cc, config, open)))),
    )
    .map_err(|e| anyhow::anyhow!("{e}"))
}
