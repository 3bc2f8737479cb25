use anyhow::Context;
use clap::Parser;
use icicle_core::search::find_frame;
use icicle_core::{FocusPath, Frame, IcicleView, ViewConfig};
use std::path::PathBuf;
use std::time::Instant;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "icicle-cli", about = "Icicle graph layout for a decoded profile")]
struct Args {
    /// Flamegraph document (JSON)
    graph: PathBuf,
    /// Available width in pixels
    #[arg(short, long, default_value_t = 1200.0)]
    width: f64,
    /// Focus path, frames separated by ';'
    #[arg(short, long)]
    focus: Option<String>,
    /// Zoom to the frame that best matches this query
    #[arg(short, long, conflicts_with = "focus")]
    search: Option<String>,
    /// Describe the frame that best matches this query in the status line
    #[arg(long)]
    hover: Option<String>,
    /// View config file (JSON)
    #[arg(short, long)]
    config: Option<PathBuf>,
    /// Row height override
    #[arg(long)]
    row_height: Option<f64>,
    /// Output JSON layout path
    #[arg(short, long)]
    json: Option<PathBuf>,
    /// Output CSV layout path
    #[arg(long)]
    csv: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let mut config = match &args.config {
        Some(path) => ViewConfig::from_json_file(path)
            .with_context(|| format!("reading config {}", path.display()))?,
        None => ViewConfig::default(),
    };
    if let Some(h) = args.row_height {
        config.row_height = h;
    }

    let tree = icicle_core::import::load_json_file(&args.graph)
        .with_context(|| format!("loading {}", args.graph.display()))?;

    let mut view = IcicleView::new(config);
    view.set_tree(Some(tree), &mut ());
    view.set_width(args.width);

    let Some(tree) = view.tree() else {
        anyhow::bail!("no tree loaded");
    };
    let path = match (&args.focus, &args.search) {
        (Some(f), _) => FocusPath::parse(f),
        (None, Some(q)) => match find_frame(tree, q) {
            Some(id) => FocusPath::to_node(tree, id),
            None => {
                tracing::warn!(query = %q, "no frame matches, showing the whole tree");
                FocusPath::root()
            }
        },
        (None, None) => FocusPath::root(),
    };
    let hovered = args.hover.as_deref().and_then(|q| find_frame(tree, q));
    view.set_path(path, &mut ());

    let frame = view.frame();
    if let Some(id) = hovered {
        // route through the controller so the status line reads its state
        let now = Instant::now();
        let rect = view.last_layout().rect_of(id).map(|r| r.rect);
        match rect {
            Some(r) => view.pointer_moved(r.x + r.w / 2.0, r.y + r.h / 2.0, now),
            None => tracing::warn!("hovered frame is not visible at this width"),
        }
        if let Some(deadline) = view.next_deadline() {
            view.tick(deadline, &mut ());
        }
    }

    println!("Node: {}", view.status_text());
    let tree = view.tree().context("tree disappeared")?;
    match &frame {
        Frame::NoData(msg) => println!("{msg}"),
        Frame::Unmeasured => println!("width {} is not measurable, nothing laid out", args.width),
        Frame::Graph(layout) => {
            println!(
                "focus [{}]: {} rects, {:.0}x{:.0}",
                view.path(),
                layout.rects.len(),
                layout.width,
                layout.height
            );
            if let Some(path) = &args.json {
                let json = icicle_core::export::to_json(tree, layout);
                std::fs::write(path, serde_json::to_string_pretty(&json)?)
                    .with_context(|| format!("writing {}", path.display()))?;
            }
            if let Some(path) = &args.csv {
                let file = std::fs::File::create(path)
                    .with_context(|| format!("writing {}", path.display()))?;
                icicle_core::export::to_csv(tree, layout, file)?;
            }
        }
    }
    Ok(())
}
