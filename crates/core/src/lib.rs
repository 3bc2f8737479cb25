pub mod config;
pub mod controller;
pub mod error;
pub mod export;
pub mod focus;
pub mod import;
pub mod metrics;
pub mod model;
pub mod palette;
pub mod partition;
pub mod search;
pub mod throttle;
pub mod units;
pub mod view;

pub use config::ViewConfig;
pub use controller::{Callbacks, Controller, InteractionSink};
pub use error::Error;
pub use focus::FocusPath;
pub use model::*;
pub use partition::{layout, IcicleLayout, IcicleRect, Rect};
pub use view::{Frame, IcicleView};
