use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Tunables for layout and interaction. Every field has a default, so a
/// config file only needs to mention what it overrides.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewConfig {
    pub row_height: f64,
    /// Nodes at or below this width are neither emitted nor descended into.
    pub min_visible_width: f64,
    pub label_min_width: f64,
    pub hover_throttle_ms: u64,
    pub click_throttle_ms: u64,
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            row_height: 20.0,
            min_visible_width: 1.0,
            label_min_width: 5.0,
            hover_throttle_ms: 100,
            click_throttle_ms: 100,
        }
    }
}

impl ViewConfig {
    pub fn from_json_file(path: &Path) -> Result<Self, Error> {
        let text = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&text)?)
    }

    pub fn hover_window(&self) -> Duration {
        Duration::from_millis(self.hover_throttle_ms)
    }

    pub fn click_window(&self) -> Duration {
        Duration::from_millis(self.click_throttle_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_config_keeps_defaults() {
        let cfg: ViewConfig = serde_json::from_str(r#"{ "row_height": 16.0 }"#).unwrap();
        assert_eq!(cfg.row_height, 16.0);
        assert_eq!(cfg.min_visible_width, 1.0);
        assert_eq!(cfg.hover_window(), Duration::from_millis(100));
    }
}
