use serde::Serialize;

use crate::model::FlameNode;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f32,
}

impl Rgba {
    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub fn css(&self) -> String {
        if self.a >= 1.0 {
            format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        } else {
            format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
        }
    }
}

pub const UNCHANGED: Rgba = Rgba::opaque(0x90, 0xc7, 0xe0);
const GREW: (u8, u8, u8) = (221, 46, 69);
const SHRANK: (u8, u8, u8) = (59, 165, 93);
const MAX_ALPHA: f32 = 0.8;

/// Fill color for a node: neutral when unchanged, red when it grew, green
/// when it shrank, more opaque the larger the relative change.
pub fn node_color(node: &FlameNode) -> Rgba {
    if !node.has_diff() {
        return UNCHANGED;
    }
    // nodes with no baseline are drawn at full strength
    let ratio = if node.previous_value() > 0 {
        node.diff_ratio()
    } else {
        1.0
    };
    let a = (((ratio.abs() / 2.0 + 0.5) * MAX_ALPHA as f64) as f32).min(MAX_ALPHA);
    let (r, g, b) = if node.diff_value() > 0 { GREW } else { SHRANK };
    Rgba { r, g, b, a }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::tests::sample_tree;

    fn node(cumulative: i64, diff: Option<i64>) -> FlameNode {
        let mut n = sample_tree().nodes[0].clone();
        n.cumulative = cumulative;
        n.diff = diff;
        n
    }

    #[test]
    fn unchanged_is_neutral() {
        assert_eq!(node_color(&node(10, None)), UNCHANGED);
        assert_eq!(node_color(&node(10, Some(0))).css(), "#90c7e0");
    }

    #[test]
    fn growth_and_shrink() {
        let grew = node_color(&node(15, Some(5)));
        assert_eq!((grew.r, grew.g, grew.b), GREW);
        assert!((grew.a - 0.6).abs() < 1e-6);

        let shrank = node_color(&node(5, Some(-5)));
        assert_eq!((shrank.r, shrank.g, shrank.b), SHRANK);
        assert!((shrank.a - 0.6).abs() < 1e-6);
    }

    #[test]
    fn alpha_is_capped() {
        assert_eq!(node_color(&node(10, Some(10))).a, MAX_ALPHA);
        assert_eq!(node_color(&node(100, Some(90))).a, MAX_ALPHA);
    }
}
