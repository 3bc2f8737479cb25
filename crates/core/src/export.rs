use crate::error::Error;
use crate::metrics;
use crate::model::Tree;
use crate::palette::node_color;
use crate::partition::IcicleLayout;

/// Writes one record per laid-out rectangle.
pub fn to_csv(tree: &Tree, layout: &IcicleLayout, w: impl std::io::Write) -> Result<(), Error> {
    let mut writer = csv::Writer::from_writer(w);
    writer.write_record(["id", "name", "depth", "x", "y", "width", "height", "color", "label"])?;
    for r in &layout.rects {
        let Some(n) = tree.get(r.id) else { continue };
        writer.write_record([
            r.id.0.to_string(),
            n.full_name.clone(),
            r.depth.to_string(),
            format!("{:.3}", r.rect.x),
            format!("{:.3}", r.rect.y),
            format!("{:.3}", r.rect.w),
            format!("{:.3}", r.rect.h),
            node_color(n).css(),
            metrics::node_text(tree, n),
        ])?;
    }
    writer.flush()?;
    Ok(())
}

pub fn to_json(tree: &Tree, layout: &IcicleLayout) -> serde_json::Value {
    serde_json::json!({
        "width": layout.width,
        "height": layout.height,
        "rects": layout.rects.iter().filter_map(|r| {
            let n = tree.get(r.id)?;
            let text = if r.show_label { metrics::rect_label(tree, n) } else { "" };
            Some(serde_json::json!({
                "id": r.id.0,
                "name": n.full_name,
                "text": text,
                "depth": r.depth,
                "x": r.rect.x,
                "y": r.rect.y,
                "width": r.rect.w,
                "height": r.rect.h,
                "color": node_color(n).css(),
                "label": metrics::node_text(tree, n),
            }))
        }).collect::<Vec<_>>()
    })
}
