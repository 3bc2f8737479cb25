use std::time::Instant;

use eframe::egui::{self, Color32, FontId, Sense, Stroke, Ui};
use icicle_core::metrics;
use icicle_core::palette::node_color;
use icicle_core::Frame;

use crate::state::{AppState, LoadMsg};

pub fn draw(app: &mut AppState, ctx: &egui::Context) {
    poll_load(app, ctx);

    if app.load_rx.is_some() {
        ctx.request_repaint();
    }

    egui::TopBottomPanel::top("top").show(ctx, |ui| {
        top_bar(ui, app);
    });

    egui::TopBottomPanel::bottom("status").show(ctx, |ui| {
        ui.label(format!("Node: {}", app.view.status_text()));
        if let Some(e) = &app.error {
            ui.colored_label(Color32::RED, e);
        }
    });

    egui::CentralPanel::default().show(ctx, |ui| {
        egui::ScrollArea::vertical().show(ui, |ui| graph(ui, app));
    });

    let now = Instant::now();
    if app.view.tick(now, &mut ()) {
        ctx.request_repaint();
    }
    if let Some(deadline) = app.view.next_deadline() {
        ctx.request_repaint_after(deadline.saturating_duration_since(now));
    }
}

fn top_bar(ui: &mut Ui, app: &mut AppState) {
    ui.horizontal(|ui| {
        if ui.button("Open Profile").clicked() {
            if let Some(path) = rfd::FileDialog::new().add_filter("json", &["json"]).pick_file() {
                app.start_load(path);
            }
        }
        if ui.button("Reset Zoom").clicked() {
            app.reset_zoom();
        }
        ui.separator();
        ui.label("Find:");
        let edit = ui.text_edit_singleline(&mut app.search);
        if edit.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
            app.zoom_to_search();
        }
        ui.separator();
        ui.label(format!("Focus: {}", app.view.path()));
    });
}

fn graph(ui: &mut Ui, app: &mut AppState) {
    app.view.set_width(f64::from(ui.available_width()));
    let layout = match app.view.frame() {
        Frame::Graph(layout) => layout,
        Frame::NoData(msg) => {
            ui.label(msg);
            return;
        }
        Frame::Unmeasured => return,
    };

    let size = egui::vec2(layout.width as f32, layout.height as f32);
    let (response, painter) = ui.allocate_painter(size, Sense::click());
    let origin = response.rect.min;

    let Some(tree) = app.view.tree() else { return };
    for r in &layout.rects {
        let Some(node) = tree.get(r.id) else { continue };
        let rect = egui::Rect::from_min_size(
            origin + egui::vec2(r.rect.x as f32, r.rect.y as f32),
            egui::vec2(r.rect.w as f32, r.rect.h as f32),
        );
        let c = node_color(node);
        let fill = Color32::from_rgba_unmultiplied(c.r, c.g, c.b, (c.a * 255.0) as u8);
        painter.rect(rect, 0.0, fill, Stroke::new(1.0, Color32::WHITE));
        if r.show_label {
            painter.with_clip_rect(rect.shrink(1.0)).text(
                rect.left_center() + egui::vec2(5.0, 0.0),
                egui::Align2::LEFT_CENTER,
                metrics::rect_label(tree, node),
                FontId::proportional(12.0),
                Color32::BLACK,
            );
        }
    }

    let now = Instant::now();
    let local = |p: egui::Pos2| (f64::from(p.x - origin.x), f64::from(p.y - origin.y));
    match response.hover_pos().map(local) {
        Some(pos) if app.pointer != Some(pos) => {
            app.pointer = Some(pos);
            app.view.pointer_moved(pos.0, pos.1, now);
        }
        None if app.pointer.is_some() => {
            app.pointer = None;
            app.view.pointer_left(now);
        }
        _ => {}
    }
    if response.clicked() {
        if let Some((x, y)) = response.interact_pointer_pos().map(local) {
            app.view.pointer_clicked(x, y, now);
        }
    }
}

fn poll_load(app: &mut AppState, ctx: &egui::Context) {
    let Some(rx) = app.load_rx.take() else { return; };
    match rx.try_recv() {
        Ok(msg) => {
            app.finish_load(msg);
            ctx.request_repaint();
        }
        Err(crossbeam_channel::TryRecvError::Empty) => app.load_rx = Some(rx),
        Err(crossbeam_channel::TryRecvError::Disconnected) => {
            app.error = Some("loader exited without a result".to_string());
        }
    }
}
