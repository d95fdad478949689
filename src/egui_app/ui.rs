#![cfg(feature = "egui")]

use eframe::egui::{self, Color32, PointerButton, Pos2, Rect, Sense};

use super::chart::show_chart_window;
use super::render::{paint_scene, rgb_to_color32};
use super::state::CollatzApp;
use crate::layout::{CanvasSize, Point};
use crate::session::{Command, Outcome};

fn canvas_local(rect: Rect, p: Pos2) -> Point {
    Point::new(p.x - rect.left(), p.y - rect.top())
}

/// Main per-frame update: collect commands from the widgets, apply them, paint.
pub(super) fn update(app: &mut CollatzApp, ctx: &egui::Context) {
    let accent = rgb_to_color32(app.session.config().accent);
    let mut animate = std::mem::take(&mut app.animate_on_start);
    let mut commands: Vec<Command> = Vec::new();

    egui::TopBottomPanel::top("controls").show(ctx, |ui| {
        ui.add_space(6.0);
        ui.horizontal(|ui| {
            ui.label("Enter a positive integer:");
            let edit = ui.add(egui::TextEdit::singleline(&mut app.input).desired_width(90.0));
            let submitted = edit.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
            if ui.button("Animate").clicked() || submitted {
                animate = true;
            }
        });
        ui.horizontal(|ui| {
            if ui.button("Zoom In").clicked() {
                commands.push(Command::ZoomIn);
            }
            if ui.button("Zoom Out").clicked() {
                commands.push(Command::ZoomOut);
            }
            ui.separator();
            if let Some(s) = app.session.summary() {
                ui.label(format!(
                    "start {}  |  {} steps  |  peak {}  |  zoom {}%",
                    s.start,
                    s.steps,
                    s.peak,
                    (app.session.zoom() * 100.0).round() as i64
                ));
            } else {
                ui.weak("Right-drag to pan the canvas.");
            }
        });
        ui.add_space(4.0);
    });

    egui::CentralPanel::default()
        .frame(egui::Frame::new().fill(Color32::WHITE))
        .show(ctx, |ui| {
            let (resp, painter) = ui.allocate_painter(ui.available_size(), Sense::drag());
            let rect = resp.rect;
            let canvas = CanvasSize::new(rect.width(), rect.height());

            if animate {
                commands.insert(
                    0,
                    Command::Animate {
                        input: app.input.clone(),
                        canvas,
                    },
                );
            }
            if resp.drag_started_by(PointerButton::Secondary) {
                if let Some(p) = resp.interact_pointer_pos() {
                    commands.push(Command::PanStart(canvas_local(rect, p)));
                }
            }
            if resp.dragged_by(PointerButton::Secondary) {
                if let Some(p) = resp.interact_pointer_pos() {
                    commands.push(Command::PanDrag(canvas_local(rect, p)));
                }
            }
            if resp.drag_stopped_by(PointerButton::Secondary) {
                commands.push(Command::PanEnd);
            }

            for command in commands.drain(..) {
                if app.session.handle(command) == Outcome::ChartOpened {
                    ctx.request_repaint();
                }
            }

            paint_scene(&painter, rect.min, &app.session.scene(canvas), accent);
        });

    if let Some(err) = app.session.error() {
        let title = err.title();
        let message = err.to_string();
        let mut dismiss = false;
        let modal = egui::Modal::new(egui::Id::new("input_error")).show(ctx, |ui| {
            ui.set_width(280.0);
            ui.heading(title);
            ui.label(&message);
            ui.add_space(8.0);
            if ui.button("OK").clicked() {
                dismiss = true;
            }
        });
        if dismiss || modal.should_close() {
            app.session.handle(Command::DismissError);
        }
    }

    let chart_size = app.session.config().chart_size;
    let chart_closed = app
        .session
        .chart()
        .map(|chart| show_chart_window(ctx, chart, chart_size, accent))
        .unwrap_or(false);
    if chart_closed {
        app.session.handle(Command::CloseChart);
    }
}
