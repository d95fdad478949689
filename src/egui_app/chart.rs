#![cfg(feature = "egui")]

use eframe::egui::{self, Color32};
use egui_plot::{Line, Plot, PlotPoints, Points};

use crate::chart::ChartView;
use crate::layout::CanvasSize;

/// Draw the line-plus-marker plot of `chart` into `ui`.
pub fn plot_sequence(ui: &mut egui::Ui, chart: &ChartView, accent: Color32) {
    ui.vertical_centered(|ui| {
        ui.heading(&chart.title);
    });
    Plot::new("collatz_chart_plot")
        .x_axis_label(chart.x_label.clone())
        .y_axis_label(chart.y_label.clone())
        .show_grid(true)
        .show(ui, |plot_ui| {
            plot_ui.line(
                Line::new("Sequence", PlotPoints::from(chart.points.clone()))
                    .color(accent)
                    .width(2.0),
            );
            plot_ui.points(
                Points::new("Values", PlotPoints::from(chart.points.clone()))
                    .color(accent)
                    .radius(3.5),
            );
        });
}

/// Show the chart in its own native window. Returns true once the user closed it.
///
/// Backends without multi-viewport support get an embedded egui window instead.
pub fn show_chart_window(
    ctx: &egui::Context,
    chart: &ChartView,
    size: CanvasSize,
    accent: Color32,
) -> bool {
    let mut closed = false;
    ctx.show_viewport_immediate(
        egui::ViewportId::from_hash_of("collatz_chart"),
        egui::ViewportBuilder::default()
            .with_title(chart.title.clone())
            .with_inner_size([size.width, size.height]),
        |ctx, class| {
            if class == egui::ViewportClass::Embedded {
                let mut open = true;
                egui::Window::new(chart.title.clone())
                    .open(&mut open)
                    .default_size([size.width, size.height])
                    .show(ctx, |ui| plot_sequence(ui, chart, accent));
                closed = !open;
            } else {
                egui::CentralPanel::default().show(ctx, |ui| plot_sequence(ui, chart, accent));
                if ctx.input(|i| i.viewport().close_requested()) {
                    closed = true;
                }
            }
        },
    );
    closed
}
