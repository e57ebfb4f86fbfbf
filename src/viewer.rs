// Interactive chart window, only built with the `viewer` feature

use crate::error::{Result, WaveError};
use crate::visualisation::{ChartHandle, AMPLITUDE_AXIS_LABEL, TIME_AXIS_LABEL};
use eframe::{egui, App, NativeOptions};
use egui_plot::{Line, Plot, PlotPoints};

struct ChartViewer {
    title: String,
    points: Vec<[f64; 2]>,
    y_range: (f64, f64),
    line_width: f32,
}

impl App for ChartViewer {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading(&self.title);

            // hovering shows the (t, S) pair under the cursor
            Plot::new("displacement")
                .x_axis_label(TIME_AXIS_LABEL)
                .y_axis_label(AMPLITUDE_AXIS_LABEL)
                .include_y(self.y_range.0)
                .include_y(self.y_range.1)
                .show_grid(true)
                .show(ui, |plot_ui| {
                    let points = PlotPoints::from(self.points.clone());
                    plot_ui.line(Line::new(points).width(self.line_width));
                });
        });
    }
}

/// Blocks until the window is closed.
pub fn show(chart: &ChartHandle) -> Result<()> {
    let viewer = ChartViewer {
        title: chart.title.clone(),
        points: chart.series.points().map(|(t, s)| [t, s]).collect(),
        y_range: chart.y_range,
        line_width: chart.style.line_width as f32,
    };
    let native_options = NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([chart.style.width as f32, chart.style.height as f32]),
        ..NativeOptions::default()
    };

    log::info!("Opening chart window");
    eframe::run_native(
        "Elastic Wave Plot",
        native_options,
        Box::new(|_cc| Ok(Box::new(viewer))),
    )
    .map_err(|e| WaveError::Display(e.to_string()))
}
