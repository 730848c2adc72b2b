use egui::Color32;
use egui_plot::{Legend, Line, PlotPoints};
use itertools::{Itertools, MinMaxResult};

use pitcool::simulation::RACE_DURATION_MIN;

use super::{DashboardApp, PALETTE_COOLED, PALETTE_ORANGE};

const Y_MARGIN_C: f64 = 5.0;

impl DashboardApp {
    pub(crate) fn chart_view(&self, ui: &mut egui::Ui) {
        let Some(overview) = &self.last_run else {
            ui.centered_and_justified(|ui| {
                ui.label("Turbine temperatures will show up here.");
            });
            return;
        };

        let mut baseline_vec = Vec::<[f64; 2]>::new();
        let mut cooled_vec = Vec::<[f64; 2]>::new();
        for (i, t) in overview.simulation.time_min.iter().enumerate() {
            baseline_vec.push([*t, overview.simulation.without_cooling[i]]);
            cooled_vec.push([*t, overview.simulation.with_cooling[i]]);
        }

        let mut plot = egui_plot::Plot::new("race-temperatures")
            .allow_drag(false)
            .allow_scroll(false)
            .allow_zoom(false)
            .include_x(0.)
            .include_x(RACE_DURATION_MIN)
            .x_axis_label("race time (min)")
            .y_axis_label("turbine °C")
            .legend(Legend::default());

        let temp_bounds = overview
            .simulation
            .without_cooling
            .iter()
            .chain(overview.simulation.with_cooling.iter())
            .copied()
            .minmax_by(f64::total_cmp);
        if let MinMaxResult::MinMax(min, max) = temp_bounds {
            plot = plot.include_y(min - Y_MARGIN_C).include_y(max + Y_MARGIN_C);
        }

        let baseline_points = PlotPoints::new(baseline_vec);
        let cooled_points = PlotPoints::new(cooled_vec);
        let trend_points = PlotPoints::new(overview.cooled_trend.clone());

        plot.show_background(false).show(ui, |plot_ui| {
            plot_ui.line(
                Line::new("Without cooling", baseline_points)
                    .color(PALETTE_ORANGE),
            );
            plot_ui.line(
                Line::new("With cooling", cooled_points)
                    .color(PALETTE_COOLED),
            );
            plot_ui.line(
                Line::new("Cooled trend", trend_points)
                    .color(Color32::LIGHT_GRAY),
            );
        });
    }
}
