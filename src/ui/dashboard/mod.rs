mod chart_view;
pub(crate) mod config;

use config::AppConfig;
use egui::{Color32, RichText, Visuals, style::Widgets};
use log::error;
use simple_moving_average::{SMA, SumTreeSMA};

use pitcool::circuits;
use pitcool::device::{DeviceEvent, DeviceNotifier};
use pitcool::simulation::{self, RaceSimulation, metrics};
use pitcool::summary;

pub(crate) const PALETTE_BLACK: Color32 = Color32::from_rgb(12, 12, 12);
pub(crate) const PALETTE_MAROON: Color32 = Color32::from_rgb(155, 57, 34);
pub(crate) const PALETTE_ORANGE: Color32 = Color32::from_rgb(242, 97, 63);
pub(crate) const PALETTE_COOLED: Color32 = Color32::from_rgb(99, 155, 255);

/// Samples folded into each point of the cooled trend overlay
const TREND_WINDOW: usize = 15;

const BUTTONS_PER_ROW: usize = 4;

/// Everything the dashboard shows for the most recent simulator run.
///
/// Built once per button press and replaced wholesale on the next one; no
/// state survives beyond the fields here.
struct RaceOverview {
    simulation: RaceSimulation,
    rpm: u32,
    mean_without: f64,
    mean_with: f64,
    performance_pct: f64,
    co2_saved_kg: f64,
    cooled_trend: Vec<[f64; 2]>,
}

impl RaceOverview {
    fn for_circuit(circuit_name: &str) -> Self {
        let simulation = simulation::simulate(circuit_name);
        let rpm = circuits::nominal_rpm(circuit_name);
        let mean_without = simulation.mean_without_cooling();
        let mean_with = simulation.mean_with_cooling();

        let mut trend_average = SumTreeSMA::<f64, f64, TREND_WINDOW>::new();
        let mut cooled_trend = Vec::with_capacity(simulation.sample_count());
        for (t, temp) in simulation.time_min.iter().zip(&simulation.with_cooling) {
            trend_average.add_sample(*temp);
            cooled_trend.push([*t, trend_average.get_average()]);
        }

        Self {
            rpm,
            mean_without,
            mean_with,
            performance_pct: metrics::performance_pct(mean_with),
            co2_saved_kg: metrics::co2_reduction_kg(rpm, simulation::RACE_DURATION_MIN),
            cooled_trend,
            simulation,
        }
    }
}

/// `DashboardApp` lets the pit crew pick a circuit, charts the simulated
/// turbine temperatures with and without cooling, and drives the activation
/// side effects (summary export, hardware notification).
pub struct DashboardApp {
    app_config: AppConfig,
    notifier: DeviceNotifier,
    last_run: Option<RaceOverview>,
    show_summary_window: bool,
    device_status: Option<String>,
    export_status: Option<String>,
}

impl DashboardApp {
    pub fn new(app_config: AppConfig, cc: &eframe::CreationContext<'_>) -> Self {
        let default_visuals = Visuals {
            dark_mode: true,
            hyperlink_color: PALETTE_MAROON,
            faint_bg_color: PALETTE_BLACK,
            panel_fill: PALETTE_BLACK,
            button_frame: true,
            widgets: Widgets::dark(),
            striped: false,
            ..Default::default()
        };
        cc.egui_ctx.set_visuals(default_visuals);

        let notifier = DeviceNotifier::new(app_config.device_endpoint.clone());

        Self {
            app_config,
            notifier,
            last_run: None,
            show_summary_window: false,
            device_status: None,
            export_status: None,
        }
    }

    fn run_circuit(&mut self, circuit_name: &str) {
        let overview = RaceOverview::for_circuit(circuit_name);
        if self.app_config.hardware_enabled {
            self.device_status = Some(format!("Arming cooling hardware for {}...", circuit_name));
            self.notifier.notify(circuit_name, overview.rpm);
        }
        self.export_status = None;
        self.last_run = Some(overview);
    }

    fn circuit_grid(&mut self, ui: &mut egui::Ui) {
        let mut clicked: Option<&'static str> = None;
        for row in circuits::all().chunks(BUTTONS_PER_ROW) {
            ui.horizontal(|ui| {
                for circuit in row {
                    if ui.button(circuit.name).clicked() {
                        clicked = Some(circuit.name);
                    }
                }
            });
        }
        if let Some(circuit_name) = clicked {
            self.run_circuit(circuit_name);
        }
    }

    fn summary_panel(&mut self, ui: &mut egui::Ui) {
        let Some(overview) = &self.last_run else {
            ui.label("Pick a circuit to simulate the race.");
            return;
        };

        ui.horizontal(|ui| {
            ui.label(RichText::new(&overview.simulation.circuit_name).strong());
            ui.label(format!("{} RPM", overview.rpm));
            ui.separator();
            ui.label(format!("mean {:.1}°C without cooling", overview.mean_without));
            ui.label(
                RichText::new(format!("{:.1}°C with cooling", overview.mean_with))
                    .color(PALETTE_COOLED),
            );
            ui.separator();
            ui.label(format!("performance {:.1}%", overview.performance_pct));
            ui.label(format!("CO₂ saved {:.2} kg", overview.co2_saved_kg));
        });

        ui.horizontal(|ui| {
            if ui.button("Activation summary").clicked() {
                self.show_summary_window = true;
            }
            if ui.button("Send to hardware").clicked() {
                let circuit_name = overview.simulation.circuit_name.clone();
                let rpm = overview.rpm;
                self.device_status = Some(format!("Arming cooling hardware for {}...", circuit_name));
                self.notifier.notify(&circuit_name, rpm);
            }
            ui.checkbox(
                &mut self.app_config.hardware_enabled,
                "Notify hardware on circuit selection",
            );
        });

        if let Some(status) = &self.device_status {
            ui.label(RichText::new(status).color(Color32::LIGHT_GRAY));
        }
        if let Some(status) = &self.export_status {
            ui.label(RichText::new(status).color(Color32::LIGHT_GRAY));
        }
    }

    fn summary_window(&mut self, ctx: &egui::Context) {
        let Some(overview) = &self.last_run else {
            self.show_summary_window = false;
            return;
        };
        let circuit_name = overview.simulation.circuit_name.clone();
        let rpm = overview.rpm;
        let summary_text = summary::activation_summary(&circuit_name, rpm);

        let mut open = self.show_summary_window;
        egui::Window::new("Activation summary")
            .open(&mut open)
            .collapsible(false)
            .resizable(false)
            .show(ctx, |ui| {
                ui.monospace(&summary_text);
                ui.separator();
                if ui.button("Save as...").clicked() {
                    if let Some(path) = rfd::FileDialog::new()
                        .set_file_name("circuito_rpm.txt")
                        .save_file()
                    {
                        match summary::write_summary(&path, &circuit_name, rpm) {
                            Ok(()) => {
                                self.export_status =
                                    Some(format!("Summary saved to {}", path.display()));
                            }
                            Err(e) => {
                                error!("Error while writing activation summary: {}", e);
                                self.export_status = Some("Could not save summary".to_string());
                            }
                        }
                        self.show_summary_window = false;
                    }
                }
            });
        self.show_summary_window = self.show_summary_window && open;
    }
}

impl eframe::App for DashboardApp {
    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        if let Err(e) = self.app_config.save() {
            error!("Error while saving config file: {}", e);
        }
    }

    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // drain hardware outcomes before rendering the status line
        while let Some(event) = self.notifier.try_event() {
            self.device_status = Some(match event {
                DeviceEvent::Delivered { circuit } => {
                    format!("Cooling hardware armed for {}", circuit)
                }
                DeviceEvent::Failed { circuit } => {
                    format!("Cooling hardware unreachable for {}", circuit)
                }
            });
        }

        if self.notifier.endpoint() != self.app_config.device_endpoint {
            self.notifier
                .set_endpoint(self.app_config.device_endpoint.clone());
        }

        egui::TopBottomPanel::top("circuits").show(ctx, |ui| {
            ui.heading("Pitcool");
            self.circuit_grid(ui);
            ui.add_space(4.);
        });

        egui::TopBottomPanel::bottom("summary").show(ctx, |ui| {
            self.summary_panel(ui);
            ui.collapsing("Hardware endpoint", |ui| {
                ui.text_edit_singleline(&mut self.app_config.device_endpoint);
            });
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            self.chart_view(ui);
        });

        if self.show_summary_window {
            self.summary_window(ctx);
        }
    }
}
