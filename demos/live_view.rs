use std::time::{Duration, Instant};

use eframe::egui;
use egui_plot::{Legend, Line, Plot, PlotPoints};
use rand::{rngs::StdRng, Rng, SeedableRng};

use feature_plot::{FeatureSample, PlotFeature, PlotPipeline, PlotSettings, SettingsEvent};

const SAMPLE_RATE_HZ: f64 = 50.0;

struct SignalGen {
    freq_hz: f64,
    phase: f64,
    amp: f64,
    noise: f64,
}

impl SignalGen {
    fn sample(&self, t_secs: f64, rng: &mut StdRng) -> f64 {
        let base = (2.0 * std::f64::consts::PI * self.freq_hz * t_secs + self.phase).sin() * self.amp;
        base + rng.gen_range(-self.noise..self.noise)
    }
}

struct DemoApp {
    settings: PlotSettings,
    pipeline: PlotPipeline,
    started_at: Instant,
    last_ts_ms: f64,
    rng: StdRng,
    gens: Vec<SignalGen>,
}

impl DemoApp {
    fn new() -> Self {
        let mut settings = PlotSettings::new();
        settings
            .apply(SettingsEvent::FeaturesLoaded(vec![
                PlotFeature::with_components("Acceleration", Some("mg"), ["X", "Y", "Z"]),
                PlotFeature::scalar("Pressure", Some("mBar")),
            ]))
            .expect("static feature list");
        let mut pipeline = PlotPipeline::new(&settings);
        pipeline.start();
        Self {
            settings,
            pipeline,
            started_at: Instant::now(),
            last_ts_ms: 0.0,
            rng: StdRng::seed_from_u64(7),
            gens: (0..3)
                .map(|idx| SignalGen {
                    freq_hz: 0.4 + idx as f64 * 0.3,
                    phase: idx as f64 * 0.8,
                    amp: 500.0,
                    noise: 40.0,
                })
                .collect(),
        }
    }

    fn drive_stream(&mut self) {
        let dt_ms = 1000.0 / SAMPLE_RATE_HZ;
        let target_ms = self.started_at.elapsed().as_secs_f64() * 1000.0;
        let components = self
            .pipeline
            .feature()
            .map(|f| f.components.len())
            .unwrap_or(0);
        while self.last_ts_ms + dt_ms <= target_ms {
            let t_secs = self.last_ts_ms / 1000.0;
            let values: Vec<f64> = (0..components)
                .map(|idx| self.gens[idx % self.gens.len()].sample(t_secs, &mut self.rng))
                .collect();
            self.pipeline
                .ingest(&FeatureSample::new(self.last_ts_ms, values))
                .expect("sample shape matches the selected feature");
            self.last_ts_ms += dt_ms;
        }
    }

    fn window_selector(&mut self, ui: &mut egui::Ui) {
        let mut window = self.pipeline.window();
        egui::ComboBox::from_label("window")
            .selected_text(match window {
                Some(w) => format!("{} s", w.as_secs()),
                None => "unbounded".to_owned(),
            })
            .show_ui(ui, |ui| {
                for (label, value) in [
                    ("2 s", Some(Duration::from_secs(2))),
                    ("5 s", Some(Duration::from_secs(5))),
                    ("10 s", Some(Duration::from_secs(10))),
                    ("unbounded", None),
                ] {
                    ui.selectable_value(&mut window, value, label);
                }
            });
        if window != self.pipeline.window() {
            self.settings
                .apply(SettingsEvent::WindowChanged(window))
                .expect("window change is always valid");
            self.pipeline.apply_settings(&self.settings);
        }
    }

    fn feature_selector(&mut self, ui: &mut egui::Ui) {
        let mut selected = self.settings.selected_index();
        let names: Vec<String> = self
            .settings
            .features()
            .iter()
            .map(|f| f.name.clone())
            .collect();
        egui::ComboBox::from_label("feature")
            .selected_text(names.get(selected).cloned().unwrap_or_default())
            .show_ui(ui, |ui| {
                for (idx, name) in names.iter().enumerate() {
                    ui.selectable_value(&mut selected, idx, name);
                }
            });
        if selected != self.settings.selected_index() {
            self.settings
                .apply(SettingsEvent::FeatureSelected(selected))
                .expect("selector index comes from the feature list");
            self.pipeline.apply_settings(&self.settings);
        }
    }
}

impl eframe::App for DemoApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.drive_stream();

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("Live feature plot (egui demo)");
            ui.horizontal(|ui| {
                self.feature_selector(ui);
                self.window_selector(ui);
                if let Some(text) = self.pipeline.last_sample_text() {
                    ui.separator();
                    ui.monospace(text);
                }
            });
            if let Some(label) = self.settings.y_axis_label() {
                ui.label(label);
            }

            let view = self.pipeline.view();
            let colors = [
                egui::Color32::from_rgb(0x5b, 0x8f, 0xff),
                egui::Color32::from_rgb(0xff, 0x8c, 0x42),
                egui::Color32::from_rgb(0x54, 0xc7, 0x6b),
            ];

            Plot::new("live-feature-plot")
                .legend(Legend::default())
                .height(360.0)
                .allow_drag(false)
                .allow_zoom(false)
                .allow_scroll(false)
                .include_y(view.y_range.0)
                .include_y(view.y_range.1)
                .show(ui, |plot_ui| {
                    for channel in &view.channels {
                        let points =
                            PlotPoints::from_iter(channel.points.iter().map(|p| [p.x, p.y]));
                        plot_ui.line(
                            Line::new(points)
                                .name(&channel.name)
                                .color(colors[channel.index % colors.len()]),
                        );
                    }
                });
        });

        ctx.request_repaint(); // continuous streaming
    }
}

fn main() -> eframe::Result<()> {
    env_logger::init();
    let options = eframe::NativeOptions::default();
    eframe::run_native(
        "feature-plot demo",
        options,
        Box::new(|_cc| Box::new(DemoApp::new())),
    )
}
