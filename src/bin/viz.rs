use eframe::egui;
use egui_plot::{Line, Plot, PlotPoint, PlotPoints, PlotUi, Points};
use nalgebra::Vector2;

use solar_sim::io::BodyInfo;
use solar_sim::physics::{AU, SECONDS_PER_DAY};
use solar_sim::presets;
use solar_sim::sim::{SimConfig, System, TimeControl};
use solar_sim::view::Viewport;

fn main() -> eframe::Result {
    let system = match presets::solar_system(SimConfig::default()) {
        Ok(system) => system,
        Err(err) => {
            eprintln!("failed to build preset system: {err}");
            std::process::exit(1);
        }
    };

    let app = SolarViz { system, clock: TimeControl::new(), selected: None };
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([1200.0, 800.0]),
        ..Default::default()
    };
    eframe::run_native("Solar System Simulation", options, Box::new(|_| Ok(Box::new(app))))
}

struct SolarViz {
    system: System,
    clock: TimeControl,
    selected: Option<usize>,
}

fn color32(rgb: [u8; 3]) -> egui::Color32 {
    egui::Color32::from_rgb(rgb[0], rgb[1], rgb[2])
}

/// Body under a click on the plot, if any. The plot axes are in AU with y up,
/// so the hit test runs in plot pixels measured from the world origin.
fn clicked_body(plot_ui: &PlotUi, system: &System) -> Option<usize> {
    if !plot_ui.response().clicked() {
        return None;
    }
    let pointer = plot_ui.pointer_coordinate()?;
    let origin = plot_ui.screen_from_plot(PlotPoint::new(0.0, 0.0));
    let one_au = plot_ui.screen_from_plot(PlotPoint::new(1.0, 0.0));
    let px_per_au = f64::from(one_au.x - origin.x);
    let viewport = Viewport::new(px_per_au / AU, Vector2::zeros());
    viewport.index_at(&(Vector2::new(pointer.x, pointer.y) * px_per_au), system.bodies())
}

impl eframe::App for SolarViz {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // One batch of whole days per frame, before drawing
        self.system.step_multiple(self.clock.steps_per_frame());

        egui::TopBottomPanel::top("controls").show(ctx, |ui| {
            ui.horizontal(|ui| {
                if ui.button("Slower").clicked() {
                    self.clock.slower();
                }
                let pause_text = if self.clock.is_paused() { "Play" } else { "Pause" };
                if ui.button(pause_text).clicked() {
                    self.clock.toggle_pause();
                }
                if ui.button("Faster").clicked() {
                    self.clock.faster();
                }
                ui.separator();
                ui.label(format!(
                    "Speed: {}  |  Day {:.0}",
                    self.clock.label(),
                    self.system.time() / SECONDS_PER_DAY
                ));
            });
        });

        egui::SidePanel::right("info").min_width(260.0).show(ctx, |ui| {
            ui.heading("Bodies");
            for (i, body) in self.system.bodies().iter().enumerate() {
                let label = egui::RichText::new(body.name()).color(color32(body.appearance().color));
                if ui.selectable_label(self.selected == Some(i), label).clicked() {
                    self.selected = if self.selected == Some(i) { None } else { Some(i) };
                }
            }

            if let Some(body) = self.selected.and_then(|i| self.system.bodies().get(i)) {
                ui.separator();
                let info = BodyInfo::from_body(body);
                egui::Grid::new("body_info").striped(true).show(ui, |ui| {
                    for (label, value) in info.rows() {
                        ui.label(label);
                        ui.label(value);
                        ui.end_row();
                    }
                });
            }
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            let clicked = Plot::new("orbits")
                .data_aspect(1.0)
                .x_axis_label("x (AU)")
                .y_axis_label("y (AU)")
                .show(ui, |plot_ui| {
                    for body in self.system.bodies() {
                        let color = color32(body.appearance().color);
                        if let Some(trail) = body.trail() {
                            let points: PlotPoints =
                                trail.iter().map(|p| [p.x / AU, p.y / AU]).collect();
                            plot_ui.line(Line::new(body.name(), points).color(color));
                        }
                        let p = body.position();
                        let marker: PlotPoints = vec![[p.x / AU, p.y / AU]].into();
                        plot_ui.points(
                            Points::new(body.name(), marker)
                                .radius(body.appearance().radius as f32)
                                .color(color),
                        );
                    }
                    clicked_body(plot_ui, &self.system)
                })
                .inner;
            if clicked.is_some() {
                self.selected = clicked;
            }
        });

        ctx.request_repaint();
    }
}
