//! Interactive cell absorption viewer built with eframe/egui.
//!
//! This module defines [`Viewer`], which owns the [`Simulation`] and
//! implements [`eframe::App`] to render and control it through an egui UI.
//! The simulation only exposes cell snapshots; all drawing state lives here.

use eframe::App;
use glam::DVec2;
use tracing::warn;

use cell_core::{CellShape, Config, Simulation, color::Color, types::CellId};

/// Main application state for the interactive viewer.
///
/// The per-frame update is:
/// 1. Handle UI interactions / input.
/// 2. If `running` is `true` and the frame delay has elapsed, call
///    [`Viewer::step_once`].
/// 3. Render the canvas and every cell.
///
/// ### Fields
/// - `sim` - The simulation being displayed.
/// - `running` - Whether the simulation is currently auto-advancing.
/// - `zoom` - Zoom factor for canvas-to-screen mapping.
/// - `pan` - Screen-space pan offset in pixels.
/// - `last_absorbers` - Cells that absorbed another cell in the last step.
/// - `last_step_time` - Time stamp of the last step (egui time).
/// - `last_step_dt` - Actual time delta between the last two steps.
pub struct Viewer {
    sim: Simulation,

    running: bool,
    zoom: f32,
    pan: egui::Vec2,

    last_absorbers: Vec<CellId>,

    last_step_time: f64,
    last_step_dt: f64,
}

impl Viewer {
    /// Wraps an already populated simulation. The viewer starts paused.
    pub fn new(sim: Simulation) -> Self {
        Self {
            sim,
            running: false,
            zoom: 1.0,
            pan: egui::vec2(0.0, 0.0),
            last_absorbers: Vec::with_capacity(16),
            last_step_time: 0.0,
            last_step_dt: 0.0,
        }
    }

    /// Target time between automatic steps, from the configured frame delay.
    fn step_interval(&self) -> f64 {
        self.sim.config().frame_delay_ms as f64 / 1000.0
    }

    /// Re-populates the simulation from the current config and stops
    /// auto-running.
    fn reset(&mut self) {
        if let Err(err) = self.sim.reset() {
            warn!(%err, "reset rejected");
        }
        self.last_absorbers.clear();
        self.running = false;
    }

    /// Advances the simulation by one tick and remembers who grew.
    fn step_once(&mut self) {
        let report = self.sim.step();
        self.last_absorbers = report.absorptions.iter().map(|a| a.winner).collect();
    }

    /// Maps canvas coordinates (y down, origin top-left) to screen space.
    fn world_to_screen(&self, p: DVec2, rect: egui::Rect) -> egui::Pos2 {
        egui::pos2(
            rect.min.x + p.x as f32 * self.zoom + self.pan.x,
            rect.min.y + p.y as f32 * self.zoom + self.pan.y,
        )
    }

    /// Inverse of [`Viewer::world_to_screen`].
    fn screen_to_world(&self, p: egui::Pos2, rect: egui::Rect) -> DVec2 {
        let x = (p.x - rect.min.x - self.pan.x) / self.zoom;
        let y = (p.y - rect.min.y - self.pan.y) / self.zoom;
        DVec2::new(x as f64, y as f64)
    }

    fn to_color32(c: Color) -> egui::Color32 {
        egui::Color32::from_rgb(c.r, c.g, c.b)
    }

    /// Helper to draw a labeled `usize` [`egui::DragValue`].
    fn labeled_drag_usize(
        ui: &mut egui::Ui,
        label: &str,
        value: &mut usize,
        range: std::ops::RangeInclusive<usize>,
        speed: f64,
    ) {
        ui.horizontal(|ui| {
            ui.label(label);
            ui.add(egui::DragValue::new(value).range(range).speed(speed));
        });
    }

    /// Helper to draw a labeled `f64` [`egui::DragValue`].
    fn labeled_drag_f64(
        ui: &mut egui::Ui,
        label: &str,
        value: &mut f64,
        range: std::ops::RangeInclusive<f64>,
        speed: f64,
    ) {
        ui.horizontal(|ui| {
            ui.label(label);
            ui.add(egui::DragValue::new(value).range(range).speed(speed));
        });
    }

    /// Builds the top panel UI (run controls, stepping, zoom).
    fn ui_top_panel(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            ui.horizontal(|ui| {
                if ui
                    .button(if self.running { "⏸ Pause" } else { "▶ Run" })
                    .clicked()
                {
                    self.running = !self.running;
                }

                if ui.button("Step").clicked() {
                    let now = ctx.input(|i| i.time);
                    if self.last_step_time > 0.0 {
                        self.last_step_dt = now - self.last_step_time;
                    }
                    self.step_once();
                    self.last_step_time = now;
                }

                if ui.button("Reset").clicked() {
                    self.reset();
                }

                ui.separator();
                ui.add(egui::Slider::new(&mut self.zoom, 0.1..=10.0).text("Zoom"));
            });
        });
    }

    /// Builds the bottom status bar (tick, live cells, areas, timing).
    fn ui_status_bar(&self, ctx: &egui::Context) {
        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.label(format!("dt target = {:.3} s", self.step_interval()));
                ui.label(format!("dt last = {:.3} s", self.last_step_dt));
                ui.separator();
                ui.label(format!("largest r = {:.2}", self.sim.largest_radius()));
                ui.label(format!("total area = {:.0}", self.sim.total_area()));
                ui.label(format!(
                    "live cells = {} / {}",
                    self.sim.live_count(),
                    self.sim.cells().len()
                ));
                ui.label(format!("tick = {}", self.sim.tick()));
            });
        });
    }

    /// Builds the right-hand configuration panel.
    fn ui_config_panel(&mut self, ctx: &egui::Context) {
        egui::SidePanel::right("config_panel")
            .resizable(true)
            .default_width(220.0)
            .show(ctx, |ui| {
                ui.heading("Config");

                ui.separator();
                ui.label("Applied on reset");
                let cfg = self.sim.config_mut();
                Self::labeled_drag_usize(
                    ui,
                    "population_size:",
                    &mut cfg.population_size,
                    0..=2000,
                    1.0,
                );

                ui.separator();
                ui.label("Live");
                Self::labeled_drag_f64(
                    ui,
                    "growth_per_tick:",
                    &mut cfg.growth_per_tick,
                    -1.0..=1.0,
                    0.001,
                );
                ui.horizontal(|ui| {
                    ui.label("frame_delay_ms:");
                    ui.add(
                        egui::DragValue::new(&mut cfg.frame_delay_ms)
                            .range(0..=1000)
                            .speed(1.0),
                    );
                });

                ui.separator();
                if ui.button("Reset cfg to default").clicked() {
                    // Keep the canvas and seed the population was built for.
                    *cfg = Config {
                        canvas_width: cfg.canvas_width,
                        canvas_height: cfg.canvas_height,
                        seed: cfg.seed,
                        ..Config::default()
                    };
                }
            });
    }

    /// Builds the central panel where the canvas and cells are drawn.
    fn ui_central_panel(&mut self, ctx: &egui::Context) {
        egui::CentralPanel::default().show(ctx, |ui| {
            let response = ui.allocate_response(ui.available_size(), egui::Sense::click_and_drag());
            let rect = response.rect;
            let painter = ui.painter_at(rect);

            // Pan with drag.
            if response.dragged() {
                self.pan += response.drag_delta();
            }

            // Click to drop a new cell.
            if response.clicked()
                && let Some(p) = response.hover_pos()
            {
                let id = self.sim.spawn_cell_at(self.screen_to_world(p, rect));
                self.last_absorbers.clear();
                self.last_absorbers.push(id);
            }

            // Zoom around the mouse cursor.
            let scroll = ui.ctx().input(|i| i.raw_scroll_delta.y);
            if scroll != 0.0 {
                let pointer_screen = response.hover_pos().unwrap_or(rect.center());
                let world_before = self.screen_to_world(pointer_screen, rect);

                let factor = (1.0 + scroll * 0.001).clamp(0.5, 2.0);
                self.zoom = (self.zoom * factor).clamp(0.1, 10.0);

                let screen_after = self.world_to_screen(world_before, rect);
                self.pan += pointer_screen - screen_after;
            }

            // Canvas bounds.
            let size = self.sim.canvas_size();
            let bounds = egui::Rect::from_two_pos(
                self.world_to_screen(DVec2::ZERO, rect),
                self.world_to_screen(size, rect),
            );
            painter.rect_stroke(
                bounds,
                0.0,
                egui::Stroke::new(1.0, egui::Color32::DARK_GRAY),
                egui::StrokeKind::Inside,
            );

            // Live cells; inert ones have nothing to draw.
            let highlight = egui::Stroke::new(1.5, egui::Color32::YELLOW);
            for (id, shape) in self.sim.shapes().enumerate() {
                if shape.radius <= 0.0 {
                    continue;
                }
                let outline = self.last_absorbers.contains(&id).then_some(highlight);
                self.draw_cell(&painter, rect, &shape, outline);
            }

            // Auto-run simulation if requested.
            if self.running {
                let now = ctx.input(|i| i.time);
                let elapsed = now - self.last_step_time;
                if elapsed >= self.step_interval() {
                    if self.last_step_time > 0.0 {
                        self.last_step_dt = elapsed;
                    }
                    self.step_once();
                    self.last_step_time = now;
                }

                ctx.request_repaint();
            }
        });
    }

    fn draw_cell(
        &self,
        painter: &egui::Painter,
        rect: egui::Rect,
        shape: &CellShape,
        outline: Option<egui::Stroke>,
    ) {
        let center = self.world_to_screen(shape.center, rect);
        let r = shape.radius as f32 * self.zoom;
        painter.circle(
            center,
            r,
            Self::to_color32(shape.color),
            outline.unwrap_or(egui::Stroke::NONE),
        );
    }
}

impl App for Viewer {
    /// eframe callback that builds all UI panels for each frame.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.ui_top_panel(ctx);
        self.ui_status_bar(ctx);
        self.ui_config_panel(ctx);
        self.ui_central_panel(ctx);
    }
}
