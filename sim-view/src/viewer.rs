//! Interactive 3D Lorenz attractor viewer built with eframe/egui.
//!
//! This module defines [`Viewer`], which owns the integrator, the orbit
//! camera and the rendered markers, and implements [`eframe::App`] to
//! draw the scene and expose run controls.

use crate::{camera::OrbitCamera, ticker::Ticker};
use eframe::App;
use glam::DVec3;
use lorenz_core::{Config, LorenzAttractor};
use tracing::{error, info};

/// World-space radius of a point marker.
const MARKER_RADIUS: f64 = 0.1;
/// Markers never shrink below this many pixels.
const MIN_MARKER_PX: f32 = 0.75;
const MARKER_COLOR: egui::Color32 = egui::Color32::from_rgb(3, 252, 240);
/// Upper bound on simulation ticks run inside one frame.
const MAX_TICKS_PER_FRAME: u32 = 200;

/// Main application state for the interactive viewer.
///
/// [`Viewer`] glues together:
/// - The simulation core: a [`LorenzAttractor`] built from a [`Config`].
/// - A [`Ticker`] that schedules `next()` calls on a fixed cadence,
///   independent of how often frames are drawn.
/// - An [`OrbitCamera`] used to project the markers.
///
/// The typical per-frame update is:
/// 1. Handle UI interactions (buttons, drag to orbit, scroll to zoom).
/// 2. If `running` is `true`, run every tick the [`Ticker`] reports as due.
/// 3. Advance camera auto-rotation and draw all markers.
///
/// ### Fields
/// - `cfg` - Scenario the integrator is (re)built from.
/// - `attractor` - The integrator producing points. Its trajectory doubles
///   as the marker list, see [`Viewer::markers`].
///
/// - `ticker` - Simulation tick scheduler.
/// - `camera` - Orbit camera used for projection.
///
/// - `running` - Whether the simulation is currently auto-advancing.
/// - `last_error` - Message of the last integrator failure, if any.
/// - `last_frame_time` - egui time stamp of the previous frame.
pub struct Viewer {
    cfg: Config,
    attractor: LorenzAttractor,

    ticker: Ticker,
    camera: OrbitCamera,

    running: bool,
    last_error: Option<String>,
    last_frame_time: Option<f64>,
}

impl Viewer {
    /// Creates a viewer for the given scenario.
    ///
    /// ### Parameters
    /// - `cfg` - Initial point and time step of the integrator.
    /// - `tick_interval` - Seconds between simulation ticks.
    /// - `running` - Whether to start advancing immediately.
    pub fn new(cfg: Config, tick_interval: f64, running: bool) -> Self {
        Self {
            cfg,
            attractor: LorenzAttractor::from_config(&cfg),
            ticker: Ticker::new(tick_interval, MAX_TICKS_PER_FRAME),
            camera: OrbitCamera::default(),
            running,
            last_error: None,
            last_frame_time: None,
        }
    }

    /// Builds a fresh integrator from the scenario and clears the scene.
    fn restart(&mut self) {
        self.attractor = LorenzAttractor::from_config(&self.cfg);
        self.last_error = None;
        self.ticker.restart();
        info!(cfg = ?self.cfg, "restarted simulation");
    }

    /// Resets the integrator in place and clears the scene.
    ///
    /// The integrator is left without a trajectory, so the next tick fails
    /// until [`Viewer::restart`] is used.
    fn reset(&mut self) {
        self.attractor.reset();
        self.ticker.restart();
    }

    /// Points placed in the scene: every point returned by `next()` since
    /// the integrator was built. The seed point is not drawn, and a reset
    /// integrator has none.
    fn markers(&self) -> &[DVec3] {
        self.attractor.trajectory().get(1..).unwrap_or(&[])
    }

    /// Advances the integrator once, which places a marker at the new point.
    ///
    /// On failure the error is logged, shown in the status bar and the
    /// simulation is paused.
    ///
    /// ### Returns
    /// `true` if a point was produced.
    fn step_once(&mut self) -> bool {
        match self.attractor.next() {
            Ok(_) => true,
            Err(err) => {
                error!(%err, "integrator failed to advance");
                self.last_error = Some(err.to_string());
                self.running = false;
                false
            }
        }
    }

    /// Runs every simulation tick due at time `now`.
    fn run_due_ticks(&mut self, now: f64) {
        let due = self.ticker.due(now);
        for _ in 0..due {
            if !self.step_once() {
                break;
            }
        }
    }

    /// Builds the top panel UI (run controls, tick rate, camera toggles).
    fn ui_top_panel(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            ui.horizontal(|ui| {
                if ui
                    .button(if self.running { "⏸ Pause" } else { "▶ Run" })
                    .clicked()
                {
                    self.running = !self.running;
                    self.ticker.restart();
                }

                let mut tick_ms = self.ticker.interval * 1000.0;
                if ui
                    .add(
                        egui::DragValue::new(&mut tick_ms)
                            .prefix("tick = ")
                            .suffix(" ms")
                            .range(1.0..=1000.0)
                            .speed(1.0),
                    )
                    .changed()
                {
                    self.ticker.interval = tick_ms / 1000.0;
                }

                if ui.button("Step").clicked() {
                    self.step_once();
                }

                if ui.button("Reset").clicked() {
                    self.reset();
                }

                if ui.button("Restart").clicked() {
                    self.restart();
                }

                ui.separator();
                ui.checkbox(&mut self.camera.auto_rotate, "Auto-rotate");
            });
        });
    }

    /// Builds the bottom status bar (time, point count, last error).
    fn ui_status_bar(&self, ctx: &egui::Context) {
        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.label(format!("t = {:.3}", self.attractor.elapsed_time()));
                ui.label(format!("dt = {}", self.attractor.time_step()));
                ui.separator();
                ui.label(format!("points = {}", self.attractor.trajectory().len()));
                if let Some(p) = self.attractor.last_point() {
                    ui.label(format!("last = ({:.3}, {:.3}, {:.3})", p.x, p.y, p.z));
                }
                if let Some(err) = &self.last_error {
                    ui.separator();
                    ui.colored_label(egui::Color32::LIGHT_RED, err.as_str());
                }
            });
        });
    }

    /// Builds the central panel where the markers are drawn.
    fn ui_central_panel(&mut self, ctx: &egui::Context) {
        egui::CentralPanel::default()
            .frame(egui::Frame::new().fill(egui::Color32::BLACK))
            .show(ctx, |ui| {
                let response =
                    ui.allocate_response(ui.available_size(), egui::Sense::click_and_drag());
                // The rect follows the window, so resizes are picked up here.
                let rect = response.rect;
                let painter = ui.painter_at(rect);

                if response.dragged() {
                    self.camera.orbit(response.drag_delta());
                }

                if response.hovered() {
                    let scroll = ui.ctx().input(|i| i.raw_scroll_delta.y);
                    if scroll != 0.0 {
                        self.camera.zoom(scroll);
                    }
                }

                let camera = &self.camera;
                for &p in self.markers() {
                    let Some((pos, depth)) = camera.project(p, rect) else {
                        continue;
                    };
                    if !rect.contains(pos) {
                        continue;
                    }
                    let r = camera
                        .screen_radius(MARKER_RADIUS, depth, rect)
                        .max(MIN_MARKER_PX);
                    painter.circle_filled(pos, r, MARKER_COLOR);
                }
            });
    }
}

impl App for Viewer {
    /// eframe callback that advances the simulation and draws each frame.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let now = ctx.input(|i| i.time);
        let frame_dt = self.last_frame_time.map_or(0.0, |last| now - last);
        self.last_frame_time = Some(now);

        if self.running {
            self.run_due_ticks(now);
        }
        self.camera.update(frame_dt);

        self.ui_top_panel(ctx);
        self.ui_status_bar(ctx);
        self.ui_central_panel(ctx);

        if self.running || self.camera.auto_rotate {
            ctx.request_repaint();
        }
    }
}
