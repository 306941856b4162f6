//! Application entry point for the Lorenz attractor viewer.
//!
//! This binary parses the command line, sets up logging and eframe/egui,
//! and delegates all interactive logic and rendering to [`Viewer`].

mod camera;
mod ticker;
mod viewer;

use clap::Parser;
use lorenz_core::Config;
use std::{error::Error, path::PathBuf};
use tracing::info;
use tracing_subscriber::EnvFilter;
use viewer::Viewer;

/// Interactive 3D view of the Lorenz attractor.
#[derive(Parser, Debug)]
#[command(name = "lorenz-view", version, about)]
struct Args {
    /// YAML scenario file with `initial_x/y/z` and `time_step`.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Initial x, overriding the scenario.
    #[arg(long, allow_negative_numbers = true)]
    x0: Option<f64>,

    /// Initial y, overriding the scenario.
    #[arg(long, allow_negative_numbers = true)]
    y0: Option<f64>,

    /// Initial z, overriding the scenario.
    #[arg(long, allow_negative_numbers = true)]
    z0: Option<f64>,

    /// Integration time step, overriding the scenario. 0 means 1.
    #[arg(long, allow_negative_numbers = true)]
    dt: Option<f64>,

    /// Milliseconds between simulation ticks.
    #[arg(long, default_value_t = 1.0)]
    tick_ms: f64,

    /// Start with the simulation paused.
    #[arg(long)]
    paused: bool,
}

impl Args {
    /// Loads the scenario file (or the default one) and applies overrides.
    fn scenario(&self) -> Result<Config, Box<dyn Error>> {
        let mut cfg = match &self.config {
            Some(path) => Config::from_yaml_file(path)?,
            None => Config::default(),
        };

        if let Some(x) = self.x0 {
            cfg.initial_x = x;
        }
        if let Some(y) = self.y0 {
            cfg.initial_y = y;
        }
        if let Some(z) = self.z0 {
            cfg.initial_z = z;
        }
        if let Some(dt) = self.dt {
            cfg.time_step = dt;
        }
        Ok(cfg)
    }
}

/// Starts the native eframe application.
///
/// ### Returns
/// - `Ok(())` if the application runs to completion without errors.
/// - `Err` if the scenario cannot be loaded or eframe fails to create the
///   native window or event loop.
fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();
    let cfg = args.scenario()?;
    let tick_interval = args.tick_ms / 1000.0;
    let running = !args.paused;

    info!(?cfg, tick_ms = args.tick_ms, running, "starting lorenz viewer");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1024.0, 768.0])
            .with_title("Lorenz Attractor"),
        ..Default::default()
    };

    eframe::run_native(
        "Lorenz Attractor",
        options,
        Box::new(move |_cc| Ok(Box::new(Viewer::new(cfg, tick_interval, running)))),
    )?;

    Ok(())
}
