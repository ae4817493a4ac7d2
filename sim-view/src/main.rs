//! Application entry point for the cell absorption viewer.
//!
//! This binary loads the configuration, sets up logging, and either opens
//! the eframe/egui [`Viewer`] or drives the simulation headless through
//! [`headless::LogCanvas`].

mod cli;
mod error;
mod headless;
mod viewer;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use cell_core::Simulation;
use cli::Args;
use error::AppError;
use viewer::Viewer;

const DEFAULT_LOG_FILTER: &str = "cell_absorption=info,cell_core=info";

/// Starts the viewer, or a bounded headless run with `--headless`.
///
/// ### Returns
/// - `Ok(())` when the window is closed or the headless run finishes.
/// - `Err` if the configuration is invalid or eframe fails to start.
fn main() -> Result<(), AppError> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
        )
        .init();

    let args = Args::parse();
    let cfg = args.resolve_config()?;
    tracing::info!(?cfg, "configuration loaded");

    let sim = Simulation::new(cfg)?;

    if args.headless {
        headless::run(sim, args.ticks, args.report_every);
        return Ok(());
    }

    let canvas = sim.canvas_size();
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Cell Absorption")
            .with_inner_size([canvas.x as f32 + 240.0, canvas.y as f32 + 80.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Cell Absorption",
        options,
        Box::new(|_cc| Ok(Box::new(Viewer::new(sim)))),
    )?;
    Ok(())
}
