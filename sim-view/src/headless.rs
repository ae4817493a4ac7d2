//! Windowless driver: runs the simulation for a fixed number of ticks and
//! logs progress.

use glam::DVec2;
use tracing::info;

use cell_core::{CellShape, Simulation, canvas::Canvas};

/// A canvas that draws nothing and logs a population summary every
/// `report_every` ticks.
pub struct LogCanvas {
    size: DVec2,
    report_every: u64,
}

impl LogCanvas {
    pub fn new(size: DVec2, report_every: u64) -> Self {
        Self {
            size,
            report_every: report_every.max(1),
        }
    }
}

impl Canvas for LogCanvas {
    fn size(&self) -> DVec2 {
        self.size
    }

    fn present(&mut self, tick: u64, shapes: &[CellShape]) {
        if tick % self.report_every != 0 {
            return;
        }
        let live: Vec<&CellShape> = shapes.iter().filter(|s| s.radius > 0.0).collect();
        let largest = live.iter().map(|s| s.radius).fold(0.0, f64::max);
        info!(tick, live = live.len(), largest, "progress");
    }
}

/// Runs `ticks` ticks, stopping early once at most one live cell remains.
pub fn run(mut sim: Simulation, ticks: u64, report_every: u64) {
    let mut canvas = LogCanvas::new(sim.canvas_size(), report_every);
    let ran = sim.run(&mut canvas, Some(ticks), |report| report.live_cells <= 1);
    info!(
        ran,
        live = sim.live_count(),
        total_area = sim.total_area(),
        "headless run complete"
    );
}
