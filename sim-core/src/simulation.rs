//! The simulation driver: owns the cells and the random source.

use std::time::Duration;

use glam::DVec2;
use rand::{SeedableRng, rngs::StdRng};
use tracing::{debug, info};

use crate::{
    canvas::Canvas,
    cell::{Cell, CellShape},
    config::Config,
    error::Result,
    phases, population,
    types::{Absorption, CellId},
};

/// Summary of one completed tick.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TickReport {
    /// Number of ticks completed so far, including this one.
    pub tick: u64,
    pub absorptions: Vec<Absorption>,
    pub live_cells: usize,
}

#[derive(Debug)]
pub struct Simulation {
    cfg: Config,
    cells: Vec<Cell>,
    canvas_size: DVec2,
    rng: StdRng,
    tick: u64,
}

impl Simulation {
    /// Validates `cfg` and seeds a fresh population.
    pub fn new(cfg: Config) -> Result<Self> {
        cfg.validate()?;
        let mut rng = match cfg.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        let cells = population::populate(&cfg, &mut rng);
        info!(
            cells = cells.len(),
            seed = ?cfg.seed,
            "populated simulation"
        );
        Ok(Self::from_parts(cfg, cells, rng))
    }

    /// Uses the given cells instead of a random population.
    ///
    /// The config is used as-is; only the canvas size and growth rate matter.
    pub fn with_cells(cfg: Config, cells: Vec<Cell>) -> Self {
        let rng = StdRng::seed_from_u64(cfg.seed.unwrap_or_default());
        Self::from_parts(cfg, cells, rng)
    }

    fn from_parts(cfg: Config, cells: Vec<Cell>, rng: StdRng) -> Self {
        let canvas_size = DVec2::new(cfg.canvas_width, cfg.canvas_height);
        Self {
            cfg,
            cells,
            canvas_size,
            rng,
            tick: 0,
        }
    }

    pub fn config(&self) -> &Config {
        &self.cfg
    }

    /// Mutable access for settings that apply immediately, such as the
    /// growth rate. Population settings take effect on [`Simulation::reset`].
    pub fn config_mut(&mut self) -> &mut Config {
        &mut self.cfg
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn tick(&self) -> u64 {
        self.tick
    }

    pub fn canvas_size(&self) -> DVec2 {
        self.canvas_size
    }

    pub fn set_canvas_size(&mut self, size: DVec2) {
        self.canvas_size = size;
    }

    /// The point every cell wanders toward: the middle of the canvas.
    pub fn center_of_gravity(&self) -> DVec2 {
        self.canvas_size / 2.0
    }

    pub fn shapes(&self) -> impl Iterator<Item = CellShape> + '_ {
        self.cells.iter().map(Cell::shape)
    }

    pub fn live_count(&self) -> usize {
        self.cells.iter().filter(|c| !c.is_inert()).count()
    }

    pub fn total_area(&self) -> f64 {
        self.cells.iter().map(Cell::area).sum()
    }

    pub fn largest_radius(&self) -> f64 {
        self.cells.iter().map(Cell::radius).fold(0.0, f64::max)
    }

    /// Adds a randomly sized cell at `center` and returns its id.
    pub fn spawn_cell_at(&mut self, center: DVec2) -> CellId {
        let id = self.cells.len();
        self.cells.push(population::random_cell_at(center, &mut self.rng));
        debug!(id, x = center.x, y = center.y, "spawned cell");
        id
    }

    /// Replaces the population with a new one drawn from the current config.
    ///
    /// Keeps consuming the same random stream, so a seeded simulation that is
    /// reset twice produces two different populations.
    pub fn reset(&mut self) -> Result<()> {
        self.cfg.validate()?;
        self.canvas_size = DVec2::new(self.cfg.canvas_width, self.cfg.canvas_height);
        self.cells = population::populate(&self.cfg, &mut self.rng);
        self.tick = 0;
        info!(cells = self.cells.len(), "reset simulation");
        Ok(())
    }

    /// Advances the simulation by one tick: move, grow, interact.
    pub fn step(&mut self) -> TickReport {
        let center_of_gravity = self.center_of_gravity();
        phases::move_phase(&mut self.cells, center_of_gravity, &mut self.rng);
        phases::growth_phase(&mut self.cells, self.cfg.growth_per_tick);
        let absorptions = phases::interaction_phase(&mut self.cells);

        self.tick += 1;
        let live_cells = self.live_count();
        debug!(
            tick = self.tick,
            absorptions = absorptions.len(),
            live_cells,
            "tick"
        );

        TickReport {
            tick: self.tick,
            absorptions,
            live_cells,
        }
    }

    /// Drives the simulation against `canvas` until `max_ticks` ticks have
    /// run or `should_stop` returns `true` for a tick's report.
    ///
    /// Each iteration reads the canvas size, steps, presents the new state
    /// and pauses for the configured frame delay. With `max_ticks = None`
    /// only `should_stop` ends the loop.
    ///
    /// ### Returns
    /// The number of ticks executed by this call.
    pub fn run<C: Canvas>(
        &mut self,
        canvas: &mut C,
        max_ticks: Option<u64>,
        mut should_stop: impl FnMut(&TickReport) -> bool,
    ) -> u64 {
        let delay = Duration::from_millis(self.cfg.frame_delay_ms);
        let mut ran = 0;

        while max_ticks.is_none_or(|max| ran < max) {
            self.set_canvas_size(canvas.size());
            let report = self.step();
            ran += 1;

            let shapes: Vec<CellShape> = self.shapes().collect();
            canvas.present(report.tick, &shapes);

            if should_stop(&report) {
                break;
            }
            canvas.pause(delay);
        }

        info!(ticks = ran, live_cells = self.live_count(), "run finished");
        ran
    }
}
