//! Simulation configuration.
//!
//! Defaults reproduce the classic setup: 200 cells on an 800x800 canvas,
//! growing 0.02 per tick with a 10 ms frame delay.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, Result};
use crate::population::MAX_INITIAL_RADIUS;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Number of cells created when the simulation is (re)populated.
    pub population_size: usize,
    /// Radius added to every live cell each tick. May be negative.
    pub growth_per_tick: f64,
    /// Pause between frames when driven by [`crate::simulation::Simulation::run`].
    pub frame_delay_ms: u64,
    pub canvas_width: f64,
    pub canvas_height: f64,
    /// Fixed seed for reproducible runs; `None` seeds from the OS.
    pub seed: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            population_size: 200,
            growth_per_tick: 0.02,
            frame_delay_ms: 10,
            canvas_width: 800.0,
            canvas_height: 800.0,
            seed: None,
        }
    }
}

impl Config {
    pub fn from_toml_str(s: &str) -> Result<Self> {
        let cfg: Config = toml::from_str(s)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&contents)
    }

    /// Checks that a population can actually be seeded with these settings.
    ///
    /// The canvas must be strictly larger than the biggest initial cell in
    /// both dimensions, otherwise there is no valid spawn position.
    pub fn validate(&self) -> Result<()> {
        let min_extent = MAX_INITIAL_RADIUS * 2.0;
        let fits = |v: f64| v.is_finite() && v > min_extent;
        if !fits(self.canvas_width) || !fits(self.canvas_height) {
            return Err(ConfigError::CanvasTooSmall {
                width: self.canvas_width,
                height: self.canvas_height,
                min_extent,
            });
        }
        if !self.growth_per_tick.is_finite() {
            return Err(ConfigError::InvalidGrowth(self.growth_per_tick));
        }
        Ok(())
    }
}
