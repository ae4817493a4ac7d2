//! Command line arguments layered over the TOML configuration.

use std::path::PathBuf;

use clap::Parser;

use cell_core::{Config, error::ConfigError};

/// Circles wander around a canvas and absorb each other on contact.
#[derive(Parser, Debug)]
#[command(name = "cell_absorption", version)]
pub struct Args {
    /// TOML config file; missing fields use defaults.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Number of cells to create.
    #[arg(short, long)]
    pub population: Option<usize>,

    /// Radius added to every live cell per tick.
    #[arg(short, long)]
    pub growth: Option<f64>,

    /// Seed for a reproducible run.
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Run without a window, logging progress instead.
    #[arg(long)]
    pub headless: bool,

    /// Stop a headless run after this many ticks.
    #[arg(long, default_value_t = 1000)]
    pub ticks: u64,

    /// Log a summary every N ticks in headless mode.
    #[arg(long, default_value_t = 100)]
    pub report_every: u64,
}

impl Args {
    /// Defaults, then the config file, then command line overrides.
    pub fn resolve_config(&self) -> Result<Config, ConfigError> {
        let mut cfg = match &self.config {
            Some(path) => Config::load(path)?,
            None => Config::default(),
        };
        if let Some(n) = self.population {
            cfg.population_size = n;
        }
        if let Some(g) = self.growth {
            cfg.growth_per_tick = g;
        }
        if self.seed.is_some() {
            cfg.seed = self.seed;
        }
        cfg.validate()?;
        Ok(cfg)
    }
}
