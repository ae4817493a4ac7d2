//! Core library for the cell absorption simulation.
//!
//! Main components:
//! - [`cell`]: a single cell: wandering motion and pairwise absorption.
//! - [`phases`]: the move, growth and interaction passes of a tick.
//! - [`simulation`]: owns the population and drives ticks.
//! - [`population`]: random seeding of cells.
//! - [`canvas`]: the rendering collaborator used by [`simulation::Simulation::run`].
//! - [`config`]: simulation settings, loadable from TOML.
//! - [`color`]: cosmetic fill colors.
//! - [`error`]: configuration errors.
//! - [`types`]: shared ids and records.

pub mod canvas;
pub mod cell;
pub mod color;
pub mod config;
pub mod error;
pub mod phases;
pub mod population;
pub mod simulation;
pub mod types;

pub use cell::{Cell, CellShape};
pub use config::Config;
pub use simulation::{Simulation, TickReport};
