use glam::DVec2;
use rand::Rng;

use crate::{cell::Cell, color::Color, config::Config};

/// Initial radii are whole numbers drawn from this range.
pub const MIN_INITIAL_RADIUS: f64 = 2.0;
pub const MAX_INITIAL_RADIUS: f64 = 6.0;

/// Creates one cell with a random size, color and heading centered at `center`.
pub fn random_cell_at(center: DVec2, rng: &mut impl Rng) -> Cell {
    let radius = random_radius(rng);
    let color = Color::random_pastel(rng);
    Cell::new(center, radius, color, rng)
}

/// Seeds `cfg.population_size` cells fully inside the canvas.
///
/// Each cell's bounding box is placed uniformly so that it never crosses
/// the right or bottom edge. Callers must pass a validated [`Config`].
pub fn populate(cfg: &Config, rng: &mut impl Rng) -> Vec<Cell> {
    (0..cfg.population_size)
        .map(|_| {
            let radius = random_radius(rng);
            let diameter = radius * 2.0;
            let corner = DVec2::new(
                rng.random_range(0.0..cfg.canvas_width - diameter),
                rng.random_range(0.0..cfg.canvas_height - diameter),
            );
            let color = Color::random_pastel(rng);
            Cell::new(corner + DVec2::splat(radius), radius, color, rng)
        })
        .collect()
}

fn random_radius(rng: &mut impl Rng) -> f64 {
    rng.random_range(MIN_INITIAL_RADIUS as u32..=MAX_INITIAL_RADIUS as u32) as f64
}
