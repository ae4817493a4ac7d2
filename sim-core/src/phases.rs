//! Per-tick simulation phases.
//!
//! A tick runs, in order:
//! 1. [`move_phase`]: every cell steps forward and steers toward the
//!    center of gravity.
//! 2. [`growth_phase`]: every live cell grows by a fixed amount.
//! 3. [`interaction_phase`]: all pairs are resolved in place, larger cells
//!    absorbing smaller overlapping ones.

use glam::DVec2;
use rand::Rng;
use tracing::trace;

use crate::{
    cell::{Absorber, Cell, Interaction},
    types::Absorption,
};

/// Moves every cell once, in collection order.
///
/// Moves are independent of each other; the order only matters for which
/// random numbers each cell draws from `rng`.
pub fn move_phase(cells: &mut [Cell], center_of_gravity: DVec2, rng: &mut impl Rng) {
    for cell in cells.iter_mut() {
        cell.move_around(center_of_gravity, rng);
    }
}

/// Grows all live cells by `amount`.
///
/// Inert cells are skipped so that a fully absorbed cell stays at radius 0.
pub fn growth_phase(cells: &mut [Cell], amount: f64) {
    for cell in cells.iter_mut().filter(|c| !c.is_inert()) {
        cell.grow(amount);
    }
}

/// Resolves every unordered pair `(i, j)`, `i < j`, as
/// `cells[j].interact_with(cells[i])`.
///
/// Pairs are processed sequentially against the current radii, not a
/// snapshot: a cell that grew earlier in the pass uses its new radius for
/// later pairs, and a cell shrunk to zero drops out immediately. Absorption
/// chains can therefore cascade within a single pass.
///
/// ### Returns
/// Every absorption in the order it happened.
pub fn interaction_phase(cells: &mut [Cell]) -> Vec<Absorption> {
    let mut absorptions = Vec::new();

    for j in 1..cells.len() {
        let (head, tail) = cells.split_at_mut(j);
        let receiver = &mut tail[0];
        for (i, argument) in head.iter_mut().enumerate() {
            if let Interaction::Absorbed { by } = receiver.interact_with(argument) {
                let (winner, loser) = match by {
                    Absorber::Receiver => (j, i),
                    Absorber::Argument => (i, j),
                };
                trace!(winner, loser, "absorption");
                absorptions.push(Absorption { winner, loser });
            }
        }
    }

    absorptions
}
