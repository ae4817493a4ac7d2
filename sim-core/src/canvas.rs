//! Rendering collaborator driven by [`crate::simulation::Simulation::run`].

use std::time::Duration;

use glam::DVec2;

use crate::cell::CellShape;

/// A surface the simulation can draw onto once per tick.
///
/// Implementations own whatever drawable resources they need and rebuild
/// or update them from the snapshots passed to [`Canvas::present`].
pub trait Canvas {
    /// Current drawable width and height.
    fn size(&self) -> DVec2;

    /// Draws the state after tick number `tick`.
    fn present(&mut self, tick: u64, shapes: &[CellShape]);

    /// Waits between frames.
    fn pause(&mut self, delay: Duration) {
        if !delay.is_zero() {
            std::thread::sleep(delay);
        }
    }
}
