/// Identifier for a cell in a [`crate::simulation::Simulation`].
///
/// This is an index into the simulation's cell list. Cells are never
/// removed, so an id stays valid until the population is reset.
pub type CellId = usize;

/// One absorption resolved during an interaction pass.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Absorption {
    pub winner: CellId,
    pub loser: CellId,
}
