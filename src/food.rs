use std::collections::HashSet;

use rand::Rng;

use crate::config::GridSize;
use crate::geometry::Cell;

/// Food item currently on the board.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct Food {
    pub position: Cell,
}

impl Food {
    /// Creates food at a fixed `position`.
    #[must_use]
    pub fn at(position: Cell) -> Self {
        Self { position }
    }

    /// Creates food in a random cell outside `occupied`.
    #[must_use]
    pub fn spawn<R: Rng + ?Sized>(rng: &mut R, bounds: GridSize, occupied: &HashSet<Cell>) -> Self {
        Self::at(free_cell(rng, bounds, occupied))
    }

    /// Moves the food to a random cell outside `occupied`.
    ///
    /// Samples uniformly over the whole grid and re-rolls on hits, so
    /// `occupied` must leave at least one cell free or this never returns.
    pub fn relocate<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
        bounds: GridSize,
        occupied: &HashSet<Cell>,
    ) {
        self.position = free_cell(rng, bounds, occupied);
    }
}

fn free_cell<R: Rng + ?Sized>(rng: &mut R, bounds: GridSize, occupied: &HashSet<Cell>) -> Cell {
    debug_assert!(
        occupied.len() < bounds.total_cells(),
        "free_cell: no free cells on the board ({}×{})",
        bounds.width,
        bounds.height,
    );

    loop {
        let candidate = Cell::new(
            rng.gen_range(0..i32::from(bounds.width)),
            rng.gen_range(0..i32::from(bounds.height)),
        );
        if !occupied.contains(&candidate) {
            return candidate;
        }
    }
}
