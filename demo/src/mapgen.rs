//! Random obstacle maps.

use gridpath_core::{Cell, Coordinate, Grid};
use rand::Rng;

/// Map generator operating on a [`Grid`].
pub struct MapGen<R: Rng> {
    pub rng: R,
    pub grid: Grid,
}

impl<R: Rng> MapGen<R> {
    /// Create a new MapGen with the given grid.
    pub fn with_grid(grid: Grid, rng: R) -> Self {
        Self { rng, grid }
    }

    /// Block each cell independently with probability `density`
    /// (clamped to 0.0–1.0); every other cell becomes passable.
    ///
    /// Returns the number of blocked cells.
    pub fn scatter_obstacles(&mut self, density: f64) -> usize {
        let density = density.clamp(0.0, 1.0);
        let bounds = self.grid.bounds();
        for c in bounds.iter() {
            let cell = if self.rng.random_bool(density) {
                Cell::Blocked
            } else {
                Cell::Passable
            };
            self.grid.set(c, cell);
        }
        self.grid.count(Cell::Blocked)
    }

    /// Make sure the given cells are passable.
    pub fn keep_clear(&mut self, cells: &[Coordinate]) {
        for &c in cells {
            self.grid.set(c, Cell::Passable);
        }
    }

    pub fn into_grid(self) -> Grid {
        self.grid
    }
}
