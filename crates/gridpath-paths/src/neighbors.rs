use gridpath_core::Coordinate;

use crate::traits::Passability;

/// Axis-aligned offsets in expansion order: up, down, left, right.
const AXIAL: [(i32, i32); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

/// Diagonal offsets in expansion order: up-left, up-right, down-left,
/// down-right.
const DIAGONAL: [(i32, i32); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];

/// Cached neighbor computation helper.
///
/// Produces the move candidates of a cell for 8-directional movement with
/// corner blocking. Passability of the candidates themselves is left to the
/// caller.
pub struct Neighbors {
    buf: Vec<Coordinate>,
}

impl Default for Neighbors {
    fn default() -> Self {
        Self::new()
    }
}

impl Neighbors {
    /// Create a new `Neighbors` helper.
    pub fn new() -> Self {
        Self {
            buf: Vec::with_capacity(8),
        }
    }

    /// Return the move candidates of `c`.
    ///
    /// The four axis-aligned neighbors are always returned. A diagonal
    /// neighbor is returned only when both axis-aligned cells flanking it
    /// are passable, so a path never squeezes between two blocked corners
    /// or around a single one.
    pub fn candidates<P: Passability + ?Sized>(&mut self, c: Coordinate, map: &P) -> &[Coordinate] {
        self.buf.clear();
        for (dr, dc) in AXIAL {
            self.buf.push(c.shift(dr, dc));
        }
        for (dr, dc) in DIAGONAL {
            if map.is_passable(c.shift(dr, 0)) && map.is_passable(c.shift(0, dc)) {
                self.buf.push(c.shift(dr, dc));
            }
        }
        &self.buf
    }
}
