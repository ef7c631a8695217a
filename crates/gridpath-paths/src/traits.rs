use gridpath_core::{Coordinate, Grid};

/// Read-only map interface used by the search.
pub trait Passability {
    /// Whether a walker may stand on `c`. Must be `false` outside the map.
    fn is_passable(&self, c: Coordinate) -> bool;
}

/// Map interface for writing a found path back.
pub trait PathMarker {
    /// Record that `c` lies on the found path.
    fn mark_path(&mut self, c: Coordinate);
}

impl Passability for Grid {
    #[inline]
    fn is_passable(&self, c: Coordinate) -> bool {
        Grid::is_passable(self, c)
    }
}

impl PathMarker for Grid {
    #[inline]
    fn mark_path(&mut self, c: Coordinate) {
        Grid::mark_path(self, c)
    }
}

/// Adapts a predicate into a [`Passability`] map.
pub struct PassableFn<F>(pub F);

impl<F: Fn(Coordinate) -> bool> Passability for PassableFn<F> {
    #[inline]
    fn is_passable(&self, c: Coordinate) -> bool {
        (self.0)(c)
    }
}
