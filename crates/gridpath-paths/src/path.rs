use gridpath_core::Coordinate;

use crate::error::PathError;
use crate::traits::PathMarker;

/// A path reconstructed from parent links.
///
/// Coordinates are stored in the order they were collected, from the goal
/// back to the start. The path is never empty and consecutive cells are
/// adjacent; deserializing checks both.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "PathRepr", into = "PathRepr")
)]
pub struct Path {
    coords: Vec<Coordinate>,
    cost: u32,
}

impl Path {
    pub(crate) fn new(coords: Vec<Coordinate>, cost: u32) -> Self {
        debug_assert!(!coords.is_empty());
        Self { coords, cost }
    }

    /// Number of cells on the path, both endpoints included.
    #[inline]
    pub fn len(&self) -> usize {
        self.coords.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.coords.is_empty()
    }

    /// Total move cost from start to goal.
    #[inline]
    pub fn cost(&self) -> u32 {
        self.cost
    }

    #[inline]
    pub fn goal(&self) -> Option<Coordinate> {
        self.coords.first().copied()
    }

    #[inline]
    pub fn start(&self) -> Option<Coordinate> {
        self.coords.last().copied()
    }

    /// Coordinates from the goal back to the start.
    #[inline]
    pub fn goal_to_start(&self) -> &[Coordinate] {
        &self.coords
    }

    /// Coordinates from the start to the goal.
    pub fn start_to_goal(&self) -> impl DoubleEndedIterator<Item = Coordinate> + '_ {
        self.coords.iter().rev().copied()
    }

    /// Mark every cell of the path on `target`.
    pub fn mark_on<M: PathMarker + ?Sized>(&self, target: &mut M) {
        for &c in &self.coords {
            target.mark_path(c);
        }
    }

    /// Check that the path is a walk of single steps.
    pub fn validate(&self) -> Result<(), PathError> {
        if self.coords.is_empty() {
            return Err(PathError::Empty);
        }
        match self.coords.windows(2).find(|w| !w[0].is_adjacent(w[1])) {
            Some(w) => Err(PathError::Gap {
                from: w[0],
                to: w[1],
            }),
            None => Ok(()),
        }
    }
}

#[cfg(feature = "serde")]
#[derive(serde::Serialize, serde::Deserialize)]
struct PathRepr {
    coords: Vec<Coordinate>,
    cost: u32,
}

#[cfg(feature = "serde")]
impl From<Path> for PathRepr {
    fn from(p: Path) -> Self {
        Self {
            coords: p.coords,
            cost: p.cost,
        }
    }
}

#[cfg(feature = "serde")]
impl TryFrom<PathRepr> for Path {
    type Error = PathError;

    fn try_from(r: PathRepr) -> Result<Self, Self::Error> {
        let path = Path {
            coords: r.coords,
            cost: r.cost,
        };
        path.validate()?;
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gridpath_core::{Cell, Grid};

    fn sample() -> Path {
        Path::new(
            vec![
                Coordinate::new(2, 2),
                Coordinate::new(1, 1),
                Coordinate::new(0, 0),
            ],
            28,
        )
    }

    #[test]
    fn endpoints_and_order() {
        let p = sample();
        assert_eq!(p.len(), 3);
        assert_eq!(p.goal(), Some(Coordinate::new(2, 2)));
        assert_eq!(p.start(), Some(Coordinate::new(0, 0)));
        let forward: Vec<_> = p.start_to_goal().collect();
        assert_eq!(forward[0], Coordinate::new(0, 0));
        assert_eq!(forward[2], Coordinate::new(2, 2));
    }

    #[test]
    fn mark_on_grid() {
        let mut g = Grid::new(3, 3);
        sample().mark_on(&mut g);
        assert_eq!(g.count(Cell::Path), 3);
        assert_eq!(g.at(Coordinate::new(1, 1)), Some(Cell::Path));
        assert_eq!(g.at(Coordinate::new(0, 1)), Some(Cell::Passable));
    }

    #[test]
    fn validate_catches_gaps() {
        assert_eq!(sample().validate(), Ok(()));
        let gap = Path {
            coords: vec![Coordinate::new(0, 3), Coordinate::new(0, 0)],
            cost: 30,
        };
        assert_eq!(
            gap.validate(),
            Err(PathError::Gap {
                from: Coordinate::new(0, 3),
                to: Coordinate::new(0, 0)
            })
        );
        let empty = Path {
            coords: Vec::new(),
            cost: 0,
        };
        assert_eq!(empty.validate(), Err(PathError::Empty));
    }
}
