use gridpath_core::Coordinate;
use thiserror::Error;

/// Failure of a search.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SearchError {
    /// The open set ran empty before the goal was discovered.
    #[error("no path from {start} to {goal}")]
    PathNotFound { start: Coordinate, goal: Coordinate },
}

/// A stored path that does not describe a walk between adjacent cells.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PathError {
    #[error("path has no cells")]
    Empty,
    #[error("{from} and {to} are not adjacent")]
    Gap { from: Coordinate, to: Coordinate },
}
