//! Machine-readable search result for `--format json`.

use gridpath_core::Coordinate;
use gridpath_paths::{Path, SearchStats};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    pub width: i32,
    pub height: i32,
    pub start: Coordinate,
    pub goal: Coordinate,
    pub found: bool,
    /// Start to goal; empty when no path was found.
    pub path: Vec<Coordinate>,
    pub length: usize,
    pub cost: Option<u32>,
    pub stats: SearchStats,
}

impl Report {
    pub fn new(
        (width, height): (i32, i32),
        (start, goal): (Coordinate, Coordinate),
        path: Option<&Path>,
        stats: SearchStats,
    ) -> Self {
        Self {
            width,
            height,
            start,
            goal,
            found: path.is_some(),
            path: path.map(|p| p.start_to_goal().collect()).unwrap_or_default(),
            length: path.map_or(0, Path::len),
            cost: path.map(Path::cost),
            stats,
        }
    }
}
