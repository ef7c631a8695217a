//! **gridpath-core**: occupancy grids and coordinates.
//!
//! This crate provides the types shared across the *gridpath* workspace:
//! `(row, col)` coordinates, half-open ranges, the [`Cell`] states of a map,
//! and the fixed-size [`Grid`] with its textual layout format.

pub mod cell;
pub mod geom;
pub mod grid;

pub use cell::{Cell, Glyphs};
pub use geom::{Coordinate, ParseCoordinateError, Range};
pub use grid::{Grid, LayoutError};
