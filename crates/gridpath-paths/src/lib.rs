//! A* shortest-path search on occupancy grids.
//!
//! Movement is 8-directional. Axis-aligned steps cost [`AXIAL_COST`] and
//! diagonal steps cost [`DIAGONAL_COST`]; a diagonal step is only allowed
//! when both axis-aligned cells it passes between are passable. The
//! heuristic is the Manhattan distance scaled by [`AXIAL_COST`].
//!
//! - [`PathFinder`] runs one search, step by step or to completion.
//! - [`find_path`] is the one-call shortcut.
//! - [`Path`] holds the result and can mark itself back onto a map.
//!
//! # Map traits
//!
//! | Trait | Used for |
//! |---|---|
//! | [`Passability`] | every search query |
//! | [`PathMarker`] | [`Path::mark_on`] |
//!
//! Both are implemented for [`gridpath_core::Grid`].

mod distance;
mod error;
mod finder;
mod neighbors;
mod node;
mod path;
mod traits;

pub use distance::{AXIAL_COST, DIAGONAL_COST, manhattan, step_cost};
pub use error::{PathError, SearchError};
pub use finder::{PathFinder, SearchState, SearchStats, find_path};
pub use neighbors::Neighbors;
pub use node::{NodeId, SearchNode};
pub use path::Path;
pub use traits::{PassableFn, Passability, PathMarker};
