//! The [`Grid`] type: a fixed-size occupancy map of [`Cell`]s.
//!
//! A grid is built once, either blank with [`Grid::new`] or from a textual
//! layout with [`Grid::parse`], and never changes size afterwards. Searches
//! only read it through [`Grid::is_passable`]; the driver writes a found
//! path back with [`Grid::mark_path`].

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::cell::{Cell, Glyphs};
use crate::geom::{Coordinate, Range};

/// Error produced while reading a textual layout.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LayoutError {
    #[error("layout has no rows")]
    Empty,
    #[error("row {row} has {found} cells, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },
    #[error("unknown glyph {glyph:?} at ({row}, {col})")]
    UnknownGlyph { row: usize, col: usize, glyph: char },
    #[error("grid of {width}x{height} needs {expected} cells, found {found}")]
    CellCount {
        width: i32,
        height: i32,
        expected: usize,
        found: usize,
    },
}

/// A 2D grid of [`Cell`] values.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "GridRepr", into = "GridRepr")
)]
pub struct Grid {
    cells: Vec<Cell>,
    bounds: Range,
}

impl Grid {
    /// Create a new grid of the given dimensions with every cell passable.
    pub fn new(width: i32, height: i32) -> Self {
        let bounds = Range::with_size(width, height);
        Self {
            cells: vec![Cell::default(); bounds.len()],
            bounds,
        }
    }

    /// Build a grid from a textual layout, one line per row.
    ///
    /// Trailing blank lines and `\r` line endings are ignored. Every row
    /// must be as wide as the first one.
    pub fn parse(layout: &str, glyphs: &Glyphs) -> Result<Self, LayoutError> {
        let rows: Vec<&str> = layout
            .lines()
            .map(|l| l.trim_end_matches('\r'))
            .collect();
        let rows = match rows.iter().rposition(|l| !l.is_empty()) {
            Some(last) => &rows[..=last],
            None => return Err(LayoutError::Empty),
        };

        let width = rows[0].chars().count();
        let mut cells = Vec::with_capacity(width * rows.len());
        for (r, line) in rows.iter().enumerate() {
            let found = line.chars().count();
            if found != width {
                return Err(LayoutError::RaggedRow {
                    row: r,
                    expected: width,
                    found,
                });
            }
            for (c, ch) in line.chars().enumerate() {
                let cell = glyphs.cell(ch).ok_or(LayoutError::UnknownGlyph {
                    row: r,
                    col: c,
                    glyph: ch,
                })?;
                cells.push(cell);
            }
        }

        Ok(Self {
            cells,
            bounds: Range::with_size(width as i32, rows.len() as i32),
        })
    }

    /// Build a grid from row-major cells.
    pub fn from_cells(width: i32, height: i32, cells: Vec<Cell>) -> Result<Self, LayoutError> {
        let bounds = Range::with_size(width, height);
        if cells.len() != bounds.len() {
            return Err(LayoutError::CellCount {
                width,
                height,
                expected: bounds.len(),
                found: cells.len(),
            });
        }
        Ok(Self { cells, bounds })
    }

    /// The bounding range of this grid.
    #[inline]
    pub fn bounds(&self) -> Range {
        self.bounds
    }

    /// Number of columns.
    #[inline]
    pub fn width(&self) -> i32 {
        self.bounds.width()
    }

    /// Number of rows.
    #[inline]
    pub fn height(&self) -> i32 {
        self.bounds.height()
    }

    /// Whether `c` is inside the grid.
    #[inline]
    pub fn contains(&self, c: Coordinate) -> bool {
        self.bounds.contains(c)
    }

    /// Get the cell at `c`, or `None` if out of bounds.
    #[inline]
    pub fn at(&self, c: Coordinate) -> Option<Cell> {
        self.bounds.index(c).map(|i| self.cells[i])
    }

    /// Set the cell at `c`. Does nothing if out of bounds.
    pub fn set(&mut self, c: Coordinate, cell: Cell) {
        if let Some(i) = self.bounds.index(c) {
            self.cells[i] = cell;
        }
    }

    /// Whether `c` is inside the grid and not blocked.
    #[inline]
    pub fn is_passable(&self, c: Coordinate) -> bool {
        self.at(c).is_some_and(Cell::is_passable)
    }

    /// Mark `c` as lying on the found path. Does nothing if out of bounds.
    #[inline]
    pub fn mark_path(&mut self, c: Coordinate) {
        self.set(c, Cell::Path);
    }

    /// Turn every path marker back into a plain passable cell.
    pub fn clear_path(&mut self) {
        for cell in self.cells.iter_mut().filter(|c| **c == Cell::Path) {
            *cell = Cell::Passable;
        }
    }

    /// Count how many cells equal `cell`.
    pub fn count(&self, cell: Cell) -> usize {
        self.cells.iter().filter(|c| **c == cell).count()
    }

    /// Iterate over `(Coordinate, Cell)` pairs in row-major order.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = (Coordinate, Cell)> + '_ {
        self.bounds.iter().zip(self.cells.iter().copied())
    }

    /// Iterate over rows as slices of cells.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> + '_ {
        self.cells.chunks(self.width().max(1) as usize)
    }

    /// Render the grid back into the textual layout understood by
    /// [`parse`](Grid::parse).
    pub fn to_text(&self, glyphs: &Glyphs) -> String {
        let mut out = String::with_capacity(self.cells.len() + self.height() as usize);
        for row in self.rows() {
            out.extend(row.iter().map(|&c| glyphs.glyph(c)));
            out.push('\n');
        }
        out
    }
}

impl FromStr for Grid {
    type Err = LayoutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s, &Glyphs::default())
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_text(&Glyphs::default()))
    }
}

#[cfg(feature = "serde")]
#[derive(serde::Serialize, serde::Deserialize)]
struct GridRepr {
    width: i32,
    height: i32,
    cells: Vec<Cell>,
}

#[cfg(feature = "serde")]
impl From<Grid> for GridRepr {
    fn from(g: Grid) -> Self {
        Self {
            width: g.width(),
            height: g.height(),
            cells: g.cells,
        }
    }
}

#[cfg(feature = "serde")]
impl TryFrom<GridRepr> for Grid {
    type Error = LayoutError;

    fn try_from(r: GridRepr) -> Result<Self, Self::Error> {
        Grid::from_cells(r.width, r.height, r.cells)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const LAYOUT: &str = "\
#####
#***#
#*#*#
#***#
#####
";

    #[test]
    fn new_is_all_passable() {
        let g = Grid::new(4, 3);
        assert_eq!(g.width(), 4);
        assert_eq!(g.height(), 3);
        assert_eq!(g.count(Cell::Passable), 12);
        assert!(g.is_passable(Coordinate::new(2, 3)));
    }

    #[test]
    fn out_of_bounds_is_never_passable() {
        let g = Grid::new(4, 3);
        assert!(!g.is_passable(Coordinate::new(-1, 0)));
        assert!(!g.is_passable(Coordinate::new(0, -1)));
        assert!(!g.is_passable(Coordinate::new(3, 0)));
        assert!(!g.is_passable(Coordinate::new(0, 4)));
        assert_eq!(g.at(Coordinate::new(3, 0)), None);
    }

    #[test]
    fn set_and_at() {
        let mut g = Grid::new(4, 3);
        let c = Coordinate::new(1, 2);
        g.set(c, Cell::Blocked);
        assert_eq!(g.at(c), Some(Cell::Blocked));
        assert!(!g.is_passable(c));
        // out of bounds is ignored
        g.set(Coordinate::new(9, 9), Cell::Blocked);
        assert_eq!(g.count(Cell::Blocked), 1);
    }

    #[test]
    fn mark_and_clear_path() {
        let mut g = Grid::new(3, 3);
        g.mark_path(Coordinate::new(0, 0));
        g.mark_path(Coordinate::new(1, 1));
        assert_eq!(g.count(Cell::Path), 2);
        assert!(g.is_passable(Coordinate::new(1, 1)));
        g.clear_path();
        assert_eq!(g.count(Cell::Path), 0);
        assert_eq!(g.count(Cell::Passable), 9);
    }

    #[test]
    fn parse_layout() {
        let g: Grid = LAYOUT.parse().unwrap();
        assert_eq!(g.width(), 5);
        assert_eq!(g.height(), 5);
        assert_eq!(g.at(Coordinate::new(0, 0)), Some(Cell::Blocked));
        assert_eq!(g.at(Coordinate::new(1, 1)), Some(Cell::Passable));
        assert_eq!(g.at(Coordinate::new(2, 2)), Some(Cell::Blocked));
        assert_eq!(g.count(Cell::Passable), 8);
    }

    #[test]
    fn parse_and_print_round_trip() {
        let g: Grid = LAYOUT.parse().unwrap();
        assert_eq!(g.to_text(&Glyphs::default()), LAYOUT);
        assert_eq!(g.to_string(), LAYOUT);
    }

    #[test]
    fn parse_ignores_crlf_and_trailing_blank_lines() {
        let g: Grid = "*#\r\n#*\r\n\n\n".parse().unwrap();
        assert_eq!(g.height(), 2);
        assert_eq!(g.width(), 2);
        assert_eq!(g.at(Coordinate::new(1, 1)), Some(Cell::Passable));
    }

    #[test]
    fn parse_errors() {
        assert_eq!("".parse::<Grid>(), Err(LayoutError::Empty));
        assert_eq!("\n\n".parse::<Grid>(), Err(LayoutError::Empty));
        assert_eq!(
            "***\n**\n".parse::<Grid>(),
            Err(LayoutError::RaggedRow {
                row: 1,
                expected: 3,
                found: 2
            })
        );
        assert_eq!(
            "***\n*x*\n".parse::<Grid>(),
            Err(LayoutError::UnknownGlyph {
                row: 1,
                col: 1,
                glyph: 'x'
            })
        );
    }

    #[test]
    fn parse_with_custom_glyphs() {
        let glyphs = Glyphs::new('.', 'X', '@');
        let g = Grid::parse("..X\n@..\n", &glyphs).unwrap();
        assert_eq!(g.at(Coordinate::new(0, 2)), Some(Cell::Blocked));
        assert_eq!(g.at(Coordinate::new(1, 0)), Some(Cell::Path));
        assert_eq!(g.to_text(&glyphs), "..X\n@..\n");
    }

    #[test]
    fn from_cells_checks_length() {
        assert!(Grid::from_cells(2, 2, vec![Cell::Passable; 4]).is_ok());
        assert_eq!(
            Grid::from_cells(2, 2, vec![Cell::Passable; 3]),
            Err(LayoutError::CellCount {
                width: 2,
                height: 2,
                expected: 4,
                found: 3
            })
        );
    }

    #[test]
    fn iter_is_row_major() {
        let mut g = Grid::new(3, 2);
        g.set(Coordinate::new(1, 0), Cell::Blocked);
        let items: Vec<_> = g.iter().collect();
        assert_eq!(items.len(), 6);
        assert_eq!(items[3], (Coordinate::new(1, 0), Cell::Blocked));
        assert_eq!(g.rows().count(), 2);
    }
}
