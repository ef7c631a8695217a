//! Geometry primitives: [`Coordinate`] and [`Range`].
//!
//! Coordinates are `(row, col)` pairs. Rows grow downward and columns grow
//! to the right, matching the order in which a textual map is read.

use std::fmt;
use std::ops::{Add, Sub};
use std::str::FromStr;

use thiserror::Error;

// ---------------------------------------------------------------------------
// Coordinate
// ---------------------------------------------------------------------------

/// A 2D integer grid coordinate.
///
/// Coordinates may lie outside any grid; bounds are only checked by the
/// grid that is asked about them.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Coordinate {
    pub row: i32,
    pub col: i32,
}

impl Coordinate {
    /// Origin (0, 0).
    pub const ZERO: Self = Self { row: 0, col: 0 };

    /// Create a new coordinate.
    #[inline]
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Return a coordinate shifted by (drow, dcol), clamped to the `i32`
    /// range on each axis.
    #[inline]
    pub const fn shift(self, drow: i32, dcol: i32) -> Self {
        Self {
            row: self.row.saturating_add(drow),
            col: self.col.saturating_add(dcol),
        }
    }

    /// Whether `other` is one of the eight cells touching `self`.
    #[inline]
    pub fn is_adjacent(self, other: Coordinate) -> bool {
        let (dr, dc) = (self.row.abs_diff(other.row), self.col.abs_diff(other.col));
        (dr, dc) != (0, 0) && dr <= 1 && dc <= 1
    }

    /// Whether the step from `self` to `other` changes both axes by one.
    #[inline]
    pub fn is_diagonal_step(self, other: Coordinate) -> bool {
        self.row.abs_diff(other.row) == 1 && self.col.abs_diff(other.col) == 1
    }
}

impl PartialOrd for Coordinate {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Coordinate {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.row.cmp(&other.row).then(self.col.cmp(&other.col))
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl Add for Coordinate {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.row + rhs.row, self.col + rhs.col)
    }
}

impl Sub for Coordinate {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.row - rhs.row, self.col - rhs.col)
    }
}

impl From<(i32, i32)> for Coordinate {
    #[inline]
    fn from((row, col): (i32, i32)) -> Self {
        Self::new(row, col)
    }
}

/// Error returned when a `row,col` string cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseCoordinateError {
    #[error("expected `row,col`, got {0:?}")]
    Format(String),
    #[error("invalid {axis} value {value:?}")]
    Axis { axis: &'static str, value: String },
}

impl FromStr for Coordinate {
    type Err = ParseCoordinateError;

    /// Parse the `row,col` form, e.g. `"8, 38"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (row, col) = s
            .split_once(',')
            .ok_or_else(|| ParseCoordinateError::Format(s.to_string()))?;
        let axis = |axis: &'static str, value: &str| {
            value
                .trim()
                .parse::<i32>()
                .map_err(|_| ParseCoordinateError::Axis {
                    axis,
                    value: value.trim().to_string(),
                })
        };
        Ok(Self::new(axis("row", row)?, axis("col", col)?))
    }
}

// ---------------------------------------------------------------------------
// Range
// ---------------------------------------------------------------------------

/// A half-open rectangle \[min, max). `min` is inclusive, `max` is exclusive.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Range {
    pub min: Coordinate,
    pub max: Coordinate,
}

impl Range {
    /// Create a new range from two corners and canonicalize so that
    /// `min` ≤ `max` on each axis.
    #[inline]
    pub fn new(row0: i32, col0: i32, row1: i32, col1: i32) -> Self {
        Self {
            min: Coordinate::new(row0.min(row1), col0.min(col1)),
            max: Coordinate::new(row0.max(row1), col0.max(col1)),
        }
    }

    /// The range covering a `width` × `height` grid anchored at the origin.
    #[inline]
    pub fn with_size(width: i32, height: i32) -> Self {
        Self::new(0, 0, height.max(0), width.max(0))
    }

    /// Number of columns.
    #[inline]
    pub fn width(self) -> i32 {
        self.max.col - self.min.col
    }

    /// Number of rows.
    #[inline]
    pub fn height(self) -> i32 {
        self.max.row - self.min.row
    }

    /// Total number of cells in the range.
    #[inline]
    pub fn len(self) -> usize {
        if self.is_empty() {
            return 0;
        }
        (self.width() as usize) * (self.height() as usize)
    }

    /// Whether the range has zero or negative area.
    #[inline]
    pub fn is_empty(self) -> bool {
        self.min.row >= self.max.row || self.min.col >= self.max.col
    }

    /// Whether `c` is inside the half-open range.
    #[inline]
    pub fn contains(self, c: Coordinate) -> bool {
        c.row >= self.min.row
            && c.row < self.max.row
            && c.col >= self.min.col
            && c.col < self.max.col
    }

    /// Flat row-major index of `c`, or `None` outside the range.
    #[inline]
    pub fn index(self, c: Coordinate) -> Option<usize> {
        if !self.contains(c) {
            return None;
        }
        let row = (c.row - self.min.row) as usize;
        let col = (c.col - self.min.col) as usize;
        Some(row * self.width() as usize + col)
    }

    /// Row-major iterator over every coordinate in the range.
    #[inline]
    pub fn iter(self) -> RangeIter {
        RangeIter {
            range: self,
            cur: self.min,
        }
    }
}

impl IntoIterator for Range {
    type Item = Coordinate;
    type IntoIter = RangeIter;
    #[inline]
    fn into_iter(self) -> RangeIter {
        self.iter()
    }
}

impl fmt::Display for Range {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}-{})", self.min, self.max)
    }
}

// ---------------------------------------------------------------------------
// RangeIter
// ---------------------------------------------------------------------------

/// Row-major iterator over the coordinates in a [`Range`].
#[derive(Clone, Debug)]
pub struct RangeIter {
    range: Range,
    cur: Coordinate,
}

impl Iterator for RangeIter {
    type Item = Coordinate;

    #[inline]
    fn next(&mut self) -> Option<Coordinate> {
        if self.cur.row >= self.range.max.row || self.range.is_empty() {
            return None;
        }
        let c = self.cur;
        self.cur.col += 1;
        if self.cur.col >= self.range.max.col {
            self.cur.col = self.range.min.col;
            self.cur.row += 1;
        }
        Some(c)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.range.index(self.cur).map_or(0, |i| self.range.len() - i);
        (n, Some(n))
    }
}

impl ExactSizeIterator for RangeIter {}
