//! The [`Cell`] type and the [`Glyphs`] used to read and draw it.

/// State of one map cell.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Cell {
    #[default]
    Passable,
    Blocked,
    /// Passable cell that lies on a found path.
    Path,
}

impl Cell {
    /// Whether a walker may enter this cell.
    #[inline]
    pub const fn is_passable(self) -> bool {
        !matches!(self, Cell::Blocked)
    }
}

/// Characters used for each [`Cell`] in textual layouts and renderings.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Glyphs {
    pub passable: char,
    pub blocked: char,
    pub path: char,
}

impl Glyphs {
    /// Create a glyph set. The three characters should be distinct.
    pub const fn new(passable: char, blocked: char, path: char) -> Self {
        Self {
            passable,
            blocked,
            path,
        }
    }

    /// Character for `cell`.
    #[inline]
    pub const fn glyph(&self, cell: Cell) -> char {
        match cell {
            Cell::Passable => self.passable,
            Cell::Blocked => self.blocked,
            Cell::Path => self.path,
        }
    }

    /// Cell for `ch`, or `None` if `ch` is not one of the glyphs.
    #[inline]
    pub fn cell(&self, ch: char) -> Option<Cell> {
        if ch == self.passable {
            Some(Cell::Passable)
        } else if ch == self.blocked {
            Some(Cell::Blocked)
        } else if ch == self.path {
            Some(Cell::Path)
        } else {
            None
        }
    }
}

impl Default for Glyphs {
    fn default() -> Self {
        Self::new('*', '#', 'o')
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_blocked_is_impassable() {
        assert!(Cell::Passable.is_passable());
        assert!(Cell::Path.is_passable());
        assert!(!Cell::Blocked.is_passable());
    }

    #[test]
    fn glyph_lookup_both_ways() {
        let g = Glyphs::default();
        for cell in [Cell::Passable, Cell::Blocked, Cell::Path] {
            assert_eq!(g.cell(g.glyph(cell)), Some(cell));
        }
        assert_eq!(g.cell('?'), None);
    }

    #[test]
    fn custom_glyphs() {
        let g = Glyphs::new('.', 'X', '@');
        assert_eq!(g.cell('.'), Some(Cell::Passable));
        assert_eq!(g.cell('*'), None);
        assert_eq!(g.glyph(Cell::Path), '@');
    }
}
