//! Crossterm console rendering for gridpath maps.
//!
//! [`render`] prints a [`Grid`] row by row using its [`Glyphs`]. With colour
//! enabled, each cell state gets its own foreground colour from a
//! [`Palette`], so a marked path stands out from the floor around it.

use std::io::{self, Write};

use crossterm::{
    queue,
    style::{Color, Print, ResetColor, SetForegroundColor},
};

use gridpath_core::{Cell, Glyphs, Grid};

/// Foreground colours for each [`Cell`] state.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Palette {
    pub passable: Color,
    pub blocked: Color,
    pub path: Color,
}

impl Palette {
    /// Colour for `cell`.
    #[inline]
    pub fn color(&self, cell: Cell) -> Color {
        match cell {
            Cell::Passable => self.passable,
            Cell::Blocked => self.blocked,
            Cell::Path => self.path,
        }
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            passable: Color::Reset,
            blocked: Color::DarkGrey,
            path: Color::Green,
        }
    }
}

/// How [`render`] draws a grid.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct RenderOptions {
    pub glyphs: Glyphs,
    /// Emit ANSI colour sequences.
    pub color: bool,
    pub palette: Palette,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            glyphs: Glyphs::default(),
            color: true,
            palette: Palette::default(),
        }
    }
}

impl RenderOptions {
    /// Plain text output with the given glyphs.
    pub fn plain(glyphs: Glyphs) -> Self {
        Self {
            glyphs,
            color: false,
            ..Self::default()
        }
    }
}

/// Write `grid` to `out`, one line per row.
pub fn render<W: Write>(out: &mut W, grid: &Grid, opts: &RenderOptions) -> io::Result<()> {
    for row in grid.rows() {
        if !opts.color {
            let line: String = row.iter().map(|&c| opts.glyphs.glyph(c)).collect();
            writeln!(out, "{line}")?;
            continue;
        }

        let mut last = None;
        for &cell in row {
            let color = opts.palette.color(cell);
            // Only switch colour at run boundaries.
            if last != Some(color) {
                queue!(out, SetForegroundColor(color))?;
                last = Some(color);
            }
            queue!(out, Print(opts.glyphs.glyph(cell)))?;
        }
        queue!(out, ResetColor, Print('\n'))?;
    }
    out.flush()
}
