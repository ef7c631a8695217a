//! Command-line arguments of the `gridpath` binary.

use std::path::PathBuf;
use std::str::FromStr;

use clap::{Parser, ValueEnum};
use gridpath_core::{Coordinate, Glyphs};

/// Find a path across a grid map with A*.
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Map layout file, one row per line. Defaults to the built-in map.
    #[arg(long, conflicts_with = "random")]
    pub map: Option<PathBuf>,

    /// Generate a random map of the given size instead, e.g. `30x12`.
    #[arg(long, value_name = "WIDTHxHEIGHT")]
    pub random: Option<MapSize>,

    /// Share of blocked cells in a random map.
    #[arg(long, default_value_t = 0.25)]
    pub density: f64,

    /// Fix the RNG seed of a random map (e.g. `--seed 12345`).
    #[arg(long, requires = "random")]
    pub seed: Option<u64>,

    /// Start cell as `ROW,COL`.
    #[arg(long, allow_hyphen_values = true)]
    pub start: Option<Coordinate>,

    /// Goal cell as `ROW,COL`.
    #[arg(long, allow_hyphen_values = true)]
    pub goal: Option<Coordinate>,

    /// Passable, blocked and path glyphs, in that order.
    #[arg(long, default_value = "*#o")]
    pub glyphs: GlyphSet,

    #[arg(long, value_enum, default_value_t = Format::Text)]
    pub format: Format,

    /// Disable coloured output.
    #[arg(long)]
    pub no_color: bool,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Format {
    /// The map before and after, then the path length.
    Text,
    /// One JSON object with the path and search statistics.
    Json,
}

/// Map dimensions parsed from `WIDTHxHEIGHT`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MapSize {
    pub width: i32,
    pub height: i32,
}

impl FromStr for MapSize {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (w, h) = s
            .split_once(['x', 'X'])
            .ok_or_else(|| format!("expected WIDTHxHEIGHT, got {s:?}"))?;
        let dim = |v: &str| match v.trim().parse::<i32>() {
            Ok(n) if n > 0 => Ok(n),
            _ => Err(format!("invalid dimension {v:?}")),
        };
        Ok(Self {
            width: dim(w)?,
            height: dim(h)?,
        })
    }
}

/// Three distinct glyph characters.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GlyphSet(pub Glyphs);

impl FromStr for GlyphSet {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let chars: Vec<char> = s.chars().collect();
        let [pass, block, path] = chars[..] else {
            return Err(format!("expected three characters, got {s:?}"));
        };
        if pass == block || pass == path || block == path {
            return Err(format!("glyphs must be distinct, got {s:?}"));
        }
        if [pass, block, path].iter().any(|c| c.is_whitespace()) {
            return Err("glyphs must not be whitespace".to_string());
        }
        Ok(Self(Glyphs::new(pass, block, path)))
    }
}
