//! Driver for the `gridpath` binary: loads or generates a map, runs one
//! search and prints the outcome.

pub mod cli;
pub mod mapgen;
pub mod report;

use std::fs;
use std::io::Write;

use anyhow::{Context, Result, bail, ensure};
use gridpath_core::{Coordinate, Glyphs, Grid};
use gridpath_crossterm::{RenderOptions, render};
use gridpath_paths::PathFinder;
use log::info;
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::cli::{Cli, Format, MapSize};
use crate::mapgen::MapGen;
use crate::report::Report;

/// The built-in map, written with the default glyphs.
pub const DEFAULT_MAP: &str = include_str!("../maps/default.txt");

/// Endpoints used with the built-in map.
pub const DEFAULT_START: Coordinate = Coordinate::new(1, 1);
pub const DEFAULT_GOAL: Coordinate = Coordinate::new(8, 38);

/// Whether a search found a path.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    Found,
    NotFound,
}

/// Run one search as configured by `cli`, writing all output to `out`.
pub fn run<W: Write>(cli: &Cli, color: bool, out: &mut W) -> Result<Outcome> {
    let glyphs = cli.glyphs.0;
    let (mut grid, default_ends) = load_grid(cli, &glyphs)?;
    let start = cli.start.unwrap_or(default_ends.0);
    let goal = cli.goal.unwrap_or(default_ends.1);
    check_endpoint(&grid, start, "start")?;
    check_endpoint(&grid, goal, "goal")?;

    info!(
        "map {}x{}, searching {start} -> {goal}",
        grid.width(),
        grid.height()
    );
    let (path, stats) = {
        let mut finder = PathFinder::new(&grid, start, goal);
        let path = finder.run().ok().cloned();
        (path, finder.stats())
    };

    match cli.format {
        Format::Json => {
            let report = Report::new(
                (grid.width(), grid.height()),
                (start, goal),
                path.as_ref(),
                stats,
            );
            serde_json::to_writer_pretty(&mut *out, &report)?;
            writeln!(out)?;
        }
        Format::Text => {
            let opts = RenderOptions {
                glyphs,
                color,
                ..RenderOptions::default()
            };
            render(out, &grid, &opts)?;
            writeln!(out, "A* search {start} -> {goal}:")?;
            match &path {
                Some(p) => {
                    p.mark_on(&mut grid);
                    render(out, &grid, &opts)?;
                    writeln!(out, "path length: {} (cost {})", p.len(), p.cost())?;
                }
                None => writeln!(out, "no path found")?,
            }
        }
    }

    Ok(match path {
        Some(_) => Outcome::Found,
        None => Outcome::NotFound,
    })
}

/// Build the grid the CLI asks for, plus the endpoints to use when none
/// are given.
fn load_grid(cli: &Cli, glyphs: &Glyphs) -> Result<(Grid, (Coordinate, Coordinate))> {
    if let Some(path) = &cli.map {
        let text = fs::read_to_string(path)
            .with_context(|| format!("reading map {}", path.display()))?;
        let grid = Grid::parse(&text, glyphs)
            .with_context(|| format!("parsing map {}", path.display()))?;
        let ends = corners(&grid);
        return Ok((grid, ends));
    }

    if let Some(size) = cli.random {
        let grid = random_grid(size, cli)?;
        let ends = corners(&grid);
        return Ok((grid, ends));
    }

    let grid = Grid::parse(DEFAULT_MAP, &Glyphs::default()).context("parsing built-in map")?;
    Ok((grid, (DEFAULT_START, DEFAULT_GOAL)))
}

fn random_grid(size: MapSize, cli: &Cli) -> Result<Grid> {
    ensure!(
        (0.0..=1.0).contains(&cli.density),
        "density must be between 0 and 1, got {}",
        cli.density
    );
    let grid = Grid::new(size.width, size.height);
    let keep: Vec<Coordinate> = [cli.start, cli.goal]
        .into_iter()
        .flatten()
        .chain([corners(&grid).0, corners(&grid).1])
        .collect();

    let rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_rng(&mut rand::rng()),
    };
    let mut mg = MapGen::with_grid(grid, rng);
    let blocked = mg.scatter_obstacles(cli.density);
    mg.keep_clear(&keep);
    info!(
        "random map {}x{}: {blocked} cells blocked before clearing endpoints",
        size.width, size.height
    );
    Ok(mg.into_grid())
}

/// Top-left and bottom-right cells of `grid`.
fn corners(grid: &Grid) -> (Coordinate, Coordinate) {
    (
        Coordinate::ZERO,
        Coordinate::new(grid.height() - 1, grid.width() - 1),
    )
}

fn check_endpoint(grid: &Grid, c: Coordinate, name: &str) -> Result<()> {
    if !grid.contains(c) {
        bail!(
            "{name} {c} is outside the {}x{} map",
            grid.width(),
            grid.height()
        );
    }
    if !grid.is_passable(c) {
        bail!("{name} {c} is blocked");
    }
    Ok(())
}
