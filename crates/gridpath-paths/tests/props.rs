use std::collections::{HashSet, VecDeque};

use gridpath_core::{Cell, Coordinate, Grid};
use gridpath_paths::{Neighbors, PathFinder, SearchState};
use proptest::prelude::*;

/// Random grid plus two passable endpoints.
fn scenario() -> impl Strategy<Value = (Grid, Coordinate, Coordinate)> {
    (2i32..9, 2i32..9)
        .prop_flat_map(|(w, h)| {
            (
                Just((w, h)),
                proptest::collection::vec(prop::bool::weighted(0.3), (w * h) as usize),
                (0..h, 0..w, 0..h, 0..w),
            )
        })
        .prop_map(|((w, h), blocked, (sr, sc, gr, gc))| {
            let cells = blocked
                .into_iter()
                .map(|b| if b { Cell::Blocked } else { Cell::Passable })
                .collect();
            let mut grid = Grid::from_cells(w, h, cells).unwrap();
            let (start, goal) = (Coordinate::new(sr, sc), Coordinate::new(gr, gc));
            grid.set(start, Cell::Passable);
            grid.set(goal, Cell::Passable);
            (grid, start, goal)
        })
}

/// Flood fill under the same move rules as the search.
fn reachable(grid: &Grid, start: Coordinate) -> HashSet<Coordinate> {
    let mut seen = HashSet::from([start]);
    let mut queue = VecDeque::from([start]);
    let mut nbrs = Neighbors::new();
    while let Some(p) = queue.pop_front() {
        for &n in nbrs.candidates(p, grid) {
            if grid.is_passable(n) && seen.insert(n) {
                queue.push_back(n);
            }
        }
    }
    seen
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn success_iff_reachable((grid, start, goal) in scenario()) {
        let mut finder = PathFinder::new(&grid, start, goal);
        let found = finder.run().ok().cloned();
        let expected = reachable(&grid, start).contains(&goal);
        prop_assert_eq!(found.is_some(), expected);

        if let Some(path) = found {
            prop_assert_eq!(path.goal(), Some(goal));
            prop_assert_eq!(path.start(), Some(start));
            let cells: Vec<_> = path.start_to_goal().collect();
            for w in cells.windows(2) {
                let (a, b) = (w[0], w[1]);
                prop_assert!(a.is_adjacent(b));
                prop_assert!(grid.is_passable(b));
                if a.is_diagonal_step(b) {
                    prop_assert!(grid.is_passable(Coordinate::new(a.row, b.col)));
                    prop_assert!(grid.is_passable(Coordinate::new(b.row, a.col)));
                }
            }
        } else {
            prop_assert_eq!(finder.state(), SearchState::Failed);
            prop_assert_eq!(finder.open_len(), 0);
        }
    }

    #[test]
    fn path_cost_matches_steps((grid, start, goal) in scenario()) {
        if let Ok(path) = PathFinder::new(&grid, start, goal).into_path() {
            let cells: Vec<_> = path.start_to_goal().collect();
            let total: u32 = cells
                .windows(2)
                .map(|w| gridpath_paths::step_cost(w[0], w[1]))
                .sum();
            prop_assert_eq!(total, path.cost());
        }
    }

    #[test]
    fn closed_nodes_keep_their_g((grid, start, goal) in scenario()) {
        let mut finder = PathFinder::new(&grid, start, goal);
        let mut frozen: Vec<(Coordinate, u32)> = Vec::new();
        while !finder.step().is_terminal() {
            for &(p, g) in &frozen {
                prop_assert_eq!(finder.node(p).map(|n| n.g()), Some(g));
            }
            if let Some(cur) = finder.current() {
                if !frozen.iter().any(|(p, _)| *p == cur) {
                    frozen.push((cur, finder.node(cur).unwrap().g()));
                }
            }
        }
    }
}
