//! A* search as an explicit state machine.
//!
//! A [`PathFinder`] is built for one start/goal pair and driven either one
//! iteration at a time with [`step`](PathFinder::step) or to completion with
//! [`run`](PathFinder::run). Each iteration selects the open node with the
//! lowest `f = g + h`, closes it, and relaxes its neighbors. The search
//! succeeds as soon as the goal is *discovered*, not when it is expanded.

use std::collections::{BinaryHeap, HashMap};

use gridpath_core::Coordinate;
use log::{debug, trace};

use crate::distance::step_cost;
use crate::error::SearchError;
use crate::neighbors::Neighbors;
use crate::node::{NodeId, OpenEntry, SearchNode};
use crate::path::Path;
use crate::traits::Passability;

/// Where a search stands.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SearchState {
    Running,
    /// The goal entered the open set and a path was reconstructed.
    Succeeded,
    /// The open set ran empty without reaching the goal.
    Failed,
}

impl SearchState {
    #[inline]
    pub fn is_terminal(self) -> bool {
        self != SearchState::Running
    }
}

/// Counters collected while searching.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchStats {
    /// Nodes moved from open to closed.
    pub expanded: usize,
    /// Nodes created, the start node included.
    pub discovered: usize,
    /// Open nodes whose `g` was lowered through a better parent.
    pub improved: usize,
}

/// A* search between two coordinates of a [`Passability`] map.
///
/// Nodes live in an arena and refer to their parents by [`NodeId`]. The open
/// set is a coordinate-keyed map backed by a binary heap; improved nodes are
/// pushed again and outdated heap entries are skipped when popped.
///
/// A finder is single-use: once it reaches a terminal state further calls
/// report the same outcome. Build a new finder for a new search.
pub struct PathFinder<'a, P: Passability + ?Sized> {
    map: &'a P,
    start: Coordinate,
    goal: Coordinate,
    nodes: Vec<SearchNode>,
    open: HashMap<Coordinate, NodeId>,
    heap: BinaryHeap<OpenEntry>,
    closed: HashMap<Coordinate, NodeId>,
    current: Option<NodeId>,
    state: SearchState,
    path: Option<Path>,
    stats: SearchStats,
    nbuf: Neighbors,
}

impl<'a, P: Passability + ?Sized> PathFinder<'a, P> {
    /// Prepare a search from `start` to `goal` on `map`.
    ///
    /// The start node is placed in the open set with `g = 0` whether or not
    /// its cell is passable; validating the endpoints is up to the caller.
    /// When `start == goal` the finder is already [`SearchState::Succeeded`]
    /// with the one-cell path.
    pub fn new(map: &'a P, start: Coordinate, goal: Coordinate) -> Self {
        let mut finder = Self {
            map,
            start,
            goal,
            nodes: Vec::new(),
            open: HashMap::new(),
            heap: BinaryHeap::new(),
            closed: HashMap::new(),
            current: None,
            state: SearchState::Running,
            path: None,
            stats: SearchStats::default(),
            nbuf: Neighbors::new(),
        };

        let mut node = SearchNode::new(start);
        node.compute_heuristic(goal);
        node.set_g(0);
        let id = finder.insert_open(node);
        debug!("astar: searching {start} -> {goal}");

        if start == goal {
            finder.succeed(id);
        }
        finder
    }

    /// Perform one select/expand/relax iteration and return the new state.
    ///
    /// Does nothing once the search has finished.
    pub fn step(&mut self) -> SearchState {
        if self.state.is_terminal() {
            return self.state;
        }

        let Some(id) = self.pop_min() else {
            self.fail();
            return self.state;
        };

        let coord = self.nodes[id.0].coordinate();
        self.open.remove(&coord);
        self.closed.insert(coord, id);
        self.current = Some(id);
        self.stats.expanded += 1;
        trace!(
            "astar: expand {coord} g={} h={}",
            self.nodes[id.0].g(),
            self.nodes[id.0].h()
        );

        let map = self.map;
        let mut nbuf = std::mem::take(&mut self.nbuf);
        for &nc in nbuf.candidates(coord, map) {
            self.relax(id, nc);
        }
        self.nbuf = nbuf;

        if let Some(&goal_id) = self.open.get(&self.goal) {
            self.succeed(goal_id);
        } else if self.open.is_empty() {
            self.fail();
        }
        self.state
    }

    /// Search until success or exhaustion.
    pub fn run(&mut self) -> Result<&Path, SearchError> {
        while !self.step().is_terminal() {}
        self.path.as_ref().ok_or(SearchError::PathNotFound {
            start: self.start,
            goal: self.goal,
        })
    }

    /// Consume the finder and return the found path.
    pub fn into_path(mut self) -> Result<Path, SearchError> {
        self.run()?;
        self.path.take().ok_or(SearchError::PathNotFound {
            start: self.start,
            goal: self.goal,
        })
    }

    #[inline]
    pub fn state(&self) -> SearchState {
        self.state
    }

    #[inline]
    pub fn start(&self) -> Coordinate {
        self.start
    }

    #[inline]
    pub fn goal(&self) -> Coordinate {
        self.goal
    }

    /// The path, once the search has succeeded.
    #[inline]
    pub fn path(&self) -> Option<&Path> {
        self.path.as_ref()
    }

    #[inline]
    pub fn stats(&self) -> SearchStats {
        self.stats
    }

    /// Coordinate of the node expanded most recently.
    #[inline]
    pub fn current(&self) -> Option<Coordinate> {
        self.current.map(|id| self.nodes[id.0].coordinate())
    }

    #[inline]
    pub fn is_open(&self, c: Coordinate) -> bool {
        self.open.contains_key(&c)
    }

    #[inline]
    pub fn is_closed(&self, c: Coordinate) -> bool {
        self.closed.contains_key(&c)
    }

    #[inline]
    pub fn open_len(&self) -> usize {
        self.open.len()
    }

    #[inline]
    pub fn closed_len(&self) -> usize {
        self.closed.len()
    }

    /// The node discovered at `c`, open or closed.
    pub fn node(&self, c: Coordinate) -> Option<&SearchNode> {
        self.open
            .get(&c)
            .or_else(|| self.closed.get(&c))
            .map(|id| &self.nodes[id.0])
    }

    // -----------------------------------------------------------------------
    // Internals
    // -----------------------------------------------------------------------

    fn insert_open(&mut self, node: SearchNode) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.open.insert(node.coordinate(), id);
        self.heap.push(OpenEntry::of(id, &node));
        self.nodes.push(node);
        self.stats.discovered += 1;
        id
    }

    /// Pop the open node with the lowest `f`, skipping outdated entries.
    fn pop_min(&mut self) -> Option<NodeId> {
        while let Some(entry) = self.heap.pop() {
            let node = &self.nodes[entry.id.0];
            let live = self.open.get(&node.coordinate()) == Some(&entry.id);
            if live && node.f() == entry.f {
                return Some(entry.id);
            }
        }
        None
    }

    fn relax(&mut self, current: NodeId, nc: Coordinate) {
        if !self.map.is_passable(nc) || self.closed.contains_key(&nc) {
            return;
        }
        let from = &self.nodes[current.0];
        let candidate_g = from.g().saturating_add(step_cost(from.coordinate(), nc));

        match self.open.get(&nc).copied() {
            None => {
                let mut node = SearchNode::new(nc);
                node.set_g(candidate_g);
                node.compute_heuristic(self.goal);
                node.set_parent(Some(current));
                self.insert_open(node);
            }
            Some(id) => {
                let node = &mut self.nodes[id.0];
                if candidate_g < node.g() {
                    node.set_g(candidate_g);
                    node.set_parent(Some(current));
                    self.heap.push(OpenEntry::of(id, node));
                    self.stats.improved += 1;
                }
            }
        }
    }

    fn succeed(&mut self, goal_id: NodeId) {
        let mut coords = Vec::new();
        let mut cursor = Some(goal_id);
        while let Some(id) = cursor {
            let node = &self.nodes[id.0];
            coords.push(node.coordinate());
            cursor = node.parent();
        }
        let path = Path::new(coords, self.nodes[goal_id.0].g());
        debug!(
            "astar: found {} -> {} in {} cells, cost {}, {:?}",
            self.start,
            self.goal,
            path.len(),
            path.cost(),
            self.stats
        );
        self.path = Some(path);
        self.state = SearchState::Succeeded;
    }

    fn fail(&mut self) {
        debug!(
            "astar: no path {} -> {}, {:?}",
            self.start, self.goal, self.stats
        );
        self.state = SearchState::Failed;
    }
}

/// Find a path from `start` to `goal` on `map` in one call.
pub fn find_path<P: Passability + ?Sized>(
    map: &P,
    start: Coordinate,
    goal: Coordinate,
) -> Result<Path, SearchError> {
    PathFinder::new(map, start, goal).into_path()
}
