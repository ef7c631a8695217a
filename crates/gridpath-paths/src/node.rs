use std::cmp::Ordering;

use gridpath_core::Coordinate;

use crate::distance::{AXIAL_COST, manhattan};

/// Handle of a [`SearchNode`] inside a search's node arena.
///
/// Handles are handed out in discovery order, so comparing two handles
/// tells which node was discovered first.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    /// Position of the node in the arena.
    #[inline]
    pub fn index(self) -> usize {
        self.0
    }
}

/// A cell discovered by the search.
///
/// `f = g + h` is never stored: `g` can be lowered while the node is open,
/// so [`f`](SearchNode::f) always recomputes it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchNode {
    coordinate: Coordinate,
    g: u32,
    h: u32,
    parent: Option<NodeId>,
}

impl SearchNode {
    /// A node at `coordinate` with `g = 0`, `h = 0` and no parent.
    pub fn new(coordinate: Coordinate) -> Self {
        Self {
            coordinate,
            g: 0,
            h: 0,
            parent: None,
        }
    }

    /// Set `h` to the scaled Manhattan distance to `goal`.
    ///
    /// Recomputing against the same goal yields the same value.
    #[inline]
    pub fn compute_heuristic(&mut self, goal: Coordinate) {
        self.h = AXIAL_COST.saturating_mul(manhattan(self.coordinate, goal));
    }

    #[inline]
    pub fn set_g(&mut self, g: u32) {
        self.g = g;
    }

    #[inline]
    pub fn set_parent(&mut self, parent: Option<NodeId>) {
        self.parent = parent;
    }

    #[inline]
    pub fn coordinate(&self) -> Coordinate {
        self.coordinate
    }

    /// Cost of the best known path from the start.
    #[inline]
    pub fn g(&self) -> u32 {
        self.g
    }

    /// Estimated remaining cost to the goal.
    #[inline]
    pub fn h(&self) -> u32 {
        self.h
    }

    /// Total estimated cost through this node.
    #[inline]
    pub fn f(&self) -> u32 {
        self.g.saturating_add(self.h)
    }

    /// Predecessor on the best known path; `None` for the start node.
    #[inline]
    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }
}

/// Heap entry for an open node, ordered so `BinaryHeap` pops the lowest
/// `f` first, then the lowest `h`, then the earliest discovered node.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct OpenEntry {
    pub(crate) f: u32,
    pub(crate) h: u32,
    pub(crate) id: NodeId,
}

impl OpenEntry {
    #[inline]
    pub(crate) fn of(id: NodeId, node: &SearchNode) -> Self {
        Self {
            f: node.f(),
            h: node.h(),
            id,
        }
    }
}

impl Ord for OpenEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed: BinaryHeap is a max-heap.
        other
            .f
            .cmp(&self.f)
            .then_with(|| other.h.cmp(&self.h))
            .then_with(|| other.id.cmp(&self.id))
    }
}

impl PartialOrd for OpenEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BinaryHeap;

    #[test]
    fn new_node_defaults() {
        let n = SearchNode::new(Coordinate::new(3, 4));
        assert_eq!(n.g(), 0);
        assert_eq!(n.h(), 0);
        assert_eq!(n.parent(), None);
        assert_eq!(n.coordinate(), Coordinate::new(3, 4));
    }

    #[test]
    fn heuristic_is_scaled_manhattan() {
        let mut n = SearchNode::new(Coordinate::new(1, 1));
        n.compute_heuristic(Coordinate::new(8, 38));
        assert_eq!(n.h(), 10 * (7 + 37));
    }

    #[test]
    fn heuristic_is_idempotent() {
        let goal = Coordinate::new(-2, 5);
        let mut n = SearchNode::new(Coordinate::new(4, 1));
        n.compute_heuristic(goal);
        let first = n.h();
        n.set_g(42);
        n.compute_heuristic(goal);
        assert_eq!(n.h(), first);
    }

    #[test]
    fn f_follows_g_updates() {
        let mut n = SearchNode::new(Coordinate::new(0, 0));
        n.compute_heuristic(Coordinate::new(0, 3));
        n.set_g(28);
        assert_eq!(n.f(), 58);
        n.set_g(20);
        assert_eq!(n.f(), 50);
    }

    #[test]
    fn heap_pops_lowest_f_then_h_then_oldest() {
        let mut heap = BinaryHeap::new();
        heap.push(OpenEntry { f: 50, h: 20, id: NodeId(0) });
        heap.push(OpenEntry { f: 40, h: 30, id: NodeId(1) });
        heap.push(OpenEntry { f: 40, h: 10, id: NodeId(3) });
        heap.push(OpenEntry { f: 40, h: 10, id: NodeId(2) });
        let order: Vec<usize> = std::iter::from_fn(|| heap.pop())
            .map(|e| e.id.index())
            .collect();
        assert_eq!(order, vec![2, 3, 1, 0]);
    }
}
