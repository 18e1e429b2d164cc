//! Frontier management: the open set, the visited registry, and the
//! high-water mark, owned together so duplicate filtering can never be
//! bypassed.
//!
//! Visited-marking happens at push time, not at pop time. Marking on pop
//! would let the same state be enqueued twice via two different parents
//! before either copy is expanded, which blows up the fringe.

use std::collections::VecDeque;

use npuzzle_board::BoardKey;
use rustc_hash::FxHashSet;

use crate::node::NodeId;
use crate::strategy::Strategy;

/// The open set of discovered-but-not-yet-expanded nodes.
///
/// Holds node handles, not nodes — the arena owns the nodes. Discipline
/// is FIFO for breadth-first and LIFO for depth-first; either way the
/// visited registry is global to the run and monotonically growing.
#[derive(Debug)]
pub struct Frontier {
    queue: VecDeque<NodeId>,
    visited: FxHashSet<BoardKey>,
    strategy: Strategy,
    high_water: usize,
}

impl Frontier {
    /// Create an empty frontier with the given discipline.
    #[must_use]
    pub fn new(strategy: Strategy) -> Self {
        Self {
            queue: VecDeque::new(),
            visited: FxHashSet::default(),
            strategy,
            high_water: 0,
        }
    }

    /// Push a node handle, marking its board key as visited.
    ///
    /// Returns `false` if the key was already visited (handle not added).
    pub fn push(&mut self, key: BoardKey, id: NodeId) -> bool {
        if !self.visited.insert(key) {
            return false;
        }
        self.queue.push_back(id);
        if self.queue.len() > self.high_water {
            self.high_water = self.queue.len();
        }
        true
    }

    /// Pop the next node handle under this frontier's discipline:
    /// oldest-first for breadth-first, newest-first for depth-first.
    pub fn pop(&mut self) -> Option<NodeId> {
        match self.strategy {
            Strategy::BreadthFirst => self.queue.pop_front(),
            Strategy::DepthFirst => self.queue.pop_back(),
        }
    }

    /// Check whether a board key has been visited.
    #[must_use]
    pub fn is_visited(&self, key: &BoardKey) -> bool {
        self.visited.contains(key)
    }

    /// Current open-set size.
    #[must_use]
    pub fn len(&self) -> usize {
        self.queue.len()
    }

    /// Whether the open set is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    /// High-water mark of the open-set size.
    #[must_use]
    pub fn high_water(&self) -> usize {
        self.high_water
    }

    /// Number of distinct board keys ever pushed.
    #[must_use]
    pub fn visited_len(&self) -> usize {
        self.visited.len()
    }
}
