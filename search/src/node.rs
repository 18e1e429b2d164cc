//! Search nodes and the owning node arena.
//!
//! Every node created during a run stays alive in the arena until the run
//! ends: path reconstruction walks parent links arbitrarily far back, so
//! ancestors are never reclaimed early. Parent references are arena
//! handles, not owning pointers — the search structure is a tree (duplicate
//! states are filtered before linking), so handle walks cannot cycle.

use npuzzle_board::{Board, Direction};

/// Handle into a [`NodeArena`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(u32);

impl NodeId {
    /// The arena index this handle refers to.
    #[must_use]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// An immutable search node.
///
/// Invariant: for any non-root node, `board` differs from the parent's
/// board in exactly the two cells swapped by `incoming`, and
/// `depth == parent.depth + 1`.
#[derive(Debug, Clone)]
pub struct SearchNode {
    /// Handle of this node in the arena.
    pub id: NodeId,
    /// Parent handle (`None` for the root).
    pub parent: Option<NodeId>,
    /// The board configuration at this node.
    pub board: Board,
    /// Number of moves from the root (root = 0).
    pub depth: u32,
    /// The move applied to the parent to produce this node (`None` for
    /// the root).
    pub incoming: Option<Direction>,
}

/// Owning pool of every node created during one search run.
///
/// Nodes are appended and never removed; a `NodeId` stays valid for the
/// arena's lifetime.
#[derive(Debug, Default)]
pub struct NodeArena {
    nodes: Vec<SearchNode>,
}

impl NodeArena {
    /// Create an empty arena.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocate a node, returning its handle.
    ///
    /// # Panics
    ///
    /// Panics if the arena exceeds `u32::MAX` nodes, which is beyond any
    /// board this engine accepts.
    pub fn alloc(
        &mut self,
        parent: Option<NodeId>,
        board: Board,
        depth: u32,
        incoming: Option<Direction>,
    ) -> NodeId {
        let id = NodeId(u32::try_from(self.nodes.len()).expect("node arena overflow"));
        self.nodes.push(SearchNode {
            id,
            parent,
            board,
            depth,
            incoming,
        });
        id
    }

    /// Borrow the node behind a handle.
    ///
    /// # Panics
    ///
    /// Panics on a handle from a different arena that is out of range.
    #[must_use]
    pub fn get(&self, id: NodeId) -> &SearchNode {
        &self.nodes[id.index()]
    }

    /// Number of nodes allocated so far.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the arena is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}
