//! Strategy selection: frontier discipline and child ordering.

use npuzzle_board::Direction;

use crate::error::SearchError;

/// The uninformed traversal strategy for one search run.
///
/// Both strategies share the same expansion loop; a strategy only decides
/// which end of the frontier is popped and in which order children are
/// pushed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    /// FIFO frontier. Visits states in non-decreasing depth order, so the
    /// first goal dequeued is at minimum depth and the returned path is
    /// shortest in move count.
    BreadthFirst,
    /// LIFO frontier with a global visited registry: a visited-guarded
    /// graph search, not classical tree DFS. Deterministic but not
    /// guaranteed to return a shortest path.
    DepthFirst,
}

impl Strategy {
    /// The order in which child moves are attempted during expansion.
    ///
    /// Breadth-first enqueues children in `Up, Down, Left, Right` order.
    /// Depth-first pushes in the reversed order `Right, Left, Down, Up` so
    /// that LIFO pops still visit children in `Up, Down, Left, Right`
    /// priority. The reversed sequence is the tie-break policy: changing
    /// it changes which depth-first solution is returned when several
    /// exist at the same expansion count.
    #[must_use]
    pub fn expansion_order(self) -> [Direction; 4] {
        match self {
            Self::BreadthFirst => Direction::ALL,
            Self::DepthFirst => [
                Direction::Right,
                Direction::Left,
                Direction::Down,
                Direction::Up,
            ],
        }
    }

    /// The CLI token for this strategy.
    #[must_use]
    pub fn token(self) -> &'static str {
        match self {
            Self::BreadthFirst => "bfs",
            Self::DepthFirst => "dfs",
        }
    }
}

impl std::str::FromStr for Strategy {
    type Err = SearchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "bfs" => Ok(Self::BreadthFirst),
            "dfs" => Ok(Self::DepthFirst),
            other => Err(SearchError::UnknownStrategy { name: other.into() }),
        }
    }
}
