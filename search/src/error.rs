//! Typed search errors.
//!
//! `SearchError` represents pre-flight failures only. Runtime outcomes
//! (goal found, reachable component exhausted) are expressed via
//! [`crate::report::Termination`] on a successfully returned
//! [`crate::report::SearchReport`] — an unsolvable board is not an error.

use npuzzle_board::BoardError;

/// Typed failure for pre-flight search validation.
///
/// These errors are returned before any exploration begins. No
/// `SearchReport` is produced because no search steps were taken.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    /// The initial grid is not a valid `n×n` permutation of `0..n²`.
    InvalidBoard(BoardError),
    /// The strategy selector names neither breadth-first nor depth-first.
    UnknownStrategy { name: String },
}

impl std::fmt::Display for SearchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidBoard(err) => write!(f, "invalid board: {err}"),
            Self::UnknownStrategy { name } => {
                write!(f, "unknown search strategy {name:?} (expected bfs or dfs)")
            }
        }
    }
}

impl std::error::Error for SearchError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidBoard(err) => Some(err),
            Self::UnknownStrategy { .. } => None,
        }
    }
}

impl From<BoardError> for SearchError {
    fn from(err: BoardError) -> Self {
        Self::InvalidBoard(err)
    }
}
