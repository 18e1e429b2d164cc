//! Typed board validation errors.
//!
//! `BoardError` covers malformed input grids only. An unsolvable board is
//! NOT an error — the engine exhausts its reachable component and reports
//! that as a normal outcome.

/// Typed failure for board construction and validation.
///
/// Returned before any search work begins; the engine fails fast on a
/// malformed grid rather than proceeding into undefined move behavior.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    /// The flat tile list does not have a perfect-square length.
    NotSquare { tile_count: usize },
    /// The board side exceeds the supported maximum of 16.
    SideTooLarge { side: usize },
    /// A tile value is duplicated or outside `0..n²`.
    NotAPermutation { value: u8 },
}

impl std::fmt::Display for BoardError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotSquare { tile_count } => {
                write!(f, "tile count {tile_count} is not a perfect square")
            }
            Self::SideTooLarge { side } => {
                write!(f, "board side {side} exceeds the supported maximum of 16")
            }
            Self::NotAPermutation { value } => {
                write!(f, "tile value {value} is duplicated or out of range")
            }
        }
    }
}

impl std::error::Error for BoardError {}
