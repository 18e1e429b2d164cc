//! Canonical board keys for duplicate detection.
//!
//! The key is the flattened row-major tile sequence itself, so two boards
//! are key-equal exactly when their grids are identical — injective for
//! every valid permutation grid, with no digest in between. Keys are for
//! set membership only; they carry no ordering meaning.

use crate::tiles::{Board, Tiles};

/// Injective canonical encoding of a board's tile arrangement.
///
/// Independent of how the board was reached: equal grids produce equal
/// keys regardless of move history.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BoardKey(Tiles);

impl BoardKey {
    /// The encoded tile bytes, row-major.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }
}

impl Board {
    /// Canonical key of this board's tile arrangement.
    #[must_use]
    pub fn key(&self) -> BoardKey {
        BoardKey(Tiles::from_slice(self.tiles()))
    }
}
