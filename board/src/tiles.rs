//! Tile grid representation and move generation.
//!
//! A [`Board`] is immutable by convention: applying a move deep-copies the
//! tile grid and returns a new board, so a parent stays valid while any
//! number of its children are in flight.

use smallvec::SmallVec;

use crate::error::BoardError;

/// Largest supported board side. Tiles are stored as `u8`, so values must
/// fit in `0..=255`; a 16×16 board tops out at 255.
pub const MAX_SIDE: usize = 16;

/// Inline tile storage. 3×3 and 4×4 grids fit without heap allocation,
/// which keeps per-node cost flat when the frontier holds millions of
/// boards.
pub(crate) type Tiles = SmallVec<[u8; 16]>;

/// A blank-cell move. Directions name where the blank goes, not the tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// The fixed neighbor expansion order: `Up, Down, Left, Right`.
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Row/column delta applied to the blank cell.
    #[must_use]
    pub fn delta(self) -> (i8, i8) {
        match self {
            Direction::Up => (-1, 0),
            Direction::Down => (1, 0),
            Direction::Left => (0, -1),
            Direction::Right => (0, 1),
        }
    }

    /// The move that undoes this one.
    #[must_use]
    pub fn opposite(self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Direction::Up => "Up",
            Direction::Down => "Down",
            Direction::Left => "Left",
            Direction::Right => "Right",
        };
        write!(f, "{s}")
    }
}

/// An `n×n` tile grid with a tracked blank cell.
///
/// Invariant: `tiles` holds each value in `0..n²` exactly once, row-major,
/// and `tiles[blank] == 0`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    side: usize,
    tiles: Tiles,
    blank: usize,
}

impl Board {
    /// Build a board from a flat row-major tile list.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::NotSquare`] if the length is zero or not a
    /// perfect square, [`BoardError::SideTooLarge`] for sides above
    /// [`MAX_SIDE`], and [`BoardError::NotAPermutation`] if any value in
    /// `0..n²` is missing or repeated.
    pub fn from_flat(flat: &[u8]) -> Result<Self, BoardError> {
        let tile_count = flat.len();
        let mut side = 0;
        while side * side < tile_count {
            side += 1;
        }
        if tile_count == 0 || side * side != tile_count {
            return Err(BoardError::NotSquare { tile_count });
        }
        if side > MAX_SIDE {
            return Err(BoardError::SideTooLarge { side });
        }

        let mut seen = [false; MAX_SIDE * MAX_SIDE];
        for &value in flat {
            let v = usize::from(value);
            if v >= tile_count || seen[v] {
                return Err(BoardError::NotAPermutation { value });
            }
            seen[v] = true;
        }

        // The permutation check guarantees exactly one zero.
        let blank = flat.iter().position(|&v| v == 0).unwrap_or(0);
        Ok(Self {
            side,
            tiles: Tiles::from_slice(flat),
            blank,
        })
    }

    /// The solved arrangement for the given side: `0, 1, ..., n²-1`
    /// row-major.
    ///
    /// # Panics
    ///
    /// Panics if `side` is zero or above [`MAX_SIDE`].
    #[must_use]
    pub fn goal(side: usize) -> Self {
        assert!((1..=MAX_SIDE).contains(&side), "side {side} out of range");
        #[allow(clippy::cast_possible_truncation)]
        let tiles: Tiles = (0..side * side).map(|v| v as u8).collect();
        Self {
            side,
            tiles,
            blank: 0,
        }
    }

    /// Board side `n`.
    #[must_use]
    pub fn side(&self) -> usize {
        self.side
    }

    /// Flat row-major tile values.
    #[must_use]
    pub fn tiles(&self) -> &[u8] {
        &self.tiles
    }

    /// `(row, col)` of the blank cell.
    #[must_use]
    pub fn blank_position(&self) -> (usize, usize) {
        (self.blank / self.side, self.blank % self.side)
    }

    /// Goal test: tiles equal the solved arrangement.
    #[must_use]
    pub fn is_goal(&self) -> bool {
        self.tiles
            .iter()
            .enumerate()
            .all(|(i, &v)| usize::from(v) == i)
    }

    /// Move the blank one cell in `direction`, returning the successor
    /// board, or `None` if the blank is on the boundary in that direction.
    ///
    /// Never mutates `self`: the swap happens on a deep copy of the grid.
    #[must_use]
    pub fn apply(&self, direction: Direction) -> Option<Self> {
        let (row, col) = self.blank_position();
        let (drow, dcol) = direction.delta();
        let new_row = row.checked_add_signed(isize::from(drow))?;
        let new_col = col.checked_add_signed(isize::from(dcol))?;
        if new_row >= self.side || new_col >= self.side {
            return None;
        }

        let target = new_row * self.side + new_col;
        let mut tiles = self.tiles.clone();
        tiles.swap(self.blank, target);
        Some(Self {
            side: self.side,
            tiles,
            blank: target,
        })
    }

    /// Whether the goal is reachable from this board.
    ///
    /// Inversion-parity argument: for odd `n` the board is solvable iff the
    /// inversion count (blank excluded) is even; for even `n` iff the
    /// inversion count plus the blank's row index is even. The goal here
    /// places the blank at index 0, so the goal parity is even in both cases.
    #[must_use]
    pub fn is_solvable(&self) -> bool {
        let inversions: usize = self
            .tiles
            .iter()
            .enumerate()
            .filter(|&(_, &v)| v != 0)
            .map(|(i, &v)| {
                self.tiles[i + 1..]
                    .iter()
                    .filter(|&&next| next != 0 && next < v)
                    .count()
            })
            .sum();

        if self.side % 2 == 1 {
            inversions % 2 == 0
        } else {
            let (blank_row, _) = self.blank_position();
            (inversions + blank_row) % 2 == 0
        }
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in self.tiles.chunks(self.side) {
            for &v in row {
                write!(f, "{v:3} ")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
