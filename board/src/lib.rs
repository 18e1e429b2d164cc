//! N-puzzle board domain: tile grids, moves, canonical keys, validation.
//!
//! This crate is the pure domain layer. It knows nothing about search —
//! it does NOT depend on `npuzzle_search`.
//!
//! # Crate dependency graph
//!
//! ```text
//! npuzzle_board  ←  npuzzle_search  ←  npuzzle_cli
//! (tiles, moves)    (frontier, driver)  (argument glue, output)
//! ```
//!
//! # Key types
//!
//! - [`Board`] — an immutable `n×n` tile grid with a tracked blank cell
//! - [`Direction`] — the four blank moves, with their fixed expansion order
//! - [`BoardKey`] — injective canonical encoding used for duplicate detection
//! - [`BoardError`] — validation failures for malformed input grids

#![forbid(unsafe_code)]

pub mod error;
pub mod key;
pub mod tiles;

pub use error::BoardError;
pub use key::BoardKey;
pub use tiles::{Board, Direction};
