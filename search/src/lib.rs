//! N-puzzle uninformed search: deterministic breadth-first and depth-first
//! exploration over the board state space.
//!
//! This crate provides the search layer. It depends only on
//! `npuzzle_board` — it does NOT depend on `npuzzle_cli`.
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
//! - [`Strategy`] — frontier discipline selector (FIFO vs LIFO)
//! - [`SearchNode`] / [`NodeArena`] — parent-linked nodes in an owning pool
//! - [`Frontier`] — open set plus visited registry with high-water tracking
//! - [`SearchReport`] — frozen statistics artifact returned by every run
//! - [`SearchError`] — pre-flight validation failures
//!
//! The driver itself is [`search::search`]; [`search::breadth_first`] and
//! [`search::depth_first`] are the per-strategy entry points.

#![forbid(unsafe_code)]

pub mod error;
pub mod frontier;
pub mod node;
pub mod report;
pub mod search;
pub mod strategy;

pub use error::SearchError;
pub use frontier::Frontier;
pub use node::{NodeArena, NodeId, SearchNode};
pub use report::{SearchReport, Termination};
pub use strategy::Strategy;
