//! Search entry points and the expansion loop.
//!
//! One driver serves both strategies: the frontier discipline and the
//! child-push order are the only strategy-dependent pieces, so the
//! expansion loop is written once and parameterized by [`Strategy`].

use std::time::Instant;

use npuzzle_board::{Board, Direction};

use crate::error::SearchError;
use crate::frontier::Frontier;
use crate::node::{NodeArena, NodeId};
use crate::report::{SearchReport, Termination};
use crate::strategy::Strategy;

/// Run an uninformed search from a flat row-major tile list.
///
/// The run is single-threaded and runs to completion: it returns when a
/// goal configuration is dequeued or when the reachable component is
/// exhausted. Exhaustion is a normal outcome reported via
/// [`Termination::FrontierExhausted`], not an error. Callers wanting
/// bounded execution must impose a limit externally.
///
/// # Errors
///
/// Returns [`SearchError::InvalidBoard`] if `initial` is not a valid
/// `n×n` permutation of `0..n²`. No search steps are taken in that case.
pub fn search(initial: &[u8], strategy: Strategy) -> Result<SearchReport, SearchError> {
    let root = Board::from_flat(initial)?;
    let started = Instant::now();

    let mut arena = NodeArena::new();
    let mut frontier = Frontier::new(strategy);
    let mut nodes_expanded: u64 = 0;
    let mut max_search_depth: u32 = 0;

    let root_key = root.key();
    let root_id = arena.alloc(None, root, 0, None);
    frontier.push(root_key, root_id);

    let expansion_order = strategy.expansion_order();

    while let Some(current_id) = frontier.pop() {
        let current = arena.get(current_id);

        if current.board.is_goal() {
            let search_depth = current.depth;
            let path_to_goal = reconstruct_path(&arena, current_id);
            return Ok(SearchReport {
                cost_of_path: path_to_goal.len(),
                path_to_goal,
                nodes_expanded,
                fringe_size: frontier.len(),
                max_fringe_size: frontier.high_water(),
                search_depth,
                max_search_depth,
                running_time: started.elapsed(),
                termination: Termination::GoalReached,
            });
        }

        nodes_expanded += 1;
        let parent_board = current.board.clone();
        let child_depth = current.depth + 1;

        for direction in expansion_order {
            let Some(child_board) = parent_board.apply(direction) else {
                continue;
            };
            let child_key = child_board.key();
            if frontier.is_visited(&child_key) {
                continue;
            }

            let child_id = arena.alloc(
                Some(current_id),
                child_board,
                child_depth,
                Some(direction),
            );
            frontier.push(child_key, child_id);
            if child_depth > max_search_depth {
                max_search_depth = child_depth;
            }
        }
    }

    // Fringe emptied without a goal dequeue: the goal is unreachable
    // from the initial configuration.
    Ok(SearchReport {
        path_to_goal: Vec::new(),
        cost_of_path: 0,
        nodes_expanded,
        fringe_size: 0,
        max_fringe_size: frontier.high_water(),
        search_depth: 0,
        max_search_depth,
        running_time: started.elapsed(),
        termination: Termination::FrontierExhausted,
    })
}

/// Breadth-first entry point. The returned path is shortest in move count.
///
/// # Errors
///
/// Same contract as [`search`].
pub fn breadth_first(initial: &[u8]) -> Result<SearchReport, SearchError> {
    search(initial, Strategy::BreadthFirst)
}

/// Depth-first entry point. Deterministic under the fixed reversed push
/// order, but the returned path need not be shortest.
///
/// # Errors
///
/// Same contract as [`search`].
pub fn depth_first(initial: &[u8]) -> Result<SearchReport, SearchError> {
    search(initial, Strategy::DepthFirst)
}

/// Reconstruct the root-to-goal move sequence by walking parent handles.
///
/// Collects each node's incoming move back to the root, then reverses so
/// the sequence reads root→goal. The root's `incoming` is `None` and
/// contributes nothing.
#[must_use]
pub fn reconstruct_path(arena: &NodeArena, goal_id: NodeId) -> Vec<Direction> {
    let mut path = Vec::new();
    let mut cursor = Some(goal_id);

    while let Some(id) = cursor {
        let node = arena.get(id);
        if let Some(direction) = node.incoming {
            path.push(direction);
        }
        cursor = node.parent;
    }

    path.reverse();
    path
}
