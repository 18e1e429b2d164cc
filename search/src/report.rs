//! The search report: frozen statistics artifact for one run.
//!
//! The driver keeps its counters as plain locals and freezes them into a
//! [`SearchReport`] at termination, so a returned report can never change
//! again. No getter/setter ceremony: the report is a value record.

use std::time::Duration;

use npuzzle_board::Direction;
use serde_json::{json, Value};

/// Why the run stopped.
///
/// `path_to_goal` alone cannot distinguish a root-is-goal run (empty path,
/// goal reached) from an exhausted run (empty path, goal unreachable);
/// this enum does.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Termination {
    /// A goal configuration was dequeued.
    GoalReached,
    /// The fringe emptied without reaching the goal: the reachable
    /// component does not contain it. A normal outcome, not an error.
    FrontierExhausted,
}

/// Aggregated statistics of one completed search run.
///
/// Created by the driver, frozen at termination (success or exhaustion)
/// and returned by value.
#[derive(Debug, Clone)]
pub struct SearchReport {
    /// Ordered root-to-goal move sequence; empty on exhaustion or when
    /// the root is already the goal.
    pub path_to_goal: Vec<Direction>,
    /// Number of moves in `path_to_goal`.
    pub cost_of_path: usize,
    /// Nodes dequeued and expanded (goal dequeue itself not counted).
    pub nodes_expanded: u64,
    /// Open-set size at termination.
    pub fringe_size: usize,
    /// Largest open-set size seen at any point in the run.
    pub max_fringe_size: usize,
    /// Depth of the goal node (0 when the root is the goal).
    pub search_depth: u32,
    /// Deepest node ever placed on the fringe.
    pub max_search_depth: u32,
    /// Wall-clock duration of the run.
    pub running_time: Duration,
    /// Why the run stopped.
    pub termination: Termination,
}

impl SearchReport {
    /// Whether the run reached a goal configuration.
    #[must_use]
    pub fn is_goal_reached(&self) -> bool {
        self.termination == Termination::GoalReached
    }

    /// Render the report as JSON in the engine's canonical field naming.
    #[must_use]
    pub fn to_json(&self) -> Value {
        json!({
            "path_to_goal": self.path_to_goal.iter().map(ToString::to_string).collect::<Vec<_>>(),
            "cost_of_path": self.cost_of_path,
            "nodes_expanded": self.nodes_expanded,
            "fringe_size": self.fringe_size,
            "max_fringe_size": self.max_fringe_size,
            "search_depth": self.search_depth,
            "max_search_depth": self.max_search_depth,
            "running_time": self.running_time.as_secs_f64(),
            "termination": match self.termination {
                Termination::GoalReached => "goal_reached",
                Termination::FrontierExhausted => "frontier_exhausted",
            },
        })
    }
}

impl std::fmt::Display for SearchReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let path: Vec<String> = self.path_to_goal.iter().map(ToString::to_string).collect();
        writeln!(f, "path_to_goal: [{}]", path.join(", "))?;
        writeln!(f, "cost_of_path: {}", self.cost_of_path)?;
        writeln!(f, "nodes_expanded: {}", self.nodes_expanded)?;
        writeln!(f, "fringe_size: {}", self.fringe_size)?;
        writeln!(f, "max_fringe_size: {}", self.max_fringe_size)?;
        writeln!(f, "search_depth: {}", self.search_depth)?;
        writeln!(f, "max_search_depth: {}", self.max_search_depth)?;
        write!(f, "running_time: {:.8}", self.running_time.as_secs_f64())
    }
}
