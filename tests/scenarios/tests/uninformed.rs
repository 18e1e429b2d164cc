//! End-to-end locks for the uninformed search engine: the documented
//! scenarios, path replay, breadth-first optimality, dedup bounds,
//! run-to-run determinism, and monotonic maxima.

use npuzzle_board::{Board, Direction};
use npuzzle_search::search::{breadth_first, depth_first, search};
use npuzzle_search::{SearchError, Strategy, Termination};
use scenario_tests::replay;

const THREE_MOVE_START: [u8; 9] = [1, 2, 5, 3, 4, 0, 6, 7, 8];
const SOLVED_3X3: [u8; 9] = [0, 1, 2, 3, 4, 5, 6, 7, 8];
// Two non-blank tiles swapped relative to the goal: the odd permutation
// class, from which the goal is unreachable.
const UNSOLVABLE_3X3: [u8; 9] = [0, 2, 1, 3, 4, 5, 6, 7, 8];

// ---------------------------------------------------------------------------
// Documented scenarios
// ---------------------------------------------------------------------------

#[test]
fn scenario_a_bfs_three_move_solution() {
    let report = breadth_first(&THREE_MOVE_START).unwrap();
    assert_eq!(
        report.path_to_goal,
        [Direction::Up, Direction::Left, Direction::Left]
    );
    assert_eq!(report.cost_of_path, 3);
    assert_eq!(report.search_depth, 3);
    assert_eq!(report.termination, Termination::GoalReached);
}

#[test]
fn scenario_b_root_already_solved() {
    for strategy in [Strategy::BreadthFirst, Strategy::DepthFirst] {
        let report = search(&SOLVED_3X3, strategy).unwrap();
        assert!(report.path_to_goal.is_empty(), "{strategy:?}");
        assert_eq!(report.cost_of_path, 0);
        assert_eq!(report.nodes_expanded, 0);
        assert_eq!(report.termination, Termination::GoalReached);
    }
}

#[test]
fn scenario_c_unsolvable_exhausts_the_reachable_component() {
    let board = Board::from_flat(&UNSOLVABLE_3X3).unwrap();
    assert!(!board.is_solvable(), "fixture must be in the odd class");

    let report = breadth_first(&UNSOLVABLE_3X3).unwrap();
    assert_eq!(report.termination, Termination::FrontierExhausted);
    assert!(report.path_to_goal.is_empty());
    // Each permutation class of the 3x3 puzzle has 9!/2 states, and every
    // one of them gets expanded before the fringe empties.
    assert_eq!(report.nodes_expanded, 181_440);
    assert_eq!(report.fringe_size, 0);
}

#[test]
fn scenario_d_one_by_one_grid() {
    let report = breadth_first(&[0]).unwrap();
    assert!(report.path_to_goal.is_empty());
    assert_eq!(report.cost_of_path, 0);
    assert_eq!(report.nodes_expanded, 0);
    assert_eq!(report.termination, Termination::GoalReached);
}

// ---------------------------------------------------------------------------
// Path replay and optimality
// ---------------------------------------------------------------------------

#[test]
fn returned_paths_replay_to_the_goal_grid() {
    for strategy in [Strategy::BreadthFirst, Strategy::DepthFirst] {
        let report = search(&THREE_MOVE_START, strategy).unwrap();
        assert!(report.is_goal_reached(), "{strategy:?}");
        let end = replay(&THREE_MOVE_START, &report.path_to_goal);
        assert!(end.is_goal(), "{strategy:?} path must land on the goal");
    }
}

#[test]
fn bfs_path_is_never_longer_than_dfs_path() {
    let bfs = breadth_first(&THREE_MOVE_START).unwrap();
    let dfs = depth_first(&THREE_MOVE_START).unwrap();
    assert!(
        bfs.cost_of_path <= dfs.cost_of_path,
        "bfs {} vs dfs {}",
        bfs.cost_of_path,
        dfs.cost_of_path
    );
}

#[test]
fn bfs_cost_matches_the_known_minimum() {
    // One move: blank one swap away from home.
    let report = breadth_first(&[1, 0, 2, 3, 4, 5, 6, 7, 8]).unwrap();
    assert_eq!(report.cost_of_path, 1);

    // Two moves: the blank must travel from the center to its corner,
    // which takes at least two steps.
    let report = breadth_first(&[1, 4, 2, 3, 0, 5, 6, 7, 8]).unwrap();
    assert_eq!(report.cost_of_path, 2);
    let end = replay(&[1, 4, 2, 3, 0, 5, 6, 7, 8], &report.path_to_goal);
    assert!(end.is_goal());
}

// ---------------------------------------------------------------------------
// Dedup and expansion bounds
// ---------------------------------------------------------------------------

#[test]
fn expansions_are_bounded_by_the_component_size() {
    // The 2x2 puzzle's reachable class holds 4!/2 = 12 states; no state
    // may be expanded twice, so 12 is a hard ceiling for any start.
    for strategy in [Strategy::BreadthFirst, Strategy::DepthFirst] {
        let report = search(&[3, 2, 1, 0], strategy).unwrap();
        assert!(
            report.nodes_expanded <= 12,
            "{strategy:?} expanded {} states",
            report.nodes_expanded
        );
    }
}

#[test]
fn unsolvable_2x2_expands_exactly_its_component() {
    let report = depth_first(&[0, 2, 1, 3]).unwrap();
    assert_eq!(report.termination, Termination::FrontierExhausted);
    assert_eq!(report.nodes_expanded, 12);
}

#[test]
fn solvability_parity_agrees_with_reachability_on_every_2x2_grid() {
    // All 24 arrangements of the 2x2 grid, checked against what the
    // engine actually reaches. Exactly half sit in the goal's class.
    let mut solvable = 0;
    for a in 0..4u8 {
        for b in 0..4u8 {
            for c in 0..4u8 {
                for d in 0..4u8 {
                    let tiles = [a, b, c, d];
                    let Ok(board) = Board::from_flat(&tiles) else {
                        continue;
                    };
                    let report = breadth_first(&tiles).unwrap();
                    assert_eq!(
                        board.is_solvable(),
                        report.is_goal_reached(),
                        "parity and search disagree on {tiles:?}"
                    );
                    if board.is_solvable() {
                        solvable += 1;
                    }
                }
            }
        }
    }
    assert_eq!(solvable, 12);
}

// ---------------------------------------------------------------------------
// Determinism and report invariants
// ---------------------------------------------------------------------------

#[test]
fn decision_surface_is_identical_across_runs() {
    for strategy in [Strategy::BreadthFirst, Strategy::DepthFirst] {
        let first = search(&THREE_MOVE_START, strategy).unwrap();
        for _ in 1..3 {
            let other = search(&THREE_MOVE_START, strategy).unwrap();
            assert_eq!(other.path_to_goal, first.path_to_goal, "{strategy:?}");
            assert_eq!(other.nodes_expanded, first.nodes_expanded, "{strategy:?}");
            assert_eq!(other.max_fringe_size, first.max_fringe_size, "{strategy:?}");
            assert_eq!(
                other.max_search_depth, first.max_search_depth,
                "{strategy:?}"
            );
        }
    }
}

#[test]
fn maxima_dominate_their_terminal_samples() {
    for strategy in [Strategy::BreadthFirst, Strategy::DepthFirst] {
        let report = search(&THREE_MOVE_START, strategy).unwrap();
        assert!(report.max_fringe_size >= report.fringe_size, "{strategy:?}");
        assert!(
            report.max_search_depth >= report.search_depth,
            "{strategy:?}"
        );
        assert_eq!(report.cost_of_path, report.path_to_goal.len());
    }
}

#[test]
fn json_report_round_trips_the_scenario_a_path() {
    let report = breadth_first(&THREE_MOVE_START).unwrap();
    let value = report.to_json();
    assert_eq!(
        value["path_to_goal"],
        serde_json::json!(["Up", "Left", "Left"])
    );
    assert_eq!(value["nodes_expanded"], serde_json::json!(report.nodes_expanded));
}

// ---------------------------------------------------------------------------
// Pre-flight errors
// ---------------------------------------------------------------------------

#[test]
fn malformed_grids_are_rejected_before_searching() {
    for bad in [&[1u8, 2, 3][..], &[0, 1, 2, 2, 4, 5, 6, 7, 8][..]] {
        let err = search(bad, Strategy::BreadthFirst).unwrap_err();
        assert!(matches!(err, SearchError::InvalidBoard(_)), "got {err:?}");
    }
}

#[test]
fn unknown_strategy_token_is_surfaced() {
    let err = "ast".parse::<Strategy>().unwrap_err();
    assert!(matches!(err, SearchError::UnknownStrategy { .. }));
}
