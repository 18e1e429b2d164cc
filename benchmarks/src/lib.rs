//! Shared helpers for the n-puzzle benchmark suites.

#![forbid(unsafe_code)]

use npuzzle_board::{Board, Direction};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

/// Scramble the solved board with `steps` random valid moves.
///
/// Scrambling by move application keeps the board inside the solvable
/// class by construction, so benchmark solves always terminate at a goal
/// rather than exhausting a component. Seeded for run-to-run stability.
#[must_use]
pub fn scrambled(side: usize, steps: usize, seed: u64) -> Board {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut board = Board::goal(side);
    let mut last: Option<Direction> = None;

    for _ in 0..steps {
        let mut moves = Direction::ALL;
        moves.shuffle(&mut rng);
        for direction in moves {
            // Never immediately undo the previous move, or shallow
            // scrambles collapse back to the goal.
            if last == Some(direction.opposite()) {
                continue;
            }
            if let Some(next) = board.apply(direction) {
                board = next;
                last = Some(direction);
                break;
            }
        }
    }
    board
}
