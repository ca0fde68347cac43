//! Exhaustive minimax search.
//!
//! Scores are always from O's point of view: an O win is `+1`, an X win is
//! `-1`, a draw is `0`. O maximises and X minimises, whichever side the AI
//! plays. No pruning; the full tree from an empty board is under 600k nodes.

use super::Strategy;
use crate::{Board, Mark, Square, rules::WIN_LINES, types::BOARD_SIZE};
use rand::RngCore;

/// Plays perfectly. Ties go to the lowest index.
#[derive(Debug, Clone, Copy, Default)]
pub struct MinimaxStrategy;

impl MinimaxStrategy {
    /// Returns the best index for `mark` and its score, or `None` on a full board.
    pub fn best_move(board: &Board, mark: Mark) -> Option<(usize, i8)> {
        let mut scratch = *board;
        let mut best: Option<(usize, i8)> = None;

        for index in 0..BOARD_SIZE {
            if !scratch.is_empty(index) {
                continue;
            }
            scratch.set(index, Square::Occupied(mark));
            let score = score(&mut scratch, mark.opponent());
            scratch.set(index, Square::Empty);

            if best.is_none_or(|(_, best_score)| improves(mark, score, best_score)) {
                best = Some((index, score));
            }
        }

        best
    }
}

impl Strategy for MinimaxStrategy {
    fn choose(&self, board: &Board, mark: Mark, _rng: &mut dyn RngCore) -> Option<usize> {
        Self::best_move(board, mark).map(|(index, _)| index)
    }

    fn name(&self) -> &'static str {
        "minimax"
    }
}

/// Terminal score from O's perspective, `None` while the game continues.
///
/// Same decision as [`crate::evaluate`], minus the tracing span.
fn terminal_score(board: &Board) -> Option<i8> {
    match WIN_LINES.into_iter().find_map(|line| line.owner(board)) {
        Some(Mark::O) => Some(1),
        Some(Mark::X) => Some(-1),
        None if board.squares().contains(&Square::Empty) => None,
        None => Some(0),
    }
}

/// Strictly better for `mover`; equal scores keep the earlier move.
fn improves(mover: Mark, candidate: i8, current: i8) -> bool {
    match mover {
        Mark::O => candidate > current,
        Mark::X => candidate < current,
    }
}

/// Value of `board` with `mover` to play, searched to the end of the game.
fn score(board: &mut Board, mover: Mark) -> i8 {
    if let Some(score) = terminal_score(board) {
        return score;
    }

    let mut best = match mover {
        Mark::O => i8::MIN,
        Mark::X => i8::MAX,
    };

    for index in 0..BOARD_SIZE {
        if !board.is_empty(index) {
            continue;
        }
        board.set(index, Square::Occupied(mover));
        let child = score(board, mover.opponent());
        board.set(index, Square::Empty);

        if improves(mover, child, best) {
            best = child;
        }
    }

    best
}
