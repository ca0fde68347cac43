//! Game rules for tic-tac-toe.
//!
//! Pure functions over an explicit [`Board`] value. Nothing here knows whose
//! turn it is; callers pass the mover's mark.

pub mod draw;
pub mod moves;
pub mod win;

pub use draw::{is_draw, is_full};
pub use moves::{apply_move, empty_indices};
pub use win::{WIN_LINES, WinLine, check_winner, has_won, winning_line};

use super::{Board, GameOutcome};
use tracing::instrument;

/// Evaluates the board.
///
/// The first satisfied line in [`WIN_LINES`] order decides the winner, so
/// boards with two winning marks (impossible in alternating play) still
/// evaluate deterministically.
#[instrument(skip(board))]
pub fn evaluate(board: &Board) -> GameOutcome {
    if let Some(winner) = check_winner(board) {
        GameOutcome::Won(winner)
    } else if is_full(board) {
        GameOutcome::Draw
    } else {
        GameOutcome::InProgress
    }
}
