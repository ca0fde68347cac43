//! Board invariants.
//!
//! The engine does not enforce turn order, so these are reported rather
//! than rejected.

use super::{Board, Mark};

/// A logical property that should hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// X and O counts differ by at most one.
pub struct MarkBalance;

impl Invariant<Board> for MarkBalance {
    fn holds(board: &Board) -> bool {
        board.count(Mark::X).abs_diff(board.count(Mark::O)) <= 1
    }

    fn description() -> &'static str {
        "X and O counts must differ by at most one"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::apply_move;

    #[test]
    fn test_balance_holds_for_alternating_moves() {
        let board = apply_move(&Board::new(), 0, Mark::X).unwrap();
        let board = apply_move(&board, 1, Mark::O).unwrap();
        let board = apply_move(&board, 2, Mark::X).unwrap();
        assert!(MarkBalance::holds(&board));
    }

    #[test]
    fn test_balance_detects_double_move() {
        let board = apply_move(&Board::new(), 0, Mark::X).unwrap();
        let board = apply_move(&board, 1, Mark::X).unwrap();
        assert!(!MarkBalance::holds(&board));
    }
}
