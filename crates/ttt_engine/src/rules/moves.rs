//! Move application.

use super::super::contracts::{Invariant, MarkBalance};
use super::super::{Board, Mark, MoveError, Square, types::BOARD_SIZE};
use tracing::{instrument, warn};

/// Places `mark` at `index`, returning the new board.
///
/// The input board is left untouched.
///
/// # Errors
///
/// - [`MoveError::OutOfRange`] if `index` is not 0-8.
/// - [`MoveError::Occupied`] if the square already holds a mark.
#[instrument(skip(board), err)]
pub fn apply_move(board: &Board, index: usize, mark: Mark) -> Result<Board, MoveError> {
    if index >= BOARD_SIZE {
        return Err(MoveError::OutOfRange(index));
    }
    if !board.is_empty(index) {
        return Err(MoveError::Occupied(index));
    }

    let mut next = *board;
    next.set(index, Square::Occupied(mark));

    if !MarkBalance::holds(&next) {
        warn!(
            x_count = next.count(Mark::X),
            o_count = next.count(Mark::O),
            "{}",
            MarkBalance::description()
        );
    }

    Ok(next)
}

/// All empty indices in ascending order.
pub fn empty_indices(board: &Board) -> Vec<usize> {
    (0..BOARD_SIZE).filter(|&i| board.is_empty(i)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_move_sets_square() {
        let board = Board::new();
        let next = apply_move(&board, 4, Mark::X).unwrap();
        assert_eq!(next.get(4), Some(Square::Occupied(Mark::X)));
        // Original untouched
        assert!(board.is_empty(4));
    }

    #[test]
    fn test_apply_move_rejects_occupied() {
        let board = apply_move(&Board::new(), 4, Mark::X).unwrap();
        assert_eq!(apply_move(&board, 4, Mark::O), Err(MoveError::Occupied(4)));
    }

    #[test]
    fn test_apply_move_rejects_out_of_range() {
        assert_eq!(
            apply_move(&Board::new(), 9, Mark::X),
            Err(MoveError::OutOfRange(9))
        );
    }

    #[test]
    fn test_empty_indices_ascending() {
        let board = apply_move(&Board::new(), 0, Mark::X).unwrap();
        let board = apply_move(&board, 5, Mark::O).unwrap();
        assert_eq!(empty_indices(&board), vec![1, 2, 3, 4, 6, 7, 8]);
    }
}
