//! Single-ply heuristic: win if possible, otherwise block, otherwise random.

use super::{RandomStrategy, Strategy};
use crate::{Board, Mark, Square, rules::{empty_indices, has_won}};
use rand::RngCore;

/// Takes an immediate win, then blocks the opponent's immediate win, then
/// falls back to [`RandomStrategy`].
#[derive(Debug, Clone, Copy, Default)]
pub struct BlockingStrategy;

impl BlockingStrategy {
    /// First empty index (ascending) where `mark` would complete a line.
    pub fn winning_move(board: &Board, mark: Mark) -> Option<usize> {
        let mut scratch = *board;
        empty_indices(board).into_iter().find(|&i| {
            scratch.set(i, Square::Occupied(mark));
            let wins = has_won(&scratch, mark);
            scratch.set(i, Square::Empty);
            wins
        })
    }
}

impl Strategy for BlockingStrategy {
    fn choose(&self, board: &Board, mark: Mark, rng: &mut dyn RngCore) -> Option<usize> {
        Self::winning_move(board, mark)
            .or_else(|| Self::winning_move(board, mark.opponent()))
            .or_else(|| RandomStrategy.choose(board, mark, rng))
    }

    fn name(&self) -> &'static str {
        "blocking"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    const E: Square = Square::Empty;
    const X: Square = Square::Occupied(Mark::X);
    const O: Square = Square::Occupied(Mark::O);

    #[test]
    fn test_blocks_opponent() {
        let board = Board::from_squares([X, X, E, E, E, E, E, E, E]);
        let mut rng = StdRng::seed_from_u64(0);
        assert_eq!(BlockingStrategy.choose(&board, Mark::O, &mut rng), Some(2));
    }

    #[test]
    fn test_prefers_own_win_over_block() {
        // X X _ / O O _ / X _ _: O wins at 5 rather than blocking at 2.
        let board = Board::from_squares([X, X, E, O, O, E, X, E, E]);
        let mut rng = StdRng::seed_from_u64(0);
        assert_eq!(BlockingStrategy.choose(&board, Mark::O, &mut rng), Some(5));
    }

    #[test]
    fn test_lowest_winning_index_first() {
        // O _ O / _ _ _ / O _ _: both 1 and 3 win for O.
        let board = Board::from_squares([O, E, O, E, E, E, O, E, E]);
        assert_eq!(BlockingStrategy::winning_move(&board, Mark::O), Some(1));
    }

    #[test]
    fn test_winning_move_leaves_board_untouched() {
        let board = Board::from_squares([X, X, E, E, E, E, E, E, E]);
        let before = board;
        let _ = BlockingStrategy::winning_move(&board, Mark::X);
        assert_eq!(board, before);
    }

    #[test]
    fn test_falls_back_to_empty_square() {
        let board = Board::from_squares([X, E, E, E, O, E, E, E, E]);
        let mut rng = StdRng::seed_from_u64(9);
        let index = BlockingStrategy.choose(&board, Mark::X, &mut rng).unwrap();
        assert!(board.is_empty(index));
    }
}
