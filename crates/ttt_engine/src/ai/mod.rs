//! AI move selection.
//!
//! Each difficulty maps to a [`Strategy`]. Strategies are stateless; every
//! call is a function of the board, the AI's mark and the random source.

mod blocking;
mod minimax;
mod random;

pub use blocking::BlockingStrategy;
pub use minimax::MinimaxStrategy;
pub use random::RandomStrategy;

use super::{AiError, Board, Difficulty, Mark, rules::empty_indices};
use rand::RngCore;
use tracing::{debug, instrument};

/// A move-selection algorithm.
pub trait Strategy: Send + Sync {
    /// Picks an empty index for `mark`, or `None` if the board is full.
    fn choose(&self, board: &Board, mark: Mark, rng: &mut dyn RngCore) -> Option<usize>;

    /// Returns the strategy's display name.
    fn name(&self) -> &'static str;
}

impl Difficulty {
    /// Returns the strategy used at this difficulty.
    pub fn strategy(self) -> &'static dyn Strategy {
        match self {
            Difficulty::Easy => &RandomStrategy,
            Difficulty::Medium => &BlockingStrategy,
            Difficulty::Hard => &MinimaxStrategy,
        }
    }
}

/// Selects the AI's move using the thread-local random source.
///
/// # Errors
///
/// Returns [`AiError::NoLegalMove`] if the board is full.
pub fn select_move(board: &Board, difficulty: Difficulty, ai_mark: Mark) -> Result<usize, AiError> {
    select_move_with(board, difficulty, ai_mark, &mut rand::rng())
}

/// Selects the AI's move using the given random source.
///
/// Only [`Difficulty::Easy`] and the fallback of [`Difficulty::Medium`] draw
/// from `rng`; [`Difficulty::Hard`] is fully deterministic.
///
/// # Errors
///
/// Returns [`AiError::NoLegalMove`] if the board is full.
#[instrument(skip(board, rng), fields(squares = %board.display()))]
pub fn select_move_with(
    board: &Board,
    difficulty: Difficulty,
    ai_mark: Mark,
    rng: &mut dyn RngCore,
) -> Result<usize, AiError> {
    if empty_indices(board).is_empty() {
        return Err(AiError::NoLegalMove);
    }

    let strategy = difficulty.strategy();
    let index = strategy
        .choose(board, ai_mark, rng)
        .ok_or(AiError::NoLegalMove)?;

    debug!(strategy = strategy.name(), index, "AI chose position");
    Ok(index)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Square, apply_move};
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use strum::IntoEnumIterator;

    #[test]
    fn test_full_board_has_no_legal_move() {
        let board = Board::from_squares([Square::Occupied(Mark::X); 9]);
        for difficulty in Difficulty::iter() {
            assert_eq!(
                select_move(&board, difficulty, Mark::O),
                Err(AiError::NoLegalMove)
            );
        }
    }

    #[test]
    fn test_last_square_is_forced() {
        let mut board = Board::new();
        for (i, mark) in [Mark::X, Mark::O, Mark::X, Mark::X, Mark::O, Mark::O, Mark::O, Mark::X]
            .into_iter()
            .enumerate()
        {
            board = apply_move(&board, i, mark).unwrap();
        }
        let mut rng = StdRng::seed_from_u64(3);
        for difficulty in Difficulty::iter() {
            assert_eq!(select_move_with(&board, difficulty, Mark::X, &mut rng), Ok(8));
        }
    }

    #[test]
    fn test_difficulty_strategy_names() {
        assert_eq!(Difficulty::Easy.strategy().name(), "random");
        assert_eq!(Difficulty::Medium.strategy().name(), "blocking");
        assert_eq!(Difficulty::Hard.strategy().name(), "minimax");
    }
}
