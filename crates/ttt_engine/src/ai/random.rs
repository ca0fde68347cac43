//! Uniformly random move selection.

use super::Strategy;
use crate::{Board, Mark, rules::empty_indices};
use rand::RngCore;
use rand::seq::IndexedRandom;

/// Picks any empty square with equal probability.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomStrategy;

impl Strategy for RandomStrategy {
    fn choose(&self, board: &Board, _mark: Mark, rng: &mut dyn RngCore) -> Option<usize> {
        empty_indices(board).choose(rng).copied()
    }

    fn name(&self) -> &'static str {
        "random"
    }
}
