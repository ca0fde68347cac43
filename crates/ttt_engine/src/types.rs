//! Core domain types for tic-tac-toe.

use serde::{Deserialize, Serialize};

/// A player's mark.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumIter,
)]
pub enum Mark {
    /// Mark X (moves first).
    X,
    /// Mark O (moves second, the AI's mark in human-vs-AI play).
    O,
}

impl Mark {
    /// Returns the opponent's mark.
    pub fn opponent(self) -> Self {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }
}

/// A square on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Square {
    /// Empty square.
    #[default]
    Empty,
    /// Square holding a mark.
    Occupied(Mark),
}

impl Square {
    /// Returns the mark in this square, if any.
    pub fn mark(self) -> Option<Mark> {
        match self {
            Square::Empty => None,
            Square::Occupied(mark) => Some(mark),
        }
    }

    /// Swaps X and O, leaving empty squares alone.
    pub fn relabel(self) -> Self {
        match self {
            Square::Empty => Square::Empty,
            Square::Occupied(mark) => Square::Occupied(mark.opponent()),
        }
    }
}

/// Number of squares on the board.
pub const BOARD_SIZE: usize = 9;

/// 3x3 tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Board {
    /// Squares in row-major order (0-8).
    squares: [Square; BOARD_SIZE],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a board from squares in row-major order.
    pub fn from_squares(squares: [Square; BOARD_SIZE]) -> Self {
        Self { squares }
    }

    /// Gets the square at the given index (0-8).
    pub fn get(&self, index: usize) -> Option<Square> {
        self.squares.get(index).copied()
    }

    /// Sets the square at the given index.
    ///
    /// No legality check beyond bounds; use [`crate::apply_move`] for moves.
    pub(crate) fn set(&mut self, index: usize, square: Square) {
        self.squares[index] = square;
    }

    /// Checks if a square is empty. Out-of-range indices are never empty.
    pub fn is_empty(&self, index: usize) -> bool {
        matches!(self.get(index), Some(Square::Empty))
    }

    /// Returns all squares.
    pub fn squares(&self) -> &[Square; BOARD_SIZE] {
        &self.squares
    }

    /// Counts the squares holding `mark`.
    pub fn count(&self, mark: Mark) -> usize {
        self.squares
            .iter()
            .filter(|s| **s == Square::Occupied(mark))
            .count()
    }

    /// Returns the board with every X turned into O and vice versa.
    pub fn relabeled(&self) -> Self {
        Self {
            squares: self.squares.map(Square::relabel),
        }
    }

    /// Formats the board as a human-readable string.
    ///
    /// Empty squares show their 1-based key so players know what to press.
    pub fn display(&self) -> String {
        let mut result = String::new();
        for row in 0..3 {
            for col in 0..3 {
                let pos = row * 3 + col;
                let symbol = match self.squares[pos] {
                    Square::Empty => (pos + 1).to_string(),
                    Square::Occupied(mark) => mark.to_string(),
                };
                result.push_str(&symbol);
                if col < 2 {
                    result.push('|');
                }
            }
            if row < 2 {
                result.push_str("\n-+-+-\n");
            }
        }
        result
    }
}

/// Outcome of evaluating a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameOutcome {
    /// Game is ongoing.
    InProgress,
    /// A mark completed a line.
    Won(Mark),
    /// Board is full with no line.
    Draw,
}

impl GameOutcome {
    /// Returns true once the game can no longer continue.
    pub fn is_over(self) -> bool {
        !matches!(self, GameOutcome::InProgress)
    }

    /// Returns the winner if there is one.
    pub fn winner(self) -> Option<Mark> {
        match self {
            GameOutcome::Won(mark) => Some(mark),
            _ => None,
        }
    }
}

impl std::fmt::Display for GameOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameOutcome::InProgress => write!(f, "In progress"),
            GameOutcome::Won(mark) => write!(f, "Player {} wins", mark),
            GameOutcome::Draw => write!(f, "Draw"),
        }
    }
}

/// AI difficulty level.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Difficulty {
    /// Uniformly random moves.
    #[default]
    Easy,
    /// Takes wins, blocks losses, otherwise random.
    Medium,
    /// Full minimax search; never loses.
    Hard,
}
