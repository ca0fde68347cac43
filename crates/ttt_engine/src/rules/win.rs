//! Win detection logic for tic-tac-toe.

use super::super::{Board, Mark, Position, Square};
use tracing::instrument;

/// Three board indices that win when they hold the same mark.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WinLine(pub [usize; 3]);

impl WinLine {
    /// Returns the indices of this line.
    pub fn indices(self) -> [usize; 3] {
        self.0
    }

    /// Returns the positions of this line.
    pub fn positions(self) -> [Position; 3] {
        self.0.map(|i| Position::ALL[i])
    }

    /// Returns true if the line covers `index`.
    pub fn contains(self, index: usize) -> bool {
        self.0.contains(&index)
    }

    /// Returns the mark holding all three squares, if any.
    pub fn owner(self, board: &Board) -> Option<Mark> {
        let [a, b, c] = self.0;
        match board.get(a)? {
            Square::Occupied(mark)
                if board.get(b) == Some(Square::Occupied(mark))
                    && board.get(c) == Some(Square::Occupied(mark)) =>
            {
                Some(mark)
            }
            _ => None,
        }
    }
}

/// The eight winning lines: rows, then columns, then diagonals.
pub const WIN_LINES: [WinLine; 8] = [
    // Rows
    WinLine([0, 1, 2]),
    WinLine([3, 4, 5]),
    WinLine([6, 7, 8]),
    // Columns
    WinLine([0, 3, 6]),
    WinLine([1, 4, 7]),
    WinLine([2, 5, 8]),
    // Diagonals
    WinLine([0, 4, 8]),
    WinLine([2, 4, 6]),
];

/// Returns the first completed line in table order.
#[instrument(skip(board))]
pub fn winning_line(board: &Board) -> Option<WinLine> {
    WIN_LINES.into_iter().find(|line| line.owner(board).is_some())
}

/// Checks if there is a winner on the board.
///
/// Returns `Some(mark)` for the owner of the first completed line.
#[instrument(skip(board))]
pub fn check_winner(board: &Board) -> Option<Mark> {
    WIN_LINES.into_iter().find_map(|line| line.owner(board))
}

/// Checks whether `mark` holds any complete line.
pub fn has_won(board: &Board, mark: Mark) -> bool {
    WIN_LINES
        .into_iter()
        .any(|line| line.owner(board) == Some(mark))
}
