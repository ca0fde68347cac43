//! Tic-tac-toe rules engine and AI move selection.
//!
//! The engine is a set of pure functions over an explicit [`Board`] value:
//!
//! - **Rules**: [`apply_move`], [`evaluate`], [`empty_indices`], [`winning_line`]
//! - **AI**: [`select_move`] picks a square for a given [`Difficulty`]
//!
//! The caller owns the board and decides whose turn it is; every operation
//! takes the mover's [`Mark`] explicitly.
//!
//! ```
//! use ttt_engine::{Board, Difficulty, GameOutcome, Mark, apply_move, evaluate, select_move};
//!
//! let board = apply_move(&Board::new(), 4, Mark::X)?;
//! let reply = select_move(&board, Difficulty::Hard, Mark::O)?;
//! let board = apply_move(&board, reply, Mark::O)?;
//! assert_eq!(evaluate(&board), GameOutcome::InProgress);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod ai;
mod contracts;
mod error;
mod position;
mod rules;
mod types;

pub use ai::{
    BlockingStrategy, MinimaxStrategy, RandomStrategy, Strategy, select_move, select_move_with,
};
pub use contracts::{Invariant, MarkBalance};
pub use error::{AiError, MoveError};
pub use position::Position;
pub use rules::{
    WIN_LINES, WinLine, apply_move, check_winner, empty_indices, evaluate, has_won, is_draw,
    is_full, winning_line,
};
pub use types::{BOARD_SIZE, Board, Difficulty, GameOutcome, Mark, Square};
