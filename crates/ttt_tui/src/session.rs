//! A single game session: the authoritative board plus whose turn it is.
//!
//! The engine is stateless, so turn order, game mode and restarts all live
//! here. The AI's move arrives asynchronously; every restart bumps the
//! generation so a reply computed for an abandoned board is rejected.

use crate::config::GameMode;
use derive_more::{Display, Error, From};
use tracing::{debug, info, instrument, warn};
use ttt_engine::{
    AiError, Board, Difficulty, GameOutcome, Mark, MoveError, WinLine, apply_move, evaluate,
    winning_line,
};

/// Mark played by the human in human-vs-AI games.
pub const HUMAN_MARK: Mark = Mark::X;

/// Mark played by the AI in human-vs-AI games.
pub const AI_MARK: Mark = Mark::O;

/// Error raised when a move is refused by the session.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error, From)]
pub enum SessionError {
    /// The engine rejected the move.
    #[display("{}", _0)]
    #[from]
    Move(MoveError),

    /// The AI could not find a move.
    #[display("{}", _0)]
    #[from]
    Ai(AiError),

    /// The game has already ended.
    #[display("Game is already over")]
    GameOver,

    /// It is the AI's turn, or the AI tried to move on the human's turn.
    #[display("It's not your turn")]
    NotYourTurn,

    /// The AI answered for a game that has since been restarted.
    #[display("Stale AI move from game {}", generation)]
    Stale {
        /// Generation the move was computed for.
        generation: u64,
    },
}

/// Everything the AI needs to pick a move, detached from the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AiRequest {
    /// Board to move on.
    pub board: Board,
    /// Strength to play at.
    pub difficulty: Difficulty,
    /// Mark the AI plays.
    pub mark: Mark,
    /// Session generation the request belongs to.
    pub generation: u64,
}

/// Game session state.
#[derive(Debug, Clone)]
pub struct GameSession {
    board: Board,
    to_move: Mark,
    outcome: GameOutcome,
    mode: GameMode,
    difficulty: Difficulty,
    generation: u64,
    history: Vec<usize>,
}

impl GameSession {
    /// Creates a new session with an empty board and X to move.
    #[instrument]
    pub fn new(mode: GameMode, difficulty: Difficulty) -> Self {
        info!("Starting new game session");
        Self {
            board: Board::new(),
            to_move: Mark::X,
            outcome: GameOutcome::InProgress,
            mode,
            difficulty,
            generation: 0,
            history: Vec::new(),
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the mark to move next.
    pub fn to_move(&self) -> Mark {
        self.to_move
    }

    /// Returns the current outcome.
    pub fn outcome(&self) -> GameOutcome {
        self.outcome
    }

    /// Returns the game mode.
    pub fn mode(&self) -> GameMode {
        self.mode
    }

    /// Returns the AI difficulty.
    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    /// Returns the restart counter.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Returns the indices played so far.
    pub fn history(&self) -> &[usize] {
        &self.history
    }

    /// Returns the completed line once someone has won.
    pub fn winning_line(&self) -> Option<WinLine> {
        winning_line(&self.board)
    }

    /// True when the next move belongs to the AI.
    pub fn is_ai_turn(&self) -> bool {
        self.mode == GameMode::HumanVsAi && self.to_move == AI_MARK && !self.outcome.is_over()
    }

    /// Builds a request for the AI, or `None` if it is not the AI's turn.
    pub fn ai_request(&self) -> Option<AiRequest> {
        self.is_ai_turn().then_some(AiRequest {
            board: self.board,
            difficulty: self.difficulty,
            mark: AI_MARK,
            generation: self.generation,
        })
    }

    /// Plays a human move at `index` for the mark to move.
    ///
    /// # Errors
    ///
    /// Fails if the game is over, the AI is to move, or the engine rejects
    /// the square. The board is unchanged on error.
    #[instrument(skip(self), fields(to_move = %self.to_move))]
    pub fn play_human(&mut self, index: usize) -> Result<GameOutcome, SessionError> {
        if self.outcome.is_over() {
            return Err(SessionError::GameOver);
        }
        if self.is_ai_turn() {
            return Err(SessionError::NotYourTurn);
        }
        self.place(index)
    }

    /// Applies the AI's answer to `generation`.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::Stale`] if the session was restarted since the
    /// request, [`SessionError::NotYourTurn`] if the AI is not to move, or
    /// the engine's error for an illegal square.
    #[instrument(skip(self))]
    pub fn apply_ai_move(
        &mut self,
        generation: u64,
        index: usize,
    ) -> Result<GameOutcome, SessionError> {
        if generation != self.generation {
            debug!(current = self.generation, "Dropping AI move for old game");
            return Err(SessionError::Stale { generation });
        }
        if !self.is_ai_turn() {
            return Err(SessionError::NotYourTurn);
        }
        self.place(index)
    }

    fn place(&mut self, index: usize) -> Result<GameOutcome, SessionError> {
        let mark = self.to_move;
        self.board = apply_move(&self.board, index, mark).inspect_err(|e| {
            warn!(index, error = %e, "Move rejected");
        })?;
        self.history.push(index);
        self.outcome = evaluate(&self.board);

        if self.outcome.is_over() {
            info!(outcome = %self.outcome, moves = self.history.len(), "Game over");
        } else {
            self.to_move = mark.opponent();
        }

        Ok(self.outcome)
    }

    /// Clears the board for a new game with the same settings.
    #[instrument(skip(self))]
    pub fn restart(&mut self) {
        debug!("Restarting game");
        self.board = Board::new();
        self.to_move = Mark::X;
        self.outcome = GameOutcome::InProgress;
        self.history.clear();
        self.generation += 1;
    }

    /// Starts a new game with different settings.
    #[instrument(skip(self))]
    pub fn reconfigure(&mut self, mode: GameMode, difficulty: Difficulty) {
        self.mode = mode;
        self.difficulty = difficulty;
        self.restart();
    }

    /// One-line description of the game state.
    pub fn status_message(&self) -> String {
        match self.outcome {
            GameOutcome::InProgress if self.is_ai_turn() => "AI is thinking...".to_string(),
            GameOutcome::InProgress => format!("Player {}'s turn", self.to_move),
            GameOutcome::Won(mark) if self.mode == GameMode::HumanVsAi && mark == AI_MARK => {
                "The AI wins!".to_string()
            }
            GameOutcome::Won(mark) => format!("Player {} wins!", mark),
            GameOutcome::Draw => "It's a draw!".to_string(),
        }
    }
}
