//! Background AI turns.
//!
//! The AI waits out the cosmetic delay, computes its move on a blocking
//! thread and reports back over a channel. The session decides whether the
//! answer still applies.

use crate::session::AiRequest;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{debug, error, instrument};
use ttt_engine::{AiError, select_move};

/// Messages sent from background tasks to the UI loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameEvent {
    /// The AI picked a square (or could not).
    AiMoved {
        /// Generation of the game the move was computed for.
        generation: u64,
        /// Chosen index.
        result: Result<usize, AiError>,
    },
}

/// Spawns the AI's turn for `request` after `delay`.
#[instrument(skip(request, events), fields(generation = request.generation, difficulty = %request.difficulty))]
pub fn spawn_ai_turn(
    request: AiRequest,
    delay: Duration,
    events: mpsc::UnboundedSender<GameEvent>,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }

        let AiRequest {
            board,
            difficulty,
            mark,
            generation,
        } = request;

        let result =
            match tokio::task::spawn_blocking(move || select_move(&board, difficulty, mark)).await
            {
                Ok(result) => result,
                Err(e) => {
                    error!(error = %e, "AI task failed");
                    return;
                }
            };

        debug!(?result, generation, "AI turn finished");
        if events.send(GameEvent::AiMoved { generation, result }).is_err() {
            debug!("UI closed before AI move arrived");
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use ttt_engine::{Board, Difficulty, Mark, Square};

    #[tokio::test]
    async fn test_ai_turn_reports_move() {
        let x = Square::Occupied(Mark::X);
        let e = Square::Empty;
        let request = AiRequest {
            board: Board::from_squares([x, x, e, e, e, e, e, e, e]),
            difficulty: Difficulty::Medium,
            mark: Mark::O,
            generation: 3,
        };
        let (tx, mut rx) = mpsc::unbounded_channel();

        spawn_ai_turn(request, Duration::from_millis(10), tx)
            .await
            .unwrap();

        assert_eq!(
            rx.recv().await,
            Some(GameEvent::AiMoved {
                generation: 3,
                result: Ok(2)
            })
        );
    }

    #[tokio::test]
    async fn test_full_board_reports_error() {
        let request = AiRequest {
            board: Board::from_squares([Square::Occupied(Mark::X); 9]),
            difficulty: Difficulty::Hard,
            mark: Mark::O,
            generation: 0,
        };
        let (tx, mut rx) = mpsc::unbounded_channel();

        spawn_ai_turn(request, Duration::ZERO, tx).await.unwrap();

        assert_eq!(
            rx.recv().await,
            Some(GameEvent::AiMoved {
                generation: 0,
                result: Err(AiError::NoLegalMove)
            })
        );
    }
}
