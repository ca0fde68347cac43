//! Terminal front end for the tic-tac-toe engine.
//!
//! # Architecture
//!
//! - **Config**: TOML file plus CLI overrides ([`GameConfig`], [`Cli`])
//! - **Session**: authoritative board, turn order and restarts ([`GameSession`])
//! - **AI turns**: delayed background move selection ([`spawn_ai_turn`])
//! - **App/UI**: key handling and ratatui rendering ([`App`], [`draw`])

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod ai_turn;
mod app;
mod cli;
mod config;
mod input;
mod session;
mod ui;

pub use ai_turn::{GameEvent, spawn_ai_turn};
pub use app::{App, Control, Screen, WelcomeField};
pub use cli::Cli;
pub use config::{ConfigError, DEFAULT_AI_DELAY_MS, GameConfig, GameMode, Theme};
pub use input::{key_to_position, move_cursor};
pub use session::{AI_MARK, AiRequest, GameSession, HUMAN_MARK, SessionError};
pub use ui::{Palette, draw};
