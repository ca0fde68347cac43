//! Command-line interface for the `ttt` binary.

use crate::config::GameMode;
use clap::Parser;
use std::path::PathBuf;
use ttt_engine::Difficulty;

/// Tic-tac-toe in the terminal, against a friend or the AI
#[derive(Parser, Debug)]
#[command(name = "ttt")]
#[command(about = "Play tic-tac-toe in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Game mode: human-vs-human or human-vs-ai
    #[arg(long)]
    pub mode: Option<GameMode>,

    /// AI difficulty: easy, medium or hard
    #[arg(short, long)]
    pub difficulty: Option<Difficulty>,

    /// Pause before the AI moves, in milliseconds
    #[arg(long)]
    pub ai_delay_ms: Option<u64>,

    /// Path to the TOML config file (optional)
    #[arg(short, long, default_value = "ttt.toml")]
    pub config: PathBuf,

    /// Go straight to the board
    #[arg(long)]
    pub skip_welcome: bool,

    /// Where to write logs (the terminal is taken by the UI)
    #[arg(long, default_value = "ttt.log")]
    pub log_file: PathBuf,
}
