//! Application state and key handling.

use crate::ai_turn::{GameEvent, spawn_ai_turn};
use crate::config::{GameConfig, GameMode, Theme};
use crate::input::{key_to_position, move_cursor};
use crate::session::{GameSession, SessionError};
use crossterm::event::KeyCode;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{debug, instrument, warn};
use ttt_engine::{Difficulty, Position};

/// Which screen is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    /// Mode and difficulty selection.
    Welcome,
    /// The board.
    Playing,
}

/// Field highlighted on the welcome screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WelcomeField {
    /// Game mode selector.
    #[default]
    Mode,
    /// Difficulty selector.
    Difficulty,
}

impl WelcomeField {
    fn toggle(self) -> Self {
        match self {
            Self::Mode => Self::Difficulty,
            Self::Difficulty => Self::Mode,
        }
    }
}

/// What the event loop should do after a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    /// Keep running.
    Continue,
    /// Leave the application.
    Quit,
}

/// Main application state.
pub struct App {
    screen: Screen,
    welcome_field: WelcomeField,
    mode: GameMode,
    difficulty: Difficulty,
    config: GameConfig,
    session: GameSession,
    cursor: Position,
    theme: Theme,
    notice: Option<String>,
    events: mpsc::UnboundedSender<GameEvent>,
    ai_task: Option<JoinHandle<()>>,
}

impl App {
    /// Creates the application on the welcome screen.
    #[instrument(skip(events))]
    pub fn new(config: GameConfig, events: mpsc::UnboundedSender<GameEvent>) -> Self {
        let mode = *config.game_mode();
        let difficulty = *config.difficulty();
        Self {
            screen: Screen::Welcome,
            welcome_field: WelcomeField::default(),
            mode,
            difficulty,
            theme: *config.theme(),
            session: GameSession::new(mode, difficulty),
            config,
            cursor: Position::Center,
            notice: None,
            events,
            ai_task: None,
        }
    }

    /// Returns the current screen.
    pub fn screen(&self) -> Screen {
        self.screen
    }

    /// Returns the highlighted welcome field.
    pub fn welcome_field(&self) -> WelcomeField {
        self.welcome_field
    }

    /// Mode selected on the welcome screen.
    pub fn mode(&self) -> GameMode {
        self.mode
    }

    /// Difficulty selected on the welcome screen.
    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    /// Returns the game session.
    pub fn session(&self) -> &GameSession {
        &self.session
    }

    /// Returns the board cursor.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Returns the active theme.
    pub fn theme(&self) -> Theme {
        self.theme
    }

    /// Status line: a pending notice, otherwise the session's state.
    pub fn status_message(&self) -> String {
        self.notice
            .clone()
            .unwrap_or_else(|| self.session.status_message())
    }

    /// Leaves the welcome screen and starts a game.
    #[instrument(skip(self), fields(mode = %self.mode, difficulty = %self.difficulty))]
    pub fn start_game(&mut self) {
        self.cancel_ai_turn();
        self.session.reconfigure(self.mode, self.difficulty);
        self.cursor = Position::Center;
        self.notice = None;
        self.screen = Screen::Playing;
    }

    /// Handles a key press.
    #[instrument(skip(self))]
    pub fn handle_key(&mut self, key: KeyCode) -> Control {
        match (self.screen, key) {
            (_, KeyCode::Char('q') | KeyCode::Esc) => return Control::Quit,
            (_, KeyCode::Char('t')) => self.theme = self.theme.toggle(),
            (Screen::Welcome, key) => self.handle_welcome_key(key),
            (Screen::Playing, key) => self.handle_game_key(key),
        }
        Control::Continue
    }

    fn handle_welcome_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Up | KeyCode::Down | KeyCode::Tab => {
                self.welcome_field = self.welcome_field.toggle();
            }
            KeyCode::Left | KeyCode::Right | KeyCode::Char(' ') => match self.welcome_field {
                WelcomeField::Mode => self.mode = self.mode.toggle(),
                WelcomeField::Difficulty => {
                    self.difficulty = cycle_difficulty(self.difficulty, key == KeyCode::Left);
                }
            },
            KeyCode::Enter => self.start_game(),
            _ => {}
        }
    }

    fn handle_game_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Char('r') => self.restart(),
            KeyCode::Char('m') => {
                self.cancel_ai_turn();
                self.session.restart();
                self.screen = Screen::Welcome;
            }
            KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right => {
                self.cursor = move_cursor(self.cursor, key);
            }
            KeyCode::Enter | KeyCode::Char(' ') => self.play(self.cursor),
            key => {
                if let Some(pos) = key_to_position(key) {
                    self.cursor = pos;
                    self.play(pos);
                }
            }
        }
    }

    /// Plays the human's move at `pos` and hands over to the AI if needed.
    #[instrument(skip(self))]
    pub fn play(&mut self, pos: Position) {
        match self.session.play_human(pos.to_index()) {
            Ok(_) => {
                self.notice = None;
                self.schedule_ai_turn();
            }
            Err(SessionError::NotYourTurn | SessionError::GameOver) => {
                debug!("Ignoring input");
            }
            Err(e) => self.notice = Some(format!("Invalid move: {}. Try again.", e)),
        }
    }

    /// Clears the board, keeping mode and difficulty.
    #[instrument(skip(self))]
    pub fn restart(&mut self) {
        self.cancel_ai_turn();
        self.session.restart();
        self.cursor = Position::Center;
        self.notice = None;
    }

    /// Applies a background event.
    #[instrument(skip(self))]
    pub fn handle_event(&mut self, event: GameEvent) {
        match event {
            GameEvent::AiMoved { generation, result } => {
                self.ai_task = None;
                let outcome = result
                    .map_err(SessionError::from)
                    .and_then(|index| self.session.apply_ai_move(generation, index));
                match outcome {
                    Ok(_) => {}
                    Err(SessionError::Stale { .. }) => {}
                    Err(e) => {
                        warn!(error = %e, "AI move failed");
                        self.notice = Some(format!("AI error: {}", e));
                    }
                }
            }
        }
    }

    fn schedule_ai_turn(&mut self) {
        if let Some(request) = self.session.ai_request() {
            self.ai_task = Some(spawn_ai_turn(
                request,
                self.config.ai_delay(),
                self.events.clone(),
            ));
        }
    }

    fn cancel_ai_turn(&mut self) {
        if let Some(task) = self.ai_task.take() {
            task.abort();
        }
    }
}

fn cycle_difficulty(current: Difficulty, backwards: bool) -> Difficulty {
    match (current, backwards) {
        (Difficulty::Easy, false) | (Difficulty::Hard, true) => Difficulty::Medium,
        (Difficulty::Medium, false) | (Difficulty::Easy, true) => Difficulty::Hard,
        (Difficulty::Hard, false) | (Difficulty::Medium, true) => Difficulty::Easy,
    }
}
