//! Game configuration loaded from TOML and overridden by CLI flags.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use tracing::{debug, info, instrument};
use ttt_engine::Difficulty;

/// Who sits at the keyboard.
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
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case", ascii_case_insensitive)]
pub enum GameMode {
    /// Two people share the keyboard.
    HumanVsHuman,
    /// The human plays X against the AI playing O.
    #[default]
    HumanVsAi,
}

impl GameMode {
    /// Returns the display label for this mode.
    pub fn label(self) -> &'static str {
        match self {
            Self::HumanVsHuman => "Human vs Human",
            Self::HumanVsAi => "Human vs AI",
        }
    }

    /// Toggles between the two modes.
    pub fn toggle(self) -> Self {
        match self {
            Self::HumanVsHuman => Self::HumanVsAi,
            Self::HumanVsAi => Self::HumanVsHuman,
        }
    }
}

/// Color scheme for the board.
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
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Theme {
    /// Dark text on a light background.
    #[default]
    Light,
    /// Light text on a dark background.
    Dark,
}

impl Theme {
    /// Toggles between light and dark.
    pub fn toggle(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }
}

/// Default pause before the AI answers.
pub const DEFAULT_AI_DELAY_MS: u64 = 500;

/// Settings for a play session.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Human vs human or human vs AI.
    game_mode: GameMode,

    /// AI strength in human-vs-AI games.
    difficulty: Difficulty,

    /// Cosmetic "thinking" pause before the AI moves, in milliseconds.
    ai_delay_ms: u64,

    /// Starting color scheme.
    theme: Theme,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            game_mode: GameMode::default(),
            difficulty: Difficulty::default(),
            ai_delay_ms: DEFAULT_AI_DELAY_MS,
            theme: Theme::default(),
        }
    }
}

impl GameConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(mode = %config.game_mode, difficulty = %config.difficulty, "Config loaded");
        Ok(config)
    }

    /// Loads the file if it exists, otherwise returns defaults.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            info!("Config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Applies command-line overrides; `None` keeps the current value.
    #[instrument(skip(self))]
    pub fn with_overrides(
        mut self,
        game_mode: Option<GameMode>,
        difficulty: Option<Difficulty>,
        ai_delay_ms: Option<u64>,
    ) -> Self {
        if let Some(mode) = game_mode {
            self.game_mode = mode;
        }
        if let Some(difficulty) = difficulty {
            self.difficulty = difficulty;
        }
        if let Some(delay) = ai_delay_ms {
            self.ai_delay_ms = delay;
        }
        self
    }

    /// The AI pause as a [`Duration`].
    pub fn ai_delay(&self) -> Duration {
        Duration::from_millis(self.ai_delay_ms)
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use std::str::FromStr;

    #[test]
    fn test_defaults() {
        let config = GameConfig::default();
        assert_eq!(*config.game_mode(), GameMode::HumanVsAi);
        assert_eq!(*config.difficulty(), Difficulty::Easy);
        assert_eq!(config.ai_delay(), Duration::from_millis(500));
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "difficulty = \"hard\"").unwrap();

        let config = GameConfig::from_file(file.path()).unwrap();
        assert_eq!(*config.difficulty(), Difficulty::Hard);
        assert_eq!(*config.game_mode(), GameMode::HumanVsAi);
        assert_eq!(*config.ai_delay_ms(), DEFAULT_AI_DELAY_MS);
    }

    #[test]
    fn test_full_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "game_mode = \"human-vs-human\"\ndifficulty = \"medium\"\nai_delay_ms = 0\ntheme = \"dark\""
        )
        .unwrap();

        let config = GameConfig::from_file(file.path()).unwrap();
        assert_eq!(*config.game_mode(), GameMode::HumanVsHuman);
        assert_eq!(*config.difficulty(), Difficulty::Medium);
        assert_eq!(config.ai_delay(), Duration::ZERO);
        assert_eq!(*config.theme(), Theme::Dark);
    }

    #[test]
    fn test_bad_file_reports_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "difficulty = \"impossible\"").unwrap();

        let err = GameConfig::from_file(file.path()).unwrap_err();
        assert!(err.message.starts_with("Failed to parse config"));
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = GameConfig::load_or_default(dir.path().join("absent.toml")).unwrap();
        assert_eq!(config, GameConfig::default());
    }

    #[test]
    fn test_overrides_replace_only_given_values() {
        let config = GameConfig::default().with_overrides(None, Some(Difficulty::Hard), Some(0));
        assert_eq!(*config.game_mode(), GameMode::HumanVsAi);
        assert_eq!(*config.difficulty(), Difficulty::Hard);
        assert_eq!(*config.ai_delay_ms(), 0);
    }

    #[test]
    fn test_mode_parses_kebab_case() {
        assert_eq!(GameMode::from_str("human-vs-ai").unwrap(), GameMode::HumanVsAi);
        assert_eq!(GameMode::HumanVsHuman.to_string(), "human-vs-human");
        assert_eq!(GameMode::HumanVsHuman.toggle(), GameMode::HumanVsAi);
    }
}
