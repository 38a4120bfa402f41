use std::path::Path;

use log::warn;

use crate::error::ConfigError;
use crate::game::{Game, Player, DEFAULT_HEIGHT, DEFAULT_WIDTH, LINE_LENGTH};

/// Largest accepted board height or width.
pub const MAX_DIMENSION: usize = 64;

/// Top-level application configuration, loadable from TOML.
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub board: BoardConfig,
    pub players: PlayersConfig,
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    pub height: usize,
    pub width: usize,
}

impl Default for BoardConfig {
    fn default() -> Self {
        BoardConfig {
            height: DEFAULT_HEIGHT,
            width: DEFAULT_WIDTH,
        }
    }
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct PlayersConfig {
    pub first: Player,
    pub second: Player,
}

impl Default for PlayersConfig {
    fn default() -> Self {
        PlayersConfig {
            first: Player::new("Player 1", "red"),
            second: Player::new("Player 2", "yellow"),
        }
    }
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: AppConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the file
    /// does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            warn!("config file '{}' not found, using defaults", path.display());
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.board.height == 0 {
            return Err(ConfigError::Validation("board.height must be >= 1".into()));
        }
        if self.board.width == 0 {
            return Err(ConfigError::Validation("board.width must be >= 1".into()));
        }
        if self.board.height > MAX_DIMENSION {
            return Err(ConfigError::Validation(format!(
                "board.height must be <= {MAX_DIMENSION}"
            )));
        }
        if self.board.width > MAX_DIMENSION {
            return Err(ConfigError::Validation(format!(
                "board.width must be <= {MAX_DIMENSION}"
            )));
        }
        for (key, player) in [("first", &self.players.first), ("second", &self.players.second)] {
            if player.name.trim().is_empty() {
                return Err(ConfigError::Validation(format!(
                    "players.{key}.name must not be empty"
                )));
            }
            if player.color.trim().is_empty() {
                return Err(ConfigError::Validation(format!(
                    "players.{key}.color must not be empty"
                )));
            }
        }

        if self.board.height < LINE_LENGTH || self.board.width < LINE_LENGTH {
            warn!(
                "{}x{} board is too small for a line of {}; every game will tie",
                self.board.height, self.board.width, LINE_LENGTH
            );
        }

        Ok(())
    }

    /// Start a fresh game from these settings.
    pub fn new_game(&self) -> Game {
        Game::with_size(
            self.players.first.clone(),
            self.players.second.clone(),
            self.board.height,
            self.board.width,
        )
    }

    /// Generate a TOML string with all default values (useful for creating
    /// example config files).
    pub fn default_toml() -> String {
        toml::to_string_pretty(&AppConfig::default()).expect("default config serializes")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config_is_valid() {
        let config = AppConfig::default();
        config.validate().expect("default config should be valid");
        assert_eq!(config.board.height, 6);
        assert_eq!(config.board.width, 7);
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let toml_str = r#"
[players.first]
name = "Ada"
color = "green"
"#;
        let config: AppConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.players.first, Player::new("Ada", "green"));
        // Other fields should be defaults
        assert_eq!(config.players.second, Player::new("Player 2", "yellow"));
        assert_eq!(config.board.width, 7);
    }

    #[test]
    fn test_empty_toml_uses_all_defaults() {
        let config: AppConfig = toml::from_str("").unwrap();
        let default = AppConfig::default();
        assert_eq!(config.board.height, default.board.height);
        assert_eq!(config.players.second, default.players.second);
    }

    #[test]
    fn test_validation_rejects_zero_height() {
        let mut config = AppConfig::default();
        config.board.height = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_zero_width() {
        let mut config = AppConfig::default();
        config.board.width = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_blank_name() {
        let mut config = AppConfig::default();
        config.players.second.name = "  ".into();
        let err = config.validate().unwrap_err();
        assert_eq!(
            err.to_string(),
            "config validation error: players.second.name must not be empty"
        );
    }

    #[test]
    fn test_validation_rejects_blank_color() {
        let mut config = AppConfig::default();
        config.players.first.color = String::new();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_oversized_board() {
        let mut config = AppConfig::default();
        config.board.height = 1 << 33;
        config.board.width = 1 << 33;
        assert!(matches!(config.validate(), Err(ConfigError::Validation(_))));

        let mut config = AppConfig::default();
        config.board.height = 65_535;
        let err = config.validate().unwrap_err();
        assert_eq!(
            err.to_string(),
            "config validation error: board.height must be <= 64"
        );

        let mut config = AppConfig::default();
        config.board.width = MAX_DIMENSION + 1;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_accepts_max_board() {
        let mut config = AppConfig::default();
        config.board.height = MAX_DIMENSION;
        config.board.width = MAX_DIMENSION;
        config.validate().expect("largest board is allowed");
        assert_eq!(config.new_game().board().width(), MAX_DIMENSION);
    }

    #[test]
    fn test_validation_accepts_small_board() {
        let mut config = AppConfig::default();
        config.board.height = 3;
        config.board.width = 3;
        config.validate().expect("small boards are allowed");
    }

    #[test]
    fn test_new_game_uses_config() {
        let mut config = AppConfig::default();
        config.board.height = 5;
        config.board.width = 9;
        let game = config.new_game();
        assert_eq!(game.board().height(), 5);
        assert_eq!(game.board().width(), 9);
        assert_eq!(game.current_player().name, "Player 1");
        assert!(game.is_active());
    }

    #[test]
    fn test_load_or_default_missing_file() {
        let config = AppConfig::load_or_default(Path::new("nonexistent_config.toml")).unwrap();
        assert_eq!(config.board.height, 6);
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("test_config.toml");
        let mut f = std::fs::File::create(&path).unwrap();
        writeln!(
            f,
            r#"
[board]
height = 8

[players.second]
name = "Grace"
color = "blue"
"#
        )
        .unwrap();

        let config = AppConfig::load(&path).unwrap();
        assert_eq!(config.board.height, 8);
        assert_eq!(config.players.second, Player::new("Grace", "blue"));
        // Others are defaults
        assert_eq!(config.board.width, 7);
    }

    #[test]
    fn test_load_rejects_invalid_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.toml");
        std::fs::write(&path, "[board]\nwidth = 0\n").unwrap();
        assert!(matches!(
            AppConfig::load(&path),
            Err(ConfigError::Validation(_))
        ));
    }

    #[test]
    fn test_load_rejects_malformed_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.toml");
        std::fs::write(&path, "[board\n").unwrap();
        assert!(matches!(
            AppConfig::load(&path),
            Err(ConfigError::TomlParse(_))
        ));
    }

    #[test]
    fn test_default_toml_roundtrips() {
        let toml_str = AppConfig::default_toml();
        let config: AppConfig = toml::from_str(&toml_str).unwrap();
        config.validate().expect("roundtripped config should be valid");
        assert_eq!(config.players.first, AppConfig::default().players.first);
    }
}
