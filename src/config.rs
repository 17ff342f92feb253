use std::path::Path;

use crate::error::ConfigError;
use crate::game::MIN_DIMENSION;

/// Top-level application configuration, loadable from TOML.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub board: BoardConfig,
    pub players: PlayerConfig,
}

/// Board dimensions for new sessions.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    pub rows: usize,
    pub cols: usize,
}

/// Display identities (color names) for the two player slots.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct PlayerConfig {
    pub one: String,
    pub two: String,
}

impl Default for BoardConfig {
    fn default() -> Self {
        BoardConfig { rows: 6, cols: 7 }
    }
}

impl Default for PlayerConfig {
    fn default() -> Self {
        PlayerConfig {
            one: "red".to_string(),
            two: "blue".to_string(),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            board: BoardConfig::default(),
            players: PlayerConfig::default(),
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
            eprintln!(
                "Warning: config file '{}' not found, using defaults",
                path.display()
            );
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.board.rows < MIN_DIMENSION {
            return Err(ConfigError::Validation(
                "board.rows must be at least 4".into(),
            ));
        }
        if self.board.cols < MIN_DIMENSION {
            return Err(ConfigError::Validation(
                "board.cols must be at least 4".into(),
            ));
        }
        if self.players.one.trim().is_empty() || self.players.two.trim().is_empty() {
            return Err(ConfigError::Validation(
                "players.one and players.two must both be set".into(),
            ));
        }
        if self.players.one == self.players.two {
            return Err(ConfigError::Validation(
                "players.one and players.two must differ".into(),
            ));
        }

        Ok(())
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
        assert_eq!(config.board.rows, 6);
        assert_eq!(config.board.cols, 7);
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let toml_str = r#"
[board]
rows = 8
"#;
        let config: AppConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.board.rows, 8);
        // Other fields should be defaults
        assert_eq!(config.board.cols, 7);
        assert_eq!(config.players.one, "red");
    }

    #[test]
    fn test_empty_toml_uses_all_defaults() {
        let config: AppConfig = toml::from_str("").unwrap();
        assert_eq!(config.board.cols, 7);
        assert_eq!(config.players.two, "blue");
    }

    #[test]
    fn test_validation_rejects_short_rows() {
        let mut config = AppConfig::default();
        config.board.rows = 3;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_short_cols() {
        let mut config = AppConfig::default();
        config.board.cols = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_blank_identity() {
        let mut config = AppConfig::default();
        config.players.one = "  ".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_equal_identities() {
        let mut config = AppConfig::default();
        config.players.one = "green".to_string();
        config.players.two = "green".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_load_or_default_missing_file() {
        let config = AppConfig::load_or_default(Path::new("nonexistent_config.toml")).unwrap();
        assert_eq!(config.board.rows, 6);
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
rows = 5
cols = 9

[players]
one = "teal"
two = "orange"
"#
        )
        .unwrap();

        let config = AppConfig::load(&path).unwrap();
        assert_eq!(config.board.rows, 5);
        assert_eq!(config.board.cols, 9);
        assert_eq!(config.players.one, "teal");
        assert_eq!(config.players.two, "orange");
    }

    #[test]
    fn test_load_rejects_invalid_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad_config.toml");
        let mut f = std::fs::File::create(&path).unwrap();
        writeln!(
            f,
            r#"
[players]
one = "green"
two = "green"
"#
        )
        .unwrap();

        assert!(matches!(
            AppConfig::load(&path),
            Err(ConfigError::Validation(_))
        ));
    }

    #[test]
    fn test_default_toml_roundtrips() {
        let toml_str = AppConfig::default_toml();
        let config: AppConfig = toml::from_str(&toml_str).unwrap();
        config.validate().expect("roundtripped config should be valid");
    }
}
