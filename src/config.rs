use std::path::Path;
use std::time::Duration;

use crate::error::ConfigError;

/// Application configuration, loadable from TOML.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Board width in columns. Columns are keyed 0-9, so at most 10.
    pub width: usize,
    /// Board height in rows.
    pub height: usize,
    /// Pause between frames of the falling animation, in milliseconds.
    pub drop_interval_ms: u64,
    /// Blink cadence for the win flash and idle splash, in milliseconds.
    pub blink_interval_ms: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        // 10x9 fits the full splash pattern.
        GameConfig {
            width: 10,
            height: 9,
            drop_interval_ms: 30,
            blink_interval_ms: 500,
        }
    }
}

impl GameConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: GameConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the
    /// file does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width == 0 {
            return Err(ConfigError::Validation("width must be > 0".into()));
        }
        if self.width > 10 {
            return Err(ConfigError::Validation(
                "width must be <= 10 (columns are keyed 0-9)".into(),
            ));
        }
        if self.height == 0 {
            return Err(ConfigError::Validation("height must be > 0".into()));
        }
        if self.height > 50 {
            return Err(ConfigError::Validation(
                "height must be <= 50 (the board has to fit on screen)".into(),
            ));
        }
        if self.blink_interval_ms == 0 {
            return Err(ConfigError::Validation(
                "blink_interval_ms must be > 0".into(),
            ));
        }
        Ok(())
    }

    pub fn drop_interval(&self) -> Duration {
        Duration::from_millis(self.drop_interval_ms)
    }

    pub fn blink_interval(&self) -> Duration {
        Duration::from_millis(self.blink_interval_ms)
    }

    /// Generate a TOML string with all default values (useful for creating
    /// example config files).
    pub fn default_toml() -> String {
        toml::to_string_pretty(&GameConfig::default()).expect("default config serializes")
    }
}
