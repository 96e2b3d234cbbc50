use std::path::PathBuf;

/// Errors that can occur constructing game state. Invalid play input never
/// lands here; it is absorbed as a rejected outcome.
#[derive(Debug, thiserror::Error)]
pub enum GameError {
    #[error("board dimensions must be positive (got {width}x{height})")]
    InvalidDimensions { width: usize, height: usize },
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("config validation error: {0}")]
    Validation(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_game_error_display() {
        let err = GameError::InvalidDimensions {
            width: 0,
            height: 6,
        };
        assert_eq!(err.to_string(), "board dimensions must be positive (got 0x6)");
    }

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::Validation("width must be > 0".to_string());
        assert_eq!(err.to_string(), "config validation error: width must be > 0");
    }
}
