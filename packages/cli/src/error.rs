//! Error types for the command line.

use picoplaca_engine::EngineError;
use thiserror::Error;

/// Main error type for the command line.
#[derive(Debug, Error)]
pub enum CliError {
    /// Validation, calendar or holiday-source failure.
    #[error(transparent)]
    Engine(#[from] EngineError),

    /// HTTP client could not be built.
    #[error("HTTP client error: {0}")]
    Http(#[from] reqwest::Error),

    /// IO error (reading prompted input).
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error.
    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),

    /// Invalid runtime configuration.
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Result type alias for command line operations.
pub type Result<T> = std::result::Result<T, CliError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_engine_error_is_transparent() {
        let err = CliError::from(EngineError::InvalidPlate("ab1234".to_string()));
        assert_eq!(
            err.to_string(),
            EngineError::InvalidPlate("ab1234".to_string()).to_string()
        );
    }

    #[test]
    fn test_config_error_display() {
        let err = CliError::Config("PICOPLACA_HOLIDAY_MODE must be 'local' or 'remote'".into());
        assert!(err.to_string().starts_with("Configuration error:"));
        assert!(err.to_string().contains("PICOPLACA_HOLIDAY_MODE"));
    }
}
