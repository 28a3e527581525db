//! Error types for configuration loading.

use std::path::PathBuf;
use thiserror::Error;

/// Result type for configuration operations.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Errors that can occur while loading a step configuration file.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read the step file.
    #[error("Failed to read step file {path}: {source}")]
    ReadFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse the step file JSON.
    #[error("Failed to parse step file: {0}")]
    ParseFailed(#[source] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ConfigError::ReadFailed {
            path: PathBuf::from("missing.json"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "no such file"),
        };
        assert!(err.to_string().contains("missing.json"));

        let parse_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err = ConfigError::ParseFailed(parse_err);
        assert!(err.to_string().contains("Failed to parse step file"));
    }
}
