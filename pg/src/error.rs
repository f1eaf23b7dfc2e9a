//! Error types for the prompt pipeline

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while generating a prompt
#[derive(Debug, Error)]
pub enum PromptGenError {
    #[error("{what} not found: {path}")]
    NotFound { what: &'static str, path: PathBuf },

    #[error("Invalid JSON in {path}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid JSON in {path}: {reason}")]
    InvalidShape { path: PathBuf, reason: String },

    #[error("Invalid configuration: {field} is empty")]
    Validation { field: &'static str },

    #[error("Template {path} has no 'steps' array with content")]
    EmptyTemplate { path: PathBuf },

    #[error("IO error on {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Console IO error: {0}")]
    Console(#[from] std::io::Error),
}

impl PromptGenError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Check if this error comes from malformed structured data
    pub fn is_parse(&self) -> bool {
        matches!(self, Self::Parse { .. } | Self::InvalidShape { .. })
    }

    /// Name of the config field that failed validation, if any
    pub fn invalid_field(&self) -> Option<&'static str> {
        match self {
            Self::Validation { field } => Some(*field),
            _ => None,
        }
    }
}

/// Result alias used across the library
pub type Result<T> = std::result::Result<T, PromptGenError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_message() {
        let err = PromptGenError::NotFound {
            what: "Config file",
            path: PathBuf::from("/tmp/missing.json"),
        };

        let msg = err.to_string();
        assert!(msg.contains("Config file"));
        assert!(msg.contains("/tmp/missing.json"));
    }

    #[test]
    fn test_validation_names_field() {
        let err = PromptGenError::Validation { field: "colunas" };
        assert_eq!(err.invalid_field(), Some("colunas"));
        assert!(err.to_string().contains("colunas"));
        assert!(!err.is_parse());
    }

    #[test]
    fn test_is_parse() {
        let source = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err = PromptGenError::Parse {
            path: PathBuf::from("t.json"),
            source,
        };
        assert!(err.is_parse());

        let err = PromptGenError::InvalidShape {
            path: PathBuf::from("t.json"),
            reason: "steps must be an array".to_string(),
        };
        assert!(err.is_parse());
        assert_eq!(err.invalid_field(), None);
    }

    #[test]
    fn test_io_keeps_source() {
        let err = PromptGenError::io("out/x.txt", std::io::Error::other("disk full"));
        let source = std::error::Error::source(&err).map(|s| s.to_string());
        assert_eq!(source.as_deref(), Some("disk full"));
    }
}
