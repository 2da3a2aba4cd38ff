//! Error types for the BioLit application.

use crate::mode::AppMode;
use thiserror::Error;

/// A shared error type for the entire BioLit application.
///
/// This provides typed, structured error variants with automatic conversion
/// from common error types via the `From` trait. The only two failure
/// reasons surfaced verbatim to the user are missing credentials and a
/// failed model request; everything else is internal plumbing.
#[derive(Error, Debug, Clone)]
pub enum BiolitError {
    /// No API key was found in the environment or in secret.json.
    #[error("API key is missing. Set GEMINI_API_KEY or add it to secret.json")]
    MissingCredentials,

    /// The model endpoint returned a non-success HTTP status.
    #[error("Model request failed ({status}): {message}")]
    Api { status: u16, message: String },

    /// The request never reached the model endpoint.
    #[error("Model request failed: {0}")]
    Network(String),

    /// The model responded but the response carried no text candidate.
    #[error("Model returned no text in the response candidates")]
    EmptyResponse,

    /// The mode is declared in the registry but has no backing model call.
    #[error("Mode '{0}' is not backed by a model call yet")]
    UnsupportedMode(AppMode),

    /// Entity not found error with type information.
    #[error("Entity not found: {entity_type} '{id}'")]
    NotFound {
        entity_type: &'static str,
        id: String,
    },

    /// IO error (file system operations).
    #[error("IO error: {message}")]
    Io { message: String },

    /// Serialization/deserialization error.
    #[error("Serialization error: {format} - {message}")]
    Serialization { format: String, message: String },

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl BiolitError {
    /// Creates a NotFound error.
    pub fn not_found(entity_type: &'static str, id: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type,
            id: id.into(),
        }
    }

    /// Creates an IO error.
    pub fn io(message: impl Into<String>) -> Self {
        Self::Io {
            message: message.into(),
        }
    }

    /// Creates a Config error.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Check if this is a NotFound error.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if this error should be reported as a credentials problem
    /// rather than a generic request failure.
    pub fn is_missing_credentials(&self) -> bool {
        matches!(self, Self::MissingCredentials)
    }
}

impl From<std::io::Error> for BiolitError {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            message: format!("{} (kind: {:?})", err, err.kind()),
        }
    }
}

impl From<serde_json::Error> for BiolitError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization {
            format: "JSON".to_string(),
            message: err.to_string(),
        }
    }
}

impl From<toml::de::Error> for BiolitError {
    fn from(err: toml::de::Error) -> Self {
        Self::Serialization {
            format: "TOML".to_string(),
            message: err.to_string(),
        }
    }
}

impl From<toml::ser::Error> for BiolitError {
    fn from(err: toml::ser::Error) -> Self {
        Self::Serialization {
            format: "TOML".to_string(),
            message: err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_credentials_is_distinguished() {
        let err = BiolitError::MissingCredentials;
        assert!(err.is_missing_credentials());
        assert!(!BiolitError::Network("down".into()).is_missing_credentials());
    }

    #[test]
    fn not_found_helper() {
        let err = BiolitError::not_found("result", "abc");
        assert!(err.is_not_found());
        assert_eq!(err.to_string(), "Entity not found: result 'abc'");
    }
}
