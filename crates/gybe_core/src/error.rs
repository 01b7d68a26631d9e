//! Error types for transpilation.

use gybe_model::ModelError;
use thiserror::Error;

/// Result type alias for transpiler operations.
pub type TranspileResult<T> = Result<T, TranspileError>;

/// Errors that can occur while turning resources into documents.
#[derive(Error, Debug)]
pub enum TranspileError {
    /// A value in the resource graph has no document representation.
    #[error("Cannot serialize {path}: {reason}")]
    Unserializable { path: String, reason: String },

    #[error("Model error: {0}")]
    Model(#[from] ModelError),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid render config: {0}")]
    Config(#[from] toml::de::Error),
}

impl TranspileError {
    pub fn unserializable(path: impl Into<String>, reason: impl Into<String>) -> Self {
        TranspileError::Unserializable {
            path: path.into(),
            reason: reason.into(),
        }
    }
}
