//! Error types for the resource model.

use thiserror::Error;

/// Result type alias for model operations.
pub type ModelResult<T> = Result<T, ModelError>;

/// Errors that can occur while building or converting resources.
#[derive(Error, Debug)]
pub enum ModelError {
    #[error("Missing required field {field} on {resource}")]
    MissingField { resource: String, field: String },

    #[error("Expected a resource or a sequence of resources, found {found}")]
    TypeMismatch { found: String },

    #[error("Invalid quantity: {0}")]
    InvalidQuantity(String),
}
