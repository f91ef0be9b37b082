//! Error types for schema inference

use thiserror::Error;

/// Errors that can occur while inferring a schema from a JSON document
///
/// Classification itself never fails: the `VARCHAR` fallback rule makes it
/// total. Only the document-level parse can fail, and it fails the whole
/// document rather than individual fields.
#[derive(Error, Debug, Clone)]
pub enum InferenceError {
    /// JSON parsing error
    #[error("JSON parsing error: {0}")]
    JsonParse(String),

    /// Invalid JSON structure (not an object at root)
    #[error("Invalid JSON structure: expected object at root, found {0}")]
    InvalidStructure(String),
}

impl From<serde_json::Error> for InferenceError {
    fn from(e: serde_json::Error) -> Self {
        InferenceError::JsonParse(e.to_string())
    }
}
