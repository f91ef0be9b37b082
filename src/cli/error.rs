//! Error types for the CLI

use std::path::PathBuf;

use thiserror::Error;

use crate::inference::InferenceError;
use crate::validation::ValidationError;

/// Errors surfaced by the json-ddl binary
#[derive(Debug, Error)]
pub enum CliError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Failed to read {0}: {1}")]
    FileReadError(PathBuf, String),

    #[error("Failed to write {0}: {1}")]
    FileWriteError(PathBuf, String),

    #[error("DDL generation failed: {0}")]
    GenerationError(#[from] InferenceError),

    #[error("Validation failed: {0}")]
    ValidationError(#[from] ValidationError),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}
