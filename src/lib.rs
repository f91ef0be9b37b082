//! JSON DDL SDK - Infer relational schemas from JSON documents
//!
//! Provides unified interfaces for:
//! - Type inference (classify JSON field values into SQL column types)
//! - Identifier sanitization (clean JSON keys into SQL identifiers)
//! - DDL export (render a CREATE TABLE statement per document)
//! - Input validation for table names and type labels

pub mod cli;
pub mod export;
pub mod inference;
pub mod validation;

// Re-export commonly used types
pub use export::DdlExporter;
pub use inference::{
    ColumnType, InferenceConfig, InferenceConfigBuilder, InferenceError, SchemaField, classify,
    infer_fields,
};
pub use validation::{ValidationError, clean_identifier, validate_table_label};
