//! Validation functionality
//!
//! Provides validation and sanitization logic for:
//! - SQL identifier cleaning (JSON keys to unquoted identifiers)
//! - Table name / table type label checks

pub mod identifier;

pub use identifier::{ValidationError, clean_identifier, validate_table_label};
