//! Type inference for JSON field values
//!
//! This module classifies each top-level field of a JSON document into a SQL
//! column type using an ordered cascade of probing rules.
//!
//! ## Features
//!
//! - **Numeric probing** - 32-bit integers map to `INT`, 64-bit to `LONG`
//! - **Date/time detection** - strict SQL date literals plus a cascade of
//!   lenient shape matchers for common date-time formats
//! - **Total classification** - every value resolves to a concrete type; an
//!   unrecognized shape falls back to a padded `VARCHAR`
//!
//! ## Example
//!
//! ```rust,ignore
//! use json_ddl_sdk::inference::{InferenceConfig, infer_fields};
//!
//! let config = InferenceConfig::default();
//! let fields = infer_fields(r#"{"id": 1, "name": "Bob"}"#, &config)?;
//! for field in &fields {
//!     println!("{} {}", field.clean_name, field.column_type);
//! }
//! ```

mod classifier;
mod config;
mod error;
mod formats;
mod types;

pub use classifier::{classify, infer_fields};
pub use config::{InferenceConfig, InferenceConfigBuilder};
pub use error::InferenceError;
pub use types::{ColumnType, SchemaField};
