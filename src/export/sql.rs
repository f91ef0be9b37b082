//! SQL exporter for generating CREATE TABLE statements from JSON documents
//!
//! Orchestrates the classifier and the identifier sanitizer over all
//! top-level fields of a document and renders the result as a single DDL
//! string. The whole pipeline is a pure function of (table name, JSON text,
//! table type); nothing is retained across calls.

use tracing::debug;

use crate::inference::{InferenceConfig, InferenceError, SchemaField, infer_fields};

/// Exporter for SQL CREATE TABLE format
pub struct DdlExporter;

impl DdlExporter {
    /// Generate a CREATE TABLE statement for a JSON document
    ///
    /// # Arguments
    ///
    /// * `table_name` - Pre-resolved table name, used verbatim
    /// * `json` - The JSON document text; must parse to an object
    /// * `table_type` - Target table label (hive, mysql, oracle, ...). The
    ///   label is recorded but does not change the emitted type vocabulary;
    ///   dialect-specific mapping is a deliberate extension point.
    /// * `config` - Inference configuration
    ///
    /// # Errors
    ///
    /// Fails with [`InferenceError::JsonParse`] on malformed input and
    /// [`InferenceError::InvalidStructure`] when the root is not an object.
    /// No DDL is produced on failure.
    ///
    /// # Example
    ///
    /// ```
    /// use json_ddl_sdk::export::DdlExporter;
    /// use json_ddl_sdk::inference::InferenceConfig;
    ///
    /// let config = InferenceConfig::default();
    /// let ddl = DdlExporter::assemble(
    ///     "people",
    ///     r#"{"id": 1, "name": "Bob"}"#,
    ///     "standard",
    ///     &config,
    /// )
    /// .unwrap();
    /// assert!(ddl.starts_with("CREATE TABLE people"));
    /// ```
    pub fn assemble(
        table_name: &str,
        json: &str,
        table_type: &str,
        config: &InferenceConfig,
    ) -> Result<String, InferenceError> {
        let fields = infer_fields(json, config)?;

        debug!(
            table = table_name,
            table_type,
            columns = fields.len(),
            "assembling CREATE TABLE statement"
        );

        Ok(Self::render(table_name, &fields))
    }

    /// Render already-inferred fields as a CREATE TABLE statement
    ///
    /// Output format is `CREATE TABLE <name> ( <col> <TYPE>, ... ) ` with a
    /// trailing space before and after the closing parenthesis; a document
    /// with zero top-level fields renders an empty column list.
    pub fn render(table_name: &str, fields: &[SchemaField]) -> String {
        let columns: Vec<String> = fields
            .iter()
            .map(|f| format!("{} {}", f.clean_name, f.column_type))
            .collect();

        format!("CREATE TABLE {} ( {} ) ", table_name, columns.join(", "))
    }
}
