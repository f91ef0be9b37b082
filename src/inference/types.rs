//! Column types inferred for JSON values

use serde::{Deserialize, Serialize};

/// SQL column type inferred for a single JSON field
///
/// A closed vocabulary: classification picks exactly one type per field, in
/// a fixed priority order with no backtracking. `Varchar` carries a width
/// computed from the first observed value; all other types are fixed-width
/// tags. The same vocabulary is emitted regardless of the declared target
/// database.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ColumnType {
    /// 32-bit integer
    Int,
    /// 64-bit integer
    Long,
    /// Single character (textual rendering of length <= 1)
    Char,
    /// Boolean ("true"/"false", case-insensitive)
    Boolean,
    /// Calendar date
    Date,
    /// Date with time component
    DateTime,
    /// Variable-length text with a computed width
    Varchar { width: usize },
}

impl std::fmt::Display for ColumnType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ColumnType::Int => write!(f, "INT"),
            ColumnType::Long => write!(f, "LONG"),
            ColumnType::Char => write!(f, "CHAR(1)"),
            ColumnType::Boolean => write!(f, "BOOLEAN"),
            ColumnType::Date => write!(f, "DATE"),
            ColumnType::DateTime => write!(f, "DATETIME"),
            ColumnType::Varchar { width } => write!(f, "VARCHAR({})", width),
        }
    }
}

/// A single inferred column: raw JSON key, sanitized identifier, and type
///
/// Created during classification and consumed by the DDL exporter; never
/// persisted beyond one document's processing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SchemaField {
    /// Field name as it appears in the JSON document
    pub raw_name: String,
    /// Sanitized SQL identifier (may be empty if the key had no letters)
    pub clean_name: String,
    /// Inferred SQL column type
    pub column_type: ColumnType,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_fixed_types() {
        assert_eq!(ColumnType::Int.to_string(), "INT");
        assert_eq!(ColumnType::Long.to_string(), "LONG");
        assert_eq!(ColumnType::Char.to_string(), "CHAR(1)");
        assert_eq!(ColumnType::Boolean.to_string(), "BOOLEAN");
        assert_eq!(ColumnType::Date.to_string(), "DATE");
        assert_eq!(ColumnType::DateTime.to_string(), "DATETIME");
    }

    #[test]
    fn test_display_varchar_width() {
        assert_eq!(ColumnType::Varchar { width: 15 }.to_string(), "VARCHAR(15)");
    }
}
