//! Identifier sanitization and input checks
//!
//! JSON keys can contain anything; SQL identifiers cannot. `clean_identifier`
//! reduces a raw key to a string safe for use as an unquoted identifier. The
//! function is total: cleaning cannot fail, it only degrades to a shorter
//! (possibly empty) result.

use thiserror::Error;

/// Errors that can occur during input validation
#[derive(Debug, Clone, Error)]
pub enum ValidationError {
    /// Input is empty when a value is required
    #[error("{0} cannot be empty")]
    Empty(&'static str),
}

/// Sanitize a raw JSON field name into an unquoted SQL identifier
///
/// # Rules
///
/// - The leading run of non-letter characters is stripped once, so a
///   non-empty result starts with an ASCII letter
/// - Everything else that is not an ASCII letter, digit, or underscore is
///   removed
/// - An input with no letters legitimately yields an empty string; this is
///   accepted behavior, not an error
///
/// # Examples
///
/// ```
/// use json_ddl_sdk::validation::clean_identifier;
///
/// assert_eq!(clean_identifier("user.name:1"), "username1");
/// assert_eq!(clean_identifier("123abc"), "abc");
/// assert_eq!(clean_identifier("$%^"), "");
/// ```
pub fn clean_identifier(raw: &str) -> String {
    let rest = raw.trim_start_matches(|c: char| !c.is_ascii_alphabetic());

    let cleaned: String = rest
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == '_')
        .collect();

    // ':' and '.' are already excluded by the filter above; kept as a final
    // guard to match the historical cleaning passes
    cleaned.replace([':', '.'], "")
}

/// Validate a table name or table type label
///
/// Labels are opaque pre-resolved strings; the only requirement is that they
/// are not blank.
pub fn validate_table_label(label: &str) -> Result<(), ValidationError> {
    if label.trim().is_empty() {
        return Err(ValidationError::Empty("table label"));
    }
    Ok(())
}
