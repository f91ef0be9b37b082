//! Date and time matching for string values
//!
//! The classifier distinguishes date-like strings from generic text with an
//! ordered cascade: one strict SQL date-literal check, then several lenient
//! shape matchers. Lenient here means the numeric components are not range
//! checked, so rolled-over values such as month 13 still match; only the
//! overall shape of the string is validated.

use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;

/// Strict SQL date literal (`YYYY-MM-DD`, components in calendar range)
///
/// The input is taken as-is; the lenient matchers below trim theirs.
pub fn is_strict_sql_date(value: &str) -> bool {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").is_ok()
}

// Common date-time shapes tried by the format-guessing pass. Ordered most
// common first; extend this list to recognize additional formats.
static COMMON_DATETIME_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    vec![
        // ISO 8601 with T separator, optional fraction and zone offset
        Regex::new(r"^\d{1,4}-\d{1,2}-\d{1,2}T\d{1,2}:\d{2}:\d{2}(\.\d+)?(Z|[+-]\d{2}:?\d{2})?$")
            .unwrap(),
        // ISO-style with space separator
        Regex::new(r"^\d{1,4}-\d{1,2}-\d{1,2} \d{1,2}:\d{2}:\d{2}(\.\d+)?$").unwrap(),
        // Day, month name, year with time ("02 Jan 2006 15:04:05")
        Regex::new(r"^\d{1,2} [A-Za-z]{3,9} \d{4} \d{1,2}:\d{2}:\d{2}$").unwrap(),
    ]
});

static RFC822_DATETIME_REGEX: Lazy<Regex> = Lazy::new(|| {
    // "EEE, dd MMM yyyy HH:mm:ss Z" shape; zone is a numeric offset or an
    // alphabetic zone name
    Regex::new(r"^[A-Za-z]{2,9}, ?\d{1,2} [A-Za-z]{3,9} \d{1,4} \d{1,2}:\d{2}:\d{2} ([+-]\d{4}|[A-Za-z]{1,5})$")
        .unwrap()
});

static MDY_DATETIME_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d{1,2}/\d{1,2}/\d{1,4} \d{1,2}:\d{2}:\d{2}$").unwrap());

static LOOSE_DATE_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d{1,4}-\d{1,2}-\d{1,2}$").unwrap());

/// Format-guessing pass across common date-time shapes
pub fn matches_common_datetime(value: &str) -> bool {
    let value = value.trim();
    COMMON_DATETIME_PATTERNS.iter().any(|p| p.is_match(value))
}

/// RFC-822-style date-time shape ("Mon, 02 Jan 2006 15:04:05 -0700"), lenient
pub fn is_rfc822_datetime(value: &str) -> bool {
    RFC822_DATETIME_REGEX.is_match(value.trim())
}

/// `mm/dd/yyyy HH:MM:SS` shape, lenient
pub fn is_mdy_datetime(value: &str) -> bool {
    MDY_DATETIME_REGEX.is_match(value.trim())
}

/// `yyyy-MM-dd` shape without range checks; a second, looser date pass that
/// accepts rolled-over components the strict literal check rejects
pub fn is_loose_date(value: &str) -> bool {
    LOOSE_DATE_REGEX.is_match(value.trim())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strict_sql_date() {
        assert!(is_strict_sql_date("2021-01-05"));
        assert!(is_strict_sql_date("2024-12-31"));
        assert!(!is_strict_sql_date("2021-13-45")); // out of range
        assert!(!is_strict_sql_date("05-01-2021"));
        assert!(!is_strict_sql_date("not a date"));
    }

    #[test]
    fn test_common_datetime_shapes() {
        assert!(matches_common_datetime("2024-01-15T10:30:00"));
        assert!(matches_common_datetime("2024-01-15T10:30:00Z"));
        assert!(matches_common_datetime("2024-01-15T10:30:00+05:00"));
        assert!(matches_common_datetime("2024-01-15 10:30:00"));
        assert!(matches_common_datetime("02 Jan 2006 15:04:05"));
        assert!(!matches_common_datetime("2024-01-15")); // date only
        assert!(!matches_common_datetime("hello"));
    }

    #[test]
    fn test_rfc822_datetime() {
        assert!(is_rfc822_datetime("Mon, 02 Jan 2006 15:04:05 -0700"));
        assert!(is_rfc822_datetime("Tue, 3 Jun 2008 11:05:30 GMT"));
        // lenient: out-of-range components still match the shape
        assert!(is_rfc822_datetime("Xyz, 45 Foo 2006 99:99:99 +0000"));
        assert!(!is_rfc822_datetime("02 Jan 2006 15:04:05 -0700")); // no weekday
    }

    #[test]
    fn test_mdy_datetime() {
        assert!(is_mdy_datetime("12/25/2021 10:30:00"));
        assert!(is_mdy_datetime("1/5/2021 9:00:00"));
        // lenient: month 13 still matches the shape
        assert!(is_mdy_datetime("13/45/2021 10:30:00"));
        assert!(!is_mdy_datetime("12/25/2021"));
    }

    #[test]
    fn test_loose_date() {
        assert!(is_loose_date("2021-01-05"));
        assert!(is_loose_date("2021-13-45")); // rolled-over components accepted
        assert!(is_loose_date("2021-1-5"));
        assert!(!is_loose_date("2021/01/05"));
        assert!(!is_loose_date("hello"));
    }

    #[test]
    fn test_lenient_matchers_trim() {
        assert!(is_loose_date("  2021-13-45  "));
        assert!(is_mdy_datetime(" 12/25/2021 10:30:00 "));
    }
}
