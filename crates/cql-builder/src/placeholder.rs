//! Placeholder marker handling.
//!
//! Markers are found by a plain scan for `?`. There is no escaping and no
//! awareness of quoted literals, so `name = '?'` counts as one marker. All
//! marker-sensitive code goes through this module.

use crate::value::CqlValue;

/// The positional placeholder marker.
pub const PLACEHOLDER: char = '?';

/// Counts the placeholder markers in a piece of statement text.
#[must_use]
pub fn count_placeholders(text: &str) -> usize {
    text.matches(PLACEHOLDER).count()
}

/// Trims the text and folds every run of whitespace into a single space.
#[must_use]
pub fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Replaces markers left to right with the inline form of `params`.
///
/// Markers without a matching parameter are left as they are; surplus
/// parameters are ignored.
#[must_use]
pub fn interpolate(query: &str, params: &[CqlValue]) -> String {
    let mut out = String::with_capacity(query.len());
    let mut params = params.iter();

    for ch in query.chars() {
        if ch == PLACEHOLDER {
            if let Some(value) = params.next() {
                out.push_str(&value.to_cql_inline());
                continue;
            }
        }
        out.push(ch);
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_count_placeholders() {
        assert_eq!(count_placeholders("column1 = false"), 0);
        assert_eq!(count_placeholders("key1 = ?"), 1);
        assert_eq!(count_placeholders("columns2 IN (?, ?, ?, ?)"), 4);
    }

    #[test]
    fn test_count_placeholders_ignores_quoting() {
        // Known limitation: quoted question marks still count.
        assert_eq!(count_placeholders("name = '?'"), 1);
        assert_eq!(count_placeholders("a = ?? "), 2);
    }

    #[test]
    fn test_collapse_whitespace() {
        assert_eq!(
            collapse_whitespace("  SELECT *  FROM t    LIMIT ? "),
            "SELECT * FROM t LIMIT ?"
        );
        assert_eq!(collapse_whitespace("a\n\tb"), "a b");
        assert_eq!(collapse_whitespace("   "), "");
    }

    #[test]
    fn test_interpolate() {
        let params = vec![CqlValue::Int(1), CqlValue::Text(String::from("x'y"))];
        assert_eq!(
            interpolate("SELECT * FROM t WHERE a = ? AND b = ?", &params),
            "SELECT * FROM t WHERE a = 1 AND b = 'x''y'"
        );
    }

    #[test]
    fn test_interpolate_short_params() {
        assert_eq!(
            interpolate("a = ? AND b = ?", &[CqlValue::Null]),
            "a = NULL AND b = ?"
        );
    }
}
