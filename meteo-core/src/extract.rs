//! Lightweight scalar extraction from raw JSON text.
//!
//! Open-Meteo responses are flat enough that a full parse tree buys nothing:
//! every value the report needs is a scalar sitting right after its key. The
//! extractor scans for the quoted key, seeks the colon, and slices out the
//! value literal. Absence is a normal outcome (`None`), never an error.
//!
//! Two limitations are part of the contract and pinned by tests below:
//! the key search ignores nesting, so a key that occurs in more than one
//! object resolves to the first occurrence; and string values are not
//! unescaped, so an embedded `\"` truncates the value at the backslash.

/// Extract the scalar value of `key` from `document`.
///
/// String values come back with their quotes stripped; numbers, booleans and
/// `null` come back as their raw textual form with surrounding whitespace
/// trimmed. Returns `None` when the key is absent or the text around it is
/// too malformed to bound a value.
pub fn extract<'a>(document: &'a str, key: &str) -> Option<&'a str> {
    let needle = format!("\"{key}\"");
    let key_idx = document.find(&needle)?;
    let after_key = key_idx + needle.len();

    let colon = after_key + document[after_key..].find(':')?;

    // Skip ASCII spaces only; the upstream emits single-line JSON.
    let bytes = document.as_bytes();
    let mut start = colon + 1;
    while start < bytes.len() && bytes[start] == b' ' {
        start += 1;
    }
    if start >= bytes.len() {
        return None;
    }

    if bytes[start] == b'"' {
        let close = document[start + 1..].find('"')?;
        return Some(&document[start + 1..start + 1 + close]);
    }

    let rest = &document[start..];
    let end = rest.find([',', '}', ']', '\n']).unwrap_or(rest.len());
    Some(rest[..end].trim())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn string_value_has_quotes_stripped() {
        let doc = r#"{"timezone": "America/New_York", "elevation": 32.0}"#;
        assert_eq!(extract(doc, "timezone"), Some("America/New_York"));
    }

    #[test]
    fn numeric_value_is_returned_verbatim() {
        let doc = r#"{"temperature_2m": 123.45, "weather_code": 3}"#;
        assert_eq!(extract(doc, "temperature_2m"), Some("123.45"));
        assert_eq!(extract(doc, "weather_code"), Some("3"));
    }

    #[test]
    fn negative_and_last_values() {
        let doc = r#"{"longitude": -74.006, "wind_speed_10m": 11.2}"#;
        assert_eq!(extract(doc, "longitude"), Some("-74.006"));
        // Last value in the object is bounded by the closing brace.
        assert_eq!(extract(doc, "wind_speed_10m"), Some("11.2"));
    }

    #[test]
    fn boolean_and_null_values() {
        let doc = r#"{"ok": true, "error": null}"#;
        assert_eq!(extract(doc, "ok"), Some("true"));
        assert_eq!(extract(doc, "error"), Some("null"));
    }

    #[test]
    fn absent_key_is_none_not_a_fault() {
        let doc = r#"{"temperature_2m": 21.0}"#;
        assert_eq!(extract(doc, "surface_pressure"), None);
    }

    #[test]
    fn key_must_match_quoted() {
        // A bare substring that is not a quoted key does not match.
        assert_eq!(extract(r#"{"timezone_abbreviation": "EST"}"#, "timezone"), None);
    }

    #[test]
    fn truncated_document_degrades_to_none() {
        assert_eq!(extract(r#"{"temperature_2m""#, "temperature_2m"), None);
        assert_eq!(extract(r#"{"temperature_2m":"#, "temperature_2m"), None);
        assert_eq!(extract(r#"{"temperature_2m":   "#, "temperature_2m"), None);
        assert_eq!(extract(r#"{"name": "unterminated"#, "name"), None);
    }

    #[test]
    fn escaped_quote_truncates_string_value() {
        // Known limitation: no escape processing, the scan stops at the
        // first quote it sees.
        let doc = r#"{"note": "a\"b"}"#;
        assert_eq!(extract(doc, "note"), Some("a\\"));
    }

    #[test]
    fn duplicate_key_resolves_to_first_occurrence() {
        // The flat search is depth-agnostic; "time" in current_units shadows
        // the one in current, matching the real Open-Meteo layout.
        let doc = r#"{"current_units":{"time":"iso8601"},"current":{"time":"2026-08-06T09:15"}}"#;
        assert_eq!(extract(doc, "time"), Some("iso8601"));
    }

    #[test]
    fn spaces_after_colon_are_skipped() {
        let doc = "{\"elevation\":   32.0}";
        assert_eq!(extract(doc, "elevation"), Some("32.0"));
    }

    #[test]
    fn newline_bounds_an_unquoted_value() {
        let doc = "{\"elevation\": 32.0\n, \"x\": 1}";
        assert_eq!(extract(doc, "elevation"), Some("32.0"));
    }

    #[test]
    fn extraction_is_idempotent() {
        let doc = r#"{"weather_code": 61}"#;
        let first = extract(doc, "weather_code");
        let second = extract(doc, "weather_code");
        assert_eq!(first, second);
    }

    #[test]
    fn multibyte_text_elsewhere_in_document_is_harmless() {
        let doc = r#"{"city": "Zürich", "temperature_2m": 18.4}"#;
        assert_eq!(extract(doc, "city"), Some("Zürich"));
        assert_eq!(extract(doc, "temperature_2m"), Some("18.4"));
    }
}
