//! Browser local-storage export: a JSON array of records with a `url` field.

use serde_json::Value;
use std::collections::HashSet;

use super::error::InputError;

/// Parses local-storage JSON text and returns the distinct record URLs in first-seen order.
pub fn parse_local_storage(text: &str) -> Result<Vec<String>, InputError> {
    let parsed: Value = serde_json::from_str(text.trim())?;
    match parsed {
        Value::Array(records) => Ok(urls_from_records(&records)),
        _ => Err(InputError::NotAnArray),
    }
}

/// Collects the `url` field of each object record, dropping exact duplicates.
///
/// Non-object records and records without a `url` are skipped. A string `url`
/// is used verbatim; any other non-null value contributes its JSON text.
pub fn urls_from_records(records: &[Value]) -> Vec<String> {
    let mut seen = HashSet::new();
    records
        .iter()
        .filter_map(Value::as_object)
        .filter_map(|record| record.get("url").and_then(field_text))
        .filter(|url| seen.insert(url.clone()))
        .collect()
}

/// Text of a JSON field: string content, or the JSON rendering of anything else. `null` → None.
pub(crate) fn field_text(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duplicates_removed_first_seen_order() {
        let text = r#"[
            {"url": "https://x.tv/artifact/a/1"},
            {"url": "https://x.tv/artifact/b/2"},
            {"url": "https://x.tv/artifact/a/1"},
            {"url": "https://x.tv/artifact/c/3"},
            {"url": "https://x.tv/artifact/d/4"}
        ]"#;
        let urls = parse_local_storage(text).unwrap();
        assert_eq!(
            urls,
            vec![
                "https://x.tv/artifact/a/1",
                "https://x.tv/artifact/b/2",
                "https://x.tv/artifact/c/3",
                "https://x.tv/artifact/d/4",
            ]
        );
    }

    #[test]
    fn skips_non_objects_and_missing_urls() {
        let text = r#"[1, "x", {"name": "no url"}, {"url": null}, {"url": "u"}]"#;
        assert_eq!(parse_local_storage(text).unwrap(), vec!["u"]);
    }

    #[test]
    fn non_string_url_uses_json_text() {
        let text = r#"[{"url": 42}, {"url": {"a": 1}}]"#;
        assert_eq!(parse_local_storage(text).unwrap(), vec!["42", r#"{"a":1}"#]);
    }

    #[test]
    fn rejects_non_array_and_bad_json() {
        assert!(matches!(
            parse_local_storage(r#"{"url": "u"}"#),
            Err(InputError::NotAnArray)
        ));
        assert!(matches!(
            parse_local_storage("[{"),
            Err(InputError::InvalidLocalStorage(_))
        ));
    }

    #[test]
    fn empty_array_is_empty() {
        assert!(parse_local_storage("[]").unwrap().is_empty());
    }
}
