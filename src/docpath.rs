//! Slash-delimited path lookups into JSON documents.
//!
//! A path is a list of segments separated by `/`. Each segment is a key,
//! optionally followed by an array index:
//!
//! ```text
//! hits/total
//! hits/hits[0]/_source/name
//! ```
//!
//! The typed accessors return the type's zero value when the path does not
//! resolve or the leaf has a different type.

use std::sync::LazyLock;

use regex::Regex;
use serde_json::Value;
use tracing::warn;

static SEGMENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\w+)(?:\[(\d+)\])?$").expect("segment pattern is valid"));

/// The value at `path`, if every segment resolves.
pub fn value_at<'a>(doc: &'a Value, path: &str) -> Option<&'a Value> {
    let mut current = doc;

    for segment in path.split('/') {
        let Some(caps) = SEGMENT.captures(segment) else {
            warn!(%path, %segment, "malformed path segment");
            return None;
        };

        let key = &caps[1];
        current = match current.get(key) {
            Some(v) => v,
            None => {
                warn!(%path, %key, "path key not found");
                return None;
            }
        };

        if let Some(idx) = caps.get(2) {
            let Ok(idx) = idx.as_str().parse::<usize>() else {
                warn!(%path, %segment, "invalid index");
                return None;
            };
            let Some(items) = current.as_array() else {
                warn!(%path, %key, "index applied to a non-array value");
                return None;
            };
            current = match items.get(idx) {
                Some(v) => v,
                None => {
                    warn!(%path, %key, idx, len = items.len(), "index out of range");
                    return None;
                }
            };
        }
    }

    Some(current)
}

pub fn str_val(doc: &Value, path: &str) -> String {
    value_at(doc, path)
        .and_then(Value::as_str)
        .map(str::to_string)
        .unwrap_or_default()
}

/// Integer at `path`; floats are truncated.
pub fn int_val(doc: &Value, path: &str) -> i64 {
    match value_at(doc, path) {
        Some(Value::Number(n)) => n.as_i64().or_else(|| n.as_f64().map(|f| f as i64)).unwrap_or(0),
        _ => 0,
    }
}

pub fn float_val(doc: &Value, path: &str) -> f64 {
    value_at(doc, path).and_then(Value::as_f64).unwrap_or(0.0)
}

pub fn bool_val(doc: &Value, path: &str) -> bool {
    value_at(doc, path).and_then(Value::as_bool).unwrap_or(false)
}

pub fn slice_val<'a>(doc: &'a Value, path: &str) -> &'a [Value] {
    value_at(doc, path)
        .and_then(Value::as_array)
        .map(Vec::as_slice)
        .unwrap_or(&[])
}

/// Total hit count of a search response. Handles both the bare number and
/// the `{"value": n, "relation": ..}` form.
pub fn hit_count(response: &Value) -> i64 {
    match value_at(response, "hits/total") {
        Some(Value::Object(_)) => int_val(response, "hits/total/value"),
        _ => int_val(response, "hits/total"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_segment_pattern() {
        assert!(SEGMENT.is_match("hits"));
        assert!(SEGMENT.is_match("_source"));
        assert!(SEGMENT.is_match("hits[12]"));
        assert!(!SEGMENT.is_match("hits[-1]"));
        assert!(!SEGMENT.is_match("hits[]"));
        assert!(!SEGMENT.is_match(""));
    }

    #[test]
    fn test_hit_count_forms() {
        assert_eq!(hit_count(&json!({"hits": {"total": 14}})), 14);
        assert_eq!(hit_count(&json!({"hits": {"total": {"value": 3, "relation": "eq"}}})), 3);
        assert_eq!(hit_count(&json!({"took": 1})), 0);
    }
}
