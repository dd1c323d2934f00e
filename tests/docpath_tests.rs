// tests/docpath_tests.rs

use essql::docpath::{bool_val, float_val, hit_count, int_val, slice_val, str_val, value_at};
use serde_json::{Value, json};

fn response() -> Value {
    json!({
        "took": 3,
        "timed_out": false,
        "hits": {
            "total": 2,
            "max_score": 1.5,
            "hits": [
                {"_index": "oilers", "_id": "97", "_score": 1.5, "_source": {"name": "McDavid", "goals": 64}},
                {"_index": "oilers", "_id": "29", "_score": 1.0, "_source": {"name": "Draisaitl", "tags": ["C", "LW"]}}
            ]
        }
    })
}

#[test]
fn test_value_at_nested_keys() {
    let doc = response();
    assert_eq!(value_at(&doc, "hits/total"), Some(&json!(2)));
    assert_eq!(value_at(&doc, "hits/hits[1]/_source/name"), Some(&json!("Draisaitl")));
    assert_eq!(value_at(&doc, "hits/hits[1]/_source/tags[0]"), Some(&json!("C")));
}

#[test]
fn test_value_at_misses() {
    let doc = response();
    let misses = [
        "nope",
        "hits/nope",
        "hits/hits[2]",
        "took[0]",
        "hits/hits[x]",
        "hits//total",
        "hits/hits[-1]",
        "",
    ];
    for path in misses {
        assert_eq!(value_at(&doc, path), None, "Failed for path: {}", path);
    }
}

#[test]
fn test_string_values() {
    let doc = response();
    assert_eq!(str_val(&doc, "hits/hits[0]/_id"), "97");
    assert_eq!(str_val(&doc, "hits/total"), "");
    assert_eq!(str_val(&doc, "missing"), "");
}

#[test]
fn test_int_values() {
    let doc = response();
    assert_eq!(int_val(&doc, "took"), 3);
    assert_eq!(int_val(&doc, "hits/hits[0]/_source/goals"), 64);
    assert_eq!(int_val(&doc, "hits/max_score"), 1);
    assert_eq!(int_val(&doc, "hits/hits[0]/_id"), 0);
}

#[test]
fn test_float_values() {
    let doc = response();
    assert_eq!(float_val(&doc, "hits/max_score"), 1.5);
    assert_eq!(float_val(&doc, "took"), 3.0);
    assert_eq!(float_val(&doc, "timed_out"), 0.0);
}

#[test]
fn test_bool_values() {
    let doc = json!({"a": {"flag": true}});
    assert!(bool_val(&doc, "a/flag"));
    assert!(!bool_val(&doc, "a/other"));
    assert!(!bool_val(&response(), "timed_out"));
}

#[test]
fn test_slice_values() {
    let doc = response();
    assert_eq!(slice_val(&doc, "hits/hits").len(), 2);
    assert_eq!(slice_val(&doc, "hits/hits[1]/_source/tags"), &[json!("C"), json!("LW")]);
    assert!(slice_val(&doc, "hits/total").is_empty());
}

#[test]
fn test_hit_count() {
    assert_eq!(hit_count(&response()), 2);
    assert_eq!(hit_count(&json!({"hits": {"total": {"value": 10000, "relation": "gte"}}})), 10000);
    assert_eq!(hit_count(&json!([])), 0);
}
