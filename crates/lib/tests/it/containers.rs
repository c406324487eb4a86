//! Container function integration tests
//!
//! Deep update, key normalization, list flattening, distinct elements,
//! frequency compression and JSON preparation.

use chrono::NaiveDate;
use genery::{
    Record, Value,
    containers::{
        Compressed, Occurrence, compress_and_sort_by_occurence, deep_update, distinct_elements,
        ensure_list, flatten_list, normalize_keys, prepare_to_serialize,
    },
};
use serde_json::json;

use crate::helpers::*;

#[test]
fn test_deep_update_preserves_receiver_only_keys() {
    let mut source = text_record();
    let overrides = Record::from_json(json!({
        "place": {"location": {"lon": 12.5}, "country": "BE"}
    }))
    .unwrap();

    deep_update(&mut source, &overrides);

    let place = source.get_record("place").unwrap();
    assert_eq!(place["id"], "85632997");
    assert_eq!(place["country"], "BE");
    assert_eq!(place.get_record("location").unwrap()["lon"], 12.5);
    assert_eq!(place.get_record("location").unwrap()["lat"], 50.640991);
    assert!(source.contains_key("tags"));
}

#[test]
fn test_deep_update_creates_missing_branches() {
    let mut source = Record::new().with("a", 1);
    let overrides = Record::from_json(json!({"b": {"c": {"d": true}}})).unwrap();

    deep_update(&mut source, &overrides);
    assert_eq!(source.lookup(&["b.c.d"], &Value::Null), &true);
    assert_eq!(source["a"], 1);
}

#[test]
fn test_normalize_keys_snake_cases_headers() {
    let headers = Record::from_json(json!({
        "Content-Type": "text/html; charset=utf-8",
        "Content-Length": "1024",
        "X-Cache": {"Hit--Count": 3, "TTL (sec)": 60},
        "Set-Cookie": ["a=1", "b=2"]
    }))
    .unwrap();

    let normalized = normalize_keys(&headers, true, "_");
    assert_eq!(
        normalized.keys().collect::<Vec<_>>(),
        vec!["content_length", "content_type", "set_cookie", "x_cache"]
    );
    let cache = normalized.get_record("x_cache").unwrap();
    assert_eq!(cache["hit_count"], 3);
    assert_eq!(cache["ttl_sec_"], 60);
    assert_eq!(normalized["set_cookie"], Value::from(vec!["a=1", "b=2"]));

    let kept_case = normalize_keys(&headers, false, "-");
    assert!(kept_case.contains_key("Content-Type"));
    assert!(kept_case.get_record("X-Cache").unwrap().contains_key("TTL-sec-"));
}

#[test]
fn test_flatten_list_nested() {
    let nested = vec![
        Value::from(1),
        Value::from(vec![vec![2, 3], vec![4, 5]]),
        Value::from(6),
    ];
    assert_eq!(
        flatten_list(&nested),
        vec![1, 2, 3, 4, 5, 6].into_iter().map(Value::from).collect::<Vec<_>>()
    );
    assert!(flatten_list(&[Value::List(vec![])]).is_empty());
}

#[test]
fn test_distinct_elements_preserves_first_occurrence() {
    let items = ["b", "a", "b", "c", "a"];
    assert_eq!(distinct_elements(&items, true), vec!["b", "a", "c"]);

    let mut unordered = distinct_elements(&items, false);
    unordered.sort_unstable();
    assert_eq!(unordered, vec!["a", "b", "c"]);
}

#[test]
fn test_compress_and_sort_by_occurence() {
    let items = ["x", "y", "x", "x", "y", "z"];

    assert_eq!(
        compress_and_sort_by_occurence(&items, true, true).into_values(),
        vec!["x", "y", "z"]
    );
    assert_eq!(
        compress_and_sort_by_occurence(&items, false, true).into_values(),
        vec!["z", "y", "x"]
    );

    let Compressed::Counted(counted) = compress_and_sort_by_occurence(&items, true, false) else {
        panic!("Expected counted output");
    };
    assert_eq!(
        counted,
        vec![
            Occurrence { elm: "x", num: 3 },
            Occurrence { elm: "y", num: 2 },
            Occurrence { elm: "z", num: 1 },
        ]
    );
}

#[test]
fn test_prepare_to_serialize_renders_datetimes() {
    let published = NaiveDate::from_ymd_opt(2020, 4, 18)
        .unwrap()
        .and_hms_opt(9, 12, 0)
        .unwrap();
    let with_micros = NaiveDate::from_ymd_opt(2020, 4, 18)
        .unwrap()
        .and_hms_micro_opt(9, 12, 0, 250)
        .unwrap();
    let record = Record::new()
        .with("published", published)
        .with("events", vec![Value::from(with_micros), Value::Null]);

    assert_eq!(
        prepare_to_serialize(&Value::from(record)),
        json!({
            "published": "2020-04-18T09:12:00",
            "events": ["2020-04-18T09:12:00.000250", null]
        })
    );
}

#[test]
fn test_ensure_list_of_scalar_and_list() {
    assert_eq!(ensure_list(&Value::Null), vec![Value::Null]);
    assert_eq!(ensure_list(&Value::from(vec![1, 2])), vec![Value::Int(1), Value::Int(2)]);
}
