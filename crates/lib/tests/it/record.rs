//! Record integration tests
//!
//! Construction from JSON, key/attribute access, path lookup, flatten,
//! deep update, exclusion and the aggregating constructors.

use genery::{Error, Record, Value, record::RecordError};
use serde_json::json;

use crate::helpers::*;

// ===== ACCESS =====

#[test]
fn test_key_and_attribute_access_agree() {
    let record = text_record();

    for key in record.keys() {
        assert_eq!(&record[key.as_str()], record.attr(key).unwrap());
    }
    assert_eq!(record.attr("lang").unwrap().attr("name").unwrap(), "English");
    assert_eq!(record.get_as::<String>("name").as_deref(), Some("Report Summaries Departement"));
}

#[test]
fn test_missing_access_errors_convert_to_crate_error() {
    let record = text_record();

    let err: Error = record.try_get("gorgonzola").unwrap_err().into();
    assert!(err.is_not_found());
    assert_eq!(err.module(), "record");

    let err: Error = record.attr("gorgonzola").unwrap_err().into();
    assert!(err.is_not_found());
}

#[test]
fn test_from_json_str_rejects_non_objects() {
    assert!(Record::from_json_str(r#"{"a": {"b": 1}}"#).is_ok());

    let err = Record::from_json_str("[1, 2]").unwrap_err();
    assert!(err.is_invalid_input());
    assert!(matches!(err, Error::Record(RecordError::NotAMapping { .. })));

    let err = Record::from_json_str("{not json").unwrap_err();
    assert_eq!(err.module(), "serialize");
}

// ===== LOOKUP =====

#[test]
fn test_lookup_returns_first_found_path() {
    let record = Record::from_json(json!({
        "a": {"b": "found"},
        "x": {"y": {}}
    }))
    .unwrap();

    let default = Value::Null;
    assert_eq!(
        record.lookup(&["x.y.z", "nonexistent", "a.b"], &default),
        "found"
    );
    assert_eq!(record.lookup(&["x.y.z", "nonexistent"], &default), &default);
}

#[test]
fn test_lookup_descends_into_nested_records() {
    let record = text_record();
    let default = Value::Text("n/a".to_string());

    assert_eq!(record.lookup(&["place.location.lon"], &default), &4.66092);
    assert_eq!(record.lookup(&["place.location"], &default).attr("lat").unwrap(), &50.640991);
    // Lists are not indexed by path
    assert_eq!(record.lookup(&["place.belongsto.continent"], &default), &default);
    assert_eq!(
        record.lookup_with(&["place|name"], &default, "|"),
        "Flanders"
    );
}

// ===== FLATTEN =====

#[test]
fn test_flatten_composes_keys() {
    let mut record = text_record();
    record.flatten();

    assert_flat(&record);
    assert_eq!(record["lang_label"], "en");
    assert_eq!(record["place_location_lat"], 50.640991);
    assert!(record["place_belongsto"].is_list());
    assert!(!record.contains_key("lang"));
}

#[test]
fn test_flatten_is_idempotent_on_flat_records() {
    let mut record = text_record();
    record.flatten_with("__");
    let once = record.clone();

    record.flatten_with("__");
    assert_eq!(record, once);
    assert!(record.contains_key("place__location__lon"));
}

// ===== UPDATE =====

#[test]
fn test_update_merges_nested_overrides() {
    let mut record = text_record();
    let overrides = Record::from_json(json!({
        "place": {"location": {"lon": 12.5}},
        "lang": "pl"
    }))
    .unwrap();

    record.update(&overrides);

    let default = Value::Null;
    assert_eq!(record.lookup(&["place.location.lon"], &default), &12.5);
    assert_eq!(record.lookup(&["place.location.lat"], &default), &50.640991);
    assert_eq!(record.lookup(&["place.id"], &default), "85632997");
    // A scalar override replaces a whole nested record
    assert_eq!(record["lang"], "pl");
    assert_eq!(record["name"], "Report Summaries Departement");
}

#[test]
fn test_update_is_chainable_with_flatten() {
    let mut record = Record::new().with("a", 1);
    record
        .update(&Record::new().with_record("b", Record::new().with("c", 2)))
        .flatten();

    assert_eq!(record, Record::new().with("a", 1).with("b_c", 2));
}

// ===== EXCLUDE =====

#[test]
fn test_exclude_removes_keys() {
    let mut record = text_record();
    record.exclude(["tags", "published"]).unwrap();
    assert!(!record.contains_key("tags"));
    assert!(!record.contains_key("published"));

    let err = record.exclude(["tags"]).unwrap_err();
    assert_eq!(err, RecordError::MissingKey { key: "tags".to_string() });
}

// ===== AGGREGATION =====

#[test]
fn test_from_list_overwrites_duplicate_keys() {
    let record = Record::from_list(&entities(), "label", "text").unwrap();

    assert_eq!(record.len(), 2);
    assert_eq!(record["GPE"], "Philippines");
    assert_eq!(record["ORG"], "FSC");
}

#[test]
fn test_from_list_reports_malformed_records() {
    let mut input = entities();
    input.push(Record::new().with("label", "LOC"));

    let err = Record::from_list(&input, "label", "text").unwrap_err();
    assert_eq!(
        err,
        RecordError::MalformedAggregation {
            index: 4,
            field: "text".to_string()
        }
    );
    assert!(err.is_malformed_input());
}

#[test]
fn test_from_list_aggregate_collects_values() {
    let input: Vec<Record> = [("GPE", "A"), ("GPE", "B"), ("ORG", "C")]
        .into_iter()
        .map(|(label, text)| Record::new().with("label", label).with("text", text))
        .collect();

    let record = Record::from_list_aggregate(&input, "label", "text").unwrap();
    let expected = Record::from_json(json!({"GPE": ["A", "B"], "ORG": ["C"]})).unwrap();
    assert_eq!(record, expected);
}

#[test]
fn test_from_list_aggregate_skips_records_without_value() {
    let mut input = entities();
    input.push(Record::new().with("label", "LOC"));

    let record = Record::from_list_aggregate(&input, "label", "text").unwrap();
    assert!(!record.contains_key("LOC"));
    assert_eq!(
        record["GPE"],
        Value::from(vec!["Philippines", "Nigeria", "Philippines"])
    );
}

#[test]
fn test_from_list_aggregate_requires_key_field() {
    let input = vec![
        Record::new().with("label", "GPE").with("text", "A"),
        Record::new().with("text", "orphan"),
    ];

    let err = Record::from_list_aggregate(&input, "label", "text").unwrap_err();
    assert_eq!(
        err,
        RecordError::MalformedAggregation {
            index: 1,
            field: "label".to_string()
        }
    );
    assert!(err.is_malformed_input());
}

// ===== SERIALIZATION =====

#[test]
fn test_to_json_round_trips_through_serde() {
    let record = text_record();
    let json = record.to_json();
    assert_eq!(json["place"]["location"]["lon"], json!(4.66092));

    let text = serde_json::to_string(&record).unwrap();
    let parsed: Record = serde_json::from_str(&text).unwrap();
    assert_eq!(parsed, record);
}

#[test]
fn test_date_times_deserialize_as_text() {
    let dt = chrono::NaiveDate::from_ymd_opt(2020, 4, 18)
        .unwrap()
        .and_hms_opt(9, 12, 0)
        .unwrap();
    let record = Record::new().with("published", dt);

    let text = serde_json::to_string(&record).unwrap();
    assert_eq!(text, r#"{"published":"2020-04-18T09:12:00"}"#);

    let parsed: Record = serde_json::from_str(&text).unwrap();
    assert_eq!(parsed["published"], Value::Text("2020-04-18T09:12:00".to_string()));
}
