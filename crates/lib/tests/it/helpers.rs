use genery::Record;
use serde_json::json;

/// A nested record shaped like an enriched document
pub fn text_record() -> Record {
    Record::from_json(json!({
        "id": "4ec4b7e0c9a9",
        "name": "Report Summaries Departement",
        "lang": {"label": "en", "name": "English"},
        "place": {
            "id": "85632997",
            "name": "Flanders",
            "belongsto": ["Europe", {"continent": true}],
            "location": {"lon": 4.66092, "lat": 50.640991}
        },
        "published": "2020-04-18T09:12:00",
        "tags": ["covid", "lockdown"]
    }))
    .expect("Failed to build sample record")
}

/// Named entities as produced by an NER pass
pub fn entities() -> Vec<Record> {
    [
        ("GPE", "Philippines"),
        ("GPE", "Nigeria"),
        ("ORG", "FSC"),
        ("GPE", "Philippines"),
    ]
    .into_iter()
    .map(|(label, text)| Record::new().with("label", label).with("text", text))
    .collect()
}

/// Assert that a record is flat: no value is a nested record
pub fn assert_flat(record: &Record) {
    for (key, value) in record {
        assert!(!value.is_record(), "Key '{key}' still holds a record");
    }
}
