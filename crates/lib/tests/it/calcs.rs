//! Rescaling integration tests

use std::collections::BTreeMap;

use genery::calcs::{rescale, rescale_int};

fn languages() -> BTreeMap<String, i64> {
    [("en", 90), ("fi", 15), ("sk", 2), ("cs", 1)]
        .into_iter()
        .map(|(lang, count)| (lang.to_string(), count))
        .collect()
}

#[test]
fn test_rescale_int_sums_to_maximum() {
    let scaled = rescale_int(&languages(), 200);

    assert_eq!(scaled["cs"], 1);
    assert_eq!(scaled["sk"], 4);
    assert_eq!(scaled["fi"], 28);
    assert_eq!(scaled["en"], 167);
    assert_eq!(scaled.values().sum::<i64>(), 200);
}

#[test]
fn test_rescale_int_never_goes_negative() {
    let data = BTreeMap::from([("a", 1), ("b", 1), ("c", 1)]);
    let scaled = rescale_int(&data, 1);

    assert!(scaled.values().all(|v| *v >= 0));
    assert_eq!(scaled.values().sum::<i64>(), 1);
}

#[test]
fn test_rescale_float_sums_to_maximum() {
    let data: BTreeMap<String, f64> = languages()
        .into_iter()
        .map(|(lang, count)| (lang, count as f64))
        .collect();
    let scaled = rescale(&data, 1.0);

    assert!((scaled.values().sum::<f64>() - 1.0).abs() < 1e-9);
    assert!(scaled["en"] > scaled["fi"]);
}
