//! Rescaling of weighted maps.

use std::collections::BTreeMap;

/// Rescales the values of `data` proportionally so they sum to `maximum`.
///
/// Data whose total is not positive is returned unchanged.
pub fn rescale<K>(data: &BTreeMap<K, f64>, maximum: f64) -> BTreeMap<K, f64>
where
    K: Ord + Clone,
{
    let total: f64 = data.values().sum();
    if total <= 0.0 {
        return data.clone();
    }

    data.iter()
        .map(|(key, val)| (key.clone(), val / total * maximum))
        .collect()
}

/// Rescales the values of `data` to whole numbers summing to at most
/// `maximum`.
///
/// Every scaled value is rounded up, then the entries are walked once from
/// the smallest value up, each decremented by one (never below zero) until
/// the sum no longer exceeds `maximum`. Data whose total is not positive is
/// returned unchanged.
///
/// ```
/// # use std::collections::BTreeMap;
/// # use genery::calcs::rescale_int;
/// let data = BTreeMap::from([("en", 90), ("fi", 15), ("sk", 2), ("cs", 1)]);
/// let scaled = rescale_int(&data, 200);
/// assert_eq!(scaled, BTreeMap::from([("cs", 1), ("sk", 4), ("fi", 28), ("en", 167)]));
/// ```
pub fn rescale_int<K>(data: &BTreeMap<K, i64>, maximum: i64) -> BTreeMap<K, i64>
where
    K: Ord + Clone,
{
    let total: i64 = data.values().sum();
    if total <= 0 {
        return data.clone();
    }

    let mut scaled: Vec<(&K, i64)> = data
        .iter()
        .map(|(key, val)| {
            let share = *val as f64 / total as f64 * maximum as f64;
            (key, share.ceil() as i64)
        })
        .collect();
    scaled.sort_by_key(|(_, val)| *val);

    let mut sum: i64 = scaled.iter().map(|(_, val)| val).sum();
    for (_, val) in scaled.iter_mut() {
        if sum <= maximum {
            break;
        }
        let lowered = (*val - 1).max(0);
        sum -= *val - lowered;
        *val = lowered;
    }

    scaled
        .into_iter()
        .map(|(key, val)| (key.clone(), val))
        .collect()
}
