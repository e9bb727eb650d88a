//! Helpers for string-keyed mappings ([`Record`]).
//!
//! Filters keep the surviving entries in their original order. Mapping
//! helpers build a new record in iteration order of the source.

use crate::key::Record;

/// `true` if any entry's value equals `value`.
#[must_use]
pub fn includes_value<V: PartialEq>(record: &Record<V>, value: &V) -> bool {
    record.values().any(|v| v == value)
}

/// `true` if `key` is present.
#[must_use]
pub fn includes_key<V>(record: &Record<V>, key: &str) -> bool {
    record.contains_key(key)
}

/// Entries for which `predicate(key, value)` holds.
pub fn filter_entries<V, F>(record: &Record<V>, predicate: F) -> Record<V>
where
    V: Clone,
    F: Fn(&str, &V) -> bool,
{
    record
        .iter()
        .filter(|(k, v)| predicate(k.as_str(), v))
        .map(|(k, v)| (k.clone(), v.clone()))
        .collect()
}

/// Entries whose key satisfies `predicate`.
pub fn filter_keys<V, F>(record: &Record<V>, predicate: F) -> Record<V>
where
    V: Clone,
    F: Fn(&str) -> bool,
{
    filter_entries(record, |k, _| predicate(k))
}

/// Entries whose value satisfies `predicate`.
pub fn filter_values<V, F>(record: &Record<V>, predicate: F) -> Record<V>
where
    V: Clone,
    F: Fn(&V) -> bool,
{
    filter_entries(record, |_, v| predicate(v))
}

/// Entries whose value is `Some`, unwrapped.
#[must_use]
pub fn filter_values_not_none<V: Clone>(record: &Record<Option<V>>) -> Record<V> {
    record
        .iter()
        .filter_map(|(k, v)| v.clone().map(|v| (k.clone(), v)))
        .collect()
}

/// Transform each `(key, value)` entry into a new entry.
///
/// When two entries produce the same key, the later one wins.
pub fn map_entries<V, O, F>(record: &Record<V>, transformer: F) -> Record<O>
where
    F: Fn(&str, &V) -> (String, O),
{
    record.iter().map(|(k, v)| transformer(k, v)).collect()
}

/// Rename every key. When two keys map to the same new key, the later entry wins.
///
/// # Example
/// ```
/// use seqkit::{map_keys, Record};
///
/// let r: Record<i32> = [("a".to_string(), 1), ("A".to_string(), 2)].into_iter().collect();
/// let upper = map_keys(&r, |k| k.to_uppercase());
/// assert_eq!(upper.len(), 1);
/// assert_eq!(upper["A"], 2);
/// ```
pub fn map_keys<V, F>(record: &Record<V>, transformer: F) -> Record<V>
where
    V: Clone,
    F: Fn(&str) -> String,
{
    map_entries(record, |k, v| (transformer(k), v.clone()))
}

/// Transform every value, keeping keys.
pub fn map_values<V, O, F>(record: &Record<V>, transformer: F) -> Record<O>
where
    F: Fn(&V) -> O,
{
    record
        .iter()
        .map(|(k, v)| (k.clone(), transformer(v)))
        .collect()
}
