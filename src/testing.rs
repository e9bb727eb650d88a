//! Assertion helpers for testing code built on this crate.
//!
//! The helpers panic with messages that show both the expected and the actual
//! collection, which is more useful than a bare `assert_eq!` on long outputs.
//!
//! - [`assert_grouping_equal`]: compare a [`Grouping`] including bucket order
//! - [`assert_records_equal`]: compare a [`Record`] ignoring key order
//! - [`assert_windows_within`]: every window is non-empty and at most `size` long
//! - [`assert_partitioned`]: a `partition` result matches the filtered input

use crate::key::{Grouping, Record};
use std::fmt::Debug;

/// Assert that a grouping has exactly the `expected` buckets, in order.
///
/// Both the bucket order and the value order inside each bucket are checked.
///
/// # Panics
///
/// Panics on the first key or bucket that differs.
///
/// # Example
///
/// ```
/// use seqkit::group_by;
/// use seqkit::testing::assert_grouping_equal;
///
/// let g = group_by(&[1, 2, 3], |n| (n % 2).to_string());
/// assert_grouping_equal(&g, &[("1", vec![1, 3]), ("0", vec![2])]);
/// ```
pub fn assert_grouping_equal<V>(actual: &Grouping<V>, expected: &[(&str, Vec<V>)])
where
    V: Debug + PartialEq,
{
    let actual_keys: Vec<&str> = actual.keys().map(String::as_str).collect();
    let expected_keys: Vec<&str> = expected.iter().map(|(k, _)| *k).collect();
    assert_eq!(
        actual_keys, expected_keys,
        "Grouping key order mismatch:\n  Expected: {expected:?}\n  Actual: {actual:?}"
    );

    for (key, values) in expected {
        let bucket = &actual[*key];
        assert_eq!(
            bucket, values,
            "Bucket mismatch for key {key:?}:\n  Expected: {values:?}\n  Actual: {bucket:?}"
        );
    }
}

/// Assert that a record has the same entries as `expected`, ignoring key order.
///
/// # Panics
///
/// Panics if the records differ in size, keys or values.
pub fn assert_records_equal<V: Debug + PartialEq>(actual: &Record<V>, expected: &[(&str, V)]) {
    assert_eq!(
        actual.len(),
        expected.len(),
        "Record size mismatch:\n  Expected: {expected:?}\n  Actual: {actual:?}"
    );

    for (key, expected_value) in expected {
        match actual.get(*key) {
            Some(actual_value) if actual_value == expected_value => {}
            Some(actual_value) => {
                panic!(
                    "Record value mismatch for key {key:?}:\n  Expected: {expected_value:?}\n  Actual: {actual_value:?}"
                );
            }
            None => {
                panic!("Record missing key: {key:?}");
            }
        }
    }
}

/// Assert that every window is non-empty and holds at most `size` elements.
///
/// # Panics
///
/// Panics on the first window that is empty or longer than `size`.
pub fn assert_windows_within<T: Debug>(windows: &[Vec<T>], size: usize) {
    for (i, w) in windows.iter().enumerate() {
        assert!(
            !w.is_empty() && w.len() <= size,
            "Window {i} has length {} (allowed 1..={size}):\n  Window: {w:?}\n  All windows: {windows:?}",
            w.len()
        );
    }
}

/// Assert that `(matching, rest)` is the order-preserving split of `items`
/// by `predicate`.
///
/// This checks that the two halves cover `items`, are disjoint under
/// `predicate`, and keep source order.
///
/// # Panics
///
/// Panics if either half differs from the corresponding filtered input.
///
/// # Example
///
/// ```
/// use seqkit::partition;
/// use seqkit::testing::assert_partitioned;
///
/// let xs = [4, 7, 1, 8];
/// let halves = partition(&xs, |n| *n > 3);
/// assert_partitioned(&xs, &halves, |n| *n > 3);
/// ```
pub fn assert_partitioned<T, F>(items: &[T], halves: &(Vec<T>, Vec<T>), predicate: F)
where
    T: Debug + PartialEq,
    F: Fn(&T) -> bool,
{
    let (matching, rest) = halves;
    let expected_matching: Vec<&T> = items.iter().filter(|t| predicate(t)).collect();
    let expected_rest: Vec<&T> = items.iter().filter(|t| !predicate(t)).collect();
    let actual_matching: Vec<&T> = matching.iter().collect();
    let actual_rest: Vec<&T> = rest.iter().collect();

    assert_eq!(
        actual_matching, expected_matching,
        "Matching half differs from the filtered input:\n  Input: {items:?}"
    );
    assert_eq!(
        actual_rest, expected_rest,
        "Non-matching half differs from the filtered input:\n  Input: {items:?}"
    );
}
