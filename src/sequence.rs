//! Small sequence helpers: slicing by count or predicate, membership
//! predicates, lookups and numeric reductions.
//!
//! These are thin wrappers over slice and iterator methods, kept so that the
//! whole toolkit shares one borrowing, allocate-the-result calling convention.
//! Operations with nothing to return use `Option` rather than a sentinel.

use std::collections::HashSet;
use std::hash::Hash;

/* ===================== Predicates ===================== */

/// `true` if no element matches `predicate` (vacuously `true` when empty).
pub fn none<T, F>(items: &[T], predicate: F) -> bool
where
    F: Fn(&T) -> bool,
{
    !items.iter().any(predicate)
}

/// `true` if every element of `needles` occurs in `items`.
#[must_use]
pub fn includes_all<T: Eq + Hash>(items: &[T], needles: &[T]) -> bool {
    let present: HashSet<&T> = items.iter().collect();
    needles.iter().all(|n| present.contains(n))
}

/// `true` if at least one element of `needles` occurs in `items`.
#[must_use]
pub fn includes_any<T: Eq + Hash>(items: &[T], needles: &[T]) -> bool {
    let present: HashSet<&T> = items.iter().collect();
    needles.iter().any(|n| present.contains(n))
}

/// `true` if no element of `needles` occurs in `items`.
#[must_use]
pub fn includes_none<T: Eq + Hash>(items: &[T], needles: &[T]) -> bool {
    !includes_any(items, needles)
}

/* ===================== Transforms ===================== */

/// Apply `transformer` to each element, keeping only the `Some` results.
pub fn map_not_none<T, O, F>(items: &[T], transformer: F) -> Vec<O>
where
    F: Fn(&T) -> Option<O>,
{
    items.iter().filter_map(transformer).collect()
}

/// The first `n` elements, or all of them if there are fewer.
#[must_use]
pub fn take_first<T: Clone>(items: &[T], n: usize) -> Vec<T> {
    items[..n.min(items.len())].to_vec()
}

/// The last `n` elements, or all of them if there are fewer.
#[must_use]
pub fn take_last<T: Clone>(items: &[T], n: usize) -> Vec<T> {
    items[items.len().saturating_sub(n)..].to_vec()
}

/// Everything except the first `n` elements.
#[must_use]
pub fn drop_first<T: Clone>(items: &[T], n: usize) -> Vec<T> {
    items[n.min(items.len())..].to_vec()
}

/// Everything except the last `n` elements.
#[must_use]
pub fn drop_last<T: Clone>(items: &[T], n: usize) -> Vec<T> {
    items[..items.len().saturating_sub(n)].to_vec()
}

/// Leading elements up to (excluding) the first one failing `predicate`.
pub fn take_first_while<T, F>(items: &[T], predicate: F) -> Vec<T>
where
    T: Clone,
    F: Fn(&T) -> bool,
{
    items.iter().take_while(|t| predicate(t)).cloned().collect()
}

/// Trailing elements after the last one failing `predicate`.
///
/// # Example
/// ```
/// use seqkit::take_last_while;
///
/// assert_eq!(take_last_while(&[1, 5, 2, 7, 6, 8], |n| n % 2 == 0), vec![6, 8]);
/// ```
pub fn take_last_while<T, F>(items: &[T], predicate: F) -> Vec<T>
where
    T: Clone,
    F: Fn(&T) -> bool,
{
    let start = items.iter().rposition(|t| !predicate(t)).map_or(0, |i| i + 1);
    items[start..].to_vec()
}

/// Everything from the first element failing `predicate` onwards.
pub fn drop_first_while<T, F>(items: &[T], predicate: F) -> Vec<T>
where
    T: Clone,
    F: Fn(&T) -> bool,
{
    items.iter().skip_while(|t| predicate(t)).cloned().collect()
}

/// Everything up to and including the last element failing `predicate`.
pub fn drop_last_while<T, F>(items: &[T], predicate: F) -> Vec<T>
where
    T: Clone,
    F: Fn(&T) -> bool,
{
    let end = items.iter().rposition(|t| !predicate(t)).map_or(0, |i| i + 1);
    items[..end].to_vec()
}

/// Every element that does not match `predicate`.
pub fn filter_not<T, F>(items: &[T], predicate: F) -> Vec<T>
where
    T: Clone,
    F: Fn(&T) -> bool,
{
    items.iter().filter(|t| !predicate(t)).cloned().collect()
}

/* ===================== Values ===================== */

/// Index of the last element, or `None` when empty.
#[must_use]
pub fn last_index<T>(items: &[T]) -> Option<usize> {
    items.len().checked_sub(1)
}

/// The last element matching `predicate`.
pub fn find_last<T, F>(items: &[T], predicate: F) -> Option<T>
where
    T: Clone,
    F: Fn(&T) -> bool,
{
    items.iter().rev().find(|t| predicate(t)).cloned()
}

/// The only element matching `predicate`.
///
/// Returns `None` when no element or more than one element matches.
///
/// # Example
/// ```
/// use seqkit::single;
///
/// assert_eq!(single(&[1, 2, 3], |n| *n == 2), Some(2));
/// assert_eq!(single(&[1, 2, 3], |n| *n > 1), None);
/// assert_eq!(single(&[1, 2, 3], |n| *n > 5), None);
/// ```
pub fn single<T, F>(items: &[T], predicate: F) -> Option<T>
where
    T: Clone,
    F: Fn(&T) -> bool,
{
    let mut matches = items.iter().filter(|t| predicate(t));
    let found = matches.next()?;
    match matches.next() {
        Some(_) => None,
        None => Some(found.clone()),
    }
}

/// The first `Some` produced by `selector`.
pub fn first_not_none_of<T, O, F>(items: &[T], selector: F) -> Option<O>
where
    F: Fn(&T) -> Option<O>,
{
    items.iter().find_map(selector)
}

/// Sum of `selector` over every element (`0.0` when empty).
pub fn sum_of<T, F>(items: &[T], selector: F) -> f64
where
    F: Fn(&T) -> f64,
{
    items.iter().map(selector).sum()
}

/// Arithmetic mean, or `None` when empty.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn average(items: &[f64]) -> Option<f64> {
    if items.is_empty() {
        return None;
    }
    Some(items.iter().sum::<f64>() / items.len() as f64)
}

/* ===================== Shapes ===================== */

/// Pair elements of `a` and `b` by index, truncating to the shorter input.
#[must_use]
pub fn zip<T: Clone, U: Clone>(a: &[T], b: &[U]) -> Vec<(T, U)> {
    a.iter().cloned().zip(b.iter().cloned()).collect()
}

/// Split pairs into two sequences.
#[must_use]
pub fn unzip<T: Clone, U: Clone>(pairs: &[(T, U)]) -> (Vec<T>, Vec<U>) {
    pairs.iter().cloned().unzip()
}
