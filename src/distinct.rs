//! Order-preserving deduplication and set algebra over sequences.
//!
//! # Overview
//! - [`distinct`] - Remove duplicate values, keeping first occurrences
//! - [`distinct_by`] - Remove elements whose selector key was already seen
//! - [`intersect`] - Distinct values of `a` that also occur in `b`
//! - [`union`] - Distinct values of `a`, then those of `b` not already in `a`
//! - [`without`] / [`without_all`] - Drop every occurrence of the given value(s)
//!
//! Every operation is a single pass backed by a `HashSet` of borrowed
//! elements (or keys). The earliest index always wins, so the output order is
//! the first-occurrence order of the input.

use std::collections::HashSet;
use std::hash::Hash;

/// Distinct values of `items`, in first-occurrence order.
///
/// # Example
/// ```
/// use seqkit::distinct;
///
/// assert_eq!(distinct(&[3, 1, 3, 2, 1]), vec![3, 1, 2]);
/// ```
#[must_use]
pub fn distinct<T>(items: &[T]) -> Vec<T>
where
    T: Eq + Hash + Clone,
{
    let mut seen: HashSet<&T> = HashSet::with_capacity(items.len());
    items
        .iter()
        .filter(|t| seen.insert(*t))
        .cloned()
        .collect()
}

/// Elements of `items` producing a not-yet-seen `selector` key.
///
/// The first element per key wins; output order is first-occurrence order.
///
/// # Example
/// ```
/// use seqkit::distinct_by;
///
/// let words = ["apple", "avocado", "banana", "blueberry", "cherry"];
/// let firsts = distinct_by(&words, |w| w.chars().next());
/// assert_eq!(firsts, vec!["apple", "banana", "cherry"]);
/// ```
pub fn distinct_by<T, K, F>(items: &[T], selector: F) -> Vec<T>
where
    T: Clone,
    K: Eq + Hash,
    F: Fn(&T) -> K,
{
    let mut seen: HashSet<K> = HashSet::with_capacity(items.len());
    items
        .iter()
        .filter(|t| seen.insert(selector(*t)))
        .cloned()
        .collect()
}

/// Distinct values of `a` that occur anywhere in `b`, in `a`'s order.
///
/// # Example
/// ```
/// use seqkit::intersect;
///
/// assert_eq!(intersect(&[1, 2, 2, 3], &[2, 3, 4]), vec![2, 3]);
/// ```
#[must_use]
pub fn intersect<T>(a: &[T], b: &[T]) -> Vec<T>
where
    T: Eq + Hash + Clone,
{
    let other: HashSet<&T> = b.iter().collect();
    let mut seen: HashSet<&T> = HashSet::new();
    a.iter()
        .filter(|t| other.contains(*t) && seen.insert(*t))
        .cloned()
        .collect()
}

/// Distinct values of `a`, followed by distinct values of `b` not present in `a`.
///
/// # Example
/// ```
/// use seqkit::union;
///
/// assert_eq!(union(&[1, 2], &[2, 3]), vec![1, 2, 3]);
/// ```
#[must_use]
pub fn union<T>(a: &[T], b: &[T]) -> Vec<T>
where
    T: Eq + Hash + Clone,
{
    let mut seen: HashSet<&T> = HashSet::with_capacity(a.len() + b.len());
    a.iter()
        .chain(b.iter())
        .filter(|t| seen.insert(*t))
        .cloned()
        .collect()
}

/// Every element of `items` not equal to `value`.
///
/// Order and the multiplicity of the remaining values are preserved.
#[must_use]
pub fn without<T>(items: &[T], value: &T) -> Vec<T>
where
    T: PartialEq + Clone,
{
    items.iter().filter(|t| *t != value).cloned().collect()
}

/// Every element of `items` not equal to any element of `values`.
///
/// # Example
/// ```
/// use seqkit::without_all;
///
/// assert_eq!(without_all(&[1, 2, 3, 2, 4], &[2, 4]), vec![1, 3]);
/// ```
#[must_use]
pub fn without_all<T>(items: &[T], values: &[T]) -> Vec<T>
where
    T: Eq + Hash + Clone,
{
    let removed: HashSet<&T> = values.iter().collect();
    items.iter().filter(|t| !removed.contains(t)).cloned().collect()
}
