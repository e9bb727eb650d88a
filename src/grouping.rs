//! Key-derived bucketing and per-bucket folds.
//!
//! # Overview
//! - [`associate_by`] - Index elements by a string key (last write wins)
//! - [`group_by`] - Bucket elements by a string key into a [`Grouping`]
//! - [`partition`] - Split elements into (matching, non-matching)
//! - [`count_groups`] - Size of each bucket
//! - [`reduce_groups`] - Left fold of each bucket from a shared seed
//! - [`aggregate_groups`] - Like `reduce_groups`, with the key and a first-element flag
//!
//! A [`Grouping`] keeps buckets in the order their first element was seen and
//! keeps values within a bucket in source order. All folds visit buckets and
//! values in that order.

use crate::key::{Grouping, Record};
use tracing::trace;

/// Index `items` by `selector`. On key collision the later element wins,
/// while the key keeps the position of its first insertion.
///
/// # Example
/// ```
/// use seqkit::associate_by;
///
/// let users = [("u1", "ann"), ("u2", "bob"), ("u1", "amy")];
/// let by_id = associate_by(&users, |u| u.0.to_string());
/// assert_eq!(by_id.len(), 2);
/// assert_eq!(by_id["u1"], ("u1", "amy"));
/// ```
pub fn associate_by<T, F>(items: &[T], selector: F) -> Record<T>
where
    T: Clone,
    F: Fn(&T) -> String,
{
    let mut out = Record::with_capacity(items.len());
    for t in items {
        out.insert(selector(t), t.clone());
    }
    out
}

/// Bucket `items` by `selector`.
///
/// Buckets appear in the order of the first element mapped to each key, and
/// each bucket keeps its elements in source order.
///
/// # Example
/// ```
/// use seqkit::group_by;
///
/// let g = group_by(&["a", "bb", "c", "dd"], |s| s.len().to_string());
/// assert_eq!(g.keys().collect::<Vec<_>>(), vec!["1", "2"]);
/// assert_eq!(g["1"], vec!["a", "c"]);
/// assert_eq!(g["2"], vec!["bb", "dd"]);
/// ```
pub fn group_by<T, F>(items: &[T], selector: F) -> Grouping<T>
where
    T: Clone,
    F: Fn(&T) -> String,
{
    let mut out: Grouping<T> = Grouping::new();
    for t in items {
        out.entry(selector(t)).or_default().push(t.clone());
    }
    trace!(input = items.len(), groups = out.len(), "group_by");
    out
}

/// Split `items` into `(matching, non_matching)` by `predicate`.
///
/// Every element lands in exactly one half and both halves keep source order.
pub fn partition<T, F>(items: &[T], predicate: F) -> (Vec<T>, Vec<T>)
where
    T: Clone,
    F: Fn(&T) -> bool,
{
    let mut matching = Vec::new();
    let mut rest = Vec::new();
    for t in items {
        if predicate(t) {
            matching.push(t.clone());
        } else {
            rest.push(t.clone());
        }
    }
    (matching, rest)
}

/// Number of values in each bucket.
#[must_use]
pub fn count_groups<V>(grouping: &Grouping<V>) -> Record<usize> {
    grouping.iter().map(|(k, vs)| (k.clone(), vs.len())).collect()
}

/// Left fold of every bucket, each starting from a clone of `initial`.
///
/// # Example
/// ```
/// use seqkit::{group_by, reduce_groups};
///
/// let g = group_by(&[1, 2, 3, 4, 5], |n| {
///     if n % 2 == 0 { "even".into() } else { "odd".into() }
/// });
/// let sums = reduce_groups(&g, |acc, n| acc + n, 0);
/// assert_eq!(sums["odd"], 9);
/// assert_eq!(sums["even"], 6);
/// ```
pub fn reduce_groups<V, A, F>(grouping: &Grouping<V>, reducer: F, initial: A) -> Record<A>
where
    A: Clone,
    F: Fn(A, &V) -> A,
{
    grouping
        .iter()
        .map(|(k, vs)| (k.clone(), vs.iter().fold(initial.clone(), &reducer)))
        .collect()
}

/// Fold every bucket like [`reduce_groups`], passing the aggregator the
/// bucket key and whether the current value is the first of its bucket.
///
/// The flag lets an aggregator initialize from the first value instead of
/// from `initial`.
///
/// # Example
/// ```
/// use seqkit::{aggregate_groups, group_by};
///
/// let g = group_by(&[3, 8, 5, 2], |n| if *n > 4 { "big".into() } else { "small".into() });
/// let joined = aggregate_groups(
///     &g,
///     |acc, n, key, first| if first { format!("{key}:{n}") } else { format!("{acc},{n}") },
///     String::new(),
/// );
/// assert_eq!(joined["small"], "small:3,2");
/// assert_eq!(joined["big"], "big:8,5");
/// ```
pub fn aggregate_groups<V, A, F>(grouping: &Grouping<V>, aggregator: F, initial: A) -> Record<A>
where
    A: Clone,
    F: Fn(A, &V, &str, bool) -> A,
{
    grouping
        .iter()
        .map(|(k, vs)| {
            let acc = vs
                .iter()
                .enumerate()
                .fold(initial.clone(), |acc, (i, v)| {
                    aggregator(acc, v, k.as_str(), i == 0)
                });
            (k.clone(), acc)
        })
        .collect()
}
