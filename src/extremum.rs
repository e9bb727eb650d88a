//! Stable sorting and extremum selection by key or comparator.
//!
//! - [`sort_by`] - stable ascending sort by a [`SortKey`]
//! - [`max_by`] / [`min_by`] - the element with the greatest / least key
//! - [`max_of`] / [`min_of`] - the greatest / least key itself
//! - [`max_with`] / [`min_with`] - selection delegated to a comparator
//!
//! Selection is a single scan. Among equal candidates the **first** one (lowest
//! index) is returned. Empty input yields `None`.

use crate::key::SortKey;
use std::cmp::Ordering;
use tracing::trace;

/// `items` sorted ascending by `selector`, keeping equal keys in source order.
///
/// Each key is computed once per element.
///
/// # Example
/// ```
/// use seqkit::sort_by;
///
/// let rows = [(1, "a"), (0, "b"), (1, "c")];
/// let sorted = sort_by(&rows, |r| r.0);
/// assert_eq!(sorted, vec![(0, "b"), (1, "a"), (1, "c")]);
/// ```
pub fn sort_by<T, K, F>(items: &[T], selector: F) -> Vec<T>
where
    T: Clone,
    K: Into<SortKey>,
    F: Fn(&T) -> K,
{
    let mut keyed: Vec<(SortKey, &T)> = items.iter().map(|t| (selector(t).into(), t)).collect();
    keyed.sort_by(|a, b| a.0.cmp(&b.0));
    trace!(input = items.len(), "sort_by");
    keyed.into_iter().map(|(_, t)| t.clone()).collect()
}

/// Index and key of the element that `wins` over every earlier candidate.
///
/// `wins(candidate, best)` must return `true` only on a strict improvement,
/// which keeps the first of several equal elements.
fn select_by_key<T, F, W>(items: &[T], selector: F, wins: W) -> Option<(usize, SortKey)>
where
    F: Fn(&T) -> SortKey,
    W: Fn(&SortKey, &SortKey) -> bool,
{
    let mut iter = items.iter().enumerate();
    let (_, first) = iter.next()?;
    let mut best = (0, selector(first));
    for (i, t) in iter {
        let key = selector(t);
        if wins(&key, &best.1) {
            best = (i, key);
        }
    }
    Some(best)
}

/// The element with the greatest `selector` key; the first one on ties.
///
/// # Example
/// ```
/// use seqkit::max_by;
///
/// let xs = [(1, "x"), (1, "y"), (0, "z")];
/// assert_eq!(max_by(&xs, |e| e.0), Some((1, "x")));
/// assert_eq!(max_by(&[] as &[(i32, &str)], |e| e.0), None);
/// ```
pub fn max_by<T, K, F>(items: &[T], selector: F) -> Option<T>
where
    T: Clone,
    K: Into<SortKey>,
    F: Fn(&T) -> K,
{
    select_by_key(items, |t| selector(t).into(), |k, best| k > best)
        .map(|(i, _)| items[i].clone())
}

/// The element with the least `selector` key; the first one on ties.
pub fn min_by<T, K, F>(items: &[T], selector: F) -> Option<T>
where
    T: Clone,
    K: Into<SortKey>,
    F: Fn(&T) -> K,
{
    select_by_key(items, |t| selector(t).into(), |k, best| k < best)
        .map(|(i, _)| items[i].clone())
}

/// The greatest `selector` key over `items`.
///
/// # Example
/// ```
/// use seqkit::{max_of, SortKey};
///
/// let words = ["pear", "fig", "banana"];
/// assert_eq!(max_of(&words, |w| w.len()), Some(SortKey::from(6)));
/// assert_eq!(max_of(&words, |w| *w), Some(SortKey::from("pear")));
/// ```
pub fn max_of<T, K, F>(items: &[T], selector: F) -> Option<SortKey>
where
    K: Into<SortKey>,
    F: Fn(&T) -> K,
{
    select_by_key(items, |t| selector(t).into(), |k, best| k > best).map(|(_, k)| k)
}

/// The least `selector` key over `items`.
pub fn min_of<T, K, F>(items: &[T], selector: F) -> Option<SortKey>
where
    K: Into<SortKey>,
    F: Fn(&T) -> K,
{
    select_by_key(items, |t| selector(t).into(), |k, best| k < best).map(|(_, k)| k)
}

/// The greatest element according to `comparator`; the first one on ties.
///
/// # Example
/// ```
/// use seqkit::max_with;
///
/// let xs = ["bb", "a", "cc"];
/// assert_eq!(max_with(&xs, |a, b| a.len().cmp(&b.len())), Some("bb"));
/// ```
pub fn max_with<T, F>(items: &[T], comparator: F) -> Option<T>
where
    T: Clone,
    F: Fn(&T, &T) -> Ordering,
{
    select_with(items, |cand, best| comparator(cand, best) == Ordering::Greater)
}

/// The least element according to `comparator`; the first one on ties.
pub fn min_with<T, F>(items: &[T], comparator: F) -> Option<T>
where
    T: Clone,
    F: Fn(&T, &T) -> Ordering,
{
    select_with(items, |cand, best| comparator(cand, best) == Ordering::Less)
}

fn select_with<T, W>(items: &[T], wins: W) -> Option<T>
where
    T: Clone,
    W: Fn(&T, &T) -> bool,
{
    let mut iter = items.iter();
    let mut best = iter.next()?;
    for t in iter {
        if wins(t, best) {
            best = t;
        }
    }
    Some(best.clone())
}
