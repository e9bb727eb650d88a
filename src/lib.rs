//! # seqkit
//!
//! An **eager collection-transformation toolkit** for Rust: order-preserving
//! deduplication and set algebra, chunking and sliding windows, key-derived
//! grouping with per-group folds, and extremum/sort selection with explicit
//! tie-break rules.
//!
//! ## Key Features
//!
//! - **Order-preserving** - `distinct`, `union`, `intersect` keep first-occurrence order
//! - **Windowing** - `chunked` and `windowed` with configurable step and partial tails
//! - **Grouping** - `group_by` into an insertion-ordered [`Grouping`], then count, reduce
//!   or aggregate each bucket
//! - **Extremum selection** - single-scan `max_by`/`min_by` where the first of equal
//!   elements wins, and a stable `sort_by`
//! - **Non-mutating** - every operation borrows its input and returns a new container
//!
//! ## Quick Start
//!
//! ```
//! use seqkit::*;
//!
//! # fn main() -> anyhow::Result<()> {
//! let words = ["pear", "fig", "plum", "fig", "kiwi", "date"];
//!
//! let unique = distinct(&words);
//! assert_eq!(unique, vec!["pear", "fig", "plum", "kiwi", "date"]);
//!
//! let by_len = group_by(&unique, |w| w.len().to_string());
//! assert_eq!(by_len["4"], vec!["pear", "plum", "kiwi", "date"]);
//! assert_eq!(count_groups(&by_len)["3"], 1);
//!
//! let pairs = windowed(&unique, 2, WindowConfig::default().with_step(2).with_partial(true))?;
//! assert_eq!(pairs.last(), Some(&vec!["date"]));
//!
//! assert_eq!(max_by(&unique, |w| w.len()), Some("pear"));
//! # Ok(())
//! # }
//! ```
//!
//! ## Core Concepts
//!
//! ### Sequences and mappings
//!
//! Sequences come in as slices (`&[T]`) and go out as `Vec<T>`. Mappings are
//! string-keyed [`Record`]s, and a [`Grouping`] is a record whose values are
//! buckets. Both are [`indexmap::IndexMap`]s, so iteration order is the order
//! in which keys were first inserted.
//!
//! ### Selectors, predicates and comparators
//!
//! Plain closures: `Fn(&T) -> K` for selectors, `Fn(&T) -> bool` for
//! predicates and `Fn(&T, &T) -> Ordering` for comparators. Ordering selectors
//! return anything convertible into a [`SortKey`] (numbers or strings).
//!
//! ### Errors
//!
//! Only the windowing engine can fail: a zero `size` or `step` is rejected with
//! an [`anyhow::Error`]. Everything else is total; "no value" (empty input,
//! no match) is `None`.
//!
//! ## Module Overview
//!
//! - [`distinct`] - Deduplication and set algebra
//! - [`windowing`] - Chunks and sliding windows
//! - [`grouping`] - Association, grouping, partitioning and per-group folds
//! - [`extremum`] - Sorting and extremum selection
//! - [`running`] - Running reduction
//! - [`sequence`] - Small slicing, lookup and reduction helpers
//! - [`record`] - Filters and maps over string-keyed records
//! - [`key`] - Shared key and container types
//! - [`testing`] - Assertion helpers for tests

pub mod distinct;
pub mod extremum;
pub mod grouping;
pub mod key;
pub mod record;
pub mod running;
pub mod sequence;
pub mod testing;
pub mod windowing;

// General re-exports
pub use distinct::{distinct, distinct_by, intersect, union, without, without_all};
pub use extremum::{max_by, max_of, max_with, min_by, min_of, min_with, sort_by};
pub use grouping::{
    aggregate_groups, associate_by, count_groups, group_by, partition, reduce_groups,
};
pub use key::{Grouping, Record, SortKey};
pub use record::{
    filter_entries, filter_keys, filter_values, filter_values_not_none, includes_key,
    includes_value, map_entries, map_keys, map_values,
};
pub use running::running_reduce;
pub use sequence::{
    average, drop_first, drop_first_while, drop_last, drop_last_while, filter_not, find_last,
    first_not_none_of, includes_all, includes_any, includes_none, last_index, map_not_none, none,
    single, sum_of, take_first, take_first_while, take_last, take_last_while, unzip, zip,
};
pub use windowing::{WindowConfig, chunked, windowed};
