//! Key types shared by every engine in the crate.
//!
//! - [`SortKey`] -- the closed union of key kinds used for ordering
//!   (`sort_by`, `max_by`, `max_of`, ...): an integer, a float or a string.
//! - [`Record<V>`] -- a string-keyed mapping.
//! - [`Grouping<V>`] -- a string-keyed mapping from key to an ordered bucket.
//!
//! Both mapping aliases are backed by [`IndexMap`], so iteration order is the
//! insertion order of each key. For a [`Grouping`] that order is part of the
//! contract: buckets appear in the order their first element was seen.

use indexmap::IndexMap;
use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

/// A string-keyed mapping.
pub type Record<V> = IndexMap<String, V>;

/// A string-keyed mapping from key to the bucket of values sharing that key.
pub type Grouping<V> = IndexMap<String, Vec<V>>;

/// 2^127, the first float magnitude outside the `i128` range.
const I128_BOUND: f64 = 170_141_183_460_469_231_731_687_303_715_884_105_728.0;

/// An ordering key produced by a selector: a number or a string.
///
/// Integers are kept exactly as `Int`, so keys beyond 2^53 stay distinct.
/// `Int` and `Float` compare with each other by mathematical value, which
/// makes `SortKey::from(4)` equal to `SortKey::from(4.0)`. Strings compare
/// lexicographically. Numbers and strings are not meant to be mixed within
/// one call; if they are, every number orders before every `Text` so that
/// comparisons stay total.
///
/// NaN is ordered by [`OrderedFloat`]'s total order: greater than every other
/// number and equal to itself.
///
/// # Example
/// ```
/// use seqkit::SortKey;
///
/// assert!(SortKey::from(2) < SortKey::from(10));
/// assert!(SortKey::from("10") < SortKey::from("2"));
/// assert!(SortKey::from(1u64 << 53) < SortKey::from((1u64 << 53) + 1));
/// assert_eq!(SortKey::from(3), SortKey::from(3.0));
/// assert_eq!(SortKey::from(1.5).as_number(), Some(1.5));
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SortKey {
    Int(i128),
    Float(OrderedFloat<f64>),
    Text(String),
}

impl SortKey {
    /// The numeric value as `f64`, if this is a number key.
    ///
    /// Integers wider than 53 bits are rounded; use [`SortKey::as_int`] for
    /// the exact value.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Int(i) => Some(*i as f64),
            Self::Float(f) => Some(f.into_inner()),
            Self::Text(_) => None,
        }
    }

    /// The exact integer value, if this is an `Int` key.
    #[must_use]
    pub fn as_int(&self) -> Option<i128> {
        match self {
            Self::Int(i) => Some(*i),
            _ => None,
        }
    }

    /// The string value, if this is a `Text` key.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }
}

/// Exact comparison of an integer against a float.
#[allow(clippy::cast_possible_truncation)]
fn cmp_int_float(int: i128, float: OrderedFloat<f64>) -> Ordering {
    let f = float.into_inner();
    if f.is_nan() {
        return Ordering::Less;
    }
    let whole = f.trunc();
    if whole >= I128_BOUND {
        return Ordering::Less;
    }
    if whole < -I128_BOUND {
        return Ordering::Greater;
    }
    // `whole` is integral and in range, so the cast is exact.
    int.cmp(&(whole as i128)).then_with(|| {
        if f > whole {
            Ordering::Less
        } else if f < whole {
            Ordering::Greater
        } else {
            Ordering::Equal
        }
    })
}

/// The `i128` a float is exactly equal to, if any.
#[allow(clippy::cast_possible_truncation, clippy::float_cmp)]
fn integral_value(float: OrderedFloat<f64>) -> Option<i128> {
    let f = float.into_inner();
    (f.trunc() == f && (-I128_BOUND..I128_BOUND).contains(&f)).then(|| f as i128)
}

impl Ord for SortKey {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Self::Int(a), Self::Int(b)) => a.cmp(b),
            (Self::Float(a), Self::Float(b)) => a.cmp(b),
            (Self::Int(a), Self::Float(b)) => cmp_int_float(*a, *b),
            (Self::Float(a), Self::Int(b)) => cmp_int_float(*b, *a).reverse(),
            (Self::Text(a), Self::Text(b)) => a.cmp(b),
            (Self::Text(_), _) => Ordering::Greater,
            (_, Self::Text(_)) => Ordering::Less,
        }
    }
}

impl PartialOrd for SortKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for SortKey {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for SortKey {}

// Integral floats hash like the equal `Int`, keeping `Hash` consistent with `Eq`.
impl Hash for SortKey {
    fn hash<H: Hasher>(&self, state: &mut H) {
        match self {
            Self::Int(i) => {
                state.write_u8(0);
                i.hash(state);
            }
            Self::Float(f) => match integral_value(*f) {
                Some(i) => {
                    state.write_u8(0);
                    i.hash(state);
                }
                None => {
                    state.write_u8(1);
                    f.hash(state);
                }
            },
            Self::Text(s) => {
                state.write_u8(2);
                s.hash(state);
            }
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(i) => write!(f, "{i}"),
            Self::Float(n) => write!(f, "{n}"),
            Self::Text(s) => f.write_str(s),
        }
    }
}

macro_rules! int_key_from {
    ($($t:ty),*) => {
        $(
            impl From<$t> for SortKey {
                #[inline]
                #[allow(clippy::cast_lossless)]
                fn from(v: $t) -> Self {
                    Self::Int(v as i128)
                }
            }
        )*
    };
}

int_key_from!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

impl From<i128> for SortKey {
    fn from(v: i128) -> Self {
        Self::Int(v)
    }
}

impl From<f32> for SortKey {
    fn from(v: f32) -> Self {
        Self::Float(OrderedFloat(f64::from(v)))
    }
}

impl From<f64> for SortKey {
    fn from(v: f64) -> Self {
        Self::Float(OrderedFloat(v))
    }
}

impl From<&str> for SortKey {
    fn from(v: &str) -> Self {
        Self::Text(v.to_owned())
    }
}

impl From<String> for SortKey {
    fn from(v: String) -> Self {
        Self::Text(v)
    }
}

impl From<&String> for SortKey {
    fn from(v: &String) -> Self {
        Self::Text(v.clone())
    }
}

impl From<char> for SortKey {
    fn from(v: char) -> Self {
        Self::Text(v.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn numbers_compare_numerically() {
        assert!(SortKey::from(-3) < SortKey::from(0u8));
        assert!(SortKey::from(2.5f32) > SortKey::from(2));
        assert!(SortKey::from(2.5) < SortKey::from(3));
        assert!(SortKey::from(-2.5) < SortKey::from(-2));
        assert!(SortKey::from(-2.5) > SortKey::from(-3));
        assert_eq!(SortKey::from(4u64), SortKey::from(4.0));
        assert_eq!(SortKey::from(0), SortKey::from(-0.0));
    }

    #[test]
    fn wide_integers_stay_exact() {
        let low = SortKey::from(1i64 << 53);
        let high = SortKey::from((1i64 << 53) + 1);
        assert!(low < high);
        assert_ne!(low, high);
        assert!(SortKey::from(u64::MAX) > SortKey::from(u64::MAX - 1));
        assert_eq!(SortKey::from(u64::MAX).as_int(), Some(i128::from(u64::MAX)));
        // the nearest float to 2^53 + 1 is 2^53
        assert!(SortKey::from(9_007_199_254_740_992.0) < high);
    }

    #[test]
    fn integers_against_infinities() {
        assert!(SortKey::from(i128::MAX) < SortKey::from(f64::INFINITY));
        assert!(SortKey::from(i128::MIN) > SortKey::from(f64::NEG_INFINITY));
        assert!(SortKey::from(i128::MAX) < SortKey::from(1e39));
        assert!(SortKey::from(i128::MIN) > SortKey::from(-1e39));
    }

    #[test]
    fn equal_keys_hash_alike() {
        let set: HashSet<SortKey> =
            [SortKey::from(4), SortKey::from(4.0), SortKey::from(4.5), SortKey::from("4")]
                .into_iter()
                .collect();
        assert_eq!(set.len(), 3);
    }

    #[test]
    fn text_compares_lexicographically() {
        assert!(SortKey::from("apple") < SortKey::from("banana"));
        assert!(SortKey::from("Z") < SortKey::from("a"));
        assert_eq!(SortKey::from('x'), SortKey::from("x"));
    }

    #[test]
    fn nan_is_total() {
        let nan = SortKey::from(f64::NAN);
        assert_eq!(nan.cmp(&nan), Ordering::Equal);
        assert!(nan > SortKey::from(f64::INFINITY));
        assert!(nan > SortKey::from(i128::MAX));
    }

    #[test]
    fn mixed_kinds_put_numbers_first() {
        assert!(SortKey::from(1_000_000) < SortKey::from(""));
        assert!(SortKey::from(f64::NAN) < SortKey::from(""));
    }

    #[test]
    fn display_and_accessors() {
        assert_eq!(SortKey::from(3).to_string(), "3");
        assert_eq!(SortKey::from(1.5).to_string(), "1.5");
        assert_eq!(SortKey::from("k").to_string(), "k");
        assert_eq!(SortKey::from("k").as_text(), Some("k"));
        assert_eq!(SortKey::from("k").as_number(), None);
        assert_eq!(SortKey::from(7u8).as_number(), Some(7.0));
        assert_eq!(SortKey::from(7.0).as_int(), None);
    }
}
