//! Ordered-map queries the interval algebra is written against.
//!
//! [`IntervalSet`](crate::IntervalSet) keeps its intervals in a `BTreeMap`
//! keyed by interval start. Point updates, floor/lower lookups and key-range
//! views go through [`OrderedMap`]; whole-map copies and the lazy scan over
//! overlapping entries use the `BTreeMap` directly. Every trait query is
//! answered in O(log n) through [`BTreeMap::range`].

use std::collections::BTreeMap;
use std::ops::Bound::{self, Excluded, Included, Unbounded};

/// Sorted key/value storage with floor, lower and range queries.
///
/// Views (`sub_map`, `head_map`, `tail_map`) return independent maps holding
/// the selected entries.
pub trait OrderedMap<K, V>: Sized {
    /// Inserts or replaces the entry at `key`, returning the old value.
    fn put(&mut self, key: K, value: V) -> Option<V>;

    /// Removes the entry at `key`, returning its value.
    fn take(&mut self, key: &K) -> Option<V>;

    /// Number of entries.
    fn count(&self) -> usize;

    /// Entry with the greatest key `<= key`.
    fn floor_entry(&self, key: &K) -> Option<(K, V)>;

    /// Entry with the greatest key `< key`.
    fn lower_entry(&self, key: &K) -> Option<(K, V)>;

    /// Entry with the smallest key.
    fn min_entry(&self) -> Option<(K, V)>;

    /// Entry with the greatest key.
    fn max_entry(&self) -> Option<(K, V)>;

    /// Entries with keys between `low` and `high`, each end inclusive or not.
    fn sub_map(&self, low: K, low_inclusive: bool, high: K, high_inclusive: bool) -> Self;

    /// Entries with keys below `key` (or at it, if `inclusive`).
    fn head_map(&self, key: K, inclusive: bool) -> Self;

    /// Entries with keys above `key` (or at it, if `inclusive`).
    fn tail_map(&self, key: K, inclusive: bool) -> Self;
}

fn bound<K>(key: K, inclusive: bool) -> Bound<K> {
    if inclusive {
        Included(key)
    } else {
        Excluded(key)
    }
}

impl<K: Ord + Copy, V: Copy> OrderedMap<K, V> for BTreeMap<K, V> {
    fn put(&mut self, key: K, value: V) -> Option<V> {
        self.insert(key, value)
    }

    fn take(&mut self, key: &K) -> Option<V> {
        self.remove(key)
    }

    fn count(&self) -> usize {
        self.len()
    }

    fn floor_entry(&self, key: &K) -> Option<(K, V)> {
        self.range((Unbounded, Included(key)))
            .next_back()
            .map(|(k, v)| (*k, *v))
    }

    fn lower_entry(&self, key: &K) -> Option<(K, V)> {
        self.range((Unbounded, Excluded(key)))
            .next_back()
            .map(|(k, v)| (*k, *v))
    }

    fn min_entry(&self) -> Option<(K, V)> {
        self.iter().next().map(|(k, v)| (*k, *v))
    }

    fn max_entry(&self) -> Option<(K, V)> {
        self.iter().next_back().map(|(k, v)| (*k, *v))
    }

    fn sub_map(&self, low: K, low_inclusive: bool, high: K, high_inclusive: bool) -> Self {
        // `BTreeMap::range` panics on inverted or doubly-excluded point ranges.
        if low > high || (low == high && !(low_inclusive && high_inclusive)) {
            return BTreeMap::new();
        }
        self.range((bound(low, low_inclusive), bound(high, high_inclusive)))
            .map(|(k, v)| (*k, *v))
            .collect()
    }

    fn head_map(&self, key: K, inclusive: bool) -> Self {
        self.range((Unbounded, bound(key, inclusive)))
            .map(|(k, v)| (*k, *v))
            .collect()
    }

    fn tail_map(&self, key: K, inclusive: bool) -> Self {
        self.range((bound(key, inclusive), Unbounded))
            .map(|(k, v)| (*k, *v))
            .collect()
    }
}
