//! A canonical container for disjoint, sorted half-open intervals.
//!
//! [`IntervalSet`] keeps its intervals in an ordered map keyed by interval
//! start and guarantees the **canonical invariant** after every operation:
//! keys are strictly increasing, and no two stored intervals overlap or abut
//! (touching intervals are merged), so a strictly positive gap separates
//! neighbours. Empty intervals are never stored.
//!
//! The operations are split by concern:
//!
//! - `mutation`: in-place [`add`](IntervalSet::add),
//!   [`remove`](IntervalSet::remove) and [`intersect`](IntervalSet::intersect).
//! - `combinators`: non-mutating [`union`](IntervalSet::union),
//!   [`difference`](IntervalSet::difference),
//!   [`intersection`](IntervalSet::intersection) and
//!   [`symmetric_difference`](IntervalSet::symmetric_difference).
//! - `relations`: membership, subset/superset and intersection tests.
//! - `transforms`: [`shift`](IntervalSet::shift),
//!   [`buffer`](IntervalSet::buffer) and [`convolve`](IntervalSet::convolve).

mod assertions;
mod combinators;
mod mutation;
mod operand;
mod relations;
mod transforms;

#[cfg(test)]
mod tests;

use std::collections::{btree_map, BTreeMap};
use std::fmt::Display;

use crate::error::IntervalSetError;
use crate::interval::Interval;
use crate::map::OrderedMap;

pub use operand::{Operand, OperandKind};

/// A sorted set of disjoint, non-touching half-open intervals.
///
/// # Performance
///
/// - `add` / `remove` / `intersect` with an interval: O(log n + k), where k is
///   the number of stored intervals touched by the operand.
/// - Element and interval membership: O(log n).
/// - Bounds: O(1), cached.
///
/// # Examples
///
/// ```
/// use ivset::{Interval, IntervalSet};
///
/// let mut set = IntervalSet::<i64>::new();
/// set.add(Interval::new(1, 2)).unwrap()
///     .add(Interval::new(3, 4)).unwrap()
///     .add(Interval::new(2, 3)).unwrap();
/// assert_eq!(set, Interval::new(1, 4));
///
/// set.remove(Interval::new(2, 3)).unwrap();
/// assert_eq!(set.to_string(), "{[1, 2), [3, 4)}");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IntervalSet<T> {
    map: BTreeMap<T, Interval<T>>,
    bounds: Option<Interval<T>>,
}

// ─────────────────────────────────────────────────────────────────────
// Constructors
// ─────────────────────────────────────────────────────────────────────

impl<T: Ord + Copy> IntervalSet<T> {
    /// Creates an empty interval set.
    pub fn new() -> Self {
        Self {
            map: BTreeMap::new(),
            bounds: None,
        }
    }

    /// Wraps a map that already holds canonical entries, e.g. a key-range
    /// view of another set.
    pub(crate) fn from_map(map: BTreeMap<T, Interval<T>>) -> Self {
        let mut set = Self { map, bounds: None };
        set.refresh_bounds();
        debug_assert!(
            assertions::is_canonical(&set),
            "IntervalSet::from_map called with non-canonical entries"
        );
        set
    }

    /// Builds a set from intervals that are **already in canonical form**:
    /// non-empty, sorted by start, separated by strictly positive gaps.
    ///
    /// Unlike the `From<Vec<_>>` conversion nothing is merged; non-canonical
    /// input is rejected with [`IntervalSetError::InvalidArgument`].
    pub fn try_from_sorted(intervals: Vec<Interval<T>>) -> Result<Self, IntervalSetError> {
        if let Some(reason) = assertions::canonical_violation(&intervals) {
            return Err(IntervalSetError::InvalidArgument(reason.to_string()));
        }
        Ok(Self::from_map(
            intervals.into_iter().map(|iv| (iv.start(), iv)).collect(),
        ))
    }
}

// ─────────────────────────────────────────────────────────────────────
// Accessors
// ─────────────────────────────────────────────────────────────────────

impl<T: Ord + Copy> IntervalSet<T> {
    /// Number of stored (maximal) intervals.
    pub fn len(&self) -> usize {
        self.map.count()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Span from the start of the first interval to the end of the last one.
    pub fn bounds(&self) -> Option<Interval<T>> {
        self.bounds
    }

    /// Start of the first interval.
    pub fn min(&self) -> Option<T> {
        self.bounds.map(|b| b.start())
    }

    /// End of the last interval.
    pub fn max(&self) -> Option<T> {
        self.bounds.map(|b| b.end())
    }

    pub fn first(&self) -> Option<Interval<T>> {
        self.map.min_entry().map(|(_, iv)| iv)
    }

    pub fn last(&self) -> Option<Interval<T>> {
        self.map.max_entry().map(|(_, iv)| iv)
    }

    /// Iterates over the stored intervals from left to right.
    pub fn iter(&self) -> btree_map::Values<'_, T, Interval<T>> {
        self.map.values()
    }

    /// Removes all intervals.
    pub fn clear(&mut self) {
        self.map.clear();
        self.bounds = None;
    }

    /// Overwrites this set's contents and bounds with those of `other`.
    pub fn copy_from(&mut self, other: &IntervalSet<T>) {
        self.map.clone_from(&other.map);
        self.bounds = other.bounds;
    }
}

// ─────────────────────────────────────────────────────────────────────
// Restricted views
// ─────────────────────────────────────────────────────────────────────

impl<T: Ord + Copy> IntervalSet<T> {
    /// Intervals whose start lies between `low` and `high`.
    pub fn sub_view(&self, low: T, low_inclusive: bool, high: T, high_inclusive: bool) -> Self {
        Self::from_map(self.map.sub_map(low, low_inclusive, high, high_inclusive))
    }

    /// Intervals whose start lies below `key` (or at it, if `inclusive`).
    pub fn head_view(&self, key: T, inclusive: bool) -> Self {
        Self::from_map(self.map.head_map(key, inclusive))
    }

    /// Intervals whose start lies above `key` (or at it, if `inclusive`).
    pub fn tail_view(&self, key: T, inclusive: bool) -> Self {
        Self::from_map(self.map.tail_map(key, inclusive))
    }

    /// Stored intervals sharing at least one element with `span`, in order.
    pub(crate) fn overlapping<'s>(
        &'s self,
        span: &Interval<T>,
    ) -> impl Iterator<Item = Interval<T>> + 's {
        let from = (!span.is_empty()).then(|| match self.map.lower_entry(&span.start()) {
            Some((key, left)) if left.end() > span.start() => key,
            _ => span.start(),
        });
        let end = span.end();
        from.into_iter()
            .flat_map(move |from| self.map.range(from..end).map(|(_, iv)| *iv))
    }

    /// The stored intervals overlapping `span`, untrimmed, as a set of their own.
    pub(crate) fn view_over(&self, span: &Interval<T>) -> Self {
        Self::from_map(
            self.overlapping(span)
                .map(|iv| (iv.start(), iv))
                .collect(),
        )
    }
}

// ─────────────────────────────────────────────────────────────────────
// Internal helpers
// ─────────────────────────────────────────────────────────────────────

impl<T: Ord + Copy> IntervalSet<T> {
    /// Recomputes the cached bounds from the first and last entries.
    fn refresh_bounds(&mut self) {
        self.bounds = match (self.map.min_entry(), self.map.max_entry()) {
            (Some((_, first)), Some((_, last))) => Some(Interval::new(first.start(), last.end())),
            _ => None,
        };
    }
}

// ─────────────────────────────────────────────────────────────────────
// Conversions
// ─────────────────────────────────────────────────────────────────────

impl<T: Ord + Copy> Default for IntervalSet<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Ord + Copy> From<Interval<T>> for IntervalSet<T> {
    /// Creates a set holding `interval`, or an empty set if it is empty.
    fn from(interval: Interval<T>) -> Self {
        let mut set = Self::new();
        set.add_interval(interval);
        set
    }
}

impl<T: Ord + Copy> From<Vec<Interval<T>>> for IntervalSet<T> {
    /// Creates a set from intervals in any order, merging as needed.
    fn from(intervals: Vec<Interval<T>>) -> Self {
        intervals.into_iter().collect()
    }
}

impl<T: Ord + Copy> FromIterator<Interval<T>> for IntervalSet<T> {
    fn from_iter<I: IntoIterator<Item = Interval<T>>>(iter: I) -> Self {
        let mut set = Self::new();
        set.extend(iter);
        set
    }
}

impl<T: Ord + Copy> Extend<Interval<T>> for IntervalSet<T> {
    fn extend<I: IntoIterator<Item = Interval<T>>>(&mut self, iter: I) {
        for interval in iter {
            self.add_interval(interval);
        }
    }
}

// ─────────────────────────────────────────────────────────────────────
// Iterators
// ─────────────────────────────────────────────────────────────────────

impl<T> IntoIterator for IntervalSet<T> {
    type Item = Interval<T>;
    type IntoIter = btree_map::IntoValues<T, Interval<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.map.into_values()
    }
}

impl<'a, T> IntoIterator for &'a IntervalSet<T> {
    type Item = &'a Interval<T>;
    type IntoIter = btree_map::Values<'a, T, Interval<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.map.values()
    }
}

impl<T: Display> Display for IntervalSet<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{{")?;
        for (i, interval) in self.map.values().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", interval)?;
        }
        write!(f, "}}")
    }
}

// ─────────────────────────────────────────────────────────────────────
// Serde support
// ─────────────────────────────────────────────────────────────────────

#[cfg(feature = "serde")]
impl<T: serde::Serialize> serde::Serialize for IntervalSet<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_seq(self.map.values())
    }
}

#[cfg(feature = "serde")]
impl<'de, T> serde::Deserialize<'de> for IntervalSet<T>
where
    T: Ord + Copy + serde::Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let intervals = Vec::<Interval<T>>::deserialize(deserializer)?;
        Ok(Self::from(intervals))
    }
}
