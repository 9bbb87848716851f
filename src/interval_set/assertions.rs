//! Canonical-form checks for interval sets.

use super::IntervalSet;
use crate::interval::Interval;

/// Returns why `intervals` is not canonical, or `None` if it is: every
/// interval is non-empty, intervals are sorted by start, and consecutive
/// intervals are separated by a strictly positive gap (`prev.end < next.start`).
pub(crate) fn canonical_violation<T: Ord + Copy>(
    intervals: &[Interval<T>],
) -> Option<&'static str> {
    if intervals.iter().any(Interval::is_empty) {
        return Some("empty or reversed interval");
    }
    intervals.windows(2).find_map(|w| {
        let (prev, curr) = (&w[0], &w[1]);
        if curr.start() < prev.start() {
            Some("intervals not sorted by start")
        } else if prev.end() >= curr.start() {
            Some("intervals overlap or touch")
        } else {
            None
        }
    })
}

/// Returns true if `set` is canonical and its cached bounds match its contents.
pub(crate) fn is_canonical<T: Ord + Copy>(set: &IntervalSet<T>) -> bool {
    if set.map.iter().any(|(key, iv)| *key != iv.start()) {
        return false;
    }
    let intervals: Vec<Interval<T>> = set.map.values().copied().collect();
    let expected_bounds = match (intervals.first(), intervals.last()) {
        (Some(first), Some(last)) => Some(Interval::new(first.start(), last.end())),
        _ => None,
    };
    canonical_violation(&intervals).is_none() && set.bounds == expected_bounds
}
