//! Half-open interval value type.

use std::fmt::Display;
use std::ops::Range;

/// Half-open range `[start, end)` over a totally ordered element type.
///
/// An interval with `start >= end` is empty. Empty and reversed intervals are
/// legal values and behave as the empty set everywhere; an
/// [`IntervalSet`](crate::IntervalSet) never stores them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Interval<T> {
    start: T,
    end: T,
}

impl<T: Ord + Copy> Interval<T> {
    /// Creates interval `[start, end)`.
    pub const fn new(start: T, end: T) -> Self {
        Self { start, end }
    }

    pub const fn start(&self) -> T {
        self.start
    }

    pub const fn end(&self) -> T {
        self.end
    }

    /// Returns true if the interval holds no element (`start >= end`).
    pub fn is_empty(&self) -> bool {
        self.start >= self.end
    }

    /// Returns true if `position` ∈ `[start, end)`.
    pub fn contains(&self, position: T) -> bool {
        self.start <= position && position < self.end
    }

    /// Returns true if both intervals share at least one element.
    pub fn overlaps(&self, other: &Interval<T>) -> bool {
        !self.is_empty()
            && !other.is_empty()
            && self.start < other.end
            && other.start < self.end
    }

    /// Returns true if the intervals overlap or abut, i.e. their union is a
    /// single interval.
    pub fn touches(&self, other: &Interval<T>) -> bool {
        !self.is_empty()
            && !other.is_empty()
            && self.start <= other.end
            && other.start <= self.end
    }

    /// Returns true if every element of `other` lies in `self`.
    ///
    /// The empty interval is covered by anything.
    pub fn covers(&self, other: &Interval<T>) -> bool {
        other.is_empty() || (self.start <= other.start && other.end <= self.end)
    }

    /// Common part of both intervals. The result is empty when they do not
    /// overlap.
    pub fn intersection(&self, other: &Interval<T>) -> Interval<T> {
        Interval::new(self.start.max(other.start), self.end.min(other.end))
    }

    /// Smallest interval spanning both operands. Empty operands are ignored.
    pub fn hull(&self, other: &Interval<T>) -> Interval<T> {
        if self.is_empty() {
            return *other;
        }
        if other.is_empty() {
            return *self;
        }
        Interval::new(self.start.min(other.start), self.end.max(other.end))
    }
}

impl<T: Ord + Copy> From<Range<T>> for Interval<T> {
    fn from(range: Range<T>) -> Self {
        Interval::new(range.start, range.end)
    }
}

impl<T: Ord + Copy> From<(T, T)> for Interval<T> {
    fn from((start, end): (T, T)) -> Self {
        Interval::new(start, end)
    }
}

impl<T: Display> Display for Interval<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}, {})", self.start, self.end)
    }
}

// =============================================================================
// Interval Serde Support
// =============================================================================

#[cfg(feature = "serde")]
impl<T: serde::Serialize> serde::Serialize for Interval<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeStruct;
        let mut s = serializer.serialize_struct("Interval", 2)?;
        s.serialize_field("start", &self.start)?;
        s.serialize_field("end", &self.end)?;
        s.end()
    }
}

#[cfg(feature = "serde")]
impl<'de, T: serde::Deserialize<'de>> serde::Deserialize<'de> for Interval<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(serde::Deserialize)]
        struct Raw<T> {
            start: T,
            end: T,
        }

        let raw = Raw::<T>::deserialize(deserializer)?;
        Ok(Self {
            start: raw.start,
            end: raw.end,
        })
    }
}
