//! Membership and set relations.

use super::{IntervalSet, Operand};
use crate::interval::Interval;
use crate::map::OrderedMap;

impl<T: Ord + Copy> IntervalSet<T> {
    /// Returns true if the operand is a subset of this set.
    ///
    /// Accepts every operand shape: an element, an interval (the empty
    /// interval is always contained) or another set (the empty set is always
    /// contained).
    ///
    /// ```
    /// use ivset::{Interval, IntervalSet, Operand};
    ///
    /// let set = IntervalSet::from(vec![Interval::new(0, 5), Interval::new(8, 9)]);
    /// assert!(set.contains(Operand::Element(4)));
    /// assert!(!set.contains(Operand::Element(5)));
    /// assert!(set.contains(Interval::new(1, 5)));
    /// assert!(!set.contains(Interval::new(4, 9)));
    /// ```
    pub fn contains<'a>(&self, operand: impl Into<Operand<'a, T>>) -> bool
    where
        T: 'a,
    {
        match operand.into() {
            Operand::Element(element) => self.contains_element(element),
            Operand::Interval(interval) => self.contains_interval(&interval),
            Operand::Set(other) => self.contains_set(other),
        }
    }

    /// Returns true if this set and the operand share at least one element.
    pub fn intersects<'a>(&self, operand: impl Into<Operand<'a, T>>) -> bool
    where
        T: 'a,
    {
        match operand.into() {
            Operand::Element(element) => self.contains_element(element),
            Operand::Interval(interval) => self.intersects_interval(&interval),
            Operand::Set(other) => self.intersects_set(other),
        }
    }

    /// `self ⊇ other`.
    pub fn is_superset_of(&self, other: &IntervalSet<T>) -> bool {
        self.contains_set(other)
    }

    /// `self ⊆ other`.
    pub fn is_subset_of(&self, other: &IntervalSet<T>) -> bool {
        other.contains_set(self)
    }

    /// `self ⊋ other`.
    pub fn is_proper_superset_of(&self, other: &IntervalSet<T>) -> bool {
        self != other && self.is_superset_of(other)
    }

    /// `self ⊊ other`.
    pub fn is_proper_subset_of(&self, other: &IntervalSet<T>) -> bool {
        self != other && self.is_subset_of(other)
    }

    /// Cheap pre-filter: does `interval` overlap the span of this set?
    ///
    /// Only the cached bounds are consulted, so a `true` answer says nothing
    /// about the gaps inside the span.
    pub fn bounds_overlap(&self, interval: &Interval<T>) -> bool {
        self.bounds.is_some_and(|bounds| bounds.overlaps(interval))
    }

    /// Like [`bounds_overlap`](Self::bounds_overlap), but also true when
    /// `interval` merely abuts the span.
    pub fn bounds_overlap_or_touch(&self, interval: &Interval<T>) -> bool {
        self.bounds.is_some_and(|bounds| bounds.touches(interval))
    }

    fn contains_element(&self, element: T) -> bool {
        self.map
            .floor_entry(&element)
            .is_some_and(|(_, iv)| iv.end() > element)
    }

    fn contains_interval(&self, interval: &Interval<T>) -> bool {
        if interval.is_empty() {
            return true;
        }
        self.bounds_overlap(interval)
            && self
                .map
                .floor_entry(&interval.start())
                .is_some_and(|(_, iv)| iv.end() >= interval.end())
    }

    fn contains_set(&self, other: &IntervalSet<T>) -> bool {
        if std::ptr::eq(self, other) || other.is_empty() {
            return true;
        }
        match (self.bounds, other.bounds) {
            (Some(outer), Some(inner)) if outer.covers(&inner) => {
                other.iter().all(|iv| self.contains_interval(iv))
            }
            _ => false,
        }
    }

    fn intersects_interval(&self, interval: &Interval<T>) -> bool {
        self.bounds_overlap(interval)
            && self
                .map
                .lower_entry(&interval.end())
                .is_some_and(|(_, iv)| iv.end() > interval.start())
    }

    fn intersects_set(&self, other: &IntervalSet<T>) -> bool {
        let Some(bounds) = self.bounds else {
            return false;
        };
        if std::ptr::eq(self, other) {
            return true;
        }
        other.bounds_overlap(&bounds)
            && other
                .overlapping(&bounds)
                .any(|iv| self.intersects_interval(&iv))
    }
}

/// A set equals an interval when it holds exactly that interval; the empty
/// interval equals the empty set.
impl<T: Ord + Copy> PartialEq<Interval<T>> for IntervalSet<T> {
    fn eq(&self, other: &Interval<T>) -> bool {
        if other.is_empty() {
            return self.is_empty();
        }
        self.len() == 1 && self.first() == Some(*other)
    }
}
