//! Non-mutating set operations.
//!
//! Every combinator returns a new [`IntervalSet`] and leaves both operands
//! untouched. They are assembled from restricted views and the in-place
//! mutation primitives.

use super::{IntervalSet, Operand};
use crate::error::IntervalSetError;
use crate::interval::Interval;
use crate::map::OrderedMap;

impl<T: Ord + Copy> IntervalSet<T> {
    /// Returns `self ∪ operand`.
    ///
    /// # Errors
    ///
    /// [`IntervalSetError::InvalidOperand`] for [`Operand::Element`].
    pub fn union<'a>(
        &self,
        operand: impl Into<Operand<'a, T>>,
    ) -> Result<IntervalSet<T>, IntervalSetError>
    where
        T: 'a,
    {
        match operand.into() {
            Operand::Interval(interval) => Ok(self.union_set(&IntervalSet::from(interval))),
            Operand::Set(other) => Ok(self.union_set(other)),
            element @ Operand::Element(_) => Err(element.rejected("union")),
        }
    }

    /// Returns `self − operand`.
    ///
    /// # Errors
    ///
    /// [`IntervalSetError::InvalidOperand`] for [`Operand::Element`].
    pub fn difference<'a>(
        &self,
        operand: impl Into<Operand<'a, T>>,
    ) -> Result<IntervalSet<T>, IntervalSetError>
    where
        T: 'a,
    {
        match operand.into() {
            Operand::Interval(interval) => Ok(self.difference_interval(interval)),
            Operand::Set(other) => Ok(self.difference_set(other)),
            element @ Operand::Element(_) => Err(element.rejected("difference")),
        }
    }

    /// Returns `self ∩ operand`.
    ///
    /// # Errors
    ///
    /// [`IntervalSetError::InvalidOperand`] for [`Operand::Element`].
    pub fn intersection<'a>(
        &self,
        operand: impl Into<Operand<'a, T>>,
    ) -> Result<IntervalSet<T>, IntervalSetError>
    where
        T: 'a,
    {
        match operand.into() {
            Operand::Interval(interval) => {
                let mut result = self.view_over(&interval);
                result.intersect_interval(interval);
                Ok(result)
            }
            Operand::Set(other) => Ok(self.intersection_set(other)),
            element @ Operand::Element(_) => Err(element.rejected("intersection")),
        }
    }

    /// Returns `(self ∪ operand) − (self ∩ operand)`.
    ///
    /// # Errors
    ///
    /// [`IntervalSetError::InvalidOperand`] for [`Operand::Element`].
    pub fn symmetric_difference<'a>(
        &self,
        operand: impl Into<Operand<'a, T>>,
    ) -> Result<IntervalSet<T>, IntervalSetError>
    where
        T: 'a,
    {
        match operand.into() {
            Operand::Interval(interval) => {
                Ok(self.symmetric_difference_set(&IntervalSet::from(interval)))
            }
            Operand::Set(other) => Ok(self.symmetric_difference_set(other)),
            element @ Operand::Element(_) => Err(element.rejected("symmetric_difference")),
        }
    }

    /// Returns the parts of `within` not covered by this set.
    pub fn complement(&self, within: Interval<T>) -> IntervalSet<T> {
        IntervalSet::from(within).difference_set(self)
    }

    fn union_set(&self, other: &IntervalSet<T>) -> IntervalSet<T> {
        if std::ptr::eq(self, other) || other.is_empty() {
            return self.clone();
        }
        if other.contains(self) {
            return other.clone();
        }
        let mut result = self.clone();
        result.add_set(other);
        result
    }

    fn difference_interval(&self, interval: Interval<T>) -> IntervalSet<T> {
        let Some(bounds) = self.bounds else {
            return IntervalSet::new();
        };
        if interval.covers(&bounds) {
            return IntervalSet::new();
        }
        if !self.bounds_overlap(&interval) {
            return self.clone();
        }

        // Everything starting left of the operand, plus everything from the
        // interval straddling its end onwards; `remove` trims the straddlers.
        let mut result = self.head_view(interval.start(), false);
        let tail_from = self
            .map
            .floor_entry(&interval.end())
            .map_or(interval.end(), |(key, _)| key);
        result.add_set(&self.tail_view(tail_from, true));
        result.remove_interval(interval);
        result
    }

    fn difference_set(&self, other: &IntervalSet<T>) -> IntervalSet<T> {
        let Some(bounds) = self.bounds else {
            return IntervalSet::new();
        };
        if other.contains(self) {
            return IntervalSet::new();
        }
        if !other.bounds_overlap(&bounds) {
            return self.clone();
        }
        let mut result = self.clone();
        for interval in other.overlapping(&bounds) {
            result.remove_interval(interval);
        }
        result
    }

    fn intersection_set(&self, other: &IntervalSet<T>) -> IntervalSet<T> {
        if std::ptr::eq(self, other) {
            return self.clone();
        }
        let Some(other_bounds) = other.bounds else {
            return IntervalSet::new();
        };
        if !self.bounds_overlap(&other_bounds) {
            return IntervalSet::new();
        }
        let mut result = self.view_over(&other_bounds);
        result.intersect_set(other);
        result
    }

    fn symmetric_difference_set(&self, other: &IntervalSet<T>) -> IntervalSet<T> {
        if std::ptr::eq(self, other) {
            return IntervalSet::new();
        }
        let mut result = self.union_set(other);
        result.remove_set(&self.intersection_set(other));
        result
    }
}
