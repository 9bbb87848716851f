//! In-place add, remove and intersect.
//!
//! Each public operation accepts an interval or another set. Interval operands
//! are handled by locating the *core region* (stored intervals whose start
//! falls inside the operand), the left neighbour found by a lower-key query,
//! and the right-most interval touched by the operand's end; only those
//! entries are rewritten.

use super::{assertions, IntervalSet, Operand};
use crate::error::IntervalSetError;
use crate::interval::Interval;
use crate::map::OrderedMap;

impl<T: Ord + Copy> IntervalSet<T> {
    /// Inserts an interval or every interval of another set, merging with
    /// overlapping or touching stored intervals.
    ///
    /// Empty intervals are ignored.
    ///
    /// # Errors
    ///
    /// [`IntervalSetError::InvalidOperand`] for [`Operand::Element`].
    pub fn add<'a>(
        &mut self,
        operand: impl Into<Operand<'a, T>>,
    ) -> Result<&mut Self, IntervalSetError>
    where
        T: 'a,
    {
        match operand.into() {
            Operand::Interval(interval) => self.add_interval(interval),
            Operand::Set(other) => self.add_set(other),
            element @ Operand::Element(_) => return Err(element.rejected("add")),
        }
        debug_assert!(assertions::is_canonical(self));
        Ok(self)
    }

    /// Subtracts an interval or every interval of another set, splitting
    /// stored intervals at the operand's boundaries.
    ///
    /// # Errors
    ///
    /// [`IntervalSetError::InvalidOperand`] for [`Operand::Element`].
    pub fn remove<'a>(
        &mut self,
        operand: impl Into<Operand<'a, T>>,
    ) -> Result<&mut Self, IntervalSetError>
    where
        T: 'a,
    {
        match operand.into() {
            Operand::Interval(interval) => self.remove_interval(interval),
            Operand::Set(other) => self.remove_set(other),
            element @ Operand::Element(_) => return Err(element.rejected("remove")),
        }
        debug_assert!(assertions::is_canonical(self));
        Ok(self)
    }

    /// Keeps only the parts of this set that also lie in the operand.
    ///
    /// # Errors
    ///
    /// [`IntervalSetError::InvalidOperand`] for [`Operand::Element`].
    pub fn intersect<'a>(
        &mut self,
        operand: impl Into<Operand<'a, T>>,
    ) -> Result<&mut Self, IntervalSetError>
    where
        T: 'a,
    {
        match operand.into() {
            Operand::Interval(interval) => self.intersect_interval(interval),
            Operand::Set(other) => self.intersect_set(other),
            element @ Operand::Element(_) => return Err(element.rejected("intersect")),
        }
        debug_assert!(assertions::is_canonical(self));
        Ok(self)
    }

    pub(crate) fn add_interval(&mut self, interval: Interval<T>) {
        if interval.is_empty() {
            return;
        }

        let Some(bounds) = self.bounds else {
            self.map.put(interval.start(), interval);
            self.bounds = Some(interval);
            return;
        };

        // Fast path: strictly outside the current span, nothing to merge.
        if interval.end() < bounds.start() || interval.start() > bounds.end() {
            self.map.put(interval.start(), interval);
            self.bounds = Some(bounds.hull(&interval));
            return;
        }

        // Fast path: swallows everything.
        if interval.covers(&bounds) {
            self.map.clear();
            self.map.put(interval.start(), interval);
            self.bounds = Some(interval);
            return;
        }

        let left = self
            .map
            .lower_entry(&interval.start())
            .map(|(_, iv)| iv)
            .filter(|iv| iv.end() >= interval.start());
        let core: Vec<Interval<T>> = self
            .map
            .sub_map(interval.start(), true, interval.end(), true)
            .into_values()
            .collect();
        let right = core.last().copied().or(left);

        let merged_start = left.map_or(interval.start(), |iv| iv.start());
        let merged_end = match right {
            Some(iv) if iv.end() > interval.end() => iv.end(),
            _ => interval.end(),
        };

        for iv in &core {
            self.map.take(&iv.start());
        }
        if let Some(iv) = left {
            self.map.take(&iv.start());
        }

        let merged = Interval::new(merged_start, merged_end);
        self.map.put(merged_start, merged);
        self.bounds = Some(bounds.hull(&merged));
    }

    pub(crate) fn add_set(&mut self, other: &IntervalSet<T>) {
        if other.is_empty() {
            return;
        }
        if self.is_empty() {
            self.copy_from(other);
            return;
        }
        for interval in other.iter() {
            self.add_interval(*interval);
        }
    }

    pub(crate) fn remove_interval(&mut self, interval: Interval<T>) {
        if !self.bounds_overlap(&interval) {
            return;
        }

        let left = self.map.lower_entry(&interval.start()).map(|(_, iv)| iv);
        let core: Vec<Interval<T>> = self
            .map
            .sub_map(interval.start(), true, interval.end(), false)
            .into_values()
            .collect();
        let right = core.last().copied().or(left);

        for iv in &core {
            self.map.take(&iv.start());
        }

        // Right remnant first: when the left neighbour is also the right-most
        // touched interval it yields both remnants.
        if let Some(iv) = right.filter(|iv| iv.end() > interval.end()) {
            self.map.put(interval.end(), Interval::new(interval.end(), iv.end()));
        }
        if let Some(iv) = left.filter(|iv| iv.end() > interval.start()) {
            self.map.put(iv.start(), Interval::new(iv.start(), interval.start()));
        }

        self.refresh_bounds();
    }

    pub(crate) fn remove_set(&mut self, other: &IntervalSet<T>) {
        let Some(bounds) = self.bounds else {
            return;
        };
        for interval in other.overlapping(&bounds) {
            self.remove_interval(interval);
        }
    }

    pub(crate) fn intersect_interval(&mut self, interval: Interval<T>) {
        let Some(bounds) = self.bounds else {
            return;
        };
        if !self.bounds_overlap(&interval) {
            self.clear();
            return;
        }
        if interval.covers(&bounds) {
            return;
        }

        let left = self.map.lower_entry(&interval.start()).map(|(_, iv)| iv);
        let right = self.map.lower_entry(&interval.end()).map(|(_, iv)| iv);

        // Keep only the keys in `[start, end)`.
        self.map = self.map.sub_map(interval.start(), true, interval.end(), false);

        if let Some(iv) = left.filter(|iv| iv.end() > interval.start()) {
            self.map.put(
                interval.start(),
                Interval::new(interval.start(), iv.end().min(interval.end())),
            );
        }
        if let Some(iv) = right.filter(|iv| iv.end() > interval.end()) {
            let start = iv.start().max(interval.start());
            self.map.put(start, Interval::new(start, interval.end()));
        }

        self.refresh_bounds();
    }

    pub(crate) fn intersect_set(&mut self, other: &IntervalSet<T>) {
        let Some(bounds) = self.bounds else {
            return;
        };
        if !other.bounds_overlap(&bounds) {
            self.clear();
            return;
        }

        let mut result = IntervalSet::new();
        for interval in other.overlapping(&bounds) {
            let mut part = self.view_over(&interval);
            part.intersect_interval(interval);
            result.add_set(&part);
        }
        *self = result;
    }
}
