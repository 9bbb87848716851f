//! Translation, buffering and Minkowski-sum convolution.
//!
//! These are the only operations that need arithmetic on the element type.
//! The capabilities are requested per method (`T: Add<O>`, `T: Sub<O>`) so
//! that the set relations stay available for any ordered `T`. Addition is
//! assumed to be monotone: `a <= b` implies `a + o <= b + o`.

use std::collections::BTreeMap;
use std::ops::{Add, Sub};

use super::{assertions, IntervalSet, Operand};
use crate::interval::Interval;

impl<T: Ord + Copy> IntervalSet<T> {
    /// Translates every interval by `amount`.
    ///
    /// Order and gaps are preserved, so the intervals are re-keyed directly
    /// without merging.
    pub fn shift<O: Copy>(&mut self, amount: O) -> &mut Self
    where
        T: Add<O, Output = T>,
    {
        let moved = |iv: &Interval<T>| Interval::new(iv.start() + amount, iv.end() + amount);
        let map: BTreeMap<T, Interval<T>> = self
            .map
            .values()
            .map(|iv| {
                let shifted = moved(iv);
                (shifted.start(), shifted)
            })
            .collect();
        self.map = map;
        self.bounds = self.bounds.as_ref().map(moved);
        debug_assert!(assertions::is_canonical(self));
        self
    }

    /// Widens every interval `[s, e)` to `[s - left, e + right)`.
    ///
    /// Widened intervals that meet are merged. Negative margins shrink the
    /// intervals instead, and those that become empty are dropped.
    ///
    /// ```
    /// use ivset::{Interval, IntervalSet};
    ///
    /// let mut set = IntervalSet::from(vec![Interval::new(1, 2), Interval::new(6, 8)]);
    /// set.buffer(1, 2);
    /// assert_eq!(set.to_string(), "{[0, 4), [5, 10)}");
    ///
    /// set.buffer(-1, -2);
    /// assert_eq!(set.to_string(), "{[1, 2), [6, 8)}");
    /// ```
    pub fn buffer<O: Copy>(&mut self, left: O, right: O) -> &mut Self
    where
        T: Add<O, Output = T> + Sub<O, Output = T>,
    {
        let original = std::mem::take(&mut self.map);
        self.bounds = None;
        for iv in original.into_values() {
            self.add_interval(Interval::new(iv.start() - left, iv.end() + right));
        }
        debug_assert!(assertions::is_canonical(self));
        self
    }

    /// Replaces this set by its Minkowski sum with the operand,
    /// `{a + b : a ∈ self, b ∈ operand}`.
    ///
    /// - element `k`: same as [`shift(k)`](Self::shift);
    /// - interval `[lo, hi)`: every `[s, e)` becomes `[s + lo, e + hi)`; an empty
    ///   or reversed operand yields the empty set;
    /// - set: union of the convolutions with each of its intervals; an empty
    ///   operand yields the empty set.
    pub fn convolve<'a>(&mut self, operand: impl Into<Operand<'a, T>>) -> &mut Self
    where
        T: Add<Output = T> + 'a,
    {
        match operand.into() {
            Operand::Element(amount) => self.shift(amount),
            Operand::Interval(interval) => {
                self.convolve_interval(interval);
                debug_assert!(assertions::is_canonical(self));
                self
            }
            Operand::Set(other) => {
                self.convolve_set(other);
                debug_assert!(assertions::is_canonical(self));
                self
            }
        }
    }

    fn convolve_interval(&mut self, interval: Interval<T>)
    where
        T: Add<Output = T>,
    {
        if interval.is_empty() {
            self.clear();
            return;
        }
        let original = std::mem::take(&mut self.map);
        self.bounds = None;
        for iv in original.into_values() {
            self.add_interval(Interval::new(
                iv.start() + interval.start(),
                iv.end() + interval.end(),
            ));
        }
    }

    fn convolve_set(&mut self, other: &IntervalSet<T>)
    where
        T: Add<Output = T>,
    {
        let mut result = IntervalSet::new();
        for interval in other.iter() {
            let mut part = self.clone();
            part.convolve_interval(*interval);
            result.add_set(&part);
        }
        *self = result;
    }
}
