//! Dimensioned elements backed by `qtty` quantities.
//!
//! `qtty::Quantity<U>` wraps an `f64`, which is only partially ordered.
//! [`QuantityKey`] restores a total order with IEEE-754 `total_cmp`, so time
//! instants (or any other dimension) can be stored in an
//! [`IntervalSet`](crate::IntervalSet) and shifted or buffered by plain
//! `Quantity<U>` offsets.
//!
//! ```
//! use ivset::units::QuantityKey;
//! use ivset::{Interval, IntervalSet};
//! use qtty::{Quantity, Second};
//!
//! let mut windows = IntervalSet::from(Interval::new(
//!     QuantityKey::<Second>::from_f64(0.0),
//!     QuantityKey::from_f64(60.0),
//! ));
//! windows.buffer(Quantity::<Second>::new(30.0), Quantity::new(0.0));
//! assert_eq!(windows.min().unwrap().value(), -30.0);
//! ```

use std::cmp::Ordering;
use std::fmt::Display;
use std::ops::{Add, Sub};

use qtty::{Quantity, Unit};

use crate::interval::Interval;
use crate::interval_set::IntervalSet;

/// A totally ordered `Quantity<U>`, usable as an interval-set element.
///
/// Ordering is IEEE-754 `total_cmp` over a normalised value: `-0.0` is stored
/// as `+0.0`, so intervals meeting at zero still touch and merge. NaN has no
/// place in an interval and is rejected on construction (a debug assertion
/// for the infallible constructors, `None` from [`QuantityKey::checked`]).
#[derive(Debug, Clone, Copy)]
pub struct QuantityKey<U: Unit>(Quantity<U>);

/// Folds `-0.0` into `+0.0`; every other value, infinities included, is kept.
fn normalize(value: f64) -> f64 {
    debug_assert!(!value.is_nan(), "NaN is not a valid interval element");
    value + 0.0
}

impl<U: Unit> QuantityKey<U> {
    pub fn new(quantity: Quantity<U>) -> Self {
        Self::from_f64(quantity.value())
    }

    pub fn from_f64(value: f64) -> Self {
        Self(Quantity::<U>::new(normalize(value)))
    }

    /// Returns `None` for NaN.
    pub fn checked(quantity: Quantity<U>) -> Option<Self> {
        (!quantity.value().is_nan()).then(|| Self::new(quantity))
    }

    pub const fn quantity(&self) -> Quantity<U> {
        self.0
    }

    pub const fn value(&self) -> f64 {
        self.0.value()
    }

    /// Converts to another unit of the same dimension.
    pub fn to<V: Unit<Dim = U::Dim>>(self) -> QuantityKey<V> {
        QuantityKey::new(self.0.to::<V>())
    }
}

impl<U: Unit> PartialEq for QuantityKey<U> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<U: Unit> Eq for QuantityKey<U> {}

impl<U: Unit> Ord for QuantityKey<U> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.value().total_cmp(&other.0.value())
    }
}

impl<U: Unit> PartialOrd for QuantityKey<U> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Offset by a quantity of the same unit.
impl<U: Unit> Add<Quantity<U>> for QuantityKey<U> {
    type Output = QuantityKey<U>;

    fn add(self, rhs: Quantity<U>) -> Self::Output {
        QuantityKey::new(self.0 + rhs)
    }
}

impl<U: Unit> Sub<Quantity<U>> for QuantityKey<U> {
    type Output = QuantityKey<U>;

    fn sub(self, rhs: Quantity<U>) -> Self::Output {
        QuantityKey::new(self.0 - rhs)
    }
}

/// Element-wise sum, as used by Minkowski convolution.
impl<U: Unit> Add for QuantityKey<U> {
    type Output = QuantityKey<U>;

    fn add(self, rhs: QuantityKey<U>) -> Self::Output {
        QuantityKey::new(self.0 + rhs.0)
    }
}

impl<U: Unit> From<Quantity<U>> for QuantityKey<U> {
    fn from(quantity: Quantity<U>) -> Self {
        Self::new(quantity)
    }
}

impl<U: Unit> Display for QuantityKey<U> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.value())
    }
}

impl<U: Unit> IntervalSet<QuantityKey<U>> {
    /// Converts every interval to another unit of the same dimension.
    ///
    /// Unit conversion is a positive scaling, so order and gaps survive and
    /// no merging is needed.
    pub fn to<V: Unit<Dim = U::Dim>>(&self) -> IntervalSet<QuantityKey<V>> {
        self.iter()
            .map(|iv| Interval::new(iv.start().to::<V>(), iv.end().to::<V>()))
            .collect()
    }
}

// =============================================================================
// QuantityKey Serde Support
// =============================================================================

#[cfg(feature = "serde")]
impl<U: Unit> serde::Serialize for QuantityKey<U> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_f64(self.0.value())
    }
}

#[cfg(feature = "serde")]
impl<'de, U: Unit> serde::Deserialize<'de> for QuantityKey<U> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let value = f64::deserialize(deserializer)?;
        if value.is_nan() {
            return Err(serde::de::Error::custom("NaN is not a valid interval element"));
        }
        Ok(Self::from_f64(value))
    }
}
