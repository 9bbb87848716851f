//! ivset - an algebra of half-open interval sets
//!
//! An [`IntervalSet`] stores a finite union of disjoint, sorted, half-open
//! intervals `[start, end)` over any totally ordered element type and keeps it
//! in canonical form: overlapping or touching intervals are always merged.
//!
//! On top of membership and subset/superset relations it offers union,
//! intersection, difference and symmetric difference, plus translation
//! ([`shift`](IntervalSet::shift)), margins ([`buffer`](IntervalSet::buffer))
//! and Minkowski-sum [`convolve`](IntervalSet::convolve) for element types
//! with addition.
//!
//! ```
//! use ivset::{Interval, IntervalSet};
//!
//! let a = IntervalSet::from(vec![Interval::new(0, 2), Interval::new(4, 6)]);
//! let b = IntervalSet::from(vec![Interval::new(1, 5), Interval::new(7, 8)]);
//!
//! let xor = a.symmetric_difference(&b).unwrap();
//! assert_eq!(xor.to_string(), "{[0, 1), [2, 4), [5, 6), [7, 8)}");
//!
//! let mut widened = a.clone();
//! widened.buffer(1, 1);
//! assert_eq!(widened, Interval::new(-1, 7));
//! ```
//!
//! ## Features
//!
//! - `serde`: `Serialize`/`Deserialize` for [`Interval`], [`IntervalSet`] and
//!   [`units::QuantityKey`]. Sets are written as a sequence of
//!   `{start, end}` objects and re-normalised on read.

pub mod error;
pub mod interval;
pub mod interval_set;
pub mod map;
pub mod units;

pub use error::IntervalSetError;
pub use interval::Interval;
pub use interval_set::{IntervalSet, Operand, OperandKind};
pub use map::OrderedMap;
