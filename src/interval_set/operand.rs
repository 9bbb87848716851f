//! Right-hand operands accepted by interval-set operations.

use std::fmt::Display;

use super::IntervalSet;
use crate::error::IntervalSetError;
use crate::interval::Interval;

/// Right-hand side of an interval-set operation.
///
/// Each public operation dispatches on this shape exactly once. Operations
/// that have no meaning for a shape reject it with
/// [`IntervalSetError::InvalidOperand`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Operand<'a, T> {
    /// A single element `x`.
    Element(T),
    /// A half-open interval. Empty intervals are allowed and act as `∅`.
    Interval(Interval<T>),
    /// Another interval set, borrowed for the duration of the call.
    Set(&'a IntervalSet<T>),
}

/// Shape of an [`Operand`], carried by errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperandKind {
    Element,
    Interval,
    Set,
}

impl Display for OperandKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OperandKind::Element => write!(f, "a bare element"),
            OperandKind::Interval => write!(f, "an interval"),
            OperandKind::Set => write!(f, "an interval set"),
        }
    }
}

impl<'a, T> Operand<'a, T> {
    pub fn kind(&self) -> OperandKind {
        match self {
            Operand::Element(_) => OperandKind::Element,
            Operand::Interval(_) => OperandKind::Interval,
            Operand::Set(_) => OperandKind::Set,
        }
    }

    pub(crate) fn rejected(&self, operation: &'static str) -> IntervalSetError {
        IntervalSetError::InvalidOperand {
            operation,
            found: self.kind(),
        }
    }
}

impl<'a, T> From<Interval<T>> for Operand<'a, T> {
    fn from(interval: Interval<T>) -> Self {
        Operand::Interval(interval)
    }
}

impl<'a, T> From<&'a IntervalSet<T>> for Operand<'a, T> {
    fn from(set: &'a IntervalSet<T>) -> Self {
        Operand::Set(set)
    }
}
