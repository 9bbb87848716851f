use thiserror::Error;

use crate::interval_set::OperandKind;

/// Errors returned by interval-set operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum IntervalSetError {
    /// The operand shape is not accepted by the operation it was passed to.
    #[error("Invalid operand for `{operation}`: {found} is not accepted")]
    InvalidOperand {
        operation: &'static str,
        found: OperandKind,
    },

    /// Input handed to a checked constructor breaks the canonical form.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}
