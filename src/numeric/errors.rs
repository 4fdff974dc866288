// ============================================================================
// Numeric Errors
// Error types for checked numeric operations
// ============================================================================

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Errors that can occur during checked numeric operations.
///
/// The `Display` text of `TypeMismatch` and `DivisionByZero` is part of the
/// public contract and must not change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum NumericError {
    /// An operand is not an int, float or bool
    TypeMismatch,
    /// Divisor is numerically zero
    DivisionByZero,
    /// Integer result exceeded the i64 range
    Overflow,
}

impl NumericError {
    /// Stable snake_case label for structured log fields.
    pub const fn kind(self) -> &'static str {
        match self {
            NumericError::TypeMismatch => "type_mismatch",
            NumericError::DivisionByZero => "division_by_zero",
            NumericError::Overflow => "overflow",
        }
    }
}

impl fmt::Display for NumericError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumericError::TypeMismatch => write!(f, "Both arguments must be numeric"),
            NumericError::DivisionByZero => write!(f, "Cannot divide by zero"),
            NumericError::Overflow => {
                write!(f, "arithmetic overflow: result exceeded maximum value")
            },
        }
    }
}

impl std::error::Error for NumericError {}

/// Result type alias for numeric operations
pub type NumericResult<T> = Result<T, NumericError>;
