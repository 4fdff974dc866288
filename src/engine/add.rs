// ============================================================================
// Addition Helper
// Checked addition over the accepted numeric kinds
// ============================================================================

use crate::domain::NonFinitePolicy;
use crate::numeric::{require_numeric, Number, NumericError, NumericResult, Value};

/// Add two numbers.
///
/// Int and bool operands stay in the integer family (`true + true == 2`).
/// Any float operand promotes the sum to float with IEEE-754 addition.
///
/// # Errors
/// Returns `Overflow` if an integer sum leaves the i64 range.
#[inline]
pub fn add(a: Number, b: Number) -> NumericResult<Number> {
    match (a.as_i64(), b.as_i64()) {
        (Some(x), Some(y)) => x
            .checked_add(y)
            .map(Number::Int)
            .ok_or(NumericError::Overflow),
        _ => Ok(Number::Float(a.to_f64() + b.to_f64())),
    }
}

/// [`add`] on boundary values.
///
/// # Errors
/// Returns `TypeMismatch` if either operand is not an int, float or bool.
#[inline]
pub fn add_values(a: &Value, b: &Value) -> NumericResult<Number> {
    add_with_policy(a, b, NonFinitePolicy::Propagate)
}

/// [`add_values`] with an explicit classification of non-finite floats.
pub fn add_with_policy(a: &Value, b: &Value, policy: NonFinitePolicy) -> NumericResult<Number> {
    let (a, b) = require_numeric(a, b)?;
    if policy.rejects_non_finite() && !(a.is_finite() && b.is_finite()) {
        return Err(NumericError::TypeMismatch);
    }
    add(a, b)
}
