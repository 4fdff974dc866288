// ============================================================================
// Numeric Divider
// Type-checked true division with a zero-divisor guard
// ============================================================================

use crate::domain::NonFinitePolicy;
use crate::numeric::{require_numeric, Number, NumericError, NumericResult, Value};

/// Divide `a` by `b` as floating-point numbers.
///
/// NaN and infinite operands propagate with IEEE-754 semantics. Use
/// [`divide_with_policy`] to reject them instead.
///
/// # Errors
/// - `TypeMismatch` if either operand is not an int, float or bool
/// - `DivisionByZero` if `b` is `0`, `0.0`, `-0.0` or `false`
///
/// # Example
/// ```
/// use numeric_guard::engine::divide;
/// use numeric_guard::numeric::{NumericError, Value};
///
/// assert_eq!(divide(&Value::Int(10), &Value::Int(4)), Ok(2.5));
/// assert_eq!(
///     divide(&Value::Int(1), &Value::Bool(false)),
///     Err(NumericError::DivisionByZero)
/// );
/// ```
#[inline]
pub fn divide(a: &Value, b: &Value) -> NumericResult<f64> {
    divide_with_policy(a, b, NonFinitePolicy::Propagate)
}

/// [`divide`] with an explicit classification of non-finite floats.
#[inline]
pub fn divide_with_policy(a: &Value, b: &Value, policy: NonFinitePolicy) -> NumericResult<f64> {
    let (a, b) = require_numeric(a, b)?;
    divide_numbers(a, b, policy)
}

/// Division on operands that already passed the boundary type check.
///
/// Under `NonFinitePolicy::Reject` a NaN or infinite operand is reported as
/// `TypeMismatch`, ahead of the zero-divisor check.
pub fn divide_numbers(a: Number, b: Number, policy: NonFinitePolicy) -> NumericResult<f64> {
    if policy.rejects_non_finite() && !(a.is_finite() && b.is_finite()) {
        return Err(NumericError::TypeMismatch);
    }

    if b.is_zero() {
        return Err(NumericError::DivisionByZero);
    }

    Ok(a.to_f64() / b.to_f64())
}

// ============================================================================
// Tests
// ============================================================================
