// ============================================================================
// Numeric Module
// Operand model and error types for checked arithmetic
// ============================================================================
//
// This module provides:
// - Number: the accepted numeric kinds (int, float, bool)
// - Value: the dynamic boundary type the type check runs against
// - NumericError: Error types for arithmetic operations
//
// Design principles:
// - Type checks are tag-based, never value-based
// - All arithmetic returns Result (no panics)

mod errors;
mod value;

pub use errors::{NumericError, NumericResult};
pub use value::{require_numeric, Number, Value};
