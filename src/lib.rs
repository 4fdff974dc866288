// ============================================================================
// Numeric Guard Library
// Type-checked arithmetic with explicit, verbatim error contracts
// ============================================================================

//! # Numeric Guard
//!
//! Checked division and addition over a small tagged numeric model.
//!
//! ## Features
//!
//! - **Tag-based type check**: only int, float and bool operands are numeric
//! - **Zero-divisor guard** covering `0`, `0.0`, `-0.0` and `false`
//! - **True division** with IEEE-754 results (`7 / 2 == 3.5`)
//! - **Configurable non-finite policy** (propagate or reject NaN/infinity)
//! - **Event reporting** through pluggable handlers
//!
//! ## Example
//!
//! ```rust
//! use numeric_guard::prelude::*;
//! use std::sync::Arc;
//!
//! assert_eq!(divide(&Value::Int(10), &Value::Int(2)), Ok(5.0));
//! assert_eq!(
//!     divide(&Value::from("10"), &Value::Int(0)).unwrap_err().to_string(),
//!     "Both arguments must be numeric"
//! );
//!
//! let calc = Calculator::new(
//!     CalculatorConfig::strict("reports".to_string()),
//!     Arc::new(LoggingEventHandler),
//! );
//! assert_eq!(
//!     calc.divide(&Value::Float(f64::INFINITY), &Value::Int(2)),
//!     Err(NumericError::TypeMismatch)
//! );
//! ```

pub mod domain;
pub mod engine;
pub mod interfaces;
pub mod numeric;
pub mod utils;

// Re-exports for convenience
pub mod prelude {
    pub use crate::domain::{CalculatorConfig, NonFinitePolicy};
    pub use crate::engine::{add, add_values, divide, divide_with_policy, Calculator};
    pub use crate::interfaces::{
        EventHandler, LoggingEventHandler, NoOpEventHandler, Operation, OperationEvent,
        RecordingEventHandler,
    };
    pub use crate::numeric::{Number, NumericError, NumericResult, Value};
}
