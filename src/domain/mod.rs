// ============================================================================
// Domain Models Module
// Configuration shared by the numeric operations
// ============================================================================

pub mod config;

pub use config::{CalculatorConfig, NonFinitePolicy};
