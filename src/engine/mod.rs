// ============================================================================
// Engine Module
// Checked numeric operations and the configured calculator
// ============================================================================

mod add;
mod calculator;
mod divide;

pub use add::{add, add_values, add_with_policy};
pub use calculator::Calculator;
pub use divide::{divide, divide_numbers, divide_with_policy};
