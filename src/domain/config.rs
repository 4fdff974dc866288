// ============================================================================
// Calculator Configuration
// Policy and event settings for checked numeric operations
// ============================================================================

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

// ============================================================================
// Non-Finite Policy
// ============================================================================

/// How NaN and infinite float operands are classified
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum NonFinitePolicy {
    /// Non-finite floats are ordinary numeric inputs
    /// - NaN operands yield NaN
    /// - Infinite operands follow IEEE-754 division/addition
    #[default]
    Propagate,

    /// Non-finite floats fail the type check with `TypeMismatch`
    Reject,
}

impl NonFinitePolicy {
    #[inline]
    pub fn rejects_non_finite(self) -> bool {
        matches!(self, NonFinitePolicy::Reject)
    }
}

// ============================================================================
// Complete Calculator Configuration
// ============================================================================

/// Configuration for a [`Calculator`](crate::engine::Calculator)
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CalculatorConfig {
    /// Name attached to every emitted event (e.g., "pricing", "report-export")
    pub name: String,

    /// Classification of NaN and infinite float operands
    pub non_finite: NonFinitePolicy,

    /// Whether each operation emits an event to the handler
    pub emit_events: bool,
}

impl CalculatorConfig {
    /// Create a new configuration with required parameters
    pub fn new(name: String) -> Self {
        Self {
            name,
            non_finite: NonFinitePolicy::default(),
            emit_events: true,
        }
    }

    /// Builder method: Set the non-finite policy
    pub fn with_non_finite(mut self, policy: NonFinitePolicy) -> Self {
        self.non_finite = policy;
        self
    }

    /// Builder method: Enable or disable event emission
    pub fn with_events(mut self, emit: bool) -> Self {
        self.emit_events = emit;
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("Calculator name cannot be empty".to_string());
        }

        Ok(())
    }
}

impl Default for CalculatorConfig {
    fn default() -> Self {
        Self::ieee("default".to_string())
    }
}

// ============================================================================
// Preset Configurations (Factory Methods)
// ============================================================================

impl CalculatorConfig {
    /// IEEE-754 configuration
    /// - NaN and infinities flow through to the result
    pub fn ieee(name: String) -> Self {
        Self::new(name).with_non_finite(NonFinitePolicy::Propagate)
    }

    /// Strict configuration
    /// - NaN and infinities are rejected as non-numeric
    pub fn strict(name: String) -> Self {
        Self::new(name).with_non_finite(NonFinitePolicy::Reject)
    }
}
