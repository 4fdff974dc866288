// ============================================================================
// Event Handler Interface
// Defines the contract for handling operation events
// ============================================================================

use crate::numeric::{Number, NumericError};
use chrono::{DateTime, Utc};
use parking_lot::Mutex;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Arithmetic operation that produced an event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Operation {
    Add,
    Divide,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operation::Add => write!(f, "add"),
            Operation::Divide => write!(f, "divide"),
        }
    }
}

/// Events emitted by a calculator
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum OperationEvent {
    /// Operation completed with a result
    Computed {
        calculator: String,
        operation: Operation,
        result: Number,
        timestamp: DateTime<Utc>,
    },

    /// Operation rejected its operands
    Rejected {
        calculator: String,
        operation: Operation,
        error: NumericError,
        /// Type names of the left and right operands as received
        operand_types: [String; 2],
        timestamp: DateTime<Utc>,
    },
}

impl OperationEvent {
    pub fn operation(&self) -> Operation {
        match self {
            OperationEvent::Computed { operation, .. }
            | OperationEvent::Rejected { operation, .. } => *operation,
        }
    }

    pub fn is_rejection(&self) -> bool {
        matches!(self, OperationEvent::Rejected { .. })
    }
}

/// Event handler trait for processing calculator events
/// Implementations can handle logging, metrics, audits, etc.
pub trait EventHandler: Send + Sync {
    /// Handle an operation event
    fn on_event(&self, event: OperationEvent);

    /// Batch event handler (optional optimization)
    fn on_events(&self, events: Vec<OperationEvent>) {
        for event in events {
            self.on_event(event);
        }
    }
}

/// No-op event handler for testing
pub struct NoOpEventHandler;

impl EventHandler for NoOpEventHandler {
    fn on_event(&self, _event: OperationEvent) {}
}

/// Logging event handler
pub struct LoggingEventHandler;

impl EventHandler for LoggingEventHandler {
    fn on_event(&self, event: OperationEvent) {
        match &event {
            OperationEvent::Computed {
                calculator,
                operation,
                result,
                ..
            } => {
                tracing::debug!(
                    %calculator,
                    %operation,
                    %result,
                    result_type = result.type_name(),
                    "operation computed"
                );
            },
            OperationEvent::Rejected {
                calculator,
                operation,
                error,
                operand_types: [left, right],
                ..
            } => {
                tracing::warn!(
                    %calculator,
                    %operation,
                    kind = error.kind(),
                    %left,
                    %right,
                    "operation rejected: {}",
                    error
                );
            },
        }
    }
}

/// Collects every event in memory, in arrival order
#[derive(Default)]
pub struct RecordingEventHandler {
    events: Mutex<Vec<OperationEvent>>,
}

impl RecordingEventHandler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the events recorded so far
    pub fn events(&self) -> Vec<OperationEvent> {
        self.events.lock().clone()
    }

    pub fn len(&self) -> usize {
        self.events.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.lock().is_empty()
    }

    pub fn clear(&self) {
        self.events.lock().clear();
    }
}

impl EventHandler for RecordingEventHandler {
    fn on_event(&self, event: OperationEvent) {
        self.events.lock().push(event);
    }
}
