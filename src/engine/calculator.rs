// ============================================================================
// Calculator
// Configured entry point that runs operations and reports events
// ============================================================================

use crate::domain::CalculatorConfig;
use crate::engine::{add_with_policy, divide_with_policy};
use crate::interfaces::{EventHandler, Operation, OperationEvent};
use crate::numeric::{Number, NumericResult, Value};
use chrono::Utc;
use std::sync::Arc;

/// Runs numeric operations under a fixed configuration.
///
/// Holds no mutable state. Every call is independent, so one calculator can
/// be shared across threads behind an `Arc`.
pub struct Calculator {
    config: CalculatorConfig,

    /// Event handler for processing events
    event_handler: Arc<dyn EventHandler>,
}

impl Calculator {
    /// Create a new calculator
    pub fn new(config: CalculatorConfig, event_handler: Arc<dyn EventHandler>) -> Self {
        Self {
            config,
            event_handler,
        }
    }

    /// Creates a calculator after validating its configuration
    ///
    /// # Example
    /// ```
    /// use numeric_guard::prelude::*;
    /// use std::sync::Arc;
    ///
    /// let config = CalculatorConfig::strict("reports".to_string());
    /// let calc = Calculator::from_config(config, Arc::new(NoOpEventHandler)).unwrap();
    /// assert_eq!(calc.divide(&Value::Int(9), &Value::Int(3)), Ok(3.0));
    /// ```
    pub fn from_config(
        config: CalculatorConfig,
        event_handler: Arc<dyn EventHandler>,
    ) -> Result<Self, String> {
        config.validate()?;
        Ok(Self::new(config, event_handler))
    }

    pub fn config(&self) -> &CalculatorConfig {
        &self.config
    }

    /// Divide `a` by `b` under the configured non-finite policy.
    pub fn divide(&self, a: &Value, b: &Value) -> NumericResult<f64> {
        let result = divide_with_policy(a, b, self.config.non_finite);
        self.report(Operation::Divide, (a, b), result.map(Number::Float));
        result
    }

    /// Add `a` and `b` under the configured non-finite policy.
    pub fn add(&self, a: &Value, b: &Value) -> NumericResult<Number> {
        let result = add_with_policy(a, b, self.config.non_finite);
        self.report(Operation::Add, (a, b), result);
        result
    }

    fn report(
        &self,
        operation: Operation,
        operands: (&Value, &Value),
        outcome: NumericResult<Number>,
    ) {
        if !self.config.emit_events {
            return;
        }

        let calculator = self.config.name.clone();
        let event = match outcome {
            Ok(result) => OperationEvent::Computed {
                calculator,
                operation,
                result,
                timestamp: Utc::now(),
            },
            Err(error) => OperationEvent::Rejected {
                calculator,
                operation,
                error,
                operand_types: [
                    operands.0.type_name().to_string(),
                    operands.1.type_name().to_string(),
                ],
                timestamp: Utc::now(),
            },
        };

        self.event_handler.on_event(event);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::NonFinitePolicy;
    use crate::interfaces::{NoOpEventHandler, RecordingEventHandler};
    use crate::numeric::NumericError;

    fn recording(config: CalculatorConfig) -> (Calculator, Arc<RecordingEventHandler>) {
        let handler = Arc::new(RecordingEventHandler::new());
        let calc = Calculator::new(config, handler.clone());
        (calc, handler)
    }

    #[test]
    fn test_from_config_validates() {
        let bad = CalculatorConfig::new(String::new());
        assert!(Calculator::from_config(bad, Arc::new(NoOpEventHandler)).is_err());

        let good = CalculatorConfig::ieee("ok".to_string());
        let calc = Calculator::from_config(good, Arc::new(NoOpEventHandler)).unwrap();
        assert_eq!(calc.config().name, "ok");
    }

    #[test]
    fn test_divide_emits_computed_event() {
        let (calc, handler) = recording(CalculatorConfig::ieee("calc".to_string()));

        assert_eq!(calc.divide(&Value::Int(10), &Value::Int(4)), Ok(2.5));

        let events = handler.events();
        assert_eq!(events.len(), 1);
        match &events[0] {
            OperationEvent::Computed {
                calculator,
                operation,
                result,
                ..
            } => {
                assert_eq!(calculator, "calc");
                assert_eq!(*operation, Operation::Divide);
                assert_eq!(*result, Number::Float(2.5));
            },
            other => panic!("unexpected event {:?}", other),
        }
    }

    #[test]
    fn test_divide_emits_rejected_event() {
        let (calc, handler) = recording(CalculatorConfig::ieee("calc".to_string()));

        assert_eq!(
            calc.divide(&Value::Int(1), &Value::Float(-0.0)),
            Err(NumericError::DivisionByZero)
        );
        assert_eq!(
            calc.divide(&Value::from("x"), &Value::Int(0)),
            Err(NumericError::TypeMismatch)
        );

        let events = handler.events();
        assert_eq!(events.len(), 2);
        assert!(events.iter().all(OperationEvent::is_rejection));
        assert!(matches!(
            events[0],
            OperationEvent::Rejected {
                error: NumericError::DivisionByZero,
                ..
            }
        ));
        assert!(matches!(
            events[1],
            OperationEvent::Rejected {
                error: NumericError::TypeMismatch,
                ..
            }
        ));
    }

    #[test]
    fn test_rejected_event_records_operand_types() {
        let (calc, handler) = recording(CalculatorConfig::ieee("calc".to_string()));

        let custom = Value::Object {
            type_name: "Meters".to_string(),
            float_value: Some(2.0),
        };
        assert_eq!(
            calc.divide(&Value::from("x"), &Value::Int(2)),
            Err(NumericError::TypeMismatch)
        );
        assert_eq!(
            calc.add(&Value::Float(1.0), &custom),
            Err(NumericError::TypeMismatch)
        );
        assert_eq!(
            calc.divide(&Value::Int(1), &Value::Bool(false)),
            Err(NumericError::DivisionByZero)
        );

        let recorded: Vec<[String; 2]> = handler
            .events()
            .into_iter()
            .filter_map(|event| match event {
                OperationEvent::Rejected { operand_types, .. } => Some(operand_types),
                OperationEvent::Computed { .. } => None,
            })
            .collect();

        assert_eq!(
            recorded,
            vec![
                ["str".to_string(), "int".to_string()],
                ["float".to_string(), "Meters".to_string()],
                ["int".to_string(), "bool".to_string()],
            ]
        );
    }

    #[test]
    fn test_events_disabled() {
        let config = CalculatorConfig::ieee("quiet".to_string()).with_events(false);
        let (calc, handler) = recording(config);

        assert_eq!(calc.divide(&Value::Int(1), &Value::Int(2)), Ok(0.5));
        assert_eq!(calc.add(&Value::Int(1), &Value::Int(2)), Ok(Number::Int(3)));
        assert!(handler.is_empty());
    }

    #[test]
    fn test_strict_policy() {
        let (calc, handler) = recording(CalculatorConfig::strict("strict".to_string()));

        assert_eq!(
            calc.divide(&Value::Float(f64::INFINITY), &Value::Int(2)),
            Err(NumericError::TypeMismatch)
        );
        assert_eq!(
            calc.add(&Value::Float(f64::NAN), &Value::Int(2)),
            Err(NumericError::TypeMismatch)
        );
        assert_eq!(calc.add(&Value::Int(2), &Value::Int(2)), Ok(Number::Int(4)));
        assert_eq!(calc.config().non_finite, NonFinitePolicy::Reject);
        assert_eq!(handler.len(), 3);
    }

    #[test]
    fn test_ieee_policy_propagates_infinity() {
        let (calc, _) = recording(CalculatorConfig::ieee("ieee".to_string()));

        assert_eq!(
            calc.divide(&Value::Float(f64::INFINITY), &Value::Int(2)),
            Ok(f64::INFINITY)
        );
        assert_eq!(
            calc.add(&Value::Float(f64::NEG_INFINITY), &Value::Int(2)),
            Ok(Number::Float(f64::NEG_INFINITY))
        );
    }

    #[test]
    fn test_add_overflow_reported() {
        let (calc, handler) = recording(CalculatorConfig::ieee("calc".to_string()));

        assert_eq!(
            calc.add(&Value::Int(i64::MAX), &Value::Bool(true)),
            Err(NumericError::Overflow)
        );
        assert_eq!(handler.events()[0].operation(), Operation::Add);
    }

    #[test]
    fn test_calculator_is_shareable_across_threads() {
        let handler = Arc::new(RecordingEventHandler::new());
        let calc = Arc::new(Calculator::new(
            CalculatorConfig::ieee("shared".to_string()),
            handler.clone(),
        ));

        let workers: Vec<_> = (1..=8i64)
            .map(|i| {
                let calc = Arc::clone(&calc);
                std::thread::spawn(move || calc.divide(&Value::Int(i * 10), &Value::Int(i)))
            })
            .collect();

        for worker in workers {
            assert_eq!(worker.join().unwrap(), Ok(10.0));
        }
        assert_eq!(handler.len(), 8);
    }
}
