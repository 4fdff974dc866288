// ============================================================================
// Basic Usage Example
// ============================================================================

use numeric_guard::prelude::*;
use std::sync::Arc;

fn main() {
    #[cfg(feature = "logging")]
    if let Err(e) = numeric_guard::utils::init_logging("numeric_guard=debug") {
        eprintln!("logging disabled: {}", e);
    }

    println!("=== Numeric Guard Example ===\n");

    let calc = Calculator::new(
        CalculatorConfig::ieee("example".to_string()),
        Arc::new(LoggingEventHandler),
    );

    println!("10 / 4      = {:?}", calc.divide(&Value::Int(10), &Value::Int(4)));
    println!("true / 2    = {:?}", calc.divide(&Value::Bool(true), &Value::Int(2)));
    println!("1.0 / inf   = {:?}", calc.divide(&Value::Float(1.0), &Value::Float(f64::INFINITY)));
    println!("true + 41   = {:?}", calc.add(&Value::Bool(true), &Value::Int(41)));

    // Error contracts
    for (a, b) in [
        (Value::from("10"), Value::Int(2)),
        (Value::Int(1), Value::Float(-0.0)),
    ] {
        match calc.divide(&a, &b) {
            Ok(q) => println!("{:?} / {:?} = {}", a, b, q),
            Err(e) => println!("{} / {} -> {}", a.type_name(), b.type_name(), e),
        }
    }

    // Strict configuration rejects non-finite operands
    let strict = Calculator::new(
        CalculatorConfig::strict("strict".to_string()),
        Arc::new(LoggingEventHandler),
    );
    println!(
        "\nstrict inf / 2 = {:?}",
        strict.divide(&Value::Float(f64::INFINITY), &Value::Int(2))
    );
}
