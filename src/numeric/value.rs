// ============================================================================
// Operand Values
// Accepted numeric kinds and the dynamic values callers hand us
// ============================================================================

use super::errors::{NumericError, NumericResult};
use rust_decimal::Decimal;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A value whose type is one of the accepted numeric kinds.
///
/// `Bool` sits in the integer family: `true` is 1 and `false` is 0.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Number {
    Int(i64),
    Float(f64),
    Bool(bool),
}

impl Number {
    /// Widen to a double.
    ///
    /// Integers beyond 2^53 round to the nearest representable double.
    #[inline]
    pub fn to_f64(self) -> f64 {
        match self {
            Number::Int(v) => v as f64,
            Number::Float(v) => v,
            Number::Bool(v) => {
                if v {
                    1.0
                } else {
                    0.0
                }
            },
        }
    }

    /// Integer view for the int family. `None` for floats.
    #[inline]
    pub fn as_i64(self) -> Option<i64> {
        match self {
            Number::Int(v) => Some(v),
            Number::Bool(v) => Some(i64::from(v)),
            Number::Float(_) => None,
        }
    }

    /// Numeric equality with zero: `0`, `0.0`, `-0.0` and `false` are zero, NaN is not.
    #[inline]
    pub fn is_zero(self) -> bool {
        match self {
            Number::Int(v) => v == 0,
            Number::Float(v) => v == 0.0,
            Number::Bool(v) => !v,
        }
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        match self {
            Number::Float(v) => v.is_finite(),
            Number::Int(_) | Number::Bool(_) => true,
        }
    }

    pub const fn type_name(self) -> &'static str {
        match self {
            Number::Int(_) => "int",
            Number::Float(_) => "float",
            Number::Bool(_) => "bool",
        }
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Number::Int(v) => write!(f, "{}", v),
            Number::Float(v) => write!(f, "{:?}", v),
            Number::Bool(v) => write!(f, "{}", v),
        }
    }
}

impl From<i64> for Number {
    fn from(v: i64) -> Self {
        Number::Int(v)
    }
}

impl From<i32> for Number {
    fn from(v: i32) -> Self {
        Number::Int(i64::from(v))
    }
}

impl From<f64> for Number {
    fn from(v: f64) -> Self {
        Number::Float(v)
    }
}

impl From<bool> for Number {
    fn from(v: bool) -> Self {
        Number::Bool(v)
    }
}

// ============================================================================
// Dynamic Boundary Value
// ============================================================================

/// Any value a caller may pass at the API boundary.
///
/// Only `Int`, `Float` and `Bool` pass the numeric type check. Everything else
/// is rejected by tag, including values that could be converted to a number.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Int(i64),
    Float(f64),
    Bool(bool),
    Text(String),
    List(Vec<Value>),
    Map(Vec<(String, Value)>),
    None,
    /// Complex number. Rejected even when `im == 0.0`.
    Complex { re: f64, im: f64 },
    /// Arbitrary-precision decimal. Rejected even though it is numeric.
    Decimal(Decimal),
    /// User-defined type, optionally convertible to float.
    Object {
        type_name: String,
        float_value: Option<f64>,
    },
}

impl Value {
    /// Returns the operand as a [`Number`] when its tag is an accepted numeric kind.
    #[inline]
    pub fn as_number(&self) -> Option<Number> {
        match self {
            Value::Int(v) => Some(Number::Int(*v)),
            Value::Float(v) => Some(Number::Float(*v)),
            Value::Bool(v) => Some(Number::Bool(*v)),
            _ => None,
        }
    }

    #[inline]
    pub fn is_numeric(&self) -> bool {
        self.as_number().is_some()
    }

    pub fn type_name(&self) -> &str {
        match self {
            Value::Int(_) => "int",
            Value::Float(_) => "float",
            Value::Bool(_) => "bool",
            Value::Text(_) => "str",
            Value::List(_) => "list",
            Value::Map(_) => "dict",
            Value::None => "none",
            Value::Complex { .. } => "complex",
            Value::Decimal(_) => "decimal",
            Value::Object { type_name, .. } => type_name.as_str(),
        }
    }

    /// Build a boundary value from parsed JSON.
    ///
    /// Integral numbers that fit in i64 become `Int`, all other numbers `Float`.
    #[cfg(feature = "serde")]
    pub fn from_json(json: &serde_json::Value) -> Self {
        match json {
            serde_json::Value::Null => Value::None,
            serde_json::Value::Bool(b) => Value::Bool(*b),
            serde_json::Value::Number(n) => match n.as_i64() {
                Some(i) => Value::Int(i),
                None => n.as_f64().map_or(Value::None, Value::Float),
            },
            serde_json::Value::String(s) => Value::Text(s.clone()),
            serde_json::Value::Array(items) => {
                Value::List(items.iter().map(Value::from_json).collect())
            },
            serde_json::Value::Object(map) => Value::Map(
                map.iter()
                    .map(|(k, v)| (k.clone(), Value::from_json(v)))
                    .collect(),
            ),
        }
    }
}

/// Type check for a binary operation.
///
/// Both operands are checked before any value is inspected, so a non-numeric
/// operand wins over every value-based error.
#[inline]
pub fn require_numeric(a: &Value, b: &Value) -> NumericResult<(Number, Number)> {
    match (a.as_number(), b.as_number()) {
        (Some(a), Some(b)) => Ok((a, b)),
        _ => Err(NumericError::TypeMismatch),
    }
}

impl From<Number> for Value {
    fn from(n: Number) -> Self {
        match n {
            Number::Int(v) => Value::Int(v),
            Number::Float(v) => Value::Float(v),
            Number::Bool(v) => Value::Bool(v),
        }
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Int(v)
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Value::Int(i64::from(v))
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Float(v)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::Text(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::Text(v)
    }
}

impl From<Decimal> for Value {
    fn from(v: Decimal) -> Self {
        Value::Decimal(v)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        v.map_or(Value::None, Into::into)
    }
}

// ============================================================================
// Tests
// ============================================================================
