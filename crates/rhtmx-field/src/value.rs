// File: src/value.rs
// Purpose: Field and attribute value types with loose comparison

use serde::{Deserialize, Serialize};
use std::fmt;

/// A field value as it arrives from configuration or submitted form data
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    #[default]
    Null,
    Bool(bool),
    Number(f64),
    String(String),
    Array(Vec<Value>),
}

impl Value {
    /// Convert value to boolean
    ///
    /// `"0"` counts as false alongside the empty string, matching how form
    /// values are usually read.
    pub fn to_bool(&self) -> bool {
        match self {
            Value::Bool(b) => *b,
            Value::Number(n) => *n != 0.0,
            Value::String(s) => !s.is_empty() && s != "0",
            Value::Array(arr) => !arr.is_empty(),
            Value::Null => false,
        }
    }

    /// Bool, number or string. `Null` and arrays are not scalars.
    pub fn is_scalar(&self) -> bool {
        matches!(self, Value::Bool(_) | Value::Number(_) | Value::String(_))
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    pub fn as_array(&self) -> Option<&[Value]> {
        match self {
            Value::Array(arr) => Some(arr),
            _ => None,
        }
    }

    /// Permissive equality across string and number representations.
    ///
    /// - numeric strings compare numerically with each other and with numbers
    /// - a number against a non-numeric string compares by display string
    /// - booleans and `Null` compare by truthiness
    /// - arrays compare element-wise
    pub fn loose_eq(&self, other: &Value) -> bool {
        match (self, other) {
            (Value::Null, Value::Null) => true,
            (Value::Bool(a), b) | (b, Value::Bool(a)) => *a == b.to_bool(),
            (Value::Null, v) | (v, Value::Null) => !v.to_bool() && !is_zero_string(v),
            (Value::Number(a), Value::Number(b)) => a == b,
            (Value::Number(n), Value::String(s)) | (Value::String(s), Value::Number(n)) => {
                match parse_numeric(s) {
                    Some(parsed) => parsed == *n,
                    None => Value::Number(*n).to_string() == *s,
                }
            }
            (Value::String(a), Value::String(b)) => match (parse_numeric(a), parse_numeric(b)) {
                (Some(x), Some(y)) => x == y,
                _ => a == b,
            },
            (Value::Array(a), Value::Array(b)) => {
                a.len() == b.len() && a.iter().zip(b).all(|(x, y)| x.loose_eq(y))
            }
            _ => false,
        }
    }
}

// `null == "0"` is false even though "0" is falsy
fn is_zero_string(value: &Value) -> bool {
    matches!(value, Value::String(s) if s == "0")
}

/// Parse a string that reads as a plain decimal number.
///
/// Surrounding whitespace is allowed. Words such as `inf` or `nan` that
/// `f64::from_str` would accept are rejected.
pub(crate) fn parse_numeric(s: &str) -> Option<f64> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        return None;
    }

    let valid_chars = trimmed
        .chars()
        .all(|c| c.is_ascii_digit() || matches!(c, '+' | '-' | '.' | 'e' | 'E'));
    if !valid_chars || !trimmed.chars().any(|c| c.is_ascii_digit()) {
        return None;
    }

    trimmed.parse::<f64>().ok()
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Bool(b) => write!(f, "{}", b),
            Value::Number(n) => {
                // Format number nicely (remove .0 for integers)
                if n.fract() == 0.0 && n.abs() < i64::MAX as f64 {
                    write!(f, "{}", *n as i64)
                } else {
                    write!(f, "{}", n)
                }
            }
            Value::String(s) => f.write_str(s),
            Value::Array(arr) => {
                let items: Vec<String> = arr.iter().map(|v| v.to_string()).collect();
                f.write_str(&items.join(","))
            }
            Value::Null => Ok(()),
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Number(n as f64)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Number(n as f64)
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(arr: Vec<T>) -> Self {
        Value::Array(arr.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(opt: Option<T>) -> Self {
        opt.map_or(Value::Null, Into::into)
    }
}
