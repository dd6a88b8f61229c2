// File: src/equiv.rs
// Purpose: Set-aware value comparison for checked/selected state

use crate::value::Value;

pub const CHECKED: &str = r#"checked="checked""#;
pub const SELECTED: &str = r#"selected="selected""#;

/// Are two values equivalent?
///
/// When one side is an array and the other a scalar, the scalar must be a
/// member of the array. Otherwise the two are compared with
/// [`Value::loose_eq`].
pub fn equiv(a: &Value, b: &Value) -> bool {
    if let (Some(set), true) = (a.as_array(), b.is_scalar()) {
        return contains(set, b);
    }

    if let (Some(set), true) = (b.as_array(), a.is_scalar()) {
        return contains(set, a);
    }

    a.loose_eq(b)
}

/// `checked="checked"` when `a` and `b` are equivalent, empty otherwise
pub fn checked(a: &Value, b: &Value) -> &'static str {
    if equiv(a, b) { CHECKED } else { "" }
}

/// `selected="selected"` when `a` and `b` are equivalent, empty otherwise
pub fn selected(a: &Value, b: &Value) -> &'static str {
    if equiv(a, b) { SELECTED } else { "" }
}

/// View a value as a set: `Null` is empty, a scalar is a one-element set
pub fn as_set(value: &Value) -> Vec<Value> {
    match value {
        Value::Null => Vec::new(),
        Value::Array(arr) => arr.clone(),
        scalar => vec![scalar.clone()],
    }
}

fn contains(set: &[Value], needle: &Value) -> bool {
    set.iter().any(|item| item.loose_eq(needle))
}
