//! Bridge to `serde_json::Value`.
use serde_json::Number;

use crate::Value;

impl From<serde_json::Value> for Value {
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Bool(b),
            serde_json::Value::Number(num) => from_number(&num),
            serde_json::Value::String(s) => Value::String(s),
            serde_json::Value::Array(items) => {
                Value::Array(items.into_iter().map(Value::from).collect())
            }
            serde_json::Value::Object(map) => Value::Map(
                map.into_iter()
                    .map(|(k, v)| (k, Value::from(v)))
                    .collect(),
            ),
        }
    }
}

fn from_number(num: &Number) -> Value {
    if let Some(i) = num.as_i64() {
        Value::Int(i)
    } else if let Some(u) = num.as_u64() {
        Value::from(u)
    } else {
        // Every non-integer `Number` has an `f64` representation
        Value::Double(num.as_f64().unwrap_or_default())
    }
}

impl From<Value> for serde_json::Value {
    fn from(value: Value) -> Self {
        match value {
            Value::Null => serde_json::Value::Null,
            Value::Bool(b) => serde_json::Value::Bool(b),
            Value::Int(i) => serde_json::Value::Number(i.into()),
            Value::Double(d) => {
                Number::from_f64(d).map_or(serde_json::Value::Null, serde_json::Value::Number)
            }
            Value::String(s) => serde_json::Value::String(s),
            Value::Binary(bytes) => serde_json::Value::Array(
                bytes
                    .into_iter()
                    .map(|byte| serde_json::Value::Number(byte.into()))
                    .collect(),
            ),
            Value::Array(items) => {
                serde_json::Value::Array(items.into_iter().map(serde_json::Value::from).collect())
            }
            Value::Map(map) => serde_json::Value::Object(
                map.into_iter()
                    .map(|(k, v)| (k, serde_json::Value::from(v)))
                    .collect(),
            ),
        }
    }
}

impl PartialEq<serde_json::Value> for Value {
    fn eq(&self, other: &serde_json::Value) -> bool {
        eq(other, self)
    }
}

impl PartialEq<Value> for serde_json::Value {
    fn eq(&self, other: &Value) -> bool {
        eq(self, other)
    }
}

/// Variant-sensitive comparison: a JSON integer only equals `Int`, a JSON float only `Double`.
fn eq(lhs: &serde_json::Value, rhs: &Value) -> bool {
    match (lhs, rhs) {
        (serde_json::Value::Null, Value::Null) => true,
        (serde_json::Value::Bool(l), Value::Bool(r)) => l == r,
        (serde_json::Value::Number(l), Value::Int(r)) => l.as_i64() == Some(*r),
        (serde_json::Value::Number(l), Value::Double(r)) => {
            l.is_f64() && l.as_f64() == Some(*r)
        }
        (serde_json::Value::String(l), Value::String(r)) => l == r,
        (serde_json::Value::Array(l), Value::Array(r)) => {
            l.len() == r.len() && l.iter().zip(r.iter()).all(|(l, r)| eq(l, r))
        }
        (serde_json::Value::Object(l), Value::Map(r)) => {
            l.len() == r.len()
                && l.iter()
                    .all(|(key, lv)| r.get(key.as_str()).is_some_and(|rv| eq(lv, rv)))
        }
        _ => false,
    }
}
