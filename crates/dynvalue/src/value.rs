use ahash::AHashMap;

use crate::ValueKind;

/// Keyed storage of a [`Value::Map`]. Iteration order is unspecified.
pub type Map = AHashMap<String, Value>;

/// A dynamically-typed, JSON-like value.
///
/// The variant set is closed. Equality is structural and variant-sensitive: `Int(1)` and
/// `Double(1.0)` are never equal, and floating payloads keep IEEE-754 semantics, so a
/// `Double(f64::NAN)` is not equal to itself.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Value {
    #[default]
    Null,
    Bool(bool),
    Int(i64),
    Double(f64),
    String(String),
    Binary(Vec<u8>),
    Array(Vec<Value>),
    Map(Map),
}

const _: () = {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Value>();
};

impl Value {
    /// Discriminant of the active variant.
    #[must_use]
    pub const fn kind(&self) -> ValueKind {
        match self {
            Value::Null => ValueKind::Null,
            Value::Bool(_) => ValueKind::Bool,
            Value::Int(_) => ValueKind::Int,
            Value::Double(_) => ValueKind::Double,
            Value::String(_) => ValueKind::String,
            Value::Binary(_) => ValueKind::Binary,
            Value::Array(_) => ValueKind::Array,
            Value::Map(_) => ValueKind::Map,
        }
    }

    #[inline]
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    #[inline]
    #[must_use]
    pub const fn is_bool(&self) -> bool {
        matches!(self, Value::Bool(_))
    }

    #[inline]
    #[must_use]
    pub const fn is_int(&self) -> bool {
        matches!(self, Value::Int(_))
    }

    #[inline]
    #[must_use]
    pub const fn is_double(&self) -> bool {
        matches!(self, Value::Double(_))
    }

    #[inline]
    #[must_use]
    pub const fn is_string(&self) -> bool {
        matches!(self, Value::String(_))
    }

    #[inline]
    #[must_use]
    pub const fn is_binary(&self) -> bool {
        matches!(self, Value::Binary(_))
    }

    #[inline]
    #[must_use]
    pub const fn is_array(&self) -> bool {
        matches!(self, Value::Array(_))
    }

    #[inline]
    #[must_use]
    pub const fn is_map(&self) -> bool {
        matches!(self, Value::Map(_))
    }

    /// Payload of a `Bool`, `None` for every other variant.
    #[must_use]
    pub const fn bool_value(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    #[must_use]
    pub const fn int_value(&self) -> Option<i64> {
        match self {
            Value::Int(i) => Some(*i),
            _ => None,
        }
    }

    #[must_use]
    pub const fn double_value(&self) -> Option<f64> {
        match self {
            Value::Double(d) => Some(*d),
            _ => None,
        }
    }

    #[must_use]
    pub fn string_value(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    #[must_use]
    pub fn binary_value(&self) -> Option<&[u8]> {
        match self {
            Value::Binary(bytes) => Some(bytes),
            _ => None,
        }
    }

    #[must_use]
    pub fn array_value(&self) -> Option<&[Value]> {
        match self {
            Value::Array(items) => Some(items),
            _ => None,
        }
    }

    #[must_use]
    pub fn map_value(&self) -> Option<&Map> {
        match self {
            Value::Map(map) => Some(map),
            _ => None,
        }
    }

    /// Mutable access to the elements of an `Array`.
    pub fn array_value_mut(&mut self) -> Option<&mut Vec<Value>> {
        match self {
            Value::Array(items) => Some(items),
            _ => None,
        }
    }

    /// Mutable access to the entries of a `Map`.
    pub fn map_value_mut(&mut self) -> Option<&mut Map> {
        match self {
            Value::Map(map) => Some(map),
            _ => None,
        }
    }

    /// Replaces `self` with `Null` and returns the previous value.
    pub fn take(&mut self) -> Value {
        std::mem::take(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    fn sample_map() -> Map {
        let mut map = Map::new();
        map.insert("a".to_string(), Value::Int(1));
        map
    }

    #[test_case(Value::Null, ValueKind::Null)]
    #[test_case(Value::Bool(true), ValueKind::Bool)]
    #[test_case(Value::Int(7), ValueKind::Int)]
    #[test_case(Value::Double(0.5), ValueKind::Double)]
    #[test_case(Value::String("s".into()), ValueKind::String)]
    #[test_case(Value::Binary(vec![1, 2]), ValueKind::Binary)]
    #[test_case(Value::Array(vec![Value::Null]), ValueKind::Array)]
    #[test_case(Value::Map(sample_map()), ValueKind::Map)]
    fn exactly_one_predicate_holds(value: Value, kind: ValueKind) {
        let predicates = [
            (ValueKind::Null, value.is_null()),
            (ValueKind::Bool, value.is_bool()),
            (ValueKind::Int, value.is_int()),
            (ValueKind::Double, value.is_double()),
            (ValueKind::String, value.is_string()),
            (ValueKind::Binary, value.is_binary()),
            (ValueKind::Array, value.is_array()),
            (ValueKind::Map, value.is_map()),
        ];
        for (candidate, holds) in predicates {
            assert_eq!(holds, candidate == kind, "{candidate} predicate on {kind}");
        }
        assert_eq!(value.kind(), kind);
    }

    #[test_case(Value::Null, ValueKind::Null)]
    #[test_case(Value::Bool(false), ValueKind::Bool)]
    #[test_case(Value::Int(-3), ValueKind::Int)]
    #[test_case(Value::Double(2.5), ValueKind::Double)]
    #[test_case(Value::String("text".into()), ValueKind::String)]
    #[test_case(Value::Binary(vec![0xde, 0xad]), ValueKind::Binary)]
    #[test_case(Value::Array(vec![]), ValueKind::Array)]
    #[test_case(Value::Map(Map::new()), ValueKind::Map)]
    fn raw_extraction_matches_variant(value: Value, kind: ValueKind) {
        assert_eq!(value.bool_value().is_some(), kind == ValueKind::Bool);
        assert_eq!(value.int_value().is_some(), kind == ValueKind::Int);
        assert_eq!(value.double_value().is_some(), kind == ValueKind::Double);
        assert_eq!(value.string_value().is_some(), kind == ValueKind::String);
        assert_eq!(value.binary_value().is_some(), kind == ValueKind::Binary);
        assert_eq!(value.array_value().is_some(), kind == ValueKind::Array);
        assert_eq!(value.map_value().is_some(), kind == ValueKind::Map);
    }

    #[test]
    fn raw_extraction_payloads() {
        assert_eq!(Value::Bool(false).bool_value(), Some(false));
        assert_eq!(Value::Int(-3).int_value(), Some(-3));
        assert_eq!(Value::Double(2.5).double_value(), Some(2.5));
        assert_eq!(Value::String("text".into()).string_value(), Some("text"));
        assert_eq!(
            Value::Binary(vec![0xde, 0xad]).binary_value(),
            Some(&[0xde, 0xad][..])
        );
        assert_eq!(
            Value::Array(vec![Value::Null]).array_value(),
            Some(&[Value::Null][..])
        );
        assert_eq!(Value::Map(sample_map()).map_value(), Some(&sample_map()));
    }

    #[test_case(Value::Int(1), Value::Double(1.0); "int vs double")]
    #[test_case(Value::Int(0), Value::Bool(false); "int vs bool")]
    #[test_case(Value::String("1".into()), Value::Int(1); "string vs int")]
    #[test_case(Value::String("ab".into()), Value::Binary(b"ab".to_vec()); "string vs binary")]
    #[test_case(Value::Array(vec![]), Value::Map(Map::new()); "empty containers")]
    #[test_case(Value::Null, Value::Array(vec![]); "null vs empty array")]
    fn cross_variant_never_equal(left: Value, right: Value) {
        assert_ne!(left, right);
        assert_ne!(right, left);
    }

    #[test]
    fn nan_is_not_equal_to_itself() {
        let nan = Value::Double(f64::NAN);
        assert_ne!(nan, nan.clone());
    }

    #[test]
    fn map_equality_ignores_insertion_order() {
        let mut first = Map::new();
        first.insert("a".to_string(), Value::Int(1));
        first.insert("b".to_string(), Value::Int(2));
        let mut second = Map::new();
        second.insert("b".to_string(), Value::Int(2));
        second.insert("a".to_string(), Value::Int(1));
        assert_eq!(Value::Map(first), Value::Map(second));
    }

    #[test]
    fn clones_are_independent() {
        let original = Value::Array(vec![Value::Int(1)]);
        let mut copy = original.clone();
        if let Some(items) = copy.array_value_mut() {
            items.push(Value::Int(2));
        }
        assert_eq!(original, Value::Array(vec![Value::Int(1)]));
        assert_eq!(copy, Value::Array(vec![Value::Int(1), Value::Int(2)]));
    }

    #[test]
    fn take_leaves_null() {
        let mut value = Value::String("x".into());
        assert_eq!(value.take(), Value::String("x".into()));
        assert!(value.is_null());
    }
}
