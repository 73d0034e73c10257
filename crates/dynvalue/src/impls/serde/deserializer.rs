//! `serde::Deserializer` for an owned [`Value`].
use serde::de::{
    self,
    value::{MapDeserializer, SeqDeserializer, StringDeserializer},
    DeserializeOwned, DeserializeSeed, Deserializer, EnumAccess, IntoDeserializer, Unexpected,
    VariantAccess, Visitor,
};

use super::MappingError;
use crate::Value;

/// Reads a record from `value`.
///
/// Absent `Option` fields read as `None`; an absent required field or a field of the wrong
/// shape fails. `Binary` feeds both byte buffers and sequences of `u8`.
///
/// # Errors
///
/// Fails if `value` does not have the shape `T` expects.
pub fn from_value<T: DeserializeOwned>(value: Value) -> Result<T, MappingError> {
    T::deserialize(value)
}

impl Value {
    fn unexpected(&self) -> Unexpected<'_> {
        match self {
            Value::Null => Unexpected::Unit,
            Value::Bool(b) => Unexpected::Bool(*b),
            Value::Int(i) => Unexpected::Signed(*i),
            Value::Double(d) => Unexpected::Float(*d),
            Value::String(s) => Unexpected::Str(s),
            Value::Binary(bytes) => Unexpected::Bytes(bytes),
            Value::Array(_) => Unexpected::Seq,
            Value::Map(_) => Unexpected::Map,
        }
    }

    fn invalid_type(&self, expected: &dyn de::Expected) -> MappingError {
        de::Error::invalid_type(self.unexpected(), expected)
    }
}

impl<'de> IntoDeserializer<'de, MappingError> for Value {
    type Deserializer = Value;

    fn into_deserializer(self) -> Value {
        self
    }
}

impl<'de> Deserializer<'de> for Value {
    type Error = MappingError;

    fn deserialize_any<V: Visitor<'de>>(self, visitor: V) -> Result<V::Value, MappingError> {
        match self {
            Value::Null => visitor.visit_unit(),
            Value::Bool(b) => visitor.visit_bool(b),
            Value::Int(i) => visitor.visit_i64(i),
            Value::Double(d) => visitor.visit_f64(d),
            Value::String(s) => visitor.visit_string(s),
            Value::Binary(bytes) => visitor.visit_byte_buf(bytes),
            Value::Array(items) => SeqDeserializer::new(items.into_iter()).deserialize_any(visitor),
            Value::Map(map) => MapDeserializer::new(map.into_iter()).deserialize_any(visitor),
        }
    }

    fn deserialize_option<V: Visitor<'de>>(self, visitor: V) -> Result<V::Value, MappingError> {
        match self {
            Value::Null => visitor.visit_none(),
            other => visitor.visit_some(other),
        }
    }

    fn deserialize_seq<V: Visitor<'de>>(self, visitor: V) -> Result<V::Value, MappingError> {
        match self {
            Value::Binary(bytes) => SeqDeserializer::new(bytes.into_iter()).deserialize_any(visitor),
            other => other.deserialize_any(visitor),
        }
    }

    fn deserialize_newtype_struct<V: Visitor<'de>>(
        self,
        _name: &'static str,
        visitor: V,
    ) -> Result<V::Value, MappingError> {
        visitor.visit_newtype_struct(self)
    }

    fn deserialize_enum<V: Visitor<'de>>(
        self,
        _name: &'static str,
        _variants: &'static [&'static str],
        visitor: V,
    ) -> Result<V::Value, MappingError> {
        match self {
            Value::String(variant) => {
                let variant: StringDeserializer<MappingError> = variant.into_deserializer();
                visitor.visit_enum(variant)
            }
            Value::Map(map) if map.len() == 1 => {
                let mut entries = map.into_iter();
                match entries.next() {
                    Some((variant, value)) => visitor.visit_enum(EnumDeserializer { variant, value }),
                    None => Err(de::Error::invalid_length(0, &"a map with a single key")),
                }
            }
            other => Err(other.invalid_type(&"a string or a map with a single key")),
        }
    }

    serde::forward_to_deserialize_any! {
        bool i8 i16 i32 i64 i128 u8 u16 u32 u64 u128 f32 f64 char str string bytes byte_buf
        unit unit_struct tuple tuple_struct map struct identifier ignored_any
    }
}

/// An externally tagged variant: `{"Variant": payload}`.
struct EnumDeserializer {
    variant: String,
    value: Value,
}

impl<'de> EnumAccess<'de> for EnumDeserializer {
    type Error = MappingError;
    type Variant = Value;

    fn variant_seed<S: DeserializeSeed<'de>>(
        self,
        seed: S,
    ) -> Result<(S::Value, Value), MappingError> {
        let variant: StringDeserializer<MappingError> = self.variant.into_deserializer();
        Ok((seed.deserialize(variant)?, self.value))
    }
}

impl<'de> VariantAccess<'de> for Value {
    type Error = MappingError;

    fn unit_variant(self) -> Result<(), MappingError> {
        match self {
            Value::Null => Ok(()),
            other => Err(other.invalid_type(&"unit variant")),
        }
    }

    fn newtype_variant_seed<S: DeserializeSeed<'de>>(
        self,
        seed: S,
    ) -> Result<S::Value, MappingError> {
        seed.deserialize(self)
    }

    fn tuple_variant<V: Visitor<'de>>(
        self,
        _len: usize,
        visitor: V,
    ) -> Result<V::Value, MappingError> {
        match self {
            Value::Array(items) => SeqDeserializer::new(items.into_iter()).deserialize_any(visitor),
            other => Err(other.invalid_type(&"tuple variant")),
        }
    }

    fn struct_variant<V: Visitor<'de>>(
        self,
        _fields: &'static [&'static str],
        visitor: V,
    ) -> Result<V::Value, MappingError> {
        match self {
            Value::Map(map) => MapDeserializer::new(map.into_iter()).deserialize_any(visitor),
            other => Err(other.invalid_type(&"struct variant")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value;
    use serde::Deserialize;
    use test_case::test_case;

    #[derive(Debug, PartialEq, Deserialize)]
    enum Shape {
        Empty,
        Circle(f64),
        Segment(i64, i64),
        Rect { w: i64, h: i64 },
    }

    #[test_case(value!("Empty"), Shape::Empty; "unit variant")]
    #[test_case(value!({"Empty": null}), Shape::Empty; "unit variant with payload")]
    #[test_case(value!({"Circle": 0.5}), Shape::Circle(0.5); "newtype variant")]
    #[test_case(value!({"Segment": [1, 2]}), Shape::Segment(1, 2); "tuple variant")]
    #[test_case(value!({"Rect": {"w": 3, "h": 4}}), Shape::Rect { w: 3, h: 4 }; "struct variant")]
    fn enums(value: Value, expected: Shape) {
        assert_eq!(from_value::<Shape>(value).expect("Valid variant"), expected);
    }

    #[test_case(value!(1); "int")]
    #[test_case(value!({"Circle": 1.0, "Rect": {}}); "two keys")]
    #[test_case(value!({"Segment": 1}); "tuple payload not an array")]
    #[test_case(value!({"Unknown": null}); "unknown variant")]
    fn invalid_enums(value: Value) {
        assert!(from_value::<Shape>(value).is_err());
    }

    #[test]
    fn ints_feed_doubles_but_not_the_reverse() {
        assert_eq!(from_value::<f64>(Value::Int(2)), Ok(2.0));
        let error = from_value::<i64>(Value::Double(2.0)).expect_err("Floats are not integers");
        let message = error.to_string();
        assert!(message.starts_with("invalid type: floating point"));
        assert!(message.ends_with("expected i64"));
    }

    #[test]
    fn binary_feeds_byte_sequences() {
        assert_eq!(
            from_value::<Vec<u8>>(Value::binary(vec![1, 2])),
            Ok(vec![1, 2])
        );
        assert_eq!(
            from_value::<Vec<u8>>(value!([1, 2])),
            Ok(vec![1, 2])
        );
    }

    #[test]
    fn trailing_elements_fail() {
        assert!(from_value::<(i64,)>(value!([1, 2])).is_err());
    }

    #[test]
    fn options() {
        assert_eq!(from_value::<Option<i64>>(Value::Null), Ok(None));
        assert_eq!(from_value::<Option<i64>>(Value::Int(4)), Ok(Some(4)));
    }
}
