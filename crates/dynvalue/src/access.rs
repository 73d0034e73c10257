use crate::{Error, Map, Result, Value, ValueKind};

/// A native type that is the exact payload of one [`Value`] variant.
///
/// Extraction is strict: no coercion is applied, so `i64` is only produced from `Int` and
/// `f64` only from `Double`. Arrays are retrieved as `Vec<Value>`; elements are never
/// converted one by one into another type.
pub trait FromValue: Sized {
    /// The variant this type is the payload of.
    const KIND: ValueKind;

    /// Returns the payload if `value` is of kind [`FromValue::KIND`].
    fn from_value(value: &Value) -> Option<Self>;
}

impl FromValue for bool {
    const KIND: ValueKind = ValueKind::Bool;

    fn from_value(value: &Value) -> Option<Self> {
        value.bool_value()
    }
}

impl FromValue for i64 {
    const KIND: ValueKind = ValueKind::Int;

    fn from_value(value: &Value) -> Option<Self> {
        value.int_value()
    }
}

impl FromValue for f64 {
    const KIND: ValueKind = ValueKind::Double;

    fn from_value(value: &Value) -> Option<Self> {
        value.double_value()
    }
}

impl FromValue for String {
    const KIND: ValueKind = ValueKind::String;

    fn from_value(value: &Value) -> Option<Self> {
        value.string_value().map(str::to_owned)
    }
}

impl FromValue for Vec<u8> {
    const KIND: ValueKind = ValueKind::Binary;

    fn from_value(value: &Value) -> Option<Self> {
        value.binary_value().map(<[u8]>::to_vec)
    }
}

impl FromValue for Vec<Value> {
    const KIND: ValueKind = ValueKind::Array;

    fn from_value(value: &Value) -> Option<Self> {
        value.array_value().map(<[Value]>::to_vec)
    }
}

impl FromValue for Map {
    const KIND: ValueKind = ValueKind::Map;

    fn from_value(value: &Value) -> Option<Self> {
        value.map_value().cloned()
    }
}

impl Value {
    /// Extracts the payload as `T` without coercion.
    ///
    /// # Errors
    ///
    /// [`Error::IncompatibleType`] if the active variant is not the one `T` belongs to.
    pub fn get<T: FromValue>(&self) -> Result<T> {
        T::from_value(self).ok_or_else(|| Error::incompatible(T::KIND, Some(self.kind())))
    }

    /// Like [`Value::get`], with the failure turned into `None`.
    #[must_use]
    pub fn get_opt<T: FromValue>(&self) -> Option<T> {
        T::from_value(self)
    }

    /// Strict extraction of the element at `index` of an array.
    ///
    /// # Errors
    ///
    /// [`Error::IncompatibleType`] if `self` is not an array, the index is out of range, or
    /// the element is not a `T`.
    pub fn get_at<T: FromValue>(&self, index: usize) -> Result<T> {
        match self {
            Value::Array(items) => items
                .get(index)
                .ok_or_else(|| Error::incompatible(T::KIND, None))?
                .get(),
            other => Err(Error::incompatible(ValueKind::Array, Some(other.kind()))),
        }
    }

    /// Strict extraction of the entry under `key` of a map.
    ///
    /// # Errors
    ///
    /// [`Error::IncompatibleType`] if `self` is not a map, the key is absent, or the entry
    /// is not a `T`.
    pub fn get_key<T: FromValue>(&self, key: &str) -> Result<T> {
        match self {
            Value::Map(map) => map
                .get(key)
                .ok_or_else(|| Error::incompatible(T::KIND, None))?
                .get(),
            other => Err(Error::incompatible(ValueKind::Map, Some(other.kind()))),
        }
    }

    #[must_use]
    pub fn get_at_opt<T: FromValue>(&self, index: usize) -> Option<T> {
        self.get_at(index).ok()
    }

    #[must_use]
    pub fn get_key_opt<T: FromValue>(&self, key: &str) -> Option<T> {
        self.get_key(key).ok()
    }
}
