use std::{
    borrow::Cow,
    collections::{BTreeMap, HashMap},
    hash::BuildHasher,
};

use ahash::AHashMap;

use crate::{Map, Value};

macro_rules! from_integer {
    ($($ty:ident)*) => {
        $(
            impl From<$ty> for Value {
                fn from(value: $ty) -> Self {
                    Value::Int(i64::from(value))
                }
            }
        )*
    };
}

from_integer! {
    i8 i16 i32 i64
    u8 u16 u32
}

macro_rules! from_wide_unsigned {
    ($($ty:ident)*) => {
        $(
            impl From<$ty> for Value {
                /// Values past `i64::MAX` only fit the `Double` variant.
                #[allow(clippy::cast_precision_loss)]
                fn from(value: $ty) -> Self {
                    i64::try_from(value).map_or(Value::Double(value as f64), Value::Int)
                }
            }
        )*
    };
}

from_wide_unsigned! { u64 usize }

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl From<f32> for Value {
    fn from(value: f32) -> Self {
        Value::Double(f64::from(value))
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Double(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::String(value.to_owned())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::String(value)
    }
}

impl From<Cow<'_, str>> for Value {
    fn from(value: Cow<'_, str>) -> Self {
        Value::String(value.into_owned())
    }
}

impl From<char> for Value {
    fn from(value: char) -> Self {
        Value::String(value.to_string())
    }
}

impl From<()> for Value {
    fn from((): ()) -> Self {
        Value::Null
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Value::Null, Into::into)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(value: Vec<T>) -> Self {
        Value::Array(value.into_iter().map(Into::into).collect())
    }
}

impl<T: Clone + Into<Value>> From<&[T]> for Value {
    fn from(value: &[T]) -> Self {
        Value::Array(value.iter().cloned().map(Into::into).collect())
    }
}

impl<K: Into<String>, V: Into<Value>, S: BuildHasher> From<HashMap<K, V, S>> for Value {
    fn from(value: HashMap<K, V, S>) -> Self {
        collect_map(value)
    }
}

impl<K: Into<String>, V: Into<Value>> From<AHashMap<K, V>> for Value {
    fn from(value: AHashMap<K, V>) -> Self {
        collect_map(value)
    }
}

impl<K: Into<String>, V: Into<Value>> From<BTreeMap<K, V>> for Value {
    fn from(value: BTreeMap<K, V>) -> Self {
        collect_map(value)
    }
}

impl<T: Into<Value>> FromIterator<T> for Value {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Value::Array(iter.into_iter().map(Into::into).collect())
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Value {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        collect_map(iter)
    }
}

fn collect_map<K, V>(entries: impl IntoIterator<Item = (K, V)>) -> Value
where
    K: Into<String>,
    V: Into<Value>,
{
    Value::Map(
        entries
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect::<Map>(),
    )
}

impl Value {
    /// Converts any supported native value, nested collections and options included.
    ///
    /// `None` becomes `Null` and `Some` converts the wrapped value.
    #[must_use]
    pub fn infer(value: impl Into<Value>) -> Value {
        value.into()
    }

    /// Raw bytes. `Vec<u8>` converted through `From` is an array of integers instead.
    #[must_use]
    pub fn binary(bytes: impl Into<Vec<u8>>) -> Value {
        Value::Binary(bytes.into())
    }

    /// Concatenates segments into a single string value.
    ///
    /// String segments contribute their contents, every other segment its canonical text
    /// form.
    #[must_use]
    pub fn interpolate<I>(segments: I) -> Value
    where
        I: IntoIterator,
        I::Item: Into<Value>,
    {
        let mut out = String::new();
        for segment in segments {
            match segment.into() {
                Value::String(s) => out.push_str(&s),
                other => out.push_str(&other.description()),
            }
        }
        Value::String(out)
    }
}
