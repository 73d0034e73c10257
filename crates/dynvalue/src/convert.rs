//! Coercing accessors.
//!
//! With `converting == false` every accessor is the strict [`Value::get`] for its payload
//! type. With `converting == true` the following table applies, every `-` being an
//! [`Error::IncompatibleType`]:
//!
//! | target | bool          | int          | double        | string                     | binary        | array         | map          | null   |
//! |--------|---------------|--------------|---------------|----------------------------|---------------|---------------|--------------|--------|
//! | bool   | identity      | 0, 1 only    | `!= 0`        | "true"/"false", any case   | non-empty     | non-empty     | non-empty    | false  |
//! | int    | 1 / 0         | identity     | truncated     | integer literal            | -             | -             | -            | 0      |
//! | double | 1.0 / 0.0     | widened      | identity      | float literal              | -             | -             | -            | 0.0    |
//! | string | "true"/"false"| decimal      | decimal       | identity                   | -             | -             | -            | "null" |
//! | binary | 0xff / 0x00   | -            | -             | UTF-8 bytes                | identity      | -             | -            | empty  |
//! | array  | -             | -            | -             | -                          | -             | identity      | -            | empty  |
//! | map    | -             | -            | -             | -                          | -             | -             | identity     | empty  |
use crate::{display::format_double, Error, Map, Result, Value, ValueKind};

// Bounds of the `f64` range that truncates into `i64`: [-2^63, 2^63).
const I64_LOWER: f64 = -9_223_372_036_854_775_808.0;
const I64_UPPER: f64 = 9_223_372_036_854_775_808.0;

impl Value {
    /// # Errors
    ///
    /// [`Error::IncompatibleType`] if the value is not a `Bool` and cannot be coerced to one.
    pub fn as_bool(&self, converting: bool) -> Result<bool> {
        if !converting {
            return self.get();
        }
        match self {
            Value::Null => Ok(false),
            Value::Bool(b) => Ok(*b),
            Value::Int(0) => Ok(false),
            Value::Int(1) => Ok(true),
            Value::Double(d) => Ok(*d != 0.0),
            Value::String(s) if s.eq_ignore_ascii_case("true") => Ok(true),
            Value::String(s) if s.eq_ignore_ascii_case("false") => Ok(false),
            Value::Binary(bytes) => Ok(!bytes.is_empty()),
            Value::Array(items) => Ok(!items.is_empty()),
            Value::Map(map) => Ok(!map.is_empty()),
            other => Err(incompatible(ValueKind::Bool, other)),
        }
    }

    /// # Errors
    ///
    /// [`Error::IncompatibleType`] if the value is not an `Int` and cannot be coerced to one.
    /// Doubles that are not finite or fall outside the `i64` range are rejected.
    #[allow(clippy::cast_possible_truncation)]
    pub fn as_int(&self, converting: bool) -> Result<i64> {
        if !converting {
            return self.get();
        }
        match self {
            Value::Null => Ok(0),
            Value::Bool(b) => Ok(i64::from(*b)),
            Value::Int(i) => Ok(*i),
            Value::Double(d) => {
                let truncated = d.trunc();
                if (I64_LOWER..I64_UPPER).contains(&truncated) {
                    Ok(truncated as i64)
                } else {
                    Err(incompatible(ValueKind::Int, self))
                }
            }
            Value::String(s) => s
                .parse::<i64>()
                .map_err(|_| incompatible(ValueKind::Int, self)),
            other => Err(incompatible(ValueKind::Int, other)),
        }
    }

    /// # Errors
    ///
    /// [`Error::IncompatibleType`] if the value is not a `Double` and cannot be coerced to one.
    #[allow(clippy::cast_precision_loss)]
    pub fn as_double(&self, converting: bool) -> Result<f64> {
        if !converting {
            return self.get();
        }
        match self {
            Value::Null => Ok(0.0),
            Value::Bool(b) => Ok(f64::from(u8::from(*b))),
            Value::Int(i) => Ok(*i as f64),
            Value::Double(d) => Ok(*d),
            Value::String(s) => s
                .parse::<f64>()
                .map_err(|_| incompatible(ValueKind::Double, self)),
            other => Err(incompatible(ValueKind::Double, other)),
        }
    }

    /// # Errors
    ///
    /// [`Error::IncompatibleType`] if the value is not a `String` and cannot be coerced to one.
    pub fn as_string(&self, converting: bool) -> Result<String> {
        if !converting {
            return self.get();
        }
        match self {
            Value::Null => Ok("null".to_string()),
            Value::Bool(b) => Ok(b.to_string()),
            Value::Int(i) => Ok(itoa::Buffer::new().format(*i).to_string()),
            Value::Double(d) => Ok(format_double(*d)),
            Value::String(s) => Ok(s.clone()),
            other => Err(incompatible(ValueKind::String, other)),
        }
    }

    /// # Errors
    ///
    /// [`Error::IncompatibleType`] if the value is not a `Binary` and cannot be coerced to one.
    pub fn as_binary(&self, converting: bool) -> Result<Vec<u8>> {
        if !converting {
            return self.get();
        }
        match self {
            Value::Null => Ok(Vec::new()),
            Value::Bool(true) => Ok(vec![0xff]),
            Value::Bool(false) => Ok(vec![0x00]),
            Value::String(s) => Ok(s.as_bytes().to_vec()),
            Value::Binary(bytes) => Ok(bytes.clone()),
            other => Err(incompatible(ValueKind::Binary, other)),
        }
    }

    /// # Errors
    ///
    /// [`Error::IncompatibleType`] if the value is neither an `Array` nor, when converting,
    /// `Null`.
    pub fn as_array(&self, converting: bool) -> Result<Vec<Value>> {
        match self {
            Value::Null if converting => Ok(Vec::new()),
            _ => self.get(),
        }
    }

    /// # Errors
    ///
    /// [`Error::IncompatibleType`] if the value is neither a `Map` nor, when converting,
    /// `Null`.
    pub fn as_map(&self, converting: bool) -> Result<Map> {
        match self {
            Value::Null if converting => Ok(Map::new()),
            _ => self.get(),
        }
    }
}

fn incompatible(expected: ValueKind, value: &Value) -> Error {
    Error::incompatible(expected, Some(value.kind()))
}
