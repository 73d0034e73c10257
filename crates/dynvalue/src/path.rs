use core::ops::Index;
use std::borrow::Cow;

use crate::Value;

static NULL: Value = Value::Null;

impl Value {
    /// Element at `index` if `self` is an array and the index is in range.
    #[must_use]
    pub fn element(&self, index: usize) -> Option<&Value> {
        self.array_value()?.get(index)
    }

    pub fn element_mut(&mut self, index: usize) -> Option<&mut Value> {
        self.array_value_mut()?.get_mut(index)
    }

    /// Replaces the element at `index`; `None` stores `Null`.
    ///
    /// The length of the array never changes. Nothing happens if `self` is not an array or
    /// the index is out of range.
    pub fn set_element(&mut self, index: usize, value: Option<Value>) {
        if let Some(slot) = self.element_mut(index) {
            *slot = value.unwrap_or_default();
        }
    }

    /// Entry under `key` if `self` is a map containing it.
    #[must_use]
    pub fn member(&self, key: &str) -> Option<&Value> {
        self.map_value()?.get(key)
    }

    pub fn member_mut(&mut self, key: &str) -> Option<&mut Value> {
        self.map_value_mut()?.get_mut(key)
    }

    /// Inserts or overwrites the entry under `key`; `None` removes it.
    ///
    /// Nothing happens if `self` is not a map.
    pub fn set_member(&mut self, key: impl Into<String>, value: Option<Value>) {
        let Some(map) = self.map_value_mut() else {
            return;
        };
        let key = key.into();
        match value {
            Some(value) => {
                map.insert(key, value);
            }
            None => {
                map.remove(&key);
            }
        }
    }

    /// Follows `path` from `self`, one segment per nesting level.
    #[must_use]
    pub fn lookup<'a, 'p>(&'a self, path: &[PathSegment<'p>]) -> Option<&'a Value> {
        path.iter().try_fold(self, |current, segment| match segment {
            PathSegment::Key(key) => current.member(key),
            PathSegment::Index(index) => current.element(*index),
        })
    }

    pub fn lookup_mut<'a, 'p>(&'a mut self, path: &[PathSegment<'p>]) -> Option<&'a mut Value> {
        path.iter().try_fold(self, |current, segment| match segment {
            PathSegment::Key(key) => current.member_mut(key),
            PathSegment::Index(index) => current.element_mut(*index),
        })
    }

    /// Assigns `value` at the end of `path`.
    ///
    /// The final segment follows [`Value::set_element`] or [`Value::set_member`]. Nothing
    /// happens if an intermediate segment does not resolve. An empty path replaces `self`,
    /// with `None` storing `Null`.
    pub fn replace(&mut self, path: &[PathSegment<'_>], value: Option<Value>) {
        let Some((last, parents)) = path.split_last() else {
            *self = value.unwrap_or_default();
            return;
        };
        let Some(parent) = self.lookup_mut(parents) else {
            return;
        };
        match last {
            PathSegment::Key(key) => parent.set_member(&**key, value),
            PathSegment::Index(index) => parent.set_element(*index, value),
        }
    }
}

/// Reads the element at `index`, or `Null` when there is none.
impl Index<usize> for Value {
    type Output = Value;

    fn index(&self, index: usize) -> &Value {
        self.element(index).unwrap_or(&NULL)
    }
}

/// Reads the entry under `key`, or `Null` when there is none.
impl Index<&str> for Value {
    type Output = Value;

    fn index(&self, key: &str) -> &Value {
        self.member(key).unwrap_or(&NULL)
    }
}

/// A single step of a path into nested values.
#[derive(Debug, PartialEq, Eq, Clone)]
pub enum PathSegment<'a> {
    /// A key of a map.
    Key(Cow<'a, str>),
    /// A position in an array.
    Index(usize),
}

impl<'a> From<&'a str> for PathSegment<'a> {
    fn from(value: &'a str) -> Self {
        PathSegment::Key(Cow::Borrowed(value))
    }
}

impl From<String> for PathSegment<'_> {
    fn from(value: String) -> Self {
        PathSegment::Key(Cow::Owned(value))
    }
}

impl<'a> From<Cow<'a, str>> for PathSegment<'a> {
    fn from(value: Cow<'a, str>) -> Self {
        PathSegment::Key(value)
    }
}

impl From<usize> for PathSegment<'_> {
    fn from(value: usize) -> Self {
        PathSegment::Index(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Map;
    use test_case::test_case;

    fn array() -> Value {
        Value::Array(vec![Value::Int(0), Value::Int(1), Value::Int(2)])
    }

    fn document() -> Value {
        let mut inner = Map::new();
        inner.insert("list".to_string(), array());
        let mut outer = Map::new();
        outer.insert("inner".to_string(), Value::Map(inner));
        outer.insert("flag".to_string(), Value::Bool(false));
        Value::Map(outer)
    }

    #[test_case(0, Some(Value::Int(0)); "first")]
    #[test_case(2, Some(Value::Int(2)); "last")]
    #[test_case(3, None; "past the end")]
    fn element(index: usize, expected: Option<Value>) {
        assert_eq!(array().element(index), expected.as_ref());
    }

    #[test]
    fn element_of_non_array() {
        assert_eq!(Value::Null.element(0), None);
        assert_eq!(document().element(0), None);
    }

    #[test]
    fn set_element_in_range() {
        let mut value = array();
        value.set_element(1, Some(Value::String("one".into())));
        assert_eq!(value[1], Value::String("one".into()));
        value.set_element(0, None);
        assert_eq!(
            value,
            Value::Array(vec![
                Value::Null,
                Value::String("one".into()),
                Value::Int(2)
            ])
        );
    }

    #[test_case(3; "one past the end")]
    #[test_case(100; "far past the end")]
    fn set_element_out_of_range_is_noop(index: usize) {
        let mut value = array();
        value.set_element(index, Some(Value::Bool(true)));
        value.set_element(index, None);
        assert_eq!(value, array());
    }

    #[test]
    fn set_element_on_non_array_is_noop() {
        let mut value = Value::Int(5);
        value.set_element(0, Some(Value::Null));
        assert_eq!(value, Value::Int(5));
    }

    #[test]
    fn set_member_inserts_overwrites_and_removes() {
        let mut value = Value::Map(Map::new());
        value.set_member("a", Some(Value::Int(1)));
        value.set_member("b", Some(Value::Int(2)));
        value.set_member("a", Some(Value::Int(10)));
        assert_eq!(value.member("a"), Some(&Value::Int(10)));
        assert_eq!(value.map_value().map(|map| map.len()), Some(2));

        value.set_member("a", None);
        assert_eq!(value.member("a"), None);
        assert_eq!(value.map_value().map(|map| map.len()), Some(1));

        value.set_member("missing", None);
        assert_eq!(value.map_value().map(|map| map.len()), Some(1));
    }

    #[test]
    fn set_member_on_non_map_is_noop() {
        let mut value = array();
        value.set_member("a", Some(Value::Int(1)));
        assert_eq!(value, array());
    }

    #[test]
    fn copies_are_not_affected_by_mutation() {
        let original = document();
        let mut copy = original.clone();
        copy.set_member("flag", Some(Value::Bool(true)));
        assert_eq!(original["flag"], Value::Bool(false));
        assert_eq!(copy["flag"], Value::Bool(true));
    }

    #[test]
    fn index_sugar_falls_back_to_null() {
        let value = document();
        assert_eq!(value["flag"], Value::Bool(false));
        assert_eq!(value["missing"], Value::Null);
        assert_eq!(value["inner"]["list"][2], Value::Int(2));
        assert_eq!(value["inner"]["list"][9], Value::Null);
        assert_eq!(value[0], Value::Null);
    }

    #[test]
    fn lookup() {
        let value = document();
        let path = [PathSegment::from("inner"), "list".into(), 1.into()];
        assert_eq!(value.lookup(&path), Some(&Value::Int(1)));
        assert_eq!(value.lookup(&[]), Some(&value));
        assert_eq!(value.lookup(&[PathSegment::from("flag"), 0.into()]), None);
        assert_eq!(value.lookup(&[PathSegment::from("nope")]), None);
    }

    #[test]
    fn lookup_mut() {
        let mut value = document();
        if let Some(flag) = value.lookup_mut(&[PathSegment::from("flag")]) {
            *flag = Value::Bool(true);
        }
        assert_eq!(value["flag"], Value::Bool(true));
    }

    #[test]
    fn replace_follows_container_semantics() {
        let mut value = document();
        let list = [PathSegment::from("inner"), "list".into()];

        value.replace(&[list[0].clone(), list[1].clone(), 0.into()], None);
        assert_eq!(value["inner"]["list"][0], Value::Null);
        assert_eq!(value["inner"]["list"].array_value().map(<[Value]>::len), Some(3));

        value.replace(&list, None);
        assert_eq!(value["inner"].member("list"), None);

        value.replace(
            &[PathSegment::from("absent"), "child".into()],
            Some(Value::Int(1)),
        );
        assert_eq!(value.member("absent"), None);
    }

    #[test]
    fn replace_with_empty_path() {
        let mut value = document();
        value.replace(&[], Some(Value::Int(1)));
        assert_eq!(value, Value::Int(1));
        value.replace(&[], None);
        assert_eq!(value, Value::Null);
    }
}
