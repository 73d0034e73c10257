use dynvalue::{value, Error, Map, PathSegment, Value, ValueKind};
use test_case::test_case;

#[test_case(Value::Bool(true))]
#[test_case(Value::Int(-1))]
#[test_case(Value::Double(2.5))]
#[test_case(Value::String("s".into()))]
#[test_case(Value::binary(vec![1, 2]))]
#[test_case(value!([1]))]
#[test_case(value!({"k": "v"}))]
fn strict_get_only_accepts_the_constructing_type(value: Value) {
    let accepted = [
        value.get::<bool>().is_ok(),
        value.get::<i64>().is_ok(),
        value.get::<f64>().is_ok(),
        value.get::<String>().is_ok(),
        value.get::<Vec<u8>>().is_ok(),
        value.get::<Vec<Value>>().is_ok(),
        value.get::<Map>().is_ok(),
    ];
    assert_eq!(accepted.iter().filter(|ok| **ok).count(), 1);
}

#[test]
fn numeric_neighbours_are_rejected() {
    assert_eq!(
        Value::Double(1.0).get::<i64>(),
        Err(Error::IncompatibleType {
            expected: ValueKind::Int,
            found: Some(ValueKind::Double),
        })
    );
    assert!(Value::Int(1).get::<f64>().is_err());
}

#[test]
fn coercion_examples() {
    assert_eq!(Value::Double(1.9).as_int(true), Ok(1));
    assert_eq!(Value::Bool(true).as_int(true), Ok(1));
    assert!(Value::String("abc".into()).as_int(true).is_err());
    assert_eq!(Value::Null.as_int(true), Ok(0));
    assert!(Value::Int(2).as_bool(true).is_err());
    assert_eq!(Value::String("TRUE".into()).as_bool(true), Ok(true));
}

#[test]
fn array_subscript() {
    let mut value = value!([1, 2, 3]);
    value.set_element(1, None);
    assert_eq!(value, value!([1, null, 3]));
    value.set_element(3, Some(Value::Int(4)));
    assert_eq!(value, value!([1, null, 3]));
}

#[test]
fn map_subscript() {
    let mut value = value!({"a": 1, "b": 2});
    value.set_member("a", None);
    assert_eq!(value, value!({"b": 2}));
    value.set_member("c", Some(Value::Int(3)));
    value.set_member("b", Some(Value::Int(20)));
    assert_eq!(value, value!({"b": 20, "c": 3}));
}

#[test]
fn equality() {
    assert_ne!(Value::Int(1), Value::Double(1.0));
    assert_eq!(value!([true]), Value::Array(vec![Value::Bool(true)]));
    assert_eq!(value!({"a": 1, "b": 2}), value!({"b": 2, "a": 1}));
}

#[test]
fn inference_of_optionals() {
    assert_eq!(Value::infer(Option::<i64>::None), Value::Null);
    assert_eq!(Value::infer(Some(5)), Value::Int(5));
}

#[test]
fn keyed_reads() {
    let value = value!({"bool": false, "double": 1.5});
    assert_eq!(value.member("bool"), Some(&Value::Bool(false)));
    assert_eq!(value.member("missing"), None);
    assert_eq!(value.get_key::<f64>("double"), Ok(1.5));
}

#[test]
fn nested_edit_through_path() {
    let mut value = value!({"servers": [{"port": 80}, {"port": 443}]});
    let port = [PathSegment::from("servers"), 1.into(), "port".into()];
    assert_eq!(value.lookup(&port), Some(&Value::Int(443)));
    value.replace(&port, Some(Value::Int(8443)));
    assert_eq!(value["servers"][1]["port"].as_int(false), Ok(8443));
    assert_eq!(value["servers"][0]["port"], Value::Int(80));
}

#[test]
fn description_of_a_document() {
    let value = value!({"list": [1, 2.0, "x", null]});
    assert_eq!(
        value.description(),
        "{\n    \"list\": [\n        1,\n        2.0,\n        \"x\",\n        null\n    ]\n}"
    );
}

#[test]
fn values_cross_threads() {
    let value = value!({"shared": [1, 2, 3]});
    let copy = value.clone();
    let handle = std::thread::spawn(move || copy["shared"].get::<Vec<Value>>().map(|v| v.len()));
    assert_eq!(handle.join().expect("Thread panicked"), Ok(3));
    assert_eq!(value["shared"][0], Value::Int(1));
}
