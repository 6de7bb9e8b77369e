//! Converting whole holders between representations.

use dataops::{DataHolder, NestedKeyMap, Object, json::JsonData};

use crate::helpers::*;

#[test]
fn test_nested_to_json_and_back() {
    let source = NestedKeyMap::from_raw(sample_objects().as_map().unwrap().clone());
    let json = source.convert_to(JsonData::new()).unwrap();

    assert_eq!(json.get_bool("flag").unwrap(), Some(true));
    assert_eq!(json.get_long("long").unwrap(), Some(10_000_000_000));
    assert_eq!(json.get_string("nested.name").unwrap().as_deref(), Some("inner"));
    assert_eq!(
        json.get_float_list("nested.weights").unwrap(),
        Some(vec![0.5, 1.5])
    );

    let back = json.convert_to(NestedKeyMap::new()).unwrap();
    assert_eq!(back, source);
}

#[test]
fn test_wide_number_kinds_narrow_through_json() {
    let source = NestedKeyMap::new();
    source.put_int("small", 1).unwrap();
    source.put_long("medium", 40_000).unwrap();
    source.put_double("half", 0.5).unwrap();

    let back = source
        .convert_to(JsonData::new())
        .unwrap()
        .convert_to(NestedKeyMap::new())
        .unwrap();

    // Values survive, kinds become the narrowest that hold them
    assert_eq!(back.get("small").unwrap(), Some(Object::Byte(1)));
    assert_eq!(back.get("medium").unwrap(), Some(Object::Int(40_000)));
    assert_eq!(back.get("half").unwrap(), Some(Object::Float(0.5)));
    assert_eq!(back.get_int("small").unwrap(), Some(1));
    assert_eq!(back.get_long("medium").unwrap(), Some(40_000));
    assert_eq!(back.get_double("half").unwrap(), Some(0.5));
}

#[test]
fn test_root_keys_are_copied_literally() {
    let json: JsonData = r#"{"a.b":7,"":8,"c":1}"#.parse().unwrap();

    let nested = json.convert_to(NestedKeyMap::new()).unwrap();
    assert_eq!(nested.size(), 3);
    assert_eq!(nested.raw().get("a.b"), Some(Object::Byte(7)));
    assert_eq!(nested.raw().get(""), Some(Object::Byte(8)));
    assert!(!nested.contains("a").unwrap());

    let copy = json.convert_to(JsonData::new()).unwrap();
    assert_eq!(copy.to_string(), r#"{"a.b":7,"":8,"c":1}"#);

    let back = nested.convert_to(JsonData::new()).unwrap();
    assert_eq!(back.size(), 3);
    assert_eq!(back.raw().get("a.b").map(|v| v.to_string()).as_deref(), Some("7"));
    assert_eq!(back.raw().get("").map(|v| v.to_string()).as_deref(), Some("8"));
}

#[test]
fn test_json_to_nested_drops_explicit_nulls() {
    let json: JsonData = r#"{"a":1,"gone":null,"deep":{"b":[1,null]}}"#.parse().unwrap();
    let nested = json.convert_to(NestedKeyMap::new()).unwrap();

    let mut keys = nested.keys();
    keys.sort();
    assert_eq!(keys, vec!["a", "deep"]);
    assert_eq!(
        nested.get("deep.b").unwrap(),
        Some(Object::List(vec![Object::Byte(1), Object::Null]))
    );
}

#[test]
fn test_convert_into_existing_holder_keeps_other_keys() {
    let (source, _) = holders();
    source.put_int("x", 1).unwrap();
    source.put_string("shared", "from source").unwrap();

    let target = JsonData::new();
    target.put_string("shared", "from target").unwrap();
    target.put_bool("kept", true).unwrap();

    let target = source.convert_to(target).unwrap();
    assert_eq!(target.get_int("x").unwrap(), Some(1));
    assert_eq!(
        target.get_string("shared").unwrap().as_deref(),
        Some("from source")
    );
    assert_eq!(target.get_bool("kept").unwrap(), Some(true));
}

#[test]
fn test_converted_sections_are_copies() {
    let source = NestedKeyMap::new();
    source.put_int("s.v", 1).unwrap();
    let copy = source.convert_to(NestedKeyMap::new()).unwrap();

    copy.put_int("s.v", 2).unwrap();
    assert_eq!(source.get_int("s.v").unwrap(), Some(1));
}

#[test]
fn test_same_representation_round_trip() {
    let (nested, json) = holders();
    populate(&nested);
    populate(&json);

    let nested_copy = nested.convert_to(NestedKeyMap::new()).unwrap();
    assert_eq!(nested_copy, nested);

    let json_copy = json.convert_to(JsonData::new()).unwrap();
    assert_eq!(json_copy.to_string(), json.to_string());
}
