//! JsonData specific behavior: explicit nulls, member order and number kinds.

use dataops::{
    DataHolder, Number, TypeOps,
    json::{JsonData, JsonElement},
};

#[test]
fn test_explicit_null_reads_as_absent() {
    let data: JsonData = r#"{"a":null,"b":{"c":null}}"#.parse().unwrap();

    assert_eq!(data.get("a").unwrap(), None);
    assert_eq!(data.get_string_or("a", "default").unwrap(), "default");
    assert_eq!(data.get("b.c").unwrap(), None);
    assert!(data.contains("a").unwrap());
    assert!(data.contains("b.c").unwrap());

    assert!(data.remove("a").unwrap().is_none());
    assert!(!data.contains("a").unwrap());
}

#[test]
fn test_put_empty_stores_null_member() {
    let data = JsonData::new();
    data.put("opt", None::<i32>).unwrap();
    assert_eq!(data.to_string(), r#"{"opt":null}"#);
    assert_eq!(data.size(), 1);
}

#[test]
fn test_numbers_read_back_with_narrowest_kind() {
    let data: JsonData = r#"{"small":7,"mid":40000,"big":9000000000,"frac":0.5,"fine":0.1}"#
        .parse()
        .unwrap();
    let ops = data.ops();
    let kind = |key: &str| {
        data.get(key)
            .unwrap()
            .and_then(|node| ops.get_number_value(&node))
            .map(|n| n.kind_name())
    };

    assert_eq!(kind("small"), Some("byte"));
    assert_eq!(kind("mid"), Some("int"));
    assert_eq!(kind("big"), Some("long"));
    assert_eq!(kind("frac"), Some("float"));
    assert_eq!(kind("fine"), Some("double"));

    // Typed getters do not depend on the kind
    assert_eq!(data.get_long("small").unwrap(), Some(7));
    assert_eq!(data.get_double("fine").unwrap(), Some(0.1));
}

#[test]
fn test_non_finite_numbers_become_null() {
    let data = JsonData::new();
    data.put_double("nan", f64::NAN).unwrap();
    data.put_float("inf", f32::INFINITY).unwrap();
    assert_eq!(data.to_string(), r#"{"nan":null,"inf":null}"#);
    assert_eq!(data.get_double("nan").unwrap(), None);
}

#[test]
fn test_generic_put_converts_to_json() {
    let data = JsonData::new();
    data.put("list", vec![Some(1_i8), None, Some(3)]).unwrap();
    data.put("flag", true).unwrap();
    assert_eq!(data.to_string(), r#"{"list":[1,null,3],"flag":true}"#);
    assert_eq!(
        data.ops().get_number_value(&data.get("list").unwrap().unwrap()),
        None
    );
    assert_eq!(
        data.get_list("list").unwrap().unwrap()[0],
        JsonElement::Number(serde_json::Number::from(1))
    );
    assert_eq!(
        data.get_list("list")
            .unwrap()
            .and_then(|l| data.ops().get_number_value(&l[2])),
        Some(Number::Byte(3))
    );
}

#[test]
fn test_section_of_parsed_document() {
    let data: JsonData = r#"{"server":{"port":80,"hosts":["a","b"]}}"#.parse().unwrap();
    let server = data.get_section("server").unwrap().unwrap();
    server.put_int("port", 8080).unwrap();

    assert_eq!(
        data.to_string(),
        r#"{"server":{"port":8080,"hosts":["a","b"]}}"#
    );
    assert_eq!(
        server.get_string_array("hosts").unwrap().as_deref(),
        Some(&["a".to_string(), "b".to_string()][..])
    );
}
