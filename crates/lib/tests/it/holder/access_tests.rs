//! Keyed CRUD and typed accessors.

use dataops::{DataHolder, Error, NestedKeyMap, TypeOps, json::JsonData};

use crate::helpers::*;

fn check_put_get_on_new_paths<H: DataHolder>(holder: H) {
    populate(&holder);

    assert_eq!(holder.get_string("app.name").unwrap().as_deref(), Some("dataops"));
    assert_eq!(holder.get_int("app.server.port").unwrap(), Some(8080));
    assert_eq!(holder.get_bool("app.server.tls").unwrap(), Some(false));
    assert_eq!(holder.get_double("ratio").unwrap(), Some(0.75));
    assert_eq!(
        holder.get_string_list("app.tags").unwrap(),
        Some(vec!["a".to_string(), "b".to_string()])
    );

    let mut keys = holder.keys();
    keys.sort();
    assert_eq!(keys, vec!["app", "ratio"]);
    assert_eq!(holder.size(), 2);

    let mut app_keys = holder.keys_at("app").unwrap();
    app_keys.sort();
    assert_eq!(app_keys, vec!["name", "server", "tags"]);
    assert!(holder.keys_at("app.name").unwrap().is_empty());
    assert!(holder.keys_at("missing").unwrap().is_empty());
}

fn check_put_returns_previous<H: DataHolder>(holder: H) {
    let ops = holder.ops();
    assert!(holder.put_int("k", 1).unwrap().is_none());
    let previous = holder.put_string("k", "v").unwrap().unwrap();
    assert_eq!(ops.get_int(&previous), Some(1));
    assert_eq!(holder.get_int("k").unwrap(), None);
    assert_eq!(holder.get_string("k").unwrap().as_deref(), Some("v"));
}

fn check_remove<H: DataHolder>(holder: H) {
    let ops = holder.ops();
    holder.put_long("a.b", 5).unwrap();
    holder.put_long("a.c", 6).unwrap();

    let removed = holder.remove("a.b").unwrap().unwrap();
    assert_eq!(ops.get_long(&removed), Some(5));
    assert!(!holder.contains("a.b").unwrap());
    assert!(holder.contains("a.c").unwrap());

    assert!(holder.remove("a.b").unwrap().is_none());
    assert!(holder.remove("x.y.z").unwrap().is_none());
    assert!(!holder.contains("x").unwrap());
}

fn check_typed_defaults_on_mismatch<H: DataHolder>(holder: H) {
    holder.put_string("name", "text").unwrap();
    holder.put_int("count", 300).unwrap();

    assert_eq!(holder.get_int("name").unwrap(), None);
    assert_eq!(holder.get_int_or("name", -1).unwrap(), -1);
    assert_eq!(holder.get_int_or("missing", 7).unwrap(), 7);
    assert_eq!(holder.get_string_or("count", "none").unwrap(), "none");
    assert_eq!(holder.get_string_or("name", "none").unwrap(), "text");

    // Numbers narrow like primitive casts
    assert_eq!(holder.get_byte("count").unwrap(), Some(44));
    assert_eq!(holder.get_short("count").unwrap(), Some(300));
    assert_eq!(holder.get_float("count").unwrap(), Some(300.0));
    assert_eq!(holder.get_bool("count").unwrap(), Some(true));
    assert_eq!(holder.get_as::<i64>("count").unwrap(), Some(300));
    assert_eq!(holder.get_as_or::<String>("count", "d".into()).unwrap(), "d");
}

fn check_list_all_or_nothing<H: DataHolder>(holder: H) {
    holder.put_int_list("ints", vec![1, 2, 3]).unwrap();
    holder.put_string_list("strs", vec!["x".to_string()]).unwrap();
    holder.put_int("scalar", 1).unwrap();
    let ops = holder.ops();
    holder
        .put_list(
            "mixed",
            vec![ops.create_int(1), ops.create_string("two"), ops.create_int(3)],
        )
        .unwrap();

    assert_eq!(holder.get_int_list("ints").unwrap(), Some(vec![1, 2, 3]));
    assert_eq!(holder.get_long_list("ints").unwrap(), Some(vec![1, 2, 3]));
    assert_eq!(holder.get_int_list("mixed").unwrap(), None);
    assert_eq!(holder.get_int_list_or("mixed", vec![9]).unwrap(), vec![9]);
    assert_eq!(holder.get_string_list("mixed").unwrap(), None);
    assert_eq!(holder.get_int_list("strs").unwrap(), None);
    assert_eq!(holder.get_int_list("scalar").unwrap(), None);
    assert_eq!(holder.get_list("mixed").unwrap().map(|l| l.len()), Some(3));
    assert_eq!(holder.get_list("scalar").unwrap(), None);

    holder.put_double_array("arr", &[0.5, 1.5]).unwrap();
    assert_eq!(
        holder.get_double_array("arr").unwrap().as_deref(),
        Some(&[0.5, 1.5][..])
    );
    assert_eq!(holder.get_bool_array("arr").unwrap().map(|a| a.len()), Some(2));
    assert_eq!(holder.get_string_array("arr").unwrap(), None);
}

fn check_empty_key_is_rejected<H: DataHolder>(holder: H) {
    let empty = holder.ops().empty();
    let errors = [
        holder.get("").unwrap_err(),
        holder.put_int("", 1).unwrap_err(),
        holder.put_value("", empty).unwrap_err(),
        holder.remove("").unwrap_err(),
        holder.contains("").unwrap_err(),
        holder.keys_at("").unwrap_err(),
        holder.get_section("").unwrap_err(),
    ];
    for err in errors {
        assert!(matches!(err, Error::InvalidKey { .. }), "unexpected error: {err}");
    }
    assert_eq!(holder.size(), 0);
}

fn check_non_map_intermediate<H: DataHolder>(holder: H) {
    holder.put_int("a", 5).unwrap();

    assert_eq!(holder.get("a.b").unwrap(), None);
    assert!(!holder.contains("a.b").unwrap());
    assert!(holder.remove("a.b").unwrap().is_none());

    let err = holder.put_int("a.b", 1).unwrap_err();
    assert!(err.is_path_conflict());
    assert_eq!(holder.get_int("a").unwrap(), Some(5));
}

fn check_generic_put<H: DataHolder>(holder: H) {
    holder.put("n", 3_i16).unwrap();
    holder.put("s", "text").unwrap();
    holder.put("l", vec![1_i32, 2]).unwrap();
    holder
        .put("m", std::collections::HashMap::from([("k".to_string(), true)]))
        .unwrap();

    assert_eq!(holder.get_short("n").unwrap(), Some(3));
    assert_eq!(holder.get_string("s").unwrap().as_deref(), Some("text"));
    assert_eq!(holder.get_int_list("l").unwrap(), Some(vec![1, 2]));
    assert_eq!(holder.get_bool("m.k").unwrap(), Some(true));
    assert!(holder.contains_section("m").unwrap());
    assert!(!holder.contains_section("s").unwrap());

    let err = holder.put("nested", NestedKeyMap::new()).unwrap_err();
    assert!(err.is_illegal_section_assignment());
    let err = holder.put("nested", &JsonData::new()).unwrap_err();
    assert!(err.is_illegal_section_assignment());
    assert!(!holder.contains("nested").unwrap());
}

fn check_contains_as<H: DataHolder>(holder: H) {
    holder.put_int("n", 300).unwrap();
    holder.put_string("s", "text").unwrap();
    holder.put_bool("b", true).unwrap();

    assert!(holder.contains_as::<i32>("n").unwrap());
    assert!(holder.contains_as::<f64>("n").unwrap());
    assert!(!holder.contains_as::<String>("n").unwrap());
    assert!(holder.contains_as::<String>("s").unwrap());
    assert!(!holder.contains_as::<i64>("s").unwrap());
    assert!(holder.contains_as::<bool>("b").unwrap());
    assert!(!holder.contains_as::<i32>("missing").unwrap());
    assert!(holder.contains_as::<i32>("").unwrap_err().is_invalid_key());
}

fn check_raw_maps<H: DataHolder>(holder: H) {
    let ops = holder.ops();
    let map = indexmap::IndexMap::from([
        ("x".to_string(), ops.create_int(1)),
        ("y".to_string(), ops.create_string("why")),
    ]);
    holder.put_map("m", map.clone()).unwrap();
    holder
        .put_map_list("ml", vec![map.clone(), indexmap::IndexMap::new()])
        .unwrap();

    assert_eq!(holder.get_map("m").unwrap(), Some(map.clone()));
    assert_eq!(holder.get_int("m.x").unwrap(), Some(1));
    assert_eq!(holder.get_map("m.x").unwrap(), None);

    let maps = holder.get_map_list("ml").unwrap().unwrap();
    assert_eq!(maps.len(), 2);
    assert_eq!(maps[0], map);
    assert!(maps[1].is_empty());

    holder
        .put_list("not_maps", vec![ops.empty_map(), ops.create_int(1)])
        .unwrap();
    assert_eq!(holder.get_map_list("not_maps").unwrap(), None);
}

fn check_clear<H: DataHolder>(holder: H) {
    populate(&holder);
    let alias = holder.clone();
    holder.clear();
    assert_eq!(alias.size(), 0);
    assert!(alias.keys().is_empty());
}

for_each_holder! {
    test_put_get_on_new_paths => check_put_get_on_new_paths;
    test_put_returns_previous => check_put_returns_previous;
    test_remove => check_remove;
    test_typed_defaults_on_mismatch => check_typed_defaults_on_mismatch;
    test_list_getters_all_or_nothing => check_list_all_or_nothing;
    test_empty_key_is_rejected => check_empty_key_is_rejected;
    test_non_map_intermediate => check_non_map_intermediate;
    test_generic_put => check_generic_put;
    test_contains_as => check_contains_as;
    test_raw_maps => check_raw_maps;
    test_clear_is_shared_by_aliases => check_clear;
}
