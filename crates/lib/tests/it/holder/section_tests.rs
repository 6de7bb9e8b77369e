//! Sections: nested maps exposed as holders that alias their parent.

use dataops::{DataHolder, TypeOps};

use crate::helpers::*;

fn check_section_writes_reach_parent<H: DataHolder>(holder: H) {
    populate(&holder);
    let server = holder.get_section("app.server").unwrap().unwrap();
    assert_eq!(server.get_int("port").unwrap(), Some(8080));

    server.put_int("port", 9090).unwrap();
    server.put_string("bind.addr", "0.0.0.0").unwrap();
    assert_eq!(holder.get_int("app.server.port").unwrap(), Some(9090));
    assert_eq!(
        holder.get_string("app.server.bind.addr").unwrap().as_deref(),
        Some("0.0.0.0")
    );

    // And the other way round
    holder.remove("app.server.tls").unwrap();
    assert!(!server.contains("tls").unwrap());
}

fn check_put_section_aliases<H: DataHolder>(holder: H) {
    let section = H::default();
    section.put_int("before", 1).unwrap();
    holder.put_section("child", &section).unwrap();

    section.put_int("after", 2).unwrap();
    assert_eq!(holder.get_int("child.before").unwrap(), Some(1));
    assert_eq!(holder.get_int("child.after").unwrap(), Some(2));

    holder.put_int("child.from_parent", 3).unwrap();
    assert_eq!(section.get_int("from_parent").unwrap(), Some(3));
}

fn check_section_missing_or_scalar<H: DataHolder>(holder: H) {
    holder.put_int("scalar", 1).unwrap();
    assert!(holder.get_section("scalar").unwrap().is_none());
    assert!(holder.get_section("missing").unwrap().is_none());
    assert!(!holder.contains_section("scalar").unwrap());
}

fn check_section_lists<H: DataHolder>(holder: H) {
    let first = H::default();
    first.put_string("name", "first").unwrap();
    let second = H::default();
    second.put_string("name", "second").unwrap();
    holder
        .put_section_list("items", &[first.clone(), second])
        .unwrap();

    let items = holder.get_section_list("items").unwrap().unwrap();
    let names: Vec<_> = items
        .iter()
        .map(|item| item.get_string("name").unwrap().unwrap())
        .collect();
    assert_eq!(names, vec!["first", "second"]);

    // Listed sections alias too
    first.put_int("extra", 1).unwrap();
    assert_eq!(items[0].get_int("extra").unwrap(), Some(1));

    holder.put_int_list("numbers", vec![1]).unwrap();
    assert!(holder.get_section_list("numbers").unwrap().is_none());
}

fn check_section_cycles_rejected<H: DataHolder>(holder: H) {
    let err = holder.put_section("me", &holder).unwrap_err();
    assert!(err.is_section_cycle());
    let err = holder.put_section("me", &holder.clone()).unwrap_err();
    assert!(err.is_section_cycle());

    holder.put_int("a.b.c", 1).unwrap();
    let a = holder.get_section("a").unwrap().unwrap();
    // Destination below the section itself
    let err = holder.put_section("a.b.loop", &a).unwrap_err();
    assert!(err.is_section_cycle());
    // Section holding the destination's parent
    let err = a.put_section("x.y", &holder).unwrap_err();
    assert!(err.is_section_cycle());
    let err = holder
        .put_section_list("list", &[H::default(), holder.clone()])
        .unwrap_err();
    assert!(err.is_section_cycle());

    assert!(!holder.contains("me").unwrap());
    assert!(!holder.contains("list").unwrap());
    assert!(!a.contains("x").unwrap());
    assert_eq!(holder.keys_at("a.b").unwrap(), vec!["c"]);

    // Aliasing a sibling is fine
    let b = holder.get_section("a.b").unwrap().unwrap();
    holder.put_section("b_alias", &b).unwrap();
    holder.put_section_list("b_list", &[b.clone()]).unwrap();
    assert_eq!(holder.get_int("b_alias.c").unwrap(), Some(1));
}

fn check_builder_at<H: DataHolder>(holder: H) {
    holder.put_int("db.pool", 4).unwrap();

    // Reuses an existing section
    holder
        .builder_at("db")
        .unwrap()
        .put("timeout", 30)
        .unwrap();
    assert_eq!(holder.get_int("db.pool").unwrap(), Some(4));
    assert_eq!(holder.get_int("db.timeout").unwrap(), Some(30));

    // Creates a missing one
    holder
        .builder_at("cache")
        .unwrap()
        .down("redis")
        .unwrap()
        .put("port", 6379)
        .unwrap();
    assert_eq!(holder.get_int("cache.redis.port").unwrap(), Some(6379));
}

fn check_from_node_aliases<H: DataHolder>(holder: H) {
    let alias = H::from_node(&holder.as_node()).unwrap();
    alias.put_bool("seen", true).unwrap();
    assert_eq!(holder.get_bool("seen").unwrap(), Some(true));

    let scalar = holder.ops().create_string("scalar");
    assert!(H::from_node(&scalar).is_none());
}

for_each_holder! {
    test_section_writes_reach_parent => check_section_writes_reach_parent;
    test_put_section_aliases => check_put_section_aliases;
    test_section_missing_or_scalar => check_section_missing_or_scalar;
    test_section_lists => check_section_lists;
    test_section_cycles_rejected => check_section_cycles_rejected;
    test_builder_at => check_builder_at;
    test_from_node_aliases => check_from_node_aliases;
}
