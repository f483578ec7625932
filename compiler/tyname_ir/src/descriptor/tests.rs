use super::*;

#[test]
fn strips_arity_marker_on_construction() {
    let desc = TypeDescriptor::new("IDictionary`2");
    assert_eq!(desc.simple_name(), "IDictionary");
}

#[test]
fn keeps_names_without_well_formed_marker() {
    assert_eq!(strip_arity("Plain"), "Plain");
    assert_eq!(strip_arity("Odd`"), "Odd`");
    assert_eq!(strip_arity("Odd`x1"), "Odd`x1");
    assert_eq!(strip_arity("`1"), "`1");
}

#[test]
fn namespace_path_splits_on_dots() {
    let desc = TypeDescriptor::new("IEnumerable").in_namespace_path("System.Collections.Generic");
    assert_eq!(desc.namespace(), ["System", "Collections", "Generic"]);

    let cleared = desc.in_namespace_path("");
    assert!(cleared.namespace().is_empty());
}

#[test]
fn namespace_from_segments() {
    let desc = TypeDescriptor::new("Decimal").in_namespace(["System"]);
    assert_eq!(desc.namespace(), ["System"]);
}

#[test]
fn generic_and_nested_flags() {
    let plain = TypeDescriptor::new("ComplexType");
    assert!(!plain.is_generic());
    assert!(!plain.is_nested());

    let nested = TypeDescriptor::new("NestedType")
        .nested_in(TypeIdx::from_raw(0))
        .with_args([TypeIdx::from_raw(1), TypeIdx::from_raw(2)]);
    assert!(nested.is_generic());
    assert!(nested.is_nested());
    assert_eq!(nested.declaring_type(), Some(TypeIdx::from_raw(0)));
    assert_eq!(
        nested.generic_args(),
        [TypeIdx::from_raw(1), TypeIdx::from_raw(2)]
    );
}

#[test]
fn argument_order_is_part_of_equality() {
    let a = TypeDescriptor::new("IDictionary").with_args([TypeIdx::from_raw(0), TypeIdx::from_raw(1)]);
    let b = TypeDescriptor::new("IDictionary").with_args([TypeIdx::from_raw(1), TypeIdx::from_raw(0)]);
    assert_ne!(a, b);
}
