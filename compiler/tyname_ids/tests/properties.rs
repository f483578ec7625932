//! Property-based tests for identifier resolution.
//!
//! Random descriptor trees are inserted into a table and resolved. The result
//! is compared against a direct rendering of the same tree, which checks the
//! simple, generic and nested shapes in both modes at once.

#![allow(clippy::unwrap_used, clippy::expect_used, reason = "Tests can panic")]

use proptest::prelude::*;
use tyname_ids::{resolve, IdMode, SchemaIdRegistry};
use tyname_ir::{TypeDescriptor, TypeIdx, TypeTable};

/// Owned tree form of a descriptor, independent of any table.
#[derive(Clone, Debug)]
struct Shape {
    name: String,
    namespace: Vec<String>,
    declaring: Option<Box<Shape>>,
    args: Vec<Shape>,
}

fn name_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[A-Z][A-Za-z0-9_]{0,8}").expect("valid regex")
}

fn namespace_strategy() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(
        prop::string::string_regex("[A-Z][a-z]{0,6}").expect("valid regex"),
        0..3,
    )
}

fn shape_strategy() -> impl Strategy<Value = Shape> {
    let leaf = (name_strategy(), namespace_strategy()).prop_map(|(name, namespace)| Shape {
        name,
        namespace,
        declaring: None,
        args: Vec::new(),
    });
    leaf.prop_recursive(4, 32, 3, |inner| {
        (
            name_strategy(),
            namespace_strategy(),
            prop::option::of(inner.clone()),
            prop::collection::vec(inner, 0..3),
        )
            .prop_map(|(name, namespace, declaring, args)| Shape {
                name,
                namespace,
                declaring: declaring.map(Box::new),
                args,
            })
    })
}

fn insert(table: &mut TypeTable, shape: &Shape) -> TypeIdx {
    let mut desc = TypeDescriptor::new(shape.name.clone()).in_namespace(shape.namespace.clone());
    if let Some(declaring) = &shape.declaring {
        desc = desc.nested_in(insert(table, declaring));
    }
    let args: Vec<_> = shape.args.iter().map(|arg| insert(table, arg)).collect();
    table.insert(desc.with_args(args))
}

fn render(shape: &Shape, mode: IdMode) -> String {
    let prefix = match &shape.declaring {
        Some(declaring) => format!("{}.", render(declaring, mode)),
        None if mode.is_fully_qualified() && !shape.namespace.is_empty() => {
            format!("{}.", shape.namespace.join("."))
        }
        None => String::new(),
    };
    let args = if shape.args.is_empty() {
        String::new()
    } else {
        let rendered: Vec<_> = shape.args.iter().map(|arg| render(arg, mode)).collect();
        format!("[{}]", rendered.join(","))
    };
    format!("{prefix}{}{args}", shape.name)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn resolution_matches_direct_rendering(shape in shape_strategy(), full in any::<bool>()) {
        let mut table = TypeTable::new();
        let idx = insert(&mut table, &shape);
        let id = resolve(&table, idx, full).unwrap();
        prop_assert_eq!(id.as_str(), render(&shape, IdMode::from_flag(full)));
    }

    #[test]
    fn resolution_is_deterministic_across_tables(shape in shape_strategy(), full in any::<bool>()) {
        let mut first = TypeTable::new();
        let mut second = TypeTable::new();
        // Offset the second table so handles differ.
        second.insert(TypeDescriptor::new("Padding"));
        let a = insert(&mut first, &shape);
        let b = insert(&mut second, &shape);

        prop_assert_eq!(resolve(&first, a, full).unwrap(), resolve(&first, a, full).unwrap());
        prop_assert_eq!(resolve(&first, a, full).unwrap(), resolve(&second, b, full).unwrap());
    }

    #[test]
    fn identifiers_have_no_whitespace(shape in shape_strategy(), full in any::<bool>()) {
        let mut table = TypeTable::new();
        let idx = insert(&mut table, &shape);
        let id = resolve(&table, idx, full).unwrap();
        prop_assert!(!id.as_str().contains(char::is_whitespace));
    }

    #[test]
    fn different_namespaces_give_different_full_ids(
        name in name_strategy(),
        left in namespace_strategy(),
        right in namespace_strategy(),
    ) {
        prop_assume!(left != right);
        let mut table = TypeTable::new();
        let a = table.insert(TypeDescriptor::new(name.clone()).in_namespace(left));
        let b = table.insert(TypeDescriptor::new(name).in_namespace(right));

        prop_assert_eq!(resolve(&table, a, false).unwrap(), resolve(&table, b, false).unwrap());
        prop_assert_ne!(resolve(&table, a, true).unwrap(), resolve(&table, b, true).unwrap());
    }

    #[test]
    fn registry_is_idempotent(shape in shape_strategy()) {
        let mut table = TypeTable::new();
        let a = insert(&mut table, &shape);
        let b = insert(&mut table, &shape);
        let mut registry = SchemaIdRegistry::default();

        let first = registry.register(&table, a).unwrap();
        prop_assert_eq!(registry.register(&table, b).unwrap(), first);
        prop_assert_eq!(registry.len(), 1);
    }
}
