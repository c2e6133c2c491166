use std::cmp::Ordering;

use pretty_assertions::assert_eq;

use crate::compare::{compare_in, eq_in, gt_in, gte_in, lt_in, lte_in, max_in, min_in};
use crate::errors::Error;
use crate::registry::{Registry, define_in};
use crate::types::tag::{Builtin, TypeTag};
use crate::values::custom::CustomType;
use crate::values::value::Value;

struct Bar {
    num: f64,
}

struct Foo {
    int: i64,
}

impl CustomType for Bar {
    fn type_name() -> &'static str {
        "Bar"
    }
}

impl CustomType for Foo {
    fn type_name() -> &'static str {
        "Foo"
    }
}

/// Registry with the Bar/Foo comparator from the canonical direction.
fn bar_foo_registry() -> Registry {
    let registry = Registry::new();
    define_in::<Bar, Foo, _>(&registry, |bar, foo| bar.num.total_cmp(&(foo.int as f64)))
        .unwrap();
    registry
}

#[test]
fn test_reflexivity() {
    let registry = Registry::new();
    let values = [
        Value::Int(42),
        Value::Float(2.5),
        Value::Float(f64::NAN),
        Value::Bool(true),
        Value::symbol("ok"),
        Value::str("hello"),
        Value::bytes(b"\x00\x01"),
        Value::Tuple(vec![Value::Int(1), Value::str("x")]),
        Value::List(vec![Value::Int(1), Value::Int(2)]),
        Value::Map(vec![(Value::str("k"), Value::Int(1))]),
        Value::Ref(9),
        Value::custom(Foo { int: 7 }),
    ];
    for v in &values {
        assert_eq!(compare_in(&registry, v, v).unwrap(), Ordering::Equal, "{v}");
        // A clone is the same value (or structurally equal) too.
        assert_eq!(compare_in(&registry, v, &v.clone()).unwrap(), Ordering::Equal);
    }
}

#[test]
fn test_numeric_cross_type() {
    let registry = Registry::new();
    let cmp = |a: &Value, b: &Value| compare_in(&registry, a, b).unwrap();

    assert_eq!(cmp(&Value::Int(3), &Value::Float(3.0)), Ordering::Equal);
    assert_eq!(cmp(&Value::Int(2), &Value::Float(3.5)), Ordering::Less);
    assert_eq!(cmp(&Value::Float(5.5), &Value::Int(2)), Ordering::Greater);
    assert_eq!(cmp(&Value::Float(3.0), &Value::Int(3)), Ordering::Equal);
    assert_eq!(cmp(&Value::Int(-2), &Value::Float(-2.5)), Ordering::Greater);
}

#[test]
fn test_numeric_cross_type_is_exact_at_high_magnitude() {
    let registry = Registry::new();
    let cmp = |a: &Value, b: &Value| compare_in(&registry, a, b).unwrap();

    // i64::MAX is not representable as f64; a lossy cast would call these
    // equal.
    let max = Value::Int(i64::MAX);
    assert_eq!(cmp(&max, &Value::Float(9.3e18)), Ordering::Less);
    assert_eq!(cmp(&max, &Value::Float(9.2e18)), Ordering::Greater);
    assert_eq!(
        cmp(&Value::Int(i64::MIN), &Value::Float(-(2f64.powi(63)))),
        Ordering::Equal
    );
    assert_eq!(cmp(&max, &Value::Float(f64::INFINITY)), Ordering::Less);
    assert_eq!(
        cmp(&Value::Int(0), &Value::Float(f64::NEG_INFINITY)),
        Ordering::Greater
    );
    assert_eq!(cmp(&Value::Int(0), &Value::Float(f64::NAN)), Ordering::Less);
}

#[test]
fn test_signed_zeros_are_equal_in_every_representation() {
    let registry = Registry::new();
    let cmp = |a: &Value, b: &Value| compare_in(&registry, a, b).unwrap();

    let int = Value::Int(0);
    let pos = Value::Float(0.0);
    let neg = Value::Float(-0.0);

    // All three zeros are one equivalence class; float/float must agree
    // with the int/float path or the relation loses transitivity.
    assert_eq!(cmp(&pos, &neg), Ordering::Equal);
    assert_eq!(cmp(&neg, &pos), Ordering::Equal);
    assert_eq!(cmp(&int, &pos), Ordering::Equal);
    assert_eq!(cmp(&int, &neg), Ordering::Equal);

    // -0.0 still sorts strictly against nonzero values.
    assert_eq!(cmp(&neg, &Value::Float(-1.0)), Ordering::Greater);
    assert_eq!(cmp(&neg, &Value::Int(1)), Ordering::Less);
}

#[test]
fn test_same_kind_builtins() {
    let registry = Registry::new();
    let cmp = |a: &Value, b: &Value| compare_in(&registry, a, b).unwrap();

    assert_eq!(cmp(&Value::Bool(false), &Value::Bool(true)), Ordering::Less);
    assert_eq!(cmp(&Value::str("abc"), &Value::str("abd")), Ordering::Less);
    assert_eq!(cmp(&Value::symbol("b"), &Value::symbol("a")), Ordering::Greater);
    assert_eq!(
        cmp(&Value::bytes(b"\x01\x02"), &Value::bytes(b"\x01\x03")),
        Ordering::Less
    );
    assert_eq!(cmp(&Value::Ref(1), &Value::Ref(2)), Ordering::Less);
}

#[test]
fn test_sequences_compare_lexicographically() {
    let registry = Registry::new();
    let cmp = |a: &Value, b: &Value| compare_in(&registry, a, b).unwrap();

    let a = Value::List(vec![Value::Int(1), Value::Int(2)]);
    let b = Value::List(vec![Value::Int(1), Value::Int(3)]);
    assert_eq!(cmp(&a, &b), Ordering::Less);

    // Prefix sorts before its extension.
    let short = Value::List(vec![Value::Int(1)]);
    assert_eq!(cmp(&short, &a), Ordering::Less);

    // Nested: mixed numerics inside sequences still compare numerically.
    let nested_a = Value::Tuple(vec![Value::Int(3), Value::str("x")]);
    let nested_b = Value::Tuple(vec![Value::Float(3.0), Value::str("y")]);
    assert_eq!(cmp(&nested_a, &nested_b), Ordering::Less);
}

#[test]
fn test_maps_compare_by_size_then_entries() {
    let registry = Registry::new();
    let cmp = |a: &Value, b: &Value| compare_in(&registry, a, b).unwrap();

    let small = Value::Map(vec![(Value::str("a"), Value::Int(1))]);
    let big = Value::Map(vec![
        (Value::str("a"), Value::Int(1)),
        (Value::str("b"), Value::Int(2)),
    ]);
    assert_eq!(cmp(&small, &big), Ordering::Less);

    let x = Value::Map(vec![(Value::str("a"), Value::Int(1))]);
    let y = Value::Map(vec![(Value::str("a"), Value::Int(2))]);
    assert_eq!(cmp(&x, &y), Ordering::Less);
    assert_eq!(cmp(&x, &x.clone()), Ordering::Equal);
}

#[test]
fn test_missing_comparator() {
    let registry = Registry::new();
    // Str vs Int: different builtin kinds, not numeric, nothing registered.
    let err = compare_in(&registry, &Value::str("a"), &Value::Int(1)).unwrap_err();
    assert_eq!(
        err,
        Error::NoComparatorFound {
            first: TypeTag::Builtin(Builtin::Int),
            second: TypeTag::Builtin(Builtin::Str),
        }
    );

    // Custom pairs need a registration even for the self pair.
    let a = Value::custom(Foo { int: 1 });
    let b = Value::custom(Foo { int: 1 });
    assert_eq!(
        compare_in(&registry, &a, &b).unwrap_err(),
        Error::NoComparatorFound {
            first: TypeTag::custom("Foo"),
            second: TypeTag::custom("Foo"),
        }
    );
}

#[test]
fn test_cross_type_comparator_and_inversion() {
    let registry = bar_foo_registry();

    let bar = Value::custom(Bar { num: 5.0 });
    let foo = Value::custom(Foo { int: 3 });

    // Canonical direction.
    assert_eq!(compare_in(&registry, &bar, &foo).unwrap(), Ordering::Greater);
    // Reversed call inverts the registered comparator's result.
    assert_eq!(compare_in(&registry, &foo, &bar).unwrap(), Ordering::Less);

    // Antisymmetry across a range of payloads.
    for (num, int) in [(0.0, 0), (-1.5, 2), (10.0, 10), (3.25, 3)] {
        let bar = Value::custom(Bar { num });
        let foo = Value::custom(Foo { int });
        let forward = compare_in(&registry, &bar, &foo).unwrap();
        let backward = compare_in(&registry, &foo, &bar).unwrap();
        assert_eq!(forward, backward.reverse(), "num={num} int={int}");
    }
}

#[test]
fn test_custom_vs_builtin_via_raw_registration() {
    let registry = Registry::new();
    registry
        .register(
            TypeTag::Builtin(Builtin::Int),
            TypeTag::custom("Foo"),
            |int, foo| {
                let int = int.as_int().unwrap_or_default();
                let foo = foo.downcast_ref::<Foo>().map(|f| f.int).unwrap_or_default();
                int.cmp(&foo)
            },
        )
        .unwrap();

    let foo = Value::custom(Foo { int: 5 });
    assert_eq!(compare_in(&registry, &Value::Int(7), &foo).unwrap(), Ordering::Greater);
    assert_eq!(compare_in(&registry, &foo, &Value::Int(7)).unwrap(), Ordering::Less);
}

#[test]
fn test_predicates_are_consistent() {
    let registry = bar_foo_registry();

    let cases = [
        (Value::custom(Bar { num: 5.0 }), Value::custom(Foo { int: 3 })),
        (Value::custom(Foo { int: 3 }), Value::custom(Bar { num: 5.0 })),
        (Value::custom(Bar { num: 3.0 }), Value::custom(Foo { int: 3 })),
        (Value::Int(1), Value::Float(2.0)),
        (Value::str("a"), Value::str("a")),
    ];
    for (a, b) in &cases {
        let lt = lt_in(&registry, a, b).unwrap();
        let eq = eq_in(&registry, a, b).unwrap();
        let gt = gt_in(&registry, a, b).unwrap();
        // Exactly one of lt/eq/gt holds.
        assert_eq!(
            [lt, eq, gt].iter().filter(|p| **p).count(),
            1,
            "{a} vs {b}"
        );
        assert_eq!(lte_in(&registry, a, b).unwrap(), lt || eq);
        assert_eq!(gte_in(&registry, a, b).unwrap(), gt || eq);
    }
}

#[test]
fn test_min_max() {
    let registry = Registry::new();
    let two = Value::Int(2);
    let pi = Value::Float(3.14);

    assert_eq!(min_in(&registry, &two, &pi).unwrap().as_int(), Some(2));
    assert_eq!(max_in(&registry, &two, &pi).unwrap().as_float(), Some(3.14));

    // Ties go to the first argument.
    let a = Value::Int(3);
    let b = Value::Float(3.0);
    assert!(min_in(&registry, &a, &b).unwrap().same_as(&a));
    assert!(max_in(&registry, &a, &b).unwrap().same_as(&a));
}

#[test]
fn test_errors_propagate_out_of_containers() {
    let registry = Registry::new();
    let a = Value::List(vec![Value::Int(1), Value::str("x")]);
    let b = Value::List(vec![Value::Int(1), Value::Int(2)]);
    assert!(matches!(
        compare_in(&registry, &a, &b),
        Err(Error::NoComparatorFound { .. })
    ));
}
