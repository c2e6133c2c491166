use pretty_assertions::assert_eq;

use crate::types::tag::{Builtin, TypeTag};

#[test]
fn test_builtin_rank_order() {
    assert!(Builtin::Int < Builtin::Float);
    assert!(Builtin::Float < Builtin::Bool);
    assert!(Builtin::Str < Builtin::Bytes);
    assert!(Builtin::Tuple < Builtin::List);
    assert!(Builtin::Map < Builtin::Ref);
}

#[test]
fn test_numeric_kinds() {
    assert!(Builtin::Int.is_numeric());
    assert!(Builtin::Float.is_numeric());
    assert!(!Builtin::Str.is_numeric());
    assert!(!Builtin::Ref.is_numeric());

    assert!(TypeTag::Builtin(Builtin::Int).is_numeric());
    assert!(!TypeTag::custom("Int").is_numeric());
}

#[test]
fn test_builtins_sort_before_customs() {
    // Even a custom name that would sort first alphabetically comes after
    // every builtin kind.
    let custom = TypeTag::custom("AAA");
    assert!(TypeTag::Builtin(Builtin::Ref) < custom);
    assert!(TypeTag::Builtin(Builtin::Int) < custom);
}

#[test]
fn test_customs_sort_alphabetically() {
    let bar = TypeTag::custom("Bar");
    let foo = TypeTag::custom("Foo");
    assert!(bar < foo);
    assert_eq!(bar, TypeTag::custom("Bar"));
}

#[test]
fn test_display_uses_declared_names() {
    assert_eq!(TypeTag::Builtin(Builtin::Int).to_string(), "Int");
    assert_eq!(TypeTag::Builtin(Builtin::Bytes).to_string(), "Bytes");
    assert_eq!(TypeTag::custom("Temperature").to_string(), "Temperature");
}
