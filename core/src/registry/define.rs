//! Typed registration for user-defined types.
//!
//! The declarative surface for supplying a comparator: name two
//! [`CustomType`]s, hand over a pure closure on their payloads, and the
//! facility derives the tags, validates canonical order eagerly, and binds
//! a downcast-guarded wrapper into the registry.

use std::cmp::Ordering;
use std::sync::Arc;

use crate::errors::Error;
use crate::registry::{Registry, global};
use crate::types::pair::PairKey;
use crate::types::tag::TypeTag;
use crate::values::custom::CustomType;
use crate::values::value::Value;

/// Register a comparator for the pair `(A, B)` in `registry`.
///
/// `A`'s declared name must precede `B`'s in canonical order (`A == B` is
/// fine); the order is validated before the closure is bound, so a wrong
/// order fails here and not at first use. The closure receives a payload
/// of `A` on the left and `B` on the right; the dispatcher handles calls
/// made in the opposite order by inverting the result.
pub fn define_in<A, B, F>(registry: &Registry, cmp: F) -> Result<(), Error>
where
    A: CustomType,
    B: CustomType,
    F: Fn(&A, &B) -> Ordering + Send + Sync + 'static,
{
    let first = TypeTag::custom(A::type_name());
    let second = TypeTag::custom(B::type_name());
    let pair = PairKey::new(first, second)?;

    let identity = pair.clone();
    registry.bind(
        pair,
        Arc::new(move |a: &Value, b: &Value| {
            match (a.downcast_ref::<A>(), b.downcast_ref::<B>()) {
                (Some(x), Some(y)) => Ok(cmp(x, y)),
                // The tags matched this entry but at least one payload is
                // not the Rust type it was defined for: a declared-name
                // collision. Report the payloads' concrete Rust types so
                // the colliding type is identifiable.
                _ => Err(Error::MismatchedComparatorIdentity {
                    expected: identity.clone(),
                    found: PairKey::canonical(payload_identity(a), payload_identity(b)).0,
                }),
            }
        }),
    );
    Ok(())
}

/// The runtime identity of a value: the concrete Rust type path for a
/// custom payload, the tag otherwise.
fn payload_identity(v: &Value) -> TypeTag {
    match v {
        Value::Custom(c) => TypeTag::custom(c.rust_name()),
        other => other.tag(),
    }
}

/// [`define_in`] against the [`global`] registry.
pub fn define<A, B, F>(cmp: F) -> Result<(), Error>
where
    A: CustomType,
    B: CustomType,
    F: Fn(&A, &B) -> Ordering + Send + Sync + 'static,
{
    define_in::<A, B, F>(global(), cmp)
}
