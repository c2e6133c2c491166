//! Builtin fast paths: numeric cross-type comparison and the platform
//! orderings for same-kind builtin values.
//!
//! Container comparisons recurse through the dispatcher, so nested custom
//! values still resolve through the registry (and can fail with the
//! registry's errors).

use std::cmp::Ordering;

use crate::compare::compare_in;
use crate::errors::Error;
use crate::registry::Registry;
use crate::values::value::Value;

/// Compare two numeric values by numeric value, exactly.
///
/// Returns `None` when either side is not numeric. This is the one case
/// where two different tags compare without a registered comparator:
/// int/float ordering is a platform-native total order, not a domain
/// concept.
pub(super) fn numeric(a: &Value, b: &Value) -> Option<Ordering> {
    match (a, b) {
        (Value::Int(x), Value::Int(y)) => Some(x.cmp(y)),
        (Value::Float(x), Value::Float(y)) => Some(cmp_floats(*x, *y)),
        (Value::Int(x), Value::Float(y)) => Some(cmp_int_float(*x, *y)),
        (Value::Float(x), Value::Int(y)) => Some(cmp_int_float(*y, *x).reverse()),
        _ => None,
    }
}

/// Float ordering by numeric value: signed zeros compare equal. NaN has
/// no numeric value and falls back to IEEE total order (negative NaN
/// below all numbers, positive NaN above), which keeps the relation
/// total and agrees with [`cmp_int_float`]'s NaN placement.
fn cmp_floats(x: f64, y: f64) -> Ordering {
    x.partial_cmp(&y).unwrap_or_else(|| x.total_cmp(&y))
}

/// First f64 strictly above `i64::MAX`; also exactly `-(i64::MIN)`.
const TWO_POW_63: f64 = 9_223_372_036_854_775_808.0;

/// Exact i64-vs-f64 comparison, without the precision loss of casting the
/// integer to f64 (lossy above 2^53). NaN is placed per IEEE total order
/// (above all numbers when positive, below when negative) so the relation
/// stays total and agrees with the float/float path.
fn cmp_int_float(lhs: i64, rhs: f64) -> Ordering {
    if rhs.is_nan() {
        return if rhs.is_sign_negative() {
            Ordering::Greater
        } else {
            Ordering::Less
        };
    }
    if rhs >= TWO_POW_63 {
        return Ordering::Less;
    }
    if rhs < -TWO_POW_63 {
        return Ordering::Greater;
    }
    // rhs is finite and within [-2^63, 2^63): its truncation converts to
    // i64 exactly.
    let whole = rhs.trunc();
    match lhs.cmp(&(whole as i64)) {
        Ordering::Equal => {
            if rhs > whole {
                Ordering::Less
            } else if rhs < whole {
                Ordering::Greater
            } else {
                Ordering::Equal
            }
        }
        ord => ord,
    }
}

/// Platform ordering for two values sharing the same builtin kind.
///
/// Callers guarantee the kinds match; numeric pairs are handled by
/// [`numeric`] before this is reached.
pub(super) fn same_kind(registry: &Registry, a: &Value, b: &Value) -> Result<Ordering, Error> {
    match (a, b) {
        (Value::Int(x), Value::Int(y)) => Ok(x.cmp(y)),
        (Value::Float(x), Value::Float(y)) => Ok(cmp_floats(*x, *y)),
        (Value::Bool(x), Value::Bool(y)) => Ok(x.cmp(y)),
        (Value::Symbol(x), Value::Symbol(y)) => Ok(x.cmp(y)),
        (Value::Str(x), Value::Str(y)) => Ok(x.cmp(y)),
        (Value::Bytes(x), Value::Bytes(y)) => Ok(x.as_slice().cmp(y.as_slice())),
        (Value::Ref(x), Value::Ref(y)) => Ok(x.cmp(y)),
        (Value::Tuple(xs), Value::Tuple(ys)) | (Value::List(xs), Value::List(ys)) => {
            lexicographic(registry, xs, ys)
        }
        (Value::Map(xs), Value::Map(ys)) => maps(registry, xs, ys),
        _ => unreachable!("same_kind invoked with differing builtin kinds"),
    }
}

/// Elementwise comparison; the first non-equal element decides, then the
/// shorter sequence sorts first.
fn lexicographic(registry: &Registry, xs: &[Value], ys: &[Value]) -> Result<Ordering, Error> {
    for (x, y) in xs.iter().zip(ys.iter()) {
        match compare_in(registry, x, y)? {
            Ordering::Equal => continue,
            ord => return Ok(ord),
        }
    }
    Ok(xs.len().cmp(&ys.len()))
}

/// Maps compare by size first, then entrywise (key, then value) in stored
/// order.
fn maps(
    registry: &Registry,
    xs: &[(Value, Value)],
    ys: &[(Value, Value)],
) -> Result<Ordering, Error> {
    match xs.len().cmp(&ys.len()) {
        Ordering::Equal => {}
        ord => return Ok(ord),
    }
    for ((xk, xv), (yk, yv)) in xs.iter().zip(ys.iter()) {
        match compare_in(registry, xk, yk)? {
            Ordering::Equal => {}
            ord => return Ok(ord),
        }
        match compare_in(registry, xv, yv)? {
            Ordering::Equal => {}
            ord => return Ok(ord),
        }
    }
    Ok(Ordering::Equal)
}
