//! Dispatch and the relational API.
//!
//! [`compare_in`] resolves which comparator applies to a pair of values
//! and invokes it, inverting the result when the caller's argument order
//! is non-canonical. Everything else here (the predicates, `min`/`max`,
//! the sort) is a projection of that one function.

mod builtin;

use std::cmp::Ordering;

use crate::errors::Error;
use crate::registry::{Registry, global};
use crate::values::value::Value;

#[cfg(test)]
mod compare_test;

/// Three-way comparison of two dynamic values against `registry`.
///
/// Resolution order:
/// 1. identity fast path (same value, an optimization only);
/// 2. mixed or same-kind numeric values compare by numeric value;
/// 3. two values of the same builtin kind compare by the platform
///    ordering for that kind;
/// 4. anything else resolves through the registry, invoking the stored
///    comparator in canonical order and inverting on a flipped call.
///
/// Fails with [`Error::NoComparatorFound`] when step 4 finds nothing;
/// there is no fallback.
pub fn compare_in(registry: &Registry, a: &Value, b: &Value) -> Result<Ordering, Error> {
    if a.same_as(b) {
        return Ok(Ordering::Equal);
    }
    if let Some(ord) = builtin::numeric(a, b) {
        return Ok(ord);
    }

    let tag_a = a.tag();
    let tag_b = b.tag();
    if tag_a == tag_b && tag_a.is_builtin() {
        return builtin::same_kind(registry, a, b);
    }

    let (cmp, flipped) = registry.lookup(&tag_a, &tag_b)?;
    if flipped {
        Ok(cmp(b, a)?.reverse())
    } else {
        cmp(a, b)
    }
}

/// [`compare_in`] against the [`global`] registry.
pub fn compare(a: &Value, b: &Value) -> Result<Ordering, Error> {
    compare_in(global(), a, b)
}

// ============================================================================
// Derived predicates
// ============================================================================

pub fn lt_in(registry: &Registry, a: &Value, b: &Value) -> Result<bool, Error> {
    Ok(compare_in(registry, a, b)? == Ordering::Less)
}

pub fn lte_in(registry: &Registry, a: &Value, b: &Value) -> Result<bool, Error> {
    Ok(compare_in(registry, a, b)? != Ordering::Greater)
}

pub fn gt_in(registry: &Registry, a: &Value, b: &Value) -> Result<bool, Error> {
    Ok(compare_in(registry, a, b)? == Ordering::Greater)
}

pub fn gte_in(registry: &Registry, a: &Value, b: &Value) -> Result<bool, Error> {
    Ok(compare_in(registry, a, b)? != Ordering::Less)
}

pub fn eq_in(registry: &Registry, a: &Value, b: &Value) -> Result<bool, Error> {
    Ok(compare_in(registry, a, b)? == Ordering::Equal)
}

pub fn lt(a: &Value, b: &Value) -> Result<bool, Error> {
    lt_in(global(), a, b)
}

pub fn lte(a: &Value, b: &Value) -> Result<bool, Error> {
    lte_in(global(), a, b)
}

pub fn gt(a: &Value, b: &Value) -> Result<bool, Error> {
    gt_in(global(), a, b)
}

pub fn gte(a: &Value, b: &Value) -> Result<bool, Error> {
    gte_in(global(), a, b)
}

pub fn eq(a: &Value, b: &Value) -> Result<bool, Error> {
    eq_in(global(), a, b)
}

// ============================================================================
// min / max
// ============================================================================

/// The smaller of two values; `a` wins ties.
pub fn min_in<'v>(registry: &Registry, a: &'v Value, b: &'v Value) -> Result<&'v Value, Error> {
    match compare_in(registry, a, b)? {
        Ordering::Greater => Ok(b),
        _ => Ok(a),
    }
}

/// The larger of two values; `a` wins ties.
pub fn max_in<'v>(registry: &Registry, a: &'v Value, b: &'v Value) -> Result<&'v Value, Error> {
    match compare_in(registry, a, b)? {
        Ordering::Less => Ok(b),
        _ => Ok(a),
    }
}

// ============================================================================
// Sorting
// ============================================================================

/// Stable sort of a sequence under [`compare_in`].
///
/// Top-down merge sort; equal elements keep their input order. The first
/// comparison failure aborts the sort and propagates unchanged.
pub fn sort_in(registry: &Registry, mut values: Vec<Value>) -> Result<Vec<Value>, Error> {
    if values.len() <= 1 {
        return Ok(values);
    }
    let right = values.split_off(values.len() / 2);
    let left = sort_in(registry, values)?;
    let right = sort_in(registry, right)?;
    merge(registry, left, right)
}

/// [`sort_in`] against the [`global`] registry.
pub fn sort(values: Vec<Value>) -> Result<Vec<Value>, Error> {
    sort_in(global(), values)
}

fn merge(registry: &Registry, left: Vec<Value>, right: Vec<Value>) -> Result<Vec<Value>, Error> {
    let mut merged = Vec::with_capacity(left.len() + right.len());
    let mut left = left.into_iter();
    let mut right = right.into_iter();
    let mut pending_left = left.next();
    let mut pending_right = right.next();
    loop {
        match (pending_left.take(), pending_right.take()) {
            (Some(l), Some(r)) => {
                // The right element wins only when strictly smaller,
                // which keeps the sort stable.
                if compare_in(registry, &r, &l)? == Ordering::Less {
                    merged.push(r);
                    pending_left = Some(l);
                    pending_right = right.next();
                } else {
                    merged.push(l);
                    pending_left = left.next();
                    pending_right = Some(r);
                }
            }
            (Some(l), None) => {
                merged.push(l);
                merged.extend(left);
                break;
            }
            (None, Some(r)) => {
                merged.push(r);
                merged.extend(right);
                break;
            }
            (None, None) => break,
        }
    }
    Ok(merged)
}
