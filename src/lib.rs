//! Ordo - cross-type ordering for dynamic values
//!
//! # Overview
//!
//! Ordo compares values of *different* types. You register one comparator
//! per unordered pair of types; the dispatcher canonicalizes the pair,
//! invokes the comparator in canonical order, and inverts the result when
//! you call it the other way around. Numbers (int/float in any mix) and
//! same-kind builtin values compare out of the box.
//!
//! # Quick Start
//!
//! ```
//! use std::cmp::Ordering;
//! use ordo::{CustomType, Error, Value, compare, define, sort};
//!
//! struct Bar { num: f64 }
//! struct Foo { int: i64 }
//! impl CustomType for Bar { fn type_name() -> &'static str { "Bar" } }
//! impl CustomType for Foo { fn type_name() -> &'static str { "Foo" } }
//!
//! fn main() -> Result<(), Error> {
//!     // One registration covers both call directions. Pairs are
//!     // registered in canonical (alphabetical) order: Bar before Foo.
//!     define::<Bar, Foo, _>(|bar, foo| bar.num.total_cmp(&(foo.int as f64)))?;
//!
//!     let bar = Value::custom(Bar { num: 5.0 });
//!     let foo = Value::custom(Foo { int: 3 });
//!     assert_eq!(compare(&bar, &foo)?, Ordering::Greater);
//!     assert_eq!(compare(&foo, &bar)?, Ordering::Less);
//!
//!     // Mixed numerics never need a registration.
//!     assert_eq!(compare(&Value::Int(3), &Value::Float(3.0))?, Ordering::Equal);
//!
//!     // Stable sort over anything pairwise comparable.
//!     let sorted = sort(vec![Value::Float(2.5), Value::Int(1), Value::Int(3)])?;
//!     assert_eq!(sorted[0].as_int(), Some(1));
//!     Ok(())
//! }
//! ```
//!
//! # Failure modes
//!
//! Comparing two types with no registered comparator (and no builtin fast
//! path) fails with [`Error::NoComparatorFound`]; registering a pair in
//! the wrong order fails immediately with
//! [`Error::InvalidRegistrationOrder`]. Neither is ever swallowed.
//!
//! Isolated registries ([`Registry`], `*_in` functions) are available for
//! hosts that don't want process-wide state.

pub use ordo_core::{errors, registry, types, values};

pub use ordo_core::{
    Builtin, ComparatorFn, CustomType, CustomValue, Error, PairKey, Registry, TypeTag, Value,
    compare, compare_in, define, define_in, eq, eq_in, global, gt, gt_in, gte, gte_in, lt,
    lt_in, lte, lte_in, max_in, min_in, sort, sort_in,
};
