//! Ordo core: cross-type ordering for dynamic values.
//!
//! Given two values, possibly of different types, [`compare`] produces a
//! three-way [`Ordering`](std::cmp::Ordering) by locating the comparator
//! registered for that unordered pair of types. Because ordering is
//! antisymmetric, one comparator per pair suffices: the dispatcher
//! canonicalizes the pair and inverts the result when the caller supplies
//! the types the other way around.
//!
//! Numeric values (int/float in any mix) and two values of the same
//! builtin kind compare without any registration; every other pair needs
//! a comparator, and comparing without one fails with
//! [`Error::NoComparatorFound`].
//!
//! # Example
//!
//! ```
//! use std::cmp::Ordering;
//! use ordo_core::{CustomType, Error, Registry, Value, compare_in, define_in};
//!
//! struct Bar { num: f64 }
//! struct Foo { int: i64 }
//! impl CustomType for Bar { fn type_name() -> &'static str { "Bar" } }
//! impl CustomType for Foo { fn type_name() -> &'static str { "Foo" } }
//!
//! fn main() -> Result<(), Error> {
//!     let reg = Registry::new();
//!     define_in::<Bar, Foo, _>(&reg, |bar, foo| {
//!         bar.num.total_cmp(&(foo.int as f64))
//!     })?;
//!
//!     let bar = Value::custom(Bar { num: 5.0 });
//!     let foo = Value::custom(Foo { int: 3 });
//!     assert_eq!(compare_in(&reg, &bar, &foo)?, Ordering::Greater);
//!     assert_eq!(compare_in(&reg, &foo, &bar)?, Ordering::Less);
//!     Ok(())
//! }
//! ```

pub mod compare;
pub mod errors;
pub mod registry;
pub mod types;
pub mod values;

pub use compare::{
    compare, compare_in, eq, eq_in, gt, gt_in, gte, gte_in, lt, lt_in, lte, lte_in, max_in,
    min_in, sort, sort_in,
};
pub use errors::Error;
pub use registry::{ComparatorFn, Registry, define, define_in, global};
pub use types::{Builtin, PairKey, TypeTag};
pub use values::{CustomType, CustomValue, Value};
