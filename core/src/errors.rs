//! Ordering failures.
//!
//! Everything here is surfaced synchronously at the call that triggered it.
//! Nothing is logged-and-swallowed, and there is no retry semantics: a
//! missing comparator stays missing until something registers one.

use thiserror::Error;

use crate::types::{PairKey, TypeTag};

#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// A comparator was registered with its type pair in the wrong order.
    ///
    /// This is an authoring bug, reported eagerly at registration time.
    #[error(
        "comparator for ({first}, {second}) is not in canonical order; register ({second}, {first}) instead"
    )]
    InvalidRegistrationOrder { first: TypeTag, second: TypeTag },

    /// No comparator covers this pair of types and no builtin fast path
    /// applies. The tags are reported in canonical order.
    #[error("no comparator registered for types {first} and {second}")]
    NoComparatorFound { first: TypeTag, second: TypeTag },

    /// A resolved registry entry does not correspond to the pair it was
    /// stored under, or a typed comparator received a payload whose Rust
    /// type does not match its declared name. In the latter case `found`
    /// names the payloads' concrete Rust type paths, so two types
    /// colliding on one declared name are told apart. Indicates a
    /// programming error in the registration mechanism, not a user
    /// condition.
    #[error("comparator identity mismatch: expected ({expected}), found ({found})")]
    MismatchedComparatorIdentity { expected: PairKey, found: PairKey },
}
