//! Canonical pair keys.

use core::fmt::Display;

use crate::errors::Error;
use crate::types::tag::TypeTag;

/// The canonical address of a comparator: an ordered pair of type tags
/// with the invariant `first <= second` under [`TypeTag`] ordering.
///
/// Every unordered pair of types maps to exactly one `PairKey`, so only
/// one comparator direction is ever stored; the dispatcher inverts the
/// result when a caller supplies the types the other way around.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PairKey {
    first: TypeTag,
    second: TypeTag,
}

impl PairKey {
    /// Builds a key from a pair that must already be canonical.
    ///
    /// Fails with [`Error::InvalidRegistrationOrder`] otherwise. Used on
    /// the registration path, where a wrong order is an authoring bug.
    pub fn new(first: TypeTag, second: TypeTag) -> Result<Self, Error> {
        if first > second {
            return Err(Error::InvalidRegistrationOrder { first, second });
        }
        Ok(PairKey { first, second })
    }

    /// Canonicalizes an arbitrary pair of tags.
    ///
    /// Returns the key plus whether the input order was flipped to reach
    /// it. The flag tells the dispatcher to invert the comparator result.
    pub fn canonical(a: TypeTag, b: TypeTag) -> (Self, bool) {
        if a <= b {
            (PairKey { first: a, second: b }, false)
        } else {
            (PairKey { first: b, second: a }, true)
        }
    }

    pub fn first(&self) -> &TypeTag {
        &self.first
    }

    pub fn second(&self) -> &TypeTag {
        &self.second
    }
}

impl Display for PairKey {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}, {}", self.first, self.second)
    }
}
