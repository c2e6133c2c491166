//! The comparator registry.
//!
//! A process-wide mapping from canonical [`PairKey`]s to comparator
//! functions. Registration is expected during an initialization phase;
//! lookups are pure, read-mostly traffic afterwards. A reader-writer lock
//! keeps the two safe to overlap.
//!
//! Duplicate policy: re-registering a pair replaces the previous
//! comparator and emits a `tracing` warning. Failing hard would rule out
//! re-initialization, and replacing silently would hide authoring
//! mistakes.

pub mod define;
pub use define::{define, define_in};

use std::cmp::Ordering;
use std::sync::{Arc, RwLock};

use hashbrown::HashMap;
use lazy_static::lazy_static;

use crate::errors::Error;
use crate::types::pair::PairKey;
use crate::types::tag::TypeTag;
use crate::values::value::Value;


/// A stored comparator, invoked with values in canonical pair order.
///
/// User comparators are pure and infallible; the fallible signature exists
/// so the typed wrappers in [`define`] can surface payload mismatches.
pub type ComparatorFn = Arc<dyn Fn(&Value, &Value) -> Result<Ordering, Error> + Send + Sync>;

#[derive(Clone)]
struct Entry {
    /// The pair this comparator was registered for. Checked against the
    /// map key on every resolution.
    pair: PairKey,
    cmp: ComparatorFn,
}

/// Pair-keyed comparator storage.
pub struct Registry {
    entries: RwLock<HashMap<PairKey, Entry>>,
}

impl Registry {
    pub fn new() -> Self {
        Registry {
            entries: RwLock::new(HashMap::new()),
        }
    }

    /// Register a comparator for `(first, second)`.
    ///
    /// The pair must be supplied in canonical order; anything else fails
    /// with [`Error::InvalidRegistrationOrder`] naming the expected call.
    /// The comparator receives a value of `first`'s type on the left and
    /// one of `second`'s type on the right.
    ///
    /// This is the raw facility, useful for pairs involving builtin tags.
    /// For two user-defined types prefer [`define_in`], which derives the
    /// tags and downcasts the payloads for you.
    pub fn register<F>(&self, first: TypeTag, second: TypeTag, cmp: F) -> Result<(), Error>
    where
        F: Fn(&Value, &Value) -> Ordering + Send + Sync + 'static,
    {
        let pair = PairKey::new(first, second)?;
        self.bind(pair, Arc::new(move |a: &Value, b: &Value| Ok(cmp(a, b))));
        Ok(())
    }

    /// Insert an already-canonical entry. Callers have validated the pair.
    pub(crate) fn bind(&self, pair: PairKey, cmp: ComparatorFn) {
        let entry = Entry {
            pair: pair.clone(),
            cmp,
        };
        let mut entries = self.entries.write().expect("registry lock poisoned");
        if entries.insert(pair.clone(), entry).is_some() {
            tracing::warn!(pair = %pair, "replacing previously registered comparator");
        } else {
            tracing::debug!(pair = %pair, "registered comparator");
        }
    }

    /// Resolve the comparator for the unordered pair `{a, b}`.
    ///
    /// Returns the comparator plus whether the caller's order was flipped
    /// relative to canonical order; a flipped caller must invoke the
    /// comparator with its arguments swapped and invert the result.
    ///
    /// Pure read. Fails with [`Error::NoComparatorFound`] (tags named in
    /// canonical order) when no entry exists, and with
    /// [`Error::MismatchedComparatorIdentity`] if a resolved entry does
    /// not belong to the key it was found under.
    pub fn lookup(&self, a: &TypeTag, b: &TypeTag) -> Result<(ComparatorFn, bool), Error> {
        let (key, flipped) = PairKey::canonical(a.clone(), b.clone());
        let entries = self.entries.read().expect("registry lock poisoned");
        match entries.get(&key) {
            Some(entry) => {
                if entry.pair != key {
                    return Err(Error::MismatchedComparatorIdentity {
                        expected: key,
                        found: entry.pair.clone(),
                    });
                }
                Ok((entry.cmp.clone(), flipped))
            }
            None => Err(Error::NoComparatorFound {
                first: key.first().clone(),
                second: key.second().clone(),
            }),
        }
    }

    /// Whether a comparator is registered for the unordered pair `{a, b}`.
    pub fn contains(&self, a: &TypeTag, b: &TypeTag) -> bool {
        let (key, _) = PairKey::canonical(a.clone(), b.clone());
        self.entries
            .read()
            .expect("registry lock poisoned")
            .contains_key(&key)
    }

    pub fn len(&self) -> usize {
        self.entries.read().expect("registry lock poisoned").len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for Registry {
    fn default() -> Self {
        Registry::new()
    }
}

lazy_static! {
    static ref GLOBAL: Registry = Registry::new();
}

/// The process-wide registry used by [`compare`](crate::compare()) and
/// friends. Populate it at program initialization.
pub fn global() -> &'static Registry {
    &GLOBAL
}
