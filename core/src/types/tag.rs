//! Type tags and their canonical order.
//!
//! Every value carries exactly one [`TypeTag`]. Builtin kinds have a fixed
//! rank; user-defined types are tagged by their declared name. The derived
//! `Ord` on [`TypeTag`] is the canonical order used to address comparators:
//! builtins sort before customs, builtins by rank, customs alphabetically.
//! The order is a strict total order and stable for the process lifetime.

use core::fmt::Display;

use ecow::EcoString;

/// Builtin value kinds.
///
/// The discriminants fix the canonical rank of each kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Builtin {
    Int = 0,
    Float = 1,
    Bool = 2,
    Symbol = 3,
    Str = 4,
    Bytes = 5,
    Tuple = 6,
    List = 7,
    Map = 8,
    // Opaque handles (channels, external resources), compared by id.
    Ref = 9,
}

impl Builtin {
    pub fn name(self) -> &'static str {
        match self {
            Builtin::Int => "Int",
            Builtin::Float => "Float",
            Builtin::Bool => "Bool",
            Builtin::Symbol => "Symbol",
            Builtin::Str => "Str",
            Builtin::Bytes => "Bytes",
            Builtin::Tuple => "Tuple",
            Builtin::List => "List",
            Builtin::Map => "Map",
            Builtin::Ref => "Ref",
        }
    }

    /// Int and Float share a numeric fast path and never need a registered
    /// comparator between themselves.
    pub fn is_numeric(self) -> bool {
        matches!(self, Builtin::Int | Builtin::Float)
    }
}

impl Display for Builtin {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.name())
    }
}

/// Totally-ordered identifier for a type.
///
/// `Builtin` sorts before `Custom` by variant order, so the derived `Ord`
/// is exactly the canonical order described in the module docs.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum TypeTag {
    Builtin(Builtin),
    Custom(EcoString),
}

impl TypeTag {
    /// Tag for a user-defined type with the given declared name.
    pub fn custom(name: impl Into<EcoString>) -> Self {
        TypeTag::Custom(name.into())
    }

    pub fn name(&self) -> &str {
        match self {
            TypeTag::Builtin(kind) => kind.name(),
            TypeTag::Custom(name) => name,
        }
    }

    pub fn is_builtin(&self) -> bool {
        matches!(self, TypeTag::Builtin(_))
    }

    pub fn is_numeric(&self) -> bool {
        matches!(self, TypeTag::Builtin(kind) if kind.is_numeric())
    }
}

impl From<Builtin> for TypeTag {
    fn from(kind: Builtin) -> Self {
        TypeTag::Builtin(kind)
    }
}

impl Display for TypeTag {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.name())
    }
}
