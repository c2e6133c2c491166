//! Dynamic values.
//!
//! [`Value`] is the owned, runtime representation every comparison operates
//! on. Builtins cover the platform kinds; anything else is wrapped as a
//! [`CustomValue`] and compared through the registry.

use ecow::{EcoString, EcoVec};

use crate::types::tag::{Builtin, TypeTag};
use crate::values::custom::{CustomType, CustomValue};

#[derive(Debug, Clone)]
pub enum Value {
    Int(i64),
    Float(f64),
    Bool(bool),
    Symbol(EcoString),
    Str(EcoString),
    Bytes(EcoVec<u8>),
    Tuple(Vec<Value>),
    List(Vec<Value>),
    /// Association list; entries keep insertion order.
    Map(Vec<(Value, Value)>),
    /// Opaque handle, identified (and ordered) by id.
    Ref(u64),
    Custom(CustomValue),
}

impl Value {
    // ============================================================================
    // Construction
    // ============================================================================

    pub fn symbol(name: impl Into<EcoString>) -> Self {
        Value::Symbol(name.into())
    }

    pub fn str(value: impl Into<EcoString>) -> Self {
        Value::Str(value.into())
    }

    pub fn bytes(value: &[u8]) -> Self {
        Value::Bytes(EcoVec::from(value))
    }

    /// Wrap a user-defined type into a value. The value's tag is derived
    /// from the type's declared name.
    pub fn custom<T: CustomType>(value: T) -> Self {
        Value::Custom(CustomValue::new(value))
    }

    // ============================================================================
    // Dynamic extraction
    // ============================================================================

    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_float(&self) -> Option<f64> {
        match self {
            Value::Float(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            Value::List(v) => Some(v),
            _ => None,
        }
    }

    /// Borrow the payload of a custom value as `T`.
    pub fn downcast_ref<T: CustomType>(&self) -> Option<&T> {
        match self {
            Value::Custom(v) => v.downcast_ref::<T>(),
            _ => None,
        }
    }

    // ============================================================================
    // Type identity
    // ============================================================================

    /// The tag this value is dispatched on.
    pub fn tag(&self) -> TypeTag {
        match self {
            Value::Int(_) => TypeTag::Builtin(Builtin::Int),
            Value::Float(_) => TypeTag::Builtin(Builtin::Float),
            Value::Bool(_) => TypeTag::Builtin(Builtin::Bool),
            Value::Symbol(_) => TypeTag::Builtin(Builtin::Symbol),
            Value::Str(_) => TypeTag::Builtin(Builtin::Str),
            Value::Bytes(_) => TypeTag::Builtin(Builtin::Bytes),
            Value::Tuple(_) => TypeTag::Builtin(Builtin::Tuple),
            Value::List(_) => TypeTag::Builtin(Builtin::List),
            Value::Map(_) => TypeTag::Builtin(Builtin::Map),
            Value::Ref(_) => TypeTag::Builtin(Builtin::Ref),
            Value::Custom(v) => TypeTag::custom(v.type_name()),
        }
    }

    /// Identity fast path: "same value", not "equal by comparator".
    ///
    /// Scalars and strings compare by content (floats bitwise, so NaN is
    /// identical to itself), customs and refs by instance. Containers
    /// always return false and take the structural path instead; this is
    /// purely an optimization and never changes an outcome.
    pub(crate) fn same_as(&self, other: &Value) -> bool {
        match (self, other) {
            (Value::Int(a), Value::Int(b)) => a == b,
            (Value::Float(a), Value::Float(b)) => a.to_bits() == b.to_bits(),
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Symbol(a), Value::Symbol(b)) => a == b,
            (Value::Str(a), Value::Str(b)) => a == b,
            (Value::Bytes(a), Value::Bytes(b)) => a == b,
            (Value::Ref(a), Value::Ref(b)) => a == b,
            (Value::Custom(a), Value::Custom(b)) => a.ptr_eq(b),
            _ => false,
        }
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Int(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Float(v)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::str(v)
    }
}

impl core::fmt::Display for Value {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Value::Int(v) => write!(f, "{}", v),
            Value::Float(v) => format_float(f, *v),
            Value::Bool(v) => write!(f, "{}", v),
            Value::Symbol(v) => write!(f, "{}", v),
            Value::Str(v) => write!(f, "{:?}", v.as_str()),
            Value::Bytes(v) => {
                write!(f, "b\"")?;
                for byte in v.iter() {
                    write!(f, "\\x{:02x}", byte)?;
                }
                write!(f, "\"")
            }
            Value::Tuple(items) => {
                write!(f, "(")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", item)?;
                }
                write!(f, ")")
            }
            Value::List(items) => {
                write!(f, "[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", item)?;
                }
                write!(f, "]")
            }
            Value::Map(entries) => {
                write!(f, "{{")?;
                for (i, (key, val)) in entries.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}: {}", key, val)?;
                }
                write!(f, "}}")
            }
            Value::Ref(id) => write!(f, "Ref({})", id),
            Value::Custom(v) => write!(f, "{}(..)", v.type_name()),
        }
    }
}

/// Format a float ensuring it always reads as a float, never as an int.
fn format_float(f: &mut core::fmt::Formatter<'_>, value: f64) -> core::fmt::Result {
    if value.is_nan() {
        write!(f, "nan")
    } else if value.is_infinite() {
        if value.is_sign_positive() {
            write!(f, "inf")
        } else {
            write!(f, "-inf")
        }
    } else {
        let s = value.to_string();
        if s.contains('.') || s.contains('e') || s.contains('E') {
            write!(f, "{}", s)
        } else {
            write!(f, "{}.0", s)
        }
    }
}
