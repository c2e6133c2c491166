//! User-defined value payloads.

use core::any::Any;
use std::sync::Arc;

use ecow::EcoString;

/// A user-defined type that can be wrapped into a [`Value`](crate::Value).
///
/// The declared name is the type's identity for comparator lookup, so it
/// must be unique within a process and stable for the process lifetime.
pub trait CustomType: Any + Send + Sync {
    /// Declared name of the type. Customs are canonically ordered by this
    /// name, alphabetically.
    fn type_name() -> &'static str
    where
        Self: Sized;
}

/// A value of a user-defined type: the declared name plus an opaque,
/// shared payload. Cloning shares the payload.
#[derive(Clone)]
pub struct CustomValue {
    name: EcoString,
    rust_name: &'static str,
    payload: Arc<dyn Any + Send + Sync>,
}

impl CustomValue {
    pub fn new<T: CustomType>(value: T) -> Self {
        CustomValue {
            name: T::type_name().into(),
            rust_name: core::any::type_name::<T>(),
            payload: Arc::new(value),
        }
    }

    /// Declared name of the wrapped type.
    pub fn type_name(&self) -> &str {
        &self.name
    }

    /// Path of the concrete Rust type behind the payload. Diagnostic
    /// only: two types declaring the same name still differ here.
    pub(crate) fn rust_name(&self) -> &'static str {
        self.rust_name
    }

    /// Borrow the payload as `T`, if that is what it holds.
    pub fn downcast_ref<T: CustomType>(&self) -> Option<&T> {
        self.payload.downcast_ref::<T>()
    }

    /// Same-instance check (shared payload), used by the identity fast
    /// path. Two structurally equal but distinct payloads return false.
    pub(crate) fn ptr_eq(&self, other: &CustomValue) -> bool {
        Arc::ptr_eq(&self.payload, &other.payload)
    }
}

impl core::fmt::Debug for CustomValue {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "CustomValue<{}>", self.name)
    }
}
