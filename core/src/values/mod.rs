pub mod custom;
pub mod value;
pub use custom::{CustomType, CustomValue};
pub use value::Value;
