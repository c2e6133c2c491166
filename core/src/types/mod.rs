pub mod pair;
pub mod tag;
pub use pair::PairKey;
pub use tag::{Builtin, TypeTag};

#[cfg(test)]
mod tag_test;
