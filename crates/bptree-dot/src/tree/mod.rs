//! Addressable, sparse B+ tree model.

pub mod address;
pub mod model;

pub use address::BlockAddress;
pub use model::{BPlusTree, MAX_KEYS_PER_BLOCK};
