//! Error types for bptree-dot.

use crate::tree::BlockAddress;
use thiserror::Error;

/// Result type alias using TreeError.
pub type Result<T> = std::result::Result<T, TreeError>;

/// Errors raised while building or querying a tree.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TreeError {
    #[error("Invalid tree index {address}")]
    InvalidIndex { address: BlockAddress },

    #[error("Out of range child number {child} (blocks have {children_per_block} children)")]
    ChildOutOfRange {
        child: usize,
        children_per_block: usize,
    },

    #[error("keys_per_block must be between 1 and {max}, got {keys_per_block}")]
    InvalidKeysPerBlock { keys_per_block: usize, max: usize },

    #[error(
        "Block {address} lists {children} children, but a block holds at most {children_per_block}"
    )]
    TooManyChildren {
        address: BlockAddress,
        children: usize,
        children_per_block: usize,
    },

    #[error("Malformed block at {address}: {reason}")]
    MalformedBlock {
        address: BlockAddress,
        reason: String,
    },
}
