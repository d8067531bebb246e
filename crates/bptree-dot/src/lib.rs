//! Core library for bptree-dot.
//!
//! Turns a declarative, possibly partial B+ tree description into a Graphviz
//! DOT document. Blocks are identified purely by their path from the root
//! ([`BlockAddress`]); every structural relationship is derived from that path.

pub mod description;
pub mod emit;
pub mod error;
pub mod options;
pub mod tree;

pub use description::{BlockDescription, BlockInput, Key, TreeDocument};
pub use emit::{generate_dot_graph, DotGraph, GraphSummary};
pub use error::{Result, TreeError};
pub use options::RenderOptions;
pub use tree::{BPlusTree, BlockAddress};
