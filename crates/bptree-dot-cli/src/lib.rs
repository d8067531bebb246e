//! Command-line front end for bptree-dot.
//!
//! The binary reads a YAML tree description, builds the tree model from the
//! `bptree-dot` library and writes the resulting DOT document.

pub mod cli;
pub mod input;
pub mod logging;
