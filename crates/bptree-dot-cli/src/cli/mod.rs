//! Argument definitions and command implementations for the `bptree-dot` binary.

pub mod output;
pub mod render_cmd;

use bptree_dot::options::DEFAULT_PLACEHOLDER;
use clap::Parser;
use std::path::PathBuf;

/// Creates a dot language graph for a B+ tree read from a YAML data file.
#[derive(Debug, Parser)]
#[command(name = "bptree-dot", version)]
#[command(
    about = "Creates a dot language graph for a B+ tree read from a YAML data file.",
    long_about = "Creates a dot language graph for a B+ tree read from a YAML data file.\n\n\
        The file holds `keys_per_block` and a nested `tree` of blocks. A block is either \
        a list of keys or a mapping with `keys` and `children`; a `null` child marks a \
        block that was left out of the drawing. See the demos/ directory for examples."
)]
pub struct Cli {
    /// Read data from a file instead of stdin (`-` also means stdin)
    #[arg(value_name = "DATAFILE")]
    pub datafile: Option<PathBuf>,

    /// Write the document to a file instead of stdout
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Text drawn in unused key slots
    #[arg(long, value_name = "TEXT", default_value = DEFAULT_PLACEHOLDER)]
    pub placeholder: String,

    /// Escape `&`, `<`, `>` and `"` in keys instead of treating them as label markup
    #[arg(long)]
    pub escape_keys: bool,

    /// Print a JSON object with graph counts and the document
    #[arg(long)]
    pub json: bool,

    /// Only report errors
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Print a summary and debug logging to stderr
    #[arg(short, long)]
    pub verbose: bool,

    /// Disable colored stderr output
    #[arg(long)]
    pub no_color: bool,
}
