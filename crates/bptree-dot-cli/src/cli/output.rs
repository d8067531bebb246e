//! Stderr status output with optional color, and stdout/file writing.

use anyhow::{Context, Result};
use bptree_dot::GraphSummary;
use std::io::{IsTerminal, Write};
use std::path::Path;

use super::Cli;

/// Output settings resolved once from flags and the environment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutputConfig {
    pub quiet: bool,
    pub verbose: bool,
    pub json: bool,
    pub color: bool,
}

impl OutputConfig {
    pub fn from_cli(cli: &Cli) -> Self {
        Self {
            quiet: cli.quiet,
            verbose: cli.verbose,
            json: cli.json,
            color: !cli.no_color && color_enabled(),
        }
    }
}

/// Check if color output is enabled for stderr.
pub fn color_enabled() -> bool {
    // Respect NO_COLOR env (https://no-color.org/)
    if std::env::var_os("NO_COLOR").is_some() {
        return false;
    }
    std::io::stderr().is_terminal()
}

// ANSI color codes
const GREEN: &str = "\x1b[32m";
const RED: &str = "\x1b[31m";
const CYAN: &str = "\x1b[36m";
const YELLOW: &str = "\x1b[33m";
const BOLD: &str = "\x1b[1m";
const RESET: &str = "\x1b[0m";

/// Colored string builder.
pub struct Styled {
    use_color: bool,
}

impl Styled {
    pub fn new(use_color: bool) -> Self {
        Self { use_color }
    }

    /// Green checkmark symbol.
    pub fn ok_sym(&self) -> String {
        if self.use_color {
            format!("{GREEN}\u{2713}{RESET}")
        } else {
            "OK".to_string()
        }
    }

    /// Red error marker.
    pub fn fail_sym(&self) -> String {
        if self.use_color {
            format!("{RED}{BOLD}error:{RESET}")
        } else {
            "error:".to_string()
        }
    }

    pub fn cyan(&self, s: &str) -> String {
        self.paint(CYAN, s)
    }

    pub fn yellow(&self, s: &str) -> String {
        self.paint(YELLOW, s)
    }

    pub fn bold(&self, s: &str) -> String {
        self.paint(BOLD, s)
    }

    fn paint(&self, code: &str, s: &str) -> String {
        if self.use_color {
            format!("{code}{s}{RESET}")
        } else {
            s.to_string()
        }
    }
}

/// Print a one-line generation summary to stderr.
pub fn print_summary(s: &Styled, summary: &GraphSummary, destination: &str, elapsed_ms: u128) {
    eprintln!(
        "  {} Rendered {} blocks, {} parent edges, {} cross edges to {} in {}",
        s.ok_sym(),
        s.bold(&summary.blocks.to_string()),
        summary.parent_child_edges,
        summary.cross_edges,
        s.cyan(destination),
        s.yellow(&format!("{elapsed_ms}ms")),
    );
}

/// Human-readable name of where output goes.
pub fn destination_name(path: Option<&Path>) -> String {
    match path {
        Some(p) if p != Path::new("-") => p.display().to_string(),
        _ => "stdout".to_string(),
    }
}

/// Write `text` plus a trailing newline to `path`, or to stdout when absent.
pub fn write_text(path: Option<&Path>, text: &str) -> Result<()> {
    match path {
        Some(p) if p != Path::new("-") => std::fs::write(p, format!("{text}\n"))
            .with_context(|| format!("failed to write {}", p.display())),
        _ => {
            let mut stdout = std::io::stdout().lock();
            writeln!(stdout, "{text}").context("failed to write to stdout")?;
            stdout.flush().context("failed to write to stdout")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_styles() {
        let s = Styled::new(false);
        assert_eq!(s.ok_sym(), "OK");
        assert_eq!(s.fail_sym(), "error:");
        assert_eq!(s.bold("x"), "x");
    }

    #[test]
    fn test_colored_styles() {
        let s = Styled::new(true);
        assert_eq!(s.cyan("x"), "\x1b[36mx\x1b[0m");
    }

    #[test]
    fn test_destination_name() {
        assert_eq!(destination_name(None), "stdout");
        assert_eq!(destination_name(Some(Path::new("-"))), "stdout");
        assert_eq!(destination_name(Some(Path::new("tree.dot"))), "tree.dot");
    }

    #[test]
    fn test_write_text_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.dot");
        write_text(Some(path.as_path()), "digraph G {}").unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "digraph G {}\n");
    }
}
