// src/directive.rs

//! Directive extraction.
//!
//! A cell source may embed shell commands, one per line, marked by a fixed
//! three-character prefix. Extraction is a pure scan over the text: it never
//! fails and has no side effects, so the same source can be scanned again at
//! any time (e.g. once for `--dry-run` and once for execution).

use std::fmt;

/// Marker that opens a directive line. Must be the first three characters of
/// the line; indented markers are ignored.
pub const MARKER: &str = "//%";

/// A single shell command extracted from one source line.
///
/// Directives are not unique and carry no identity beyond their position:
/// extraction order is execution order. The command may be empty (a line that
/// is only the marker); the shell resolves an empty command as a no-op.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Directive {
    command: String,
}

impl Directive {
    pub fn new(command: impl Into<String>) -> Self {
        Self {
            command: command.into(),
        }
    }

    /// The literal command string passed to the shell.
    pub fn command(&self) -> &str {
        &self.command
    }
}

impl fmt::Display for Directive {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.command)
    }
}

/// Scan `source` line by line and yield every directive in source order.
///
/// A line contributes iff it starts with [`MARKER`]; the marker and any
/// surrounding whitespace in the remainder are stripped. All other lines
/// contribute nothing.
pub fn extract(source: &str) -> impl Iterator<Item = Directive> + '_ {
    source.lines().filter_map(|line| {
        line.strip_prefix(MARKER)
            .map(|rest| Directive::new(rest.trim()))
    })
}
