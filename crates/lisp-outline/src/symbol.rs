//! Symbol model shared by the detectors and the outline builder.
//!
//! Every value here is built once per parse and never patched afterwards:
//! a node's line range is known before its children are computed.

use std::fmt;

/// Kind of an outline entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum SymbolKind {
    /// A named block introduced by a three-line header comment.
    Section,
    /// A `defun` form.
    Function,
    /// A `defun` whose name carries the `c:` prefix.
    Command,
}

impl SymbolKind {
    /// Display label, as shown next to the symbol name in an outline panel.
    pub fn label(self) -> &'static str {
        match self {
            SymbolKind::Section => "Section",
            SymbolKind::Function => "Function",
            SymbolKind::Command => "Command",
        }
    }

    /// Parse a kind from a case-insensitive name (`"section"`, `"function"`, `"command"`).
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "section" => Some(SymbolKind::Section),
            "function" => Some(SymbolKind::Function),
            "command" => Some(SymbolKind::Command),
            _ => None,
        }
    }
}

impl fmt::Display for SymbolKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A named line range found by the section detector.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Section {
    /// Header text with the comment marker stripped.
    pub name: String,
    /// First header line.
    pub start: usize,
    /// Line where the next section begins, or the line count (exclusive).
    pub end: usize,
}

/// One node of the outline tree.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct SymbolNode {
    pub name: String,
    pub kind: SymbolKind,
    /// Zero-based first line of the symbol.
    pub start_line: usize,
    /// Zero-based last line of the symbol (inclusive).
    pub end_line: usize,
    /// Character length of the last line, so hosts can build a full range.
    pub end_column: usize,
    /// Nested symbols, in source order.
    pub children: Vec<SymbolNode>,
}

impl SymbolNode {
    /// Whether `line` falls inside this node's inclusive range.
    pub fn contains_line(&self, line: usize) -> bool {
        self.start_line <= line && line <= self.end_line
    }

    /// Total number of nodes in this subtree, including `self`.
    pub fn count(&self) -> usize {
        1 + self.children.iter().map(SymbolNode::count).sum::<usize>()
    }
}

/// Character length of `lines[index]`, or 0 when out of range.
pub(crate) fn line_width<S: AsRef<str>>(lines: &[S], index: usize) -> usize {
    lines
        .get(index)
        .map_or(0, |line| line.as_ref().chars().count())
}
