//! `defun` block parser — finds declarations and their nesting.
//!
//! A declaration's extent is found by counting parentheses over whole
//! lines, starting at the declaration line, until the running depth drops
//! to zero. The body
//! (the rest of the declaration line after the name, and the following
//! lines up to the closing paren) is then parsed again for nested
//! declarations, so each node's range is fixed before its children exist.
//!
//! Counting is character-literal: parentheses inside strings and comments
//! are counted like any other.

use crate::symbol::{line_width, SymbolKind, SymbolNode};
use regex::Regex;
use std::sync::LazyLock;

// -- Regex patterns -----------------------------------------------------------

// `(defun name` or `(defun-q name`; group 1 is the name token
static RE_DEFUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\(defun(?:-q)?\s+([^\s()]+)").unwrap());

/// Name prefix marking a command callable from the drawing editor's prompt.
const COMMAND_PREFIX: &str = "c:";

// -- Public API ---------------------------------------------------------------

/// Parse declarations in the half-open line range `[start, end)`.
///
/// `end` is clamped to the document length; an empty or inverted range
/// yields no symbols.
pub fn parse<S: AsRef<str>>(lines: &[S], start: usize, end: usize) -> Vec<SymbolNode> {
    let end = end.min(lines.len());
    if start >= end {
        return Vec::new();
    }
    let span = Span {
        from: Cursor { line: start, column: 0 },
        to: Cursor { line: end, column: 0 },
    };
    parse_span(lines, span)
}

// -- Internals ----------------------------------------------------------------

/// A line index and a byte offset into that line.
#[derive(Debug, Clone, Copy)]
struct Cursor {
    line: usize,
    column: usize,
}

/// Text between two cursors; `to` is exclusive.
#[derive(Debug, Clone, Copy)]
struct Span {
    from: Cursor,
    to: Cursor,
}

impl Span {
    /// The part of line `i` inside the span, with its starting byte offset.
    fn line<'a, S: AsRef<str>>(&self, lines: &'a [S], i: usize) -> Option<(usize, &'a str)> {
        if i < self.from.line || i > self.to.line || i >= lines.len() {
            return None;
        }
        if i == self.to.line && self.to.column == 0 {
            return None;
        }
        let text = lines[i].as_ref();
        let start = if i == self.from.line { self.from.column } else { 0 };
        let stop = if i == self.to.line {
            self.to.column.min(text.len())
        } else {
            text.len()
        };
        Some((start, text.get(start..stop).unwrap_or("")))
    }

    /// Last line that holds any text of the span.
    fn last_line(&self) -> usize {
        if self.to.column > 0 {
            self.to.line
        } else {
            self.to.line.saturating_sub(1)
        }
    }
}

/// A `defun` match on a single line.
struct Declaration<'a> {
    /// Byte offset of the opening `(`.
    open: usize,
    /// Byte offset just past the name token.
    name_end: usize,
    name: &'a str,
}

/// Where a form closes. `column` is the byte offset just past the closing
/// paren, or `None` when the form was clamped to the end of its span.
struct Close {
    line: usize,
    column: Option<usize>,
}

fn parse_span<S: AsRef<str>>(lines: &[S], span: Span) -> Vec<SymbolNode> {
    let mut result = Vec::new();
    let mut line = span.from.line;

    while let Some((offset, text)) = span.line(lines, line) {
        let Some(decl) = find_declaration(text, offset) else {
            line += 1;
            continue;
        };

        let open = Cursor {
            line,
            column: decl.open,
        };
        let close = find_close(lines, open, span);
        let (name, kind) = classify(decl.name);

        // Body: rest of the declaration line after the name, through the close.
        let body = Span {
            from: Cursor {
                line,
                column: decl.name_end,
            },
            to: match close.column {
                Some(column) => Cursor {
                    line: close.line,
                    column,
                },
                None => Cursor {
                    line: close.line + 1,
                    column: 0,
                },
            },
        };
        let children = parse_span(lines, body);

        result.push(SymbolNode {
            name,
            kind,
            start_line: line,
            end_line: close.line,
            end_column: line_width(lines, close.line),
            children,
        });

        line = close.line + 1;
    }

    result
}

/// Find the first declaration in `text`, which starts at byte `offset` of its line.
fn find_declaration(text: &str, offset: usize) -> Option<Declaration<'_>> {
    let caps = RE_DEFUN.captures(text)?;
    let whole = caps.get(0)?;
    let name = caps.get(1)?;
    Some(Declaration {
        open: offset + whole.start(),
        name_end: offset + name.end(),
        name: name.as_str(),
    })
}

/// Locate the end of the form opened at `open`.
///
/// Depth starts at zero on the declaration line; every line of the span
/// from there on adds its `(` count and subtracts its `)` count, whole
/// lines included. The first line where the running depth is at or below
/// zero closes the form. Without one the form is clamped to the last line
/// of `span`.
fn find_close<S: AsRef<str>>(lines: &[S], open: Cursor, span: Span) -> Close {
    let last = span.last_line();
    let mut depth: i64 = 0;
    let mut line = open.line;

    while line <= last && line < lines.len() {
        let text = lines[line].as_ref();
        let after = depth + paren_balance(text);
        if after <= 0 {
            return Close {
                line,
                column: Some(body_end(text, open, line, depth)),
            };
        }
        depth = after;
        line += 1;
    }

    Close {
        line: last.max(open.line),
        column: None,
    }
}

/// Byte offset on the closing line where the form's body stops.
///
/// On the declaration line the body ends at the paren matching the
/// declaration's own `(`, or at the end of the line when that paren is
/// not on it.
fn body_end(text: &str, open: Cursor, line: usize, depth: i64) -> usize {
    if line == open.line {
        let rest = text.get(open.column..).unwrap_or("");
        open.column + close_offset(rest, 0)
    } else {
        close_offset(text, depth)
    }
}

/// Byte offset just past the `)` that brings `depth` down to zero.
fn close_offset(text: &str, mut depth: i64) -> usize {
    for (i, b) in text.bytes().enumerate() {
        match b {
            b'(' => depth += 1,
            b')' => {
                depth -= 1;
                if depth <= 0 {
                    return i + 1;
                }
            }
            _ => {}
        }
    }
    text.len()
}

/// `(` count minus `)` count.
fn paren_balance(text: &str) -> i64 {
    text.bytes().fold(0, |acc, b| match b {
        b'(' => acc + 1,
        b')' => acc - 1,
        _ => acc,
    })
}

/// Split a declared name into its display name and kind.
fn classify(raw: &str) -> (String, SymbolKind) {
    match raw.get(..COMMAND_PREFIX.len()) {
        Some(prefix)
            if prefix.eq_ignore_ascii_case(COMMAND_PREFIX) && raw.len() > COMMAND_PREFIX.len() =>
        {
            (raw[COMMAND_PREFIX.len()..].to_string(), SymbolKind::Command)
        }
        _ => (raw.to_string(), SymbolKind::Function),
    }
}
