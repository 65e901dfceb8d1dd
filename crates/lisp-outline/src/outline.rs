//! Outline builder — sections on top, `defun` trees inside them.

use crate::defun;
use crate::section;
use crate::symbol::{line_width, SymbolKind, SymbolNode};

/// Lines taken by a section header block.
const HEADER_LINES: usize = 3;

/// Build the outline of a document.
///
/// Declarations before the first section come first, then one `Section`
/// node per section holding the declarations of its body.
pub fn build<S: AsRef<str>>(lines: &[S]) -> Vec<SymbolNode> {
    let sections = section::scan(lines);
    let first_start = sections.first().map_or(lines.len(), |s| s.start);

    let mut outline = defun::parse(lines, 0, first_start);

    for sec in sections {
        let end_line = sec.end - 1;
        outline.push(SymbolNode {
            children: defun::parse(lines, sec.start + HEADER_LINES, sec.end),
            name: sec.name,
            kind: SymbolKind::Section,
            start_line: sec.start,
            end_line,
            end_column: line_width(lines, end_line),
        });
    }

    outline
}

/// Build the outline of a whole source text.
pub fn outline_text(text: &str) -> Vec<SymbolNode> {
    let lines: Vec<&str> = text.lines().collect();
    build(&lines)
}
