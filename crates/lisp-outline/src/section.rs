//! Section header detection.
//!
//! A header is a three-line comment block:
//!
//! ```text
//! ;; ==========
//! ;; Geometry
//! ;; ==========
//! ```
//!
//! A section runs from its header to the line where the next header
//! begins, or to the end of the document.

use crate::symbol::Section;
use regex::Regex;
use std::sync::LazyLock;

// -- Regex patterns -----------------------------------------------------------

// Comment line holding nothing but a run of `=`
static RE_SEPARATOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*;+\s*=+\s*$").unwrap());

// Any comment line; group 1 is the content without marker and padding
static RE_COMMENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*;+\s*(.*?)\s*$").unwrap());

// -- Public API ---------------------------------------------------------------

/// Find all sections in `lines`, ordered by start line and non-overlapping.
pub fn scan<S: AsRef<str>>(lines: &[S]) -> Vec<Section> {
    let mut sections = Vec::new();
    let mut i = 0;

    while i < lines.len() {
        let Some(name) = header_at(lines, i) else {
            i += 1;
            continue;
        };

        let end = (i + 3..lines.len())
            .find(|&j| header_at(lines, j).is_some())
            .unwrap_or(lines.len());

        sections.push(Section {
            name,
            start: i,
            end,
        });
        i = end;
    }

    sections
}

/// Return the section name if a header triple starts at line `i`.
pub fn header_at<S: AsRef<str>>(lines: &[S], i: usize) -> Option<String> {
    if i + 2 >= lines.len() {
        return None;
    }
    if !is_separator(lines[i].as_ref()) || !is_separator(lines[i + 2].as_ref()) {
        return None;
    }
    named_comment(lines[i + 1].as_ref())
}

// -- Line classification ------------------------------------------------------

fn is_separator(line: &str) -> bool {
    RE_SEPARATOR.is_match(line)
}

/// Content of a comment line that can name a section.
fn named_comment(line: &str) -> Option<String> {
    let caps = RE_COMMENT.captures(line)?;
    let content = caps.get(1)?.as_str();
    if content.is_empty() || content.starts_with('=') {
        return None;
    }
    Some(content.to_string())
}
