//! Plain-text tree renderer — one symbol per line, indented by depth.
//!
//! ```text
//! [4-11] Section Geometry
//! [7-10]   Command circle
//! [8]        Function area
//! ```

use crate::model::Document;
use crate::render::{line_span, Renderer};
use anyhow::Result;
use lisp_outline::query;

pub struct TreeRenderer;

impl Renderer for TreeRenderer {
    fn render(&self, doc: &Document) -> Result<String> {
        let flat = query::flatten(&doc.outline);
        let spans: Vec<String> = flat
            .iter()
            .map(|f| format!("[{}]", line_span(f.node.start_line, f.node.end_line)))
            .collect();
        let width = spans.iter().map(String::len).max().unwrap_or(0);

        let mut out = String::new();
        for (entry, span) in flat.iter().zip(&spans) {
            out.push_str(&format!(
                "{:<width$} {}{} {}\n",
                span,
                "  ".repeat(entry.depth),
                entry.node.kind,
                entry.node.name,
                width = width
            ));
        }
        Ok(out)
    }

    fn file_extension(&self) -> &str {
        "txt"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc(text: &str) -> Document {
        Document {
            source: "test.lsp".into(),
            line_count: text.lines().count(),
            outline: lisp_outline::outline_text(text),
        }
    }

    #[test]
    fn renders_nested_tree() {
        let text = ";; ==\n;; Geometry\n;; ==\n(defun c:circle (r)\n  (defun area (r) (* pi r r))\n  (area r))\n";
        let out = TreeRenderer.render(&doc(text)).unwrap();
        assert_eq!(
            out,
            "[1-6] Section Geometry\n[4-6]   Command circle\n[5]       Function area\n"
        );
    }

    #[test]
    fn empty_outline_renders_nothing() {
        let out = TreeRenderer.render(&doc("(setq a 1)\n")).unwrap();
        assert!(out.is_empty());
    }
}
