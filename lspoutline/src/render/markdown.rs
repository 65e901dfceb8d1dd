//! GitHub-flavored markdown renderer.
//!
//! Layout: a title with the symbol count, an index of sections,
//! declarations found before the first section, then one `##` heading per
//! section with its declarations as a nested bullet list.

use crate::model::Document;
use crate::render::{line_span, Renderer};
use crate::toc;
use anyhow::Result;
use lisp_outline::{SymbolKind, SymbolNode};

pub struct MarkdownRenderer;

impl Renderer for MarkdownRenderer {
    fn render(&self, doc: &Document) -> Result<String> {
        let mut output = format!("# {}\n\n", doc.source);
        let symbols: usize = doc.outline.iter().map(SymbolNode::count).sum();
        output.push_str(&format!(
            "_{} symbols in {} lines_\n\n",
            symbols, doc.line_count
        ));

        let (sections, loose): (Vec<&SymbolNode>, Vec<&SymbolNode>) = doc
            .outline
            .iter()
            .partition(|n| n.kind == SymbolKind::Section);

        if !sections.is_empty() {
            output.push_str("## Index\n\n");
            for section in &sections {
                output.push_str(&toc::render_toc_item(&section.name));
                output.push('\n');
            }
            output.push('\n');
        }

        if !loose.is_empty() {
            for node in &loose {
                render_item(&mut output, node, 0);
            }
            output.push('\n');
        }

        for section in &sections {
            output.push_str(&format!("## {}\n\n", section.name));
            output.push_str(&format!(
                "_Lines {}_\n\n",
                line_span(section.start_line, section.end_line)
            ));
            if !section.children.is_empty() {
                for child in &section.children {
                    render_item(&mut output, child, 0);
                }
                output.push('\n');
            }
        }

        Ok(output)
    }

    fn file_extension(&self) -> &str {
        "md"
    }
}

/// Render a declaration and its nested declarations as list items.
fn render_item(out: &mut String, node: &SymbolNode, depth: usize) {
    let lines = if node.start_line == node.end_line {
        "line"
    } else {
        "lines"
    };
    out.push_str(&format!(
        "{}* `{}` ({}, {} {})\n",
        "  ".repeat(depth),
        node.name,
        node.kind.label().to_lowercase(),
        lines,
        line_span(node.start_line, node.end_line)
    ));
    for child in &node.children {
        render_item(out, child, depth + 1);
    }
}
