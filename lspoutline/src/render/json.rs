//! JSON renderer — structured output for tooling integration.
//!
//! Serializes the Document model directly. Line numbers stay zero-based,
//! as produced by the outline builder.

use crate::model::Document;
use crate::render::Renderer;
use anyhow::{Context, Result};

pub struct JsonRenderer;

impl Renderer for JsonRenderer {
    fn render(&self, doc: &Document) -> Result<String> {
        let mut out = serde_json::to_string_pretty(doc).context("failed to serialize outline")?;
        out.push('\n');
        Ok(out)
    }

    fn file_extension(&self) -> &str {
        "json"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_outline_tree() {
        let text = "(defun c:go ()\n  (defun step () 1))\n";
        let doc = Document {
            source: "go.lsp".into(),
            line_count: 2,
            outline: lisp_outline::outline_text(text),
        };
        let out = JsonRenderer.render(&doc).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["source"], "go.lsp");
        assert_eq!(value["line_count"], 2);
        let go = &value["outline"][0];
        assert_eq!(go["name"], "go");
        assert_eq!(go["kind"], "Command");
        assert_eq!(go["start_line"], 0);
        assert_eq!(go["end_line"], 1);
        assert_eq!(go["children"][0]["name"], "step");
        assert_eq!(go["children"][0]["kind"], "Function");
    }
}
