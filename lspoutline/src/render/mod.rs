//! Renderer module — trait-based format dispatch.

pub mod json;
pub mod markdown;
pub mod tree;

use crate::model::Document;
use anyhow::{anyhow, Result};

/// Trait for rendering an outlined Document into a specific output format.
pub trait Renderer {
    fn render(&self, doc: &Document) -> Result<String>;
    fn file_extension(&self) -> &str;
}

/// Create a renderer for the given format name.
pub fn create_renderer(format: &str) -> Result<Box<dyn Renderer>> {
    match format {
        "tree" | "text" => Ok(Box::new(tree::TreeRenderer)),
        "markdown" | "md" => Ok(Box::new(markdown::MarkdownRenderer)),
        "json" => Ok(Box::new(json::JsonRenderer)),
        _ => Err(anyhow!(
            "unknown format: {}. Use tree, markdown, or json",
            format
        )),
    }
}

/// 1-based, human-facing line span of a symbol: "7" or "7-10".
pub fn line_span(start_line: usize, end_line: usize) -> String {
    if start_line == end_line {
        format!("{}", start_line + 1)
    } else {
        format!("{}-{}", start_line + 1, end_line + 1)
    }
}
