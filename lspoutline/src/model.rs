//! Data model handed to the renderers — one outlined source document.

use lisp_outline::SymbolNode;
use serde::Serialize;

/// Outline of a single source file.
#[derive(Debug, Serialize)]
pub struct Document {
    /// Path of the source, or `<stdin>`.
    pub source: String,
    pub line_count: usize,
    pub outline: Vec<SymbolNode>,
}
