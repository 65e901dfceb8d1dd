//! lisp-outline — outline extraction for AutoLISP sources.
//!
//! Produces a tree of sections and `defun` declarations from a document's
//! lines:
//!
//! - **section** — three-line `;; ===` / `;; Name` / `;; ===` header blocks
//! - **defun** — declarations and their extents, nested by paren depth
//! - **outline** — pre-section declarations, then one node per section
//! - **query** — lookups over a finished outline (enclosing path, flat list, kind filter)
//!
//! Every entry point is a pure function of its input text. Malformed input
//! never fails: unbalanced forms are clamped and near-miss headers are
//! treated as ordinary content.

pub mod defun;
pub mod outline;
pub mod query;
pub mod section;
pub mod symbol;

pub use outline::{build, outline_text};
pub use symbol::{Section, SymbolKind, SymbolNode};
