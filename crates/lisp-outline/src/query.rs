//! Read-only queries over a finished outline.

use crate::symbol::{SymbolKind, SymbolNode};

/// A symbol listed with its nesting depth (0 for top-level nodes).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FlatSymbol<'a> {
    pub depth: usize,
    pub node: &'a SymbolNode,
}

/// Path from the outermost to the innermost symbol containing `line`.
///
/// Empty when no symbol covers the line.
pub fn enclosing(outline: &[SymbolNode], line: usize) -> Vec<&SymbolNode> {
    let mut path = Vec::new();
    let mut level = outline;
    while let Some(node) = level.iter().find(|n| n.contains_line(line)) {
        path.push(node);
        level = &node.children;
    }
    path
}

/// Pre-order listing of every symbol.
pub fn flatten(outline: &[SymbolNode]) -> Vec<FlatSymbol<'_>> {
    fn walk<'a>(nodes: &'a [SymbolNode], depth: usize, out: &mut Vec<FlatSymbol<'a>>) {
        for node in nodes {
            out.push(FlatSymbol { depth, node });
            walk(&node.children, depth + 1, out);
        }
    }

    let mut out = Vec::new();
    walk(outline, 0, &mut out);
    out
}

/// Copy of the outline keeping only symbols of the given kinds.
///
/// A symbol of another kind survives only while it still has matching
/// descendants, so matches keep their place in the hierarchy.
pub fn retain_kinds(outline: &[SymbolNode], kinds: &[SymbolKind]) -> Vec<SymbolNode> {
    outline
        .iter()
        .filter_map(|node| retain_node(node, kinds))
        .collect()
}

fn retain_node(node: &SymbolNode, kinds: &[SymbolKind]) -> Option<SymbolNode> {
    let children = retain_kinds(&node.children, kinds);
    if !kinds.contains(&node.kind) && children.is_empty() {
        return None;
    }
    Some(SymbolNode {
        name: node.name.clone(),
        kind: node.kind,
        start_line: node.start_line,
        end_line: node.end_line,
        end_column: node.end_column,
        children,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::outline::outline_text;

    const SAMPLE: &str = "\
(defun helper () nil)
;; ====
;; Commands
;; ====
(defun c:run ()
  (defun step (x)
    (princ x))
  (step 1))
(defun tidy () nil)
";

    #[test]
    fn enclosing_path() {
        let outline = outline_text(SAMPLE);
        let path: Vec<_> = enclosing(&outline, 6).iter().map(|n| n.name.as_str()).collect();
        assert_eq!(path, ["Commands", "run", "step"]);

        let path: Vec<_> = enclosing(&outline, 2).iter().map(|n| n.name.as_str()).collect();
        assert_eq!(path, ["Commands"]);

        let path: Vec<_> = enclosing(&outline, 0).iter().map(|n| n.name.as_str()).collect();
        assert_eq!(path, ["helper"]);
    }

    #[test]
    fn enclosing_outside_everything() {
        let outline = outline_text("(setq a 1)\n(defun f () 1)\n");
        assert!(enclosing(&outline, 0).is_empty());
        assert!(enclosing(&outline, 42).is_empty());
    }

    #[test]
    fn flatten_is_preorder_with_depth() {
        let outline = outline_text(SAMPLE);
        let flat: Vec<_> = flatten(&outline)
            .iter()
            .map(|f| (f.depth, f.node.name.as_str()))
            .collect();
        assert_eq!(
            flat,
            [(0, "helper"), (0, "Commands"), (1, "run"), (2, "step"), (1, "tidy")]
        );
    }

    #[test]
    fn retain_commands_keeps_sections_with_matches() {
        let outline = outline_text(SAMPLE);
        let commands = retain_kinds(&outline, &[SymbolKind::Command]);
        assert_eq!(commands.len(), 1);
        assert_eq!(commands[0].name, "Commands");
        assert_eq!(commands[0].children.len(), 1);
        assert_eq!(commands[0].children[0].name, "run");
        assert!(commands[0].children[0].children.is_empty());
    }

    #[test]
    fn retain_functions_keeps_nested_path() {
        let outline = outline_text(SAMPLE);
        let functions = retain_kinds(&outline, &[SymbolKind::Function]);
        let flat: Vec<_> = flatten(&functions)
            .iter()
            .map(|f| f.node.name.as_str())
            .collect();
        assert_eq!(flat, ["helper", "Commands", "run", "step", "tidy"]);
    }

    #[test]
    fn retain_nothing() {
        let outline = outline_text(SAMPLE);
        assert!(retain_kinds(&outline, &[]).is_empty());
    }
}
