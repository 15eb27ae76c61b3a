//! # Tree Rewriter
//!
//! Depth-first traversal that replaces placeholder tokens in text-bearing
//! nodes. A node's value is rewritten before its children are visited; both
//! are handled independently when both are present.
//!
//! Substitution is literal substring replacement, never a pattern match.
//! Entries apply in the mapping's insertion order, and each entry rewrites
//! the value as left by the previous one. That makes chaining observable:
//! with entries `A → "^{B}"` then `B → "done"`, the text `^{A}` comes out as
//! `done`. Callers relying on configuration order get exactly that order.

use crate::config::VariableMap;
use crate::model::Node;
use tracing::trace;

/// Render the placeholder token for a variable name: `^{name}`.
///
/// The token is a fixed delimiter pair matched literally and
/// case-sensitively; names containing characters that would be special in a
/// pattern language need no escaping.
pub fn placeholder(name: &str) -> String {
    format!("^{{{}}}", name)
}

/// Apply every mapping entry, in insertion order, to one text value.
///
/// Each entry replaces all non-overlapping occurrences of its token left to
/// right; within one entry, scanning never re-enters replacement text it just
/// produced, so a self-referential value cannot loop. Tokens naming variables
/// outside the mapping are left as literal text.
fn apply_mapping(mut value: String, vars: &VariableMap) -> String {
    for (name, replacement) in vars {
        let token = placeholder(name);
        if !value.contains(&token) {
            continue;
        }
        let rewritten = value.replace(&token, replacement);
        trace!(variable = %name, before = %value, after = %rewritten, "substituted placeholder");
        value = rewritten;
    }
    value
}

/// Rewrite one node and, recursively, its children.
///
/// The returned tree has the same shape as the input: no sibling is dropped,
/// reordered, or added; only text values change. Never fails — unresolved
/// placeholders are not an error.
pub fn rewrite(mut node: Node, vars: &VariableMap) -> Node {
    if let Some(value) = node.value.take() {
        node.value = Some(apply_mapping(value, vars));
    }

    if let Some(children) = node.children.take() {
        node.children = Some(children.into_iter().map(|c| rewrite(c, vars)).collect());
    }

    node
}
