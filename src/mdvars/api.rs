//! # Substitution Gate
//!
//! The entry point the host pipeline calls once per document. The gate
//! derives the document's identity from its path, asks the store for a
//! variable mapping, and either passes the tree through untouched (the common
//! case) or hands it to the rewriter.

use crate::config::VariableStore;
use crate::error::Result;
use crate::identity::DocumentIdentity;
use crate::model::Node;
use crate::rewrite;
use tracing::debug;

/// Path segment the grouped document tree sits under by default.
const DEFAULT_ROOT_MARKER: &str = "v2";

/// The per-document substitution pass.
///
/// Holds the read-only [`VariableStore`] and the path convention used to
/// derive document identities. `process` takes `&self` and keeps no state
/// across calls, so one `Substituter` can serve concurrent documents without
/// synchronization.
pub struct Substituter {
    store: VariableStore,
    root_marker: String,
}

impl Substituter {
    pub fn new(store: VariableStore) -> Self {
        Self {
            store,
            root_marker: DEFAULT_ROOT_MARKER.to_string(),
        }
    }

    /// Override the path segment that marks the root of the grouped tree.
    pub fn with_root_marker(mut self, marker: &str) -> Self {
        self.root_marker = marker.to_string();
        self
    }

    /// Run the substitution pass over one document.
    ///
    /// When no variables are configured for the document — a miss at either
    /// the group or the document level — the tree is returned as-is, without
    /// traversal. The only failure is a `document_path` that does not follow
    /// the host's path convention.
    pub fn process(&self, document_path: &str, root: Node) -> Result<Node> {
        let identity = DocumentIdentity::from_path(document_path, &self.root_marker)?;

        match self.store.resolve(&identity.group, &identity.name) {
            None => Ok(root),
            Some(vars) => {
                debug!(
                    group = %identity.group,
                    document = %identity.name,
                    variables = vars.len(),
                    "applying variable substitution"
                );
                Ok(rewrite::rewrite(root, vars))
            }
        }
    }
}
