use crate::error::{MdvarsError, Result};
use indexmap::IndexMap;
use serde::Deserialize;
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// The name → replacement mapping configured for one document.
///
/// Insertion order is significant: the rewriter applies entries in this order,
/// and a later entry may match text introduced by an earlier entry's
/// replacement.
pub type VariableMap = IndexMap<String, String>;

/// The process-wide variable configuration, read-only after load.
///
/// Two-level shape: group name → document name → variable mapping. The
/// nesting is kept (rather than flattening to a composite key) so a miss at
/// either level falls out of a plain lookup.
///
/// Loaded once at startup and threaded into [`crate::Substituter`] by hand —
/// there is no hidden global, so tests can supply fixtures directly.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(transparent)]
pub struct VariableStore {
    groups: HashMap<String, HashMap<String, VariableMap>>,
}

impl VariableStore {
    /// Build a store from an already-assembled mapping.
    pub fn new(groups: HashMap<String, HashMap<String, VariableMap>>) -> Self {
        Self { groups }
    }

    /// Parse a store from its JSON representation: an object of groups, each
    /// an object of documents, each an object of variable name/value pairs.
    pub fn from_json_str(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(MdvarsError::Serialization)
    }

    /// Load a store from a JSON file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(MdvarsError::Io)?;
        Self::from_json_str(&content)
    }

    /// Look up the variable mapping for one document.
    ///
    /// `None` at either level is a normal outcome, not an error: most
    /// documents have no variables configured, and the caller passes their
    /// trees through untouched.
    pub fn resolve(&self, group: &str, document: &str) -> Option<&VariableMap> {
        self.groups.get(group)?.get(document)
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}
