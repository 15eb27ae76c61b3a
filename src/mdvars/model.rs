use serde::{Deserialize, Serialize};

/// A node in a parsed document tree.
///
/// A node may carry a literal text value, an ordered sequence of children,
/// both, or neither. The two fields are independent: the rewriter applies
/// substitution to the value and recursion to the children, whichever is
/// present.
///
/// The tree is owned by the host pipeline; this crate takes it for the
/// duration of one rewrite and hands it back with the same shape, only leaf
/// values altered.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Node {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<Node>>,
}

impl Node {
    /// A leaf node carrying only text.
    pub fn text(value: String) -> Self {
        Self {
            value: Some(value),
            children: None,
        }
    }

    /// A container node carrying only children.
    pub fn container(children: Vec<Node>) -> Self {
        Self {
            value: None,
            children: Some(children),
        }
    }
}
