use crate::tree::NodeId;

/// Errors reported by the element tree and the reorder behavior.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReorderError {
    /// Node not found in the tree.
    NodeNotFound(NodeId),
    /// The host element is not attached to a parent.
    NoParent(NodeId),
    /// The host element has no siblings to reorder among.
    NoSiblings(NodeId),
    /// A reorder event named an item the tab order does not contain.
    UnknownItem(String),
    /// The layout engine rejected an operation.
    Layout(String),
}

impl std::fmt::Display for ReorderError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReorderError::NodeNotFound(id) => write!(f, "Node {:?} not found", id),
            ReorderError::NoParent(id) => write!(f, "Node {:?} has no parent", id),
            ReorderError::NoSiblings(id) => write!(f, "Node {:?} has no siblings", id),
            ReorderError::UnknownItem(item) => write!(f, "Unknown tab item {}", item),
            ReorderError::Layout(msg) => write!(f, "Layout error: {}", msg),
        }
    }
}

impl std::error::Error for ReorderError {}

impl From<taffy::TaffyError> for ReorderError {
    fn from(err: taffy::TaffyError) -> Self {
        ReorderError::Layout(err.to_string())
    }
}

/// Result type for tree and reorder operations.
pub type ReorderResult<T> = Result<T, ReorderError>;
