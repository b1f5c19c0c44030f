use std::fmt;

use hash_ring::Node;

/// A pool member as reported to callers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeEntry {
    pub id: String,
    pub weight: u32,
}

impl NodeEntry {
    #[inline]
    pub fn new(id: impl Into<String>, weight: u32) -> Self {
        Self {
            id: id.into(),
            weight,
        }
    }
}

impl From<&Node> for NodeEntry {
    fn from(node: &Node) -> Self {
        NodeEntry::new(node.id().as_str(), node.weight())
    }
}

impl fmt::Display for NodeEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.id, self.weight)
    }
}
