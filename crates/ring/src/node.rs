use std::{borrow::Borrow, fmt, sync::Arc};

/// Identity of a real node. Cloning only bumps a reference count.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(Arc<str>);

impl NodeId {
    #[inline]
    pub fn new(id: &str) -> Self {
        Self(Arc::<str>::from(id))
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for NodeId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for NodeId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<&str> for NodeId {
    fn from(value: &str) -> Self {
        NodeId::new(value)
    }
}

impl From<String> for NodeId {
    fn from(value: String) -> Self {
        Self(Arc::<str>::from(value))
    }
}

impl From<&String> for NodeId {
    fn from(value: &String) -> Self {
        NodeId::new(value)
    }
}

impl From<&NodeId> for NodeId {
    fn from(value: &NodeId) -> Self {
        value.clone()
    }
}

impl PartialEq<str> for NodeId {
    fn eq(&self, other: &str) -> bool {
        &*self.0 == other
    }
}

impl PartialEq<&str> for NodeId {
    fn eq(&self, other: &&str) -> bool {
        &*self.0 == *other
    }
}

/// One placement of a real node on the ring.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VirtualNode {
    pub coordinate: u64,
    pub node: NodeId,
    /// Index of this placement inside the owning node's batch.
    pub replica: u32,
}

impl VirtualNode {
    #[inline]
    pub fn new(coordinate: u64, node: NodeId, replica: u32) -> Self {
        Self {
            coordinate,
            node,
            replica,
        }
    }
}

/// A registered real node together with the coordinates it occupies.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    id: NodeId,
    weight: u32,
    coordinates: Vec<u64>,
}

impl Node {
    pub(crate) fn new(id: NodeId, weight: u32, coordinates: Vec<u64>) -> Self {
        Self {
            id,
            weight,
            coordinates,
        }
    }

    pub fn id(&self) -> &NodeId {
        &self.id
    }

    pub fn weight(&self) -> u32 {
        self.weight
    }

    /// Ring coordinates of this node's virtual nodes, in replica order.
    pub fn coordinates(&self) -> &[u64] {
        &self.coordinates
    }

    pub fn vnode_count(&self) -> usize {
        self.coordinates.len()
    }
}
