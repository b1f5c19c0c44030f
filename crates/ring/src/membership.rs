use std::{collections::BTreeMap, fmt};

use parking_lot::RwLock;
use tracing::{debug, trace};

use crate::{
    config::RingConfig,
    error::{RingError, RingResult},
    hasher::{BuiltinHasher, KeyHasher, Xxh3Hasher},
    node::{Node, NodeId, VirtualNode},
    ring::Ring,
};

/// Hash attempts per virtual node before placement is declared impossible.
pub const MAX_PLACEMENT_ATTEMPTS: u32 = 10;

/// Upper bound on `replication_factor × weight` for a single node.
pub const MAX_VNODES_PER_NODE: u32 = 1 << 16;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RingStats {
    pub node_count: usize,
    pub vnode_count: usize,
    pub replication_factor: u32,
}

#[derive(Debug, Default)]
struct RingState {
    ring: Ring,
    nodes: BTreeMap<NodeId, Node>,
}

/// Consistent hash ring over a set of weighted real nodes.
///
/// Every node is expanded into `replication_factor × weight` virtual nodes.
/// Ring and node table share one lock, so a lookup either sees all of a
/// node's virtual nodes or none of them.
pub struct HashRing<H = Xxh3Hasher> {
    state: RwLock<RingState>,
    hasher: H,
    replication_factor: u32,
}

impl HashRing<Xxh3Hasher> {
    pub fn new(replication_factor: u32) -> RingResult<Self> {
        Self::with_hasher(replication_factor, Xxh3Hasher)
    }
}

impl HashRing<BuiltinHasher> {
    pub fn from_config(config: &RingConfig) -> RingResult<Self> {
        Self::with_hasher(config.replication_factor, config.hasher)
    }
}

impl<H: KeyHasher> HashRing<H> {
    pub fn with_hasher(replication_factor: u32, hasher: H) -> RingResult<Self> {
        if replication_factor == 0 || replication_factor > MAX_VNODES_PER_NODE {
            return Err(RingError::InvalidReplicationFactor);
        }

        Ok(Self {
            state: RwLock::new(RingState::default()),
            hasher,
            replication_factor,
        })
    }

    #[inline]
    pub fn replication_factor(&self) -> u32 {
        self.replication_factor
    }

    /// Ring coordinate of `key`.
    #[inline]
    pub fn hash_key(&self, key: impl AsRef<[u8]>) -> u64 {
        self.hasher.hash(key.as_ref())
    }

    /// Adds a node with weight 1.
    pub fn add_node(&self, id: impl Into<NodeId>) -> RingResult<()> {
        self.add_node_with_weight(id, 1)
    }

    pub fn add_node_with_weight(&self, id: impl Into<NodeId>, weight: u32) -> RingResult<()> {
        let id = id.into();
        let replicas = self.replica_count(&id, weight)?;

        let mut guard = self.state.write();
        let state = &mut *guard;

        if state.nodes.contains_key(&id) {
            return Err(RingError::NodeAlreadyExists(id));
        }

        let coordinates = self.place(&mut state.ring, &id, replicas)?;

        debug!(node = %id, weight, vnodes = coordinates.len(), "added node to ring");
        state
            .nodes
            .insert(id.clone(), Node::new(id, weight, coordinates));

        Ok(())
    }

    pub fn remove_node(&self, id: impl AsRef<str>) -> RingResult<()> {
        let id = id.as_ref();

        let mut guard = self.state.write();
        let state = &mut *guard;

        let node = state
            .nodes
            .remove(id)
            .ok_or_else(|| RingError::NodeNotFound(NodeId::new(id)))?;

        for coordinate in node.coordinates() {
            state.ring.remove(*coordinate);
        }

        debug!(node = %node.id(), vnodes = node.vnode_count(), "removed node from ring");
        Ok(())
    }

    /// Replaces the placement of `id` with one for `weight` in a single step.
    ///
    /// If the new placement cannot be built the previous one is kept.
    pub fn reweight_node(&self, id: impl AsRef<str>, weight: u32) -> RingResult<()> {
        let id = id.as_ref();

        let mut guard = self.state.write();
        let state = &mut *guard;

        let old = state
            .nodes
            .remove(id)
            .ok_or_else(|| RingError::NodeNotFound(NodeId::new(id)))?;
        let node_id = old.id().clone();

        let replicas = match self.replica_count(&node_id, weight) {
            Ok(replicas) => replicas,
            Err(e) => {
                state.nodes.insert(node_id, old);
                return Err(e);
            }
        };

        for coordinate in old.coordinates() {
            state.ring.remove(*coordinate);
        }

        match self.place(&mut state.ring, &node_id, replicas) {
            Ok(coordinates) => {
                debug!(
                    node = %node_id,
                    from = old.weight(),
                    to = weight,
                    "reweighted node"
                );
                state
                    .nodes
                    .insert(node_id.clone(), Node::new(node_id, weight, coordinates));
                Ok(())
            }
            Err(e) => {
                for (replica, coordinate) in old.coordinates().iter().enumerate() {
                    // freed above and untouched since
                    let restored = state.ring.insert(VirtualNode::new(
                        *coordinate,
                        node_id.clone(),
                        replica as u32,
                    ));
                    debug_assert!(
                        restored.is_ok(),
                        "restoring {node_id} replica {replica} collided: {restored:?}"
                    );
                }
                state.nodes.insert(node_id, old);
                Err(e)
            }
        }
    }

    /// Node owning `key`.
    pub fn lookup(&self, key: impl AsRef<[u8]>) -> RingResult<NodeId> {
        let hash = self.hasher.hash(key.as_ref());

        let state = self.state.read();
        state.ring.successor(hash).map(|vnode| vnode.node.clone())
    }

    /// Up to `count` distinct nodes for `key`, walking clockwise. The owner
    /// reported by [`HashRing::lookup`] comes first.
    pub fn lookup_n(&self, key: impl AsRef<[u8]>, count: usize) -> RingResult<Vec<NodeId>> {
        let hash = self.hasher.hash(key.as_ref());

        let state = self.state.read();
        if state.ring.is_empty() {
            return Err(RingError::EmptyRing);
        }

        let wanted = count.min(state.nodes.len());
        let mut owners: Vec<NodeId> = Vec::with_capacity(wanted);

        for vnode in state.ring.successors(hash) {
            if owners.len() == wanted {
                break;
            }
            if !owners.contains(&vnode.node) {
                owners.push(vnode.node.clone());
            }
        }

        Ok(owners)
    }

    /// Registered node ids, sorted.
    pub fn nodes(&self) -> Vec<NodeId> {
        self.state.read().nodes.keys().cloned().collect()
    }

    /// Registered nodes with their weights and coordinates, sorted by id.
    pub fn members(&self) -> Vec<Node> {
        self.state.read().nodes.values().cloned().collect()
    }

    pub fn node(&self, id: impl AsRef<str>) -> Option<Node> {
        self.state.read().nodes.get(id.as_ref()).cloned()
    }

    pub fn contains_node(&self, id: impl AsRef<str>) -> bool {
        self.state.read().nodes.contains_key(id.as_ref())
    }

    pub fn node_count(&self) -> usize {
        self.state.read().nodes.len()
    }

    pub fn vnode_count(&self) -> usize {
        self.state.read().ring.len()
    }

    pub fn is_empty(&self) -> bool {
        self.state.read().nodes.is_empty()
    }

    pub fn stats(&self) -> RingStats {
        let state = self.state.read();

        RingStats {
            node_count: state.nodes.len(),
            vnode_count: state.ring.len(),
            replication_factor: self.replication_factor,
        }
    }

    fn replica_count(&self, id: &NodeId, weight: u32) -> RingResult<u32> {
        if weight == 0 {
            return Err(RingError::InvalidWeight {
                node: id.clone(),
                weight,
            });
        }

        self.replication_factor
            .checked_mul(weight)
            .filter(|replicas| *replicas <= MAX_VNODES_PER_NODE)
            .ok_or_else(|| RingError::InvalidWeight {
                node: id.clone(),
                weight,
            })
    }

    /// Places all replicas of `id`, or none of them.
    fn place(&self, ring: &mut Ring, id: &NodeId, replicas: u32) -> RingResult<Vec<u64>> {
        let mut coordinates = Vec::with_capacity(replicas as usize);

        for replica in 0..replicas {
            match self.place_replica(ring, id, replica) {
                Ok(coordinate) => coordinates.push(coordinate),
                Err(e) => {
                    for coordinate in &coordinates {
                        ring.remove(*coordinate);
                    }
                    return Err(e);
                }
            }
        }

        Ok(coordinates)
    }

    fn place_replica(&self, ring: &mut Ring, id: &NodeId, replica: u32) -> RingResult<u64> {
        for salt in 0..MAX_PLACEMENT_ATTEMPTS {
            let coordinate = self.hasher.hash(vnode_label(id, replica, salt).as_bytes());

            match ring.insert(VirtualNode::new(coordinate, id.clone(), replica)) {
                Ok(()) => return Ok(coordinate),
                Err(RingError::DuplicateCoordinate { coordinate, owner }) => {
                    trace!(node = %id, replica, salt, coordinate, %owner, "vnode collision");
                }
                Err(e) => return Err(e),
            }
        }

        Err(RingError::PlacementExhausted {
            node: id.clone(),
            replica,
            attempts: MAX_PLACEMENT_ATTEMPTS,
        })
    }
}

impl<H: KeyHasher> fmt::Debug for HashRing<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let stats = self.stats();
        f.debug_struct("HashRing")
            .field("replication_factor", &stats.replication_factor)
            .field("nodes", &stats.node_count)
            .field("vnodes", &stats.vnode_count)
            .finish_non_exhaustive()
    }
}

/// Hash input for a virtual node: `"{id}:{replica}"`, then
/// `"{id}:{replica}:{salt}"` once a collision forced a retry.
fn vnode_label(id: &NodeId, replica: u32, salt: u32) -> String {
    if salt == 0 {
        format!("{id}:{replica}")
    } else {
        format!("{id}:{replica}:{salt}")
    }
}
