use std::sync::Arc;

use dashmap::{DashMap, Entry};
use hash_ring::{BuiltinHasher, HashRing, KeyHasher, NodeId, RingConfig, RingError, RingResult};
use tracing::info;

use crate::core::domain::{models::NodeEntry, services::ConsistentHasherService};

type PoolRing = HashRing<BuiltinHasher>;

/// Independent rings keyed by pool name, created on first `add_node`.
pub struct PooledRingService {
    pools: DashMap<Arc<str>, Arc<PoolRing>>,
    config: RingConfig,
}

impl PooledRingService {
    pub fn new(config: RingConfig) -> Self {
        Self {
            pools: DashMap::new(),
            config,
        }
    }

    pub fn new_shared(config: RingConfig) -> Arc<Self> {
        Arc::new(Self::new(config))
    }

    fn pool(&self, name: &str) -> Option<Arc<PoolRing>> {
        self.pools.get(name).map(|ring| ring.value().clone())
    }

    /// Adds to an existing pool, or creates the pool around its first node.
    /// A pool whose first add fails is never registered.
    fn add_to_pool(&self, name: &str, node_id: &str, weight: u32) -> RingResult<()> {
        match self.pools.entry(Arc::<str>::from(name)) {
            Entry::Occupied(occ) => {
                let ring = occ.get().clone();
                drop(occ);

                ring.add_node_with_weight(node_id, weight)
            }
            Entry::Vacant(vac) => {
                let ring = HashRing::from_config(&self.config)?;
                ring.add_node_with_weight(node_id, weight)?;
                vac.insert(Arc::new(ring));

                info!(
                    pool = name,
                    replication_factor = self.config.replication_factor,
                    "pool created"
                );
                Ok(())
            }
        }
    }
}

impl ConsistentHasherService for PooledRingService {
    fn create_hash(&self, key: &str) -> String {
        format!("{:016x}", self.config.hasher.hash(key.as_bytes()))
    }

    fn add_node(&self, pool: &str, node_id: &str, weight: u32) -> RingResult<()> {
        self.add_to_pool(pool, node_id, weight)
    }

    fn remove_node(&self, pool: &str, node_id: &str) -> RingResult<()> {
        match self.pool(pool) {
            Some(ring) => ring.remove_node(node_id),
            None => Err(RingError::NodeNotFound(NodeId::new(node_id))),
        }
    }

    fn reweight_node(&self, pool: &str, node_id: &str, weight: u32) -> RingResult<()> {
        match self.pool(pool) {
            Some(ring) => ring.reweight_node(node_id, weight),
            None => Err(RingError::NodeNotFound(NodeId::new(node_id))),
        }
    }

    fn get_node_id(&self, pool: &str, key: &str) -> RingResult<String> {
        let ring = self.pool(pool).ok_or(RingError::EmptyRing)?;
        ring.lookup(key).map(|id| id.to_string())
    }

    fn get_replica_ids(&self, pool: &str, key: &str, count: usize) -> RingResult<Vec<String>> {
        let ring = self.pool(pool).ok_or(RingError::EmptyRing)?;
        let ids = ring.lookup_n(key, count)?;

        Ok(ids.iter().map(NodeId::to_string).collect())
    }

    fn list_nodes(&self, pool: &str) -> Vec<NodeEntry> {
        self.pool(pool)
            .map(|ring| ring.members().iter().map(NodeEntry::from).collect())
            .unwrap_or_default()
    }

    fn pools(&self) -> Vec<String> {
        let mut names: Vec<String> = self
            .pools
            .iter()
            .map(|entry| entry.key().to_string())
            .collect();
        names.sort();
        names
    }
}
