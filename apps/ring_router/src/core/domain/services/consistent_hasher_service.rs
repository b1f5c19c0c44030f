use hash_ring::RingResult;

use crate::core::domain::models::NodeEntry;

/// Named pools of consistent hash rings.
///
/// Lookups in a pool that was never created behave like an empty ring;
/// removals from it report the node as not found.
pub trait ConsistentHasherService: Send + Sync {
    /// Hex ring coordinate of `key`.
    fn create_hash(&self, key: &str) -> String;

    fn add_node(&self, pool: &str, node_id: &str, weight: u32) -> RingResult<()>;

    fn remove_node(&self, pool: &str, node_id: &str) -> RingResult<()>;

    fn reweight_node(&self, pool: &str, node_id: &str, weight: u32) -> RingResult<()>;

    fn get_node_id(&self, pool: &str, key: &str) -> RingResult<String>;

    fn get_replica_ids(&self, pool: &str, key: &str, count: usize) -> RingResult<Vec<String>>;

    fn list_nodes(&self, pool: &str) -> Vec<NodeEntry>;

    fn pools(&self) -> Vec<String>;
}
