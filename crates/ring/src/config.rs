use crate::hasher::BuiltinHasher;

pub const DEFAULT_REPLICATION_FACTOR: u32 = 160;

/// Construction parameters for a [`crate::HashRing`] using a built-in hasher.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RingConfig {
    /// Virtual nodes per unit of node weight.
    pub replication_factor: u32,
    pub hasher: BuiltinHasher,
}

impl RingConfig {
    pub fn new(replication_factor: u32, hasher: BuiltinHasher) -> Self {
        Self {
            replication_factor,
            hasher,
        }
    }
}

impl Default for RingConfig {
    fn default() -> Self {
        Self {
            replication_factor: DEFAULT_REPLICATION_FACTOR,
            hasher: BuiltinHasher::default(),
        }
    }
}
