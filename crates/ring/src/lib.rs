//! Consistent hashing ring with weighted virtual nodes.
//!
//! Keys and virtual nodes are hashed onto a `u64` ring. A key belongs to the
//! real node owning the first virtual node at or after the key's coordinate,
//! wrapping past `u64::MAX` back to the lowest coordinate. Adding or removing
//! one of `N` nodes only moves roughly `1/N` of the keys.
//!
//! ```
//! use hash_ring::{HashRing, RingError};
//!
//! let ring = HashRing::new(64).unwrap();
//! assert_eq!(ring.lookup("user:42"), Err(RingError::EmptyRing));
//!
//! ring.add_node("cache-a").unwrap();
//! ring.add_node_with_weight("cache-b", 2).unwrap();
//!
//! let owner = ring.lookup("user:42").unwrap();
//! assert!(owner == "cache-a" || owner == "cache-b");
//! assert_eq!(ring.vnode_count(), 64 * 3);
//! ```

pub mod config;
pub mod error;
pub mod hasher;
pub mod membership;
pub mod node;
pub mod ring;


pub use config::{DEFAULT_REPLICATION_FACTOR, RingConfig};
pub use error::{RingError, RingResult};
pub use hasher::{BuiltinHasher, Fnv1aHasher, KeyHasher, UnknownHasher, Xxh3Hasher};
pub use membership::{HashRing, MAX_PLACEMENT_ATTEMPTS, MAX_VNODES_PER_NODE, RingStats};
pub use node::{Node, NodeId, VirtualNode};
pub use ring::Ring;
