use thiserror::Error;

use crate::node::NodeId;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RingError {
    #[error("ring has no nodes")]
    EmptyRing,

    #[error("node {0} already exists")]
    NodeAlreadyExists(NodeId),

    #[error("node {0} not found")]
    NodeNotFound(NodeId),

    /// Only raised by [`crate::Ring`]; the membership layer resolves it by salting.
    #[error("coordinate {coordinate:#018x} already owned by {owner}")]
    DuplicateCoordinate { coordinate: u64, owner: NodeId },

    #[error("could not place replica {replica} of node {node} after {attempts} attempts")]
    PlacementExhausted {
        node: NodeId,
        replica: u32,
        attempts: u32,
    },

    #[error("replication factor must be between 1 and {max}", max = crate::MAX_VNODES_PER_NODE)]
    InvalidReplicationFactor,

    #[error("invalid weight {weight} for node {node} (at least 1, at most {max} virtual nodes per node)", max = crate::MAX_VNODES_PER_NODE)]
    InvalidWeight { node: NodeId, weight: u32 },
}

pub type RingResult<T> = Result<T, RingError>;
