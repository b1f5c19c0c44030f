use std::collections::{BTreeMap, btree_map::Entry};

use crate::{
    error::{RingError, RingResult},
    node::VirtualNode,
};

/// Sorted coordinate -> virtual node map.
///
/// Holds no knowledge of real nodes; the membership layer is the source of
/// truth for which nodes exist.
#[derive(Debug, Clone, Default)]
pub struct Ring {
    entries: BTreeMap<u64, VirtualNode>,
}

impl Ring {
    pub fn new() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }

    /// Occupies `vnode.coordinate`. An occupied coordinate is never overwritten.
    pub fn insert(&mut self, vnode: VirtualNode) -> RingResult<()> {
        match self.entries.entry(vnode.coordinate) {
            Entry::Occupied(occ) => Err(RingError::DuplicateCoordinate {
                coordinate: vnode.coordinate,
                owner: occ.get().node.clone(),
            }),
            Entry::Vacant(v) => {
                v.insert(vnode);
                Ok(())
            }
        }
    }

    /// Idempotent: removing a free coordinate returns `None`.
    pub fn remove(&mut self, coordinate: u64) -> Option<VirtualNode> {
        self.entries.remove(&coordinate)
    }

    /// First virtual node at or after `hash`, wrapping to the lowest coordinate.
    pub fn successor(&self, hash: u64) -> RingResult<&VirtualNode> {
        self.entries
            .range(hash..)
            .next()
            .or_else(|| self.entries.iter().next())
            .map(|(_, vnode)| vnode)
            .ok_or(RingError::EmptyRing)
    }

    /// Every virtual node exactly once, clockwise from the successor of `hash`.
    pub fn successors(&self, hash: u64) -> impl Iterator<Item = &VirtualNode> + '_ {
        self.entries
            .range(hash..)
            .chain(self.entries.range(..hash))
            .map(|(_, vnode)| vnode)
    }

    pub fn get(&self, coordinate: u64) -> Option<&VirtualNode> {
        self.entries.get(&coordinate)
    }

    pub fn contains(&self, coordinate: u64) -> bool {
        self.entries.contains_key(&coordinate)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Ascending by coordinate.
    pub fn iter(&self) -> impl Iterator<Item = &VirtualNode> + '_ {
        self.entries.values()
    }
}
