//! Peer build-dependency index
//!
//! For each complete record in a working set, derives the subset of its
//! declared build dependencies that are themselves complete members of
//! the set. Peer membership depends on set membership only, never on
//! position, so the index is computed once and stays valid across
//! relocations.

use std::collections::{HashMap, HashSet};

use crate::core::recipe::RecipeRecord;

/// Peer dependencies per package name
#[derive(Debug, Default, Clone)]
pub struct DependencyIndex {
    peers: HashMap<String, Vec<String>>,
}

impl DependencyIndex {
    /// Build the index from a working set of records.
    ///
    /// Incomplete records are excluded both as sources and as targets:
    /// they declare no dependencies, and a complete record depending on
    /// an incomplete one gains no in-set precedence constraint.
    pub fn build(records: &[RecipeRecord]) -> Self {
        let complete_names: HashSet<&str> = records
            .iter()
            .filter(|r| r.complete)
            .map(|r| r.name.as_str())
            .collect();

        let mut peers = HashMap::new();
        for record in records.iter().filter(|r| r.complete) {
            let record_peers: Vec<String> = record
                .dep_names
                .iter()
                .filter(|dep| complete_names.contains(dep.as_str()))
                .cloned()
                .collect();
            peers.insert(record.name.clone(), record_peers);
        }

        Self { peers }
    }

    /// Peer dependencies of `name`, in declaration order.
    ///
    /// Incomplete records have no entry and yield an empty slice.
    pub fn peer_deps(&self, name: &str) -> &[String] {
        self.peers.get(name).map_or(&[], Vec::as_slice)
    }

    /// Number of peer dependencies of `name`
    pub fn peer_count(&self, name: &str) -> usize {
        self.peer_deps(name).len()
    }
}
