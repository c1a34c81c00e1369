//! Archive index and culling
//!
//! Compares each record's canonical artifact filename against the set of
//! filenames a channel has already archived.

use std::collections::HashSet;

use crate::core::ordering::WorkingSet;

/// Canonical artifact filenames already present in a channel
#[derive(Debug, Default)]
pub struct ArchiveIndex {
    names: HashSet<String>,
}

impl ArchiveIndex {
    /// Build an index from canonical filenames
    pub fn from_names(names: impl IntoIterator<Item = String>) -> Self {
        Self {
            names: names.into_iter().collect(),
        }
    }

    /// Whether the archive already holds `canonical_name`
    pub fn contains(&self, canonical_name: &str) -> bool {
        self.names.contains(canonical_name)
    }

    /// Number of archived artifacts
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Whether the index is empty
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

/// Mark every record whose canonical name appears in the archive.
///
/// Positions are untouched; culled output is the ordered sequence
/// filtered to `active && !archived`.
pub fn flag_archived(set: &mut WorkingSet, archive: &ArchiveIndex) {
    for record in set.records_mut() {
        if archive.contains(&record.canonical_name) {
            record.archived = true;
        }
    }
}
