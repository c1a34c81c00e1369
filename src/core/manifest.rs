//! Manifest parsing and filtering
//!
//! A manifest names the channel to compare against, optional version
//! pins for the renderer, and the subset of packages to process.

use std::collections::{BTreeMap, HashSet};
use std::path::Path;

use serde::Deserialize;

use crate::core::ordering::WorkingSet;
use crate::error::ManifestError;

/// External filter file restricting a buildorder run
#[derive(Debug, Clone, Deserialize)]
pub struct Manifest {
    /// Channel base URL holding already-built artifacts
    pub channel_url: String,

    /// Packages to restrict processing to
    pub packages: Vec<String>,

    /// Pinned dependency versions, merged into the render configuration
    #[serde(default)]
    pub pins: BTreeMap<String, String>,
}

impl Manifest {
    /// Load and parse a manifest file
    pub fn load(path: &Path) -> Result<Self, ManifestError> {
        if !path.is_file() {
            return Err(ManifestError::NotFound {
                path: path.to_path_buf(),
            });
        }
        let content = std::fs::read_to_string(path).map_err(|e| ManifestError::IoError {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;
        toml::from_str(&content).map_err(|source| ManifestError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Manifest package names as a set
    pub fn package_set(&self) -> HashSet<&str> {
        self.packages.iter().map(String::as_str).collect()
    }

    /// Platform-specific channel URL, `<channel_url>/<platform>`
    pub fn channel_platform_url(&self, platform: &str) -> String {
        format!("{}/{platform}", self.channel_url.trim_end_matches('/'))
    }
}

/// Deactivate every record whose name is absent from the manifest.
///
/// Records stay in the sequence and keep their positions; the flag only
/// narrows which records are eligible for culled output.
pub fn filter_by_manifest(set: &mut WorkingSet, manifest: &Manifest) {
    let selected = manifest.package_set();
    for record in set.records_mut() {
        if !selected.contains(record.name.as_str()) {
            record.active = false;
        }
    }
}
