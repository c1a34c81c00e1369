//! Error types for buildorder
//!
//! Domain-specific error types using thiserror.

use std::path::PathBuf;
use thiserror::Error;

/// Recipe rendering errors
#[derive(Error, Debug)]
pub enum RecipeError {
    /// Recipe directory has no recipe definition file
    #[error("Recipe directory '{path}' has no recipe definition file")]
    MissingDefinition { path: PathBuf },

    /// Recipe definition could not be parsed
    #[error("Failed to parse recipe '{path}': {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },

    /// Recipe version is not a valid semver string
    #[error("Recipe '{package}' has invalid version '{version}': {source}")]
    InvalidVersion {
        package: String,
        version: String,
        source: semver::Error,
    },

    /// IO error while reading a recipe
    #[error("IO error for '{path}': {error}")]
    IoError { path: PathBuf, error: String },
}

/// Manifest errors
#[derive(Error, Debug)]
pub enum ManifestError {
    /// Manifest file not found
    #[error("Manifest not found at '{path}'")]
    NotFound { path: PathBuf },

    /// Manifest parse error
    #[error("Failed to parse manifest '{path}': {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },

    /// IO error while reading the manifest
    #[error("IO error for '{path}': {error}")]
    IoError { path: PathBuf, error: String },
}

/// Channel archive-index errors
#[derive(Error, Debug)]
pub enum ChannelError {
    /// Network error
    #[error("Network error fetching '{url}': {error}")]
    Network { url: String, error: String },

    /// Unexpected HTTP status
    #[error("Channel '{url}' returned HTTP status {status}")]
    Status { url: String, status: u16 },

    /// Index body could not be parsed
    #[error("Failed to parse archive index from '{url}': {error}")]
    Parse { url: String, error: String },
}

/// Working-set ordering errors
///
/// Both variants are fatal: duplicates are rejected before ordering
/// begins, and an unknown-name lookup means an internal invariant was
/// broken (peer dependencies are computed only from in-set names).
#[derive(Error, Debug)]
pub enum OrderError {
    /// Two records share a package name
    #[error("Duplicate package name '{name}' in working set")]
    DuplicateName { name: String },

    /// Lookup of a name absent from the working set
    #[error("Package name '{name}' not found in working set")]
    UnknownName { name: String },
}

/// Top-level buildorder error type
#[derive(Error, Debug)]
pub enum BuildOrderError {
    /// Recipe error
    #[error("Recipe error: {0}")]
    Recipe(#[from] RecipeError),

    /// Manifest error
    #[error("Manifest error: {0}")]
    Manifest(#[from] ManifestError),

    /// Channel error
    #[error("Channel error: {0}")]
    Channel(#[from] ChannelError),

    /// Ordering error
    #[error("Ordering error: {0}")]
    Order(#[from] OrderError),

    /// Recipes directory not found
    #[error("Recipes directory not found: {path}")]
    RecipesDirNotFound { path: PathBuf },

    /// IO error
    #[error("IO error: {source}")]
    Io { source: std::io::Error },
}
