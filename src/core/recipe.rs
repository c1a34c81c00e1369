//! Recipe record data model
//!
//! A [`RecipeRecord`] holds the identity and dependency facts of one
//! package, as produced by a recipe renderer. Records are immutable after
//! construction except for the `active`/`archived` flags and their
//! position within the working set.

use crate::core::render::RenderedRecipe;

/// Strip a version qualifier from a dependency string, leaving the bare
/// package name ("libfoo >=1.2" becomes "libfoo").
pub fn bare_name(dep: &str) -> &str {
    dep.split_whitespace().next().unwrap_or(dep)
}

/// Metadata for one package recipe
#[derive(Debug, Clone)]
pub struct RecipeRecord {
    /// Package name, unique within a working set
    pub name: String,

    /// Package version
    pub version: String,

    /// Declared build dependencies, full strings with version qualifiers
    pub build_deps: Vec<String>,

    /// Bare names of the build dependencies, for comparison
    pub dep_names: Vec<String>,

    /// Whether the recipe carried an explicit build-dependency list
    pub complete: bool,

    /// False once a manifest filter excludes this record
    pub active: bool,

    /// True once the canonical name was found in a channel archive
    pub archived: bool,

    /// Exact artifact filename this recipe would produce
    pub canonical_name: String,

    /// Recipe directory name, kept for diagnostics
    pub recipe_dir: String,
}

impl RecipeRecord {
    /// Build a record from a rendered recipe.
    ///
    /// A missing build-requirements list yields an incomplete record
    /// rather than an error; incomplete records carry no dependency
    /// information and are excluded from peer-dependency computation.
    pub fn from_rendered(rendered: RenderedRecipe, recipe_dir: &str) -> Self {
        let complete = rendered.build_requirements.is_some();
        let build_deps = rendered.build_requirements.unwrap_or_default();
        let dep_names = build_deps
            .iter()
            .map(|dep| bare_name(dep).to_string())
            .collect();

        Self {
            name: rendered.name,
            version: rendered.version,
            build_deps,
            dep_names,
            complete,
            active: true,
            archived: false,
            canonical_name: rendered.canonical_name,
            recipe_dir: recipe_dir.to_string(),
        }
    }

    /// Number of declared build dependencies
    pub fn num_build_deps(&self) -> usize {
        self.build_deps.len()
    }
}
