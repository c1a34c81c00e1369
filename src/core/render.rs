//! Recipe renderer interface and default TOML renderer
//!
//! Rendering turns a recipe directory into a structured
//! [`RenderedRecipe`]. The ordering engine assumes nothing about the
//! templating technology behind a renderer; the default implementation
//! reads a plain `recipe.toml`.

use std::collections::BTreeMap;
use std::path::Path;

use serde::Deserialize;

use crate::config::defaults::{DEFAULT_PLATFORM, RECIPE_FILE};
use crate::error::RecipeError;

/// Configuration shared by recipe rendering, threaded explicitly through
/// record construction instead of living in process-wide state.
#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// Target platform, e.g. `linux-64`
    pub platform: String,

    /// Python version to render against, if any. Takes precedence over
    /// a `python` entry in `pins`.
    pub python: Option<String>,

    /// Pinned dependency versions, name to version string. The default
    /// renderer stamps these onto unqualified dependency strings.
    pub pins: BTreeMap<String, String>,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            platform: DEFAULT_PLATFORM.to_string(),
            python: None,
            pins: BTreeMap::new(),
        }
    }
}

/// Structured result of rendering one recipe directory
#[derive(Debug, Clone)]
pub struct RenderedRecipe {
    /// Package name
    pub name: String,

    /// Package version
    pub version: String,

    /// Build number
    pub build_number: u32,

    /// True when the recipe is inapplicable to the configured platform
    /// and must be excluded from the working set entirely
    pub skip: bool,

    /// Build requirements, `None` when the recipe declares none
    pub build_requirements: Option<Vec<String>>,

    /// Run requirements, if declared
    pub run_requirements: Option<Vec<String>>,

    /// Exact artifact filename this recipe would produce
    pub canonical_name: String,
}

/// Renders a recipe directory into structured metadata
pub trait RecipeRenderer {
    /// Render the recipe in `recipe_dir`.
    ///
    /// A directory without a recipe definition file yields
    /// [`RecipeError::MissingDefinition`]; the caller decides whether
    /// that is fatal (for a single recipe it is skipped with a
    /// diagnostic).
    fn render(
        &self,
        recipe_dir: &Path,
        config: &RenderConfig,
    ) -> Result<RenderedRecipe, RecipeError>;
}

/// Default renderer reading a plain `recipe.toml`
#[derive(Debug, Default)]
pub struct TomlRenderer;

#[derive(Debug, Deserialize)]
struct RecipeToml {
    package: PackageSection,
    #[serde(default)]
    build: BuildSection,
    #[serde(default)]
    requirements: Option<RequirementsSection>,
}

#[derive(Debug, Deserialize)]
struct PackageSection {
    name: String,
    version: String,
}

#[derive(Debug, Default, Deserialize)]
struct BuildSection {
    #[serde(default)]
    number: u32,
    /// Platforms on which this recipe must be skipped
    #[serde(default)]
    skip: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct RequirementsSection {
    #[serde(default)]
    build: Option<Vec<String>>,
    #[serde(default)]
    run: Option<Vec<String>>,
}

impl TomlRenderer {
    /// Create a new TOML renderer
    pub fn new() -> Self {
        Self
    }
}

/// Append the configured pin to every unqualified dependency string.
///
/// A dependency that already carries a version qualifier is left
/// alone; the explicit `python` version wins over a manifest pin of
/// the same name. Bare names are untouched either way, so ordering is
/// unaffected.
fn apply_pins(deps: Vec<String>, config: &RenderConfig) -> Vec<String> {
    deps.into_iter()
        .map(|dep| {
            if dep.split_whitespace().nth(1).is_some() {
                return dep;
            }
            let pin = if dep == "python" {
                config.python.as_ref().or_else(|| config.pins.get("python"))
            } else {
                config.pins.get(&dep)
            };
            match pin {
                Some(version) => format!("{dep} {version}"),
                None => dep,
            }
        })
        .collect()
}

impl RecipeRenderer for TomlRenderer {
    fn render(
        &self,
        recipe_dir: &Path,
        config: &RenderConfig,
    ) -> Result<RenderedRecipe, RecipeError> {
        let path = recipe_dir.join(RECIPE_FILE);
        if !path.is_file() {
            return Err(RecipeError::MissingDefinition {
                path: recipe_dir.to_path_buf(),
            });
        }

        let content = std::fs::read_to_string(&path).map_err(|e| RecipeError::IoError {
            path: path.clone(),
            error: e.to_string(),
        })?;
        let recipe: RecipeToml = toml::from_str(&content).map_err(|source| {
            RecipeError::Parse {
                path: path.clone(),
                source,
            }
        })?;

        semver::Version::parse(&recipe.package.version).map_err(|source| {
            RecipeError::InvalidVersion {
                package: recipe.package.name.clone(),
                version: recipe.package.version.clone(),
                source,
            }
        })?;

        let skip = recipe.build.skip.iter().any(|p| p == &config.platform);
        let canonical_name = format!(
            "{}-{}-{}.tar.gz",
            recipe.package.name, recipe.package.version, recipe.build.number
        );
        let (build_requirements, run_requirements) = match recipe.requirements {
            Some(reqs) => (
                reqs.build.map(|deps| apply_pins(deps, config)),
                reqs.run.map(|deps| apply_pins(deps, config)),
            ),
            None => (None, None),
        };

        Ok(RenderedRecipe {
            name: recipe.package.name,
            version: recipe.package.version,
            build_number: recipe.build.number,
            skip,
            build_requirements,
            run_requirements,
            canonical_name,
        })
    }
}
