//! Recipe directory enumeration
//!
//! Walks the immediate subdirectories of a recipes directory, renders
//! each candidate, and produces the records that enter the working set.

use std::collections::HashSet;
use std::path::Path;

use crate::config::defaults::IGNORE_DIRS;
use crate::core::recipe::RecipeRecord;
use crate::core::render::{RecipeRenderer, RenderConfig};
use crate::error::{BuildOrderError, RecipeError};

/// Load recipe records from `recipes_dir`.
///
/// Candidate directory names are sorted before rendering so record
/// construction is independent of filesystem enumeration order. When a
/// manifest `selection` is given, only directories named in it are
/// considered at all. Directories without a recipe definition are
/// skipped with a diagnostic; recipes skipped on the configured
/// platform never become records.
pub fn load_records(
    recipes_dir: &Path,
    renderer: &dyn RecipeRenderer,
    config: &RenderConfig,
    selection: Option<&HashSet<&str>>,
) -> Result<Vec<RecipeRecord>, BuildOrderError> {
    if !recipes_dir.is_dir() {
        return Err(BuildOrderError::RecipesDirNotFound {
            path: recipes_dir.to_path_buf(),
        });
    }

    let mut dirnames = Vec::new();
    let entries =
        std::fs::read_dir(recipes_dir).map_err(|source| BuildOrderError::Io { source })?;
    for entry in entries {
        let entry = entry.map_err(|source| BuildOrderError::Io { source })?;
        if entry.path().is_dir() {
            dirnames.push(entry.file_name().to_string_lossy().into_owned());
        }
    }
    dirnames.sort();

    let mut records = Vec::new();
    for dirname in &dirnames {
        if IGNORE_DIRS.contains(&dirname.as_str()) {
            continue;
        }
        if let Some(selected) = selection {
            if !selected.contains(dirname.as_str()) {
                tracing::debug!("'{dirname}' not in manifest, skipping");
                continue;
            }
        }

        match renderer.render(&recipes_dir.join(dirname), config) {
            Ok(rendered) if rendered.skip => {
                tracing::info!(
                    "skipping '{}' on platform {} due to directive",
                    rendered.name,
                    config.platform
                );
            }
            Ok(rendered) => records.push(RecipeRecord::from_rendered(rendered, dirname)),
            Err(RecipeError::MissingDefinition { path }) => {
                tracing::warn!(
                    "Recipe directory '{}' has no recipe definition file",
                    path.display()
                );
            }
            Err(e) => return Err(e.into()),
        }
    }

    Ok(records)
}
