//! Test utilities
//!
//! Record construction helpers shared across module tests, plus
//! proptest generators.

use crate::core::recipe::{bare_name, RecipeRecord};

/// Build a complete record with the given build dependencies
pub fn record(name: &str, deps: &[&str]) -> RecipeRecord {
    let build_deps: Vec<String> = deps.iter().map(ToString::to_string).collect();
    let dep_names = build_deps
        .iter()
        .map(|dep| bare_name(dep).to_string())
        .collect();
    RecipeRecord {
        name: name.to_string(),
        version: "1.0.0".to_string(),
        build_deps,
        dep_names,
        complete: true,
        active: true,
        archived: false,
        canonical_name: format!("{name}-1.0.0-0.tar.gz"),
        recipe_dir: name.to_string(),
    }
}

pub mod generators {
    use proptest::prelude::*;

    /// Generate a valid package name (lowercase alphanumeric with hyphens)
    pub fn package_name() -> impl Strategy<Value = String> {
        "[a-z][a-z0-9-]{0,30}[a-z0-9]?".prop_filter("Name must not be empty", |s| !s.is_empty())
    }

    /// Generate a valid semver version string
    pub fn semver_version() -> impl Strategy<Value = String> {
        (1u32..100, 0u32..100, 0u32..100)
            .prop_map(|(major, minor, patch)| format!("{major}.{minor}.{patch}"))
    }

    /// Generate a dependency string, optionally with a version qualifier
    pub fn dep_spec() -> impl Strategy<Value = String> {
        (package_name(), prop::option::of(semver_version())).prop_map(|(name, version)| {
            match version {
                Some(v) => format!("{name} >={v}"),
                None => name,
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::generators::*;
    use crate::core::recipe::bare_name;
    use proptest::prelude::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        #[test]
        fn test_package_name_generator(name in package_name()) {
            prop_assert!(!name.is_empty());
            prop_assert!(name.chars().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-'));
        }

        #[test]
        fn test_semver_version_generator(version in semver_version()) {
            let parts: Vec<&str> = version.split('.').collect();
            prop_assert_eq!(parts.len(), 3);
            for part in parts {
                prop_assert!(part.parse::<u32>().is_ok());
            }
        }

        #[test]
        fn test_dep_spec_strips_to_bare_name(dep in dep_spec()) {
            let bare = bare_name(&dep);
            prop_assert!(!bare.contains(' '));
            prop_assert!(dep.starts_with(bare));
        }
    }
}
