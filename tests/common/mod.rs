//! Common test utilities and helpers
//!
//! This module provides shared utilities for integration tests.

use std::path::PathBuf;
use std::process::{Command, Output};
use tempfile::TempDir;

/// Test project context
///
/// Creates a temporary directory holding a recipes tree and provides
/// utilities for setting up test scenarios.
pub struct TestProject {
    /// Temporary directory for the test project
    pub dir: TempDir,
}

impl TestProject {
    /// Create a new test project in a temporary directory
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp directory"),
        }
    }

    /// Path to the recipes directory
    pub fn recipes_dir(&self) -> PathBuf {
        self.dir.path().join("recipes")
    }

    /// Create a recipe directory with the given build dependencies
    pub fn create_recipe(&self, dirname: &str, name: &str, deps: &[&str]) {
        let dir = self.recipes_dir().join(dirname);
        std::fs::create_dir_all(&dir).expect("Failed to create recipe directory");
        let deps = deps
            .iter()
            .map(|d| format!("\"{d}\""))
            .collect::<Vec<_>>()
            .join(", ");
        let content = format!(
            "[package]\nname = \"{name}\"\nversion = \"1.0.0\"\n\n[requirements]\nbuild = [{deps}]\n"
        );
        std::fs::write(dir.join("recipe.toml"), content).expect("Failed to write recipe");
    }

    /// Create a recipe directory without a requirements section
    pub fn create_incomplete_recipe(&self, dirname: &str, name: &str) {
        let dir = self.recipes_dir().join(dirname);
        std::fs::create_dir_all(&dir).expect("Failed to create recipe directory");
        let content = format!("[package]\nname = \"{name}\"\nversion = \"1.0.0\"\n");
        std::fs::write(dir.join("recipe.toml"), content).expect("Failed to write recipe");
    }

    /// Create a manifest file and return its path
    pub fn create_manifest(&self, channel_url: &str, packages: &[&str]) -> PathBuf {
        let packages = packages
            .iter()
            .map(|p| format!("\"{p}\""))
            .collect::<Vec<_>>()
            .join(", ");
        let content = format!("channel_url = \"{channel_url}\"\npackages = [{packages}]\n");
        let path = self.dir.path().join("manifest.toml");
        std::fs::write(&path, content).expect("Failed to write manifest");
        path
    }

    /// Read a file from the test project
    pub fn read_file(&self, name: &str) -> String {
        std::fs::read_to_string(self.dir.path().join(name)).expect("Failed to read file")
    }
}

impl Default for TestProject {
    fn default() -> Self {
        Self::new()
    }
}

/// Run the buildorder binary with the given subcommand and extra args
pub fn run_buildorder(project: &TestProject, subcommand: &str, args: &[&str]) -> Output {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_buildorder"));
    cmd.current_dir(project.dir.path());
    cmd.arg(subcommand);
    cmd.arg(project.recipes_dir());
    cmd.arg("--quiet");
    for arg in args {
        cmd.arg(arg);
    }
    cmd.output().expect("Failed to execute buildorder")
}

/// Stdout of a finished run as a string
#[allow(dead_code)]
pub fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

/// Stderr of a finished run as a string
#[allow(dead_code)]
pub fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}
