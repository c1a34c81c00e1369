//! Buildorder - recipe analyzer and build-order optimizer
//!
//! This library computes a dependency-safe build sequence for a directory
//! of package recipes: every package is placed after all of the build
//! dependencies that are themselves members of the working set.
//!
//! # Architecture
//!
//! The crate is organized into several modules:
//!
//! - [`cli`] - Command-line interface parsing and output formatting
//! - [`core`] - Business logic (working set, ordering engine, reports)
//! - [`infra`] - Infrastructure layer (recipe enumeration, channel fetch)
//! - [`config`] - Configuration and constants
//! - [`error`] - Error types and handling

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod infra;

#[cfg(test)]
pub mod test_utils;
