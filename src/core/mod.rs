//! Core business logic module
//!
//! This module contains the build-order logic. Filesystem and network
//! access belong in [`crate::infra`].
//!
//! # Submodules
//!
//! - [`recipe`] - Recipe record data model
//! - [`render`] - Recipe renderer interface and default TOML renderer
//! - [`index`] - Peer build-dependency index
//! - [`ordering`] - Working set and convergence engine
//! - [`manifest`] - Manifest parsing and filtering
//! - [`archive`] - Archive index and culling
//! - [`report`] - Output formatting

pub mod archive;
pub mod index;
pub mod manifest;
pub mod ordering;
pub mod recipe;
pub mod render;
pub mod report;
