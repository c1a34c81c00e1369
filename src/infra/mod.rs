//! Infrastructure layer
//!
//! Handles all I/O operations: recipe directory enumeration and the
//! channel archive-index fetch. This module is the only place where
//! side effects occur.

pub mod channel;
pub mod recipes;
