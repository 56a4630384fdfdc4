//! Domain types used throughout the tool.
//!
//! This module defines:
//!
//! - the rows the JSON store persists (`Milestone`, `SourceRow`, `CacheRow`)
//! - goal specifications and their tolerant JSON extraction (`goal`)

pub mod goal;
pub mod types;

pub use goal::*;
pub use types::*;
