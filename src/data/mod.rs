//! Data acquisition.
//!
//! This module provides:
//!
//! - the built-in milestone/source catalog used to seed a store
//! - the blocking SCB HTTP client with conditional-request support
//! - payload classification (JSON vs PX text) shared by client and tests

pub mod catalog;
pub mod scb;

pub use catalog::*;
pub use scb::*;
