//! Progress projection.
//!
//! Turns a goal specification and an observed series into:
//!
//! - a linear expected trajectory per year (`trajectory`)
//! - expected/achieved percent figures (`percent`)
//! - merged actual-vs-expected chart rows (`chart`)
//!
//! This is the only place these formulas live; the sync pipeline, the list
//! table, and the detail view all call through here. Everything is pure,
//! and "now" is always an explicit parameter.

pub mod chart;
pub mod percent;
pub mod trajectory;

pub use chart::*;
pub use percent::*;
pub use trajectory::*;
