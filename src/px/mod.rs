//! PX format decoding.
//!
//! SCB publishes statistics in the legacy `.px` format: a sequence of
//! keyword statements terminated by `;`, with the observation matrix in a
//! `DATA = ... ;` block. This module extracts:
//!
//! - the numeric series from the first DATA block (`decode`)
//! - year/category labels from metadata statements (`labels`)
//!
//! Decoding never fails: a text with no recognizable structure decodes to an
//! empty series.

pub mod decode;
pub mod labels;

pub use decode::*;
pub use labels::*;
