//! Core signal types and traits.
//!
//! This module provides the abstractions shared by every node:
//! - `Sample` for mono values and stereo frames
//! - `Generator` for anything that can be initialized and pulled
//! - `Completion` for the optional release/ended capability

mod sample;
mod signal;

pub use sample::Sample;
pub use signal::{Completion, Generator};
