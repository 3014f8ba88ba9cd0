//! Parameter modulation.
//!
//! A [`ModulatedOscillator`] wraps an [`Oscillator`](crate::Oscillator)
//! and rewrites its amplitude, frequency or phase from other generators
//! every sample.

pub mod mods;
mod oscillator;

pub use oscillator::{ModulatedOscillator, ModulatedOscillatorBuilder, ModulationFn};
