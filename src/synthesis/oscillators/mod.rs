//! Oscillator implementations for audio synthesis.
//!
//! A single [`Oscillator`] type covers the sine, square, sawtooth and
//! triangle waveforms. Sine and square advance a running phase, sawtooth
//! and triangle count samples against the current period; otherwise they
//! differ only in the periodic function they evaluate.

mod oscillator;
mod params;
mod phase;
mod waveform;

pub use oscillator::Oscillator;
pub use params::{OscillatorParams, OutputRange};
pub use waveform::Waveform;
