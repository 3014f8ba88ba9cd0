//! Audio synthesis components.
//!
//! This module provides the leaf generators of a composition tree:
//! - Oscillators (sine, square, sawtooth, triangle)
//! - Envelopes (ADSR)
//! - Noise generators (white)

pub mod envelopes;
pub mod noise;
pub mod oscillators;

pub use envelopes::{ADSREnvelope, EnvelopeParams, EnvelopeStage};
pub use noise::WhiteNoise;
pub use oscillators::{Oscillator, OscillatorParams, OutputRange, Waveform};
