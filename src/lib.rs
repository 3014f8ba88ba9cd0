//! Wavechain - composable audio synthesis building blocks
//!
//! Sound is described as a tree of [`Generator`]s. Leaves are oscillators,
//! envelopes, noise or constants; inner nodes modulate, chain modifiers or
//! mix their children. The whole tree advances one sample per
//! [`Generator::produce`] call after a single [`Generator::initialize`].
//!
//! ```
//! use wavechain::{ADSREnvelope, Generator, Oscillator};
//! use wavechain::composition::{Chain, WaveAdder};
//! use wavechain::modifiers::{ModulatedVolume, Panner};
//!
//! let sr = 44100.0;
//! let voice = Chain::new(Oscillator::triangle(261.63, sr).unwrap())
//!     .with_modifier(ModulatedVolume::new(ADSREnvelope::new(0.01, 0.1, 0.6, 0.2, sr).unwrap()))
//!     .with_modifier(Panner::new(0.7).unwrap());
//! let mut mix = WaveAdder::new(vec![Box::new(voice)], true).unwrap();
//!
//! mix.initialize();
//! let frame = mix.produce();
//! assert!(frame.is_stereo());
//! ```

pub mod composition;
pub mod core;
pub mod error;
pub mod modifiers;
pub mod modulation;
pub mod render;
pub mod synthesis;

// Re-export commonly used types at the crate root
pub use composition::{Chain, WaveAdder};
pub use crate::core::{Completion, Generator, Sample};
pub use error::{Error, Result};
pub use modifiers::{ModulatedPanner, ModulatedVolume, Modifier, Panner, Volume};
pub use modulation::{ModulatedOscillator, ModulatedOscillatorBuilder, ModulationFn};
pub use synthesis::{
    ADSREnvelope, EnvelopeParams, EnvelopeStage, Oscillator, OscillatorParams, OutputRange,
    Waveform, WhiteNoise,
};
