//! Gain stages.

use crate::{Completion, Generator, Sample};

/// Scales every channel by a fixed amount.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Volume {
    amplitude: f64,
}

impl Volume {
    pub fn new(amplitude: f64) -> Self {
        Self { amplitude }
    }

    pub fn amplitude(&self) -> f64 {
        self.amplitude
    }
}

impl super::Modifier for Volume {
    fn apply(&self, input: Sample) -> Sample {
        input.scale(self.amplitude)
    }
}

/// A [`Volume`] whose amplitude follows a generator, typically an envelope.
///
/// # Examples
///
/// ```
/// use wavechain::{ADSREnvelope, Generator, Oscillator};
/// use wavechain::composition::Chain;
/// use wavechain::modifiers::ModulatedVolume;
///
/// let env = ADSREnvelope::new(0.01, 0.1, 0.5, 0.2, 44100.0).unwrap();
/// let mut voice = Chain::new(Oscillator::sine(440.0, 44100.0).unwrap())
///     .with_modifier(ModulatedVolume::new(env));
/// voice.initialize();
/// voice.produce();
/// assert!(!voice.has_ended());
/// ```
pub struct ModulatedVolume<G: Generator> {
    source: G,
    amplitude: f64,
}

impl<G: Generator> ModulatedVolume<G> {
    pub fn new(source: G) -> Self {
        Self {
            source,
            amplitude: 0.0,
        }
    }

    /// Amplitude taken from the last source sample.
    pub fn amplitude(&self) -> f64 {
        self.amplitude
    }
}

impl<G: Generator> super::Modifier for ModulatedVolume<G> {
    fn apply(&self, input: Sample) -> Sample {
        input.scale(self.amplitude)
    }

    fn carries_state(&self) -> bool {
        true
    }

    fn initialize(&mut self) {
        self.source.initialize();
        self.amplitude = 0.0;
    }

    fn advance(&mut self) {
        self.amplitude = self.source.produce().to_mono();
    }

    fn trigger_release(&mut self) {
        self.source.trigger_release();
    }

    fn completion(&self) -> Completion {
        self.source.completion()
    }
}
