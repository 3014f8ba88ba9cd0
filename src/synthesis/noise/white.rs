//! White noise generator implementation.

use rand::Rng;

use crate::error::Result;
use crate::{Generator, OutputRange, Sample};

/// A white noise generator.
///
/// White noise has equal power across all frequencies. Each sample is
/// a random value uniformly distributed between -1.0 and 1.0, mapped into
/// the output range and scaled by the amplitude like an oscillator.
///
/// The random source is injected. `initialize` restores the generator to
/// the state it was handed in, so a seeded generator replays the same
/// stream after every restart. The default `ThreadRng` is a handle to a
/// shared thread-local generator and keeps producing fresh values.
pub struct WhiteNoise<R: Rng + Clone = rand::rngs::ThreadRng> {
    amplitude: f64,
    range: OutputRange,
    initial: R,
    rng: R,
}

impl WhiteNoise<rand::rngs::ThreadRng> {
    /// Creates a new white noise generator with the default ThreadRng.
    ///
    /// # Examples
    ///
    /// ```
    /// use wavechain::{Generator, WhiteNoise};
    ///
    /// let mut noise = WhiteNoise::new(0.5);
    /// let sample = noise.produce().to_mono();
    /// assert!((-0.5..=0.5).contains(&sample));
    /// ```
    pub fn new(amplitude: f64) -> Self {
        Self::with_rng(amplitude, rand::thread_rng())
    }
}

impl<R: Rng + Clone> WhiteNoise<R> {
    /// Creates a new white noise generator with a custom RNG.
    ///
    /// # Examples
    ///
    /// ```
    /// use wavechain::{Generator, WhiteNoise};
    /// use rand::SeedableRng;
    ///
    /// let rng = rand::rngs::StdRng::seed_from_u64(42);
    /// let mut noise = WhiteNoise::with_rng(1.0, rng);
    /// let sample = noise.produce();
    /// ```
    pub fn with_rng(amplitude: f64, rng: R) -> Self {
        Self {
            amplitude,
            range: OutputRange::default(),
            initial: rng.clone(),
            rng,
        }
    }

    /// Maps the noise into `range` instead of `[-1, 1]`.
    pub fn with_range(mut self, range: OutputRange) -> Result<Self> {
        range.validate()?;
        self.range = range;
        Ok(self)
    }

    pub fn amplitude(&self) -> f64 {
        self.amplitude
    }

    pub fn set_amplitude(&mut self, amplitude: f64) {
        self.amplitude = amplitude;
    }
}

impl<R: Rng + Clone> Generator for WhiteNoise<R> {
    fn initialize(&mut self) {
        self.rng = self.initial.clone();
    }

    fn produce(&mut self) -> Sample {
        let value: f64 = self.rng.gen_range(-1.0..=1.0);
        Sample::Mono(self.range.map(value) * self.amplitude)
    }
}
