//! Oscillator whose parameters follow modulation sources.

use std::iter;

use tracing::trace;

use crate::error::{Error, Result};
use crate::{Completion, Generator, Oscillator, Sample};

/// Maps `(base_value, modulation_value)` to a new parameter value.
pub type ModulationFn = Box<dyn Fn(f64, f64) -> f64>;

/// An oscillator bound to zero or more modulation sources.
///
/// Every sample, one value is pulled from each source in declared order
/// (stereo sources collapse to their mean). The configured modulation
/// functions then overwrite the oscillator's current parameters, in this
/// order:
/// - amplitude reads source 0
/// - frequency reads source 1 when there are two or more sources, else 0
/// - phase reads source 2 when there are exactly three sources, else the last
///
/// Each function receives the oscillator's *initial* value of the
/// parameter, so modulation never compounds across samples.
///
/// # Examples
///
/// ```
/// use wavechain::{ADSREnvelope, Generator, ModulatedOscillator, Oscillator};
/// use wavechain::modulation::mods;
///
/// let voice = ModulatedOscillator::builder(Oscillator::sine(220.0, 44100.0).unwrap())
///     .source(ADSREnvelope::new(0.01, 0.1, 0.4, 0.3, 44100.0).unwrap())
///     .amplitude_mod(mods::scale())
///     .build()
///     .unwrap();
/// assert_eq!(voice.source_count(), 1);
/// ```
pub struct ModulatedOscillator {
    oscillator: Oscillator,
    sources: Vec<Box<dyn Generator>>,
    amplitude_mod: Option<ModulationFn>,
    frequency_mod: Option<ModulationFn>,
    phase_mod: Option<ModulationFn>,
    values: Vec<f64>,
}

impl ModulatedOscillator {
    pub fn builder(oscillator: Oscillator) -> ModulatedOscillatorBuilder {
        ModulatedOscillatorBuilder {
            oscillator,
            sources: Vec::new(),
            amplitude_mod: None,
            frequency_mod: None,
            phase_mod: None,
        }
    }

    pub fn oscillator(&self) -> &Oscillator {
        &self.oscillator
    }

    pub fn source_count(&self) -> usize {
        self.sources.len()
    }

    fn modulate(&mut self) {
        let count = self.values.len();

        if let Some(f) = &self.amplitude_mod {
            if let Some(&value) = self.values.first() {
                let amplitude = f(self.oscillator.init_amplitude(), value);
                self.oscillator.set_amplitude(amplitude);
            }
        }

        if let Some(f) = &self.frequency_mod {
            let index = if count >= 2 { 1 } else { 0 };
            if let Some(&value) = self.values.get(index) {
                let frequency = f(self.oscillator.init_frequency(), value);
                self.oscillator.set_frequency(frequency);
            }
        }

        if let Some(f) = &self.phase_mod {
            let index = if count == 3 { 2 } else { count.saturating_sub(1) };
            if let Some(&value) = self.values.get(index) {
                let phase = f(self.oscillator.init_phase(), value);
                self.oscillator.set_phase(phase);
            }
        }
    }
}

impl Generator for ModulatedOscillator {
    fn initialize(&mut self) {
        trace!(sources = self.sources.len(), "initialize modulated oscillator");
        self.oscillator.initialize();
        for source in &mut self.sources {
            source.initialize();
        }
    }

    fn produce(&mut self) -> Sample {
        self.values.clear();
        self.values
            .extend(self.sources.iter_mut().map(|source| source.produce().to_mono()));
        self.modulate();
        self.oscillator.produce()
    }

    fn trigger_release(&mut self) {
        for source in &mut self.sources {
            source.trigger_release();
        }
        self.oscillator.trigger_release();
    }

    fn completion(&self) -> Completion {
        Completion::all(
            self.sources
                .iter()
                .map(|source| source.completion())
                .chain(iter::once(self.oscillator.completion())),
        )
    }
}

/// Builder for [`ModulatedOscillator`].
pub struct ModulatedOscillatorBuilder {
    oscillator: Oscillator,
    sources: Vec<Box<dyn Generator>>,
    amplitude_mod: Option<ModulationFn>,
    frequency_mod: Option<ModulationFn>,
    phase_mod: Option<ModulationFn>,
}

impl ModulatedOscillatorBuilder {
    /// Appends a modulation source. Sources are pulled in the order added.
    pub fn source(mut self, source: impl Generator + 'static) -> Self {
        self.sources.push(Box::new(source));
        self
    }

    pub fn amplitude_mod(mut self, f: impl Fn(f64, f64) -> f64 + 'static) -> Self {
        self.amplitude_mod = Some(Box::new(f));
        self
    }

    pub fn frequency_mod(mut self, f: impl Fn(f64, f64) -> f64 + 'static) -> Self {
        self.frequency_mod = Some(Box::new(f));
        self
    }

    /// The function receives and returns the phase in degrees.
    pub fn phase_mod(mut self, f: impl Fn(f64, f64) -> f64 + 'static) -> Self {
        self.phase_mod = Some(Box::new(f));
        self
    }

    /// Finishes the oscillator.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingModulationSource`] if a modulation function
    /// was configured without any source to feed it.
    pub fn build(self) -> Result<ModulatedOscillator> {
        if self.sources.is_empty() {
            let configured = [
                ("amplitude", self.amplitude_mod.is_some()),
                ("frequency", self.frequency_mod.is_some()),
                ("phase", self.phase_mod.is_some()),
            ];
            if let Some(&(parameter, _)) = configured.iter().find(|(_, set)| *set) {
                return Err(Error::MissingModulationSource(parameter));
            }
        }
        let capacity = self.sources.len();
        Ok(ModulatedOscillator {
            oscillator: self.oscillator,
            sources: self.sources,
            amplitude_mod: self.amplitude_mod,
            frequency_mod: self.frequency_mod,
            phase_mod: self.phase_mod,
            values: Vec::with_capacity(capacity),
        })
    }
}
