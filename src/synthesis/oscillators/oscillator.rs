//! Oscillator implementation.

use super::phase::{Clock, PhaseAccumulator, SampleCounter};
use super::{OscillatorParams, OutputRange, Waveform};
use crate::error::Result;
use crate::{Generator, Sample};

/// A periodic waveform generator.
///
/// The oscillator keeps its construction parameters as immutable "init"
/// values and a mutable copy that modulation may overwrite every sample.
/// Setters take effect immediately: the phase increment (sine, square) or
/// the period (sawtooth, triangle) and the phase offset are recomputed on
/// every call.
///
/// # Examples
///
/// ```
/// use wavechain::{Generator, Oscillator, Sample};
///
/// let mut osc = Oscillator::sine(441.0, 44100.0).unwrap();
/// osc.initialize();
/// assert_eq!(osc.produce(), Sample::Mono(0.0));
/// ```
#[derive(Debug, Clone)]
pub struct Oscillator {
    waveform: Waveform,
    init: OscillatorParams,
    frequency: f64,
    amplitude: f64,
    phase: f64,
    phase_offset: f64,
    clock: Clock,
}

impl Oscillator {
    /// Creates an oscillator, validating every parameter.
    ///
    /// # Arguments
    ///
    /// * `waveform` - The periodic function to evaluate
    /// * `params` - Initial frequency, amplitude, phase (degrees), sample
    ///   rate and output range
    ///
    /// # Errors
    ///
    /// Fails on a non-positive sample rate, a zero or non-finite frequency,
    /// or a malformed output range.
    pub fn new(waveform: Waveform, params: OscillatorParams) -> Result<Self> {
        params.validate()?;
        Ok(Self {
            waveform,
            init: params,
            frequency: params.frequency,
            amplitude: params.amplitude,
            phase: params.phase,
            phase_offset: waveform.phase_offset(params.phase),
            clock: Self::clock_for(waveform, &params),
        })
    }

    /// Sine oscillator with default amplitude, phase and range.
    pub fn sine(frequency: f64, sample_rate: f64) -> Result<Self> {
        Self::new(Waveform::Sine, Self::base_params(frequency, sample_rate))
    }

    /// Square oscillator with a 50% duty cycle.
    pub fn square(frequency: f64, sample_rate: f64) -> Result<Self> {
        Self::new(Waveform::square(), Self::base_params(frequency, sample_rate))
    }

    pub fn sawtooth(frequency: f64, sample_rate: f64) -> Result<Self> {
        Self::new(Waveform::Sawtooth, Self::base_params(frequency, sample_rate))
    }

    pub fn triangle(frequency: f64, sample_rate: f64) -> Result<Self> {
        Self::new(Waveform::Triangle, Self::base_params(frequency, sample_rate))
    }

    fn clock_for(waveform: Waveform, params: &OscillatorParams) -> Clock {
        if waveform.counts_samples() {
            Clock::Samples(SampleCounter::new(params.frequency, params.sample_rate))
        } else {
            Clock::Phase(PhaseAccumulator::new(params.frequency, params.sample_rate))
        }
    }

    fn base_params(frequency: f64, sample_rate: f64) -> OscillatorParams {
        OscillatorParams::default()
            .with_frequency(frequency)
            .with_sample_rate(sample_rate)
    }

    pub fn waveform(&self) -> Waveform {
        self.waveform
    }

    pub fn params(&self) -> &OscillatorParams {
        &self.init
    }

    pub fn sample_rate(&self) -> f64 {
        self.init.sample_rate
    }

    pub fn range(&self) -> OutputRange {
        self.init.range
    }

    pub fn init_frequency(&self) -> f64 {
        self.init.frequency
    }

    pub fn init_amplitude(&self) -> f64 {
        self.init.amplitude
    }

    /// Initial phase in degrees.
    pub fn init_phase(&self) -> f64 {
        self.init.phase
    }

    pub fn frequency(&self) -> f64 {
        self.frequency
    }

    pub fn amplitude(&self) -> f64 {
        self.amplitude
    }

    /// Current phase in degrees.
    pub fn phase(&self) -> f64 {
        self.phase
    }

    pub fn set_frequency(&mut self, frequency: f64) {
        self.frequency = frequency;
        self.clock.set_frequency(frequency);
    }

    pub fn set_amplitude(&mut self, amplitude: f64) {
        self.amplitude = amplitude;
    }

    /// Sets the phase offset in degrees.
    pub fn set_phase(&mut self, degrees: f64) {
        self.phase = degrees;
        self.phase_offset = self.waveform.phase_offset(degrees);
    }
}

impl Generator for Oscillator {
    fn initialize(&mut self) {
        self.set_frequency(self.init.frequency);
        self.set_amplitude(self.init.amplitude);
        self.set_phase(self.init.phase);
        self.clock.reset();
    }

    fn produce(&mut self) -> Sample {
        let value = self
            .waveform
            .evaluate(self.clock.position(), self.phase_offset, &self.init.range);
        self.clock.advance();
        Sample::Mono(value * self.amplitude)
    }
}
