//! Timebases for the oscillator waveforms.
//!
//! Sine and square read a running phase accumulator. The sawtooth family
//! reads a sample counter divided by the current period instead, so a
//! frequency change rescales the whole elapsed time rather than only the
//! next step.

/// Tracks the position within a cycle, in cycles, wrapped to `[0.0, 1.0)`.
///
/// The increment is `frequency / sample_rate` and is recomputed whenever the
/// frequency changes, so a frequency change takes effect on the next sample
/// without a discontinuity in phase.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct PhaseAccumulator {
    position: f64,
    increment: f64,
    sample_rate: f64,
}

impl PhaseAccumulator {
    pub(crate) fn new(frequency: f64, sample_rate: f64) -> Self {
        Self {
            position: 0.0,
            increment: frequency / sample_rate,
            sample_rate,
        }
    }

    pub(crate) fn position(&self) -> f64 {
        self.position
    }

    pub(crate) fn set_frequency(&mut self, frequency: f64) {
        self.increment = frequency / self.sample_rate;
    }

    pub(crate) fn advance(&mut self) {
        self.position = (self.position + self.increment).rem_euclid(1.0);
    }

    pub(crate) fn reset(&mut self) {
        self.position = 0.0;
    }
}

/// Counts samples and measures them in periods of `sample_rate / frequency`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct SampleCounter {
    index: u64,
    period: f64,
    sample_rate: f64,
}

impl SampleCounter {
    pub(crate) fn new(frequency: f64, sample_rate: f64) -> Self {
        Self {
            index: 0,
            period: sample_rate / frequency,
            sample_rate,
        }
    }

    /// Elapsed samples expressed in periods of the current frequency.
    pub(crate) fn position(&self) -> f64 {
        self.index as f64 / self.period
    }

    pub(crate) fn set_frequency(&mut self, frequency: f64) {
        self.period = self.sample_rate / frequency;
    }

    pub(crate) fn advance(&mut self) {
        self.index += 1;
    }

    pub(crate) fn reset(&mut self) {
        self.index = 0;
    }
}

/// The timebase an oscillator advances once per sample.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum Clock {
    Phase(PhaseAccumulator),
    Samples(SampleCounter),
}

impl Clock {
    pub(crate) fn position(&self) -> f64 {
        match self {
            Clock::Phase(acc) => acc.position(),
            Clock::Samples(counter) => counter.position(),
        }
    }

    pub(crate) fn set_frequency(&mut self, frequency: f64) {
        match self {
            Clock::Phase(acc) => acc.set_frequency(frequency),
            Clock::Samples(counter) => counter.set_frequency(frequency),
        }
    }

    pub(crate) fn advance(&mut self) {
        match self {
            Clock::Phase(acc) => acc.advance(),
            Clock::Samples(counter) => counter.advance(),
        }
    }

    pub(crate) fn reset(&mut self) {
        match self {
            Clock::Phase(acc) => acc.reset(),
            Clock::Samples(counter) => counter.reset(),
        }
    }
}
