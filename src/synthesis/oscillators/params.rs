//! Oscillator construction parameters.

use crate::error::{Error, Result, check_sample_rate};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The interval an oscillator's waveform is mapped into before amplitude
/// scaling. Defaults to `[-1, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct OutputRange {
    pub min: f64,
    pub max: f64,
}

impl OutputRange {
    /// Creates a range, failing if `min >= max` or either bound is not finite.
    ///
    /// # Examples
    ///
    /// ```
    /// use wavechain::OutputRange;
    ///
    /// // A unipolar LFO range
    /// let range = OutputRange::new(0.2, 1.0).unwrap();
    /// assert_eq!(range.map(-1.0), 0.2);
    ///
    /// assert!(OutputRange::new(1.0, 1.0).is_err());
    /// ```
    pub fn new(min: f64, max: f64) -> Result<Self> {
        let range = Self { min, max };
        range.validate()?;
        Ok(range)
    }

    pub fn validate(&self) -> Result<()> {
        if self.min.is_finite() && self.max.is_finite() && self.min < self.max {
            Ok(())
        } else {
            Err(Error::InvalidRange {
                min: self.min,
                max: self.max,
            })
        }
    }

    /// True for the native `[-1, 1]` range, where no mapping is applied.
    pub fn is_bipolar_unit(&self) -> bool {
        self.min == -1.0 && self.max == 1.0
    }

    /// Maps a value from `[-1, 1]` into this range.
    pub fn map(&self, value: f64) -> f64 {
        if self.is_bipolar_unit() {
            value
        } else {
            ((value + 1.0) / 2.0) * (self.max - self.min) + self.min
        }
    }
}

impl Default for OutputRange {
    fn default() -> Self {
        Self {
            min: -1.0,
            max: 1.0,
        }
    }
}

/// Initial parameters of an oscillator.
///
/// These are the "base" values modulation functions receive; the
/// oscillator's current values start from them on every `initialize`.
///
/// # Examples
///
/// ```
/// use wavechain::OscillatorParams;
///
/// let params = OscillatorParams::default()
///     .with_frequency(110.0)
///     .with_amplitude(0.4);
/// assert_eq!(params.sample_rate, 44100.0);
/// assert!(params.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct OscillatorParams {
    /// Frequency in Hz
    pub frequency: f64,
    pub amplitude: f64,
    /// Phase offset in degrees
    pub phase: f64,
    /// Sample rate in Hz
    pub sample_rate: f64,
    pub range: OutputRange,
}

impl Default for OscillatorParams {
    fn default() -> Self {
        Self {
            frequency: 440.0,
            amplitude: 1.0,
            phase: 0.0,
            sample_rate: 44100.0,
            range: OutputRange::default(),
        }
    }
}

impl OscillatorParams {
    pub fn with_frequency(mut self, frequency: f64) -> Self {
        self.frequency = frequency;
        self
    }

    pub fn with_amplitude(mut self, amplitude: f64) -> Self {
        self.amplitude = amplitude;
        self
    }

    /// Sets the phase offset in degrees.
    pub fn with_phase(mut self, degrees: f64) -> Self {
        self.phase = degrees;
        self
    }

    pub fn with_sample_rate(mut self, sample_rate: f64) -> Self {
        self.sample_rate = sample_rate;
        self
    }

    pub fn with_range(mut self, range: OutputRange) -> Self {
        self.range = range;
        self
    }

    /// Checks every parameter, reporting the first one that is invalid.
    pub fn validate(&self) -> Result<()> {
        check_sample_rate(self.sample_rate)?;
        if self.frequency == 0.0 || !self.frequency.is_finite() {
            return Err(Error::InvalidFrequency(self.frequency));
        }
        self.range.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_range_is_identity() {
        let range = OutputRange::default();
        assert!(range.is_bipolar_unit());
        assert_eq!(range.map(0.3), 0.3);
    }

    #[test]
    fn test_range_mapping() {
        let range = OutputRange::new(0.0, 1.0).unwrap();
        assert_eq!(range.map(-1.0), 0.0);
        assert_eq!(range.map(0.0), 0.5);
        assert_eq!(range.map(1.0), 1.0);
    }

    #[test]
    fn test_malformed_range() {
        assert_eq!(
            OutputRange::new(1.0, 0.0),
            Err(Error::InvalidRange { min: 1.0, max: 0.0 })
        );
        assert!(OutputRange::new(f64::NEG_INFINITY, 0.0).is_err());
    }

    #[test]
    fn test_defaults() {
        let params = OscillatorParams::default();
        assert_eq!(params.frequency, 440.0);
        assert_eq!(params.amplitude, 1.0);
        assert_eq!(params.phase, 0.0);
        assert_eq!(params.range, OutputRange::default());
    }

    #[test]
    fn test_validation() {
        let params = OscillatorParams::default();
        assert!(params.validate().is_ok());
        assert_eq!(
            params.with_frequency(0.0).validate(),
            Err(Error::InvalidFrequency(0.0))
        );
        assert_eq!(
            params.with_sample_rate(0.0).validate(),
            Err(Error::InvalidSampleRate(0.0))
        );
        let bad_range = OutputRange { min: 2.0, max: 1.0 };
        assert!(params.with_range(bad_range).validate().is_err());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_deserialize_with_defaults() {
        let params: OscillatorParams =
            serde_json::from_str(r#"{ "frequency": 220.0, "range": { "min": 0.0, "max": 1.0 } }"#)
                .unwrap();
        assert_eq!(params.frequency, 220.0);
        assert_eq!(params.sample_rate, 44100.0);
        assert_eq!(params.range.min, 0.0);
    }
}
