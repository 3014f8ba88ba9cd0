//! Construction-time errors.
//!
//! Every generator, envelope and modifier validates its parameters when it
//! is built. Once a composition tree exists, producing samples cannot fail.

use thiserror::Error;

/// Errors raised while building a node of a composition tree.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// The sample rate was zero, negative or not finite.
    #[error("sample rate must be positive and finite, got {0}")]
    InvalidSampleRate(f64),

    /// An envelope stage was given a negative (or non-finite) duration.
    #[error("{stage} duration must be non-negative, got {seconds}s")]
    NegativeDuration { stage: &'static str, seconds: f64 },

    /// The output range was empty or inverted.
    #[error("output range minimum {min} must be below maximum {max}")]
    InvalidRange { min: f64, max: f64 },

    /// Oscillators need a non-zero, finite frequency.
    #[error("oscillator frequency must be non-zero and finite, got {0}")]
    InvalidFrequency(f64),

    /// Sustain level outside of `[0, 1]`.
    #[error("sustain level must lie in [0, 1], got {0}")]
    InvalidSustainLevel(f64),

    /// Pan position outside of `[0, 1]`.
    #[error("pan must lie in [0, 1], got {0}")]
    InvalidPan(f64),

    /// A mixer was built without any children.
    #[error("a wave adder needs at least one generator")]
    EmptyMix,

    /// A modulation function was configured but nothing feeds it.
    #[error("{0} modulation is configured but no modulation source was given")]
    MissingModulationSource(&'static str),

    /// A render duration was negative or not finite.
    #[error("render duration must be non-negative, got {0}s")]
    InvalidDuration(f64),
}

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, Error>;

pub(crate) fn check_sample_rate(sample_rate: f64) -> Result<f64> {
    if sample_rate.is_finite() && sample_rate > 0.0 {
        Ok(sample_rate)
    } else {
        Err(Error::InvalidSampleRate(sample_rate))
    }
}

pub(crate) fn check_duration(stage: &'static str, seconds: f64) -> Result<f64> {
    if seconds.is_finite() && seconds >= 0.0 {
        Ok(seconds)
    } else {
        Err(Error::NegativeDuration { stage, seconds })
    }
}
