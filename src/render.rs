//! Fixed-length rendering of a composition tree.
//!
//! A render always runs for the requested number of samples. Reaching
//! [`has_ended`](crate::Generator::has_ended) does not stop it early.

use tracing::debug;

use crate::error::{Error, Result, check_sample_rate};
use crate::{Generator, Sample};

/// Number of samples covering `seconds` at `sample_rate`, rounded down.
///
/// ```
/// assert_eq!(wavechain::render::duration_samples(44100.0, 0.5).unwrap(), 22050);
/// ```
pub fn duration_samples(sample_rate: f64, seconds: f64) -> Result<usize> {
    check_sample_rate(sample_rate)?;
    if !seconds.is_finite() || seconds < 0.0 {
        return Err(Error::InvalidDuration(seconds));
    }
    Ok((seconds * sample_rate) as usize)
}

/// Initializes `generator` once, then pulls exactly `samples` samples.
pub fn render(generator: &mut dyn Generator, samples: usize) -> Rendered {
    debug!(samples, "render");
    generator.initialize();
    let mut buffer = vec![Sample::Mono(0.0); samples];
    generator.process(&mut buffer);
    Rendered { samples: buffer }
}

/// The output of [`render`].
#[derive(Debug, Clone, PartialEq)]
pub struct Rendered {
    samples: Vec<Sample>,
}

impl Rendered {
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn samples(&self) -> &[Sample] {
        &self.samples
    }

    /// Splits the render into left and right channels. Mono samples are
    /// written to both.
    pub fn channels(&self) -> (Vec<f64>, Vec<f64>) {
        self.samples.iter().map(|sample| sample.to_stereo()).unzip()
    }

    /// Largest absolute value over every channel, 0 for an empty render.
    pub fn peak(&self) -> f64 {
        self.samples
            .iter()
            .map(|sample| sample.peak())
            .fold(0.0, f64::max)
    }

    pub fn into_samples(self) -> Vec<Sample> {
        self.samples
    }
}
