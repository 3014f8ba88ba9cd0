//! Stereo panning.

use crate::error::{Error, Result};
use crate::{Completion, Generator, Sample};

fn pan_sample(pan: f64, input: Sample) -> Sample {
    let value = input.to_mono();
    let right = 2.0 * pan;
    let left = 2.0 - right;
    Sample::Stereo(left * value, right * value)
}

/// Places a mono signal in the stereo field.
///
/// The right gain is `2 · pan` and the left gain `2 − right`, so `0.5`
/// leaves both channels at unity and `0` or `1` pan hard left or right.
/// A stereo input is collapsed to its mean first.
///
/// # Examples
///
/// ```
/// use wavechain::{Sample, modifiers::{Modifier, Panner}};
///
/// let panner = Panner::new(0.0).unwrap();
/// assert_eq!(panner.apply(Sample::Mono(0.5)), Sample::Stereo(1.0, 0.0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Panner {
    pan: f64,
}

impl Panner {
    /// Fails with [`Error::InvalidPan`] unless `pan` lies in `[0, 1]`.
    pub fn new(pan: f64) -> Result<Self> {
        if !(0.0..=1.0).contains(&pan) {
            return Err(Error::InvalidPan(pan));
        }
        Ok(Self { pan })
    }

    pub fn pan(&self) -> f64 {
        self.pan
    }
}

impl super::Modifier for Panner {
    fn apply(&self, input: Sample) -> Sample {
        pan_sample(self.pan, input)
    }
}

/// A [`Panner`] whose position follows a generator.
///
/// The source value is written into the pan coefficient as is; keeping it
/// within `[0, 1]` is up to the source.
pub struct ModulatedPanner<G: Generator> {
    source: G,
    pan: f64,
}

impl<G: Generator> ModulatedPanner<G> {
    pub fn new(source: G) -> Self {
        Self { source, pan: 0.5 }
    }

    /// Pan position taken from the last source sample.
    pub fn pan(&self) -> f64 {
        self.pan
    }
}

impl<G: Generator> super::Modifier for ModulatedPanner<G> {
    fn apply(&self, input: Sample) -> Sample {
        pan_sample(self.pan, input)
    }

    fn carries_state(&self) -> bool {
        true
    }

    fn initialize(&mut self) {
        self.source.initialize();
        self.pan = 0.5;
    }

    fn advance(&mut self) {
        self.pan = self.source.produce().to_mono();
    }

    fn trigger_release(&mut self) {
        self.source.trigger_release();
    }

    fn completion(&self) -> Completion {
        self.source.completion()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modifiers::Modifier;
    use crate::{ADSREnvelope, Oscillator};

    const EPSILON: f64 = 1e-9;

    fn assert_stereo(sample: Sample, left: f64, right: f64) {
        match sample {
            Sample::Stereo(l, r) => {
                assert!((l - left).abs() < EPSILON, "left {l} != {left}");
                assert!((r - right).abs() < EPSILON, "right {r} != {right}");
            }
            Sample::Mono(v) => panic!("expected a stereo sample, got mono {v}"),
        }
    }

    #[test]
    fn test_pan_positions() {
        let v = 0.3;
        assert_stereo(Panner::new(0.0).unwrap().apply(v.into()), 2.0 * v, 0.0);
        assert_stereo(Panner::new(1.0).unwrap().apply(v.into()), 0.0, 2.0 * v);
        assert_stereo(Panner::new(0.5).unwrap().apply(v.into()), v, v);
    }

    #[test]
    fn test_pan_validation() {
        assert_eq!(Panner::new(1.5).unwrap_err(), Error::InvalidPan(1.5));
        assert!(Panner::new(-0.1).is_err());
    }

    #[test]
    fn test_stereo_input_is_collapsed() {
        let panner = Panner::new(0.75).unwrap();
        assert_stereo(panner.apply(Sample::Stereo(0.2, 0.6)), 0.2, 0.6);
    }

    #[test]
    fn test_modulated_pan_follows_source() {
        let mut panner = ModulatedPanner::new(1.0);
        panner.initialize();
        panner.advance();
        assert_eq!(panner.pan(), 1.0);
        assert_stereo(panner.apply(0.5.into()), 0.0, 1.0);
    }

    #[test]
    fn test_modulated_pan_capability() {
        let lfo = Oscillator::sine(1.0, 44100.0).unwrap();
        let panner = ModulatedPanner::new(lfo);
        assert_eq!(panner.completion(), Completion::Unsupported);

        let env = ADSREnvelope::new(0.0, 0.0, 0.5, 0.0, 44100.0).unwrap();
        let mut panner = ModulatedPanner::new(env);
        panner.initialize();
        panner.advance();
        assert_eq!(panner.completion(), Completion::Running);
        panner.trigger_release();
        panner.advance();
        assert_eq!(panner.completion(), Completion::Ended);
    }
}
