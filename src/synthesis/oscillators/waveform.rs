//! The closed set of periodic waveforms.

use std::f64::consts::TAU;

use super::OutputRange;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Periodic function evaluated by an [`Oscillator`](super::Oscillator).
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Waveform {
    Sine,
    /// A thresholded sine: emits the range maximum while the sine is at or
    /// above `threshold` and the minimum otherwise. A threshold of 0 gives
    /// a 50% duty cycle.
    Square { threshold: f64 },
    Sawtooth,
    Triangle,
}

impl Waveform {
    /// A square wave with a 50% duty cycle.
    pub fn square() -> Self {
        Waveform::Square { threshold: 0.0 }
    }

    /// Whether the waveform is timed by a sample counter over the current
    /// period rather than a running phase.
    pub(crate) fn counts_samples(&self) -> bool {
        matches!(self, Waveform::Sawtooth | Waveform::Triangle)
    }

    /// Converts a phase in degrees into the offset this waveform adds to
    /// the accumulator: radians for sine-based shapes, cycles for the
    /// sawtooth family. The sawtooth family is shifted by a quarter cycle
    /// so a triangle at 0° starts at 0 and rises.
    pub(crate) fn phase_offset(&self, degrees: f64) -> f64 {
        match self {
            Waveform::Sine | Waveform::Square { .. } => degrees.to_radians(),
            Waveform::Sawtooth | Waveform::Triangle => (degrees + 90.0) / 360.0,
        }
    }

    /// Evaluates the waveform at `position` (in cycles) and maps the result
    /// into `range`. Amplitude is applied by the caller.
    pub(crate) fn evaluate(&self, position: f64, offset: f64, range: &OutputRange) -> f64 {
        match *self {
            Waveform::Sine => range.map((TAU * position + offset).sin()),
            Waveform::Square { threshold } => {
                if (TAU * position + offset).sin() < threshold {
                    range.min
                } else {
                    range.max
                }
            }
            Waveform::Sawtooth => range.map(sawtooth(position + offset)),
            Waveform::Triangle => range.map((sawtooth(position + offset).abs() - 0.5) * 2.0),
        }
    }
}

fn sawtooth(div: f64) -> f64 {
    2.0 * (div - (0.5 + div).floor())
}
