//! Mono and stereo sample values.

/// One output sample: either a single value or a stereo frame.
///
/// Composition nodes reconcile the two shapes deterministically: mono
/// values are broadcast to both channels, stereo frames collapse to the
/// mean of their channels.
///
/// # Examples
///
/// ```
/// use wavechain::Sample;
///
/// assert_eq!(Sample::Mono(0.5).to_stereo(), (0.5, 0.5));
/// assert_eq!(Sample::Stereo(1.0, 0.0).to_mono(), 0.5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Sample {
    Mono(f64),
    Stereo(f64, f64),
}

impl Sample {
    /// Collapses the sample to a single value (mean of both channels).
    pub fn to_mono(self) -> f64 {
        match self {
            Sample::Mono(v) => v,
            Sample::Stereo(l, r) => (l + r) / 2.0,
        }
    }

    /// Expands the sample to a `(left, right)` pair.
    pub fn to_stereo(self) -> (f64, f64) {
        match self {
            Sample::Mono(v) => (v, v),
            Sample::Stereo(l, r) => (l, r),
        }
    }

    /// Multiplies every channel by `gain`, keeping the shape.
    pub fn scale(self, gain: f64) -> Sample {
        match self {
            Sample::Mono(v) => Sample::Mono(v * gain),
            Sample::Stereo(l, r) => Sample::Stereo(l * gain, r * gain),
        }
    }

    pub fn is_stereo(&self) -> bool {
        matches!(self, Sample::Stereo(..))
    }

    /// Largest absolute channel value.
    pub fn peak(self) -> f64 {
        match self {
            Sample::Mono(v) => v.abs(),
            Sample::Stereo(l, r) => l.abs().max(r.abs()),
        }
    }
}

impl From<f64> for Sample {
    fn from(value: f64) -> Self {
        Sample::Mono(value)
    }
}

impl From<(f64, f64)> for Sample {
    fn from((left, right): (f64, f64)) -> Self {
        Sample::Stereo(left, right)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mono_broadcast() {
        assert_eq!(Sample::Mono(-0.25).to_stereo(), (-0.25, -0.25));
        assert_eq!(Sample::Mono(-0.25).to_mono(), -0.25);
    }

    #[test]
    fn test_stereo_mean() {
        assert_eq!(Sample::Stereo(0.2, 0.6).to_mono(), 0.4);
    }

    #[test]
    fn test_scale_keeps_shape() {
        assert_eq!(Sample::Mono(0.5).scale(2.0), Sample::Mono(1.0));
        assert_eq!(
            Sample::Stereo(0.5, -0.25).scale(2.0),
            Sample::Stereo(1.0, -0.5)
        );
    }

    #[test]
    fn test_peak() {
        assert_eq!(Sample::Stereo(0.3, -0.9).peak(), 0.9);
        assert_eq!(Sample::Mono(-0.4).peak(), 0.4);
    }

    #[test]
    fn test_conversions() {
        assert_eq!(Sample::from(0.1), Sample::Mono(0.1));
        assert_eq!(Sample::from((0.1, 0.2)), Sample::Stereo(0.1, 0.2));
        assert!(Sample::from((0.1, 0.2)).is_stereo());
    }
}
