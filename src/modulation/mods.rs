//! Ready-made modulation functions.
//!
//! Each returns a closure taking `(base, m)`, where `base` is the
//! oscillator's initial parameter value and `m` the modulation value.

/// `base · m`. With an envelope source this is the usual amplitude envelope.
///
/// ```
/// let f = wavechain::modulation::mods::scale();
/// assert_eq!(f(0.5, 0.5), 0.25);
/// ```
pub fn scale() -> impl Fn(f64, f64) -> f64 {
    |base, m| base * m
}

/// `base + m`
pub fn offset() -> impl Fn(f64, f64) -> f64 {
    |base, m| base + m
}

/// Deviation around `center`: `base + (m − center) · base · depth`.
///
/// Fed by an envelope with `center` at its sustain level, the parameter
/// sits at `base` while sustaining and swings by `depth` relative to it
/// during the other stages.
///
/// ```
/// let f = wavechain::modulation::mods::track(0.01, 0.7);
/// assert_eq!(f(100.0, 0.7), 100.0);
/// assert!((f(100.0, 1.0) - 100.3).abs() < 1e-9);
/// ```
pub fn track(depth: f64, center: f64) -> impl Fn(f64, f64) -> f64 {
    move |base, m| base + (m - center) * base * depth
}
