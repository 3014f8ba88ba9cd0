//! ADSR (Attack, Decay, Sustain, Release) envelope generator.

use tracing::{debug, trace};

use crate::error::{Error, Result, check_duration, check_sample_rate};
use crate::{Completion, Generator, Sample};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Stage of the ADSR envelope.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnvelopeStage {
    /// Ramping from 0 towards 1
    Attack,
    /// Ramping from 1 towards the sustain level
    Decay,
    /// Holding the sustain level until released
    Sustain,
    /// Ramping from the captured level to 0
    Release,
    /// Release finished; the envelope outputs 0 from now on
    Ended,
}

/// Timing and level parameters of an [`ADSREnvelope`].
///
/// Durations are in seconds. A zero duration skips its stage.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct EnvelopeParams {
    pub attack: f64,
    pub decay: f64,
    /// Sustain level, 0.0 to 1.0
    pub sustain_level: f64,
    pub release: f64,
    pub sample_rate: f64,
}

impl Default for EnvelopeParams {
    fn default() -> Self {
        Self {
            attack: 0.05,
            decay: 0.2,
            sustain_level: 0.7,
            release: 0.3,
            sample_rate: 44100.0,
        }
    }
}

impl EnvelopeParams {
    pub fn with_attack(mut self, seconds: f64) -> Self {
        self.attack = seconds;
        self
    }

    pub fn with_decay(mut self, seconds: f64) -> Self {
        self.decay = seconds;
        self
    }

    pub fn with_sustain_level(mut self, level: f64) -> Self {
        self.sustain_level = level;
        self
    }

    pub fn with_release(mut self, seconds: f64) -> Self {
        self.release = seconds;
        self
    }

    pub fn with_sample_rate(mut self, sample_rate: f64) -> Self {
        self.sample_rate = sample_rate;
        self
    }

    pub fn validate(&self) -> Result<()> {
        check_sample_rate(self.sample_rate)?;
        check_duration("attack", self.attack)?;
        check_duration("decay", self.decay)?;
        check_duration("release", self.release)?;
        if !(0.0..=1.0).contains(&self.sustain_level) {
            return Err(Error::InvalidSustainLevel(self.sustain_level));
        }
        Ok(())
    }
}

/// ADSR envelope generator.
///
/// Generates a control signal in `[0, 1]` with linear segments:
/// - **Attack**: rises by `1 / (attack · sample_rate)` per sample until it
///   reaches 1
/// - **Decay**: falls by `(1 − sustain) / (decay · sample_rate)` per sample
///   until it reaches the sustain level
/// - **Sustain**: holds the sustain level until [`trigger_release`] is called
/// - **Release**: falls linearly from the value held when it was triggered
///   to 0 over the release time, after which the envelope has ended
///
/// [`trigger_release`]: Generator::trigger_release
///
/// # Examples
///
/// ```
/// use wavechain::{ADSREnvelope, Generator};
///
/// // 10ms attack, 50ms decay, 70% sustain, 100ms release
/// let mut env = ADSREnvelope::new(0.01, 0.05, 0.7, 0.1, 44100.0).unwrap();
/// env.initialize();
/// for _ in 0..1000 {
///     let level = env.produce().to_mono();
///     assert!((0.0..=1.0).contains(&level));
/// }
///
/// env.trigger_release();
/// while !env.has_ended() {
///     env.produce();
/// }
/// ```
#[derive(Debug, Clone)]
pub struct ADSREnvelope {
    params: EnvelopeParams,
    stage: EnvelopeStage,
    value: f64,        // last emitted value
    cursor: f64,       // next value of the active ramp
    release_step: f64, // per-sample decrement captured at release
}

impl ADSREnvelope {
    /// Creates an envelope.
    ///
    /// # Arguments
    ///
    /// * `attack` - Attack time in seconds (0 skips the stage)
    /// * `decay` - Decay time in seconds (0 skips the stage)
    /// * `sustain_level` - Sustain level, 0.0 to 1.0
    /// * `release` - Release time in seconds (0 ends on the next sample)
    /// * `sample_rate` - Sample rate in Hz
    ///
    /// # Errors
    ///
    /// Fails on a negative duration, a sustain level outside `[0, 1]` or a
    /// non-positive sample rate.
    pub fn new(
        attack: f64,
        decay: f64,
        sustain_level: f64,
        release: f64,
        sample_rate: f64,
    ) -> Result<Self> {
        Self::from_params(EnvelopeParams {
            attack,
            decay,
            sustain_level,
            release,
            sample_rate,
        })
    }

    pub fn from_params(params: EnvelopeParams) -> Result<Self> {
        params.validate()?;
        let mut envelope = Self {
            params,
            stage: EnvelopeStage::Attack,
            value: 0.0,
            cursor: 0.0,
            release_step: 0.0,
        };
        envelope.enter_attack();
        Ok(envelope)
    }

    pub fn params(&self) -> &EnvelopeParams {
        &self.params
    }

    pub fn stage(&self) -> EnvelopeStage {
        self.stage
    }

    /// The most recently produced value.
    pub fn value(&self) -> f64 {
        self.value
    }

    fn set_stage(&mut self, stage: EnvelopeStage) {
        trace!(from = ?self.stage, to = ?stage, value = self.value, "envelope stage change");
        self.stage = stage;
    }

    fn enter_attack(&mut self) {
        if self.params.attack > 0.0 {
            self.set_stage(EnvelopeStage::Attack);
            self.cursor = 0.0;
        } else {
            self.enter_decay();
        }
    }

    fn enter_decay(&mut self) {
        if self.params.decay > 0.0 {
            self.set_stage(EnvelopeStage::Decay);
            self.cursor = 1.0;
        } else {
            self.set_stage(EnvelopeStage::Sustain);
        }
    }

    fn attack_step(&self) -> f64 {
        1.0 / (self.params.attack * self.params.sample_rate)
    }

    fn decay_step(&self) -> f64 {
        (1.0 - self.params.sustain_level) / (self.params.decay * self.params.sample_rate)
    }

    fn advance(&mut self) -> f64 {
        // A zero-length stage falls through to the next one within the same sample.
        loop {
            match self.stage {
                EnvelopeStage::Attack if self.cursor < 1.0 => {
                    self.value = self.cursor;
                    self.cursor += self.attack_step();
                    break;
                }
                EnvelopeStage::Attack => self.enter_decay(),
                EnvelopeStage::Decay if self.cursor > self.params.sustain_level => {
                    self.value = self.cursor;
                    self.cursor -= self.decay_step();
                    break;
                }
                EnvelopeStage::Decay => self.set_stage(EnvelopeStage::Sustain),
                EnvelopeStage::Sustain => {
                    self.value = self.params.sustain_level;
                    break;
                }
                EnvelopeStage::Release if self.value <= 0.0 => {
                    self.value = 0.0;
                    self.set_stage(EnvelopeStage::Ended);
                    break;
                }
                EnvelopeStage::Release => {
                    self.value = self.cursor.max(0.0);
                    self.cursor -= self.release_step;
                    break;
                }
                EnvelopeStage::Ended => {
                    self.value = 0.0;
                    break;
                }
            }
        }
        self.value
    }
}

impl Generator for ADSREnvelope {
    fn initialize(&mut self) {
        self.value = 0.0;
        self.release_step = 0.0;
        self.enter_attack();
    }

    fn produce(&mut self) -> Sample {
        Sample::Mono(self.advance())
    }

    /// Switches to the release stage, ramping down from the current value.
    ///
    /// The value captured is whatever the envelope last produced, so
    /// releasing during attack or decay ramps down from that level rather
    /// than from the sustain level. Has no effect once the envelope ended.
    fn trigger_release(&mut self) {
        if self.stage == EnvelopeStage::Ended {
            return;
        }
        debug!(value = self.value, stage = ?self.stage, "envelope release");
        if self.params.release > 0.0 {
            self.cursor = self.value;
            self.release_step = self.value / (self.params.release * self.params.sample_rate);
        } else {
            self.value = 0.0;
            self.cursor = 0.0;
            self.release_step = 0.0;
        }
        self.set_stage(EnvelopeStage::Release);
    }

    fn completion(&self) -> Completion {
        Completion::from_ended(self.stage == EnvelopeStage::Ended)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE_RATE: f64 = 100.0;
    const EPSILON: f64 = 1e-6;

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < EPSILON
    }

    fn envelope(attack: f64, decay: f64, sustain: f64, release: f64) -> ADSREnvelope {
        let mut env = ADSREnvelope::new(attack, decay, sustain, release, SAMPLE_RATE).unwrap();
        env.initialize();
        env
    }

    fn next(env: &mut ADSREnvelope) -> f64 {
        env.produce().to_mono()
    }

    #[test]
    fn test_creation() {
        let env = ADSREnvelope::new(0.1, 0.2, 0.7, 0.3, SAMPLE_RATE).unwrap();
        assert_eq!(env.stage(), EnvelopeStage::Attack);
        assert_eq!(env.value(), 0.0);
        assert!(!env.has_ended());
        assert_eq!(env.completion(), Completion::Running);
    }

    #[test]
    fn test_configuration_errors() {
        assert_eq!(
            ADSREnvelope::new(-0.1, 0.2, 0.7, 0.3, SAMPLE_RATE).unwrap_err(),
            Error::NegativeDuration {
                stage: "attack",
                seconds: -0.1
            }
        );
        assert!(ADSREnvelope::new(0.1, -0.2, 0.7, 0.3, SAMPLE_RATE).is_err());
        assert!(ADSREnvelope::new(0.1, 0.2, 0.7, -0.3, SAMPLE_RATE).is_err());
        assert_eq!(
            ADSREnvelope::new(0.1, 0.2, 1.5, 0.3, SAMPLE_RATE).unwrap_err(),
            Error::InvalidSustainLevel(1.5)
        );
        assert_eq!(
            ADSREnvelope::new(0.1, 0.2, 0.7, 0.3, 0.0).unwrap_err(),
            Error::InvalidSampleRate(0.0)
        );
    }

    #[test]
    fn test_defaults() {
        let params = EnvelopeParams::default();
        assert_eq!(params.attack, 0.05);
        assert_eq!(params.decay, 0.2);
        assert_eq!(params.sustain_level, 0.7);
        assert_eq!(params.release, 0.3);
        assert!(ADSREnvelope::from_params(params).is_ok());
    }

    #[test]
    fn test_instant_envelope() {
        let mut env = envelope(0.0, 0.0, 1.0, 0.0);
        assert_eq!(next(&mut env), 1.0);
        assert_eq!(env.stage(), EnvelopeStage::Sustain);

        env.trigger_release();
        assert_eq!(next(&mut env), 0.0);
        assert!(env.has_ended());
    }

    #[test]
    fn test_attack_phase_linear() {
        let mut env = envelope(1.0, 0.0, 1.0, 0.0);

        assert_eq!(next(&mut env), 0.0);
        for _ in 0..49 {
            next(&mut env);
        }
        assert!(approx_eq(next(&mut env), 0.5));
        assert_eq!(env.stage(), EnvelopeStage::Attack);

        for _ in 0..100 {
            let level = next(&mut env);
            assert!((0.0..=1.0).contains(&level));
        }
        assert_eq!(env.stage(), EnvelopeStage::Sustain);
        assert_eq!(next(&mut env), 1.0);
    }

    #[test]
    fn test_decay_phase_linear() {
        let mut env = envelope(0.0, 1.0, 0.5, 0.0);

        // Attack is skipped, decay starts at the peak
        assert_eq!(next(&mut env), 1.0);
        assert_eq!(env.stage(), EnvelopeStage::Decay);
        assert!(approx_eq(next(&mut env), 0.995));

        let mut sample_count = 0;
        while env.stage() == EnvelopeStage::Decay && sample_count < 200 {
            let level = next(&mut env);
            assert!(level >= 0.5);
            sample_count += 1;
        }
        assert_eq!(env.stage(), EnvelopeStage::Sustain);
        assert!(sample_count > 90 && sample_count < 110);
        assert!(approx_eq(next(&mut env), 0.5));
    }

    #[test]
    fn test_zero_decay_jumps_to_sustain() {
        let mut env = envelope(0.05, 0.0, 0.4, 0.0);
        for _ in 0..5 {
            assert!(next(&mut env) < 1.0);
        }
        assert_eq!(next(&mut env), 0.4);
        assert_eq!(env.stage(), EnvelopeStage::Sustain);
    }

    #[test]
    fn test_sustain_holds() {
        let mut env = envelope(0.0, 0.0, 0.6, 0.0);
        for _ in 0..100 {
            assert!(approx_eq(next(&mut env), 0.6));
        }
        assert_eq!(env.stage(), EnvelopeStage::Sustain);
        assert!(!env.has_ended());
    }

    #[test]
    fn test_release_phase_linear() {
        let mut env = envelope(0.0, 0.0, 0.8, 1.0);
        next(&mut env);

        env.trigger_release();
        assert_eq!(env.stage(), EnvelopeStage::Release);

        // The first release sample is the captured level
        assert!(approx_eq(next(&mut env), 0.8));
        for _ in 0..49 {
            next(&mut env);
        }
        assert!(approx_eq(next(&mut env), 0.4));

        let mut previous = env.value();
        let mut guard = 0;
        while !env.has_ended() && guard < 200 {
            let level = next(&mut env);
            assert!(level <= previous && level >= 0.0);
            previous = level;
            guard += 1;
        }
        assert!(env.has_ended());
        assert_eq!(next(&mut env), 0.0);
        assert_eq!(env.stage(), EnvelopeStage::Ended);
    }

    #[test]
    fn test_ended_one_sample_after_reaching_zero() {
        let mut env = envelope(0.0, 0.0, 1.0, 0.1);
        next(&mut env);
        env.trigger_release();

        let mut reached_zero = false;
        for _ in 0..100 {
            let level = next(&mut env);
            if reached_zero {
                assert!(env.has_ended());
                break;
            }
            assert!(!env.has_ended());
            reached_zero = level == 0.0;
        }
        assert!(env.has_ended());
    }

    #[test]
    fn test_release_during_attack_captures_current_value() {
        let mut env = envelope(1.0, 0.1, 0.7, 0.5);
        for _ in 0..11 {
            next(&mut env);
        }
        assert_eq!(env.stage(), EnvelopeStage::Attack);
        let level_before_release = env.value();
        assert!(approx_eq(level_before_release, 0.1));

        env.trigger_release();
        assert!(approx_eq(next(&mut env), level_before_release));
        // 50 samples of release from 0.1
        assert!(approx_eq(next(&mut env), 0.1 - 0.1 / 50.0));
    }

    #[test]
    fn test_release_during_decay_captures_current_value() {
        let mut env = envelope(0.0, 1.0, 0.5, 0.5);
        for _ in 0..11 {
            next(&mut env);
        }
        assert_eq!(env.stage(), EnvelopeStage::Decay);
        let level_before_release = env.value();

        env.trigger_release();
        assert!(approx_eq(next(&mut env), level_before_release));
    }

    #[test]
    fn test_release_before_first_sample_ends_immediately() {
        let mut env = envelope(0.1, 0.1, 0.7, 0.3);
        env.trigger_release();
        assert_eq!(next(&mut env), 0.0);
        assert!(env.has_ended());
    }

    #[test]
    fn test_zero_release_time() {
        let mut env = envelope(0.0, 0.0, 0.7, 0.0);
        next(&mut env);
        env.trigger_release();
        assert!(!env.has_ended());
        assert_eq!(next(&mut env), 0.0);
        assert!(env.has_ended());
    }

    #[test]
    fn test_advancing_past_end_stays_at_zero() {
        let mut env = envelope(0.0, 0.0, 0.7, 0.0);
        next(&mut env);
        env.trigger_release();
        for _ in 0..10 {
            assert_eq!(next(&mut env), 0.0);
        }
        env.trigger_release();
        assert!(env.has_ended());
        assert_eq!(next(&mut env), 0.0);
    }

    #[test]
    fn test_initialize_restarts() {
        let mut env = envelope(0.1, 0.1, 0.6, 0.1);
        let reference: Vec<f64> = (0..40).map(|_| next(&mut env)).collect();
        env.trigger_release();
        for _ in 0..40 {
            next(&mut env);
        }
        assert!(env.has_ended());

        env.initialize();
        assert_eq!(env.stage(), EnvelopeStage::Attack);
        assert!(!env.has_ended());
        let again: Vec<f64> = (0..40).map(|_| next(&mut env)).collect();
        assert_eq!(reference, again);
    }

    #[test]
    fn test_full_envelope_cycle() {
        let mut env = envelope(0.1, 0.1, 0.6, 0.1);

        for _ in 0..10 {
            let level = next(&mut env);
            assert!((0.0..=1.0).contains(&level));
        }
        for _ in 0..12 {
            let level = next(&mut env);
            assert!((0.6..=1.0).contains(&level));
        }
        assert_eq!(env.stage(), EnvelopeStage::Sustain);

        for _ in 0..20 {
            assert!(approx_eq(next(&mut env), 0.6));
        }

        env.trigger_release();
        for _ in 0..11 {
            let level = next(&mut env);
            assert!((0.0..=0.6).contains(&level));
        }
        for _ in 0..2 {
            next(&mut env);
        }
        assert!(env.has_ended());
        assert_eq!(next(&mut env), 0.0);
    }
}
