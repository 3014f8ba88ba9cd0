//! Renders a four-voice composition to a 16-bit stereo WAV file.
//!
//! Usage: `cargo run --example prelude [output.wav]`

use std::path::PathBuf;

use tracing::{Level, info};
use wavechain::composition::{Chain, WaveAdder};
use wavechain::modifiers::Panner;
use wavechain::modulation::mods;
use wavechain::render::{duration_samples, render};
use wavechain::{
    ADSREnvelope, EnvelopeParams, Generator, ModulatedOscillator, Oscillator, OscillatorParams,
    Waveform,
};

const SAMPLE_RATE: f64 = 44100.0;
const SECONDS: f64 = 4.0;
const OUTPUT_AMPLITUDE: f64 = 0.1;

const A2: f64 = 110.0;
const E3: f64 = 164.81;
const C4: f64 = 261.63;

fn voice(
    waveform: Waveform,
    frequency: f64,
    envelope: EnvelopeParams,
) -> anyhow::Result<ModulatedOscillator> {
    let params = OscillatorParams::default()
        .with_frequency(frequency)
        .with_sample_rate(SAMPLE_RATE);
    let voice = ModulatedOscillator::builder(Oscillator::new(waveform, params)?)
        .source(ADSREnvelope::from_params(envelope)?)
        .amplitude_mod(mods::scale())
        .build()?;
    Ok(voice)
}

fn composition() -> anyhow::Result<WaveAdder> {
    let pluck = EnvelopeParams::default()
        .with_attack(0.01)
        .with_decay(0.1)
        .with_sustain_level(0.4);
    let swell = EnvelopeParams::default().with_attack(0.5);

    let children: Vec<Box<dyn Generator>> = vec![
        Box::new(voice(Waveform::Sine, A2, pluck)?),
        // a few hertz off for a slow beat against the first voice
        Box::new(voice(Waveform::Sine, A2 + 3.0, pluck)?),
        Box::new(Chain::new(voice(Waveform::Triangle, C4, swell)?).with_modifier(Panner::new(0.7)?)),
        Box::new(Chain::new(voice(Waveform::Triangle, E3, swell)?).with_modifier(Panner::new(0.3)?)),
    ];
    Ok(WaveAdder::new(children, true)?)
}

fn to_i16(value: f64) -> i16 {
    (value * OUTPUT_AMPLITUDE * f64::from(i16::MAX)).clamp(f64::from(i16::MIN), f64::from(i16::MAX))
        as i16
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt().with_max_level(Level::DEBUG).init();

    let path = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("prelude.wav"));

    let mut mix = composition()?;
    let rendered = render(&mut mix, duration_samples(SAMPLE_RATE, SECONDS)?);
    info!(samples = rendered.len(), peak = rendered.peak(), "rendered");

    let spec = hound::WavSpec {
        channels: 2,
        sample_rate: SAMPLE_RATE as u32,
        bits_per_sample: 16,
        sample_format: hound::SampleFormat::Int,
    };
    let mut writer = hound::WavWriter::create(&path, spec)?;
    for sample in rendered.samples() {
        let (left, right) = sample.to_stereo();
        writer.write_sample(to_i16(left))?;
        writer.write_sample(to_i16(right))?;
    }
    writer.finalize()?;

    info!(path = %path.display(), "wrote wav");
    Ok(())
}
