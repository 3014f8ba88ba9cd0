//! Envelope generators for controlling parameter changes over time.

mod adsr;

pub use adsr::{ADSREnvelope, EnvelopeParams, EnvelopeStage};
