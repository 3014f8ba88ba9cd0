//! Per-sample transforms applied by a [`Chain`](crate::composition::Chain).
//!
//! [`Panner`] and [`Volume`] are pure functions of the incoming sample.
//! [`ModulatedPanner`] and [`ModulatedVolume`] own a modulation source and
//! refresh their coefficient from it every sample.

mod pan;
mod volume;

pub use pan::{ModulatedPanner, Panner};
pub use volume::{ModulatedVolume, Volume};

use crate::{Completion, Sample};

/// A transform from one sample to the next stage of a chain.
///
/// Modifiers that own a generator return `true` from `carries_state` and
/// override the lifecycle hooks, so the owning chain can reset, advance
/// and release that generator together with its own source. The defaults
/// make a modifier stateless.
pub trait Modifier {
    /// Transforms one sample.
    fn apply(&self, input: Sample) -> Sample;

    /// Whether the modifier owns a generator the chain has to drive.
    fn carries_state(&self) -> bool {
        false
    }

    /// Resets any owned generator.
    fn initialize(&mut self) {}

    /// Pulls one sample from any owned generator. Called once per chain
    /// sample, before any modifier is applied.
    fn advance(&mut self) {}

    fn trigger_release(&mut self) {}

    fn completion(&self) -> Completion {
        Completion::Unsupported
    }
}

impl<M: Modifier + ?Sized> Modifier for Box<M> {
    fn apply(&self, input: Sample) -> Sample {
        (**self).apply(input)
    }

    fn carries_state(&self) -> bool {
        (**self).carries_state()
    }

    fn initialize(&mut self) {
        (**self).initialize()
    }

    fn advance(&mut self) {
        (**self).advance()
    }

    fn trigger_release(&mut self) {
        (**self).trigger_release()
    }

    fn completion(&self) -> Completion {
        (**self).completion()
    }
}
