//! Serial composition: one generator followed by modifiers.

use std::iter;

use tracing::debug;

use crate::modifiers::Modifier;
use crate::{Completion, Generator, Sample};

/// A generator followed by an ordered list of modifiers.
///
/// Each sample the generator is pulled first, then every modifier advances
/// its own source, and finally the modifiers are applied in the order they
/// were added, each receiving the previous one's output.
///
/// # Examples
///
/// ```
/// use wavechain::{Generator, Sample};
/// use wavechain::composition::Chain;
/// use wavechain::modifiers::{Panner, Volume};
///
/// let mut chain = Chain::new(0.5)
///     .with_modifier(Volume::new(0.5))
///     .with_modifier(Panner::new(1.0).unwrap());
/// chain.initialize();
/// assert_eq!(chain.produce(), Sample::Stereo(0.0, 0.5));
/// ```
pub struct Chain {
    generator: Box<dyn Generator>,
    modifiers: Vec<Box<dyn Modifier>>,
}

impl Chain {
    pub fn new(generator: impl Generator + 'static) -> Self {
        Self {
            generator: Box::new(generator),
            modifiers: Vec::new(),
        }
    }

    /// Appends a modifier to the end of the chain.
    pub fn with_modifier(mut self, modifier: impl Modifier + 'static) -> Self {
        self.modifiers.push(Box::new(modifier));
        self
    }

    pub fn len(&self) -> usize {
        self.modifiers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.modifiers.is_empty()
    }

    fn stateful(&mut self) -> impl Iterator<Item = &mut Box<dyn Modifier>> {
        self.modifiers
            .iter_mut()
            .filter(|modifier| modifier.carries_state())
    }
}

impl Generator for Chain {
    fn initialize(&mut self) {
        debug!(modifiers = self.modifiers.len(), "initialize chain");
        self.generator.initialize();
        for modifier in self.stateful() {
            modifier.initialize();
        }
    }

    fn produce(&mut self) -> Sample {
        let input = self.generator.produce();
        for modifier in self.stateful() {
            modifier.advance();
        }
        self.modifiers
            .iter()
            .fold(input, |sample, modifier| modifier.apply(sample))
    }

    fn trigger_release(&mut self) {
        debug!("release chain");
        self.generator.trigger_release();
        for modifier in self.stateful() {
            modifier.trigger_release();
        }
    }

    fn completion(&self) -> Completion {
        Completion::all(
            iter::once(self.generator.completion())
                .chain(
                    self.modifiers
                        .iter()
                        .filter(|modifier| modifier.carries_state())
                        .map(|modifier| modifier.completion()),
                ),
        )
    }
}
