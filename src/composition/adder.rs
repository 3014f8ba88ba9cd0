//! Parallel composition: averaging mixer.

use tracing::debug;

use crate::error::{Error, Result};
use crate::{Completion, Generator, Sample};

/// Mixes N generators by averaging them.
///
/// Every child is pulled once per sample. In stereo mode mono children are
/// duplicated onto both channels and each channel is averaged separately;
/// in mono mode stereo children are collapsed to their mean. The sum is
/// always divided by the number of children, ended or not.
///
/// # Examples
///
/// ```
/// use wavechain::{Generator, Sample};
/// use wavechain::composition::WaveAdder;
///
/// let mut mix = WaveAdder::new(vec![Box::new(0.2_f64), Box::new(0.4_f64)], false).unwrap();
/// mix.initialize();
/// let value = mix.produce().to_mono();
/// assert!((value - 0.3).abs() < 1e-12);
/// ```
pub struct WaveAdder {
    children: Vec<Box<dyn Generator>>,
    stereo: bool,
}

impl WaveAdder {
    /// Creates a mixer.
    ///
    /// # Arguments
    ///
    /// * `children` - The generators to average, pulled in order
    /// * `stereo` - Emit stereo frames instead of mono values
    ///
    /// # Errors
    ///
    /// Fails with [`Error::EmptyMix`] when `children` is empty.
    pub fn new(children: Vec<Box<dyn Generator>>, stereo: bool) -> Result<Self> {
        if children.is_empty() {
            return Err(Error::EmptyMix);
        }
        Ok(Self { children, stereo })
    }

    pub fn is_stereo(&self) -> bool {
        self.stereo
    }

    pub fn len(&self) -> usize {
        self.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }
}

impl Generator for WaveAdder {
    fn initialize(&mut self) {
        debug!(children = self.children.len(), stereo = self.stereo, "initialize wave adder");
        for child in &mut self.children {
            child.initialize();
        }
    }

    fn produce(&mut self) -> Sample {
        let count = self.children.len() as f64;
        if self.stereo {
            let (left, right) = self
                .children
                .iter_mut()
                .map(|child| child.produce().to_stereo())
                .fold((0.0, 0.0), |(l, r), (cl, cr)| (l + cl, r + cr));
            Sample::Stereo(left / count, right / count)
        } else {
            let sum: f64 = self
                .children
                .iter_mut()
                .map(|child| child.produce().to_mono())
                .sum();
            Sample::Mono(sum / count)
        }
    }

    fn trigger_release(&mut self) {
        debug!(children = self.children.len(), "release wave adder");
        for child in &mut self.children {
            child.trigger_release();
        }
    }

    fn completion(&self) -> Completion {
        Completion::all(self.children.iter().map(|child| child.completion()))
    }
}
