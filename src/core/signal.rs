//! Core generator trait and the release/ended capability.
//!
//! Every node of a composition tree, leaf oscillator or nested mixer,
//! implements [`Generator`]. Evaluation is pull-based: the caller invokes
//! [`Generator::initialize`] once and then [`Generator::produce`] once per
//! output sample, and each node pulls from its children before combining.

use super::Sample;

/// Whether a node can be released and, if so, whether it has finished.
///
/// Nodes that cannot be released report [`Completion::Unsupported`]. When a
/// composite node aggregates its children with [`Completion::all`], those
/// children are left out of the conjunction instead of counting as ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Completion {
    /// The node has no release capability.
    Unsupported,
    /// The node supports release and is still sounding.
    Running,
    /// The node supports release and has finished.
    Ended,
}

impl Completion {
    /// Builds a capable completion state from an `ended` flag.
    pub fn from_ended(ended: bool) -> Self {
        if ended {
            Completion::Ended
        } else {
            Completion::Running
        }
    }

    /// Capability conjunction over a set of children.
    ///
    /// Returns `Ended` only when at least one child is capable and every
    /// capable child has ended, `Running` when some capable child is still
    /// running, and `Unsupported` when no child is capable.
    ///
    /// # Examples
    ///
    /// ```
    /// use wavechain::Completion;
    ///
    /// let states = [Completion::Ended, Completion::Unsupported];
    /// assert_eq!(Completion::all(states), Completion::Ended);
    ///
    /// let states = [Completion::Unsupported, Completion::Unsupported];
    /// assert_eq!(Completion::all(states), Completion::Unsupported);
    /// ```
    pub fn all(states: impl IntoIterator<Item = Completion>) -> Completion {
        let mut result = Completion::Unsupported;
        for state in states {
            match state {
                Completion::Unsupported => {}
                Completion::Running => return Completion::Running,
                Completion::Ended => result = Completion::Ended,
            }
        }
        result
    }

    /// True for `Running` and `Ended`, the states of a releasable node.
    pub fn is_supported(self) -> bool {
        self != Completion::Unsupported
    }
}

/// Common interface for every node of a composition tree.
///
/// The release capability is optional: the default `trigger_release` does
/// nothing and the default `completion` reports
/// [`Completion::Unsupported`], so a plain oscillator needs to implement
/// only `initialize` and `produce`.
pub trait Generator {
    /// Resets all internal state. Idempotent, may be called repeatedly.
    fn initialize(&mut self);

    /// Advances exactly one sample and returns it.
    fn produce(&mut self) -> Sample;

    /// Starts the release phase of this node and its descendants.
    fn trigger_release(&mut self) {}

    /// Release capability and state of this node.
    fn completion(&self) -> Completion {
        Completion::Unsupported
    }

    /// True once the node and all of its capable descendants have ended.
    ///
    /// Nodes without the capability always read `false`.
    fn has_ended(&self) -> bool {
        self.completion() == Completion::Ended
    }

    /// Produces a run of samples into `buffer`.
    fn process(&mut self, buffer: &mut [Sample]) {
        for sample in buffer.iter_mut() {
            *sample = self.produce();
        }
    }
}

/// A constant value is a generator that never changes.
///
/// ```
/// use wavechain::{Generator, Sample};
///
/// let mut dc = 0.25_f64;
/// assert_eq!(dc.produce(), Sample::Mono(0.25));
/// ```
impl Generator for f64 {
    fn initialize(&mut self) {}

    fn produce(&mut self) -> Sample {
        Sample::Mono(*self)
    }
}

impl<G: Generator + ?Sized> Generator for Box<G> {
    fn initialize(&mut self) {
        (**self).initialize()
    }

    fn produce(&mut self) -> Sample {
        (**self).produce()
    }

    fn trigger_release(&mut self) {
        (**self).trigger_release()
    }

    fn completion(&self) -> Completion {
        (**self).completion()
    }

    fn process(&mut self, buffer: &mut [Sample]) {
        (**self).process(buffer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_ignores_unsupported() {
        let states = [
            Completion::Unsupported,
            Completion::Ended,
            Completion::Unsupported,
        ];
        assert_eq!(Completion::all(states), Completion::Ended);
    }

    #[test]
    fn test_all_running_wins() {
        let states = [Completion::Ended, Completion::Running, Completion::Ended];
        assert_eq!(Completion::all(states), Completion::Running);
    }

    #[test]
    fn test_all_empty() {
        assert_eq!(Completion::all([]), Completion::Unsupported);
    }

    #[test]
    fn test_from_ended() {
        assert_eq!(Completion::from_ended(true), Completion::Ended);
        assert_eq!(Completion::from_ended(false), Completion::Running);
        assert!(Completion::Running.is_supported());
        assert!(!Completion::Unsupported.is_supported());
    }

    #[test]
    fn test_constant_has_no_capability() {
        let mut constant = 0.5_f64;
        constant.trigger_release();
        assert_eq!(constant.completion(), Completion::Unsupported);
        assert!(!constant.has_ended());
    }

    #[test]
    fn test_process_buffer() {
        let mut constant = 0.5_f64;
        let mut buffer = vec![Sample::Mono(0.0); 4];
        constant.process(&mut buffer);
        assert!(buffer.iter().all(|s| *s == Sample::Mono(0.5)));
    }

    #[test]
    fn test_boxed_generator_forwards() {
        let mut boxed: Box<dyn Generator> = Box::new(0.75_f64);
        boxed.initialize();
        assert_eq!(boxed.produce(), Sample::Mono(0.75));
        assert_eq!(boxed.completion(), Completion::Unsupported);
    }
}
