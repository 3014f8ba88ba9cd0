//! Composition nodes.
//!
//! [`Chain`] runs one generator through modifiers in series and
//! [`WaveAdder`] mixes several generators in parallel. Both are generators
//! themselves, so trees nest freely.

mod adder;
mod chain;

pub use adder::WaveAdder;
pub use chain::Chain;
