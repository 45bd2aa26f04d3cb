//! Time-driven state sequencer
//!
//! Owns the state queue and its deadlines. The executor advances the
//! queue when the active state expires; the input policy plans future
//! states from button presses. Only the executor ever changes the active
//! state.

pub mod executor;
pub mod input;

#[cfg(test)]
mod proptests;

pub use executor::{Sequencer, Transition};
pub use input::InputOutcome;
