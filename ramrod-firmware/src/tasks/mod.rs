//! Embassy async tasks
//!
//! The whole controller is one cooperative polling task; nothing else
//! touches the sequencer.

pub mod control;

pub use control::control_task;
