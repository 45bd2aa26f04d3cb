//! Actuator states and the pending-state queue
//!
//! Every behavior of a state (how long it lasts, what the motor does,
//! how the LEDs blink) comes from one table, [`State::profile`].

pub mod machine;
pub mod queue;

pub use machine::{LedDrive, LedRule, State, StateProfile};
pub use queue::{StateQueue, QUEUE_LEN};
