//! Hardware abstraction traits
//!
//! These traits define the interface between the sequencing logic
//! and hardware-specific implementations.

pub mod clock;
pub mod feedback;
pub mod input;
pub mod motor;

pub use clock::Clock;
pub use feedback::{FeedbackIndicator, LedOutput};
pub use input::{ButtonInputs, ButtonLevels};
pub use motor::{MotionDriver, MotorCommand};
