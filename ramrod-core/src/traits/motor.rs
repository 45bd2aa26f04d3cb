//! Motion driver trait
//!
//! The actuator is a reversible DC motor behind an H-bridge. There is no
//! speed control and no position feedback: the only thing the sequencer
//! can ask for is a direction, or nothing at all.

/// Logical motor command
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum MotorCommand {
    /// Both direction lines low (brake/coast)
    #[default]
    Stop,
    /// Drive the actuator outwards
    DriveOut,
    /// Drive the actuator inwards
    DriveIn,
}

impl MotorCommand {
    /// Check if this command moves the actuator
    pub fn is_moving(&self) -> bool {
        !matches!(self, MotorCommand::Stop)
    }
}

/// Translates logical motor commands into direction outputs
///
/// Implementations hold no state beyond their output pins.
pub trait MotionDriver {
    /// Apply a motor command
    fn apply(&mut self, command: MotorCommand);

    /// Stop the motor
    fn stop(&mut self) {
        self.apply(MotorCommand::Stop);
    }

    /// Drive outwards (extend)
    fn drive_out(&mut self) {
        self.apply(MotorCommand::DriveOut);
    }

    /// Drive inwards (retract)
    fn drive_in(&mut self) {
        self.apply(MotorCommand::DriveIn);
    }
}
