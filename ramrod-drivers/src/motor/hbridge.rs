//! H-bridge direction driver
//!
//! Drives a reversible DC motor through the two input lines of an
//! H-bridge (L298N, DRV8871, relay pair, ...):
//!
//! | Command    | Line A | Line B |
//! |------------|--------|--------|
//! | `Stop`     | low    | low    |
//! | `DriveOut` | low    | high   |
//! | `DriveIn`  | high   | low    |
//!
//! The line that goes low is always written first, so a reversal never
//! passes through both lines high.
//!
//! # Usage
//!
//! ```ignore
//! let mut bridge = HBridge::new(dir_a, dir_b);
//! bridge.drive_out();
//! // ...
//! bridge.stop();
//! ```

use core::convert::Infallible;

use embedded_hal::digital::OutputPin;
use ramrod_core::traits::{MotionDriver, MotorCommand};

use crate::pin;

/// Two-line H-bridge motion driver
///
/// Holds nothing but its pins; the command in force is whatever the lines
/// currently read.
pub struct HBridge<A, B> {
    dir_a: A,
    dir_b: B,
}

impl<A, B> HBridge<A, B>
where
    A: OutputPin<Error = Infallible>,
    B: OutputPin<Error = Infallible>,
{
    /// Create a new H-bridge driver
    ///
    /// Both lines are driven low immediately.
    pub fn new(dir_a: A, dir_b: B) -> Self {
        let mut bridge = Self { dir_a, dir_b };
        bridge.stop();
        bridge
    }

    /// Consume the driver and return its pins
    pub fn release(self) -> (A, B) {
        (self.dir_a, self.dir_b)
    }
}

impl<A, B> MotionDriver for HBridge<A, B>
where
    A: OutputPin<Error = Infallible>,
    B: OutputPin<Error = Infallible>,
{
    fn apply(&mut self, command: MotorCommand) {
        match command {
            MotorCommand::Stop => {
                pin::write(&mut self.dir_a, false);
                pin::write(&mut self.dir_b, false);
            }
            MotorCommand::DriveOut => {
                pin::write(&mut self.dir_a, false);
                pin::write(&mut self.dir_b, true);
            }
            MotorCommand::DriveIn => {
                pin::write(&mut self.dir_b, false);
                pin::write(&mut self.dir_a, true);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::{LoggedOutput, MockOutput};
    use core::cell::RefCell;

    fn levels(bridge: HBridge<MockOutput, MockOutput>) -> (bool, bool) {
        let (a, b) = bridge.release();
        (a.is_set_high(), b.is_set_high())
    }

    #[test]
    fn test_starts_stopped() {
        let mut a = MockOutput::new();
        a.set_high().unwrap();
        let bridge = HBridge::new(a, MockOutput::new());
        assert_eq!(levels(bridge), (false, false));
    }

    #[test]
    fn test_command_table() {
        let mut bridge = HBridge::new(MockOutput::new(), MockOutput::new());
        bridge.drive_out();
        assert_eq!(levels(bridge), (false, true));

        let mut bridge = HBridge::new(MockOutput::new(), MockOutput::new());
        bridge.drive_in();
        assert_eq!(levels(bridge), (true, false));

        let mut bridge = HBridge::new(MockOutput::new(), MockOutput::new());
        bridge.drive_in();
        bridge.stop();
        assert_eq!(levels(bridge), (false, false));
    }

    #[test]
    fn test_reversal_never_drives_both_high() {
        let log = RefCell::new(Vec::new());
        let mut bridge = HBridge::new(
            LoggedOutput { name: 'a', log: &log },
            LoggedOutput { name: 'b', log: &log },
        );

        bridge.drive_out();
        bridge.drive_in();
        bridge.drive_out();

        let mut a = false;
        let mut b = false;
        for (name, high) in log.borrow().iter().copied() {
            match name {
                'a' => a = high,
                _ => b = high,
            }
            assert!(!(a && b), "both bridge lines high");
        }
        assert!(!a && b);
    }
}
