//! State definition and profile table
//!
//! All motor and LED behavior is a function of the active state and the
//! time remaining in it.

use core::fmt;

use crate::config::TimingConfig;
use crate::traits::{LedOutput, MotorCommand};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Actuator states
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum State {
    /// Motor stopped, waiting for a button press
    #[default]
    Idle,
    /// Motor stopped, holding before the next scheduled motion
    Countdown,
    /// Driving outwards for one full stroke
    Extending,
    /// Driving inwards for one full stroke
    Retracting,
}

/// How one LED follows the blink phase
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LedDrive {
    /// Always dark
    Off,
    /// Lit during odd seconds
    InPhase,
    /// Lit during even seconds
    OutOfPhase,
}

impl LedDrive {
    /// Level for the given blink phase
    pub fn level(self, phase: bool) -> bool {
        match self {
            LedDrive::Off => false,
            LedDrive::InPhase => phase,
            LedDrive::OutOfPhase => !phase,
        }
    }
}

/// LED behavior for one state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct LedRule {
    pub green: LedDrive,
    pub red: LedDrive,
}

impl LedRule {
    /// Resolve the rule for a blink phase
    pub fn render(&self, phase: bool) -> LedOutput {
        LedOutput {
            green: self.green.level(phase),
            red: self.red.level(phase),
        }
    }
}

/// Everything the sequencer needs to know about a state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct StateProfile {
    /// Nominal time spent in the state
    pub duration_us: u64,
    /// Motor output while the state is active
    pub motor: MotorCommand,
    /// LED output while the state is active
    pub leds: LedRule,
}

impl State {
    /// Look up duration, motor command and LED rule for this state
    pub fn profile(self, timing: &TimingConfig) -> StateProfile {
        use LedDrive::*;

        match self {
            State::Idle => StateProfile {
                duration_us: timing.idle_us,
                motor: MotorCommand::Stop,
                leds: LedRule { green: Off, red: Off },
            },
            State::Countdown => StateProfile {
                duration_us: timing.countdown_us,
                motor: MotorCommand::Stop,
                leds: LedRule {
                    green: InPhase,
                    red: OutOfPhase,
                },
            },
            State::Extending => StateProfile {
                duration_us: timing.stroke_us,
                motor: MotorCommand::DriveOut,
                leds: LedRule {
                    green: InPhase,
                    red: Off,
                },
            },
            State::Retracting => StateProfile {
                duration_us: timing.stroke_us,
                motor: MotorCommand::DriveIn,
                leds: LedRule {
                    green: Off,
                    red: InPhase,
                },
            },
        }
    }

    /// Check if the motor runs in this state
    pub fn is_motion(&self) -> bool {
        matches!(self, State::Extending | State::Retracting)
    }

    /// Upper-case name used in diagnostic output
    pub fn name(&self) -> &'static str {
        match self {
            State::Idle => "IDLE",
            State::Countdown => "COUNTDOWN",
            State::Extending => "EXTENDING",
            State::Retracting => "RETRACTING",
        }
    }
}

impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
