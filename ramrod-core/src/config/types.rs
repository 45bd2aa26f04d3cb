//! Configuration type definitions
//!
//! Durations are stored in microseconds, the unit of the clock the
//! sequencer is driven by.

use core::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Microseconds per millisecond
pub const MICROS_PER_MS: u64 = 1_000;

/// Microseconds per second
pub const MICROS_PER_S: u64 = 1_000 * MICROS_PER_MS;

/// Default time spent in `Idle` before the queue is re-examined (1 ms)
pub const DEFAULT_IDLE_US: u64 = MICROS_PER_MS;

/// Default hold time between retract and the next extend (20 minutes)
pub const DEFAULT_COUNTDOWN_US: u64 = 20 * 60 * MICROS_PER_S;

/// Default full-stroke travel time, both directions (12.5 s)
pub const DEFAULT_STROKE_US: u64 = 12_500 * MICROS_PER_MS;

/// Default window after a transition during which buttons are ignored (500 ms)
pub const DEFAULT_LOCKOUT_US: u64 = 500 * MICROS_PER_MS;

/// Default LED blink half-period (1 s on, 1 s off)
pub const DEFAULT_BLINK_PERIOD_US: u64 = MICROS_PER_S;

/// Default end-of-iteration yield for the polling loop (1 ms)
pub const DEFAULT_POLL_INTERVAL_US: u64 = MICROS_PER_MS;

/// Configuration validation errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// A state duration was zero
    ZeroDuration,
    /// The LED blink period was zero
    ZeroBlinkPeriod,
    /// The polling interval was zero
    ZeroPollInterval,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::ZeroDuration => f.write_str("state durations must be non-zero"),
            ConfigError::ZeroBlinkPeriod => f.write_str("blink period must be non-zero"),
            ConfigError::ZeroPollInterval => f.write_str("poll interval must be non-zero"),
        }
    }
}

/// Per-state durations and input timing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TimingConfig {
    /// Duration of `Idle`
    pub idle_us: u64,
    /// Duration of `Countdown`
    pub countdown_us: u64,
    /// Duration of `Extending` and `Retracting`
    pub stroke_us: u64,
    /// Button lockout after entering any state other than `Idle`
    pub lockout_us: u64,
    /// LED blink half-period
    pub blink_period_us: u64,
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            idle_us: DEFAULT_IDLE_US,
            countdown_us: DEFAULT_COUNTDOWN_US,
            stroke_us: DEFAULT_STROKE_US,
            lockout_us: DEFAULT_LOCKOUT_US,
            blink_period_us: DEFAULT_BLINK_PERIOD_US,
        }
    }
}

impl TimingConfig {
    /// Check that every duration is usable
    ///
    /// The lockout may be zero (no lockout); nothing else may.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.idle_us == 0 || self.countdown_us == 0 || self.stroke_us == 0 {
            return Err(ConfigError::ZeroDuration);
        }
        if self.blink_period_us == 0 {
            return Err(ConfigError::ZeroBlinkPeriod);
        }
        Ok(())
    }
}

/// Button wiring
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct InputConfig {
    /// Buttons pull the pin low when pressed (internal pull-up enabled)
    pub active_low: bool,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self { active_low: true }
    }
}

/// Polling loop settings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LoopConfig {
    /// Yield at the end of every iteration
    pub poll_interval_us: u64,
}

impl Default for LoopConfig {
    fn default() -> Self {
        Self {
            poll_interval_us: DEFAULT_POLL_INTERVAL_US,
        }
    }
}

/// Complete machine configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MachineConfig {
    pub timing: TimingConfig,
    pub input: InputConfig,
    pub poll: LoopConfig,
}

impl MachineConfig {
    /// Validate all sections
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.timing.validate()?;
        if self.poll.poll_interval_us == 0 {
            return Err(ConfigError::ZeroPollInterval);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_timing() {
        let timing = TimingConfig::default();
        assert_eq!(timing.idle_us, 1_000);
        assert_eq!(timing.countdown_us, 1_200_000_000);
        assert_eq!(timing.stroke_us, 12_500_000);
        assert_eq!(timing.lockout_us, 500_000);
        assert_eq!(timing.blink_period_us, 1_000_000);
        assert!(timing.validate().is_ok());
    }

    #[test]
    fn test_zero_durations_rejected() {
        let timing = TimingConfig {
            stroke_us: 0,
            ..TimingConfig::default()
        };
        assert_eq!(timing.validate(), Err(ConfigError::ZeroDuration));

        let timing = TimingConfig {
            blink_period_us: 0,
            ..TimingConfig::default()
        };
        assert_eq!(timing.validate(), Err(ConfigError::ZeroBlinkPeriod));
    }

    #[test]
    fn test_zero_lockout_allowed() {
        let timing = TimingConfig {
            lockout_us: 0,
            ..TimingConfig::default()
        };
        assert!(timing.validate().is_ok());
    }

    #[test]
    fn test_zero_poll_interval_rejected() {
        let mut config = MachineConfig::default();
        config.poll.poll_interval_us = 0;
        assert_eq!(config.validate(), Err(ConfigError::ZeroPollInterval));
    }
}
