//! Mock collaborators for unit tests

use core::cell::Cell;

use crate::traits::{
    ButtonInputs, ButtonLevels, Clock, FeedbackIndicator, LedOutput, MotionDriver, MotorCommand,
};

/// Motor driver that records what it was told
#[derive(Debug, Default)]
pub struct MockMotor {
    pub last: Option<MotorCommand>,
    pub applied: usize,
}

impl MockMotor {
    pub fn new() -> Self {
        Self::default()
    }
}

impl MotionDriver for MockMotor {
    fn apply(&mut self, command: MotorCommand) {
        self.last = Some(command);
        self.applied += 1;
    }
}

/// Manually advanced clock
#[derive(Debug, Default)]
pub struct MockClock {
    now: Cell<u64>,
}

impl MockClock {
    pub fn new(now: u64) -> Self {
        Self {
            now: Cell::new(now),
        }
    }

    pub fn advance(&self, delta: u64) {
        self.now.set(self.now.get() + delta);
    }
}

impl Clock for MockClock {
    fn now_micros(&self) -> u64 {
        self.now.get()
    }
}

/// Buttons whose levels the test sets directly
#[derive(Debug, Default)]
pub struct MockButtons {
    levels: Cell<ButtonLevels>,
}

impl MockButtons {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&self, levels: ButtonLevels) {
        self.levels.set(levels);
    }
}

impl ButtonInputs for &MockButtons {
    fn sample(&mut self) -> ButtonLevels {
        self.levels.get()
    }
}

/// LED pair that records its last output
#[derive(Debug, Default)]
pub struct MockLeds {
    pub last: Option<LedOutput>,
}

impl FeedbackIndicator for MockLeds {
    fn show(&mut self, output: LedOutput) {
        self.last = Some(output);
    }
}
