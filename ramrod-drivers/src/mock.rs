//! Mock GPIO pins for testing

use core::cell::{Cell, RefCell};
use core::convert::Infallible;

use embedded_hal::digital::{ErrorType, InputPin, OutputPin};

/// Output pin that records its level and every write
#[derive(Debug, Default)]
pub struct MockOutput {
    high: bool,
    pub writes: usize,
}

impl MockOutput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_set_high(&self) -> bool {
        self.high
    }
}

impl ErrorType for MockOutput {
    type Error = Infallible;
}

impl OutputPin for MockOutput {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        self.high = false;
        self.writes += 1;
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        self.high = true;
        self.writes += 1;
        Ok(())
    }
}

/// Input pin whose level the test controls
#[derive(Debug, Default)]
pub struct MockInput {
    high: Cell<bool>,
}

impl MockInput {
    pub fn new(high: bool) -> Self {
        Self {
            high: Cell::new(high),
        }
    }

    pub fn set_high(&self, high: bool) {
        self.high.set(high);
    }
}

impl ErrorType for &MockInput {
    type Error = Infallible;
}

impl InputPin for &MockInput {
    fn is_high(&mut self) -> Result<bool, Self::Error> {
        Ok(self.high.get())
    }

    fn is_low(&mut self) -> Result<bool, Self::Error> {
        Ok(!self.high.get())
    }
}

/// Output pin that appends its writes to a shared log, for ordering checks
pub struct LoggedOutput<'a> {
    pub name: char,
    pub log: &'a RefCell<Vec<(char, bool)>>,
}

impl ErrorType for LoggedOutput<'_> {
    type Error = Infallible;
}

impl OutputPin for LoggedOutput<'_> {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        self.log.borrow_mut().push((self.name, false));
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        self.log.borrow_mut().push((self.name, true));
        Ok(())
    }
}
