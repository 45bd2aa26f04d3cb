//! Green/red LED pair
//!
//! The LEDs can be wired active-high (default) or active-low, in which
//! case a lit LED means the pin is driven low.

use core::convert::Infallible;

use embedded_hal::digital::OutputPin;
use ramrod_core::traits::{FeedbackIndicator, LedOutput};

use crate::pin;

/// Two-LED feedback indicator
pub struct LedPair<G, R> {
    green: G,
    red: R,
    /// If true, LED on = pin LOW
    inverted: bool,
}

impl<G, R> LedPair<G, R>
where
    G: OutputPin<Error = Infallible>,
    R: OutputPin<Error = Infallible>,
{
    /// Create a new LED pair, both LEDs off
    pub fn new(green: G, red: R, inverted: bool) -> Self {
        let mut leds = Self { green, red, inverted };
        leds.show(LedOutput::OFF);
        leds
    }

    /// Create an LED pair lit by driving the pins high
    pub fn new_active_high(green: G, red: R) -> Self {
        Self::new(green, red, false)
    }

    /// Create an LED pair lit by driving the pins low
    pub fn new_active_low(green: G, red: R) -> Self {
        Self::new(green, red, true)
    }

    /// Consume the indicator and return its pins
    pub fn release(self) -> (G, R) {
        (self.green, self.red)
    }
}

impl<G, R> FeedbackIndicator for LedPair<G, R>
where
    G: OutputPin<Error = Infallible>,
    R: OutputPin<Error = Infallible>,
{
    fn show(&mut self, output: LedOutput) {
        pin::write(&mut self.green, output.green != self.inverted);
        pin::write(&mut self.red, output.red != self.inverted);
    }
}
