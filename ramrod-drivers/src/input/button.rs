//! Advance/retract pushbutton pair
//!
//! Buttons are sampled raw, once per loop iteration. Contact bounce is
//! absorbed by the sequencer's post-transition lockout rather than here.

use core::convert::Infallible;

use embedded_hal::digital::InputPin;
use ramrod_core::traits::{ButtonInputs, ButtonLevels};

use crate::pin;

/// Two pushbuttons read as logical pressed/released levels
pub struct ButtonPair<A, R> {
    advance: A,
    retract: R,
    /// Pressed = pin LOW (switch to ground with pull-up)
    active_low: bool,
}

impl<A, R> ButtonPair<A, R>
where
    A: InputPin<Error = Infallible>,
    R: InputPin<Error = Infallible>,
{
    /// Create a new button pair
    pub fn new(advance: A, retract: R, active_low: bool) -> Self {
        Self {
            advance,
            retract,
            active_low,
        }
    }

    fn pressed<P: InputPin<Error = Infallible>>(pin: &mut P, active_low: bool) -> bool {
        pin::read(pin) != active_low
    }
}

impl<A, R> ButtonInputs for ButtonPair<A, R>
where
    A: InputPin<Error = Infallible>,
    R: InputPin<Error = Infallible>,
{
    fn sample(&mut self) -> ButtonLevels {
        ButtonLevels {
            advance: Self::pressed(&mut self.advance, self.active_low),
            retract: Self::pressed(&mut self.retract, self.active_low),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::MockInput;

    #[test]
    fn test_active_low_buttons() {
        // Pulled up: released reads high
        let advance = MockInput::new(true);
        let retract = MockInput::new(true);
        let mut buttons = ButtonPair::new(&advance, &retract, true);

        assert_eq!(buttons.sample(), ButtonLevels::RELEASED);

        advance.set_high(false);
        assert_eq!(buttons.sample(), ButtonLevels::ADVANCE);

        retract.set_high(false);
        assert_eq!(buttons.sample(), ButtonLevels::BOTH);

        advance.set_high(true);
        assert_eq!(buttons.sample(), ButtonLevels::RETRACT);
    }

    #[test]
    fn test_active_high_buttons() {
        let advance = MockInput::new(false);
        let retract = MockInput::new(true);
        let mut buttons = ButtonPair::new(&advance, &retract, false);

        assert_eq!(buttons.sample(), ButtonLevels::RETRACT);
    }
}
