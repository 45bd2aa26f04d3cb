//! Helpers for pins that cannot fail

use core::convert::Infallible;

use embedded_hal::digital::{InputPin, OutputPin, PinState};

/// Drive an output pin to a level
pub(crate) fn write<P: OutputPin<Error = Infallible>>(pin: &mut P, high: bool) {
    match pin.set_state(PinState::from(high)) {
        Ok(()) => {}
        Err(never) => match never {},
    }
}

/// Read an input pin level
pub(crate) fn read<P: InputPin<Error = Infallible>>(pin: &mut P) -> bool {
    match pin.is_high() {
        Ok(high) => high,
        Err(never) => match never {},
    }
}
