//! Button input abstraction

/// Sampled levels of the two pushbuttons
///
/// Levels are logical: `true` means pressed, regardless of how the
/// button is wired.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ButtonLevels {
    /// Advance (green) button
    pub advance: bool,
    /// Retract/abort (red) button
    pub retract: bool,
}

impl ButtonLevels {
    /// Neither button pressed
    pub const RELEASED: Self = Self {
        advance: false,
        retract: false,
    };

    /// Only the advance button pressed
    pub const ADVANCE: Self = Self {
        advance: true,
        retract: false,
    };

    /// Only the retract button pressed
    pub const RETRACT: Self = Self {
        advance: false,
        retract: true,
    };

    /// Both buttons pressed
    pub const BOTH: Self = Self {
        advance: true,
        retract: true,
    };

    /// Check if both buttons are held
    pub fn both(&self) -> bool {
        self.advance && self.retract
    }

    /// Check if any button is held
    pub fn any(&self) -> bool {
        self.advance || self.retract
    }
}

/// Source of button levels, sampled once per loop iteration
pub trait ButtonInputs {
    /// Read both buttons
    fn sample(&mut self) -> ButtonLevels;
}
