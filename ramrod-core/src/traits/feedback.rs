//! Status LED abstraction

/// Desired levels of the two status LEDs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct LedOutput {
    /// Green LED lit
    pub green: bool,
    /// Red LED lit
    pub red: bool,
}

impl LedOutput {
    /// Both LEDs dark
    pub const OFF: Self = Self {
        green: false,
        red: false,
    };
}

/// Driver for the green/red feedback LEDs
pub trait FeedbackIndicator {
    /// Drive both LEDs to the given levels
    fn show(&mut self, output: LedOutput);
}
