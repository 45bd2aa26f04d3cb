//! Monotonic time source

/// Monotonic microsecond clock
///
/// Readings never decrease. Wrap-around at the integer range is not
/// handled; a `u64` of microseconds outlasts the hardware.
pub trait Clock {
    /// Current timestamp in microseconds since an arbitrary epoch
    fn now_micros(&self) -> u64;
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now_micros(&self) -> u64 {
        (**self).now_micros()
    }
}
