//! Embassy time driver as the sequencer clock

use embassy_time::Instant;
use ramrod_core::traits::Clock;

/// Microseconds since boot from the RP2040 timer
pub struct EmbassyClock;

impl Clock for EmbassyClock {
    fn now_micros(&self) -> u64 {
        Instant::now().as_micros()
    }
}
