//! Queue advancement and output rendering

use core::fmt::{self, Write};

use heapless::String;

use crate::config::{TimingConfig, MICROS_PER_S};
use crate::state::{State, StateQueue};
use crate::traits::{LedOutput, MotionDriver};

/// Capacity of a rendered transition line
///
/// Fits the longest possible line: two 10-character state names, a
/// `u64::MAX` duration and the interrupted suffix.
pub const TRANSITION_LINE_LEN: usize = 96;

/// Record of one queue advance
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Transition {
    /// State that expired
    pub from: State,
    /// New active state
    pub to: State,
    /// Nominal duration of the new state
    pub duration_us: u64,
    /// Timestamp of the advance
    pub at_us: u64,
    /// The expired state was cut short by input
    pub interrupted: bool,
}

impl Transition {
    /// Check if the active state actually changed
    ///
    /// `Idle` re-arming itself every millisecond is not worth logging.
    pub fn is_state_change(&self) -> bool {
        self.from != self.to
    }

    /// Render the transition as a single line of text
    pub fn to_line(&self) -> String<TRANSITION_LINE_LEN> {
        let mut line = String::new();
        // Cannot fail: the capacity covers the longest line
        write!(line, "{}", self).ok();
        line
    }
}

impl fmt::Display for Transition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let secs = self.duration_us / MICROS_PER_S;
        let hundredths = (self.duration_us % MICROS_PER_S) / 10_000;
        write!(
            f,
            "State transition: {} -> {} for {}.{:02} seconds",
            self.from, self.to, secs, hundredths
        )?;
        if self.interrupted {
            f.write_str(" (interrupted)")?;
        }
        Ok(())
    }
}

/// State sequencer
///
/// Tracks the queue of pending states, when the active one expires, and
/// the believed actuator position. Position is open-loop: it is latched
/// only when an `Extending` or `Retracting` state runs to completion. A
/// stroke whose deadline was pulled in by input leaves it unchanged.
#[derive(Debug, Clone)]
pub struct Sequencer {
    /// Pending states, slot 0 active
    queue: StateQueue,
    /// When the active state expires
    next_transition_us: u64,
    /// When the queue last advanced
    last_transition_us: u64,
    /// Believed position
    is_extended: bool,
    /// Active state's deadline was pulled in by input
    interrupted: bool,
    /// Durations and lockout
    timing: TimingConfig,
}

impl Sequencer {
    /// Create an idle sequencer
    ///
    /// Both deadlines start at `now`, so the first call to
    /// [`advance_if_due`](Self::advance_if_due) applies `Idle` to the motor.
    pub fn new(now_us: u64, timing: TimingConfig) -> Self {
        Self::with_state(StateQueue::new(), now_us, now_us, false, timing)
    }

    /// Create a sequencer in an arbitrary state
    pub fn with_state(
        queue: StateQueue,
        next_transition_us: u64,
        last_transition_us: u64,
        is_extended: bool,
        timing: TimingConfig,
    ) -> Self {
        Self {
            queue,
            next_transition_us,
            last_transition_us,
            is_extended,
            interrupted: false,
            timing,
        }
    }

    /// Get the active state
    pub fn active(&self) -> State {
        self.queue.active()
    }

    /// Get the state queue
    pub fn queue(&self) -> &StateQueue {
        &self.queue
    }

    pub fn next_transition_us(&self) -> u64 {
        self.next_transition_us
    }

    pub fn last_transition_us(&self) -> u64 {
        self.last_transition_us
    }

    /// Get the believed actuator position
    pub fn is_extended(&self) -> bool {
        self.is_extended
    }

    /// Check if the active state has been cut short
    pub fn is_interrupted(&self) -> bool {
        self.interrupted
    }

    /// Get the timing configuration
    pub fn timing(&self) -> &TimingConfig {
        &self.timing
    }

    /// Time left in the active state, zero once overdue
    pub fn remaining_us(&self, now_us: u64) -> u64 {
        self.next_transition_us.saturating_sub(now_us)
    }

    /// Advance the queue if the active state has expired
    ///
    /// Latches the position if a stroke completed, pops the queue, drives
    /// the motor for the new active state and arms the next deadline.
    /// Returns `None` when the active state has not yet expired.
    pub fn advance_if_due<M: MotionDriver>(
        &mut self,
        now_us: u64,
        motion: &mut M,
    ) -> Option<Transition> {
        if now_us < self.next_transition_us {
            return None;
        }

        let interrupted = core::mem::take(&mut self.interrupted);
        let from = self.queue.pop();
        if !interrupted {
            match from {
                State::Extending => self.is_extended = true,
                State::Retracting => self.is_extended = false,
                State::Idle | State::Countdown => {}
            }
        }

        let to = self.queue.active();
        let profile = to.profile(&self.timing);
        motion.apply(profile.motor);

        self.next_transition_us = now_us.saturating_add(profile.duration_us);
        self.last_transition_us = now_us;

        Some(Transition {
            from,
            to,
            duration_us: profile.duration_us,
            at_us: now_us,
            interrupted,
        })
    }

    /// Compute the LED levels for the active state
    ///
    /// The blink phase toggles every `blink_period_us` of remaining time.
    pub fn render_feedback(&self, now_us: u64) -> LedOutput {
        let remaining = self.remaining_us(now_us);
        let phase = (remaining / self.timing.blink_period_us.max(1)) % 2 == 1;
        self.active().profile(&self.timing).leds.render(phase)
    }

    /// End the active state early
    ///
    /// The queue advances after at most one `Idle` duration; slot 0 itself
    /// is left for the executor to replace. A deadline that is already
    /// sooner is kept, so a held button cannot postpone the advance.
    pub(super) fn cut_short(&mut self, now_us: u64) {
        let deadline = now_us.saturating_add(self.timing.idle_us);
        self.next_transition_us = self.next_transition_us.min(deadline);
        self.interrupted = true;
    }

    pub(super) fn queue_mut(&mut self) -> &mut StateQueue {
        &mut self.queue
    }
}
