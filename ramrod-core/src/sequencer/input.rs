//! Button input policy
//!
//! Interprets the two buttons in the context of the active state. The
//! policy only plans the future: it rewrites queue slots 1.. and may pull
//! the active state's deadline in, but it never replaces slot 0.

use super::executor::Sequencer;
use crate::state::State;
use crate::traits::ButtonLevels;

/// What the input policy did with a button sample
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum InputOutcome {
    /// No button combination applies to the active state
    Ignored,
    /// A button was held during the post-transition lockout
    LockedOut,
    /// Idle single press: one stroke towards the other end
    Toggle(State),
    /// Idle advance press: full extend, retract, hold, extend cycle
    StartCycle,
    /// Both buttons during countdown: skip the rest of the hold
    CutShort,
    /// Stop the current stroke and drop everything scheduled
    Abort,
    /// Stop the current stroke and run one stroke the other way
    Reverse(State),
}

impl InputOutcome {
    /// Check if the queue or deadline was changed
    pub fn is_action(&self) -> bool {
        !matches!(self, InputOutcome::Ignored | InputOutcome::LockedOut)
    }
}

impl Sequencer {
    /// Check if button input is currently suppressed
    ///
    /// The lockout applies for `lockout_us` after any advance into a state
    /// other than `Idle`, so the press that started a state is not read
    /// again as a command inside it.
    pub fn in_lockout(&self, now_us: u64) -> bool {
        self.active() != State::Idle
            && now_us.saturating_sub(self.last_transition_us()) < self.timing().lockout_us
    }

    /// Apply one button sample
    pub fn apply_input(&mut self, now_us: u64, buttons: ButtonLevels) -> InputOutcome {
        if self.in_lockout(now_us) {
            return if buttons.any() {
                InputOutcome::LockedOut
            } else {
                InputOutcome::Ignored
            };
        }

        match self.active() {
            State::Idle => self.idle_input(buttons),
            State::Countdown => {
                if buttons.both() {
                    self.cut_short(now_us);
                    InputOutcome::CutShort
                } else {
                    InputOutcome::Ignored
                }
            }
            State::Extending => {
                self.stroke_input(now_us, buttons.advance, buttons.retract, State::Retracting)
            }
            State::Retracting => {
                self.stroke_input(now_us, buttons.retract, buttons.advance, State::Extending)
            }
        }
    }

    fn idle_input(&mut self, buttons: ButtonLevels) -> InputOutcome {
        if buttons.retract {
            let target = if self.is_extended() {
                State::Retracting
            } else {
                State::Extending
            };
            self.queue_mut().schedule(&[target]);
            InputOutcome::Toggle(target)
        } else if buttons.advance {
            let first = if self.is_extended() {
                State::Idle
            } else {
                State::Extending
            };
            self.queue_mut().schedule(&[
                first,
                State::Retracting,
                State::Countdown,
                State::Extending,
            ]);
            InputOutcome::StartCycle
        } else {
            InputOutcome::Ignored
        }
    }

    /// Shared policy for both stroke directions
    ///
    /// `abort` stops where the actuator is; `reverse` stops and schedules
    /// one stroke in the `opposite` direction.
    fn stroke_input(
        &mut self,
        now_us: u64,
        abort: bool,
        reverse: bool,
        opposite: State,
    ) -> InputOutcome {
        if abort {
            self.cut_short(now_us);
            self.queue_mut().schedule(&[]);
            InputOutcome::Abort
        } else if reverse {
            self.cut_short(now_us);
            self.queue_mut().schedule(&[opposite]);
            InputOutcome::Reverse(opposite)
        } else {
            InputOutcome::Ignored
        }
    }
}
