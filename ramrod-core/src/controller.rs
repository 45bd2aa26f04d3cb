//! One iteration of the polling loop
//!
//! Ties the sequencer to its collaborators. The firmware calls
//! [`Controller::poll`] once per loop iteration and yields between calls;
//! everything inside an iteration sees the same timestamp.

use crate::config::TimingConfig;
use crate::sequencer::{InputOutcome, Sequencer, Transition};
use crate::traits::{ButtonInputs, Clock, FeedbackIndicator, LedOutput, MotionDriver};

/// What happened during one poll
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PollReport {
    /// Clock reading used for the whole iteration
    pub now_us: u64,
    /// Queue advance, if the active state expired
    pub transition: Option<Transition>,
    /// LED levels written this iteration
    pub leds: LedOutput,
    /// How the button sample was handled
    pub outcome: InputOutcome,
}

/// Main controller
///
/// Owns the sequencer and all hardware collaborators.
pub struct Controller<C, B, M, F> {
    clock: C,
    buttons: B,
    motion: M,
    indicator: F,
    sequencer: Sequencer,
}

impl<C, B, M, F> Controller<C, B, M, F>
where
    C: Clock,
    B: ButtonInputs,
    M: MotionDriver,
    F: FeedbackIndicator,
{
    /// Create a new controller
    ///
    /// The motor is stopped and the LEDs blanked before the sequencer
    /// starts.
    pub fn new(
        clock: C,
        buttons: B,
        mut motion: M,
        mut indicator: F,
        timing: TimingConfig,
    ) -> Self {
        motion.stop();
        indicator.show(LedOutput::OFF);
        let sequencer = Sequencer::new(clock.now_micros(), timing);

        Self {
            clock,
            buttons,
            motion,
            indicator,
            sequencer,
        }
    }

    /// Run one loop iteration
    ///
    /// Order: sample buttons, read the clock, advance the queue if due,
    /// drive the LEDs, then let the input policy plan ahead.
    pub fn poll(&mut self) -> PollReport {
        let buttons = self.buttons.sample();
        let now_us = self.clock.now_micros();

        let transition = self.sequencer.advance_if_due(now_us, &mut self.motion);

        let leds = self.sequencer.render_feedback(now_us);
        self.indicator.show(leds);

        let outcome = self.sequencer.apply_input(now_us, buttons);

        PollReport {
            now_us,
            transition,
            leds,
            outcome,
        }
    }

    /// Get the sequencer
    pub fn sequencer(&self) -> &Sequencer {
        &self.sequencer
    }

    /// Get the motion driver
    pub fn motion(&self) -> &M {
        &self.motion
    }

    /// Get the feedback indicator
    pub fn indicator(&self) -> &F {
        &self.indicator
    }
}
