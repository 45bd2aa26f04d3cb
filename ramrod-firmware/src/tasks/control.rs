//! Control loop task
//!
//! Polls buttons and clock, advances the state queue, drives the motor and
//! LEDs, then yields until the next tick. Logs every state change and every
//! button press that changed the plan.

use defmt::*;
use embassy_rp::gpio::{Input, Output};
use embassy_time::{Duration, Ticker};

use ramrod_core::config::MachineConfig;
use ramrod_core::controller::Controller;
use ramrod_drivers::indicator::LedPair;
use ramrod_drivers::input::ButtonPair;
use ramrod_drivers::motor::HBridge;

use crate::clock::EmbassyClock;

/// H-bridge on two GPIO outputs
pub type Motion = HBridge<Output<'static>, Output<'static>>;

/// Green/red button LEDs
pub type Leds = LedPair<Output<'static>, Output<'static>>;

/// Advance/retract buttons
pub type Buttons = ButtonPair<Input<'static>, Input<'static>>;

/// Control task - main polling loop
#[embassy_executor::task]
pub async fn control_task(motion: Motion, leds: Leds, buttons: Buttons, config: MachineConfig) {
    info!("Control task started");

    let mut controller = Controller::new(EmbassyClock, buttons, motion, leds, config.timing);
    let mut ticker = Ticker::every(Duration::from_micros(config.poll.poll_interval_us));

    loop {
        let report = controller.poll();

        if let Some(transition) = report.transition {
            if transition.is_state_change() {
                info!("{=str}", transition.to_line().as_str());
            } else {
                trace!("{} re-armed", transition.to);
            }
        }

        if report.outcome.is_action() {
            let seq = controller.sequencer();
            debug!(
                "Input: {:?} at {}us, queue={:?}, extended={}",
                report.outcome,
                report.now_us,
                seq.queue().as_slice(),
                seq.is_extended()
            );
        }

        ticker.next().await;
    }
}
