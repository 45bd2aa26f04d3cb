//! Ramrod - Linear Actuator Sequencer Firmware
//!
//! Main firmware binary for RP2040-based actuator controllers.
//! Two illuminated pushbuttons drive a reversible DC actuator through an
//! H-bridge; all timing is open-loop.

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_rp::gpio::{Input, Level, Output, Pull};
use {defmt_rtt as _, panic_probe as _};

use ramrod_drivers::indicator::LedPair;
use ramrod_drivers::input::ButtonPair;
use ramrod_drivers::motor::HBridge;

mod clock;
mod config;
mod tasks;

/// Main entry point
#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("Ramrod firmware starting...");

    // Initialize RP2040 peripherals
    let p = embassy_rp::init(Default::default());
    info!("Peripherals initialized");

    let config = config::load_config();

    // H-bridge direction lines start low (motor stopped)
    let motion = HBridge::new(
        Output::new(p.PIN_12, Level::Low),
        Output::new(p.PIN_13, Level::Low),
    );

    // Button LEDs, active-high
    let leds = LedPair::new_active_high(
        Output::new(p.PIN_14, Level::Low),
        Output::new(p.PIN_16, Level::Low),
    );

    // Green (advance) and red (retract/abort) buttons
    let pull = if config.input.active_low {
        Pull::Up
    } else {
        Pull::Down
    };
    let buttons = ButtonPair::new(
        Input::new(p.PIN_15, pull),
        Input::new(p.PIN_17, pull),
        config.input.active_low,
    );

    spawner
        .spawn(tasks::control_task(motion, leds, buttons, config))
        .unwrap();

    info!("Control task spawned, firmware running");
}
