//! Configuration loading
//!
//! The machine configuration is compiled into the image from
//! `machine.toml` and parsed at boot. build.rs runs the same parser on the
//! host, so a file it rejects fails the build. Should parsing still fail
//! at boot, the built-in defaults are used.

use defmt::*;

use ramrod_core::config::{parse_config, MachineConfig};

/// Embedded configuration (compiled into firmware)
/// Edit machine.toml and rebuild to customize
const EMBEDDED_CONFIG: &str = include_str!("../machine.toml");

/// Parse the embedded configuration, or fall back to defaults
pub fn load_config() -> MachineConfig {
    let config = match parse_config(EMBEDDED_CONFIG) {
        Ok(config) => config,
        Err(e) => {
            warn!("machine.toml rejected: {:?}, using defaults", e);
            MachineConfig::default()
        }
    };

    let timing = &config.timing;
    info!(
        "Timing: stroke={}ms countdown={}s lockout={}ms idle={}us",
        timing.stroke_us / 1_000,
        timing.countdown_us / 1_000_000,
        timing.lockout_us / 1_000,
        timing.idle_us
    );
    info!(
        "Input: active_low={}, poll every {}us",
        config.input.active_low, config.poll.poll_interval_us
    );

    config
}
