//! Board-agnostic core logic for the actuator controller
//!
//! This crate contains all application logic that does not depend on
//! specific hardware implementations:
//!
//! - Collaborator traits (clock, buttons, motion driver, feedback LEDs)
//! - State tag and its authoritative duration/motor/LED table
//! - State queue and the time-driven sequencer
//! - Button input policy
//! - One-iteration control loop
//! - Configuration types and the `machine.toml` parser

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod config;
pub mod controller;
pub mod sequencer;
pub mod state;
pub mod traits;

#[cfg(test)]
mod testing;
